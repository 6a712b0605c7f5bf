use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Every observable change of the countdown produces an `Event`.
///
/// The terminal front end subscribes and prints them; tests assert on the
/// emitted sequence. Only the latest remaining value matters to renderers,
/// so the stream is best-effort (lagging subscribers skip, never block).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    CountdownStarted {
        duration_secs: u8,
        at: DateTime<Utc>,
    },
    Tick {
        remaining_secs: u8,
        at: DateTime<Utc>,
    },
    CountdownCompleted {
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn is_completed(&self) -> bool {
        matches!(self, Event::CountdownCompleted { .. })
    }

    /// Single-line JSON, the shape the `ticks --json` stream prints.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_serializes_with_type_tag() {
        let event = Event::Tick {
            remaining_secs: 3,
            at: Utc::now(),
        };
        let json = event.to_json().unwrap();
        assert!(json.contains("\"type\":\"Tick\""));
        assert!(json.contains("\"remaining_secs\":3"));
    }

    #[test]
    fn completed_is_detected() {
        let event = Event::CountdownCompleted { at: Utc::now() };
        assert!(event.is_completed());
    }
}
