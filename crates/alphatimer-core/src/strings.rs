//! Localized UI strings.
//!
//! Stand-in for a platform resource lookup; the card only needs the label
//! of the start control.

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    /// Parse a BCP 47-ish tag ("en", "ja").
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ja" => Ok(Locale::Ja),
            _ => Err(CoreError::UnknownLocale(tag.to_string())),
        }
    }
}

/// Label of the start control. The view uppercases it for display.
pub fn start_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Start",
        Locale::Ja => "開始",
    }
}
