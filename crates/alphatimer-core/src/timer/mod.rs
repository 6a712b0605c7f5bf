mod countdown;
mod source;

pub use countdown::{Countdown, CountdownState, TickOutcome, INITIAL_SECS};
pub use source::TickSource;
