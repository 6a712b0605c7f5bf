//! One-shot dump of the idle view frame.

use std::error::Error;

use alphatimer_core::{Locale, TimerView};

pub fn run(locale: Locale) -> Result<(), Box<dyn Error>> {
    let view = TimerView::new(locale);
    println!("{}", serde_json::to_string_pretty(&view.frame())?);
    Ok(())
}
