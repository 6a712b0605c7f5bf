//! Headless countdown: drive one full cycle, print each update.

use std::error::Error;

use alphatimer_core::{format_display, Event, Locale, TimerView, INITIAL_SECS};

pub async fn run(locale: Locale, json: bool) -> Result<(), Box<dyn Error>> {
    let mut view = TimerView::new(locale);
    // Subscribe before pressing so the started event is not missed.
    let mut events = view.source().events();
    view.press_start();

    loop {
        let event = events.recv().await?;
        if json {
            println!("{}", event.to_json()?);
        } else if let Event::Tick { remaining_secs, .. } = &event {
            println!("{}", format_display(*remaining_secs));
        }
        if event.is_completed() {
            if !json {
                println!("{}", format_display(INITIAL_SECS));
            }
            break;
        }
    }

    view.dispose();
    Ok(())
}
