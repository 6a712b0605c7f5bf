//! Interactive countdown card.
//!
//! One select loop drives everything: the repaint interval samples the bar
//! animation, the watch stream logs observed ticks, stdin lines press the
//! start control, Ctrl-C tears down.

use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time;
use tracing::{debug, info};

use alphatimer_core::{Locale, TimerView};

use crate::surface::CardSurface;

pub async fn run(locale: Locale, fps: u32) -> Result<(), Box<dyn Error>> {
    let mut view = TimerView::new(locale);
    let mut values = view.values();
    let mut surface = CardSurface::new(io::stdout(), Instant::now())?;

    let period = Duration::from_millis(1000 / u64::from(fps.clamp(1, 60)));
    let mut frames = time::interval(period);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    info!("card ready; Enter starts the countdown, Ctrl-C quits");
    loop {
        tokio::select! {
            _ = frames.tick() => {
                surface.render(&view.frame(), Instant::now())?;
            }
            changed = values.changed() => {
                if changed.is_err() {
                    break;
                }
                debug!(value = *values.borrow(), "observed tick");
            }
            line = lines.next_line() => {
                match line? {
                    // Any line is the press; the view ignores it while the
                    // control is hidden.
                    Some(_) => view.press_start(),
                    None => break,
                }
            }
            _ = &mut ctrl_c => break,
        }
    }

    view.dispose();
    surface.restore()?;
    Ok(())
}
