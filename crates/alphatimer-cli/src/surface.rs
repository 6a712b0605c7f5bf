//! ANSI terminal rendering surface.
//!
//! The surface is the animation facility: it owns the animated bar extent,
//! retargets it whenever a view frame changes the bar's target, and samples
//! it once per repaint. The view stays declarative; all interpolation
//! happens here.

use std::io::{self, Write};
use std::time::Instant;

use alphatimer_core::{AnimatedValue, Frame};

/// Interior size of the card in character cells.
const CARD_WIDTH: usize = 28;
const CARD_HEIGHT: usize = 11;

const BAR_CELL: char = '█';

pub struct CardSurface<W: Write> {
    out: W,
    bar: AnimatedValue,
}

impl<W: Write> CardSurface<W> {
    /// The bar starts at full height: the initial phase targets a full
    /// container, so the first paint is already settled.
    pub fn new(mut out: W, now: Instant) -> io::Result<Self> {
        write!(out, "\x1b[?25l")?;
        Ok(Self {
            out,
            bar: AnimatedValue::new(1.0, now),
        })
    }

    pub fn render(&mut self, frame: &Frame, now: Instant) -> io::Result<()> {
        self.bar
            .retarget(frame.bar.target_extent, frame.bar.transition, now);
        let extent = self.bar.sample(now);

        write!(self.out, "\x1b[2J\x1b[H")?;
        for line in compose(frame, extent) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    /// Re-show the cursor; call once on exit.
    pub fn restore(&mut self) -> io::Result<()> {
        write!(self.out, "\x1b[?25h")?;
        self.out.flush()
    }
}

/// Lay the card out as text lines: border, bar filling bottom-up to
/// `extent`, digits centered, start label under them while visible.
fn compose(frame: &Frame, extent: f32) -> Vec<String> {
    let filled = (extent.clamp(0.0, 1.0) * CARD_HEIGHT as f32).round() as usize;
    let digits_row = CARD_HEIGHT / 2;
    let label_row = CARD_HEIGHT - 2;

    let mut lines = Vec::with_capacity(CARD_HEIGHT + 2);
    lines.push(format!("╭{}╮", "─".repeat(CARD_WIDTH)));
    for row in 0..CARD_HEIGHT {
        let in_bar = CARD_HEIGHT - row <= filled;
        let fill = if in_bar { BAR_CELL } else { ' ' };
        let mut cells = vec![fill; CARD_WIDTH];
        if row == digits_row {
            overlay(&mut cells, &frame.display);
        } else if row == label_row && frame.start_control.visible {
            overlay(&mut cells, &format!("[ {} ]", frame.start_control.label));
        }
        lines.push(format!("│{}│", cells.iter().collect::<String>()));
    }
    lines.push(format!("╰{}╯", "─".repeat(CARD_WIDTH)));
    lines
}

/// Center `text` in the row, with one cell of breathing room on each side
/// so it stays readable over the bar.
fn overlay(cells: &mut [char], text: &str) {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() > cells.len() {
        return;
    }
    let left = (cells.len() - chars.len()) / 2;
    if left > 0 {
        cells[left - 1] = ' ';
    }
    for (i, ch) in chars.iter().enumerate() {
        cells[left + i] = *ch;
    }
    if left + chars.len() < cells.len() {
        cells[left + chars.len()] = ' ';
    }
}

#[cfg(test)]
mod tests {
    use alphatimer_core::{Locale, TimerView};

    use super::*;

    fn idle_frame() -> Frame {
        TimerView::new(Locale::En).frame()
    }

    #[test]
    fn full_extent_fills_every_row() {
        let lines = compose(&idle_frame(), 1.0);
        assert_eq!(lines.len(), CARD_HEIGHT + 2);
        // Bottom interior row is solid bar.
        assert!(lines[CARD_HEIGHT].contains(BAR_CELL));
    }

    #[test]
    fn zero_extent_draws_no_bar() {
        let mut frame = idle_frame();
        frame.start_control.visible = false;
        let lines = compose(&frame, 0.0);
        assert!(lines.iter().all(|l| !l.contains(BAR_CELL)));
    }

    #[test]
    fn digits_and_label_are_overlaid() {
        let lines = compose(&idle_frame(), 1.0);
        assert!(lines.iter().any(|l| l.contains("00 : 06")));
        assert!(lines.iter().any(|l| l.contains("[ START ]")));
    }

    #[test]
    fn hidden_control_leaves_label_row_clear() {
        let mut frame = idle_frame();
        frame.start_control.visible = false;
        let lines = compose(&frame, 1.0);
        assert!(lines.iter().all(|l| !l.contains("START")));
    }

    #[test]
    fn render_writes_ansi_and_card() {
        let now = Instant::now();
        let mut surface = CardSurface::new(Vec::new(), now).unwrap();
        surface.render(&idle_frame(), now).unwrap();
        let painted = String::from_utf8(surface.out.clone()).unwrap();
        assert!(painted.starts_with("\x1b[?25l"));
        assert!(painted.contains("00 : 06"));
    }
}
