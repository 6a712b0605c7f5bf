mod timer_view;

pub use timer_view::{
    format_display, BarSpec, Frame, StartControl, TimerPhase, TimerView, START_DELAY_MS,
};
