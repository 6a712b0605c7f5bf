pub mod frame;
pub mod run;
pub mod ticks;
