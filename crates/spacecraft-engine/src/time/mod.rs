//! Frame timing.
//!
//! One `FrameClock` lives next to the game window; the runtime ticks it once
//! per redraw and passes the resulting `FrameTime` to the app.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
