//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the game. The runtime drives an [`App`] through its lifecycle and hands it
//! a [`FrameCtx`] once per presented frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
