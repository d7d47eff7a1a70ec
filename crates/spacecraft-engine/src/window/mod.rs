//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the game window, and wires them to the GPU
//! layer and the application lifecycle.

mod config;
mod lifecycle;
mod runtime;

pub use config::{WindowConfig, CENTERED, MAX_SAMPLES};
pub use lifecycle::{Lifecycle, Phase, Shutdown};
pub use runtime::Runtime;
