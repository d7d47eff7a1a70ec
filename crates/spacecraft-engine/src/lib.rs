//! SpaceCraft engine crate.
//!
//! Owns the platform window, the GPU surface and the application lifecycle
//! that a launcher hands its game to.

pub mod core;
pub mod device;
pub mod time;
pub mod window;

pub mod logging;
