//! Logging setup.
//!
//! The engine only speaks the `log` facade; `env_logger` is wired up here so
//! binaries get a single call to make early in `main`.

mod init;

pub use init::{init_logging, LoggingConfig};
