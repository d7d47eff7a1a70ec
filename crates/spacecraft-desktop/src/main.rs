//! Desktop entry point: opens the game window and runs SpaceCraft in it.

mod launcher;

use anyhow::Result;
use spacecraft_engine::logging::{init_logging, LoggingConfig};

use crate::launcher::{launcher_config, Launcher};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Command-line arguments are not read; the window setup is fixed.
    Launcher::new(launcher_config()).launch()
}
