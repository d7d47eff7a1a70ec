use anyhow::Result;

use spacecraft_engine::device::GpuInit;
use spacecraft_engine::window::{Runtime, WindowConfig};
use spacecraft_game::{GameHandle, SpaceCraftGame};

pub const TITLE: &str = "LigGDX test";
pub const WIDTH: u32 = 1440;
pub const HEIGHT: u32 = 768;
pub const X: i32 = 0;
pub const Y: i32 = 0;
pub const SAMPLES: u32 = 4;

/// Window the desktop build opens: 1440x768 at the screen origin with 4x MSAA.
pub fn launcher_config() -> WindowConfig {
    WindowConfig::new()
        .title(TITLE)
        .size(WIDTH, HEIGHT)
        .position(X, Y)
        .samples(SAMPLES)
}

/// Composition root: owns the configuration and the process's game instance
/// until they are handed to a runner.
pub struct Launcher {
    config: WindowConfig,
    game:   GameHandle,
}

impl Launcher {
    pub fn new(config: WindowConfig) -> Self {
        Self {
            config,
            game: GameHandle::new(SpaceCraftGame::new()),
        }
    }

    /// Handle to the game instance. Every call yields the same instance.
    pub fn game(&self) -> GameHandle {
        self.game.clone()
    }

    /// Runs the game in the engine's window runtime. Blocks until the window closes.
    pub fn launch(self) -> Result<()> {
        self.launch_with(|config, game| Runtime::run(config, GpuInit::default(), game))
    }

    /// Hands the configuration and game to `runner`, exactly once.
    ///
    /// The runner is expected to own the thread for the application lifetime;
    /// its error, if any, is returned unchanged.
    pub fn launch_with<R>(self, runner: R) -> Result<()>
    where
        R: FnOnce(WindowConfig, GameHandle) -> Result<()>,
    {
        let Self { config, game } = self;
        log::info!(
            "launching \"{}\" {}x{} at ({}, {}) msaa={}",
            config.title,
            config.width,
            config.height,
            config.x,
            config.y,
            config.samples
        );
        runner(config, game)
    }
}
