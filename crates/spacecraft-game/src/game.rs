use spacecraft_engine::core::{App, AppControl, FrameCtx};

/// Background the game clears to every frame.
pub const SPACE_COLOR: wgpu::Color = wgpu::Color {
    r: 0.01,
    g: 0.01,
    b: 0.04,
    a: 1.0,
};

/// Top-level game state.
///
/// Tracks the lifecycle the runtime drives it through and the frame budget
/// it has consumed.
#[derive(Debug, Default)]
pub struct SpaceCraftGame {
    created:  bool,
    paused:   bool,
    disposed: bool,
    viewport: (u32, u32),
    elapsed:  f32,
    frames:   u64,
}

impl SpaceCraftGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Last drawable size reported by the runtime, in physical pixels.
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Seconds of simulated time, excluding time spent paused.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Accounts for one frame of `dt` seconds. Returns whether it should be drawn.
    fn advance(&mut self, dt: f32) -> bool {
        if !self.created || self.paused || self.disposed {
            return false;
        }
        self.elapsed += dt;
        self.frames += 1;
        true
    }
}

impl App for SpaceCraftGame {
    fn create(&mut self) {
        if self.created {
            log::warn!("create called twice; ignoring");
            return;
        }
        self.created = true;
        log::info!("spacecraft game created");
    }

    fn resize(&mut self, width: u32, height: u32) {
        log::debug!("viewport {width}x{height}");
        self.viewport = (width, height);
    }

    fn render(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if !self.advance(ctx.time.dt) {
            return AppControl::Continue;
        }
        ctx.clear(SPACE_COLOR)
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        log::info!(
            "spacecraft game disposed after {} frames ({:.1}s)",
            self.frames,
            self.elapsed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created() -> SpaceCraftGame {
        let mut g = SpaceCraftGame::new();
        g.create();
        g
    }

    #[test]
    fn new_game_is_idle() {
        let g = SpaceCraftGame::new();
        assert!(!g.is_created());
        assert_eq!(g.frames(), 0);
        assert_eq!(g.viewport(), (0, 0));
    }

    #[test]
    fn frames_before_create_are_not_drawn() {
        let mut g = SpaceCraftGame::new();
        assert!(!g.advance(0.016));
        assert_eq!(g.frames(), 0);
    }

    #[test]
    fn advance_accumulates_time() {
        let mut g = created();
        assert!(g.advance(0.5));
        assert!(g.advance(0.25));
        assert_eq!(g.frames(), 2);
        assert!((g.elapsed() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn paused_game_does_not_advance() {
        let mut g = created();
        g.pause();
        assert!(g.is_paused());
        assert!(!g.advance(1.0));
        g.resume();
        assert!(g.advance(1.0));
        assert_eq!(g.frames(), 1);
    }

    #[test]
    fn resize_records_viewport() {
        let mut g = created();
        g.resize(1440, 768);
        assert_eq!(g.viewport(), (1440, 768));
    }

    #[test]
    fn dispose_is_idempotent_and_final() {
        let mut g = created();
        g.advance(0.1);
        g.dispose();
        g.dispose();
        assert!(g.is_disposed());
        assert!(!g.advance(0.1));
        assert_eq!(g.frames(), 1);
    }

    #[test]
    fn second_create_is_ignored() {
        let mut g = created();
        g.advance(0.1);
        g.create();
        assert_eq!(g.frames(), 1);
    }
}
