use anyhow::{ensure, Result};
use winit::dpi::{PhysicalPosition, PhysicalSize};

/// Axis value asking for the window to be centered on the primary monitor.
pub const CENTERED: i32 = -1;

/// Highest multisample count accepted by [`WindowConfig::validate`].
pub const MAX_SAMPLES: u32 = 16;

/// Display parameters used to open the game window.
///
/// Sizes and positions are in physical pixels. `samples` is the requested
/// MSAA count; `0` and `1` both mean "no multisampling". The GPU layer may
/// downgrade a valid request the adapter cannot honor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title:     String,
    pub width:     u32,
    pub height:    u32,
    pub x:         i32,
    pub y:         i32,
    pub samples:   u32,
    pub resizable: bool,
    pub vsync:     bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title:     "spacecraft".to_string(),
            width:     640,
            height:    480,
            x:         CENTERED,
            y:         CENTERED,
            samples:   0,
            resizable: true,
            vsync:     true,
        }
    }
}

impl WindowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial drawable size in physical pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    /// Set the window origin. Pass [`CENTERED`] on an axis to center it.
    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the MSAA sample count.
    pub fn samples(mut self, samples: u32) -> Self {
        self.samples = samples;
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Checks the values the runtime cannot recover from.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "window size must be non-zero (got {}x{})",
            self.width,
            self.height
        );
        ensure!(
            self.samples <= 1 || (self.samples.is_power_of_two() && self.samples <= MAX_SAMPLES),
            "unsupported multisample count {} (expected 0, 1 or a power of two up to {})",
            self.samples,
            MAX_SAMPLES
        );
        Ok(())
    }

    pub(crate) fn physical_size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(self.width, self.height)
    }

    /// Resolves the requested origin against the primary monitor, given as
    /// `(origin, size)`.
    ///
    /// Returns `None` when a centered axis is requested but no monitor is
    /// known, leaving placement to the platform.
    pub(crate) fn resolve_position(
        &self,
        monitor: Option<(PhysicalPosition<i32>, PhysicalSize<u32>)>,
    ) -> Option<PhysicalPosition<i32>> {
        if self.x != CENTERED && self.y != CENTERED {
            return Some(PhysicalPosition::new(self.x, self.y));
        }

        let (origin, size) = monitor?;
        let center = |start: i32, extent: u32, own: u32| -> i32 {
            let slack = (i64::from(extent) - i64::from(own)).max(0) / 2;
            start.saturating_add(slack as i32)
        };

        let x = if self.x == CENTERED { center(origin.x, size.width, self.width) } else { self.x };
        let y = if self.y == CENTERED { center(origin.y, size.height, self.height) } else { self.y };
        Some(PhysicalPosition::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor(x: i32, y: i32, w: u32, h: u32) -> Option<(PhysicalPosition<i32>, PhysicalSize<u32>)> {
        Some((PhysicalPosition::new(x, y), PhysicalSize::new(w, h)))
    }

    // ── defaults / builder ────────────────────────────────────────────────

    #[test]
    fn default_is_centered_without_msaa() {
        let c = WindowConfig::default();
        assert_eq!((c.x, c.y), (CENTERED, CENTERED));
        assert_eq!(c.samples, 0);
        assert!(c.resizable);
        assert!(c.vsync);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn builder_sets_every_field() {
        let c = WindowConfig::new()
            .title("t")
            .size(800, 600)
            .position(10, 20)
            .samples(8)
            .resizable(false)
            .vsync(false);
        assert_eq!(c.title, "t");
        assert_eq!(c.physical_size(), PhysicalSize::new(800, 600));
        assert_eq!((c.x, c.y), (10, 20));
        assert_eq!(c.samples, 8);
        assert!(!c.resizable);
        assert!(!c.vsync);
    }

    // ── validate ──────────────────────────────────────────────────────────

    #[test]
    fn zero_width_rejected() {
        let err = WindowConfig::new().size(0, 10).validate().unwrap_err();
        assert!(err.to_string().contains("non-zero"));
    }

    #[test]
    fn zero_height_rejected() {
        assert!(WindowConfig::new().size(10, 0).validate().is_err());
    }

    #[test]
    fn power_of_two_samples_accepted() {
        for n in [0, 1, 2, 4, 8, 16] {
            assert!(WindowConfig::new().samples(n).validate().is_ok(), "samples {n}");
        }
    }

    #[test]
    fn odd_or_oversized_samples_rejected() {
        for n in [3, 6, 32] {
            let err = WindowConfig::new().samples(n).validate().unwrap_err();
            assert!(err.to_string().contains(&n.to_string()));
        }
    }

    // ── resolve_position ──────────────────────────────────────────────────

    #[test]
    fn explicit_position_ignores_monitor() {
        let c = WindowConfig::new().position(0, 0);
        assert_eq!(c.resolve_position(None), Some(PhysicalPosition::new(0, 0)));
        assert_eq!(
            c.resolve_position(monitor(100, 100, 1920, 1080)),
            Some(PhysicalPosition::new(0, 0))
        );
    }

    #[test]
    fn centered_without_monitor_defers_to_platform() {
        assert_eq!(WindowConfig::new().resolve_position(None), None);
    }

    #[test]
    fn centered_on_monitor() {
        let c = WindowConfig::new().size(1000, 500);
        assert_eq!(
            c.resolve_position(monitor(0, 0, 1920, 1080)),
            Some(PhysicalPosition::new(460, 290))
        );
    }

    #[test]
    fn centering_respects_monitor_origin() {
        let c = WindowConfig::new().size(1000, 500).position(CENTERED, 7);
        assert_eq!(
            c.resolve_position(monitor(1920, 0, 2000, 1000)),
            Some(PhysicalPosition::new(2420, 7))
        );
    }

    #[test]
    fn window_larger_than_monitor_pins_to_origin() {
        let c = WindowConfig::new().size(4000, 3000);
        assert_eq!(
            c.resolve_position(monitor(-50, 10, 1920, 1080)),
            Some(PhysicalPosition::new(-50, 10))
        );
    }
}
