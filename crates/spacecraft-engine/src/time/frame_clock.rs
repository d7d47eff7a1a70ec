use std::time::{Duration, Instant};

const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Starts at 0 and increases by one per tick.
    pub frame_index: u64,
}

/// Produces `FrameTime` snapshots.
///
/// Delta time is clamped so a debugger pause, a minimized window or a long
/// stall does not hand the game a huge step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Clamps dt to `[100µs, 250ms]`.
    pub fn new() -> Self {
        Self::with_clamps(DEFAULT_DT_MIN, DEFAULT_DT_MAX)
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Rebases the clock so the next tick does not include time spent paused.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_at(start: Instant) -> FrameClock {
        let mut c = FrameClock::new();
        c.last = start;
        c
    }

    #[test]
    fn frame_index_counts_ticks() {
        let t0 = Instant::now();
        let mut c = clock_at(t0);
        assert_eq!(c.tick_at(t0 + Duration::from_millis(16)).frame_index, 0);
        assert_eq!(c.tick_at(t0 + Duration::from_millis(32)).frame_index, 1);
        assert_eq!(c.tick_at(t0 + Duration::from_millis(48)).frame_index, 2);
    }

    #[test]
    fn dt_measures_elapsed_time() {
        let t0 = Instant::now();
        let mut c = clock_at(t0);
        let ft = c.tick_at(t0 + Duration::from_millis(20));
        assert!((ft.dt - 0.020).abs() < 1e-6);
    }

    #[test]
    fn long_stall_is_clamped() {
        let t0 = Instant::now();
        let mut c = clock_at(t0);
        let ft = c.tick_at(t0 + Duration::from_secs(5));
        assert!((ft.dt - 0.25).abs() < 1e-6);
    }

    #[test]
    fn zero_elapsed_is_raised_to_minimum() {
        let t0 = Instant::now();
        let mut c = clock_at(t0);
        let ft = c.tick_at(t0);
        assert!((ft.dt - 0.0001).abs() < 1e-7);
    }

    #[test]
    fn custom_clamps_apply() {
        let t0 = Instant::now();
        let mut c = FrameClock::with_clamps(Duration::from_millis(1), Duration::from_millis(10));
        c.last = t0;
        assert!((c.tick_at(t0 + Duration::from_millis(50)).dt - 0.010).abs() < 1e-6);
    }
}
