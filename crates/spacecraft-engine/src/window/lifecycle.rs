/// Where the app currently sits in its lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Window not yet created; `create` has not been called.
    Pending,
    Running,
    Paused,
    /// `dispose` has been called. Terminal.
    Disposed,
}

/// Hooks to call when the runtime shuts down, in order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Shutdown {
    pub pause:   bool,
    pub dispose: bool,
}

/// Tracks which lifecycle hooks the runtime owes the app.
///
/// Each transition method returns whether the corresponding hook must be
/// invoked. Invalid transitions are no-ops, which keeps `create` and
/// `dispose` to at most one call each and pairs every `resume` with a prior
/// `pause`.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    phase: Phase,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self { phase: Phase::Pending }
    }
}

impl Lifecycle {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// `Pending -> Running`. Caller invokes `create`.
    pub fn create(&mut self) -> bool {
        self.transition(Phase::Pending, Phase::Running)
    }

    /// `Running -> Paused`. Caller invokes `pause`.
    pub fn suspend(&mut self) -> bool {
        self.transition(Phase::Running, Phase::Paused)
    }

    /// `Paused -> Running`. Caller invokes `resume`.
    pub fn resume(&mut self) -> bool {
        self.transition(Phase::Paused, Phase::Running)
    }

    /// Moves to `Disposed` from any phase and reports the hooks still owed.
    pub fn shutdown(&mut self) -> Shutdown {
        let steps = match self.phase {
            Phase::Running => Shutdown { pause: true, dispose: true },
            Phase::Paused => Shutdown { pause: false, dispose: true },
            Phase::Pending | Phase::Disposed => Shutdown::default(),
        };
        self.phase = Phase::Disposed;
        steps
    }

    fn transition(&mut self, from: Phase, to: Phase) -> bool {
        if self.phase != from {
            return false;
        }
        self.phase = to;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> Lifecycle {
        let mut l = Lifecycle::default();
        assert!(l.create());
        l
    }

    #[test]
    fn starts_pending() {
        let l = Lifecycle::default();
        assert_eq!(l.phase(), Phase::Pending);
        assert!(!l.is_running());
    }

    #[test]
    fn create_happens_once() {
        let mut l = running();
        assert!(!l.create());
        assert_eq!(l.phase(), Phase::Running);
    }

    #[test]
    fn suspend_then_resume() {
        let mut l = running();
        assert!(l.suspend());
        assert!(!l.suspend());
        assert!(l.resume());
        assert!(l.is_running());
    }

    #[test]
    fn resume_without_pause_is_ignored() {
        let mut l = running();
        assert!(!l.resume());
    }

    #[test]
    fn shutdown_while_running_pauses_then_disposes() {
        let mut l = running();
        assert_eq!(l.shutdown(), Shutdown { pause: true, dispose: true });
        assert_eq!(l.phase(), Phase::Disposed);
    }

    #[test]
    fn shutdown_while_paused_only_disposes() {
        let mut l = running();
        l.suspend();
        assert_eq!(l.shutdown(), Shutdown { pause: false, dispose: true });
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut l = running();
        l.shutdown();
        assert_eq!(l.shutdown(), Shutdown::default());
        assert!(!l.create());
        assert!(!l.resume());
    }

    #[test]
    fn shutdown_before_create_owes_nothing() {
        let mut l = Lifecycle::default();
        assert_eq!(l.shutdown(), Shutdown::default());
    }
}
