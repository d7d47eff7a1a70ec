use std::cell::{Ref, RefCell};
use std::rc::Rc;

use spacecraft_engine::core::{App, AppControl, FrameCtx};
use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::SpaceCraftGame;

/// Shared handle to the one game instance of a process.
///
/// Clones point at the same game. The runtime owns one clone and drives the
/// lifecycle through it; the composition root keeps another.
#[derive(Debug, Clone, Default)]
pub struct GameHandle(Rc<RefCell<SpaceCraftGame>>);

impl GameHandle {
    pub fn new(game: SpaceCraftGame) -> Self {
        Self(Rc::new(RefCell::new(game)))
    }

    /// Whether both handles refer to the same game instance.
    pub fn ptr_eq(&self, other: &GameHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Read access to the game state.
    ///
    /// Panics if called from inside a lifecycle callback of the same game.
    pub fn borrow(&self) -> Ref<'_, SpaceCraftGame> {
        self.0.borrow()
    }
}

impl App for GameHandle {
    fn create(&mut self) {
        self.0.borrow_mut().create();
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.0.borrow_mut().resize(width, height);
    }

    fn render(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.0.borrow_mut().render(ctx)
    }

    fn pause(&mut self) {
        self.0.borrow_mut().pause();
    }

    fn resume(&mut self) {
        self.0.borrow_mut().resume();
    }

    fn dispose(&mut self) {
        self.0.borrow_mut().dispose();
    }

    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        self.0.borrow_mut().on_window_event(window_id, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_identity() {
        let a = GameHandle::new(SpaceCraftGame::new());
        let b = a.clone();
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn distinct_handles_differ() {
        let a = GameHandle::default();
        let b = GameHandle::default();
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn lifecycle_through_handle_is_visible_to_clones() {
        let observer = GameHandle::default();
        let mut driver = observer.clone();

        driver.create();
        driver.resize(1440, 768);
        driver.pause();
        driver.dispose();

        let game = observer.borrow();
        assert!(game.is_created());
        assert!(game.is_paused());
        assert!(game.is_disposed());
        assert_eq!(game.viewport(), (1440, 768));
    }
}
