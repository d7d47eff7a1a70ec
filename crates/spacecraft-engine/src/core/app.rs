use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Lifecycle contract the runtime drives a game through.
///
/// Order of calls: `create`, `resize` with the initial drawable size, then
/// `render` once per frame. `pause`/`resume` bracket platform suspension.
/// On shutdown the runtime calls `pause` (if running) and then `dispose`,
/// exactly once.
pub trait App {
    /// Called once, after the window and GPU context exist.
    fn create(&mut self) {}

    /// Called with the drawable size in physical pixels. Never 0x0.
    fn resize(&mut self, width: u32, height: u32) {
        let _ = (width, height);
    }

    /// Called once per frame while running.
    fn render(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    fn pause(&mut self) {}

    fn resume(&mut self) {}

    /// Called once before the window and GPU context are torn down.
    fn dispose(&mut self) {}

    /// Raw window events, offered before the runtime handles them.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }
}
