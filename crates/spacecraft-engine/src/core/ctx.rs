use winit::dpi::PhysicalSize;
use winit::window::{Window, WindowId};

use crate::device::{Gpu, SurfaceErrorAction};
use crate::time::FrameTime;

use super::app::AppControl;

/// Per-window handles.
pub struct WindowCtx<'a> {
    pub id:     WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Drawable size in physical pixels.
    pub fn size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    pub fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }
}

/// Per-frame context passed to [`App::render`](super::App::render).
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu:    &'a mut Gpu<'w>,
    pub time:   FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Presents a frame cleared to `color`.
    pub fn clear(&mut self, color: wgpu::Color) -> AppControl {
        self.render(color, |_| {})
    }

    /// Acquires a frame, opens a pass cleared to `clear`, lets `draw` record
    /// into it and presents.
    ///
    /// Pipelines used inside `draw` must be built with
    /// [`Gpu::sample_count`]. Surface errors are handled here: a lost surface
    /// is reconfigured and the frame skipped; out-of-memory returns
    /// [`AppControl::Exit`].
    pub fn render<F>(&mut self, clear: wgpu::Color, draw: F) -> AppControl
    where
        F: FnOnce(&mut wgpu::RenderPass<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    _ => AppControl::Continue,
                };
            }
        };

        // Pass is dropped before the encoder is moved into submit().
        {
            let attachment = self.gpu.color_attachment(&frame.view, wgpu::LoadOp::Clear(clear));
            let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label:                    Some("spacecraft main pass"),
                color_attachments:        &[Some(attachment)],
                depth_stencil_attachment: None,
                timestamp_writes:         None,
                occlusion_query_set:      None,
                multiview_mask:           None,
            });
            draw(&mut rpass);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
