use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::time::FrameClock;

use super::{Lifecycle, WindowConfig};

/// Engine runner.
///
/// Takes over the calling thread until the window closes or the app asks to
/// exit.
pub struct Runtime;

impl Runtime {
    /// Validates `config`, opens the window and drives `app` through its
    /// lifecycle.
    ///
    /// `config.vsync` overrides `gpu_init.present_mode`.
    pub fn run<A>(config: WindowConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        config.validate().context("invalid window configuration")?;

        let gpu_init = gpu_init.with_vsync(config.vsync);
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => {
                log::info!("runtime exited");
                Ok(())
            }
        }
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: WindowConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    lifecycle: Lifecycle,

    /// First fatal error raised inside a callback; returned from `run`.
    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: WindowConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            lifecycle: Lifecycle::default(),
            failure: None,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let config = &self.config;
        let monitor = event_loop
            .primary_monitor()
            .map(|m| (m.position(), m.size()));

        let mut attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.physical_size())
            .with_resizable(config.resizable);
        if let Some(position) = config.resolve_position(monitor) {
            attrs = attrs.with_position(position);
        }

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let samples = config.samples;

        let entry = WindowEntryTryBuilder {
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init, samples))
                    .context("GPU initialization failed")
            },
        }
        .try_build()?;

        self.window = Some(entry);
        Ok(())
    }

    /// Records a fatal error and stops the loop. Only the first error is kept.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure.get_or_insert(err);
        self.shutdown(event_loop);
    }

    /// Runs the owed lifecycle hooks, releases the window and exits the loop.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.finish_lifecycle();
        self.window = None;
        event_loop.exit();
    }

    fn finish_lifecycle(&mut self) {
        let steps = self.lifecycle.shutdown();
        if steps.pause {
            self.app.pause();
        }
        if steps.dispose {
            log::info!("disposing app");
            self.app.dispose();
        }
    }

    fn resized(&mut self, new_size: PhysicalSize<u32>) {
        let Some(entry) = self.window.as_mut() else {
            return;
        };

        entry.with_gpu_mut(|gpu| gpu.resize(new_size));
        entry.with_window(|w| w.request_redraw());

        if new_size.width > 0 && new_size.height > 0 {
            self.app.resize(new_size.width, new_size.height);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId) {
        if !self.lifecycle.is_running() {
            return;
        }

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else {
            return;
        };

        let control = entry.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: window_id,
                    window: fields.window,
                },
                gpu: fields.gpu,
                time: fields.clock.tick(),
            };
            app.render(&mut ctx)
        });

        if control == AppControl::Exit {
            log::info!("app requested exit");
            self.shutdown(event_loop);
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(entry) = self.window.as_mut() {
            if self.lifecycle.resume() {
                log::info!("resuming app");
                entry.with_clock_mut(|c| c.reset());
                entry.with_window(|w| w.request_redraw());
                self.app.resume();
            }
            return;
        }

        if let Err(err) = self.create_window_entry(event_loop) {
            self.fail(event_loop, err.context("failed to create game window"));
            return;
        }

        let Some(entry) = self.window.as_ref() else {
            return;
        };
        let size = entry.with_gpu(|gpu| gpu.size());
        entry.with_window(|w| w.request_redraw());

        if self.lifecycle.create() {
            log::info!(
                "window \"{}\" opened at {}x{}",
                self.config.title,
                size.width,
                size.height
            );
            self.app.create();
            self.app.resize(size.width, size.height);
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if self.lifecycle.suspend() {
            log::info!("pausing app");
            self.app.pause();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; the game renders every frame.
        if self.lifecycle.is_running() {
            if let Some(entry) = self.window.as_ref() {
                entry.with_window(|w| w.request_redraw());
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.is_none() {
            return;
        }

        if self.app.on_window_event(window_id, &event) == AppControl::Exit {
            log::info!("app requested exit");
            self.shutdown(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("window close requested");
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(new_size) => self.resized(new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = self
                    .window
                    .as_ref()
                    .map(|entry| entry.with_window(|w| w.inner_size()));
                if let Some(new_size) = new_size {
                    self.resized(new_size);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop, window_id),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Covers exits the runtime did not initiate.
        self.finish_lifecycle();
        self.window = None;
    }
}
