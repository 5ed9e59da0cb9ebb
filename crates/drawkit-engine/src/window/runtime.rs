use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use crate::chain::Size;
use crate::device::{GpuConfig, WgpuBackend, WgpuCanvas};
use crate::manager::{DrawManager, GpuDrawManager};
use crate::paint::Color;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub fullscreen: bool,
    /// Ask for a window that composites with the desktop behind it.
    pub transparent: bool,
    pub clear_color: Color,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "drawkit".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            fullscreen: false,
            transparent: false,
            clear_color: Color::TRANSPARENT,
        }
    }
}

type DrawCallback = Box<dyn FnMut(&mut WgpuCanvas)>;

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and draws into it with `on_draw` until it is closed.
    pub fn run<F>(config: RuntimeConfig, mut gpu: GpuConfig, on_draw: F) -> Result<()>
    where
        F: FnMut(&mut WgpuCanvas) + 'static,
    {
        gpu.transparency = config.transparent;
        gpu.fullscreen = config.fullscreen;

        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu, Box::new(on_draw));

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.finish()
    }
}

struct AppState {
    config: RuntimeConfig,
    gpu: GpuConfig,

    /// Moved into the manager when the window is first created.
    on_draw: Option<DrawCallback>,

    window: Option<Arc<Window>>,
    manager: Option<GpuDrawManager<WgpuBackend>>,
    error: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu: GpuConfig, on_draw: DrawCallback) -> Self {
        Self {
            config,
            gpu,
            on_draw: Some(on_draw),
            window: None,
            manager: None,
            error: None,
        }
    }

    fn finish(mut self) -> Result<()> {
        if let Some(manager) = self.manager.as_mut() {
            manager.dispose();
        }
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if let Some(manager) = self.manager.as_mut() {
            manager.dispose();
        }
        self.error.get_or_insert(err);
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_transparent(self.config.transparent)
            .with_fullscreen(self.config.fullscreen.then_some(Fullscreen::Borderless(None)));

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;
        Ok(Arc::new(window))
    }

    /// Builds the manager on first resume, or re-initiates it after a suspend.
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = match &self.window {
            Some(window) => window.clone(),
            None => {
                let window = self.create_window(event_loop)?;
                self.window = Some(window.clone());
                window
            }
        };

        if self.manager.is_none() {
            let on_draw = self
                .on_draw
                .take()
                .ok_or_else(|| anyhow!("draw callback already consumed"))?;
            let inner = window.inner_size();
            let backend = WgpuBackend::new(window.clone(), self.gpu.clone());
            let mut manager = GpuDrawManager::new(backend, Size::new(inner.width, inner.height), on_draw);
            manager.set_clear_color(self.config.clear_color);
            self.manager = Some(manager);
        }

        if let Some(manager) = self.manager.as_mut() {
            manager.initiate().context("failed to initiate GPU chain")?;
            log::info!("{}", manager.renderer_info().trim_end().replace('\n', ", "));
        }

        window.request_redraw();
        Ok(())
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.manager.as_ref().is_some_and(|m| m.has_canvas()) {
            return;
        }
        if let Err(err) = self.start(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // Platform surfaces may be destroyed while suspended.
        if let Some(manager) = self.manager.as_mut() {
            manager.dispose();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(manager) = self.manager.as_mut() {
                    manager.dispose();
                }
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if new_size.width == 0 || new_size.height == 0 {
                    // Minimized; keep the current chain until a real size arrives.
                    return;
                }
                let Some(manager) = self.manager.as_mut() else {
                    return;
                };
                if let Err(err) = manager.resize(new_size.width, new_size.height) {
                    self.fail(event_loop, anyhow::Error::new(err).context("resize failed"));
                    return;
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(manager) = self.manager.as_mut() {
                    manager.draw();
                    manager.flush();
                }
            }

            _ => {}
        }
    }
}
