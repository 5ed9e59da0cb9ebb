use crate::chain::{Chain, ChainState, RenderFailure, RenderResult, Size, Stage};
use crate::host::{self, GraphicsApi};
use crate::paint::Color;

use super::{Canvas, CanvasHost, DrawManager};

/// Capabilities a GPU backend supplies to [`GpuDrawManager`].
///
/// The manager calls the `init_*` steps strictly in chain order and the
/// `release_*` steps strictly in reverse. Each `init_*` receives every resource
/// it depends on, already live.
pub trait GpuBackend {
    type Context;
    type RenderTarget;
    type Surface;
    type Canvas: Canvas;

    fn graphics_api(&self) -> GraphicsApi;

    /// Short description of the device behind `context`, if the backend has one.
    fn adapter_info(&self, context: &Self::Context) -> Option<String> {
        let _ = context;
        None
    }

    fn init_context(&mut self) -> RenderResult<Self::Context>;

    /// Runs right after the context is created, before anything is built on it.
    fn on_direct_context_init(&mut self, context: &mut Self::Context);

    /// Runs right before the context is released.
    fn on_direct_context_dispose(&mut self, context: &mut Self::Context);

    fn init_backend_render_target(
        &mut self,
        context: &Self::Context,
        size: Size,
    ) -> RenderResult<Self::RenderTarget>;

    fn init_surface(
        &mut self,
        context: &Self::Context,
        render_target: &Self::RenderTarget,
    ) -> RenderResult<Self::Surface>;

    fn init_canvas(
        &mut self,
        context: &Self::Context,
        surface: &Self::Surface,
    ) -> RenderResult<Self::Canvas>;

    /// Whether `context` can keep serving after a resize to `size`.
    ///
    /// Asked once per resize. `false` rebuilds the whole chain.
    fn can_reuse_context(&self, context: &Self::Context, size: Size) -> bool {
        let _ = (context, size);
        true
    }

    /// Submits pending GPU work. Only called while a context is held.
    fn flush(&mut self, frame: FlushCtx<'_, Self>) {
        let _ = frame;
    }

    fn release_canvas(&mut self, canvas: Self::Canvas) {
        drop(canvas);
    }

    fn release_surface(&mut self, surface: Self::Surface) {
        drop(surface);
    }

    fn release_render_target(&mut self, render_target: Self::RenderTarget) {
        drop(render_target);
    }

    fn release_context(&mut self, context: Self::Context) {
        drop(context);
    }
}

/// Everything a flush may touch. The context is always live; the rest may not be.
pub struct FlushCtx<'a, B: GpuBackend + ?Sized> {
    pub context: &'a mut B::Context,
    pub render_target: Option<&'a mut B::RenderTarget>,
    pub surface: Option<&'a mut B::Surface>,
    pub canvas: Option<&'a mut B::Canvas>,
}

/// Manager for the full `Context -> RenderTarget -> Surface -> Canvas` chain.
///
/// The context survives resizes whenever the backend allows it; everything
/// beneath it is rebuilt at the new size.
pub struct GpuDrawManager<B: GpuBackend> {
    backend: B,
    size: Size,
    chain: Chain<B::Context, B::RenderTarget, B::Surface>,
    host: CanvasHost<B::Canvas>,
}

impl<B: GpuBackend> GpuDrawManager<B> {
    pub fn new(backend: B, size: Size, on_draw: impl FnMut(&mut B::Canvas) + 'static) -> Self {
        Self {
            backend,
            size,
            chain: Chain::default(),
            host: CanvasHost::new(on_draw),
        }
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Size the next render target will be built at.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn context(&self) -> Option<&B::Context> {
        self.chain.context()
    }

    #[inline]
    pub fn render_target(&self) -> Option<&B::RenderTarget> {
        self.chain.render_target()
    }

    #[inline]
    pub fn surface(&self) -> Option<&B::Surface> {
        self.chain.surface()
    }

    #[inline]
    pub fn canvas(&self) -> Option<&B::Canvas> {
        self.host.canvas()
    }

    /// Submits pending GPU work on the context. No-op without a context.
    pub fn flush(&mut self) {
        let (Some(context), render_target, surface) = self.chain.parts_mut() else {
            return;
        };
        let canvas = self.host.canvas_mut();
        self.backend.flush(FlushCtx {
            context,
            render_target,
            surface,
            canvas,
        });
    }

    fn build_context(&mut self) -> RenderResult<()> {
        let mut context = self
            .backend
            .init_context()
            .inspect_err(|e| log::warn!("{e}"))?;
        self.backend.on_direct_context_init(&mut context);
        if let Some(info) = self.backend.adapter_info(&context) {
            log::info!("context created on {info}");
        } else {
            log::debug!("context created");
        }
        self.chain.install_context(context);
        Ok(())
    }

    /// Builds render target, surface and canvas on the live context.
    fn build_lower_chain(&mut self) -> RenderResult<()> {
        let size = Size::checked(self.size.width, self.size.height, Stage::RenderTarget)
            .inspect_err(|e| log::warn!("{e}"))?;

        let target = {
            let context = self
                .chain
                .context()
                .ok_or_else(|| RenderFailure::render_target("no live context"))?;
            self.backend
                .init_backend_render_target(context, size)
                .inspect_err(|e| log::warn!("{e}"))?
        };
        self.chain.install_render_target(target);
        log::debug!("render target created at {size}");

        let surface = match (self.chain.context(), self.chain.render_target()) {
            (Some(context), Some(target)) => self
                .backend
                .init_surface(context, target)
                .inspect_err(|e| log::warn!("{e}"))?,
            _ => return Err(RenderFailure::surface("render target chain is not live")),
        };
        self.chain.install_surface(surface);
        log::debug!("surface created");

        let canvas = match (self.chain.context(), self.chain.surface()) {
            (Some(context), Some(surface)) => self
                .backend
                .init_canvas(context, surface)
                .inspect_err(|e| log::warn!("{e}"))?,
            _ => return Err(RenderFailure::canvas("surface chain is not live")),
        };
        self.host.install(canvas);
        log::debug!("canvas created");

        Ok(())
    }

    /// Releases canvas, surface and render target, keeping the context.
    fn release_lower_chain(&mut self) {
        if let Some(canvas) = self.host.take() {
            self.backend.release_canvas(canvas);
            log::debug!("canvas released");
        }
        if let Some(surface) = self.chain.take_surface() {
            self.backend.release_surface(surface);
            log::debug!("surface released");
        }
        if let Some(target) = self.chain.take_render_target() {
            self.backend.release_render_target(target);
            log::debug!("render target released");
        }
    }
}

impl<B: GpuBackend> DrawManager for GpuDrawManager<B> {
    type Canvas = B::Canvas;

    fn initiate(&mut self) -> RenderResult<()> {
        if !self.chain.is_empty() || self.host.has_canvas() {
            log::warn!("initiate called with live resources; disposing first");
            self.dispose();
        }
        self.build_context()?;
        self.build_lower_chain()
    }

    fn draw(&mut self) {
        self.host.draw();
    }

    fn resize(&mut self, width: u32, height: u32) -> RenderResult<()> {
        self.size = Size::checked(width, height, Stage::RenderTarget)?;

        let Some(context) = self.chain.context() else {
            log::debug!("resize to {} before initiate; size recorded", self.size);
            return Ok(());
        };

        if self.backend.can_reuse_context(context, self.size) {
            self.release_lower_chain();
            self.build_lower_chain()
        } else {
            log::info!("context cannot be reused at {}; rebuilding chain", self.size);
            self.dispose();
            self.initiate()
        }
    }

    fn dispose(&mut self) {
        self.release_lower_chain();
        if let Some(mut context) = self.chain.take_context() {
            self.backend.on_direct_context_dispose(&mut context);
            self.backend.release_context(context);
            log::debug!("context released");
        }
    }

    fn renderer_info(&self) -> String {
        let mut info = host::renderer_info(self.backend.graphics_api());
        if let Some(adapter) = self.chain.context().and_then(|c| self.backend.adapter_info(c)) {
            info.push_str(&format!("Adapter: {adapter}\n"));
        }
        info
    }

    fn clear_color(&self) -> Color {
        self.host.clear_color()
    }

    fn set_clear_color(&mut self, color: Color) {
        self.host.set_clear_color(color);
    }

    fn is_initiated(&self) -> bool {
        self.chain.context().is_some()
    }

    fn has_canvas(&self) -> bool {
        self.host.has_canvas()
    }

    fn chain_state(&self) -> ChainState {
        self.chain.state(self.host.has_canvas())
    }
}
