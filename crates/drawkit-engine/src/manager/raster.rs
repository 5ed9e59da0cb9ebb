use crate::chain::{ChainState, RenderResult, Size, Stage};
use crate::host::{self, GraphicsApi};
use crate::paint::Color;

use super::{Canvas, CanvasHost, DrawManager};

/// Capabilities of a backend that produces its canvas without a GPU chain.
pub trait RasterBackend {
    type Canvas: Canvas;

    fn graphics_api(&self) -> GraphicsApi;

    /// Creates a canvas of `size` device pixels.
    fn init_canvas(&mut self, size: Size) -> RenderResult<Self::Canvas>;

    fn release_canvas(&mut self, canvas: Self::Canvas) {
        drop(canvas);
    }
}

/// Direct-canvas manager: the canvas is the only resource.
pub struct RasterDrawManager<B: RasterBackend> {
    backend: B,
    size: Size,
    host: CanvasHost<B::Canvas>,
}

impl<B: RasterBackend> RasterDrawManager<B> {
    pub fn new(backend: B, size: Size, on_draw: impl FnMut(&mut B::Canvas) + 'static) -> Self {
        Self {
            backend,
            size,
            host: CanvasHost::new(on_draw),
        }
    }

    #[inline]
    pub fn canvas(&self) -> Option<&B::Canvas> {
        self.host.canvas()
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn release_canvas(&mut self) {
        if let Some(canvas) = self.host.take() {
            self.backend.release_canvas(canvas);
            log::debug!("raster canvas released");
        }
    }

    fn build_canvas(&mut self) -> RenderResult<()> {
        let size = Size::checked(self.size.width, self.size.height, Stage::Canvas)?;
        let canvas = self.backend.init_canvas(size).inspect_err(|e| {
            log::warn!("raster canvas creation failed: {e}");
        })?;
        self.host.install(canvas);
        log::debug!("raster canvas created at {size}");
        Ok(())
    }
}

impl<B: RasterBackend> DrawManager for RasterDrawManager<B> {
    type Canvas = B::Canvas;

    fn initiate(&mut self) -> RenderResult<()> {
        if self.host.has_canvas() {
            log::warn!("initiate called on a live raster manager; disposing first");
            self.dispose();
        }
        self.build_canvas()
    }

    fn draw(&mut self) {
        self.host.draw();
    }

    fn resize(&mut self, width: u32, height: u32) -> RenderResult<()> {
        self.size = Size::checked(width, height, Stage::Canvas)?;
        if !self.host.has_canvas() {
            log::debug!("resize to {} before initiate; size recorded", self.size);
            return Ok(());
        }
        self.release_canvas();
        self.build_canvas()
    }

    fn dispose(&mut self) {
        self.release_canvas();
    }

    fn renderer_info(&self) -> String {
        host::renderer_info(self.backend.graphics_api())
    }

    fn clear_color(&self) -> Color {
        self.host.clear_color()
    }

    fn set_clear_color(&mut self, color: Color) {
        self.host.set_clear_color(color);
    }

    fn is_initiated(&self) -> bool {
        self.host.has_canvas()
    }

    fn has_canvas(&self) -> bool {
        self.host.has_canvas()
    }

    fn chain_state(&self) -> ChainState {
        ChainState::canvas_only(self.host.has_canvas())
    }
}
