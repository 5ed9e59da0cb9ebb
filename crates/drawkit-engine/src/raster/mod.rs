//! CPU raster backend built on tiny-skia.
//!
//! The canvas is a premultiplied RGBA8 pixmap. There is no chain beneath it, so
//! this backend plugs into [`RasterDrawManager`](crate::manager::RasterDrawManager).

mod canvas;

pub use canvas::RasterCanvas;

use crate::chain::{RenderFailure, RenderResult, Size};
use crate::host::GraphicsApi;
use crate::manager::RasterBackend;

/// Produces [`RasterCanvas`]es.
#[derive(Debug, Default, Clone)]
pub struct SoftwareBackend {
    created: u64,
}

impl SoftwareBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of canvases created so far.
    #[inline]
    pub fn canvases_created(&self) -> u64 {
        self.created
    }
}

impl RasterBackend for SoftwareBackend {
    type Canvas = RasterCanvas;

    fn graphics_api(&self) -> GraphicsApi {
        GraphicsApi::Software
    }

    fn init_canvas(&mut self, size: Size) -> RenderResult<RasterCanvas> {
        let pixmap = tiny_skia::Pixmap::new(size.width, size.height).ok_or_else(|| {
            RenderFailure::canvas(format!("cannot allocate a {size} pixmap"))
        })?;
        self.created += 1;
        Ok(RasterCanvas::new(pixmap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Stage;

    #[test]
    fn allocates_canvas_of_requested_size() {
        let mut backend = SoftwareBackend::new();
        let canvas = backend.init_canvas(Size::new(16, 9)).unwrap();
        assert_eq!(canvas.size(), Size::new(16, 9));
        assert_eq!(backend.canvases_created(), 1);
    }

    #[test]
    fn oversized_pixmap_fails_at_canvas_stage() {
        let mut backend = SoftwareBackend::new();
        let err = backend.init_canvas(Size::new(u32::MAX, u32::MAX)).unwrap_err();
        assert_eq!(err.stage(), Stage::Canvas);
        assert_eq!(backend.canvases_created(), 0);
    }
}
