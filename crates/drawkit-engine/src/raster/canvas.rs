use std::path::Path;

use anyhow::{Context, Result};

use crate::chain::Size;
use crate::manager::Canvas;
use crate::paint::Color;

/// Canvas backed by a tiny-skia pixmap.
#[derive(Debug)]
pub struct RasterCanvas {
    pixmap: tiny_skia::Pixmap,
}

impl RasterCanvas {
    pub(crate) fn new(pixmap: tiny_skia::Pixmap) -> Self {
        Self { pixmap }
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.pixmap.width(), self.pixmap.height())
    }

    #[inline]
    pub fn pixmap(&self) -> &tiny_skia::Pixmap {
        &self.pixmap
    }

    /// Drawing surface for tiny-skia paths, fills and strokes.
    #[inline]
    pub fn pixmap_mut(&mut self) -> &mut tiny_skia::Pixmap {
        &mut self.pixmap
    }

    /// Premultiplied RGBA at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap
            .pixel(x, y)
            .map(|p| [p.red(), p.green(), p.blue(), p.alpha()])
    }

    /// Fills an axis-aligned rectangle in device pixels.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let Some(rect) = tiny_skia::Rect::from_xywh(x, y, width, height) else {
            return;
        };
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(color.to_tiny_skia());
        self.pixmap
            .fill_rect(rect, &paint, tiny_skia::Transform::identity(), None);
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.pixmap
            .save_png(path)
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

impl Canvas for RasterCanvas {
    fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.to_tiny_skia());
    }
}
