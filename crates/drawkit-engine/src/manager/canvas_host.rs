use crate::paint::Color;

use super::Canvas;

/// Draw callback. Receives the freshly cleared canvas.
pub type DrawFn<K> = Box<dyn FnMut(&mut K)>;

/// Canvas slot plus the per-frame clear-and-draw step.
///
/// Both manager variants embed one of these; the variant decides how the canvas
/// is produced and released, the host owns what happens to it in between.
pub struct CanvasHost<K> {
    canvas: Option<K>,
    clear_color: Color,
    on_draw: DrawFn<K>,
}

impl<K: Canvas> CanvasHost<K> {
    pub fn new(on_draw: impl FnMut(&mut K) + 'static) -> Self {
        Self {
            canvas: None,
            clear_color: Color::TRANSPARENT,
            on_draw: Box::new(on_draw),
        }
    }

    #[inline]
    pub fn canvas(&self) -> Option<&K> {
        self.canvas.as_ref()
    }

    #[inline]
    pub fn has_canvas(&self) -> bool {
        self.canvas.is_some()
    }

    #[inline]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    #[inline]
    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    /// Clears to the configured color and runs the callback. No-op without a canvas.
    ///
    /// Returns whether the callback ran.
    pub fn draw(&mut self) -> bool {
        let Some(canvas) = self.canvas.as_mut() else {
            log::trace!("draw skipped: no canvas");
            return false;
        };
        canvas.clear(self.clear_color);
        (self.on_draw)(canvas);
        true
    }

    pub(crate) fn canvas_mut(&mut self) -> Option<&mut K> {
        self.canvas.as_mut()
    }

    pub(crate) fn install(&mut self, canvas: K) {
        debug_assert!(self.canvas.is_none(), "canvas slot already occupied");
        self.canvas = Some(canvas);
    }

    pub(crate) fn take(&mut self) -> Option<K> {
        self.canvas.take()
    }
}
