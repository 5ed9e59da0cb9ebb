//! Draw managers.
//!
//! A draw manager creates a [`Canvas`], draws on it, resizes it and disposes it:
//!
//! - call [`DrawManager::initiate`] before drawing
//! - call [`DrawManager::resize`] whenever the drawable changes size
//! - call [`DrawManager::draw`] on whatever cadence the host renders at
//! - call [`DrawManager::dispose`] when done; `initiate` may be called again afterwards
//!
//! Two variants share this contract. [`RasterDrawManager`] creates its canvas
//! directly. [`GpuDrawManager`] builds the full context/render-target/surface chain
//! beneath the canvas.
//!
//! Managers are single-threaded: calls on one instance must be serialized by the caller.

mod gpu;
mod canvas_host;
mod raster;

pub use gpu::{FlushCtx, GpuBackend, GpuDrawManager};
pub use canvas_host::{CanvasHost, DrawFn};
pub use raster::{RasterBackend, RasterDrawManager};

use crate::chain::{ChainState, RenderResult};
use crate::paint::Color;

/// Drawing handle handed to the draw callback.
pub trait Canvas {
    /// Fills the whole canvas with `color`, discarding previous content.
    fn clear(&mut self, color: Color);
}

/// Lifecycle contract shared by every manager variant.
pub trait DrawManager {
    type Canvas: Canvas;

    /// Creates the canvas and everything it depends on.
    ///
    /// On failure nothing is rolled back: resources created before the failing
    /// stage stay held until [`dispose`](Self::dispose) is called.
    fn initiate(&mut self) -> RenderResult<()>;

    /// Clears the canvas and runs the draw callback on it.
    ///
    /// Never creates or releases resources. Returns immediately when no canvas is held.
    fn draw(&mut self);

    /// Rebuilds size-dependent resources for `width` x `height` device pixels.
    ///
    /// A manager that is not [initiated](Self::is_initiated) only validates and records
    /// the size, so `Ok` does not mean anything was rebuilt.
    fn resize(&mut self, width: u32, height: u32) -> RenderResult<()>;

    /// Releases every held resource. Safe before `initiate` and safe to repeat.
    fn dispose(&mut self);

    /// Backend, OS and architecture description. Has no side effects.
    fn renderer_info(&self) -> String;

    fn clear_color(&self) -> Color;

    /// Takes effect on the next [`draw`](Self::draw).
    fn set_clear_color(&mut self, color: Color);

    /// Whether the root resource is held: the context for a chained manager, the
    /// canvas for a direct one.
    fn is_initiated(&self) -> bool;

    /// Whether a canvas is currently held.
    fn has_canvas(&self) -> bool;

    fn chain_state(&self) -> ChainState;
}
