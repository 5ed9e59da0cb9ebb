//! Drawkit engine crate.
//!
//! Lifecycle management for on-screen drawing resources: a GPU context, the
//! render target bound to a window, the surface built on it and the canvas handed
//! to application drawing code. Creation follows the chain order, disposal
//! reverses it, and resizes rebuild everything beneath the context.

pub mod chain;
pub mod device;
pub mod host;
pub mod logging;
pub mod manager;
pub mod paint;
pub mod raster;
pub mod registry;
pub mod window;

pub use chain::{RenderFailure, RenderResult, Size, Stage};
pub use manager::{Canvas, DrawManager, GpuBackend, GpuDrawManager, RasterBackend, RasterDrawManager};
pub use paint::Color;
