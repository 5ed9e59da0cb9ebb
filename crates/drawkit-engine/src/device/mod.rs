//! wgpu backend for [`GpuDrawManager`](crate::manager::GpuDrawManager).
//!
//! Chain mapping:
//! - context: instance, window surface, adapter, device and queue
//! - render target: the window surface configured at a given size
//! - surface: an offscreen color texture matching the render target
//! - canvas: [`WgpuCanvas`], recording into that texture
//!
//! A flush submits the canvas commands, copies the offscreen texture into the
//! acquired swapchain texture and presents it.

mod backend;
mod canvas;
mod context;
mod error;
mod init;
mod surface;
mod target;

pub use backend::WgpuBackend;
pub use canvas::{FramePass, WgpuCanvas};
pub use context::WgpuContext;
pub use error::SurfaceErrorAction;
pub use init::GpuConfig;
pub use target::{WgpuRenderTarget, WgpuSurface};
