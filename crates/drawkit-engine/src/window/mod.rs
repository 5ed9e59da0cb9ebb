//! Window + runtime loop.
//!
//! Owns the `winit` event loop and window, and drives a
//! [`GpuDrawManager`](crate::manager::GpuDrawManager) from window events.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
