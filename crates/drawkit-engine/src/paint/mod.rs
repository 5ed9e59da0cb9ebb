//! Paint model shared by the managers and backends.
//!
//! Colors are stored as linear premultiplied RGBA and converted at the backend
//! boundary (wgpu clear values, tiny-skia pixmap fills).

pub mod color;

pub use color::Color;
