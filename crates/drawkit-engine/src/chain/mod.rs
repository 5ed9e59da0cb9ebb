//! Resource chain model.
//!
//! A drawable is built as an ordered chain:
//!
//! ```text
//! Context -> RenderTarget -> Surface -> Canvas
//! ```
//!
//! Each resource depends on every resource to its left. Creation walks the chain
//! left to right; release walks it right to left. This module holds the stage
//! vocabulary, the slots that own the three resources beneath a canvas, and the
//! error raised when a stage cannot be built.

mod error;
mod slots;

pub use error::{RenderFailure, RenderResult};
pub use slots::{Chain, ChainState};

use std::fmt;

/// One link of the resource chain.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Stage {
    Context,
    RenderTarget,
    Surface,
    Canvas,
}

impl Stage {
    pub const CREATION_ORDER: [Stage; 4] = [
        Stage::Context,
        Stage::RenderTarget,
        Stage::Surface,
        Stage::Canvas,
    ];

    pub const DISPOSAL_ORDER: [Stage; 4] = [
        Stage::Canvas,
        Stage::Surface,
        Stage::RenderTarget,
        Stage::Context,
    ];

    /// Stage this one is built on top of.
    pub const fn predecessor(self) -> Option<Stage> {
        match self {
            Stage::Context => None,
            Stage::RenderTarget => Some(Stage::Context),
            Stage::Surface => Some(Stage::RenderTarget),
            Stage::Canvas => Some(Stage::Surface),
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Context => "context",
            Stage::RenderTarget => "render target",
            Stage::Surface => "surface",
            Stage::Canvas => "canvas",
        })
    }
}

/// Drawable dimensions in device pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Validates dimensions for the resource created at `stage`.
    ///
    /// Zero-area drawables are rejected instead of being handed to a backend.
    pub fn checked(width: u32, height: u32, stage: Stage) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderFailure::new(
                stage,
                format!("invalid drawable size {width}x{height}"),
            ));
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
