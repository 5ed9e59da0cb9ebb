use std::error::Error as StdError;

use thiserror::Error;

use super::Stage;

/// Result type for chain construction.
pub type RenderResult<T> = Result<T, RenderFailure>;

/// A resource in the chain could not be created.
///
/// `stage` names the resource that failed. Every stage before it in
/// [`Stage::CREATION_ORDER`] was live when the failure was raised.
#[derive(Debug, Error)]
#[error("failed to create {stage}: {message}")]
pub struct RenderFailure {
    stage: Stage,
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl RenderFailure {
    pub fn new(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
            source: None,
        }
    }

    /// Wraps a lower-level error, keeping it reachable through `source()`.
    pub fn with_source<E>(stage: Stage, message: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            stage,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn context(message: impl Into<String>) -> Self {
        Self::new(Stage::Context, message)
    }

    pub fn render_target(message: impl Into<String>) -> Self {
        Self::new(Stage::RenderTarget, message)
    }

    pub fn surface(message: impl Into<String>) -> Self {
        Self::new(Stage::Surface, message)
    }

    pub fn canvas(message: impl Into<String>) -> Self {
        Self::new(Stage::Canvas, message)
    }

    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_stage_and_message() {
        let err = RenderFailure::render_target("surface is 0x0");
        assert_eq!(err.to_string(), "failed to create render target: surface is 0x0");
        assert_eq!(err.stage(), Stage::RenderTarget);
    }

    #[test]
    fn source_is_preserved() {
        let io = std::io::Error::other("adapter vanished");
        let err = RenderFailure::with_source(Stage::Context, "no adapter", io);
        let src = err.source().expect("source kept");
        assert_eq!(src.to_string(), "adapter vanished");
    }

    #[test]
    fn plain_failure_has_no_source() {
        assert!(RenderFailure::canvas("x").source().is_none());
    }
}
