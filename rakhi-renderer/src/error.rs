//! Renderer error types.

use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rasterizing or exporting a design.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The SVG scene could not be parsed or rasterized.
    #[error("Rasterization failed: {0}")]
    Raster(String),

    /// Encoding the raster output failed.
    #[error("Export encoding failed: {0}")]
    Export(String),
}
