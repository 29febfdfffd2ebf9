//! Error types for editor operations.

use thiserror::Error;

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors a user action can surface.
///
/// Every variant is recoverable: the editor records it in the user-visible
/// error slot and leaves history, selection, and interaction untouched. A
/// later successful commit clears the slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// The operation needs a selected element and none is active.
    #[error("Select an element first")]
    NoSelection,

    /// The operation needs a different element kind than the one targeted.
    #[error("Unsupported target: {0}")]
    UnsupportedTarget(String),

    /// A local image file could not be read or decoded.
    #[error("Failed to read image: {0}")]
    ReadFailure(String),

    /// The remote image call failed or returned no usable image.
    #[error("Image generation failed: {0}")]
    GenerationFailure(String),

    /// Rasterizing the design for download failed.
    #[error("Export failed: {0}")]
    ExportFailure(String),
}

impl EditorError {
    /// Fold a local read failure from a provider crate into editor terms.
    #[must_use]
    pub fn read_failure(detail: impl std::fmt::Display) -> Self {
        Self::ReadFailure(detail.to_string())
    }

    /// Fold a remote generation failure into editor terms.
    #[must_use]
    pub fn generation_failure(detail: impl std::fmt::Display) -> Self {
        Self::GenerationFailure(detail.to_string())
    }

    /// Fold a renderer export failure into editor terms.
    #[must_use]
    pub fn export_failure(detail: impl std::fmt::Display) -> Self {
        Self::ExportFailure(detail.to_string())
    }
}
