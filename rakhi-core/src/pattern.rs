//! Image-backed fill patterns.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a pattern.
///
/// Collision-resistant under rapid creation: two patterns created in the same
/// event-loop tick never share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternId(Uuid);

impl PatternId {
    /// Create a new unique pattern ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for PatternId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PatternId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An image-backed fill tile referencable from a shape's fill.
///
/// Immutable once created. Patterns are never deleted even when no element
/// references them anymore; the set only grows within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// Unique identifier, referenced by [`crate::Fill::Pattern`].
    pub id: PatternId,
    /// Image payload as a data URI (`data:image/png;base64,...`).
    pub image: String,
}

impl Pattern {
    /// Create a pattern from an image data URI.
    #[must_use]
    pub fn new(image: String) -> Self {
        Self {
            id: PatternId::new(),
            image,
        }
    }
}
