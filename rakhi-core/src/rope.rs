//! Rope styling - the cord the rakhi hangs on.

use serde::{Deserialize, Serialize};

/// How the rope cord itself is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RopeKind {
    /// A plain solid thread.
    Thread,
    /// Dashed links suggesting a chain.
    Chain,
    /// Dotted round beads strung along the cord.
    Beads,
}

/// Decoration drawn at both rope ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RopeEnd {
    /// Fanned tassel strands.
    Tassel,
    /// A metal clasp.
    MetalLock,
}

/// The single global rope style of a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RopeStyle {
    /// Cord rendering kind.
    pub kind: RopeKind,
    /// Cord color as hex.
    pub color: String,
    /// End-cap decoration kind.
    pub end: RopeEnd,
    /// Signed vertical offset bowing the rope curve. The editing panel
    /// offers [-50, 50]; the model does not enforce a bound.
    pub curvature: f32,
}

impl Default for RopeStyle {
    fn default() -> Self {
        Self {
            kind: RopeKind::Thread,
            color: "#dc2626".to_string(),
            end: RopeEnd::Tassel,
            curvature: 0.0,
        }
    }
}
