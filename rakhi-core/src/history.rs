//! Snapshot history with undo/redo.
//!
//! History holds full [`Design`] snapshots plus a cursor. Discrete edits go
//! through [`History::commit`]; high-frequency gesture updates go through
//! [`History::apply_live`], which rewrites the snapshot at the cursor without
//! growing the sequence; gesture completion calls [`History::finalize`] to
//! promote the live result to a durable step. Exactly one of commit or
//! apply_live is used per logical user action.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::design::Design;

/// Ordered design snapshots plus a cursor.
///
/// Invariants: the sequence is never empty and `cursor < len` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Design>,
    cursor: usize,
}

impl History {
    /// Create a history seeded with an initial design.
    #[must_use]
    pub fn new(initial: Design) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// The design at the cursor - the current source of truth.
    #[must_use]
    pub fn current(&self) -> &Design {
        &self.snapshots[self.cursor]
    }

    /// Commit a new design as a durable step.
    ///
    /// Discards any snapshots after the cursor (the redo branch), appends the
    /// design, and moves the cursor onto it.
    pub fn commit(&mut self, design: Design) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(design);
        self.cursor = self.snapshots.len() - 1;
        debug!(len = self.snapshots.len(), cursor = self.cursor, "commit");
    }

    /// Replace the snapshot at the cursor without creating a new step.
    ///
    /// Used for intermediate gesture states (pointer moves, slider drags) so
    /// history is not flooded; the sequence length and the redo branch are
    /// untouched.
    pub fn apply_live(&mut self, design: Design) {
        self.snapshots[self.cursor] = design;
        trace!(cursor = self.cursor, "apply_live");
    }

    /// Promote the snapshot at the cursor to a durable step.
    ///
    /// After a gesture's apply_live stream, the cursor slot already holds the
    /// final value; finalizing truncates any stale redo branch after it and
    /// changes nothing else.
    pub fn finalize(&mut self) {
        self.snapshots.truncate(self.cursor + 1);
        debug!(len = self.snapshots.len(), cursor = self.cursor, "finalize");
    }

    /// Step the cursor back one snapshot. Returns whether it moved.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        debug!(cursor = self.cursor, "undo");
        true
    }

    /// Step the cursor forward one snapshot. Returns whether it moved.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.snapshots.len() {
            return false;
        }
        self.cursor += 1;
        debug!(cursor = self.cursor, "redo");
        true
    }

    /// Whether undo would move the cursor.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether redo would move the cursor.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the sequence is seeded at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The cursor position, `0 <= cursor < len`.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Design::default())
    }
}
