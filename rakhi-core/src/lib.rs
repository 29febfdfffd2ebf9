//! # Rakhi Core
//!
//! Core editing engine for Rakhi Studio: an in-memory design model, a
//! snapshot-based undo/redo history, and the pointer-driven drag/resize
//! interaction machinery behind direct manipulation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   Editor                    │
//! ├─────────────────────────────────────────────┤
//! │  Selection       │  Interaction             │
//! │  - Active id     │  - Idle/Drag/Resize      │
//! │  - Layer order   │  - Live geometry         │
//! ├─────────────────────────────────────────────┤
//! │  History         │  Design                  │
//! │  - Snapshots     │  - Shapes & text         │
//! │  - Cursor        │  - Rope & patterns       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The crate is headless: rendering, file access, and network calls live in
//! `rakhi-renderer` and `rakhi-textures`. Everything here mutates on a single
//! sequential call stream, so there is no locking and no async.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod design;
pub mod editor;
pub mod element;
pub mod error;
pub mod geometry;
pub mod history;
pub mod interaction;
pub mod pattern;
pub mod rope;

pub use design::Design;
pub use editor::{Editor, ReorderDirection};
pub use element::{Element, ElementId, Fill, Shape, ShapeKind, Text};
pub use error::{EditorError, EditorResult};
pub use geometry::{Point, Rect};
pub use history::History;
pub use interaction::{Handle, Interaction, MIN_SHAPE_SIZE};
pub use pattern::{Pattern, PatternId};
pub use rope::{RopeEnd, RopeKind, RopeStyle};

/// Rakhi core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
