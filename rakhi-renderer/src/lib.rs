//! # Rakhi Renderer
//!
//! Render surface and exporter for rakhi designs. Everything flows through
//! one SVG scene representation:
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  Design (model)                 │
//! ├────────────────────────┬────────────────────────┤
//! │ render_svg + HitMap    │ DesignExporter         │
//! │ (editing surface,      │ (selection-free scene, │
//! │  overlay + hit rects)  │  resvg -> PNG/JPEG)    │
//! └────────────────────────┴────────────────────────┘
//! ```
//!
//! The editing surface gets the overlay and the hit geometry that drives
//! gesture routing; the exporter renders the same scene without any overlay
//! so editor chrome cannot end up in shared output.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bounds;
pub mod error;
pub mod export;
pub mod svg;

pub use bounds::{element_bounds, handle_rects, text_bounds, HitMap, HitTarget, HANDLE_SIZE};
pub use error::{RenderError, RenderResult};
pub use export::{DesignExporter, ExportConfig, ExportFormat};
pub use svg::render_svg;
