//! SVG scene construction.
//!
//! Builds the editing-surface markup for a design: pattern defs, the rope
//! with its end decorations, every element in sequence order (later elements
//! paint on top), and the selection overlay last. The exporter reuses the
//! same scene body without the overlay.

use std::fmt::Write;

use rakhi_core::{
    Design, Element, ElementId, Fill, Handle, Rect, RopeEnd, RopeKind, RopeStyle, Shape,
    ShapeKind, Text,
};
use tracing::trace;

use crate::bounds::{handle_rects, text_bounds, HANDLE_SIZE};

/// Reach of the rope end decorations in pixels.
const ROPE_END_SIZE: f32 = 15.0;

/// Accent color of the selection overlay.
const SELECTION_COLOR: &str = "#0ea5e9";

/// Render a design to a complete SVG document for the editing surface.
///
/// The selection overlay (dashed box plus handle squares for a non-rotated
/// shape, dashed box only for text, nothing for a rotated shape) is drawn
/// last so it sits above everything. Handle squares carry a `data-handle`
/// attribute and a resize cursor so hosts can route pointer-downs.
#[must_use]
pub fn render_svg(design: &Design, selection: Option<ElementId>) -> String {
    let width = design.canvas_width;
    let height = design.canvas_height;

    let mut svg = String::with_capacity(4096);
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    );

    render_scene(&mut svg, design);

    if let Some(id) = selection {
        render_selection(&mut svg, design, id);
    }

    svg.push_str("</svg>");
    trace!(bytes = svg.len(), "scene rendered");
    svg
}

/// Write pattern defs, rope, and elements without the document envelope.
pub(crate) fn render_scene(svg: &mut String, design: &Design) {
    if !design.patterns().is_empty() {
        svg.push_str("<defs>");
        for pattern in design.patterns() {
            let _ = write!(
                svg,
                "<pattern id=\"pat-{}\" patternContentUnits=\"objectBoundingBox\" width=\"1\" height=\"1\">\
                 <image href=\"{}\" x=\"0\" y=\"0\" width=\"1\" height=\"1\" preserveAspectRatio=\"xMidYMid slice\"/>\
                 </pattern>",
                pattern.id,
                escape_xml(&pattern.image),
            );
        }
        svg.push_str("</defs>");
    }

    render_rope(svg, &design.rope, design.canvas_width, design.canvas_height);

    for element in design.elements() {
        match element {
            Element::Shape(shape) => render_shape(svg, shape),
            Element::Text(text) => render_text(svg, text),
        }
    }
}

/// Draw the rope: a quadratic curve across the canvas bowed by curvature,
/// with the end decorations on top.
fn render_rope(svg: &mut String, rope: &RopeStyle, width: f32, height: f32) {
    let mid_y = height / 2.0;
    let control_x = width / 2.0;
    let control_y = mid_y + rope.curvature;
    let color = escape_xml(&rope.color);

    let (stroke_width, dash, linecap) = match rope.kind {
        RopeKind::Thread => (4.0, None, "butt"),
        RopeKind::Chain => (4.0, Some("10 5"), "butt"),
        RopeKind::Beads => (6.0, Some("2 8"), "round"),
    };

    svg.push_str("<g>");
    let _ = write!(
        svg,
        "<path d=\"M0,{mid_y} Q{control_x},{control_y} {width},{mid_y}\" stroke=\"{color}\" stroke-width=\"{stroke_width}\" stroke-linecap=\"{linecap}\" fill=\"none\"",
    );
    if let Some(dash) = dash {
        let _ = write!(svg, " stroke-dasharray=\"{dash}\"");
    }
    svg.push_str("/>");

    match rope.end {
        RopeEnd::Tassel => {
            let top = mid_y - ROPE_END_SIZE;
            let bottom = mid_y + ROPE_END_SIZE;
            let _ = write!(
                svg,
                "<path d=\"M{ROPE_END_SIZE},{top} L0,{mid_y} L{ROPE_END_SIZE},{bottom}\" stroke=\"{color}\" stroke-width=\"2\" fill=\"none\"/>",
            );
            let inner = width - ROPE_END_SIZE;
            let _ = write!(
                svg,
                "<path d=\"M{inner},{top} L{width},{mid_y} L{inner},{bottom}\" stroke=\"{color}\" stroke-width=\"2\" fill=\"none\"/>",
            );
        }
        RopeEnd::MetalLock => {
            let _ = write!(
                svg,
                "<rect x=\"0\" y=\"{}\" width=\"10\" height=\"10\" fill=\"silver\" stroke=\"gray\"/>",
                mid_y - 5.0,
            );
            let _ = write!(
                svg,
                "<circle cx=\"{}\" cy=\"{mid_y}\" r=\"5\" fill=\"silver\" stroke=\"gray\"/>",
                width - 5.0,
            );
        }
    }
    svg.push_str("</g>");
}

fn render_shape(svg: &mut String, shape: &Shape) {
    let fill = fill_attr(&shape.fill);
    let stroke = escape_xml(&shape.stroke);
    // Rotation pivots on the translated local origin, the rect's top-left.
    let common = format!(
        "transform=\"translate({}, {}) rotate({})\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"{}\" style=\"cursor: move\"",
        shape.x, shape.y, shape.rotation, shape.stroke_width,
    );

    match shape.kind {
        ShapeKind::Circle => {
            let _ = write!(
                svg,
                "<circle id=\"el-{}\" cx=\"{}\" cy=\"{}\" r=\"{}\" {common}/>",
                shape.id,
                shape.width / 2.0,
                shape.height / 2.0,
                shape.width.min(shape.height) / 2.0,
            );
        }
        ShapeKind::Rect => {
            let _ = write!(
                svg,
                "<rect id=\"el-{}\" width=\"{}\" height=\"{}\" {common}/>",
                shape.id, shape.width, shape.height,
            );
        }
    }
}

fn render_text(svg: &mut String, text: &Text) {
    let escaped = escape_xml(&text.content);
    let fill = escape_xml(&text.fill);
    let family = escape_xml(&text.font_family);
    let _ = write!(
        svg,
        "<text id=\"el-{}\" x=\"{}\" y=\"{}\" fill=\"{fill}\" font-size=\"{}\" font-family=\"{family}\" text-anchor=\"middle\" dominant-baseline=\"middle\" style=\"cursor: move\">{escaped}</text>",
        text.id, text.x, text.y, text.font_size,
    );
}

/// Draw the overlay for the selected element, if it warrants one.
fn render_selection(svg: &mut String, design: &Design, selection: ElementId) {
    let Some(element) = design.element(selection) else {
        return;
    };

    match element {
        Element::Shape(shape) => {
            if shape.is_rotated() {
                return;
            }
            let rect = shape.rect();
            svg.push_str("<g>");
            dashed_box(svg, rect);
            for (handle, square) in handle_rects(rect) {
                let _ = write!(
                    svg,
                    "<rect x=\"{}\" y=\"{}\" width=\"{HANDLE_SIZE}\" height=\"{HANDLE_SIZE}\" fill=\"{SELECTION_COLOR}\" stroke=\"white\" stroke-width=\"1\" style=\"cursor: {}\" data-handle=\"{handle}\"/>",
                    square.x,
                    square.y,
                    handle_cursor(handle),
                );
            }
            svg.push_str("</g>");
        }
        Element::Text(text) => dashed_box(svg, text_bounds(text)),
    }
}

fn dashed_box(svg: &mut String, rect: Rect) {
    let _ = write!(
        svg,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{SELECTION_COLOR}\" stroke-width=\"1\" stroke-dasharray=\"3 3\"/>",
        rect.x, rect.y, rect.width, rect.height,
    );
}

/// The CSS cursor a handle square advertises.
fn handle_cursor(handle: Handle) -> &'static str {
    match handle {
        Handle::TopLeft | Handle::BottomRight => "nwse-resize",
        Handle::TopRight | Handle::BottomLeft => "nesw-resize",
        Handle::Top | Handle::Bottom => "ns-resize",
        Handle::Left | Handle::Right => "ew-resize",
    }
}

fn fill_attr(fill: &Fill) -> String {
    match fill {
        Fill::Solid(color) => escape_xml(color),
        Fill::Pattern(id) => format!("url(#pat-{id})"),
    }
}

/// Escape special XML characters.
fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
