//! Element bounding boxes and pointer hit resolution.
//!
//! The renderer is the authority on where things are on screen, so it also
//! owns the geometry the host needs to route pointer-downs: per-element
//! bounding boxes and the resize-handle squares of the selection overlay.
//! [`HitMap`] snapshots both in paint order; [`HitMap::hit_test`] resolves a
//! pointer position topmost-first, with handles above element bodies.

use rakhi_core::{Design, Element, ElementId, Handle, Point, Rect, Text};

/// Side length of a resize handle square.
pub const HANDLE_SIZE: f32 = 8.0;

/// Estimated glyph advance as a fraction of font size.
const GLYPH_WIDTH_FACTOR: f32 = 0.6;

/// Estimated line height as a fraction of font size.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// The axis-aligned bounding box of an element.
///
/// Shapes report their stored rect; rotation is ignored for bounds purposes.
/// Text reports estimated metrics centered on its anchor, since real glyph
/// measurement needs a font stack the engine does not carry.
#[must_use]
pub fn element_bounds(element: &Element) -> Rect {
    match element {
        Element::Shape(shape) => shape.rect(),
        Element::Text(text) => text_bounds(text),
    }
}

/// Estimated bounding box of a text element around its middle anchor.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn text_bounds(text: &Text) -> Rect {
    let width = text.content.chars().count() as f32 * text.font_size * GLYPH_WIDTH_FACTOR;
    let height = text.font_size * LINE_HEIGHT_FACTOR;
    Rect::new(text.x - width / 2.0, text.y - height / 2.0, width, height)
}

/// The eight handle squares for a shape rect, centered on the corners and
/// edge midpoints, in overlay render order.
#[must_use]
pub fn handle_rects(rect: Rect) -> [(Handle, Rect); 8] {
    let Rect {
        x,
        y,
        width,
        height,
    } = rect;
    let half = HANDLE_SIZE / 2.0;
    let square = |cx: f32, cy: f32| Rect::new(cx - half, cy - half, HANDLE_SIZE, HANDLE_SIZE);

    [
        (Handle::TopLeft, square(x, y)),
        (Handle::Top, square(x + width / 2.0, y)),
        (Handle::TopRight, square(x + width, y)),
        (Handle::Left, square(x, y + height / 2.0)),
        (Handle::Right, square(x + width, y + height / 2.0)),
        (Handle::BottomLeft, square(x, y + height)),
        (Handle::Bottom, square(x + width / 2.0, y + height)),
        (Handle::BottomRight, square(x + width, y + height)),
    ]
}

/// What a pointer position resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitTarget {
    /// An element body; pointer-down here starts a drag.
    Element(ElementId),
    /// A resize handle of the selected shape; pointer-down starts a resize.
    Handle(ElementId, Handle),
}

/// Hit targets for a rendered design, in paint order.
///
/// Rebuild after every design or selection change; the map is a snapshot,
/// not a live view.
#[derive(Debug, Clone)]
pub struct HitMap {
    targets: Vec<(HitTarget, Rect)>,
}

impl HitMap {
    /// Collect hit targets for the design as rendered with the given
    /// selection.
    ///
    /// Element bodies come first in sequence order; handle squares follow
    /// when the selection resolves to a non-rotated shape, mirroring what
    /// the overlay actually draws.
    #[must_use]
    pub fn build(design: &Design, selection: Option<ElementId>) -> Self {
        let mut targets: Vec<(HitTarget, Rect)> = design
            .elements()
            .iter()
            .map(|element| (HitTarget::Element(element.id()), element_bounds(element)))
            .collect();

        if let Some(id) = selection {
            if let Some(shape) = design.element(id).and_then(Element::as_shape) {
                if !shape.is_rotated() {
                    for (handle, rect) in handle_rects(shape.rect()) {
                        targets.push((HitTarget::Handle(id, handle), rect));
                    }
                }
            }
        }

        Self { targets }
    }

    /// Resolve a pointer position to the topmost target under it, if any.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<HitTarget> {
        self.targets
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(point))
            .map(|(target, _)| *target)
    }

    /// All targets with their rects, in paint order.
    #[must_use]
    pub fn targets(&self) -> &[(HitTarget, Rect)] {
        &self.targets
    }

    /// Number of targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the map has no targets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
