//! Design elements - the shapes and text a rakhi is composed of.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{Point, Rect};
use crate::pattern::PatternId;

/// Unique identifier for an element.
///
/// Assigned at creation, immutable, never reused within or across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Create a new unique element ID.
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

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a shape's interior is painted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Fill {
    /// A solid color as a hex string (e.g. `#fde047`).
    Solid(String),
    /// A reference to an image-backed pattern tile.
    Pattern(PatternId),
}

/// Geometric primitive kinds a shape can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// An ellipse inscribed in the bounding box.
    Circle,
    /// The bounding box itself.
    Rect,
}

/// A geometric shape element.
///
/// Position is the top-left of the bounding box; the circle kind is drawn
/// inscribed within it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier.
    pub id: ElementId,
    /// Which primitive to draw.
    pub kind: ShapeKind,
    /// X position of the bounding box top-left.
    pub x: f32,
    /// Y position of the bounding box top-left.
    pub y: f32,
    /// Bounding box width, kept above [`crate::MIN_SHAPE_SIZE`] by resize.
    pub width: f32,
    /// Bounding box height, kept above [`crate::MIN_SHAPE_SIZE`] by resize.
    pub height: f32,
    /// Interior paint.
    pub fill: Fill,
    /// Outline color as hex.
    pub stroke: String,
    /// Outline width in pixels, >= 0.
    pub stroke_width: f32,
    /// Rotation in degrees, [0, 360). Rotated shapes expose no resize handles.
    pub rotation: f32,
}

impl Shape {
    /// Create a shape with the palette defaults for newly added elements.
    #[must_use]
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            id: ElementId::new(),
            kind,
            x: 250.0,
            y: 100.0,
            width: 100.0,
            height: 100.0,
            fill: Fill::Solid("#86efac".to_string()),
            stroke: "#16a34a".to_string(),
            stroke_width: 2.0,
            rotation: 0.0,
        }
    }

    /// The shape's bounding box.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Whether the shape has a non-zero rotation. Rotated shapes expose no
    /// resize handles and draw no selection overlay.
    #[must_use]
    pub fn is_rotated(&self) -> bool {
        self.rotation.abs() > f32::EPSILON
    }
}

/// A text element anchored at a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Unique identifier.
    pub id: ElementId,
    /// X coordinate of the anchor point (text is middle-anchored).
    pub x: f32,
    /// Y coordinate of the anchor point.
    pub y: f32,
    /// Text content, may be empty.
    pub content: String,
    /// Text color as hex.
    pub fill: String,
    /// Font size in pixels, > 0.
    pub font_size: f32,
    /// Font family name.
    pub font_family: String,
}

impl Text {
    /// Create a text element with the palette defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ElementId::new(),
            x: 300.0,
            y: 50.0,
            content: "Happy Rakhi!".to_string(),
            fill: "#be185d".to_string(),
            font_size: 24.0,
            font_family: "Georgia".to_string(),
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

/// A design element: either a shape or a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// A geometric shape.
    Shape(Shape),
    /// A text label.
    Text(Text),
}

impl Element {
    /// The element's unique identifier.
    #[must_use]
    pub fn id(&self) -> ElementId {
        match self {
            Self::Shape(shape) => shape.id,
            Self::Text(text) => text.id,
        }
    }

    /// Whether this element is a shape (and can carry a pattern fill or
    /// resize handles).
    #[must_use]
    pub fn is_shape(&self) -> bool {
        matches!(self, Self::Shape(_))
    }

    /// Borrow the shape payload, if this element is one.
    #[must_use]
    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            Self::Shape(shape) => Some(shape),
            Self::Text(_) => None,
        }
    }

    /// Mutably borrow the shape payload, if this element is one.
    pub fn as_shape_mut(&mut self) -> Option<&mut Shape> {
        match self {
            Self::Shape(shape) => Some(shape),
            Self::Text(_) => None,
        }
    }

    /// Borrow the text payload, if this element is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Shape(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Mutably borrow the text payload, if this element is one.
    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Self::Shape(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// The element's position: top-left for shapes, anchor for text.
    #[must_use]
    pub fn position(&self) -> Point {
        match self {
            Self::Shape(shape) => Point::new(shape.x, shape.y),
            Self::Text(text) => Point::new(text.x, text.y),
        }
    }

    /// Move the element to a new position.
    pub fn set_position(&mut self, position: Point) {
        match self {
            Self::Shape(shape) => {
                shape.x = position.x;
                shape.y = position.y;
            }
            Self::Text(text) => {
                text.x = position.x;
                text.y = position.y;
            }
        }
    }
}
