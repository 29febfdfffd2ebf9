//! Pointer gesture state and resize geometry.
//!
//! A gesture is one pointer-down -> move -> up sequence. The state captured
//! at pointer-down is enough to recompute geometry from absolute pointer
//! positions, so move events are stateless deltas against the start. Gesture
//! state is ephemeral and never enters history.

use serde::{Deserialize, Serialize};

use crate::element::ElementId;
use crate::geometry::{Point, Rect};

/// Smallest width/height a resize can produce.
pub const MIN_SHAPE_SIZE: f32 = 10.0;

/// One of the eight resize handles on a selected shape's bounding box.
///
/// The name encodes which edges the handle moves: corner handles move two
/// edges, edge handles move one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    /// Top-left corner.
    TopLeft,
    /// Top edge midpoint.
    Top,
    /// Top-right corner.
    TopRight,
    /// Left edge midpoint.
    Left,
    /// Right edge midpoint.
    Right,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom edge midpoint.
    Bottom,
    /// Bottom-right corner.
    BottomRight,
}

impl Handle {
    /// All eight handles in render order (top row, middle row, bottom row).
    pub const ALL: [Self; 8] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Left,
        Self::Right,
        Self::BottomLeft,
        Self::Bottom,
        Self::BottomRight,
    ];

    /// Short name used for hit-target keys and markup attributes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "tl",
            Self::Top => "t",
            Self::TopRight => "tr",
            Self::Left => "l",
            Self::Right => "r",
            Self::BottomLeft => "bl",
            Self::Bottom => "b",
            Self::BottomRight => "br",
        }
    }

    /// Whether dragging this handle moves the left edge.
    #[must_use]
    pub fn moves_left_edge(self) -> bool {
        matches!(self, Self::TopLeft | Self::Left | Self::BottomLeft)
    }

    /// Whether dragging this handle moves the right edge.
    #[must_use]
    pub fn moves_right_edge(self) -> bool {
        matches!(self, Self::TopRight | Self::Right | Self::BottomRight)
    }

    /// Whether dragging this handle moves the top edge.
    #[must_use]
    pub fn moves_top_edge(self) -> bool {
        matches!(self, Self::TopLeft | Self::Top | Self::TopRight)
    }

    /// Whether dragging this handle moves the bottom edge.
    #[must_use]
    pub fn moves_bottom_edge(self) -> bool {
        matches!(self, Self::BottomLeft | Self::Bottom | Self::BottomRight)
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The in-progress gesture, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Interaction {
    /// No gesture in progress.
    #[default]
    Idle,
    /// An element body is being dragged.
    Dragging {
        /// The element under the pointer.
        element: ElementId,
        /// Pointer position at pointer-down, canvas coordinates.
        pointer_start: Point,
        /// The element's position at pointer-down.
        element_start: Point,
    },
    /// A selected shape is being resized by one handle.
    Resizing {
        /// The shape being resized.
        element: ElementId,
        /// Which handle was grabbed.
        handle: Handle,
        /// Pointer position at pointer-down, canvas coordinates.
        pointer_start: Point,
        /// The shape's rect at pointer-down.
        start_rect: Rect,
    },
}

impl Interaction {
    /// Whether no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Position of a dragged element for the given pointer movement.
#[must_use]
pub fn dragged_position(element_start: Point, pointer_start: Point, pointer: Point) -> Point {
    Point::new(
        element_start.x + (pointer.x - pointer_start.x),
        element_start.y + (pointer.y - pointer_start.y),
    )
}

/// Rect of a resized shape for the given pointer movement.
///
/// The handle decides which edges follow the pointer. x/y are computed from
/// the unclamped delta; the clamp to [`MIN_SHAPE_SIZE`] applies only to the
/// final width/height and never corrects x/y, so overshooting a left/top
/// handle snaps the size to the minimum while the origin keeps the full
/// delta.
#[must_use]
pub fn resized_rect(start: Rect, handle: Handle, dx: f32, dy: f32) -> Rect {
    let mut x = start.x;
    let mut y = start.y;
    let mut width = start.width;
    let mut height = start.height;

    if handle.moves_left_edge() {
        width -= dx;
        x += dx;
    } else if handle.moves_right_edge() {
        width += dx;
    }

    if handle.moves_top_edge() {
        height -= dy;
        y += dy;
    } else if handle.moves_bottom_edge() {
        height += dy;
    }

    Rect::new(x, y, width.max(MIN_SHAPE_SIZE), height.max(MIN_SHAPE_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_names() {
        let names: Vec<&str> = Handle::ALL.iter().map(|h| h.as_str()).collect();
        assert_eq!(names, ["tl", "t", "tr", "l", "r", "bl", "b", "br"]);
    }

    #[test]
    fn test_handle_edges() {
        assert!(Handle::TopLeft.moves_left_edge());
        assert!(Handle::TopLeft.moves_top_edge());
        assert!(!Handle::TopLeft.moves_right_edge());
        assert!(!Handle::TopLeft.moves_bottom_edge());

        assert!(Handle::Right.moves_right_edge());
        assert!(!Handle::Right.moves_top_edge());
        assert!(!Handle::Right.moves_bottom_edge());

        assert!(Handle::Bottom.moves_bottom_edge());
        assert!(!Handle::Bottom.moves_left_edge());
    }

    #[test]
    fn test_dragged_position_applies_delta() {
        let pos = dragged_position(
            Point::new(100.0, 50.0),
            Point::new(10.0, 10.0),
            Point::new(25.0, 5.0),
        );
        assert_eq!(pos, Point::new(115.0, 45.0));
    }

    #[test]
    fn test_drag_has_no_bounds_clamp() {
        let pos = dragged_position(
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(-500.0, -500.0),
        );
        assert_eq!(pos, Point::new(-500.0, -500.0));
    }

    #[test]
    fn test_resize_bottom_right_grows_both_axes() {
        let rect = resized_rect(
            Rect::new(10.0, 10.0, 50.0, 50.0),
            Handle::BottomRight,
            20.0,
            5.0,
        );
        assert_eq!(rect, Rect::new(10.0, 10.0, 70.0, 55.0));
    }

    #[test]
    fn test_resize_top_left_shrinks_and_moves_origin() {
        let rect = resized_rect(
            Rect::new(10.0, 10.0, 50.0, 50.0),
            Handle::TopLeft,
            5.0,
            8.0,
        );
        assert_eq!(rect, Rect::new(15.0, 18.0, 45.0, 42.0));
    }

    #[test]
    fn test_resize_clamp_keeps_unclamped_origin_shift() {
        // Overshooting the minimum: width snaps to 10 but x still moves by
        // the full 45.
        let rect = resized_rect(
            Rect::new(10.0, 10.0, 50.0, 50.0),
            Handle::TopLeft,
            45.0,
            0.0,
        );
        assert_eq!(rect, Rect::new(55.0, 10.0, MIN_SHAPE_SIZE, 50.0));
    }

    #[test]
    fn test_resize_clamp_applies_to_height_too() {
        let rect = resized_rect(
            Rect::new(0.0, 0.0, 40.0, 40.0),
            Handle::Top,
            0.0,
            100.0,
        );
        assert_eq!(rect, Rect::new(0.0, 100.0, 40.0, MIN_SHAPE_SIZE));
    }

    #[test]
    fn test_edge_handles_move_single_axis() {
        let start = Rect::new(0.0, 0.0, 40.0, 40.0);

        let rect = resized_rect(start, Handle::Left, -10.0, 99.0);
        assert_eq!(rect, Rect::new(-10.0, 0.0, 50.0, 40.0));

        let rect = resized_rect(start, Handle::Bottom, 99.0, 10.0);
        assert_eq!(rect, Rect::new(0.0, 0.0, 40.0, 50.0));
    }

    #[test]
    fn test_negative_deltas_grow_top_left() {
        let rect = resized_rect(
            Rect::new(50.0, 50.0, 30.0, 30.0),
            Handle::TopLeft,
            -20.0,
            -10.0,
        );
        assert_eq!(rect, Rect::new(30.0, 40.0, 50.0, 40.0));
    }

    #[test]
    fn test_interaction_default_is_idle() {
        assert!(Interaction::default().is_idle());
        let dragging = Interaction::Dragging {
            element: ElementId::new(),
            pointer_start: Point::new(0.0, 0.0),
            element_start: Point::new(0.0, 0.0),
        };
        assert!(!dragging.is_idle());
    }
}
