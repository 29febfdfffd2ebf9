//! Editor Workflow Integration Tests
//!
//! Tests complete editing sessions against the public API:
//! - Building up a design (add, style, reorder, delete)
//! - Drag and resize gestures end to end
//! - Undo/redo interplay with gestures and live edits
//! - Texture application including mid-flight design changes
//! - The user-visible error surface
//! - Design persistence through JSON

use rakhi_core::{
    Design, Editor, EditorError, Element, ElementId, Fill, Handle, Point, Rect,
    ReorderDirection, RopeEnd, RopeKind, ShapeKind,
};

/// Run a full drag gesture on the given element.
fn drag(editor: &mut Editor, id: ElementId, from: Point, to: Point) {
    editor.begin_drag(id, from);
    editor.pointer_moved(to);
    editor.pointer_released();
}

/// Run a full resize gesture on the given shape.
fn resize(editor: &mut Editor, id: ElementId, handle: Handle, from: Point, to: Point) {
    editor.begin_resize(id, handle, from);
    editor.pointer_moved(to);
    editor.pointer_released();
}

/// The bounding rect of a shape element.
fn rect_of(editor: &Editor, id: ElementId) -> Rect {
    editor
        .design()
        .element(id)
        .and_then(Element::as_shape)
        .expect("shape exists")
        .rect()
}

// ============================================================================
// Design Session Workflow
// ============================================================================

#[test]
fn test_starter_design_is_ready_to_edit() {
    let editor = Editor::new();

    assert_eq!(editor.design().element_count(), 1);
    assert!((editor.design().canvas_width - 600.0).abs() < f32::EPSILON);
    assert!((editor.design().canvas_height - 300.0).abs() < f32::EPSILON);
    assert_eq!(editor.design().rope.kind, RopeKind::Thread);

    // The golden circle starts selected so the style panel is live.
    let selected = editor.selected_element().expect("starter selected");
    let shape = selected.as_shape().expect("starter is a shape");
    assert_eq!(shape.fill, Fill::Solid("#fde047".to_string()));
}

#[test]
fn test_building_a_design_step_by_step() {
    let mut editor = Editor::new();

    let band = editor.add_shape(ShapeKind::Rect);
    let greeting = editor.add_text();
    assert_eq!(editor.design().element_count(), 3);
    assert_eq!(editor.history().len(), 3);
    assert_eq!(editor.selection(), Some(greeting));

    // Retitle the greeting through a typing run, one history step total.
    for content in ["R", "Rakhi", "Rakhi 2025"] {
        editor.update_element_live(greeting, |element| {
            if let Some(text) = element.as_text_mut() {
                text.content = content.to_string();
            }
        });
    }
    editor.commit_edits();
    assert_eq!(editor.history().len(), 3);

    // Slide the band into place.
    drag(
        &mut editor,
        band,
        Point::new(300.0, 150.0),
        Point::new(330.0, 150.0),
    );
    assert_eq!(rect_of(&editor, band), Rect::new(280.0, 100.0, 100.0, 100.0));

    let text = editor
        .design()
        .element(greeting)
        .and_then(Element::as_text)
        .expect("greeting exists");
    assert_eq!(text.content, "Rakhi 2025");
}

#[test]
fn test_layering_controls_reorder_the_stack() {
    let mut editor = Editor::new();
    let starter = editor.design().elements()[0].id();
    let band = editor.add_shape(ShapeKind::Rect);

    // The new band renders above the starter circle; send it behind.
    editor.reorder_element(band, ReorderDirection::Down);
    assert_eq!(editor.design().index_of(band), Some(0));
    assert_eq!(editor.design().index_of(starter), Some(1));
    assert_eq!(editor.selection(), Some(band));

    // And bring it back.
    editor.reorder_element(band, ReorderDirection::Up);
    assert_eq!(editor.design().index_of(band), Some(1));
}

#[test]
fn test_delete_selected_element_empties_panel() {
    let mut editor = Editor::new();
    let band = editor.add_shape(ShapeKind::Rect);
    assert_eq!(editor.selection(), Some(band));

    editor.delete_element(band);
    assert_eq!(editor.selection(), None);
    assert!(editor.selected_element().is_none());
    assert_eq!(editor.design().element_count(), 1);
}

#[test]
fn test_design_can_be_emptied_completely() {
    let mut editor = Editor::new();
    let starter = editor.design().elements()[0].id();
    editor.delete_element(starter);

    assert!(editor.design().is_empty());
    assert_eq!(editor.selection(), None);

    // An empty design still accepts new elements.
    let fresh = editor.add_shape(ShapeKind::Circle);
    assert_eq!(editor.design().index_of(fresh), Some(0));
}

// ============================================================================
// Gesture Workflows
// ============================================================================

#[test]
fn test_drag_tracks_pointer_from_gesture_start() {
    let mut editor = Editor::new();
    let band = editor.add_shape(ShapeKind::Rect); // at (250, 100)

    // Grab the band off-center; the offset is preserved throughout.
    editor.begin_drag(band, Point::new(260.0, 180.0));
    editor.pointer_moved(Point::new(460.0, 180.0));
    assert_eq!(rect_of(&editor, band), Rect::new(450.0, 100.0, 100.0, 100.0));

    // Overshoot and come back; positions derive from absolute pointer, not
    // accumulated deltas.
    editor.pointer_moved(Point::new(1000.0, 500.0));
    editor.pointer_moved(Point::new(260.0, 180.0));
    assert_eq!(rect_of(&editor, band), Rect::new(250.0, 100.0, 100.0, 100.0));

    editor.pointer_released();
    assert!(editor.interaction().is_idle());
}

#[test]
fn test_resize_by_corner_grows_both_axes() {
    let mut editor = Editor::new();
    let band = editor.add_shape(ShapeKind::Rect);

    resize(
        &mut editor,
        band,
        Handle::BottomRight,
        Point::new(350.0, 200.0),
        Point::new(370.0, 205.0),
    );
    assert_eq!(rect_of(&editor, band), Rect::new(250.0, 100.0, 120.0, 105.0));
}

#[test]
fn test_resize_overshoot_pins_size_but_not_origin() {
    let mut editor = Editor::new();
    let band = editor.add_shape(ShapeKind::Rect); // (250, 100), 100x100

    // Dragging the top-left corner 95px right collapses the width to the
    // 10px floor while the origin keeps the full travel.
    resize(
        &mut editor,
        band,
        Handle::TopLeft,
        Point::new(250.0, 100.0),
        Point::new(345.0, 100.0),
    );
    assert_eq!(rect_of(&editor, band), Rect::new(345.0, 100.0, 10.0, 100.0));
}

#[test]
fn test_edge_handles_resize_one_axis_only() {
    let mut editor = Editor::new();
    let band = editor.add_shape(ShapeKind::Rect);

    resize(
        &mut editor,
        band,
        Handle::Bottom,
        Point::new(300.0, 200.0),
        Point::new(350.0, 230.0),
    );
    // dx is ignored by a bottom handle.
    assert_eq!(rect_of(&editor, band), Rect::new(250.0, 100.0, 100.0, 130.0));
}

#[test]
fn test_gesture_survives_pointer_leaving_canvas() {
    let mut editor = Editor::new();
    let band = editor.add_shape(ShapeKind::Rect);

    editor.begin_drag(band, Point::new(300.0, 150.0));
    // Way outside the 600x300 canvas; the gesture keeps tracking.
    editor.pointer_moved(Point::new(-200.0, 900.0));
    assert!(!editor.interaction().is_idle());
    assert_eq!(
        rect_of(&editor, band),
        Rect::new(-250.0, 850.0, 100.0, 100.0)
    );

    editor.pointer_released();
    assert!(editor.interaction().is_idle());
}

// ============================================================================
// Undo/Redo Interplay
// ============================================================================

#[test]
fn test_undo_walks_back_through_commits() {
    let mut editor = Editor::new();
    let band = editor.add_shape(ShapeKind::Rect);
    let greeting = editor.add_text();

    assert!(editor.undo());
    assert!(!editor.design().contains(greeting));
    assert!(editor.design().contains(band));

    assert!(editor.undo());
    assert!(!editor.design().contains(band));
    assert!(!editor.can_undo());

    assert!(editor.redo());
    assert!(editor.redo());
    assert!(editor.design().contains(greeting));
    assert!(!editor.can_redo());
}

#[test]
fn test_gesture_merges_into_the_step_it_started_from() {
    let mut editor = Editor::new();
    let band = editor.add_shape(ShapeKind::Rect);

    drag(
        &mut editor,
        band,
        Point::new(300.0, 150.0),
        Point::new(340.0, 150.0),
    );

    // One undo removes both the move and the add: the gesture rewrote the
    // add step in place rather than opening a new one.
    assert!(editor.undo());
    assert!(!editor.design().contains(band));

    assert!(editor.redo());
    assert_eq!(rect_of(&editor, band), Rect::new(290.0, 100.0, 100.0, 100.0));
}

#[test]
fn test_commit_after_undo_discards_redo_branch() {
    let mut editor = Editor::new();
    editor.add_shape(ShapeKind::Rect);
    let abandoned = editor.add_text();

    assert!(editor.undo());
    assert!(editor.can_redo());

    let replacement = editor.add_shape(ShapeKind::Circle);
    assert!(!editor.can_redo());
    assert!(editor.design().contains(replacement));

    // The abandoned branch is unreachable from now on.
    assert!(!editor.redo());
    assert!(!editor.design().contains(abandoned));
}

#[test]
fn test_undo_redo_restores_rope_styling() {
    let mut editor = Editor::new();
    editor.update_rope(|rope| rope.kind = RopeKind::Chain);
    editor.update_rope(|rope| rope.end = RopeEnd::MetalLock);

    assert!(editor.undo());
    assert_eq!(editor.design().rope.kind, RopeKind::Chain);
    assert_eq!(editor.design().rope.end, RopeEnd::Tassel);

    assert!(editor.undo());
    assert_eq!(editor.design().rope.kind, RopeKind::Thread);

    assert!(editor.redo());
    assert!(editor.redo());
    assert_eq!(editor.design().rope.end, RopeEnd::MetalLock);
}

#[test]
fn test_selection_survives_undo_when_element_remains() {
    let mut editor = Editor::new();
    let band = editor.add_shape(ShapeKind::Rect);
    editor.add_text();
    editor.select(Some(band));

    assert!(editor.undo());
    assert_eq!(editor.selection(), Some(band));
    assert!(editor.selected_element().is_some());
}

// ============================================================================
// Texture Application Workflow
// ============================================================================

const SAMPLE_URI: &str = "data:image/png;base64,iVBORw0KGgo=";

#[test]
fn test_texture_happy_path() {
    let mut editor = Editor::new();
    let band = editor.add_shape(ShapeKind::Rect);

    let target = editor.begin_texture_request().expect("shape selected");
    assert_eq!(target, band);

    let pattern = editor
        .apply_texture(target, SAMPLE_URI.to_string())
        .expect("texture applies");

    let shape = editor
        .design()
        .element(band)
        .and_then(Element::as_shape)
        .expect("band exists");
    assert_eq!(shape.fill, Fill::Pattern(pattern));
    assert_eq!(
        editor.design().pattern(pattern).expect("pattern stored").image,
        SAMPLE_URI
    );

    // The stroke still frames the textured shape.
    assert_eq!(shape.stroke, "#16a34a");

    // One commit covers the pattern and the fill rewrite together.
    assert!(editor.undo());
    let shape = editor
        .design()
        .element(band)
        .and_then(Element::as_shape)
        .expect("band exists");
    assert_eq!(shape.fill, Fill::Solid("#86efac".to_string()));
    assert!(editor.design().patterns().is_empty());
}

#[test]
fn test_texture_request_refused_without_selection() {
    let mut editor = Editor::new();
    editor.select(None);

    assert_eq!(
        editor.begin_texture_request().unwrap_err(),
        EditorError::NoSelection
    );
}

#[test]
fn test_texture_lands_on_captured_target_despite_reselection() {
    let mut editor = Editor::new();
    let band = editor.add_shape(ShapeKind::Rect);
    let other = editor.add_shape(ShapeKind::Circle);

    editor.select(Some(band));
    let target = editor.begin_texture_request().expect("band selected");

    // The user clicks elsewhere while generation runs.
    editor.select(Some(other));

    let pattern = editor
        .apply_texture(target, SAMPLE_URI.to_string())
        .expect("texture applies");

    let banded = editor
        .design()
        .element(band)
        .and_then(Element::as_shape)
        .expect("band exists");
    assert_eq!(banded.fill, Fill::Pattern(pattern));

    let untouched = editor
        .design()
        .element(other)
        .and_then(Element::as_shape)
        .expect("other exists");
    assert_eq!(untouched.fill, Fill::Solid("#86efac".to_string()));
}

#[test]
fn test_texture_fails_cleanly_when_target_deleted_mid_flight() {
    let mut editor = Editor::new();
    editor.add_shape(ShapeKind::Rect);

    let target = editor.begin_texture_request().expect("captured");
    editor.delete_element(target);
    let history_len = editor.history().len();

    assert_eq!(
        editor.apply_texture(target, SAMPLE_URI.to_string()).unwrap_err(),
        EditorError::NoSelection
    );
    assert_eq!(editor.history().len(), history_len);
    assert!(editor.design().patterns().is_empty());
}

#[test]
fn test_texture_survives_json_round_trip() {
    let mut editor = Editor::new();
    editor.add_shape(ShapeKind::Circle);
    let target = editor.begin_texture_request().expect("captured");
    let pattern = editor
        .apply_texture(target, SAMPLE_URI.to_string())
        .expect("texture applies");

    let json = serde_json::to_string(editor.design()).expect("serializes");
    let restored: Design = serde_json::from_str(&json).expect("deserializes");

    assert_eq!(&restored, editor.design());
    assert_eq!(restored.pattern(pattern).expect("pattern kept").image, SAMPLE_URI);
}

// ============================================================================
// Error Surface
// ============================================================================

#[test]
fn test_collaborator_failures_share_one_slot() {
    let mut editor = Editor::new();

    editor.report_error(EditorError::ReadFailure("not an image".to_string()));
    assert!(matches!(
        editor.last_error(),
        Some(EditorError::ReadFailure(_))
    ));

    editor.report_error(EditorError::GenerationFailure("quota".to_string()));
    assert!(matches!(
        editor.last_error(),
        Some(EditorError::GenerationFailure(_))
    ));

    editor.clear_error();
    assert!(editor.last_error().is_none());
}

#[test]
fn test_next_successful_commit_clears_stale_error() {
    let mut editor = Editor::new();
    editor.report_error(EditorError::ExportFailure("disk full".to_string()));

    editor.add_shape(ShapeKind::Rect);
    assert!(editor.last_error().is_none());
}

#[test]
fn test_undo_does_not_clear_error() {
    let mut editor = Editor::new();
    editor.add_shape(ShapeKind::Rect);
    editor.report_error(EditorError::GenerationFailure("timeout".to_string()));

    assert!(editor.undo());
    assert!(editor.last_error().is_some());
}

#[test]
fn test_texture_preflight_failure_is_user_visible() {
    let mut editor = Editor::new();
    editor.add_text();

    let err = editor.begin_texture_request().unwrap_err();
    assert!(matches!(err, EditorError::UnsupportedTarget(_)));
    assert_eq!(editor.last_error(), Some(&err));
    assert_eq!(err.to_string(), "Unsupported target: textures can only be applied to shapes");
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_design_round_trips_through_json() {
    let mut editor = Editor::new();
    editor.add_shape(ShapeKind::Rect);
    let greeting = editor.add_text();
    editor.update_element_live(greeting, |element| {
        if let Some(text) = element.as_text_mut() {
            text.content = "To my brother".to_string();
            text.font_size = 32.0;
        }
    });
    editor.commit_edits();
    editor.update_rope(|rope| {
        rope.kind = RopeKind::Beads;
        rope.curvature = 18.0;
    });

    let json = serde_json::to_string_pretty(editor.design()).expect("serializes");
    let restored: Design = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(&restored, editor.design());

    // A fresh session resumes over the restored design with a clean slate.
    let resumed = Editor::with_design(restored);
    assert_eq!(resumed.design().element_count(), 3);
    assert_eq!(resumed.selection(), None);
    assert_eq!(resumed.history().len(), 1);
    assert!(!resumed.can_undo());
}

#[test]
fn test_element_json_shape_is_tagged() {
    let editor = Editor::new();
    let json = serde_json::to_value(editor.design()).expect("serializes");

    let first = &json["elements"][0];
    assert_eq!(first["type"], "shape");
    assert_eq!(first["kind"], "circle");
    assert_eq!(first["fill"]["type"], "solid");
    assert_eq!(first["fill"]["value"], "#fde047");
}
