//! The editor facade - one mutation surface over the whole engine.
//!
//! [`Editor`] owns the [`History`], the selection, the in-progress
//! [`Interaction`], and the single user-visible error slot. Hosts translate
//! raw input into calls on it: pointer events drive the gesture methods,
//! panel widgets drive the two-phase edit methods, and the texture provider
//! completes through [`Editor::apply_texture`].
//!
//! Commit discipline, one entry point per logical action:
//!
//! - add/delete/reorder/rope restyle/texture -> a durable commit
//! - pointer moves and continuous widget input -> [`Editor::pointer_moved`] /
//!   `update_*_live`, which rewrite the current history slot
//! - gesture end and input blur/release -> finalize, promoting the live slot

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::design::Design;
use crate::element::{Element, ElementId, Fill, Shape, ShapeKind, Text};
use crate::error::{EditorError, EditorResult};
use crate::geometry::Point;
use crate::history::History;
use crate::interaction::{dragged_position, resized_rect, Handle, Interaction};
use crate::pattern::{Pattern, PatternId};
use crate::rope::RopeStyle;

/// Which way an element moves through the z-order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReorderDirection {
    /// Toward the end of the sequence (visually forward).
    Up,
    /// Toward the start of the sequence (visually backward).
    Down,
}

/// The rakhi editing engine.
#[derive(Debug, Clone)]
pub struct Editor {
    history: History,
    selection: Option<ElementId>,
    interaction: Interaction,
    last_error: Option<EditorError>,
}

impl Editor {
    /// Create an editor seeded with the starter design, its circle selected.
    #[must_use]
    pub fn new() -> Self {
        let mut editor = Self::with_design(Design::default());
        editor.selection = editor.history.current().elements().first().map(Element::id);
        editor
    }

    /// Create an editor over an existing design with nothing selected.
    #[must_use]
    pub fn with_design(design: Design) -> Self {
        Self {
            history: History::new(design),
            selection: None,
            interaction: Interaction::Idle,
            last_error: None,
        }
    }

    /// The current design - the history snapshot at the cursor.
    #[must_use]
    pub fn design(&self) -> &Design {
        self.history.current()
    }

    /// The underlying history, for inspection.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The active element id, if any. May dangle after an undo; lookups
    /// through [`Editor::selected_element`] degrade to `None`.
    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.selection
    }

    /// The selected element, if the selection resolves in the current design.
    #[must_use]
    pub fn selected_element(&self) -> Option<&Element> {
        self.design().element(self.selection?)
    }

    /// The in-progress gesture state.
    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// The most recent user-visible error, until dismissed or a commit
    /// succeeds.
    #[must_use]
    pub fn last_error(&self) -> Option<&EditorError> {
        self.last_error.as_ref()
    }

    /// Dismiss the current error message.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Record an error from an external collaborator (file read, image
    /// generation, export) into the error slot.
    pub fn report_error(&mut self, error: EditorError) {
        warn!(%error, "editor error");
        self.last_error = Some(error);
    }

    /// Set or clear the selection. Existence is not validated; selecting an
    /// absent id just degrades the editing controls.
    pub fn select(&mut self, id: Option<ElementId>) {
        self.selection = id;
    }

    /// Whether undo would change the current design.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether redo would change the current design.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back one history snapshot. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Step forward one history snapshot. Returns whether anything changed.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    // ------------------------------------------------------------------
    // Layering

    /// Add a shape with palette defaults on top of the stack, commit, and
    /// select it.
    pub fn add_shape(&mut self, kind: ShapeKind) -> ElementId {
        self.add_element(Element::Shape(Shape::new(kind)))
    }

    /// Add a text element with palette defaults on top of the stack, commit,
    /// and select it.
    pub fn add_text(&mut self) -> ElementId {
        self.add_element(Element::Text(Text::new()))
    }

    fn add_element(&mut self, element: Element) -> ElementId {
        let id = element.id();
        let mut design = self.design().clone();
        design.push_element(element);
        self.commit_design(design, false);
        self.selection = Some(id);
        debug!(%id, "element added");
        id
    }

    /// Delete an element and commit. Clears the selection if it pointed at
    /// the removed element. Unknown ids are ignored without a commit.
    pub fn delete_element(&mut self, id: ElementId) {
        let mut design = self.design().clone();
        if design.remove_element(id).is_none() {
            debug!(%id, "delete ignored, no such element");
            return;
        }
        self.commit_design(design, false);
        debug!(%id, "element deleted");
    }

    /// Move an element one step through the z-order and commit, preserving
    /// the selection. A boundary move or unknown id is a no-op with no
    /// commit.
    pub fn reorder_element(&mut self, id: ElementId, direction: ReorderDirection) {
        let design = self.design();
        let Some(index) = design.index_of(id) else {
            debug!(%id, "reorder ignored, no such element");
            return;
        };
        let target = match direction {
            ReorderDirection::Up => {
                if index + 1 >= design.element_count() {
                    return;
                }
                index + 1
            }
            ReorderDirection::Down => {
                if index == 0 {
                    return;
                }
                index - 1
            }
        };

        let mut design = design.clone();
        design.swap_elements(index, target);
        self.commit_design(design, true);
        debug!(%id, ?direction, "element reordered");
    }

    // ------------------------------------------------------------------
    // Gestures

    /// Begin dragging an element's body from a pointer-down.
    ///
    /// `pointer` is in canvas coordinates. Ignored if a gesture is already
    /// active or the element does not exist. Selection is a separate host
    /// event and is not changed here.
    pub fn begin_drag(&mut self, id: ElementId, pointer: Point) {
        if !self.interaction.is_idle() {
            debug!(%id, "drag ignored, gesture already active");
            return;
        }
        let Some(element) = self.design().element(id) else {
            debug!(%id, "drag ignored, no such element");
            return;
        };
        self.interaction = Interaction::Dragging {
            element: id,
            pointer_start: pointer,
            element_start: element.position(),
        };
    }

    /// Begin resizing a shape by one of its handles from a pointer-down.
    ///
    /// Ignored if a gesture is already active or the target is missing, a
    /// text element, or rotated - those targets expose no handles.
    pub fn begin_resize(&mut self, id: ElementId, handle: Handle, pointer: Point) {
        if !self.interaction.is_idle() {
            debug!(%id, "resize ignored, gesture already active");
            return;
        }
        let Some(shape) = self.design().element(id).and_then(Element::as_shape) else {
            debug!(%id, "resize ignored, target is not a shape");
            return;
        };
        if shape.is_rotated() {
            debug!(%id, rotation = shape.rotation, "resize ignored, shape is rotated");
            return;
        }
        self.interaction = Interaction::Resizing {
            element: id,
            handle,
            pointer_start: pointer,
            start_rect: shape.rect(),
        };
    }

    /// Feed a pointer movement into the active gesture.
    ///
    /// Recomputes geometry from the gesture's captured start state and the
    /// absolute pointer position, then rewrites the current history slot.
    /// Does nothing while idle.
    pub fn pointer_moved(&mut self, pointer: Point) {
        match self.interaction {
            Interaction::Idle => {}
            Interaction::Dragging {
                element,
                pointer_start,
                element_start,
            } => {
                let position = dragged_position(element_start, pointer_start, pointer);
                let mut design = self.design().clone();
                let Some(target) = design.element_mut(element) else {
                    return;
                };
                target.set_position(position);
                self.history.apply_live(design);
            }
            Interaction::Resizing {
                element,
                handle,
                pointer_start,
                start_rect,
            } => {
                let rect = resized_rect(
                    start_rect,
                    handle,
                    pointer.x - pointer_start.x,
                    pointer.y - pointer_start.y,
                );
                let mut design = self.design().clone();
                let Some(shape) = design.element_mut(element).and_then(Element::as_shape_mut)
                else {
                    return;
                };
                shape.x = rect.x;
                shape.y = rect.y;
                shape.width = rect.width;
                shape.height = rect.height;
                self.history.apply_live(design);
            }
        }
    }

    /// End the active gesture on a global pointer-up.
    ///
    /// Promotes the live result to a durable step and returns to idle. Hosts
    /// must deliver pointer-up from the window level: the gesture survives
    /// the pointer leaving the canvas.
    pub fn pointer_released(&mut self) {
        if self.interaction.is_idle() {
            return;
        }
        self.history.finalize();
        self.interaction = Interaction::Idle;
        debug!("gesture finished");
    }

    // ------------------------------------------------------------------
    // Two-phase field edits

    /// Apply a continuous field edit (size, rotation, color, content...)
    /// without creating a history step. Pair with [`Editor::commit_edits`]
    /// on release/blur. Unknown ids are ignored.
    pub fn update_element_live<F>(&mut self, id: ElementId, f: F)
    where
        F: FnOnce(&mut Element),
    {
        let mut design = self.design().clone();
        let Some(element) = design.element_mut(id) else {
            debug!(%id, "live edit ignored, no such element");
            return;
        };
        f(element);
        self.history.apply_live(design);
    }

    /// Apply a continuous rope edit (color drag, curvature slider) without
    /// creating a history step. Pair with [`Editor::commit_edits`].
    pub fn update_rope_live<F>(&mut self, f: F)
    where
        F: FnOnce(&mut RopeStyle),
    {
        let mut design = self.design().clone();
        f(&mut design.rope);
        self.history.apply_live(design);
    }

    /// Finalize a run of live edits into a durable history step.
    pub fn commit_edits(&mut self) {
        self.history.finalize();
    }

    /// Apply a discrete rope edit (kind or end-cap choice) as one commit.
    pub fn update_rope<F>(&mut self, f: F)
    where
        F: FnOnce(&mut RopeStyle),
    {
        let mut design = self.design().clone();
        f(&mut design.rope);
        self.commit_design(design, false);
    }

    // ------------------------------------------------------------------
    // Textures

    /// Validate the selection for a texture request and capture the target.
    ///
    /// The returned id pins the target for the async provider call; pass it
    /// back to [`Editor::apply_texture`] on completion so a selection change
    /// in between cannot retarget the write.
    ///
    /// # Errors
    ///
    /// [`EditorError::NoSelection`] without a resolvable selection,
    /// [`EditorError::UnsupportedTarget`] when a text element is selected.
    pub fn begin_texture_request(&mut self) -> EditorResult<ElementId> {
        let Some(id) = self.selection else {
            return Err(self.fail(EditorError::NoSelection));
        };
        match self.design().element(id) {
            Some(element) if element.is_shape() => Ok(id),
            Some(_) => Err(self.fail(EditorError::UnsupportedTarget(
                "textures can only be applied to shapes".to_string(),
            ))),
            None => Err(self.fail(EditorError::NoSelection)),
        }
    }

    /// Attach a texture to the captured target as one atomic commit.
    ///
    /// Appends a new [`Pattern`] holding the image data URI, rewrites the
    /// target shape's fill to reference it, and commits with the selection
    /// preserved. The target is validated again here: the provider call is
    /// asynchronous and the design may have changed since
    /// [`Editor::begin_texture_request`].
    ///
    /// # Errors
    ///
    /// [`EditorError::NoSelection`] if the target no longer exists,
    /// [`EditorError::UnsupportedTarget`] if it is not a shape. The pattern
    /// set and history are untouched on failure.
    pub fn apply_texture(
        &mut self,
        target: ElementId,
        image_data_uri: String,
    ) -> EditorResult<PatternId> {
        match self.design().element(target) {
            Some(element) if element.is_shape() => {}
            Some(_) => {
                return Err(self.fail(EditorError::UnsupportedTarget(
                    "textures can only be applied to shapes".to_string(),
                )));
            }
            None => return Err(self.fail(EditorError::NoSelection)),
        }

        let mut design = self.design().clone();
        let pattern_id = design.add_pattern(Pattern::new(image_data_uri));
        if let Some(shape) = design.element_mut(target).and_then(Element::as_shape_mut) {
            shape.fill = Fill::Pattern(pattern_id);
        }
        self.commit_design(design, true);
        debug!(%target, %pattern_id, "texture applied");
        Ok(pattern_id)
    }

    // ------------------------------------------------------------------

    /// Commit a new design as a durable step.
    ///
    /// Clears the error slot. Unless `preserve_selection` is set, a selection
    /// pointing at an element the new design no longer contains is cleared.
    fn commit_design(&mut self, design: Design, preserve_selection: bool) {
        if !preserve_selection {
            if let Some(selected) = self.selection {
                if !design.contains(selected) {
                    self.selection = None;
                }
            }
        }
        self.history.commit(design);
        self.last_error = None;
    }

    fn fail(&mut self, error: EditorError) -> EditorError {
        warn!(%error, "editor error");
        self.last_error = Some(error.clone());
        error
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
