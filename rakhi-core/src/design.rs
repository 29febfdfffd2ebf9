//! The design aggregate - everything a rakhi is made of.

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementId, Fill, Shape, ShapeKind};
use crate::pattern::{Pattern, PatternId};
use crate::rope::RopeStyle;

/// A complete rakhi design.
///
/// Element order is the z-order, back to front: later elements draw on top
/// and win hit-testing. The design is a value type; history stores whole
/// snapshots of it, so structural equality must hold across clone cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    /// Elements in z-order (index 0 is bottom-most).
    elements: Vec<Element>,
    /// Fill patterns created this session. Append-only.
    patterns: Vec<Pattern>,
    /// The global rope style.
    pub rope: RopeStyle,
    /// Canvas width in pixels, fixed per design, > 0.
    pub canvas_width: f32,
    /// Canvas height in pixels, fixed per design, > 0.
    pub canvas_height: f32,
}

impl Design {
    /// Create an empty design with the given canvas size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            elements: Vec::new(),
            patterns: Vec::new(),
            rope: RopeStyle::default(),
            canvas_width: width,
            canvas_height: height,
        }
    }

    /// Elements in z-order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Look up an element by id, mutably.
    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Whether an element with this id exists.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.iter().any(|e| e.id() == id)
    }

    /// The z-order index of an element.
    #[must_use]
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == id)
    }

    /// Append an element on top of the stack, returning its id.
    pub fn push_element(&mut self, element: Element) -> ElementId {
        let id = element.id();
        self.elements.push(element);
        id
    }

    /// Remove an element by id, returning it if present.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        let index = self.index_of(id)?;
        Some(self.elements.remove(index))
    }

    /// Swap two elements in the z-order. Out-of-range indexes are ignored.
    pub fn swap_elements(&mut self, a: usize, b: usize) {
        if a < self.elements.len() && b < self.elements.len() {
            self.elements.swap(a, b);
        }
    }

    /// Patterns created so far.
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Look up a pattern by id.
    #[must_use]
    pub fn pattern(&self, id: PatternId) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    /// Register a new pattern, returning its id.
    pub fn add_pattern(&mut self, pattern: Pattern) -> PatternId {
        let id = pattern.id;
        self.patterns.push(pattern);
        id
    }

    /// Number of elements in the design.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Whether the design has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for Design {
    /// The seeded starter design: a 600x300 canvas with a single golden
    /// circle centered on the rope line.
    fn default() -> Self {
        let mut design = Self::new(600.0, 300.0);
        design.push_element(Element::Shape(Shape {
            id: ElementId::new(),
            kind: ShapeKind::Circle,
            x: 225.0,
            y: 75.0,
            width: 150.0,
            height: 150.0,
            fill: Fill::Solid("#fde047".to_string()),
            stroke: "#f59e0b".to_string(),
            stroke_width: 4.0,
            rotation: 0.0,
        }));
        design
    }
}
