//! Slides: ordered shape collections.

use crate::presentation::shape::{Bounds, Shape};

/// A slide in a presentation.
#[derive(Debug, Clone, Default)]
pub struct Slide {
    /// Index into the deck's layout list this slide was created from
    pub(crate) layout_index: Option<usize>,
    pub(crate) shapes: Vec<Shape>,
}

impl Slide {
    /// Create an empty slide not tied to a layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shapes on this slide, in z-order.
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The shapes on this slide, mutably.
    #[inline]
    pub fn shapes_mut(&mut self) -> &mut [Shape] {
        &mut self.shapes
    }

    /// Number of shapes on the slide.
    #[inline]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// The shape at `index`, if present.
    pub fn shape(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// The shape at `index`, mutably.
    pub fn shape_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    /// Add a text box on top of the existing shapes and return it.
    pub fn add_text_box(&mut self, text: impl Into<String>, bounds: Bounds) -> &mut Shape {
        let mut shape = Shape::text_box(text, bounds);
        shape.name = format!("TextBox {}", self.shapes.len() + 1);
        self.shapes.push(shape);
        self.shapes.last_mut().unwrap()
    }

    /// The title shape: the first placeholder shape tagged as a title.
    pub fn title_mut(&mut self) -> Option<&mut Shape> {
        self.shapes
            .iter_mut()
            .find(|s| s.placeholder().is_some_and(|p| p.kind.is_title()))
    }

    /// All shape text on this slide, newline-joined, skipping shapes
    /// without a text frame.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for shape in &self.shapes {
            if let Some(frame) = shape.text_frame() {
                let text = frame.text();
                if text.is_empty() {
                    continue;
                }
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(&text);
            }
        }
        out
    }
}
