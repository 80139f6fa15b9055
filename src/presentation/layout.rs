//! Slide layouts: reusable templates defining placeholder slots.

use crate::presentation::shape::{
    Bounds, EMU_PER_INCH, Placeholder, PlaceholderKind, Shape,
};
use crate::presentation::text::TextFrame;

/// A slide layout.
///
/// A layout carries a name and the prototype placeholder shapes that a slide
/// created from it starts with. Instantiating a slide clones these shapes.
#[derive(Debug, Clone, Default)]
pub struct SlideLayout {
    pub(crate) name: String,
    pub(crate) placeholders: Vec<Shape>,
}

impl SlideLayout {
    /// Create a layout from its prototype placeholder shapes.
    pub fn new(name: impl Into<String>, placeholders: Vec<Shape>) -> Self {
        Self {
            name: name.into(),
            placeholders,
        }
    }

    /// The layout's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The prototype placeholder shapes.
    #[inline]
    pub fn placeholders(&self) -> &[Shape] {
        &self.placeholders
    }

    /// Number of placeholder slots this layout defines.
    #[inline]
    pub fn placeholder_count(&self) -> usize {
        self.placeholders.len()
    }

    /// The built-in layout set a new presentation starts with.
    ///
    /// Mirrors the common host-application trio: a title slide, a title and
    /// content page, and a blank page with no slots at all.
    pub(crate) fn builtin() -> Vec<SlideLayout> {
        let proto = |name: &str, idx, kind, bounds| Shape {
            name: name.to_string(),
            bounds,
            placeholder: Some(Placeholder::new(idx, kind)),
            text_frame: Some(TextFrame::new()),
            table: None,
            chart: None,
        };

        let title_bounds = Bounds::new(
            EMU_PER_INCH / 2,
            EMU_PER_INCH / 2,
            9 * EMU_PER_INCH,
            EMU_PER_INCH + EMU_PER_INCH / 4,
        );
        let body_bounds = Bounds::new(
            EMU_PER_INCH / 2,
            2 * EMU_PER_INCH,
            9 * EMU_PER_INCH,
            4 * EMU_PER_INCH + EMU_PER_INCH / 2,
        );

        vec![
            SlideLayout::new(
                "Title Slide",
                vec![
                    proto("Title 1", 0, PlaceholderKind::CenteredTitle, title_bounds),
                    proto("Subtitle 2", 1, PlaceholderKind::Subtitle, body_bounds),
                ],
            ),
            SlideLayout::new(
                "Title and Content",
                vec![
                    proto("Title 1", 0, PlaceholderKind::Title, title_bounds),
                    proto("Content Placeholder 2", 1, PlaceholderKind::Body, body_bounds),
                ],
            ),
            SlideLayout::new("Blank", Vec::new()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_ends_with_a_blank_layout() {
        let layouts = SlideLayout::builtin();
        assert_eq!(layouts.len(), 3);
        assert_eq!(layouts[2].name(), "Blank");
        assert_eq!(layouts[2].placeholder_count(), 0);
    }

    #[test]
    fn builtin_title_layouts_carry_a_title_slot() {
        let layouts = SlideLayout::builtin();
        for layout in &layouts[..2] {
            assert!(
                layout
                    .placeholders()
                    .iter()
                    .any(|s| s.placeholder().is_some_and(|p| p.kind.is_title()))
            );
        }
    }
}
