//! The presentation: an open deck document.

use std::path::Path;

use crate::error::{Error, Result};
use crate::pkg;
use crate::presentation::layout::SlideLayout;
use crate::presentation::slide::Slide;

/// An open deck document.
///
/// A `Presentation` owns its slides and layouts for its lifetime. It is
/// loaded from a file path or byte buffer at construction and persisted on
/// an explicit [`save`](Presentation::save); mutations apply immediately to
/// the in-memory model and are visible to subsequent lookups. Slide and
/// shape positions are stable only within one load-mutate-save cycle.
///
/// # Examples
///
/// ```rust,no_run
/// use pitaya::Presentation;
///
/// let mut pres = Presentation::open("report.pptx")?;
/// println!("Slides: {}", pres.slide_count());
///
/// pres.shape_at_mut(0, 0)?
///     .text_frame_mut()
///     .expect("title shape has a text frame")
///     .set_text("Weekly Report");
/// pres.save("report_filled.pptx")?;
/// # Ok::<(), pitaya::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Presentation {
    pub(crate) slides: Vec<Slide>,
    pub(crate) layouts: Vec<SlideLayout>,
    /// Slide width in EMUs
    pub(crate) slide_width: i64,
    /// Slide height in EMUs
    pub(crate) slide_height: i64,
}

impl Presentation {
    /// Create a new empty presentation with the built-in layout set and
    /// default 4:3 dimensions (10" x 7.5").
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            layouts: SlideLayout::builtin(),
            slide_width: 9_144_000,
            slide_height: 6_858_000,
        }
    }

    /// Open a deck from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Open a deck from an in-memory byte buffer.
    ///
    /// Useful for network data or caches where no file exists.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        pkg::read_package(bytes)
    }

    /// Persist the deck to `path` and print a confirmation.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = pkg::write_package(self)?;
        std::fs::write(path, bytes)?;
        println!("[*] {} saved.", path.display());
        Ok(())
    }

    /// Serialize the deck to bytes without touching the filesystem.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        pkg::write_package(self)
    }

    /// Number of slides in the deck.
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// The slides, in deck order.
    #[inline]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// The slides, mutably.
    #[inline]
    pub fn slides_mut(&mut self) -> &mut [Slide] {
        &mut self.slides
    }

    /// The available layouts, in master order.
    #[inline]
    pub fn layouts(&self) -> &[SlideLayout] {
        &self.layouts
    }

    /// Slide width in EMUs.
    #[inline]
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Slide height in EMUs.
    #[inline]
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Append a slide created from the layout at `layout_index`, cloning
    /// the layout's placeholder shapes. Returns the new slide's index.
    pub fn add_slide(&mut self, layout_index: usize) -> Result<usize> {
        let layout = self
            .layouts
            .get(layout_index)
            .ok_or(Error::LayoutOutOfRange {
                index: layout_index,
                len: self.layouts.len(),
            })?;
        let mut shapes = layout.placeholders.clone();
        for shape in &mut shapes {
            // placeholders start empty: layout prompt text is not content
            if let Some(frame) = shape.text_frame_mut() {
                *frame = crate::presentation::TextFrame::new();
            }
        }
        self.slides.push(Slide {
            layout_index: Some(layout_index),
            shapes,
        });
        Ok(self.slides.len() - 1)
    }

    /// The layout with the fewest placeholder slots, the closest thing to
    /// a blank canvas for generated content. Ties go to the first such
    /// layout.
    pub fn blank_layout(&self) -> Option<&SlideLayout> {
        self.layouts
            .iter()
            .min_by_key(|layout| layout.placeholder_count())
    }

    /// All text content of the deck, slides joined by blank lines.
    pub fn text(&self) -> String {
        let mut texts = Vec::new();
        for slide in &self.slides {
            let text = slide.text();
            if !text.is_empty() {
                texts.push(text);
            }
        }
        texts.join("\n\n")
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::shape::Bounds;

    #[test]
    fn new_presentation_is_empty_with_builtin_layouts() {
        let pres = Presentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.layouts().len(), 3);
        assert_eq!(pres.slide_width(), 9_144_000);
        assert_eq!(pres.slide_height(), 6_858_000);
    }

    #[test]
    fn add_slide_clones_layout_placeholders() {
        let mut pres = Presentation::new();
        let index = pres.add_slide(0).unwrap();
        assert_eq!(index, 0);
        assert_eq!(
            pres.slides()[0].shape_count(),
            pres.layouts()[0].placeholder_count()
        );
    }

    #[test]
    fn add_slide_rejects_unknown_layout() {
        let mut pres = Presentation::new();
        let err = pres.add_slide(99).unwrap_err();
        assert!(matches!(err, Error::LayoutOutOfRange { index: 99, len: 3 }));
    }

    #[test]
    fn blank_layout_has_the_fewest_placeholders() {
        let pres = Presentation::new();
        let blank = pres.blank_layout().unwrap();
        assert_eq!(blank.name(), "Blank");
        assert_eq!(blank.placeholder_count(), 0);
    }

    #[test]
    fn deck_text_joins_slides_with_blank_lines() {
        let mut pres = Presentation::new();
        pres.add_slide(2).unwrap();
        pres.add_slide(2).unwrap();
        pres.slides_mut()[0].add_text_box("one", Bounds::default());
        pres.slides_mut()[1].add_text_box("two", Bounds::default());
        assert_eq!(pres.text(), "one\n\ntwo");
    }
}
