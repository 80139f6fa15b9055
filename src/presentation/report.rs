//! Diagnostic reports: label a deck's layouts and shapes by position.
//!
//! Both reports exist to answer "which index is that box?" when scripting
//! fills against a hand-built template: generate the report deck once, read
//! the labels off the slides, then address shapes by those positions.

use std::path::Path;

use crate::error::Result;
use crate::presentation::prs::Presentation;

/// Default output path of [`Presentation::analyze_layouts`].
pub const LAYOUTS_REPORT_FILE: &str = "layouts_analyze.pptx";

/// Default output path of [`Presentation::analyze_slides`].
pub const SLIDES_REPORT_FILE: &str = "slides_analyze.pptx";

impl Presentation {
    /// Append one slide per available layout, label every placeholder on it
    /// with `"{layout_index}-{placeholder_index}"`, label the title
    /// placeholder `"{layout_index}-标题"` when the layout has one, and save
    /// the deck to `output` (default [`LAYOUTS_REPORT_FILE`]).
    ///
    /// Layouts without a title placeholder are reported with a printed note
    /// and skipped; the remaining layouts are still processed.
    pub fn analyze_layouts(&mut self, output: Option<&Path>) -> Result<()> {
        for layout_index in 0..self.layouts.len() {
            let slide_index = self.add_slide(layout_index)?;
            let slide = &mut self.slides[slide_index];

            for shape in slide.shapes_mut() {
                if let (Some(ph), Some(frame)) = (shape.placeholder(), shape.text_frame_mut()) {
                    frame.set_text(format!("{layout_index}-{}", ph.idx));
                }
            }

            match slide.title_mut().and_then(|s| s.text_frame_mut()) {
                Some(frame) => frame.set_text(format!("{layout_index}-标题")),
                None => println!("[*] layout {layout_index} has no title"),
            }
        }

        self.save(output.unwrap_or(Path::new(LAYOUTS_REPORT_FILE)))
    }

    /// Overlay one text-box label per pre-existing shape on every slide,
    /// labeled `"{slide_index}-{shape_index}"` and covering that shape's
    /// frame, then save the deck to `output` (default
    /// [`SLIDES_REPORT_FILE`]). The original shapes are left untouched.
    pub fn analyze_slides(&mut self, output: Option<&Path>) -> Result<()> {
        for (slide_index, slide) in self.slides.iter_mut().enumerate() {
            // snapshot first: the labels themselves must not be labeled
            let frames: Vec<_> = slide
                .shapes()
                .iter()
                .map(|shape| shape.bounds())
                .collect();

            for (shape_index, bounds) in frames.into_iter().enumerate() {
                slide.add_text_box(format!("{slide_index}-{shape_index}"), bounds);
            }
        }

        self.save(output.unwrap_or(Path::new(SLIDES_REPORT_FILE)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::shape::Bounds;

    #[test]
    fn layout_report_adds_one_slide_per_layout() {
        let mut pres = Presentation::new();
        let layout_count = pres.layouts().len();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("layouts.pptx");

        pres.analyze_layouts(Some(&out)).unwrap();

        assert_eq!(pres.slide_count(), layout_count);
        assert!(out.exists());
    }

    #[test]
    fn layout_report_labels_placeholders_and_title() {
        let mut pres = Presentation::new();
        let dir = tempfile::tempdir().unwrap();
        pres.analyze_layouts(Some(&dir.path().join("layouts.pptx")))
            .unwrap();

        // layout 0 is "Title Slide": title slot 0 plus subtitle slot 1
        let slide = pres.slide_at(0).unwrap();
        assert_eq!(slide.shapes()[0].text(), "0-标题");
        assert_eq!(slide.shapes()[1].text(), "0-1");

        // layout 2 is "Blank": no placeholders, no crash, no labels
        assert_eq!(pres.slide_at(2).unwrap().shape_count(), 0);
    }

    #[test]
    fn slide_report_adds_one_label_per_existing_shape() {
        let mut pres = Presentation::new();
        pres.add_slide(2).unwrap();
        let bounds = Bounds::new(10, 20, 300, 400);
        {
            let slide = pres.slide_at_mut(0).unwrap();
            slide.add_text_box("original a", bounds);
            slide.add_text_box("original b", Bounds::new(1, 2, 3, 4));
        }

        let dir = tempfile::tempdir().unwrap();
        pres.analyze_slides(Some(&dir.path().join("slides.pptx")))
            .unwrap();

        let slide = pres.slide_at(0).unwrap();
        assert_eq!(slide.shape_count(), 4);
        // originals untouched, labels on top in order
        assert_eq!(slide.shapes()[0].text(), "original a");
        assert_eq!(slide.shapes()[1].text(), "original b");
        assert_eq!(slide.shapes()[2].text(), "0-0");
        assert_eq!(slide.shapes()[3].text(), "0-1");
        // the label covers the shape it points at
        assert_eq!(slide.shapes()[2].bounds(), bounds);
    }
}
