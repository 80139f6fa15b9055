//! In-process implementation of the automation surface.

use std::path::Path;

use crate::error::Result;
use crate::merge::SlideShowApp;
use crate::presentation::Presentation;

/// A [`SlideShowApp`] backed by this crate's own document model.
///
/// No host application is involved: documents are [`Presentation`] values,
/// "open" means held in memory, and inserting slides from a file re-opens
/// the file and moves its slides into the destination. Merged slides are
/// reattached to the destination's default layout.
pub struct ModelApp;

impl SlideShowApp for ModelApp {
    type Document = Presentation;
    type Source = Presentation;

    fn add_document(&mut self) -> Result<Presentation> {
        Ok(Presentation::new())
    }

    fn open_source(&mut self, path: &Path) -> Result<Presentation> {
        Presentation::open(path)
    }

    fn slide_count(&mut self, source: &Presentation) -> Result<usize> {
        Ok(source.slide_count())
    }

    fn close_source(&mut self, source: Presentation) -> Result<()> {
        drop(source);
        Ok(())
    }

    fn document_slide_count(&mut self, document: &Presentation) -> Result<usize> {
        Ok(document.slide_count())
    }

    fn insert_from_file(
        &mut self,
        document: &mut Presentation,
        path: &Path,
        at: usize,
        first: usize,
        last: usize,
    ) -> Result<()> {
        let source = Presentation::open(path)?;
        let mut inserted = 0;
        for (position, mut slide) in source.slides.into_iter().enumerate() {
            let number = position + 1;
            if number < first || number > last {
                continue;
            }
            // the source's layout list does not travel with its slides
            slide.layout_index = None;
            document.slides.insert(at + inserted, slide);
            inserted += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::merge_directory;
    use crate::presentation::Bounds;

    fn deck_with_texts(texts: &[&str]) -> Presentation {
        let mut pres = Presentation::new();
        for text in texts {
            let index = pres.add_slide(2).unwrap();
            pres.slides_mut()[index].add_text_box(*text, Bounds::new(0, 0, 914_400, 914_400));
        }
        pres
    }

    #[test]
    fn merging_a_directory_concatenates_all_decks() {
        let dir = tempfile::tempdir().unwrap();
        deck_with_texts(&["a1", "a2"])
            .save(dir.path().join("a.pptx"))
            .unwrap();
        deck_with_texts(&["b1", "b2", "b3"])
            .save(dir.path().join("b.pptx"))
            .unwrap();
        std::fs::write(dir.path().join("readme.md"), b"not a deck").unwrap();

        let mut app = ModelApp;
        let merged = merge_directory(&mut app, dir.path()).unwrap();

        assert_eq!(merged.slide_count(), 5);
        // every source slide arrived exactly once, whatever the file order
        let mut texts: Vec<String> = merged.slides().iter().map(|s| s.text()).collect();
        texts.sort();
        assert_eq!(texts, ["a1", "a2", "b1", "b2", "b3"]);
    }

    #[test]
    fn decks_stay_contiguous_in_the_merged_document() {
        let dir = tempfile::tempdir().unwrap();
        deck_with_texts(&["a1", "a2"])
            .save(dir.path().join("a.pptx"))
            .unwrap();
        deck_with_texts(&["b1", "b2", "b3"])
            .save(dir.path().join("b.pptx"))
            .unwrap();

        let merged = merge_directory(&mut ModelApp, dir.path()).unwrap();
        let texts: Vec<String> = merged.slides().iter().map(|s| s.text()).collect();

        // whichever deck came first, its slides are adjacent and in order
        let expected_ab = ["a1", "a2", "b1", "b2", "b3"];
        let expected_ba = ["b1", "b2", "b3", "a1", "a2"];
        assert!(texts == expected_ab || texts == expected_ba, "got {texts:?}");
    }

    #[test]
    fn partial_ranges_insert_only_the_requested_slides() {
        let dir = tempfile::tempdir().unwrap();
        let deck_path = dir.path().join("deck.pptx");
        deck_with_texts(&["s1", "s2", "s3"]).save(&deck_path).unwrap();

        let mut app = ModelApp;
        let mut document = app.add_document().unwrap();
        app.insert_from_file(&mut document, &deck_path, 0, 2, 3)
            .unwrap();

        let texts: Vec<String> = document.slides().iter().map(|s| s.text()).collect();
        assert_eq!(texts, ["s2", "s3"]);
    }

    #[test]
    fn opening_a_missing_source_fails() {
        let mut app = ModelApp;
        assert!(app.open_source(Path::new("missing.pptx")).is_err());
    }
}
