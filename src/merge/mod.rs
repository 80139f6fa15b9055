//! Merging deck directories through a presentation-application interface.
//!
//! The merge driver does not touch deck internals itself: it walks a
//! directory and instructs a [`SlideShowApp`] (the automation surface of a
//! host presentation application) to concatenate every deck file it finds
//! into one freshly created destination document. The destination is left
//! open in the application and is not saved; what "open" means belongs to
//! the implementation. [`ModelApp`] implements the surface in-process on
//! this crate's own document model, so merging also works without a host
//! application.

mod app;

pub use app::ModelApp;

use std::ffi::OsStr;
use std::path::Path;

use crate::error::Result;

/// The file extension of merge candidates.
pub const DECK_EXTENSION: &str = "pptx";

/// The automation surface of a presentation application.
///
/// Failure modes are whatever the implementation raises; the merge driver
/// passes them through untranslated.
pub trait SlideShowApp {
    /// Handle to a destination document, left open when merging finishes.
    type Document;
    /// Handle to a transiently opened source document.
    type Source;

    /// Create a new empty destination document in the application.
    fn add_document(&mut self) -> Result<Self::Document>;

    /// Open a source deck file.
    fn open_source(&mut self, path: &Path) -> Result<Self::Source>;

    /// Number of slides in an open source.
    fn slide_count(&mut self, source: &Self::Source) -> Result<usize>;

    /// Close a source document.
    fn close_source(&mut self, source: Self::Source) -> Result<()>;

    /// Number of slides currently in a destination document.
    fn document_slide_count(&mut self, document: &Self::Document) -> Result<usize>;

    /// Insert slides `first..=last` (1-based) from the deck file at `path`
    /// into `document` after slide position `at`.
    fn insert_from_file(
        &mut self,
        document: &mut Self::Document,
        path: &Path,
        at: usize,
        first: usize,
        last: usize,
    ) -> Result<()>;
}

/// Concatenate every deck file in `dir` into one new document.
///
/// Files are taken in directory iteration order (not guaranteed sorted);
/// only immediate children with the deck extension are candidates. Each
/// source is opened just long enough to learn its slide count, closed, and
/// then inserted wholesale at the destination's current end. The populated
/// destination handle is returned still open and unsaved.
///
/// # Examples
///
/// ```rust,no_run
/// use pitaya::merge::{merge_directory, ModelApp};
///
/// let mut app = ModelApp;
/// let merged = merge_directory(&mut app, "weekly_decks".as_ref())?;
/// merged.save("combined.pptx")?;
/// # Ok::<(), pitaya::Error>(())
/// ```
pub fn merge_directory<A: SlideShowApp>(app: &mut A, dir: &Path) -> Result<A::Document> {
    let mut document = app.add_document()?;

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(OsStr::to_str) != Some(DECK_EXTENSION) {
            continue;
        }

        let source = app.open_source(&path)?;
        let destination_end = app.document_slide_count(&document)?;
        let source_end = app.slide_count(&source)?;
        app.close_source(source)?;

        app.insert_from_file(&mut document, &path, destination_end, 1, source_end)?;
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// Records the calls the merge driver makes, with canned slide counts.
    struct ScriptedApp {
        counts: HashMap<PathBuf, usize>,
        calls: Vec<String>,
    }

    #[derive(Debug)]
    struct ScriptedDoc {
        slides: usize,
    }

    impl ScriptedApp {
        fn new(counts: &[(&Path, usize)]) -> Self {
            Self {
                counts: counts
                    .iter()
                    .map(|(p, n)| (p.to_path_buf(), *n))
                    .collect(),
                calls: Vec::new(),
            }
        }
    }

    impl SlideShowApp for ScriptedApp {
        type Document = ScriptedDoc;
        type Source = (PathBuf, usize);

        fn add_document(&mut self) -> Result<ScriptedDoc> {
            self.calls.push("add".to_string());
            Ok(ScriptedDoc { slides: 0 })
        }

        fn open_source(&mut self, path: &Path) -> Result<Self::Source> {
            let count = *self.counts.get(path).expect("unexpected source");
            self.calls
                .push(format!("open {}", path.file_name().unwrap().to_string_lossy()));
            Ok((path.to_path_buf(), count))
        }

        fn slide_count(&mut self, source: &Self::Source) -> Result<usize> {
            Ok(source.1)
        }

        fn close_source(&mut self, source: Self::Source) -> Result<()> {
            self.calls
                .push(format!("close {}", source.0.file_name().unwrap().to_string_lossy()));
            Ok(())
        }

        fn document_slide_count(&mut self, document: &ScriptedDoc) -> Result<usize> {
            Ok(document.slides)
        }

        fn insert_from_file(
            &mut self,
            document: &mut ScriptedDoc,
            path: &Path,
            at: usize,
            first: usize,
            last: usize,
        ) -> Result<()> {
            self.calls.push(format!(
                "insert {} at {at} range {first}..={last}",
                path.file_name().unwrap().to_string_lossy()
            ));
            document.slides += last + 1 - first;
            Ok(())
        }
    }

    #[test]
    fn merges_every_deck_file_and_skips_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.pptx");
        let b = dir.path().join("b.pptx");
        std::fs::write(&a, b"stub").unwrap();
        std::fs::write(&b, b"stub").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"skip me").unwrap();

        let mut app = ScriptedApp::new(&[(a.as_path(), 2), (b.as_path(), 3)]);
        let document = merge_directory(&mut app, dir.path()).unwrap();

        assert_eq!(document.slides, 5);
        // one open/close/insert triple per deck, nothing for notes.txt
        assert_eq!(app.calls.iter().filter(|c| c.starts_with("open")).count(), 2);
        assert_eq!(app.calls.iter().filter(|c| c.starts_with("close")).count(), 2);
        assert!(!app.calls.iter().any(|c| c.contains("notes.txt")));
    }

    #[test]
    fn each_source_is_closed_before_insertion() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.pptx");
        std::fs::write(&a, b"stub").unwrap();

        let mut app = ScriptedApp::new(&[(a.as_path(), 2)]);
        merge_directory(&mut app, dir.path()).unwrap();

        assert_eq!(
            app.calls,
            ["add", "open a.pptx", "close a.pptx", "insert a.pptx at 0 range 1..=2"]
        );
    }

    #[test]
    fn second_deck_lands_after_the_first() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.pptx");
        let b = dir.path().join("b.pptx");
        std::fs::write(&a, b"stub").unwrap();
        std::fs::write(&b, b"stub").unwrap();

        let mut app = ScriptedApp::new(&[(a.as_path(), 2), (b.as_path(), 3)]);
        merge_directory(&mut app, dir.path()).unwrap();

        // directory order is unspecified, but the second insert position
        // must equal the first deck's slide count
        let inserts: Vec<&String> = app
            .calls
            .iter()
            .filter(|c| c.starts_with("insert"))
            .collect();
        assert_eq!(inserts.len(), 2);
        assert!(inserts[0].contains("at 0"));
        let first_count = if inserts[0].contains("a.pptx") { 2 } else { 3 };
        assert!(inserts[1].contains(&format!("at {first_count}")));
    }

    #[test]
    fn missing_directory_propagates_the_io_error() {
        let mut app = ScriptedApp::new(&[]);
        let err = merge_directory(&mut app, Path::new("no/such/dir")).unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
