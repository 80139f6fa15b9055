//! Text frames, paragraphs, and runs.

/// A single run of text within a paragraph.
///
/// Runs keep the raw run-properties element (`<a:rPr …/>`) captured at load
/// so the first run's character formatting survives a text replacement.
#[derive(Debug, Clone, Default)]
pub struct Run {
    pub(crate) text: String,
    /// Raw `a:rPr` XML captured from the source part, written back verbatim
    pub(crate) props: Option<String>,
}

impl Run {
    /// Create a run holding the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            props: None,
        }
    }

    /// The run's text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Overwrite the run's text, keeping its formatting.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// A paragraph: an ordered list of runs.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub(crate) runs: Vec<Run>,
    /// Raw `a:pPr` XML captured from the source part
    pub(crate) props: Option<String>,
}

impl Paragraph {
    /// The runs in this paragraph.
    #[inline]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// All run text concatenated.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A text frame: the text body of a shape or table cell.
///
/// # Examples
///
/// ```
/// use pitaya::TextFrame;
///
/// let mut frame = TextFrame::with_text("draft");
/// frame.set_text("final");
/// assert_eq!(frame.text(), "final");
/// assert_eq!(frame.paragraphs().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextFrame {
    pub(crate) paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Create an empty text frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text frame holding a single paragraph with a single run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph {
                runs: vec![Run::new(text)],
                props: None,
            }],
        }
    }

    /// The paragraphs in this frame.
    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// All paragraph text, newline-joined.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, para) in self.paragraphs.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&para.text());
        }
        out
    }

    /// Replace the frame's entire content with a single run of text.
    ///
    /// Every paragraph after the first is discarded, every run after the
    /// first run of the remaining paragraph is discarded, and the surviving
    /// run's text is overwritten. Existing multi-run formatting collapses to
    /// the first run's; this is a plain-text overwrite, not a rich-text
    /// merge. An empty frame gains one paragraph with one unformatted run.
    pub fn set_text(&mut self, text: impl Into<String>) {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(Paragraph::default());
        }
        self.paragraphs.truncate(1);

        let para = &mut self.paragraphs[0];
        if para.runs.is_empty() {
            para.runs.push(Run::default());
        }
        para.runs.truncate(1);
        para.runs[0].text = text.into();
    }
}
