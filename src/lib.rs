//! Pitaya - positional fill-and-merge for PowerPoint decks
//!
//! This library is a thin convenience layer for scripted deck editing:
//! address slides and shapes by position, push text, table, and chart data
//! into them, and merge whole directories of deck files into one document.
//!
//! # Features
//!
//! - **Positional access**: slides by index, shapes by (slide, shape) pair,
//!   with the string key forms `"3"` / `"3 1"` still accepted
//! - **Content assignment**: plain text collapses a text frame to a single
//!   run; a [`DataTable`] fills a table in place or replaces a chart's data
//! - **Diagnostic reports**: generate decks that label every layout
//!   placeholder and every existing shape with its address
//! - **Directory merge**: concatenate every `.pptx` in a directory through
//!   a presentation-application interface
//! - **Package layer**: `.pptx` reading and writing scoped to the needs of
//!   the above
//!
//! # Example - filling a template
//!
//! ```no_run
//! use pitaya::{DataTable, Presentation};
//!
//! # fn main() -> pitaya::Result<()> {
//! let mut pres = Presentation::open("template.pptx")?;
//!
//! // headline into shape 0 of slide 0
//! pres.assign("0 0".parse()?, "Quarterly Review".into())?;
//!
//! // dataset into the 3x3 table on slide 1
//! let mut data = DataTable::new(["Region", "Plan", "Actual"]);
//! data.push_row("0", ["EMEA", "100", "113"])?;
//! data.push_row("1", ["APAC", "90", "87"])?;
//! pres.assign("1 0".parse()?, data.into())?;
//!
//! pres.save("review.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - merging a directory of decks
//!
//! ```no_run
//! use pitaya::merge::{merge_directory, ModelApp};
//!
//! # fn main() -> pitaya::Result<()> {
//! let merged = merge_directory(&mut ModelApp, "weekly_decks".as_ref())?;
//! println!("merged {} slides", merged.slide_count());
//! merged.save("combined.pptx")?;
//! # Ok(())
//! # }
//! ```

/// Shared helpers (XML entity escaping)
pub mod common;

/// Tabular fill source for tables and charts
pub mod dataset;

/// Error types for deck operations
pub mod error;

/// Merging deck directories through a presentation-application interface
pub mod merge;

/// The OPC package layer (`.pptx` reading and writing)
pub(crate) mod pkg;

/// The deck object model and positional accessor
pub mod presentation;

// Re-export commonly used types for convenience
pub use dataset::{Cell, DataTable};
pub use error::{Error, Result};
pub use presentation::{
    Bounds, Chart, ChartData, ChartKind, Content, Key, Paragraph, Placeholder, PlaceholderKind,
    Presentation, Run, Series, Shape, Slide, SlideLayout, Table, TableCell, TableRow, TextFrame,
};
