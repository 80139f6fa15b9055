//! Error types for deck operations.

use thiserror::Error;

/// Result type for deck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for deck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Lookup key is neither a slide index nor a "slide shape" index pair
    #[error(
        "invalid key '{0}': use a single integer to address a slide, \
         or two whitespace-separated integers (\"<slide> <shape>\") to address a shape"
    )]
    InvalidKey(String),

    /// Slide index outside the deck
    #[error("slide index {index} out of range, deck has {len} slides")]
    SlideOutOfRange { index: usize, len: usize },

    /// Shape index outside its slide
    #[error("shape index {index} out of range, slide {slide} has {len} shapes")]
    ShapeOutOfRange {
        slide: usize,
        index: usize,
        len: usize,
    },

    /// Assignment target could not be resolved
    #[error("no shape at the requested position, check the slide and shape indexes: {0}")]
    ShapeNotFound(#[source] Box<Error>),

    /// Table fill with a dataset whose dimensions differ from the table's
    #[error(
        "table is {rows}x{cols} but the dataset needs {need_rows}x{need_cols} \
         (header row included), tables are not resized"
    )]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        need_rows: usize,
        need_cols: usize,
    },

    /// Layout index outside the deck's layout list
    #[error("layout index {index} out of range, deck has {len} layouts")]
    LayoutOutOfRange { index: usize, len: usize },

    /// Package part missing from the archive
    #[error("part not found: {0}")]
    PartNotFound(String),

    /// Not a PowerPoint package, or a malformed one
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP container error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
