//! Shapes: positioned slide elements with optional content sub-parts.

use crate::presentation::chart::Chart;
use crate::presentation::table::Table;
use crate::presentation::text::TextFrame;

/// EMUs per inch (English Metric Units, the native OOXML length unit).
pub const EMU_PER_INCH: i64 = 914_400;

/// A shape's frame rectangle in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl Bounds {
    /// Create a frame rectangle.
    pub fn new(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// The role of a placeholder slot, from the `type` attribute of `p:ph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// Slide title
    Title,
    /// Centered title (title slides)
    CenteredTitle,
    /// Subtitle
    Subtitle,
    /// Body text
    Body,
    /// Date slot
    DateTime,
    /// Footer slot
    Footer,
    /// Slide number slot
    SlideNumber,
    /// Any other slot kind
    Other,
}

impl PlaceholderKind {
    /// Map the `type` attribute value; an absent attribute means body.
    pub(crate) fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("title") => Self::Title,
            Some("ctrTitle") => Self::CenteredTitle,
            Some("subTitle") => Self::Subtitle,
            Some("body") | None => Self::Body,
            Some("dt") => Self::DateTime,
            Some("ftr") => Self::Footer,
            Some("sldNum") => Self::SlideNumber,
            Some(_) => Self::Other,
        }
    }

    /// The `type` attribute value to serialize, if any.
    pub(crate) fn as_attr(self) -> Option<&'static str> {
        match self {
            Self::Title => Some("title"),
            Self::CenteredTitle => Some("ctrTitle"),
            Self::Subtitle => Some("subTitle"),
            Self::Body => None,
            Self::DateTime => Some("dt"),
            Self::Footer => Some("ftr"),
            Self::SlideNumber => Some("sldNum"),
            Self::Other => None,
        }
    }

    /// Whether this slot is a slide title.
    #[inline]
    pub fn is_title(self) -> bool {
        matches!(self, Self::Title | Self::CenteredTitle)
    }
}

/// A placeholder tag on a shape: which layout slot it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    /// Slot index within the layout
    pub idx: u32,
    /// Slot role
    pub kind: PlaceholderKind,
}

impl Placeholder {
    /// Create a placeholder tag.
    pub fn new(idx: u32, kind: PlaceholderKind) -> Self {
        Self { idx, kind }
    }
}

/// A positioned element on a slide.
///
/// A shape is a fixed record with independently optional content sub-parts:
/// a text frame, a table, and a chart may each be present or absent, in any
/// combination. Callers dispatch on which sub-parts are populated rather
/// than probing capabilities.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    pub(crate) name: String,
    pub(crate) bounds: Bounds,
    pub(crate) placeholder: Option<Placeholder>,
    pub(crate) text_frame: Option<TextFrame>,
    pub(crate) table: Option<Table>,
    pub(crate) chart: Option<Chart>,
}

impl Shape {
    /// Create a text box: a plain shape whose only content is a text frame.
    pub fn text_box(text: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            name: String::new(),
            bounds,
            placeholder: None,
            text_frame: Some(TextFrame::with_text(text)),
            table: None,
            chart: None,
        }
    }

    /// Create a table shape.
    pub fn with_table(table: Table, bounds: Bounds) -> Self {
        Self {
            name: String::new(),
            bounds,
            placeholder: None,
            text_frame: None,
            table: Some(table),
            chart: None,
        }
    }

    /// Create a chart shape.
    pub fn with_chart(chart: Chart, bounds: Bounds) -> Self {
        Self {
            name: String::new(),
            bounds,
            placeholder: None,
            text_frame: None,
            table: None,
            chart: Some(chart),
        }
    }

    /// The shape's name, as recorded in the document.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shape's frame rectangle.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The placeholder tag, if this shape fills a layout slot.
    #[inline]
    pub fn placeholder(&self) -> Option<Placeholder> {
        self.placeholder
    }

    /// The text frame, if the shape carries one.
    #[inline]
    pub fn text_frame(&self) -> Option<&TextFrame> {
        self.text_frame.as_ref()
    }

    /// The text frame, mutably.
    #[inline]
    pub fn text_frame_mut(&mut self) -> Option<&mut TextFrame> {
        self.text_frame.as_mut()
    }

    /// The table, if the shape carries one.
    #[inline]
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// The table, mutably.
    #[inline]
    pub fn table_mut(&mut self) -> Option<&mut Table> {
        self.table.as_mut()
    }

    /// The chart, if the shape carries one.
    #[inline]
    pub fn chart(&self) -> Option<&Chart> {
        self.chart.as_ref()
    }

    /// The chart, mutably.
    #[inline]
    pub fn chart_mut(&mut self) -> Option<&mut Chart> {
        self.chart.as_mut()
    }

    /// The shape's text, empty when it has no text frame.
    pub fn text(&self) -> String {
        self.text_frame.as_ref().map_or_else(String::new, TextFrame::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_kind_attr_round_trip() {
        for kind in [
            PlaceholderKind::Title,
            PlaceholderKind::CenteredTitle,
            PlaceholderKind::Subtitle,
            PlaceholderKind::DateTime,
            PlaceholderKind::Footer,
            PlaceholderKind::SlideNumber,
        ] {
            assert_eq!(PlaceholderKind::from_attr(kind.as_attr()), kind);
        }
        // body is the default for an absent attribute
        assert_eq!(PlaceholderKind::from_attr(None), PlaceholderKind::Body);
    }

    #[test]
    fn title_kinds() {
        assert!(PlaceholderKind::Title.is_title());
        assert!(PlaceholderKind::CenteredTitle.is_title());
        assert!(!PlaceholderKind::Body.is_title());
    }

    #[test]
    fn text_box_carries_only_a_text_frame() {
        let shape = Shape::text_box("hi", Bounds::new(0, 0, 100, 100));
        assert!(shape.text_frame().is_some());
        assert!(shape.table().is_none());
        assert!(shape.chart().is_none());
        assert_eq!(shape.text(), "hi");
    }
}
