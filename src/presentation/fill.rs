//! Positional lookup and content assignment.

use crate::dataset::DataTable;
use crate::error::{Error, Result};
use crate::presentation::chart::ChartData;
use crate::presentation::key::Key;
use crate::presentation::prs::Presentation;
use crate::presentation::shape::Shape;
use crate::presentation::slide::Slide;

/// A value to push into a shape.
///
/// Text applies to a shape's text frame; a [`DataTable`] applies to its
/// table or, failing that, its chart (and also stringifies into the text
/// frame when one is present).
#[derive(Debug, Clone)]
pub enum Content {
    /// A value already stringified
    Text(String),
    /// A tabular dataset
    Table(DataTable),
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Text(s.to_string())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Text(s)
    }
}

impl From<i64> for Content {
    fn from(n: i64) -> Self {
        Content::Text(n.to_string())
    }
}

impl From<f64> for Content {
    fn from(n: f64) -> Self {
        Content::Text(crate::dataset::fmt_number(n))
    }
}

impl From<DataTable> for Content {
    fn from(data: DataTable) -> Self {
        Content::Table(data)
    }
}

impl Presentation {
    /// The slide at `index`.
    pub fn slide_at(&self, index: usize) -> Result<&Slide> {
        self.slides.get(index).ok_or(Error::SlideOutOfRange {
            index,
            len: self.slides.len(),
        })
    }

    /// The slide at `index`, mutably.
    pub fn slide_at_mut(&mut self, index: usize) -> Result<&mut Slide> {
        let len = self.slides.len();
        self.slides
            .get_mut(index)
            .ok_or(Error::SlideOutOfRange { index, len })
    }

    /// The shape at position `shape` on the slide at position `slide`.
    pub fn shape_at(&self, slide: usize, shape: usize) -> Result<&Shape> {
        let page = self.slide_at(slide)?;
        page.shape(shape).ok_or(Error::ShapeOutOfRange {
            slide,
            index: shape,
            len: page.shape_count(),
        })
    }

    /// The shape at position `shape` on the slide at position `slide`,
    /// mutably.
    pub fn shape_at_mut(&mut self, slide: usize, shape: usize) -> Result<&mut Shape> {
        let page = self.slide_at_mut(slide)?;
        let len = page.shape_count();
        page.shape_mut(shape).ok_or(Error::ShapeOutOfRange {
            slide,
            index: shape,
            len,
        })
    }

    /// Push content into the shape a key addresses.
    ///
    /// The key must address a shape; a slide key is rejected as invalid.
    /// An unresolvable position is reported as [`Error::ShapeNotFound`]
    /// wrapping the underlying range error. Content lands according to the
    /// value's type and the shape's populated sub-parts:
    ///
    /// - text replaces the text frame's content (single-run collapse) when
    ///   the shape has a text frame, and is otherwise ignored;
    /// - a dataset stringifies into the text frame (when present), then
    ///   fills the table (when present) or else replaces the chart's data
    ///   (when present). A shape with both a table and a chart is filled as
    ///   a table; the chart is left alone.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use pitaya::{DataTable, Key, Presentation};
    ///
    /// let mut pres = Presentation::open("template.pptx")?;
    ///
    /// // headline into shape 0 of slide 0
    /// pres.assign("0 0".parse()?, "FY25 Results".into())?;
    ///
    /// // dataset into the table on slide 1
    /// let mut data = DataTable::new(["Region", "Total"]);
    /// data.push_row("0", ["EMEA", "113"])?;
    /// pres.assign(Key::Shape(1, 0), data.into())?;
    ///
    /// pres.save("out.pptx")?;
    /// # Ok::<(), pitaya::Error>(())
    /// ```
    pub fn assign(&mut self, key: Key, content: Content) -> Result<()> {
        let (slide, shape) = match key {
            Key::Shape(slide, shape) => (slide, shape),
            Key::Slide(index) => {
                return Err(Error::InvalidKey(format!(
                    "{index} addresses a slide; assignment needs a \"<slide> <shape>\" key"
                )));
            }
        };
        let target = self
            .shape_at_mut(slide, shape)
            .map_err(|e| Error::ShapeNotFound(Box::new(e)))?;

        match content {
            Content::Text(text) => {
                if let Some(frame) = target.text_frame_mut() {
                    frame.set_text(text);
                }
            }
            Content::Table(data) => {
                if let Some(frame) = target.text_frame_mut() {
                    frame.set_text(data.to_string());
                }
                if let Some(table) = target.table_mut() {
                    table.fill(&data)?;
                } else if let Some(chart) = target.chart_mut() {
                    chart.replace_data(ChartData::from_table(&data));
                }
            }
        }
        Ok(())
    }
}
