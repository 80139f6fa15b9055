//! DrawingML tables on slides.

use crate::dataset::DataTable;
use crate::error::{Error, Result};
use crate::presentation::text::TextFrame;

/// A cell in a table. Every cell owns a text frame.
#[derive(Debug, Clone, Default)]
pub struct TableCell {
    pub(crate) text_frame: TextFrame,
}

impl TableCell {
    /// The cell's text frame.
    #[inline]
    pub fn text_frame(&self) -> &TextFrame {
        &self.text_frame
    }

    /// The cell's text frame, mutably.
    #[inline]
    pub fn text_frame_mut(&mut self) -> &mut TextFrame {
        &mut self.text_frame
    }

    /// The cell's text.
    pub fn text(&self) -> String {
        self.text_frame.text()
    }
}

/// A row of table cells.
#[derive(Debug, Clone, Default)]
pub struct TableRow {
    pub(crate) cells: Vec<TableCell>,
}

impl TableRow {
    /// The cells in this row.
    #[inline]
    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }
}

/// A table on a slide.
///
/// # Examples
///
/// ```
/// use pitaya::{DataTable, Table};
///
/// let mut table = Table::new(2, 2);
/// let mut data = DataTable::new(["A", "B"]);
/// data.push_row("r0", [1, 2])?;
///
/// table.fill(&data)?;
/// assert_eq!(table.cell(0, 0).unwrap().text(), "A");
/// assert_eq!(table.cell(1, 1).unwrap().text(), "2");
/// # Ok::<(), pitaya::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub(crate) rows: Vec<TableRow>,
}

impl Table {
    /// Create a table of empty cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: (0..rows)
                .map(|_| TableRow {
                    cells: (0..cols).map(|_| TableCell::default()).collect(),
                })
                .collect(),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (cells in the first row, 0 for an empty table).
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, |r| r.cells.len())
    }

    /// The rows of the table.
    #[inline]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// The cell at (row, column), if inside the table.
    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row)?.cells.get(col)
    }

    /// The cell at (row, column), mutably.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut TableCell> {
        self.rows.get_mut(row)?.cells.get_mut(col)
    }

    /// Write a dataset into the table.
    ///
    /// Column labels overwrite row 0, data rows fill the rows below, and
    /// every cell is written with the single-run text collapse. The table is
    /// not resized: a dataset that needs more (or fewer) rows or columns
    /// than the table has is rejected before any cell is touched.
    pub fn fill(&mut self, data: &DataTable) -> Result<()> {
        let (data_rows, data_cols) = data.shape();
        let need_rows = data_rows + 1;
        if self.row_count() != need_rows || self.column_count() != data_cols {
            return Err(Error::DimensionMismatch {
                rows: self.row_count(),
                cols: self.column_count(),
                need_rows,
                need_cols: data_cols,
            });
        }

        for (col, label) in data.columns().iter().enumerate() {
            self.rows[0].cells[col].text_frame.set_text(label.clone());
        }
        for row in 0..data_rows {
            for col in 0..data_cols {
                self.rows[row + 1].cells[col]
                    .text_frame
                    .set_text(data.value(row, col).to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_writes_headers_then_values() {
        let mut table = Table::new(2, 2);
        let mut data = DataTable::new(["A", "B"]);
        data.push_row("r0", [1, 2]).unwrap();

        table.fill(&data).unwrap();

        assert_eq!(table.cell(0, 0).unwrap().text(), "A");
        assert_eq!(table.cell(0, 1).unwrap().text(), "B");
        assert_eq!(table.cell(1, 0).unwrap().text(), "1");
        assert_eq!(table.cell(1, 1).unwrap().text(), "2");
    }

    #[test]
    fn fill_collapses_existing_cell_formatting() {
        let mut table = Table::new(2, 1);
        table
            .cell_mut(1, 0)
            .unwrap()
            .text_frame_mut()
            .set_text("stale");

        let mut data = DataTable::new(["only"]);
        data.push_row("r0", ["fresh"]).unwrap();
        table.fill(&data).unwrap();

        let frame = table.cell(1, 0).unwrap().text_frame();
        assert_eq!(frame.paragraphs().len(), 1);
        assert_eq!(frame.paragraphs()[0].runs().len(), 1);
        assert_eq!(frame.text(), "fresh");
    }

    #[test]
    fn fill_rejects_mismatched_dimensions() {
        let mut table = Table::new(2, 2);
        let mut data = DataTable::new(["A", "B", "C"]);
        data.push_row("r0", [1, 2, 3]).unwrap();

        let err = table.fill(&data).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                rows: 2,
                cols: 2,
                need_rows: 2,
                need_cols: 3,
            }
        ));
        // nothing was written
        assert_eq!(table.cell(0, 0).unwrap().text(), "");
    }

    #[test]
    fn empty_table_has_zero_columns() {
        assert_eq!(Table::default().column_count(), 0);
    }
}
