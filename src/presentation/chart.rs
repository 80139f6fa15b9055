//! Category charts embedded on slides.
//!
//! Only the data side of a chart is modeled: its kind, category labels, and
//! series value caches. Rendering, styling, and the embedded workbook are
//! the host application's business.

use crate::dataset::DataTable;

/// The plot kind of a chart, preserved from load so replacing the data does
/// not change how the chart draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    /// Clustered bar/column chart
    #[default]
    Bar,
    /// Line chart
    Line,
    /// Pie chart
    Pie,
}

/// One data series: a name and its values, one per category.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub(crate) name: String,
    pub(crate) values: Vec<f64>,
}

impl Series {
    /// Create a series.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// The series name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The series values, in category order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// A replacement dataset for a chart: category labels plus one or more
/// series.
///
/// Built either directly or from a [`DataTable`], where the row index
/// becomes the categories and each column becomes one series.
#[derive(Debug, Clone, Default)]
pub struct ChartData {
    pub(crate) categories: Vec<String>,
    pub(crate) series: Vec<Series>,
}

impl ChartData {
    /// Create an empty chart dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category labels.
    pub fn set_categories<I, S>(&mut self, categories: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Append one series.
    pub fn add_series(&mut self, name: impl Into<String>, values: Vec<f64>) -> &mut Self {
        self.series.push(Series::new(name, values));
        self
    }

    /// Build a chart dataset from a tabular one: row index to categories,
    /// one series per column. Non-numeric cells cache as `0.0`.
    pub fn from_table(data: &DataTable) -> Self {
        let mut chart_data = Self::new();
        chart_data.set_categories(data.index().iter().cloned());
        for (col, name) in data.columns().iter().enumerate() {
            let values = data
                .column_values(col)
                .map(|cell| cell.as_number().unwrap_or(0.0))
                .collect();
            chart_data.add_series(name.clone(), values);
        }
        chart_data
    }
}

/// A chart on a slide.
#[derive(Debug, Clone, Default)]
pub struct Chart {
    pub(crate) kind: ChartKind,
    pub(crate) categories: Vec<String>,
    pub(crate) series: Vec<Series>,
}

impl Chart {
    /// Create an empty chart of the given kind.
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            categories: Vec::new(),
            series: Vec::new(),
        }
    }

    /// The chart's plot kind.
    #[inline]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// The category labels.
    #[inline]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The data series.
    #[inline]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Replace the chart's data wholly: old categories and series are
    /// dropped, the chart kind is kept.
    pub fn replace_data(&mut self, data: ChartData) {
        self.categories = data.categories;
        self.series = data.series;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Cell;

    fn sales() -> DataTable {
        let mut data = DataTable::new(["2023", "2024"]);
        data.push_row("Q1", [10, 14]).unwrap();
        data.push_row("Q2", [12, 18]).unwrap();
        data
    }

    #[test]
    fn from_table_maps_index_and_columns() {
        let chart_data = ChartData::from_table(&sales());

        assert_eq!(chart_data.categories, ["Q1", "Q2"]);
        assert_eq!(chart_data.series.len(), 2);
        assert_eq!(chart_data.series[0].name(), "2023");
        assert_eq!(chart_data.series[0].values(), [10.0, 12.0]);
        assert_eq!(chart_data.series[1].name(), "2024");
        assert_eq!(chart_data.series[1].values(), [14.0, 18.0]);
    }

    #[test]
    fn from_table_caches_non_numeric_cells_as_zero() {
        let mut data = DataTable::new(["v"]);
        data.push_row("a", [Cell::Text("n/a".into())]).unwrap();
        let chart_data = ChartData::from_table(&data);
        assert_eq!(chart_data.series[0].values(), [0.0]);
    }

    #[test]
    fn replace_data_drops_old_series_and_keeps_kind() {
        let mut chart = Chart::new(ChartKind::Line);
        chart.categories = vec!["old".into()];
        chart.series = vec![Series::new("old", vec![1.0])];

        chart.replace_data(ChartData::from_table(&sales()));

        assert_eq!(chart.kind(), ChartKind::Line);
        assert_eq!(chart.categories(), ["Q1", "Q2"]);
        assert_eq!(chart.series().len(), 2);
    }
}
