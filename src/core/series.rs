use serde::{Deserialize, Serialize};

use crate::core::ValueRange;
use crate::error::{ChartError, ChartResult};

/// 1-D series plotted against its implicit index axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexSeries {
    values: Vec<f64>,
}

impl IndexSeries {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Yields `[index, value]` pairs in data space.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| [index as f64, *value])
    }
}

impl From<Vec<f64>> for IndexSeries {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// Paired X/Y series of equal length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PairedSeries {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl PairedSeries {
    /// Pairs an X series with its Y series.
    ///
    /// Both series must have the same length.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> ChartResult<Self> {
        if xs.len() != ys.len() {
            return Err(ChartError::SeriesLengthMismatch {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        Ok(Self { xs, ys })
    }

    /// Builds the pair from `[x, y]` points.
    #[must_use]
    pub fn from_points(points: &[[f64; 2]]) -> Self {
        let (xs, ys) = points.iter().map(|[x, y]| (*x, *y)).unzip();
        Self { xs, ys }
    }

    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.xs.iter().zip(&self.ys).map(|(x, y)| [*x, *y])
    }
}

/// Row-major 2-D grid of scalars. Rows may differ in length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<f64>>,
}

impl Grid {
    #[must_use]
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|values| values.get(col)).copied()
    }

    /// Yields `(row, col, value)` for every present cell.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(move |(col, value)| (row, col, *value))
        })
    }

    pub fn value_range(&self) -> ChartResult<ValueRange> {
        ValueRange::from_values(self.cells().map(|(_, _, value)| value), "grid")
    }
}

impl From<Vec<Vec<f64>>> for Grid {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::new(rows)
    }
}
