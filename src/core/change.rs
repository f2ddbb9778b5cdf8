use serde::{Deserialize, Serialize};

use crate::core::Grid;
use crate::error::{ChartError, ChartResult};

/// `(row, col)` position inside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellIndex {
    pub row: usize,
    pub col: usize,
}

impl CellIndex {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// How two cell values are compared.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum CellComparison {
    #[default]
    Exact,
    /// Values within `tolerance` of each other count as unchanged.
    Tolerance(f64),
}

impl CellComparison {
    fn differs(self, previous: f64, current: f64) -> bool {
        match self {
            Self::Exact => previous != current,
            Self::Tolerance(tolerance) => (previous - current).abs() > tolerance,
        }
    }
}

/// Lists cells whose value differs between two same-shaped grids, in row-major order.
///
/// Both grids must have the same number of rows and matching row lengths.
pub fn changed_cells(
    previous: &Grid,
    current: &Grid,
    comparison: CellComparison,
) -> ChartResult<Vec<CellIndex>> {
    if let CellComparison::Tolerance(tolerance) = comparison {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ChartError::InvalidData(
                "cell comparison tolerance must be finite and >= 0".to_owned(),
            ));
        }
    }
    ensure_same_shape(previous, current)?;

    let changed = previous
        .rows()
        .iter()
        .zip(current.rows())
        .enumerate()
        .flat_map(|(row, (before, after))| {
            before
                .iter()
                .zip(after)
                .enumerate()
                .filter(move |(_, (b, a))| comparison.differs(**b, **a))
                .map(move |(col, _)| CellIndex::new(row, col))
        })
        .collect();
    Ok(changed)
}

fn ensure_same_shape(previous: &Grid, current: &Grid) -> ChartResult<()> {
    if previous.row_count() != current.row_count() {
        return Err(ChartError::GridShapeMismatch {
            row: previous.row_count().min(current.row_count()),
            previous: previous.row_count(),
            current: current.row_count(),
        });
    }
    for (row, (before, after)) in previous.rows().iter().zip(current.rows()).enumerate() {
        if before.len() != after.len() {
            return Err(ChartError::GridShapeMismatch {
                row,
                previous: before.len(),
                current: after.len(),
            });
        }
    }
    Ok(())
}
