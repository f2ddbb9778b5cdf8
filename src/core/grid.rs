use serde::{Deserialize, Serialize};

use crate::core::{Grid, Viewport};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_CELL_MARGIN_PX: f64 = 8.0;

/// Uniform cell layout for a grid drawn across the full viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    pub cell_width: f64,
    pub cell_height: f64,
    pub cell_margin: f64,
}

/// Pixel box and label anchor of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label_x: f64,
    pub label_y: f64,
}

impl GridLayout {
    /// Splits the viewport into `rows x max_row_len` cells.
    pub fn for_grid(grid: &Grid, viewport: Viewport, cell_margin: f64) -> ChartResult<Self> {
        let viewport = viewport.validate()?;
        if !cell_margin.is_finite() || cell_margin < 0.0 {
            return Err(ChartError::InvalidData(
                "grid cell margin must be finite and >= 0".to_owned(),
            ));
        }

        let rows = grid.row_count();
        let cols = grid.column_count();
        if rows == 0 || cols == 0 {
            return Err(ChartError::InvalidData(
                "grid must contain at least one cell".to_owned(),
            ));
        }

        let cell_width = viewport.width_px() / cols as f64;
        let cell_height = viewport.height_px() / rows as f64;
        if cell_width <= cell_margin / 2.0 || cell_height <= cell_margin / 2.0 {
            return Err(ChartError::InvalidData(format!(
                "grid cell margin {cell_margin} leaves no room in {cell_width}x{cell_height} cells"
            )));
        }

        Ok(Self {
            rows,
            cols,
            cell_width,
            cell_height,
            cell_margin,
        })
    }

    #[must_use]
    pub fn cell(self, row: usize, col: usize) -> CellGeometry {
        let half_margin = self.cell_margin / 2.0;
        let left = col as f64 * self.cell_width;
        let top = row as f64 * self.cell_height;
        CellGeometry {
            x: left + half_margin,
            y: top + half_margin,
            width: self.cell_width - half_margin,
            height: self.cell_height - half_margin,
            label_x: left + self.cell_width / 2.0,
            label_y: top + self.cell_height / 2.0,
        }
    }
}

/// Cell label text: integers print bare, everything else with two decimals.
#[must_use]
pub fn format_cell_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::{GridLayout, format_cell_value};
    use crate::core::{Grid, Viewport};

    #[test]
    fn layout_divides_viewport_by_longest_row() {
        let grid = Grid::new(vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0, 6.0]]);
        let layout = GridLayout::for_grid(&grid, Viewport::new(400, 200), 8.0).expect("layout");
        assert_eq!(layout.cols, 4);
        assert_eq!(layout.rows, 2);
        assert_eq!(layout.cell_width, 100.0);
        assert_eq!(layout.cell_height, 100.0);

        let cell = layout.cell(1, 2);
        assert_eq!(cell.x, 204.0);
        assert_eq!(cell.y, 104.0);
        assert_eq!(cell.width, 96.0);
        assert_eq!(cell.height, 96.0);
        assert_eq!(cell.label_x, 250.0);
        assert_eq!(cell.label_y, 150.0);
    }

    #[test]
    fn empty_grid_has_no_layout() {
        let grid = Grid::new(vec![Vec::new()]);
        assert!(GridLayout::for_grid(&grid, Viewport::new(10, 10), 0.0).is_err());
    }

    #[test]
    fn oversized_margin_is_rejected() {
        let grid = Grid::new(vec![vec![1.0; 10]]);
        assert!(GridLayout::for_grid(&grid, Viewport::new(40, 40), 8.0).is_err());
    }

    #[test]
    fn cell_labels_drop_decimals_for_integers() {
        assert_eq!(format_cell_value(3.0), "3");
        assert_eq!(format_cell_value(-12.0), "-12");
        assert_eq!(format_cell_value(0.256), "0.26");
    }
}
