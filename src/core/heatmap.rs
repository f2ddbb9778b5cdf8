use std::collections::HashSet;

use crate::color::ColorScale;
use crate::core::{CellIndex, Grid, GridLayout, SaturationScale, format_cell_value};
use crate::render::{GridCellPrimitive, RectPrimitive, TextPrimitive};

pub const HIGHLIGHT_STYLE_SUFFIX: &str = ";stroke:#000;stroke-width:2";

/// Projects every grid cell into a coloured rectangle with a value label.
///
/// Cells listed in `changed` get a highlight stroke appended to their style.
pub fn project_heatmap(
    grid: &Grid,
    layout: GridLayout,
    scale: SaturationScale,
    colors: &dyn ColorScale,
    changed: &[CellIndex],
) -> Vec<GridCellPrimitive> {
    let changed: HashSet<CellIndex> = changed.iter().copied().collect();
    grid.cells()
        .map(|(row, col, value)| {
            let geometry = layout.cell(row, col);
            let fill = colors.color_for_saturation(scale.saturation(value));
            let highlighted = changed.contains(&CellIndex::new(row, col));

            let mut style = format!("fill:{}", fill.to_hex_string());
            if highlighted {
                style.push_str(HIGHLIGHT_STYLE_SUFFIX);
            }

            GridCellPrimitive {
                row,
                col,
                rect: RectPrimitive::new(
                    geometry.x,
                    geometry.y,
                    geometry.width,
                    geometry.height,
                    style,
                ),
                label: TextPrimitive::new(
                    format_cell_value(value),
                    geometry.label_x,
                    geometry.label_y,
                ),
                fill,
                highlighted,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::project_heatmap;
    use crate::color::HsvColorScale;
    use crate::core::{CellIndex, FitTuning, Grid, GridLayout, SaturationScale, Viewport};

    #[test]
    fn cells_are_coloured_by_saturation_and_highlighted_on_change() {
        let grid = Grid::new(vec![vec![0.0, 10.0], vec![5.0, 2.5]]);
        let layout = GridLayout::for_grid(&grid, Viewport::new(200, 100), 8.0).expect("layout");
        let scale = SaturationScale::from_range(grid.value_range().expect("range"), FitTuning::default())
            .expect("scale");

        let cells = project_heatmap(
            &grid,
            layout,
            scale,
            &HsvColorScale::default(),
            &[CellIndex::new(1, 0)],
        );
        assert_eq!(cells.len(), 4);

        assert_eq!(cells[0].rect.style, "fill:#FFFFFF");
        assert_eq!(cells[1].rect.style, "fill:#FF3300");
        assert!(!cells[1].highlighted);
        assert!(cells[2].highlighted);
        assert!(cells[2].rect.style.ends_with(";stroke:#000;stroke-width:2"));
        assert_eq!(cells[3].label.text, "2.50");
        assert_eq!(cells[1].label.text, "10");
    }
}
