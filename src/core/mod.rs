pub mod bar_series;
pub mod change;
pub mod data_group;
pub mod fit;
pub mod grid;
pub mod heatmap;
pub mod line_series;
pub mod plot_kind;
pub mod series;
pub mod transform;
pub mod types;

pub use bar_series::project_bars;
pub use change::{CellComparison, CellIndex, changed_cells};
pub use data_group::{DataGroup, DataGroupKind, DataGroupOptions, DataGroupState, GroupFit};
pub use fit::{
    BandFit, FitStrategy, FitTuning, SaturationScale, SeriesFit, SeriesSet, fit_grid_saturation,
    fit_index_series, fit_paired_series,
};
pub use grid::{CellGeometry, DEFAULT_CELL_MARGIN_PX, GridLayout, format_cell_value};
pub use heatmap::{HIGHLIGHT_STYLE_SUFFIX, project_heatmap};
pub use line_series::{project_polyline, project_scatter};
pub use plot_kind::{
    DEFAULT_BAR_WIDTH_PX, DEFAULT_FILL_STYLE, DEFAULT_MARKER_RADIUS_PX, DEFAULT_STROKE_STYLE,
    PlotKind, PlotStyle,
};
pub use series::{Grid, IndexSeries, PairedSeries};
pub use transform::Transform;
pub use types::{ValueRange, Viewport};
