//! Data groups: accumulate series, refit, and materialize primitives.
//!
//! A group is created for one data dimensionality and a fixed viewport. Every
//! mutation reruns the fit over all accumulated data and rebuilds the primitive
//! list. A failed mutation leaves the previous fit and primitives untouched.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::color::{ColorScale, HsvColorScale};
use crate::core::{
    BandFit, CellComparison, CellIndex, DEFAULT_CELL_MARGIN_PX, FitStrategy, FitTuning, Grid,
    GridLayout, IndexSeries, PairedSeries, PlotKind, PlotStyle, SaturationScale, SeriesFit,
    SeriesSet, Transform, ValueRange, Viewport, changed_cells, project_bars, project_heatmap,
    project_polyline, project_scatter,
};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ReferenceMarkerConfig, axis_labels, reference_lines};
use crate::render::Primitive;

/// Data dimensionality accepted by a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataGroupKind {
    /// 1-D series against the index axis.
    OneD,
    /// Paired X/Y series.
    PairedXY,
    /// One 2-D grid (heatmap).
    Grid,
}

impl DataGroupKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::OneD => "one_d",
            Self::PairedXY => "paired_xy",
            Self::Grid => "grid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataGroupState {
    Empty,
    FitComputed,
}

/// Per-group display options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataGroupOptions {
    #[serde(default = "default_true")]
    pub axis_display: bool,
    #[serde(default = "default_true")]
    pub marker_display: bool,
    #[serde(default = "default_cell_margin")]
    pub cell_margin_px: f64,
    #[serde(default)]
    pub cell_comparison: CellComparison,
    #[serde(default)]
    pub reference_markers: ReferenceMarkerConfig,
}

fn default_true() -> bool {
    true
}

fn default_cell_margin() -> f64 {
    DEFAULT_CELL_MARGIN_PX
}

impl Default for DataGroupOptions {
    fn default() -> Self {
        Self {
            axis_display: true,
            marker_display: true,
            cell_margin_px: DEFAULT_CELL_MARGIN_PX,
            cell_comparison: CellComparison::Exact,
            reference_markers: ReferenceMarkerConfig::default(),
        }
    }
}

impl DataGroupOptions {
    #[must_use]
    pub fn with_axis_display(mut self, visible: bool) -> Self {
        self.axis_display = visible;
        self
    }

    #[must_use]
    pub fn with_marker_display(mut self, visible: bool) -> Self {
        self.marker_display = visible;
        self
    }

    #[must_use]
    pub fn with_cell_margin(mut self, cell_margin_px: f64) -> Self {
        self.cell_margin_px = cell_margin_px;
        self
    }

    #[must_use]
    pub fn with_cell_comparison(mut self, comparison: CellComparison) -> Self {
        self.cell_comparison = comparison;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.cell_margin_px.is_finite() || self.cell_margin_px < 0.0 {
            return Err(ChartError::InvalidData(
                "cell margin must be finite and >= 0".to_owned(),
            ));
        }
        self.reference_markers.validate()
    }
}

/// Accumulated series and their descriptors, index-aligned.
#[derive(Debug, Clone, PartialEq)]
struct SeriesStore<S> {
    series: Vec<S>,
    styles: Vec<PlotStyle>,
}

impl<S> SeriesStore<S> {
    fn new() -> Self {
        Self {
            series: Vec::new(),
            styles: Vec::new(),
        }
    }

    fn len(&self) -> usize {
        self.series.len()
    }

    fn push(&mut self, series: S, style: PlotStyle) {
        self.series.push(series);
        self.styles.push(style);
    }

    fn pop(&mut self) {
        self.series.pop();
        self.styles.pop();
    }

    fn iter(&self) -> impl Iterator<Item = (&S, &PlotStyle)> {
        self.series.iter().zip(&self.styles)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct GridSnapshot {
    current: Grid,
    previous: Option<Grid>,
    style: PlotStyle,
}

#[derive(Debug, Clone)]
enum GroupData {
    OneD(SeriesStore<IndexSeries>),
    PairedXY(SeriesStore<PairedSeries>),
    Grid(Option<GridSnapshot>),
}

impl GroupData {
    fn kind(&self) -> DataGroupKind {
        match self {
            Self::OneD(_) => DataGroupKind::OneD,
            Self::PairedXY(_) => DataGroupKind::PairedXY,
            Self::Grid(_) => DataGroupKind::Grid,
        }
    }
}

/// Mapping produced by the latest successful refit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GroupFit {
    Series(SeriesFit),
    Grid {
        scale: SaturationScale,
        layout: GridLayout,
        changed: Vec<CellIndex>,
    },
}

/// Fit plus primitives, committed together.
struct Refit {
    fit: GroupFit,
    primitives: Vec<Primitive>,
}

/// One plotted group of series sharing a viewport and a mapping.
#[derive(Debug, Clone)]
pub struct DataGroup {
    viewport: Viewport,
    options: DataGroupOptions,
    strategy: Arc<dyn FitStrategy>,
    colors: Arc<dyn ColorScale>,
    data: GroupData,
    fit: Option<GroupFit>,
    primitives: Vec<Primitive>,
}

impl DataGroup {
    /// Creates an empty group with default options and the band fit.
    pub fn new(kind: DataGroupKind, viewport: Viewport) -> ChartResult<Self> {
        Self::with_options(kind, viewport, DataGroupOptions::default(), FitTuning::default())
    }

    pub fn with_options(
        kind: DataGroupKind,
        viewport: Viewport,
        options: DataGroupOptions,
        tuning: FitTuning,
    ) -> ChartResult<Self> {
        let viewport = viewport.validate()?;
        options.validate()?;
        let tuning = tuning.validate()?;

        let data = match kind {
            DataGroupKind::OneD => GroupData::OneD(SeriesStore::new()),
            DataGroupKind::PairedXY => GroupData::PairedXY(SeriesStore::new()),
            DataGroupKind::Grid => GroupData::Grid(None),
        };
        Ok(Self {
            viewport,
            options,
            strategy: Arc::new(BandFit::new(tuning)),
            colors: Arc::new(HsvColorScale::default()),
            data,
            fit: None,
            primitives: Vec::new(),
        })
    }

    pub fn one_d(viewport: Viewport) -> ChartResult<Self> {
        Self::new(DataGroupKind::OneD, viewport)
    }

    pub fn paired(viewport: Viewport) -> ChartResult<Self> {
        Self::new(DataGroupKind::PairedXY, viewport)
    }

    pub fn grid(viewport: Viewport) -> ChartResult<Self> {
        Self::new(DataGroupKind::Grid, viewport)
    }

    /// Replaces the fit strategy used by subsequent refits.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Arc<dyn FitStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replaces the colour scale used for grid cells.
    #[must_use]
    pub fn with_color_scale(mut self, colors: Arc<dyn ColorScale>) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn kind(&self) -> DataGroupKind {
        self.data.kind()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn options(&self) -> &DataGroupOptions {
        &self.options
    }

    #[must_use]
    pub fn state(&self) -> DataGroupState {
        if self.fit.is_some() {
            DataGroupState::FitComputed
        } else {
            DataGroupState::Empty
        }
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        match &self.data {
            GroupData::OneD(series) => series.len(),
            GroupData::PairedXY(series) => series.len(),
            GroupData::Grid(snapshot) => usize::from(snapshot.is_some()),
        }
    }

    #[must_use]
    pub fn fit(&self) -> Option<&GroupFit> {
        self.fit.as_ref()
    }

    /// Current data-to-viewport transform of a series group.
    #[must_use]
    pub fn transform(&self) -> Option<&Transform> {
        match self.fit.as_ref()? {
            GroupFit::Series(fit) => Some(&fit.transform),
            GroupFit::Grid { .. } => None,
        }
    }

    /// Observed Y range of a series group.
    #[must_use]
    pub fn y_range(&self) -> Option<ValueRange> {
        match self.fit.as_ref()? {
            GroupFit::Series(fit) => Some(fit.y_range),
            GroupFit::Grid { .. } => None,
        }
    }

    #[must_use]
    pub fn saturation_scale(&self) -> Option<SaturationScale> {
        match self.fit.as_ref()? {
            GroupFit::Grid { scale, .. } => Some(*scale),
            GroupFit::Series(_) => None,
        }
    }

    /// Cells flagged as changed by the latest grid submission.
    #[must_use]
    pub fn changed_cells(&self) -> &[CellIndex] {
        match &self.fit {
            Some(GroupFit::Grid { changed, .. }) => changed,
            _ => &[],
        }
    }

    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Appends a 1-D series and refits the group.
    pub fn add(&mut self, series: impl Into<IndexSeries>, style: PlotStyle) -> ChartResult<()> {
        validate_series_style(&style)?;
        let mismatch = self.kind_mismatch(DataGroupKind::OneD);
        let GroupData::OneD(entries) = &mut self.data else {
            return Err(mismatch);
        };
        entries.push(series.into(), style);
        self.commit_or_rollback()
    }

    /// Appends a paired series given as `[x, y]` points and refits the group.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_points(&mut self, points: &[[f64; 2]], style: PlotStyle) -> ChartResult<()> {
        self.push_paired(PairedSeries::from_points(points), style)
    }

    /// Same as [`DataGroup::from_points`].
    pub fn add_points(&mut self, points: &[[f64; 2]], style: PlotStyle) -> ChartResult<()> {
        self.from_points(points, style)
    }

    /// Appends a paired series given as separate X and Y series.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_series(&mut self, xs: Vec<f64>, ys: Vec<f64>, style: PlotStyle) -> ChartResult<()> {
        self.push_paired(PairedSeries::new(xs, ys)?, style)
    }

    /// Replaces the grid of a grid group, diffing against the previous one
    /// when the descriptor enables the time trail.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_2d_data(&mut self, grid: impl Into<Grid>, style: PlotStyle) -> ChartResult<()> {
        if style.kind != PlotKind::Grid {
            return Err(ChartError::InvalidData(format!(
                "grid data requires the `grid` plot kind, got `{}`",
                style.kind.name()
            )));
        }
        style.validate()?;
        let GroupData::Grid(snapshot) = &self.data else {
            return Err(self.kind_mismatch(DataGroupKind::Grid));
        };

        let grid = grid.into();
        let previous = snapshot.as_ref().map(|snapshot| &snapshot.current);
        let changed = match previous {
            Some(previous) if style.time_trail => {
                changed_cells(previous, &grid, self.options.cell_comparison)?
            }
            _ => Vec::new(),
        };

        let refit = self.refit_grid(&grid, changed)?;
        if let GroupData::Grid(snapshot) = &mut self.data {
            let previous = snapshot.take().map(|snapshot| snapshot.current);
            *snapshot = Some(GridSnapshot {
                current: grid,
                previous,
                style,
            });
        }
        self.apply(refit);
        Ok(())
    }

    /// Grid submitted before the current one, if any.
    #[must_use]
    pub fn previous_grid(&self) -> Option<&Grid> {
        match &self.data {
            GroupData::Grid(Some(snapshot)) => snapshot.previous.as_ref(),
            _ => None,
        }
    }

    /// Descriptor the current grid was submitted with.
    #[must_use]
    pub fn grid_style(&self) -> Option<&PlotStyle> {
        match &self.data {
            GroupData::Grid(Some(snapshot)) => Some(&snapshot.style),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_grid(&self) -> Option<&Grid> {
        match &self.data {
            GroupData::Grid(Some(snapshot)) => Some(&snapshot.current),
            _ => None,
        }
    }

    fn push_paired(&mut self, series: PairedSeries, style: PlotStyle) -> ChartResult<()> {
        validate_series_style(&style)?;
        let mismatch = self.kind_mismatch(DataGroupKind::PairedXY);
        let GroupData::PairedXY(entries) = &mut self.data else {
            return Err(mismatch);
        };
        entries.push(series, style);
        self.commit_or_rollback()
    }

    /// Refits after a push; pops the pushed series again on failure.
    fn commit_or_rollback(&mut self) -> ChartResult<()> {
        match self.refit_series() {
            Ok(refit) => {
                self.apply(refit);
                Ok(())
            }
            Err(err) => {
                match &mut self.data {
                    GroupData::OneD(entries) => {
                        entries.pop();
                    }
                    GroupData::PairedXY(entries) => {
                        entries.pop();
                    }
                    GroupData::Grid(_) => {}
                }
                debug!(error = %err, kind = self.kind().name(), "refit rejected");
                Err(err)
            }
        }
    }

    fn apply(&mut self, refit: Refit) {
        debug!(
            kind = self.kind().name(),
            series = self.series_count(),
            primitives = refit.primitives.len(),
            "data group refit"
        );
        self.fit = Some(refit.fit);
        self.primitives = refit.primitives;
    }

    fn refit_series(&self) -> ChartResult<Refit> {
        let (fit, mut primitives) = match &self.data {
            GroupData::OneD(entries) => {
                let fit = self
                    .strategy
                    .refit(SeriesSet::Index(&entries.series), self.viewport)?;
                let primitives = entries
                    .iter()
                    .flat_map(|(series, style)| {
                        series_primitives(series.points(), &fit.transform, style)
                    })
                    .collect::<Vec<_>>();
                (fit, primitives)
            }
            GroupData::PairedXY(entries) => {
                let fit = self
                    .strategy
                    .refit(SeriesSet::Paired(&entries.series), self.viewport)?;
                let primitives = entries
                    .iter()
                    .flat_map(|(series, style)| {
                        series_primitives(series.points(), &fit.transform, style)
                    })
                    .collect::<Vec<_>>();
                (fit, primitives)
            }
            GroupData::Grid(_) => return Err(self.kind_mismatch(DataGroupKind::OneD)),
        };

        let markers = &self.options.reference_markers;
        if self.options.axis_display {
            primitives.extend(
                axis_labels(&fit.transform, fit.y_range, self.viewport, markers)
                    .into_iter()
                    .map(|axis| Primitive::Text(axis.label)),
            );
        }
        if self.options.marker_display {
            primitives.extend(
                reference_lines(&fit.transform, fit.y_range, self.viewport, markers)
                    .into_iter()
                    .map(|reference| Primitive::Line(reference.line)),
            );
        }
        for primitive in &primitives {
            primitive.validate()?;
        }

        Ok(Refit {
            fit: GroupFit::Series(fit),
            primitives,
        })
    }

    fn refit_grid(&self, grid: &Grid, changed: Vec<CellIndex>) -> ChartResult<Refit> {
        let scale = self.strategy.refit_grid(grid)?;
        let layout = GridLayout::for_grid(grid, self.viewport, self.options.cell_margin_px)?;
        let primitives: Vec<Primitive> =
            project_heatmap(grid, layout, scale, self.colors.as_ref(), &changed)
                .into_iter()
                .map(Primitive::GridCell)
                .collect();
        for primitive in &primitives {
            primitive.validate()?;
        }
        trace!(
            cells = primitives.len(),
            changed = changed.len(),
            "grid primitives"
        );

        Ok(Refit {
            fit: GroupFit::Grid {
                scale,
                layout,
                changed,
            },
            primitives,
        })
    }

    fn kind_mismatch(&self, found: DataGroupKind) -> ChartError {
        ChartError::KindMismatch {
            expected: self.kind().name(),
            found: found.name(),
        }
    }
}

fn validate_series_style(style: &PlotStyle) -> ChartResult<()> {
    if style.kind == PlotKind::Grid {
        return Err(ChartError::InvalidData(
            "the `grid` plot kind requires 2-D data".to_owned(),
        ));
    }
    style.validate()
}

fn series_primitives<I>(points: I, transform: &Transform, style: &PlotStyle) -> Vec<Primitive>
where
    I: IntoIterator<Item = [f64; 2]>,
{
    let css = style.resolved_style();
    let primitives: Vec<Primitive> = match style.kind {
        PlotKind::Line => vec![Primitive::Polyline(project_polyline(points, transform, css))],
        PlotKind::Scatter => project_scatter(points, transform, style.resolved_radius(), css)
            .into_iter()
            .map(Primitive::Circle)
            .collect(),
        PlotKind::Bar => project_bars(points, transform, style.resolved_bar_width(), css)
            .into_iter()
            .map(Primitive::Rect)
            .collect(),
        PlotKind::Grid => Vec::new(),
    };
    trace!(kind = style.kind.name(), count = primitives.len(), "series primitives");
    primitives
}
