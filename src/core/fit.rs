//! Auto-fit: derives data-to-viewport mappings from the min/max of the data.
//!
//! Every mapping places data inside a band that leaves `margin_ratio` of the
//! surface free on each side (10%–90% by default). Y is inverted because pixel
//! rows grow downward while data grows upward.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Grid, IndexSeries, PairedSeries, Transform, ValueRange, Viewport};
use crate::error::{ChartError, ChartResult};

/// Spans narrower than this fraction of the value magnitude are substituted.
const MIN_RELATIVE_SPAN: f64 = 1e-9;

/// Tuning controls for the band fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitTuning {
    /// Fraction of width/height left empty on each side of the band.
    pub margin_ratio: f64,
    /// Span substituted for a value range too narrow to resolve.
    pub degenerate_span: f64,
}

impl Default for FitTuning {
    fn default() -> Self {
        Self {
            margin_ratio: 0.10,
            degenerate_span: 1.0,
        }
    }
}

impl FitTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.margin_ratio.is_finite() || !(0.0..0.5).contains(&self.margin_ratio) {
            return Err(ChartError::InvalidData(
                "fit margin ratio must be finite and in [0, 0.5)".to_owned(),
            ));
        }
        if !self.degenerate_span.is_finite() || self.degenerate_span <= 0.0 {
            return Err(ChartError::InvalidData(
                "fit degenerate span must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    fn half_band(self) -> f64 {
        0.5 - self.margin_ratio
    }
}

/// Result of fitting one or more series into the viewport band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesFit {
    pub transform: Transform,
    /// Observed X range (index axis: `0..max_len`).
    pub x_range: ValueRange,
    /// Observed Y range, before any degenerate-span substitution.
    pub y_range: ValueRange,
}

/// Linear value-to-saturation map: `saturation(v) = m * v + c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaturationScale {
    pub m: f64,
    pub c: f64,
    pub range: ValueRange,
}

impl SaturationScale {
    /// Maps `range.min` to 0 and `range.max` to 1.
    ///
    /// A range too narrow to resolve is widened downward to the substitute
    /// span, so every cell of a flat grid renders at full saturation.
    pub fn from_range(range: ValueRange, tuning: FitTuning) -> ChartResult<Self> {
        let tuning = tuning.validate()?;
        let solve = |half_span: f64| {
            let m = 0.5 / half_span;
            let c = 1.0 - 0.5 * (range.max / half_span);
            (m.is_finite() && c.is_finite() && m > 0.0).then_some((m, c))
        };

        let (m, c) = match resolvable_half_span(range).and_then(&solve) {
            Some(solved) => solved,
            None => {
                let half_span = substitute_half_span(range, tuning);
                warn!(
                    v_min = range.min,
                    v_max = range.max,
                    span = 2.0 * half_span,
                    "unresolvable grid range, substituting default span"
                );
                solve(half_span).ok_or_else(|| {
                    ChartError::InvalidData("grid range cannot be mapped to saturation".to_owned())
                })?
            }
        };
        Ok(Self { m, c, range })
    }

    /// Saturation for `value`, clamped to `[0, 1]`.
    #[must_use]
    pub fn saturation(self, value: f64) -> f64 {
        (self.m * value + self.c).clamp(0.0, 1.0)
    }
}

/// Borrowed view over every series accumulated by a data group.
#[derive(Debug, Clone, Copy)]
pub enum SeriesSet<'a> {
    Index(&'a [IndexSeries]),
    Paired(&'a [PairedSeries]),
}

/// Strategy computing a fresh mapping from the complete data of a group.
///
/// Data groups call it after every mutation with all accumulated series.
pub trait FitStrategy: fmt::Debug + Send + Sync {
    fn refit(&self, series: SeriesSet<'_>, viewport: Viewport) -> ChartResult<SeriesFit>;

    fn refit_grid(&self, grid: &Grid) -> ChartResult<SaturationScale>;
}

/// Full-recompute band fit over the entire accumulated value range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BandFit {
    pub tuning: FitTuning,
}

impl BandFit {
    #[must_use]
    pub fn new(tuning: FitTuning) -> Self {
        Self { tuning }
    }
}

impl FitStrategy for BandFit {
    fn refit(&self, series: SeriesSet<'_>, viewport: Viewport) -> ChartResult<SeriesFit> {
        match series {
            SeriesSet::Index(series) => fit_index_series(series, viewport, self.tuning),
            SeriesSet::Paired(series) => fit_paired_series(series, viewport, self.tuning),
        }
    }

    fn refit_grid(&self, grid: &Grid) -> ChartResult<SaturationScale> {
        fit_grid_saturation(grid, self.tuning)
    }
}

/// Fits 1-D series sharing the index axis `0..max_len`.
pub fn fit_index_series(
    series: &[IndexSeries],
    viewport: Viewport,
    tuning: FitTuning,
) -> ChartResult<SeriesFit> {
    let viewport = viewport.validate()?;
    let tuning = tuning.validate()?;

    let y_range = ValueRange::from_values(
        series.iter().flat_map(|s| s.values().iter().copied()),
        "series",
    )?;
    let max_len = series.iter().map(IndexSeries::len).max().unwrap_or(0);
    let x_range = ValueRange {
        min: 0.0,
        max: max_len as f64,
    };

    let width = viewport.width_px();
    let x_scale = (1.0 - 2.0 * tuning.margin_ratio) * width / x_range.span();
    let (my, cy) = inverted_band(y_range, viewport.height_px(), tuning, "y")?;

    let mut transform = Transform::new();
    transform
        .set_translation(tuning.margin_ratio * width, cy)
        .set_scale(x_scale, my);

    debug!(
        series = series.len(),
        max_len,
        y_min = y_range.min,
        y_max = y_range.max,
        "fit index series"
    );
    Ok(SeriesFit {
        transform,
        x_range,
        y_range,
    })
}

/// Fits paired X/Y series with independent X and Y band maps.
pub fn fit_paired_series(
    series: &[PairedSeries],
    viewport: Viewport,
    tuning: FitTuning,
) -> ChartResult<SeriesFit> {
    let viewport = viewport.validate()?;
    let tuning = tuning.validate()?;

    for pair in series {
        if pair.xs().len() != pair.ys().len() {
            return Err(ChartError::SeriesLengthMismatch {
                x_len: pair.xs().len(),
                y_len: pair.ys().len(),
            });
        }
    }

    let x_range =
        ValueRange::from_values(series.iter().flat_map(|s| s.xs().iter().copied()), "x")?;
    let y_range =
        ValueRange::from_values(series.iter().flat_map(|s| s.ys().iter().copied()), "y")?;

    let (mx, cx) = forward_band(x_range, viewport.width_px(), tuning, "x")?;
    let (my, cy) = inverted_band(y_range, viewport.height_px(), tuning, "y")?;

    let mut transform = Transform::new();
    transform.set_translation(cx, cy).set_scale(mx, my);

    debug!(
        series = series.len(),
        x_min = x_range.min,
        x_max = x_range.max,
        y_min = y_range.min,
        y_max = y_range.max,
        "fit paired series"
    );
    Ok(SeriesFit {
        transform,
        x_range,
        y_range,
    })
}

/// Fits grid values onto the `[0, 1]` saturation scale.
pub fn fit_grid_saturation(grid: &Grid, tuning: FitTuning) -> ChartResult<SaturationScale> {
    let range = grid.value_range()?;
    debug!(
        rows = grid.row_count(),
        cols = grid.column_count(),
        v_min = range.min,
        v_max = range.max,
        "fit grid saturation"
    );
    SaturationScale::from_range(range, tuning)
}

/// Solves `t = m * v + c` with `max -> far edge`, `mid -> 50%`, `min -> near edge`.
fn forward_band(
    range: ValueRange,
    extent: f64,
    tuning: FitTuning,
    axis: &str,
) -> ChartResult<(f64, f64)> {
    solve_band(range, extent, tuning, axis, 1.0)
}

/// Solves `t = m * v + c` with `max -> near edge`, `mid -> 50%`, `min -> far edge`.
fn inverted_band(
    range: ValueRange,
    extent: f64,
    tuning: FitTuning,
    axis: &str,
) -> ChartResult<(f64, f64)> {
    solve_band(range, extent, tuning, axis, -1.0)
}

/// Slope from the half-span and intercept through the midpoint, so neither
/// term needs `max - min` or `min + max`.
fn solve_band(
    range: ValueRange,
    extent: f64,
    tuning: FitTuning,
    axis: &str,
    direction: f64,
) -> ChartResult<(f64, f64)> {
    let mid = range.mid();
    let solve = |half_span: f64| {
        let m = direction * tuning.half_band() * extent / half_span;
        let c = 0.5 * extent - m * mid;
        (m.is_finite() && c.is_finite() && m != 0.0).then_some((m, c))
    };

    if let Some(solved) = resolvable_half_span(range).and_then(&solve) {
        return Ok(solved);
    }

    let half_span = substitute_half_span(range, tuning);
    warn!(
        axis,
        min = range.min,
        max = range.max,
        span = 2.0 * half_span,
        "unresolvable range, substituting default span"
    );
    solve(half_span).ok_or_else(|| {
        ChartError::InvalidData(format!("{axis} range cannot be mapped onto the viewport"))
    })
}

/// Half-span of `range`, or `None` when it is zero or too narrow for `f64`
/// to tell its endpoints apart once mapped.
fn resolvable_half_span(range: ValueRange) -> Option<f64> {
    let half_span = range.half_span();
    let floor = 0.5 * MIN_RELATIVE_SPAN * range.magnitude();
    (half_span > 0.0 && half_span >= floor).then_some(half_span)
}

/// Substitute half-span: the configured span, grown with the value magnitude.
fn substitute_half_span(range: ValueRange, tuning: FitTuning) -> f64 {
    0.5 * tuning
        .degenerate_span
        .max(MIN_RELATIVE_SPAN * range.magnitude())
}
