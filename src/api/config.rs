use serde::{Deserialize, Serialize};

use crate::color::HsvColorScale;
use crate::core::{CellComparison, DataGroupOptions, FitTuning, Viewport};
use crate::error::{ChartError, ChartResult};

/// Public plot bootstrap configuration.
///
/// This type is serializable so host applications can persist/load plot setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub fit_tuning: FitTuning,
    #[serde(default)]
    pub group_options: DataGroupOptions,
    #[serde(default)]
    pub color_scale: HsvColorScale,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl PlotConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            fit_tuning: FitTuning::default(),
            group_options: DataGroupOptions::default(),
            color_scale: HsvColorScale::default(),
        }
    }

    #[must_use]
    pub fn with_fit_tuning(mut self, fit_tuning: FitTuning) -> Self {
        self.fit_tuning = fit_tuning;
        self
    }

    #[must_use]
    pub fn with_group_options(mut self, group_options: DataGroupOptions) -> Self {
        self.group_options = group_options;
        self
    }

    #[must_use]
    pub fn with_cell_margin(mut self, cell_margin_px: f64) -> Self {
        self.group_options.cell_margin_px = cell_margin_px;
        self
    }

    #[must_use]
    pub fn with_cell_comparison(mut self, comparison: CellComparison) -> Self {
        self.group_options.cell_comparison = comparison;
        self
    }

    #[must_use]
    pub fn with_color_scale(mut self, color_scale: HsvColorScale) -> Self {
        self.color_scale = color_scale;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;
        self.fit_tuning.validate()?;
        self.group_options.validate()?;
        self.color_scale.validate()?;
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse plot config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize plot config json: {e}"))
        })
    }
}
