use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_STROKE_STYLE: &str = "stroke:#000;fill:none";
pub const DEFAULT_FILL_STYLE: &str = "stroke:none;fill:#000";
pub const DEFAULT_MARKER_RADIUS_PX: f64 = 2.0;
pub const DEFAULT_BAR_WIDTH_PX: f64 = 8.0;

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotKind {
    Line,
    Scatter,
    Bar,
    Grid,
}

impl PlotKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Scatter => "scatter",
            Self::Bar => "bar",
            Self::Grid => "grid",
        }
    }

    /// Style used when the descriptor carries none.
    #[must_use]
    pub fn default_style(self) -> &'static str {
        match self {
            Self::Line => DEFAULT_STROKE_STYLE,
            Self::Scatter | Self::Bar | Self::Grid => DEFAULT_FILL_STYLE,
        }
    }
}

/// Plot kind plus its rendering hints. Attached 1:1 to every added series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    pub kind: PlotKind,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub bar_width: Option<f64>,
    #[serde(default)]
    pub time_trail: bool,
}

impl PlotStyle {
    #[must_use]
    pub fn new(kind: PlotKind) -> Self {
        Self {
            kind,
            style: None,
            radius: None,
            bar_width: None,
            time_trail: false,
        }
    }

    #[must_use]
    pub fn line() -> Self {
        Self::new(PlotKind::Line)
    }

    #[must_use]
    pub fn scatter() -> Self {
        Self::new(PlotKind::Scatter)
    }

    #[must_use]
    pub fn bar() -> Self {
        Self::new(PlotKind::Bar)
    }

    #[must_use]
    pub fn grid() -> Self {
        Self::new(PlotKind::Grid)
    }

    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_bar_width(mut self, bar_width: f64) -> Self {
        self.bar_width = Some(bar_width);
        self
    }

    /// Enables changed-cell highlighting for grid redraws.
    #[must_use]
    pub fn with_time_trail(mut self, enabled: bool) -> Self {
        self.time_trail = enabled;
        self
    }

    #[must_use]
    pub fn resolved_style(&self) -> &str {
        self.style
            .as_deref()
            .unwrap_or_else(|| self.kind.default_style())
    }

    #[must_use]
    pub fn resolved_radius(&self) -> f64 {
        self.radius.unwrap_or(DEFAULT_MARKER_RADIUS_PX)
    }

    #[must_use]
    pub fn resolved_bar_width(&self) -> f64 {
        self.bar_width.unwrap_or(DEFAULT_BAR_WIDTH_PX)
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (value, name) in [(self.radius, "radius"), (self.bar_width, "bar_width")] {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ChartError::InvalidData(format!(
                        "plot style `{name}` must be finite and > 0"
                    )));
                }
            }
        }
        Ok(())
    }
}
