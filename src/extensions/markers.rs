use serde::{Deserialize, Serialize};

use crate::core::{Transform, ValueRange, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, TextPrimitive};

pub const EXTREME_LINE_STYLE: &str = "stroke:#888;fill:none;stroke-dasharray:4,5";
pub const ZERO_LINE_STYLE: &str = "stroke:#ccc;fill:none;stroke-dasharray:4,5";

/// Which reference line a marker represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceKind {
    Max,
    Min,
    Zero,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub kind: ReferenceKind,
    pub line: LinePrimitive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub kind: ReferenceKind,
    pub label: TextPrimitive,
}

/// Layout and styling for y-extreme labels and reference lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceMarkerConfig {
    /// Estimated glyph width used to right-align labels.
    pub label_char_width_px: f64,
    /// Labels sit this far above their line.
    pub label_offset_px: f64,
    pub extreme_line_style: String,
    pub zero_line_style: String,
}

impl Default for ReferenceMarkerConfig {
    fn default() -> Self {
        Self {
            label_char_width_px: 10.0,
            label_offset_px: 5.0,
            extreme_line_style: EXTREME_LINE_STYLE.to_owned(),
            zero_line_style: ZERO_LINE_STYLE.to_owned(),
        }
    }
}

impl ReferenceMarkerConfig {
    pub fn validate(&self) -> ChartResult<()> {
        for (value, name) in [
            (self.label_char_width_px, "label_char_width_px"),
            (self.label_offset_px, "label_offset_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "reference marker config `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Text labels showing the y-max and y-min values next to the right edge.
#[must_use]
pub fn axis_labels(
    transform: &Transform,
    y_range: ValueRange,
    viewport: Viewport,
    config: &ReferenceMarkerConfig,
) -> Vec<AxisLabel> {
    [(ReferenceKind::Max, y_range.max), (ReferenceKind::Min, y_range.min)]
        .into_iter()
        .map(|(kind, value)| {
            let text = value.to_string();
            let right_padding = text.chars().count() as f64 * config.label_char_width_px;
            let y = transform.transform_point([0.0, value])[1] - config.label_offset_px;
            AxisLabel {
                kind,
                label: TextPrimitive::new(text, viewport.width_px() - right_padding, y),
            }
        })
        .collect()
}

/// Dashed full-width lines at y-max, y-min and, when the range straddles it, zero.
#[must_use]
pub fn reference_lines(
    transform: &Transform,
    y_range: ValueRange,
    viewport: Viewport,
    config: &ReferenceMarkerConfig,
) -> Vec<ReferenceLine> {
    let mut anchors = vec![
        (ReferenceKind::Max, y_range.max, config.extreme_line_style.as_str()),
        (ReferenceKind::Min, y_range.min, config.extreme_line_style.as_str()),
    ];
    if y_range.contains_zero_strictly() {
        anchors.push((ReferenceKind::Zero, 0.0, config.zero_line_style.as_str()));
    }

    anchors
        .into_iter()
        .map(|(kind, value, style)| {
            let y = transform.transform_point([0.0, value])[1];
            ReferenceLine {
                kind,
                line: LinePrimitive::new(0.0, y, viewport.width_px(), y, style),
            }
        })
        .collect()
}
