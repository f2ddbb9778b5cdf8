//! HSV colour helpers backing the heatmap saturation scale.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Turns a saturation in `[0, 1]` into a display colour.
pub trait ColorScale: fmt::Debug + Send + Sync {
    fn color_for_saturation(&self, saturation: f64) -> Color;
}

/// Fixed hue and value, saturation driven by the data.
///
/// The default base is the orange-red RGB `(1.0, 0.2, 0.0)`, i.e. hue 12°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsvColorScale {
    pub base_hue_deg: f64,
    pub base_value: f64,
}

impl Default for HsvColorScale {
    fn default() -> Self {
        Self {
            base_hue_deg: 12.0,
            base_value: 1.0,
        }
    }
}

impl HsvColorScale {
    #[must_use]
    pub fn new(base_hue_deg: f64, base_value: f64) -> Self {
        Self {
            base_hue_deg,
            base_value,
        }
    }

    /// Uses the hue and value of `base`, discarding its saturation.
    #[must_use]
    pub fn from_base_color(base: Color) -> Self {
        let (hue, _, value) = rgb_to_hsv(base);
        Self::new(hue, value)
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.base_hue_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "base hue must be finite".to_owned(),
            ));
        }
        if !self.base_value.is_finite() || !(0.0..=1.0).contains(&self.base_value) {
            return Err(ChartError::InvalidData(
                "base value must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }
}

impl ColorScale for HsvColorScale {
    fn color_for_saturation(&self, saturation: f64) -> Color {
        color_from_saturation(self.base_hue_deg, self.base_value, saturation)
    }
}

#[must_use]
pub fn color_from_saturation(base_hue_deg: f64, base_value: f64, saturation: f64) -> Color {
    hsv_to_rgb(base_hue_deg, saturation, base_value)
}

/// Converts HSV (hue in degrees, saturation and value in `[0, 1]`) to opaque RGB.
#[must_use]
pub fn hsv_to_rgb(hue_deg: f64, saturation: f64, value: f64) -> Color {
    let saturation = if saturation.is_finite() {
        saturation.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let value = if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    };
    if saturation == 0.0 {
        return Color::rgb(value, value, value);
    }

    // `rem_euclid` may round tiny negative hues up to exactly 360.
    let sector = (hue_deg.rem_euclid(360.0) / 60.0) % 6.0;
    let index = sector.floor();
    let fraction = sector - index;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fraction);
    let t = value * (1.0 - saturation * (1.0 - fraction));

    match index as u8 {
        0 => Color::rgb(value, t, p),
        1 => Color::rgb(q, value, p),
        2 => Color::rgb(p, value, t),
        3 => Color::rgb(p, q, value),
        4 => Color::rgb(t, p, value),
        _ => Color::rgb(value, p, q),
    }
}

/// Converts RGB to `(hue_deg, saturation, value)`.
#[must_use]
pub fn rgb_to_hsv(color: Color) -> (f64, f64, f64) {
    let max = color.red.max(color.green).max(color.blue);
    let min = color.red.min(color.green).min(color.blue);
    let delta = max - min;
    if delta == 0.0 {
        return (0.0, 0.0, max);
    }

    let sector = if color.red == max {
        (color.green - color.blue) / delta
    } else if color.green == max {
        2.0 + (color.blue - color.red) / delta
    } else {
        4.0 + (color.red - color.green) / delta
    };
    ((sector * 60.0).rem_euclid(360.0), delta / max, max)
}
