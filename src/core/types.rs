use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Fixed-size drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(400, 300)
    }
}

/// Closed `[min, max]` interval observed over one or more series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Computes the range of every value yielded by `values`.
    ///
    /// Returns an error for an empty input or any non-finite value.
    pub fn from_values<I>(values: I, field_name: &str) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut range: Option<Self> = None;
        for value in values {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "{field_name} values must be finite"
                )));
            }
            range = Some(match range {
                None => Self {
                    min: value,
                    max: value,
                },
                Some(current) => Self {
                    min: current.min.min(value),
                    max: current.max.max(value),
                },
            });
        }

        range.ok_or_else(|| {
            ChartError::InvalidData(format!("{field_name} range needs at least one value"))
        })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn mid(self) -> f64 {
        self.min / 2.0 + self.max / 2.0
    }

    /// Half of the span, finite for every finite range.
    #[must_use]
    pub fn half_span(self) -> f64 {
        self.max / 2.0 - self.min / 2.0
    }

    /// Largest absolute endpoint.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.min.abs().max(self.max.abs())
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span() == 0.0
    }

    #[must_use]
    pub fn contains_zero_strictly(self) -> bool {
        self.min < 0.0 && self.max > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::{ValueRange, Viewport};

    #[test]
    fn value_range_tracks_min_and_max() {
        let range = ValueRange::from_values([4.0, 5.0, 1.0, 0.0, -80.0, 20.0, 43.0], "y")
            .expect("range");
        assert_eq!(range.min, -80.0);
        assert_eq!(range.max, 43.0);
        assert!(range.contains_zero_strictly());
    }

    #[test]
    fn value_range_rejects_empty_and_non_finite_input() {
        assert!(ValueRange::from_values(std::iter::empty(), "y").is_err());
        assert!(ValueRange::from_values([1.0, f64::NAN], "y").is_err());
        assert!(ValueRange::from_values([f64::INFINITY], "y").is_err());
    }

    #[test]
    fn mid_and_half_span_stay_finite_near_f64_max() {
        let range = ValueRange {
            min: -1.7e308,
            max: 1.7e308,
        };
        assert_eq!(range.mid(), 0.0);
        assert_eq!(range.half_span(), 1.7e308);
        assert!(range.span().is_infinite());

        let high = ValueRange {
            min: 1.0e308,
            max: 1.7e308,
        };
        assert!((high.mid() - 1.35e308).abs() <= 1.0e294);
        assert_eq!(high.magnitude(), 1.7e308);
    }

    #[test]
    fn zero_sized_viewport_is_rejected() {
        assert!(Viewport::new(0, 300).validate().is_err());
        assert!(Viewport::new(400, 300).validate().is_ok());
    }
}
