use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// `#RRGGBB` in upper-case hex. Alpha is not encoded.
    #[must_use]
    pub fn to_hex_string(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn ensure_finite(values: &[f64], what: &str) -> ChartResult<()> {
    if values.iter().any(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "{what} coordinates must be finite"
        )));
    }
    Ok(())
}

fn ensure_positive(value: f64, what: &str) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{what} must be finite and > 0"
        )));
    }
    Ok(())
}

/// Connected line through transformed points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylinePrimitive {
    pub points: Vec<[f64; 2]>,
    pub style: String,
}

impl PolylinePrimitive {
    #[must_use]
    pub fn new(points: Vec<[f64; 2]>, style: impl Into<String>) -> Self {
        Self {
            points,
            style: style.into(),
        }
    }

    /// SVG `points` attribute value: `x,y x,y ...`.
    #[must_use]
    pub fn points_attribute(&self) -> String {
        self.points
            .iter()
            .map(|[x, y]| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn validate(&self) -> ChartResult<()> {
        for [x, y] in &self.points {
            ensure_finite(&[*x, *y], "polyline")?;
        }
        Ok(())
    }
}

/// Scatter marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub style: String,
}

impl CirclePrimitive {
    #[must_use]
    pub fn new(cx: f64, cy: f64, radius: f64, style: impl Into<String>) -> Self {
        Self {
            cx,
            cy,
            radius,
            style: style.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite(&[self.cx, self.cy], "circle")?;
        ensure_positive(self.radius, "circle radius")
    }
}

/// Axis-aligned rectangle with a top-left anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub style: String,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, style: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            style: style.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite(&[self.x, self.y], "rect")?;
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Horizontal reference line such as the y-max, y-min or zero marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub style: String,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, style: impl Into<String>) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            style: style.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite(&[self.x1, self.y1, self.x2, self.y2], "line")
    }
}

/// Text label anchored at `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        ensure_finite(&[self.x, self.y], "text")
    }
}

/// Heatmap cell: filled rectangle plus its value label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCellPrimitive {
    pub row: usize,
    pub col: usize,
    pub rect: RectPrimitive,
    pub label: TextPrimitive,
    pub fill: Color,
    pub highlighted: bool,
}

impl GridCellPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        self.rect.validate()?;
        self.label.validate()?;
        self.fill.validate()
    }
}

/// One drawable handed to a rendering backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Polyline(PolylinePrimitive),
    Circle(CirclePrimitive),
    Rect(RectPrimitive),
    GridCell(GridCellPrimitive),
    Line(LinePrimitive),
    Text(TextPrimitive),
}

impl Primitive {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Polyline(polyline) => polyline.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::GridCell(cell) => cell.validate(),
            Self::Line(line) => line.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}
