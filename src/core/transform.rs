use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// 2-D affine transform stored as the six scalars `a, b, c, d, e, f`.
///
/// The matrix layout follows the SVG `matrix(a,b,c,d,e,f)` convention:
///
/// ```text
/// | a  c  e |
/// | b  d  f |
/// | 0  0  1 |
/// ```
///
/// The inverse is memoized on first request and dropped by every mutating call.
#[derive(Clone, Serialize, Deserialize)]
#[serde(into = "[f64; 6]", try_from = "Vec<f64>")]
pub struct Transform {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
    inverse_cache: OnceLock<[f64; 6]>,
}

impl Transform {
    /// Creates the identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::from_array([1.0, 0.0, 0.0, 1.0, 0.0, 0.0])
    }

    #[must_use]
    pub fn identity() -> Self {
        Self::new()
    }

    #[must_use]
    pub fn from_array([a, b, c, d, e, f]: [f64; 6]) -> Self {
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            inverse_cache: OnceLock::new(),
        }
    }

    /// Builds a transform from an untyped slice of matrix values.
    ///
    /// The slice must hold exactly six values in `a, b, c, d, e, f` order.
    pub fn from_slice(values: &[f64]) -> ChartResult<Self> {
        let array: [f64; 6] = values
            .try_into()
            .map_err(|_| ChartError::MalformedTransform { len: values.len() })?;
        Ok(Self::from_array(array))
    }

    /// Replaces all six values of this transform.
    pub fn set_from_array(&mut self, [a, b, c, d, e, f]: [f64; 6]) -> &mut Self {
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
        self.e = e;
        self.f = f;
        self.invalidate();
        self
    }

    pub fn set_from_slice(&mut self, values: &[f64]) -> ChartResult<&mut Self> {
        let array: [f64; 6] = values
            .try_into()
            .map_err(|_| ChartError::MalformedTransform { len: values.len() })?;
        Ok(self.set_from_array(array))
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.to_array() == [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]
    }

    /// Adds `(dx, dy)` to the current translation.
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.e += dx;
        self.f += dy;
        self.invalidate();
        self
    }

    /// Replaces the current translation.
    pub fn set_translation(&mut self, x: f64, y: f64) -> &mut Self {
        self.e = x;
        self.f = y;
        self.invalidate();
        self
    }

    /// Multiplies the axis-aligned scale terms `a` and `d`.
    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.a *= sx;
        self.d *= sy;
        self.invalidate();
        self
    }

    /// Replaces the axis-aligned scale terms `a` and `d`.
    pub fn set_scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.a = sx;
        self.d = sy;
        self.invalidate();
        self
    }

    /// Overwrites the linear part with a pure rotation of `angle` radians.
    ///
    /// Any previous scale or skew held in `a, b, c, d` is lost. Use
    /// [`Transform::rotate_and_scale_around`] to combine both.
    pub fn set_rotation(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        self.a = cos;
        self.b = sin;
        self.c = -sin;
        self.d = cos;
        self.invalidate();
        self
    }

    /// Transform rotating by `angle` radians around `point`.
    #[must_use]
    pub fn rotate_around(angle: f64, point: [f64; 2]) -> Self {
        let mut rotation = Self::new();
        rotation.set_rotation(angle);
        conjugate(&rotation, point)
    }

    /// Transform scaling by `(sx, sy)` around `point`.
    #[must_use]
    pub fn scale_around([sx, sy]: [f64; 2], point: [f64; 2]) -> Self {
        let mut scale = Self::new();
        scale.set_scale(sx, sy);
        conjugate(&scale, point)
    }

    /// Transform scaling by `(sx, sy)` and then rotating by `angle`, both around `point`.
    #[must_use]
    pub fn rotate_and_scale_around(angle: f64, [sx, sy]: [f64; 2], point: [f64; 2]) -> Self {
        let mut rotation = Self::new();
        rotation.set_rotation(angle);
        let mut scale = Self::new();
        scale.set_scale(sx, sy);
        conjugate(&rotation.mul(&scale), point)
    }

    #[must_use]
    pub fn scale_factors(&self) -> [f64; 2] {
        [self.a, self.d]
    }

    #[must_use]
    pub fn translation(&self) -> [f64; 2] {
        [self.e, self.f]
    }

    #[must_use]
    pub fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Serializes to an SVG `transform` attribute value with fixed precision.
    #[must_use]
    pub fn to_attribute_string(&self, precision: usize) -> String {
        let values: Vec<String> = self
            .to_array()
            .iter()
            .map(|value| format!("{value:.precision$}"))
            .collect();
        format!("matrix({})", values.join(","))
    }

    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Matrix product `self · other`.
    ///
    /// Mapping a point through the result applies `other` first and `self`
    /// second: `self.mul(other).transform_point(p) == self.transform_point(other.transform_point(p))`.
    /// Neither operand is modified.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let [a1, b1, c1, d1, e1, f1] = self.to_array();
        let [a2, b2, c2, d2, e2, f2] = other.to_array();
        Self::from_array([
            a1 * a2 + c1 * b2,
            b1 * a2 + d1 * b2,
            a1 * c2 + c1 * d2,
            b1 * c2 + d1 * d2,
            a1 * e2 + c1 * f2 + e1,
            b1 * e2 + d1 * f2 + f1,
        ])
    }

    /// Composition that applies `self` first and `other` second.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        other.mul(self)
    }

    #[must_use]
    pub fn transform_point(&self, [x, y]: [f64; 2]) -> [f64; 2] {
        [
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        ]
    }

    /// Returns the inverse transform.
    ///
    /// Fails with [`ChartError::SingularTransform`] when the determinant is
    /// zero or not finite. The result is cached until the next mutation.
    pub fn inverse(&self) -> ChartResult<Self> {
        if let Some(values) = self.inverse_cache.get() {
            return Ok(self.inverse_from_cached(*values));
        }

        let determinant = self.determinant();
        if !determinant.is_finite() || determinant == 0.0 {
            return Err(ChartError::SingularTransform { determinant });
        }

        let Self {
            a, b, c, d, e, f, ..
        } = *self;
        let values = [
            d / determinant,
            -b / determinant,
            -c / determinant,
            a / determinant,
            (c * f - d * e) / determinant,
            (b * e - a * f) / determinant,
        ];
        if values.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::SingularTransform { determinant });
        }

        let _ = self.inverse_cache.set(values);
        Ok(self.inverse_from_cached(values))
    }

    /// Returns `true` when the memoized inverse is present.
    #[must_use]
    pub fn has_cached_inverse(&self) -> bool {
        self.inverse_cache.get().is_some()
    }

    fn inverse_from_cached(&self, values: [f64; 6]) -> Self {
        let inverse = Self::from_array(values);
        // The inverse of the inverse is this transform.
        let _ = inverse.inverse_cache.set(self.to_array());
        inverse
    }

    fn invalidate(&mut self) {
        self.inverse_cache.take();
    }
}

/// `translate(point) · core · translate(-point)`.
fn conjugate(core: &Transform, [px, py]: [f64; 2]) -> Transform {
    let mut pre = Transform::new();
    pre.translate(px, py);
    let mut post = Transform::new();
    post.translate(-px, -py);
    pre.mul(core).mul(&post)
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("c", &self.c)
            .field("d", &self.d)
            .field("e", &self.e)
            .field("f", &self.f)
            .finish()
    }
}

impl From<Transform> for [f64; 6] {
    fn from(transform: Transform) -> Self {
        transform.to_array()
    }
}

impl TryFrom<Vec<f64>> for Transform {
    type Error = ChartError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}
