use crate::core::Transform;
use crate::render::{CirclePrimitive, PolylinePrimitive};

/// Projects data-space points into one polyline.
///
/// Deterministic and side-effect free so rendering and tests consume the
/// exact same geometry.
pub fn project_polyline<I>(points: I, transform: &Transform, style: &str) -> PolylinePrimitive
where
    I: IntoIterator<Item = [f64; 2]>,
{
    let mapped = points
        .into_iter()
        .map(|point| transform.transform_point(point))
        .collect();
    PolylinePrimitive::new(mapped, style)
}

/// Projects data-space points into one circle per point.
pub fn project_scatter<I>(
    points: I,
    transform: &Transform,
    radius: f64,
    style: &str,
) -> Vec<CirclePrimitive>
where
    I: IntoIterator<Item = [f64; 2]>,
{
    points
        .into_iter()
        .map(|point| {
            let [cx, cy] = transform.transform_point(point);
            CirclePrimitive::new(cx, cy, radius, style)
        })
        .collect()
}
