use crate::core::Transform;
use crate::render::RectPrimitive;

/// Projects data-space points into bars spanning from `y = 0` to the value.
///
/// Each bar is `bar_width_px` wide, centred on the mapped x coordinate. The
/// rect top is whichever of the value or the baseline sits higher on screen.
pub fn project_bars<I>(
    points: I,
    transform: &Transform,
    bar_width_px: f64,
    style: &str,
) -> Vec<RectPrimitive>
where
    I: IntoIterator<Item = [f64; 2]>,
{
    let half = bar_width_px * 0.5;
    points
        .into_iter()
        .map(|[x, y]| {
            let [x_center, y_value] = transform.transform_point([x, y]);
            let [_, y_baseline] = transform.transform_point([x, 0.0]);
            RectPrimitive::new(
                x_center - half,
                y_value.min(y_baseline),
                bar_width_px,
                (y_baseline - y_value).abs(),
                style,
            )
        })
        .collect()
}
