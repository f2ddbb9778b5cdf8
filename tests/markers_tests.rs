use chart_fit::core::{DataGroup, DataGroupKind, DataGroupOptions, FitTuning, PlotStyle, Viewport};
use chart_fit::extensions::{EXTREME_LINE_STYLE, ZERO_LINE_STYLE};
use chart_fit::render::Primitive;

#[test]
fn fitted_group_labels_extremes_at_the_right_edge() {
    let mut group = DataGroup::with_options(
        DataGroupKind::OneD,
        Viewport::new(400, 300),
        DataGroupOptions::default().with_marker_display(false),
        FitTuning::default(),
    )
    .expect("group");
    group
        .add(vec![4.0, 5.0, 1.0, 0.0, -80.0, 20.0, 43.0], PlotStyle::line())
        .expect("add");

    let labels: Vec<_> = group
        .primitives()
        .iter()
        .filter_map(|primitive| match primitive {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
        .collect();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].text, "43");
    assert!((labels[0].x - 380.0).abs() <= 1e-9);
    assert!((labels[0].y - 25.0).abs() <= 1e-9);
    assert_eq!(labels[1].text, "-80");
    assert!((labels[1].x - 370.0).abs() <= 1e-9);
    assert!((labels[1].y - 265.0).abs() <= 1e-9);
}

#[test]
fn reference_lines_use_dashed_styles() {
    let mut group = DataGroup::with_options(
        DataGroupKind::OneD,
        Viewport::new(400, 300),
        DataGroupOptions::default().with_axis_display(false),
        FitTuning::default(),
    )
    .expect("group");
    group.add(vec![-5.0, 15.0], PlotStyle::line()).expect("add");

    let lines: Vec<_> = group
        .primitives()
        .iter()
        .filter_map(|primitive| match primitive {
            Primitive::Line(line) => Some(line),
            _ => None,
        })
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].style, EXTREME_LINE_STYLE);
    assert_eq!(lines[1].style, EXTREME_LINE_STYLE);
    assert_eq!(lines[2].style, ZERO_LINE_STYLE);
    assert!((lines[0].y1 - 30.0).abs() <= 1e-9);
    assert!((lines[1].y1 - 270.0).abs() <= 1e-9);
    assert!((lines[2].y1 - 210.0).abs() <= 1e-9);
    assert_eq!((lines[2].x1, lines[2].x2), (0.0, 400.0));
}

#[test]
fn grid_groups_carry_no_axis_annotations() {
    let mut group = DataGroup::grid(Viewport::new(100, 100)).expect("group");
    group
        .from_2d_data(vec![vec![-1.0, 1.0]], PlotStyle::grid())
        .expect("grid");
    assert!(group
        .primitives()
        .iter()
        .all(|primitive| matches!(primitive, Primitive::GridCell(_))));
}
