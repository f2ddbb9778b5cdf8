use chart_fit::api::{DataGroupId, Plot, PlotConfig};
use chart_fit::core::{DataGroupKind, PlotStyle, Viewport};
use chart_fit::render::{NullRenderer, Primitive};

#[test]
fn plot_smoke_flow() {
    let config = PlotConfig::new(Viewport::new(400, 300));
    let mut plot = Plot::new(NullRenderer::default(), config).expect("plot init");

    let line = plot.create_group(DataGroupKind::OneD).expect("line group");
    let heat = plot.create_group(DataGroupKind::Grid).expect("grid group");
    assert_eq!(plot.group_ids().collect::<Vec<_>>(), vec![line, heat]);

    plot.require_group_mut(line)
        .expect("line group exists")
        .add(vec![4.0, 5.0, 1.0, 0.0, -80.0, 20.0, 43.0], PlotStyle::line())
        .expect("add series");
    plot.require_group_mut(heat)
        .expect("grid group exists")
        .from_2d_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]], PlotStyle::grid())
        .expect("add grid");

    plot.render().expect("render should succeed");
    let renderer = plot.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_grid_cell_count, 4);

    // polyline + 2 labels + 3 reference lines, then 4 cells.
    assert_eq!(renderer.last_primitive_count, 10);
    let frame = renderer.last_frame.as_ref().expect("frame recorded");
    assert!(matches!(frame.primitives[0], Primitive::Polyline(_)));
    assert!(matches!(frame.primitives[9], Primitive::GridCell(_)));
}

#[test]
fn removing_group_keeps_remaining_order() {
    let mut plot = Plot::new(NullRenderer::default(), PlotConfig::default()).expect("plot init");
    let first = plot.create_group(DataGroupKind::OneD).expect("first");
    let second = plot.create_group(DataGroupKind::PairedXY).expect("second");
    let third = plot.create_group(DataGroupKind::Grid).expect("third");

    assert!(plot.remove_group(second).is_some());
    assert!(plot.remove_group(second).is_none());
    assert_eq!(plot.group_ids().collect::<Vec<_>>(), vec![first, third]);
    assert_eq!(plot.group_count(), 2);
    assert!(plot.require_group_mut(DataGroupId::new(99)).is_err());
}

#[test]
fn empty_plot_renders_empty_frame() {
    let mut plot = Plot::new(NullRenderer::default(), PlotConfig::default()).expect("plot init");
    plot.create_group(DataGroupKind::OneD).expect("group");
    assert!(plot.build_frame().is_empty());
    plot.render().expect("render");
    assert_eq!(plot.into_renderer().last_primitive_count, 0);
}

#[test]
fn foreign_viewport_group_is_rejected() {
    let mut plot = Plot::new(NullRenderer::default(), PlotConfig::new(Viewport::new(400, 300)))
        .expect("plot init");
    let group = chart_fit::core::DataGroup::one_d(Viewport::new(10, 10)).expect("group");
    assert!(plot.insert_group(group).is_err());
}
