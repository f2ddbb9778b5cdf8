use chart_fit::api::PlotConfig;
use chart_fit::color::HsvColorScale;
use chart_fit::core::{CellComparison, FitTuning, Viewport};

#[test]
fn config_json_round_trip() {
    let config = PlotConfig::new(Viewport::new(800, 600))
        .with_fit_tuning(FitTuning {
            margin_ratio: 0.05,
            degenerate_span: 2.0,
        })
        .with_cell_margin(4.0)
        .with_cell_comparison(CellComparison::Tolerance(0.01))
        .with_color_scale(HsvColorScale::new(200.0, 0.8));

    let json = config.to_json_pretty().expect("serialize");
    let parsed = PlotConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn minimal_json_fills_defaults() {
    let parsed = PlotConfig::from_json_str(r#"{"viewport":{"width":320,"height":240}}"#)
        .expect("parse minimal config");
    assert_eq!(parsed, PlotConfig::new(Viewport::new(320, 240)));
    assert_eq!(parsed.fit_tuning.margin_ratio, 0.1);
    assert_eq!(parsed.group_options.cell_margin_px, 8.0);
    assert!(parsed.group_options.axis_display);
}

#[test]
fn invalid_values_are_rejected_on_load() {
    assert!(PlotConfig::from_json_str(r#"{"viewport":{"width":0,"height":240}}"#).is_err());
    assert!(
        PlotConfig::from_json_str(
            r#"{"viewport":{"width":10,"height":10},"fit_tuning":{"margin_ratio":0.7,"degenerate_span":1.0}}"#
        )
        .is_err()
    );
    assert!(PlotConfig::from_json_str("not json").is_err());
}
