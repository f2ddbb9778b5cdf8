use chart_fit::ChartError;
use chart_fit::core::{
    BandFit, FitStrategy, FitTuning, Grid, IndexSeries, PairedSeries, SeriesSet, Viewport,
    fit_grid_saturation, fit_index_series, fit_paired_series,
};

#[test]
fn concrete_index_series_lands_on_band_edges() {
    let series = vec![IndexSeries::new(vec![4.0, 5.0, 1.0, 0.0, -80.0, 20.0, 43.0])];
    let fit = fit_index_series(&series, Viewport::new(400, 300), FitTuning::default())
        .expect("fit should succeed");

    assert_eq!(fit.y_range.min, -80.0);
    assert_eq!(fit.y_range.max, 43.0);
    let tymax = fit.transform.transform_point([0.0, 43.0])[1];
    let tymin = fit.transform.transform_point([0.0, -80.0])[1];
    assert!((tymax - 30.0).abs() <= 1e-9);
    assert!((tymin - 270.0).abs() <= 1e-9);

    let mid = fit.transform.transform_point([0.0, -18.5])[1];
    assert!((mid - 150.0).abs() <= 1e-9);
}

#[test]
fn multiple_index_series_share_global_range_and_longest_axis() {
    let series = vec![
        IndexSeries::new(vec![1.0, 2.0]),
        IndexSeries::new(vec![0.0, 3.0, 2.0, 1.0]),
    ];
    let fit = fit_index_series(&series, Viewport::new(100, 100), FitTuning::default())
        .expect("fit should succeed");
    assert_eq!(fit.x_range.max, 4.0);
    assert_eq!((fit.y_range.min, fit.y_range.max), (0.0, 3.0));
    assert!((fit.transform.transform_point([4.0, 0.0])[0] - 90.0).abs() <= 1e-9);
}

#[test]
fn custom_margin_ratio_moves_the_band() {
    let series = vec![IndexSeries::new(vec![0.0, 10.0])];
    let tuning = FitTuning {
        margin_ratio: 0.25,
        degenerate_span: 1.0,
    };
    let fit = fit_index_series(&series, Viewport::new(200, 200), tuning).expect("fit");
    assert!((fit.transform.transform_point([0.0, 10.0])[1] - 50.0).abs() <= 1e-9);
    assert!((fit.transform.transform_point([0.0, 0.0])[1] - 150.0).abs() <= 1e-9);
}

#[test]
fn paired_series_fit_uses_independent_axes() {
    let series = vec![PairedSeries::from_points(&[[100.0, -1.0], [300.0, 1.0]])];
    let fit = fit_paired_series(&series, Viewport::new(1000, 500), FitTuning::default())
        .expect("fit");

    let [x0, y0] = fit.transform.transform_point([100.0, -1.0]);
    let [x1, y1] = fit.transform.transform_point([300.0, 1.0]);
    assert!((x0 - 100.0).abs() <= 1e-9);
    assert!((x1 - 900.0).abs() <= 1e-9);
    assert!((y0 - 450.0).abs() <= 1e-9);
    assert!((y1 - 50.0).abs() <= 1e-9);
}

#[test]
fn flat_paired_x_axis_is_centered() {
    let series = vec![PairedSeries::new(vec![5.0, 5.0], vec![1.0, 2.0]).expect("pair")];
    let fit = fit_paired_series(&series, Viewport::new(300, 300), FitTuning::default())
        .expect("fit");
    let [x, _] = fit.transform.transform_point([5.0, 1.0]);
    assert!((x - 150.0).abs() <= 1e-9);
}

#[test]
fn non_finite_values_are_rejected() {
    let series = vec![IndexSeries::new(vec![1.0, f64::INFINITY])];
    let err = fit_index_series(&series, Viewport::new(100, 100), FitTuning::default())
        .expect_err("infinite value");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn zero_viewport_is_rejected() {
    let series = vec![IndexSeries::new(vec![1.0, 2.0])];
    let err = fit_index_series(&series, Viewport::new(0, 100), FitTuning::default())
        .expect_err("zero width");
    assert_eq!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 100
        }
    );
}

#[test]
fn grid_saturation_hits_both_ends_and_interior() {
    let grid = Grid::new(vec![vec![-4.0, 0.0], vec![2.0, 12.0, 8.0]]);
    let scale = fit_grid_saturation(&grid, FitTuning::default()).expect("scale");
    assert!(scale.saturation(-4.0).abs() <= 1e-12);
    assert!((scale.saturation(12.0) - 1.0).abs() <= 1e-12);
    for value in [0.0, 2.0, 8.0] {
        let saturation = scale.saturation(value);
        assert!(saturation > 0.0 && saturation < 1.0);
    }
}

#[test]
fn band_fit_strategy_dispatches_on_series_set() {
    let strategy = BandFit::default();
    let index = vec![IndexSeries::new(vec![1.0, 3.0])];
    let paired = vec![PairedSeries::new(vec![0.0, 1.0], vec![1.0, 3.0]).expect("pair")];
    let viewport = Viewport::new(100, 100);

    let by_index = strategy
        .refit(SeriesSet::Index(&index), viewport)
        .expect("index fit");
    let by_pair = strategy
        .refit(SeriesSet::Paired(&paired), viewport)
        .expect("paired fit");
    assert_eq!(by_index.y_range, by_pair.y_range);
    assert!(strategy.refit_grid(&Grid::new(vec![Vec::new()])).is_err());
}
