use variant_scatter::PlotError;
use variant_scatter::animation::{Easing, TransitionConfig};
use variant_scatter::api::PlotConfig;
use variant_scatter::core::{Margins, PlotExtent, PlotLayout, Viewport};
use variant_scatter::render::Color;

#[test]
fn responsive_layout_subtracts_margins_from_container() {
    let layout = PlotLayout::responsive();
    let extent = layout
        .plot_extent(Viewport::new(800, 500))
        .expect("extent");

    assert_eq!(extent, PlotExtent::new(710.0, 440.0));
    assert_eq!(layout.margins(), Margins::new(20.0, 30.0, 40.0, 60.0));
    assert_eq!(
        layout.outer_size(Viewport::new(800, 500)).expect("outer"),
        (800.0, 500.0)
    );
}

#[test]
fn fixed_layout_ignores_container_size() {
    let layout = PlotLayout::fixed();
    let small = layout.plot_extent(Viewport::new(10, 10)).expect("extent");
    let large = layout.plot_extent(Viewport::new(4000, 3000)).expect("extent");

    assert_eq!(small, PlotExtent::new(460.0, 400.0));
    assert_eq!(small, large);
    assert_eq!(layout.margins(), Margins::new(10.0, 30.0, 30.0, 60.0));
    assert_eq!(
        layout.outer_size(Viewport::new(1, 1)).expect("outer"),
        (550.0, 440.0)
    );
}

#[test]
fn container_smaller_than_margins_is_rejected() {
    let result = PlotLayout::responsive().plot_extent(Viewport::new(90, 200));
    assert!(matches!(
        result,
        Err(PlotError::InvalidViewport { width, .. }) if width == 0.0
    ));
}

#[test]
fn extent_contains_and_clamps_inclusively() {
    let extent = PlotExtent::new(100.0, 50.0);
    assert!(extent.contains(0.0, 0.0));
    assert!(extent.contains(100.0, 50.0));
    assert!(!extent.contains(100.5, 10.0));
    assert_eq!(extent.clamp(-4.0, 80.0), (0.0, 50.0));
}

#[test]
fn config_defaults_match_plot_constants() {
    let config = PlotConfig::new(Viewport::new(800, 500), -5.0, 5.0);

    assert_eq!((config.y_min, config.y_max), (0.0, 21.0));
    assert_eq!(config.layout, PlotLayout::responsive());
    assert_eq!(config.transition.duration_ms, 750);
    assert_eq!(config.transition.point_radius_px, 4.0);
    assert_eq!(config.transition.easing, Easing::CubicInOut);
    assert_eq!(config.neutral_color, Color::WHITE);
}

#[test]
fn config_json_round_trip() {
    let config = PlotConfig::new(Viewport::new(640, 480), -3.0, 3.0)
        .with_y_domain(0.0, 10.0)
        .with_layout(PlotLayout::fixed())
        .with_transition(TransitionConfig {
            duration_ms: 200,
            point_radius_px: 6.0,
            easing: Easing::Linear,
        });

    let json = config.to_json_pretty().expect("serialize");
    let parsed = PlotConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn config_json_fills_defaults() {
    let parsed = PlotConfig::from_json_str(
        r#"{"container":{"width":800,"height":500},"x_min":-2.0,"x_max":2.0}"#,
    )
    .expect("parse minimal config");

    assert_eq!(parsed, PlotConfig::new(Viewport::new(800, 500), -2.0, 2.0));
}

#[test]
fn malformed_config_json_is_invalid_data() {
    let result = PlotConfig::from_json_str("{\"container\":");
    assert!(matches!(result, Err(PlotError::InvalidData(_))));
}

#[test]
fn transition_progress_is_eased_and_saturates() {
    let transition = TransitionConfig {
        duration_ms: 1000,
        point_radius_px: 4.0,
        easing: Easing::Linear,
    };
    let start = std::time::Duration::from_millis(100);

    assert_eq!(transition.progress(start, start), 0.0);
    assert_eq!(
        transition.progress(start, std::time::Duration::from_millis(600)),
        0.5
    );
    assert_eq!(
        transition.progress(start, std::time::Duration::from_secs(5)),
        1.0
    );

    let instant = TransitionConfig {
        duration_ms: 0,
        ..transition
    };
    assert_eq!(instant.progress(start, start), 1.0);
}

#[test]
fn non_positive_radius_is_rejected() {
    let transition = TransitionConfig {
        point_radius_px: 0.0,
        ..TransitionConfig::default()
    };
    assert!(transition.validate().is_err());
}
