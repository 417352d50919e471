use chart_engine::core::{AxisType, ChartKind, DataValue, Dataset, GridLineOptions};
use chart_engine::{ConfigureToggles, configure};

fn sample_dataset() -> Dataset {
    Dataset::bar(
        "A".to_owned(),
        vec![DataValue::number(1.0), DataValue::number(2.0)],
        None,
    )
}

#[test]
fn title_display_follows_title_presence() {
    let with_title = configure(
        ChartKind::Line,
        Some("Sales"),
        None,
        None,
        None,
        vec![sample_dataset()],
        ConfigureToggles::default(),
    );
    assert!(with_title.options.title.display);
    assert_eq!(with_title.options.title.text.as_deref(), Some("Sales"));

    let without_title = configure(
        ChartKind::Line,
        None,
        None,
        None,
        None,
        vec![sample_dataset()],
        ConfigureToggles::default(),
    );
    assert!(!without_title.options.title.display);
    assert_eq!(without_title.options.title.text, None);
}

#[test]
fn legend_display_left_unset_without_toggle() {
    let config = configure(
        ChartKind::Line,
        None,
        None,
        None,
        None,
        vec![sample_dataset()],
        ConfigureToggles::default(),
    );
    assert_eq!(config.options.legend.display, None);
}

#[test]
fn legend_toggle_overrides_default() {
    for show in [true, false] {
        let config = configure(
            ChartKind::Line,
            None,
            None,
            None,
            None,
            vec![sample_dataset()],
            ConfigureToggles::default().with_show_legend(show),
        );
        assert_eq!(config.options.legend.display, Some(show));
    }
}

#[test]
fn grid_line_toggle_applies_to_both_axes() {
    for show in [true, false] {
        let config = configure(
            ChartKind::Line,
            None,
            None,
            None,
            None,
            vec![sample_dataset()],
            ConfigureToggles::default().with_show_grid_lines(show),
        );
        assert_eq!(
            config.options.scales.x_axes[0].grid_lines,
            Some(GridLineOptions { display: show })
        );
        assert_eq!(
            config.options.scales.y_axes[0].grid_lines,
            Some(GridLineOptions { display: show })
        );
    }
}

#[test]
fn axis_visibility_toggles_are_independent() {
    let config = configure(
        ChartKind::Line,
        None,
        None,
        None,
        None,
        vec![sample_dataset()],
        ConfigureToggles::default()
            .with_show_x_axis(false)
            .with_show_y_axis(true),
    );
    assert!(!config.options.scales.x_axes[0].display);
    assert!(config.options.scales.y_axes[0].display);
}

#[test]
fn axes_default_to_displayed_with_titled_scale_labels() {
    let config = configure(
        ChartKind::Line,
        None,
        Some("Month"),
        None,
        None,
        vec![sample_dataset()],
        ConfigureToggles::default(),
    );
    let x_axis = &config.options.scales.x_axes[0];
    let y_axis = &config.options.scales.y_axes[0];
    assert!(x_axis.display);
    assert!(y_axis.display);
    assert!(x_axis.scale_label.display);
    assert_eq!(x_axis.scale_label.label_string.as_deref(), Some("Month"));
    assert!(!y_axis.scale_label.display);
    assert_eq!(y_axis.scale_label.label_string, None);
}

#[test]
fn exactly_one_axis_per_dimension() {
    let config = configure(
        ChartKind::Bar,
        None,
        None,
        None,
        None,
        vec![sample_dataset()],
        ConfigureToggles::default(),
    );
    assert_eq!(config.options.scales.x_axes.len(), 1);
    assert_eq!(config.options.scales.y_axes.len(), 1);
}

#[test]
fn time_series_toggle_marks_x_axis_as_time_scale() {
    let config = configure(
        ChartKind::Line,
        None,
        None,
        None,
        None,
        vec![sample_dataset()],
        ConfigureToggles::default().with_time_series(true),
    );
    let x_axis = &config.options.scales.x_axes[0];
    assert_eq!(x_axis.axis_type, Some(AxisType::Time));
    let time = x_axis.time.as_ref().expect("time options");
    // Axis view of the shared table: no datetime entry.
    assert_eq!(time.display_formats.datetime, None);
    assert_eq!(time.display_formats.month, "MMM YYYY");

    let y_axis = &config.options.scales.y_axes[0];
    assert_eq!(y_axis.axis_type, None);
    assert_eq!(y_axis.time, None);
}

#[test]
fn assembled_bar_config_matches_expected_shape() {
    let config = configure(
        ChartKind::Bar,
        Some("Sales"),
        Some("Month"),
        Some("USD"),
        Some(vec!["Jan".to_owned(), "Feb".to_owned()]),
        vec![sample_dataset()],
        ConfigureToggles::default()
            .with_show_legend(true)
            .with_show_grid_lines(false)
            .with_show_x_axis(true)
            .with_show_y_axis(true),
    );

    assert_eq!(config.kind, ChartKind::Bar);
    assert!(config.options.responsive);
    assert_eq!(
        config.data.labels,
        Some(vec!["Jan".to_owned(), "Feb".to_owned()])
    );
    assert_eq!(config.options.legend.display, Some(true));
    assert_eq!(
        config.options.scales.x_axes[0].grid_lines,
        Some(GridLineOptions { display: false })
    );
    assert_eq!(
        config.options.scales.y_axes[0].grid_lines,
        Some(GridLineOptions { display: false })
    );
    assert!(config.options.scales.x_axes[0].display);
    assert!(config.options.scales.y_axes[0].display);
}

#[test]
fn custom_kind_passes_through_unvalidated() {
    let config = configure(
        ChartKind::from("radar"),
        None,
        None,
        None,
        None,
        Vec::new(),
        ConfigureToggles::default(),
    );
    assert_eq!(config.kind.as_str(), "radar");
    assert!(config.data.datasets.is_empty());
}
