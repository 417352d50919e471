use chart_engine::core::{AxisType, ChartKind, DataValue};
use chart_engine::render::NullBackend;
use chart_engine::{ChartRenderer, TimeSeriesChart};
use indexmap::indexmap;

fn sample_chart() -> TimeSeriesChart {
    let series = indexmap! {
        "load".to_owned() => vec![
            DataValue::time_point(1_700_000_000_000.0, 0.4),
            DataValue::time_point(1_700_000_060_000.0, 0.7),
        ],
    };
    let colors = indexmap! {
        "load".to_owned() => "#336699".to_owned(),
    };
    TimeSeriesChart::new(series, colors)
}

#[test]
fn x_axis_is_always_a_time_scale() {
    let config = sample_chart().to_config();
    assert_eq!(config.kind, ChartKind::Line);
    assert_eq!(
        config.options.scales.x_axes[0].axis_type,
        Some(AxisType::Time)
    );
    assert!(config.options.scales.x_axes[0].time.is_some());
}

#[test]
fn labels_are_never_attached() {
    let config = sample_chart().with_title("CPU load").to_config();
    assert_eq!(config.data.labels, None);
}

#[test]
fn axis_display_formats_omit_datetime() {
    let config = sample_chart().to_config();
    let time = config.options.scales.x_axes[0]
        .time
        .as_ref()
        .expect("time options");
    assert_eq!(time.display_formats.datetime, None);
    assert_eq!(time.display_formats.minute, "h:mm a");
    assert_eq!(time.display_formats.quarter, "[Q]Q YYYY");
}

#[test]
fn time_points_survive_dataset_assembly() {
    let config = sample_chart().to_config();
    assert_eq!(
        config.data.datasets[0].data[0],
        DataValue::time_point(1_700_000_000_000.0, 0.4)
    );
}

#[test]
fn straight_lines_flag_matches_line_chart_behavior() {
    let config = sample_chart().with_straight_lines(true).to_config();
    assert_eq!(config.data.datasets[0].line_tension, Some(0.0));
}

#[test]
fn renderer_records_time_series_config() {
    let mut renderer = ChartRenderer::new(NullBackend::default());
    let chart = sample_chart();
    let handle = renderer.render_time_series(&chart).expect("render");
    assert_eq!(handle.raw(), 1);
    assert_eq!(renderer.backend().created[0], chart.to_config());
}
