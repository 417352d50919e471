use chart_engine::core::{ChartKind, DataValue};
use chart_engine::render::NullBackend;
use chart_engine::{BarChart, ChartRenderer};
use indexmap::indexmap;

fn sample_chart() -> BarChart {
    let series = indexmap! {
        "revenue".to_owned() => vec![DataValue::number(120.0), DataValue::number(95.0)],
    };
    let colors = indexmap! {
        "revenue".to_owned() => "#abcdef".to_owned(),
    };
    BarChart::new(series, colors)
}

#[test]
fn vertical_is_the_default_kind() {
    let config = sample_chart().to_config();
    assert_eq!(config.kind, ChartKind::Bar);
}

#[test]
fn horizontal_flag_switches_the_kind() {
    let config = sample_chart().with_horizontal(true).to_config();
    assert_eq!(config.kind, ChartKind::HorizontalBar);
}

#[test]
fn bar_datasets_carry_no_line_fields() {
    let config = sample_chart().to_config();
    let dataset = &config.data.datasets[0];
    assert_eq!(dataset.fill, None);
    assert_eq!(dataset.line_tension, None);
}

#[test]
fn labels_and_titles_pass_through() {
    let config = sample_chart()
        .with_title("Quarterly revenue")
        .with_axis_titles("Quarter", "USD")
        .with_x_labels(vec!["Q1".to_owned(), "Q2".to_owned()])
        .to_config();
    assert_eq!(
        config.data.labels,
        Some(vec!["Q1".to_owned(), "Q2".to_owned()])
    );
    assert_eq!(config.options.title.text.as_deref(), Some("Quarterly revenue"));
}

#[test]
fn renderer_records_resolved_kind() {
    let mut renderer = ChartRenderer::new(NullBackend::default());
    let chart = sample_chart().with_horizontal(true);
    renderer.render_bar(&chart).expect("render");
    assert_eq!(
        renderer.backend().created[0].kind,
        ChartKind::HorizontalBar
    );
}
