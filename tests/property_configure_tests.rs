use chart_engine::api::DEFAULT_LINE_TENSION;
use chart_engine::core::{ChartKind, DataValue, GridLineOptions};
use chart_engine::{ConfigureToggles, GaugeChart, LineChart, configure};
use indexmap::indexmap;
use proptest::prelude::*;

proptest! {
    #[test]
    fn legend_toggle_always_passes_through(show in any::<bool>()) {
        let config = configure(
            ChartKind::Line,
            None,
            None,
            None,
            None,
            Vec::new(),
            ConfigureToggles::default().with_show_legend(show),
        );
        prop_assert_eq!(config.options.legend.display, Some(show));
    }

    #[test]
    fn grid_toggle_always_hits_both_axes(show in any::<bool>()) {
        let config = configure(
            ChartKind::Bar,
            None,
            None,
            None,
            None,
            Vec::new(),
            ConfigureToggles::default().with_show_grid_lines(show),
        );
        let expected = Some(GridLineOptions { display: show });
        prop_assert_eq!(config.options.scales.x_axes[0].grid_lines, expected);
        prop_assert_eq!(config.options.scales.y_axes[0].grid_lines, expected);
    }

    #[test]
    fn title_display_tracks_presence(title in proptest::option::of("[a-zA-Z ]{1,24}")) {
        let config = configure(
            ChartKind::Line,
            title.as_deref(),
            None,
            None,
            None,
            Vec::new(),
            ConfigureToggles::default(),
        );
        prop_assert_eq!(config.options.title.display, title.is_some());
        prop_assert_eq!(config.options.title.text, title);
    }

    #[test]
    fn line_tension_follows_straightness(straight in any::<bool>(), y in -1e6f64..1e6) {
        let series = indexmap! { "s".to_owned() => vec![DataValue::number(y)] };
        let config = LineChart::new(series, indexmap! {})
            .with_straight_lines(straight)
            .to_config();
        let expected = if straight { 0.0 } else { DEFAULT_LINE_TENSION };
        prop_assert_eq!(config.data.datasets[0].line_tension, Some(expected));
    }

    #[test]
    fn gauge_slices_always_sum_to_hundred(value in 0.0f64..=100.0) {
        let series = indexmap! { "g".to_owned() => value };
        let config = GaugeChart::new(series, indexmap! {}, indexmap! {}).to_config();
        let data = &config.data.datasets[0].data;
        prop_assert_eq!(data.len(), 2);
        match (data[0], data[1]) {
            (DataValue::Number(a), DataValue::Number(b)) => {
                prop_assert_eq!(a, value);
                prop_assert!((a + b - 100.0).abs() < 1e-9);
            }
            _ => prop_assert!(false, "gauge data must be plain numbers"),
        }
    }
}
