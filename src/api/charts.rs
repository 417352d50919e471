use indexmap::IndexMap;

use crate::core::{
    ChartConfig, ChartKind, ColorMap, Dataset, SeriesMap, TooltipCallbacks, TooltipLabelMode,
    TooltipOptions,
};

use super::{ConfigureToggles, configure};

/// Curve tension applied to line datasets unless straight lines are requested.
pub const DEFAULT_LINE_TENSION: f64 = 0.4;

const GAUGE_CUTOUT_PERCENTAGE: f64 = 70.0;

/// Line chart request over named series.
#[derive(Debug, Clone, Default)]
pub struct LineChart {
    title: Option<String>,
    x_title: Option<String>,
    y_title: Option<String>,
    x_labels: Option<Vec<String>>,
    series: SeriesMap,
    colors: ColorMap,
    fill: bool,
    straight_lines: bool,
}

impl LineChart {
    #[must_use]
    pub fn new(series: SeriesMap, colors: ColorMap) -> Self {
        Self {
            series,
            colors,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_owned());
        self
    }

    #[must_use]
    pub fn with_axis_titles(mut self, x_title: &str, y_title: &str) -> Self {
        self.x_title = Some(x_title.to_owned());
        self.y_title = Some(y_title.to_owned());
        self
    }

    #[must_use]
    pub fn with_x_labels(mut self, labels: Vec<String>) -> Self {
        self.x_labels = Some(labels);
        self
    }

    /// Fills the area under each line.
    #[must_use]
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    /// Draws straight segments (tension 0) instead of curved ones.
    #[must_use]
    pub fn with_straight_lines(mut self, straight_lines: bool) -> Self {
        self.straight_lines = straight_lines;
        self
    }

    /// Pure config assembly; no backend interaction.
    #[must_use]
    pub fn to_config(&self) -> ChartConfig {
        let datasets =
            line_datasets(&self.series, &self.colors, self.fill, self.straight_lines);
        configure(
            ChartKind::Line,
            self.title.as_deref(),
            self.x_title.as_deref(),
            self.y_title.as_deref(),
            self.x_labels.clone(),
            datasets,
            ConfigureToggles::default(),
        )
    }
}

/// Line chart whose x axis is a time scale.
///
/// Carries no axis labels: positions come from the time values in the data.
#[derive(Debug, Clone, Default)]
pub struct TimeSeriesChart {
    title: Option<String>,
    x_title: Option<String>,
    y_title: Option<String>,
    series: SeriesMap,
    colors: ColorMap,
    fill: bool,
    straight_lines: bool,
}

impl TimeSeriesChart {
    #[must_use]
    pub fn new(series: SeriesMap, colors: ColorMap) -> Self {
        Self {
            series,
            colors,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_owned());
        self
    }

    #[must_use]
    pub fn with_axis_titles(mut self, x_title: &str, y_title: &str) -> Self {
        self.x_title = Some(x_title.to_owned());
        self.y_title = Some(y_title.to_owned());
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    #[must_use]
    pub fn with_straight_lines(mut self, straight_lines: bool) -> Self {
        self.straight_lines = straight_lines;
        self
    }

    /// Pure config assembly; always forces time-series axis mode.
    #[must_use]
    pub fn to_config(&self) -> ChartConfig {
        let datasets =
            line_datasets(&self.series, &self.colors, self.fill, self.straight_lines);
        configure(
            ChartKind::Line,
            self.title.as_deref(),
            self.x_title.as_deref(),
            self.y_title.as_deref(),
            None,
            datasets,
            ConfigureToggles::default().with_time_series(true),
        )
    }
}

/// Vertical or horizontal bar chart request.
#[derive(Debug, Clone, Default)]
pub struct BarChart {
    horizontal: bool,
    title: Option<String>,
    x_title: Option<String>,
    y_title: Option<String>,
    x_labels: Option<Vec<String>>,
    series: SeriesMap,
    colors: ColorMap,
}

impl BarChart {
    #[must_use]
    pub fn new(series: SeriesMap, colors: ColorMap) -> Self {
        Self {
            series,
            colors,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_owned());
        self
    }

    #[must_use]
    pub fn with_axis_titles(mut self, x_title: &str, y_title: &str) -> Self {
        self.x_title = Some(x_title.to_owned());
        self.y_title = Some(y_title.to_owned());
        self
    }

    #[must_use]
    pub fn with_x_labels(mut self, labels: Vec<String>) -> Self {
        self.x_labels = Some(labels);
        self
    }

    #[must_use]
    pub fn horizontal(&self) -> bool {
        self.horizontal
    }

    /// Pure config assembly; kind follows the horizontal flag.
    #[must_use]
    pub fn to_config(&self) -> ChartConfig {
        let kind = if self.horizontal {
            ChartKind::HorizontalBar
        } else {
            ChartKind::Bar
        };
        let datasets = bar_datasets(&self.series, &self.colors);
        configure(
            kind,
            self.title.as_deref(),
            self.x_title.as_deref(),
            self.y_title.as_deref(),
            self.x_labels.clone(),
            datasets,
            ConfigureToggles::default(),
        )
    }
}

/// Half-circle gauge request: one percentage value per series.
///
/// Legend, grid lines and both axes are forced off; the doughnut is cut to a
/// half circle with a 70% cutout. `disabled_colors` paints the complement
/// slice of each series.
#[derive(Debug, Clone, Default)]
pub struct GaugeChart {
    title: Option<String>,
    series: IndexMap<String, f64>,
    colors: ColorMap,
    disabled_colors: ColorMap,
}

impl GaugeChart {
    #[must_use]
    pub fn new(series: IndexMap<String, f64>, colors: ColorMap, disabled_colors: ColorMap) -> Self {
        Self {
            series,
            colors,
            disabled_colors,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_owned());
        self
    }

    /// Pure config assembly with the half-circle gauge overrides applied.
    #[must_use]
    pub fn to_config(&self) -> ChartConfig {
        let datasets = self
            .series
            .iter()
            .map(|(name, value)| {
                Dataset::gauge(
                    name.clone(),
                    *value,
                    self.colors.get(name).cloned(),
                    self.disabled_colors.get(name).cloned(),
                )
            })
            .collect();

        let toggles = ConfigureToggles::default()
            .with_show_legend(false)
            .with_show_grid_lines(false)
            .with_show_x_axis(false)
            .with_show_y_axis(false);

        let mut config = configure(
            ChartKind::Doughnut,
            self.title.as_deref(),
            None,
            None,
            None,
            datasets,
            toggles,
        );

        config.options.circumference = Some(std::f64::consts::PI);
        config.options.rotation = Some(std::f64::consts::PI);
        config.options.cutout_percentage = Some(GAUGE_CUTOUT_PERCENTAGE);
        config.options.tooltips = Some(TooltipOptions {
            callbacks: TooltipCallbacks {
                label: TooltipLabelMode::GaugePercent,
            },
        });
        config
    }
}

/// Tooltip text for a gauge slice.
///
/// Index 0 is the value slice and carries the series label; any other index
/// is the complement slice and shows only its percentage.
#[must_use]
pub fn gauge_tooltip_label(label: &str, value: f64, index: usize) -> String {
    if index == 0 {
        format!("{label}: {value}%")
    } else {
        format!("{}%", 100.0 - value)
    }
}

fn line_datasets(
    series: &SeriesMap,
    colors: &ColorMap,
    fill: bool,
    straight_lines: bool,
) -> Vec<Dataset> {
    let line_tension = if straight_lines {
        0.0
    } else {
        DEFAULT_LINE_TENSION
    };
    series
        .iter()
        .map(|(name, values)| {
            Dataset::line(
                name.clone(),
                values.clone(),
                colors.get(name).cloned(),
                fill,
                line_tension,
            )
        })
        .collect()
}

fn bar_datasets(series: &SeriesMap, colors: &ColorMap) -> Vec<Dataset> {
    series
        .iter()
        .map(|(name, values)| {
            Dataset::bar(name.clone(), values.clone(), colors.get(name).cloned())
        })
        .collect()
}
