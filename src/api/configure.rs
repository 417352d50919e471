use crate::core::{
    AxisOptions, AxisType, ChartConfig, ChartData, ChartKind, ChartOptions, Dataset,
    GridLineOptions, LegendOptions, ScalesOptions, TimeAxisOptions, TitleOptions,
};
use crate::time::DisplayFormats;

/// Display toggles for [`configure`].
///
/// `None` leaves the charting library's default untouched; `Some` overrides
/// it in the assembled record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigureToggles {
    pub show_legend: Option<bool>,
    pub show_grid_lines: Option<bool>,
    pub show_x_axis: Option<bool>,
    pub show_y_axis: Option<bool>,
    pub time_series: bool,
}

impl ConfigureToggles {
    #[must_use]
    pub fn with_show_legend(mut self, show: bool) -> Self {
        self.show_legend = Some(show);
        self
    }

    #[must_use]
    pub fn with_show_grid_lines(mut self, show: bool) -> Self {
        self.show_grid_lines = Some(show);
        self
    }

    #[must_use]
    pub fn with_show_x_axis(mut self, show: bool) -> Self {
        self.show_x_axis = Some(show);
        self
    }

    #[must_use]
    pub fn with_show_y_axis(mut self, show: bool) -> Self {
        self.show_y_axis = Some(show);
        self
    }

    #[must_use]
    pub fn with_time_series(mut self, time_series: bool) -> Self {
        self.time_series = time_series;
        self
    }
}

/// Assembles a chart configuration record from primitive parts.
///
/// Pure construction, no validation: missing colors and unrecognized kinds
/// pass through for the charting backend to judge. Title display is gated on
/// the title being present; each toggle is applied only when specified; a
/// truthy `time_series` marks the x axis as a time scale and embeds the
/// shared display-format table.
#[must_use]
pub fn configure(
    kind: ChartKind,
    title: Option<&str>,
    x_title: Option<&str>,
    y_title: Option<&str>,
    x_labels: Option<Vec<String>>,
    datasets: Vec<Dataset>,
    toggles: ConfigureToggles,
) -> ChartConfig {
    let mut x_axis = AxisOptions::titled(x_title);
    let mut y_axis = AxisOptions::titled(y_title);

    if let Some(show) = toggles.show_grid_lines {
        x_axis.grid_lines = Some(GridLineOptions { display: show });
        y_axis.grid_lines = Some(GridLineOptions { display: show });
    }

    if let Some(show) = toggles.show_x_axis {
        x_axis.display = show;
    }
    if let Some(show) = toggles.show_y_axis {
        y_axis.display = show;
    }

    if toggles.time_series {
        x_axis.axis_type = Some(AxisType::Time);
        x_axis.time = Some(TimeAxisOptions {
            display_formats: DisplayFormats::default().axis(),
        });
    }

    ChartConfig {
        kind,
        data: ChartData {
            datasets,
            labels: x_labels,
        },
        options: ChartOptions {
            responsive: true,
            title: TitleOptions {
                display: title.is_some(),
                text: title.map(str::to_owned),
            },
            legend: LegendOptions {
                display: toggles.show_legend,
            },
            scales: ScalesOptions {
                x_axes: vec![x_axis],
                y_axes: vec![y_axis],
            },
            circumference: None,
            rotation: None,
            cutout_percentage: None,
            tooltips: None,
        },
    }
}
