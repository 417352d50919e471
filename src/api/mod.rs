mod charts;
mod configure;
mod renderer;

pub use charts::{
    BarChart, DEFAULT_LINE_TENSION, GaugeChart, LineChart, TimeSeriesChart, gauge_tooltip_label,
};
pub use configure::{ConfigureToggles, configure};
pub use renderer::ChartRenderer;
