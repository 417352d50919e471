pub mod dataset;
pub mod kind;
pub mod options;

pub use dataset::{ColorMap, ColorValue, DataValue, Dataset, SeriesMap};
pub use kind::ChartKind;
pub use options::{
    AxisOptions, AxisType, ChartConfig, ChartData, ChartOptions, GridLineOptions, LegendOptions,
    ScaleLabelOptions, ScalesOptions, TimeAxisOptions, TitleOptions, TooltipCallbacks,
    TooltipLabelMode, TooltipOptions,
};
