//! chart-engine-rs: typed chart-configuration builder.
//!
//! This crate assembles Chart.js-v2-shaped configuration records from
//! high-level chart requests (line, time series, bar, gauge) and bridges the
//! charting library's pluggable date-adapter seam to a caller-supplied
//! date/time implementation. Rendering itself stays behind the
//! [`render::ChartBackend`] trait; this crate never touches a drawing
//! surface.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod time;

pub use api::{
    BarChart, ChartRenderer, ConfigureToggles, GaugeChart, LineChart, TimeSeriesChart, configure,
};
pub use core::{ChartConfig, ChartKind};
pub use error::{ChartError, ChartResult};
