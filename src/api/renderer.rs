use tracing::debug;

use crate::error::ChartResult;
use crate::render::{ChartBackend, ChartHandle};

use super::{BarChart, GaugeChart, LineChart, TimeSeriesChart};

/// Render facade: builds configuration records from chart requests and hands
/// them to a backend.
///
/// Config assembly stays pure in the request types' `to_config`; this layer
/// only adds tracing diagnostics and the backend call. Hosts that want the
/// diagnostics choose a subscriber (see `telemetry`).
#[derive(Debug)]
pub struct ChartRenderer<B: ChartBackend> {
    backend: B,
}

impl<B: ChartBackend> ChartRenderer<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn render_line(&mut self, chart: &LineChart) -> ChartResult<ChartHandle> {
        self.backend.create_chart(&chart.to_config())
    }

    pub fn render_time_series(&mut self, chart: &TimeSeriesChart) -> ChartResult<ChartHandle> {
        let config = chart.to_config();
        debug!(
            kind = %config.kind,
            datasets = config.data.datasets.len(),
            "rendering time-series chart"
        );
        self.backend.create_chart(&config)
    }

    pub fn render_bar(&mut self, chart: &BarChart) -> ChartResult<ChartHandle> {
        let config = chart.to_config();
        debug!(
            kind = %config.kind,
            horizontal = chart.horizontal(),
            "rendering bar chart"
        );
        self.backend.create_chart(&config)
    }

    pub fn render_gauge(&mut self, chart: &GaugeChart) -> ChartResult<ChartHandle> {
        let config = chart.to_config();
        debug!(
            kind = %config.kind,
            datasets = config.data.datasets.len(),
            "rendering gauge chart"
        );
        self.backend.create_chart(&config)
    }
}
