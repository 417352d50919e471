use crate::core::ChartConfig;
use crate::error::ChartResult;
use crate::render::{ChartBackend, ChartHandle};

/// No-op backend used by tests and headless callers.
///
/// It stores every received config so assertions can inspect exactly what a
/// real charting library would have been given, and hands out sequential
/// handles starting at 1.
#[derive(Debug, Default)]
pub struct NullBackend {
    pub created: Vec<ChartConfig>,
}

impl ChartBackend for NullBackend {
    fn create_chart(&mut self, config: &ChartConfig) -> ChartResult<ChartHandle> {
        self.created.push(config.clone());
        Ok(ChartHandle::new(self.created.len() as u64))
    }
}
