mod null_backend;

pub use null_backend::NullBackend;

use crate::core::ChartConfig;
use crate::error::ChartResult;

/// Opaque identifier of a chart instance owned by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(u64);

impl ChartHandle {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Contract implemented by any charting backend.
///
/// Backends receive a fully assembled `ChartConfig` and own the drawing
/// surface plus the resulting chart's lifecycle, so config assembly stays
/// isolated from rendering concerns. Unsupported chart kinds are rejected
/// here, not during assembly.
pub trait ChartBackend {
    fn create_chart(&mut self, config: &ChartConfig) -> ChartResult<ChartHandle>;
}
