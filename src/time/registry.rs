//! Process-wide date-adapter registry.
//!
//! The charting library consults one adapter for every time-scale render, so
//! installation is an explicit startup decision made by the host rather than
//! an ambient load-time side effect. The registry is write-once: the first
//! successful install wins for the process lifetime.

use std::sync::{Arc, OnceLock};

use crate::time::{ChronoDateAdapter, DateAdapter};

static REGISTRY: OnceLock<Arc<dyn DateAdapter>> = OnceLock::new();

/// Outcome of an install attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The adapter was installed by this call.
    Installed,
    /// An adapter was already present; the registry is unchanged.
    AlreadyInstalled,
}

impl InstallOutcome {
    #[must_use]
    pub fn newly_installed(self) -> bool {
        matches!(self, Self::Installed)
    }
}

/// Installs `adapter` as the process-wide date adapter.
///
/// Idempotent: repeat calls leave the registry untouched and report
/// [`InstallOutcome::AlreadyInstalled`].
pub fn install_date_adapter(adapter: Arc<dyn DateAdapter>) -> InstallOutcome {
    if REGISTRY.set(adapter).is_ok() {
        InstallOutcome::Installed
    } else {
        InstallOutcome::AlreadyInstalled
    }
}

/// Installs the chrono-backed [`ChronoDateAdapter`] unless an adapter is
/// already present.
pub fn install_default_date_adapter() -> InstallOutcome {
    install_date_adapter(Arc::new(ChronoDateAdapter))
}

/// Currently installed adapter, if any.
#[must_use]
pub fn installed_date_adapter() -> Option<Arc<dyn DateAdapter>> {
    REGISTRY.get().cloned()
}
