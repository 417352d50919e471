pub mod adapter;
pub mod chrono_adapter;
pub mod formats;
pub mod registry;

pub use adapter::{DateAdapter, TimeUnit};
pub use chrono_adapter::ChronoDateAdapter;
pub use formats::DisplayFormats;
pub use registry::{
    InstallOutcome, install_date_adapter, install_default_date_adapter, installed_date_adapter,
};
