use serde::{Deserialize, Serialize};

/// Display-format pattern per time granularity.
///
/// This is the single authoritative table: date adapters hand it to the
/// charting library via `DateAdapter::formats`, and time-series axis configs
/// embed the [`axis`](Self::axis) view of the same table. `datetime` is the
/// only optional entry because time axes never consume it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFormats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    pub millisecond: String,
    pub second: String,
    pub minute: String,
    pub hour: String,
    pub day: String,
    pub week: String,
    pub month: String,
    pub quarter: String,
    pub year: String,
}

impl Default for DisplayFormats {
    fn default() -> Self {
        Self {
            datetime: Some("MMM D, YYYY, h:mm:ss a".to_owned()),
            millisecond: "h:mm:ss.SSS a".to_owned(),
            second: "h:mm:ss a".to_owned(),
            minute: "h:mm a".to_owned(),
            hour: "hA".to_owned(),
            day: "MMM D".to_owned(),
            week: "MMM D".to_owned(),
            month: "MMM YYYY".to_owned(),
            quarter: "[Q]Q YYYY".to_owned(),
            year: "YYYY".to_owned(),
        }
    }
}

impl DisplayFormats {
    /// View embedded under a time axis's `displayFormats`: the same table
    /// without the `datetime` entry.
    #[must_use]
    pub fn axis(mut self) -> Self {
        self.datetime = None;
        self
    }
}
