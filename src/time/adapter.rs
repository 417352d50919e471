use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::time::DisplayFormats;

/// Granularity unit for date arithmetic and boundary snapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

/// Date operations the charting library needs for its time scale.
///
/// Times cross this seam as epoch milliseconds. Implementations own the
/// invalid-input policy: `parse` and `create` report failure through the
/// `None` sentinel, and nothing downstream attempts recovery on their behalf.
pub trait DateAdapter: Send + Sync {
    /// Display-format pattern per granularity.
    fn formats(&self) -> DisplayFormats {
        DisplayFormats::default()
    }

    /// Parses a textual value into epoch milliseconds, `None` if unparsable.
    /// `format` is a hint; implementations may ignore it.
    fn parse(&self, value: &str, format: Option<&str>) -> Option<i64>;

    /// Renders epoch milliseconds with a display-format pattern.
    fn format(&self, time_ms: i64, format: &str) -> String;

    /// Adds `amount` units to `time_ms`.
    fn add(&self, time_ms: i64, amount: i64, unit: TimeUnit) -> i64;

    /// Whole units elapsed between `min_ms` and `max_ms`, truncated toward
    /// zero.
    fn diff(&self, max_ms: i64, min_ms: i64, unit: TimeUnit) -> i64;

    /// Snaps down to the start of `unit`. `weekday` selects the week start
    /// when `unit` is [`TimeUnit::Week`]; implementations pick a default
    /// otherwise.
    fn start_of(&self, time_ms: i64, unit: TimeUnit, weekday: Option<Weekday>) -> i64;

    /// Snaps up to the last millisecond of `unit`.
    fn end_of(&self, time_ms: i64, unit: TimeUnit) -> i64;

    /// Builds a time value from a raw scalar (number or string), `None` if
    /// the value is unusable.
    fn create(&self, value: &serde_json::Value) -> Option<i64>;
}
