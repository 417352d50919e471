use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Series observations keyed by series name, in caller insertion order.
///
/// Dataset order in the assembled config follows map insertion order, so the
/// legend reads the way the caller built the map.
pub type SeriesMap = IndexMap<String, Vec<DataValue>>;

/// Color strings keyed by series name.
///
/// Color values are opaque to this crate; a key missing from the map yields a
/// `null` color in the config, passed through uninterpreted.
pub type ColorMap = IndexMap<String, String>;

/// One observation in a series: a plain number or a time-paired point
/// (`x` in epoch milliseconds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(f64),
    TimePoint { x: f64, y: f64 },
}

impl DataValue {
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    #[must_use]
    pub fn time_point(x_ms: f64, y: f64) -> Self {
        Self::TimePoint { x: x_ms, y }
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Color slot of a dataset.
///
/// Line and bar datasets carry a single (possibly missing) color; gauge
/// datasets carry a value/complement pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Single(Option<String>),
    Pair([Option<String>; 2]),
}

/// One dataset entry handed to the charting library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<DataValue>,
    pub border_color: ColorValue,
    pub background_color: ColorValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_tension: Option<f64>,
}

impl Dataset {
    /// Line dataset: shared border/background color, fill flag and tension.
    #[must_use]
    pub fn line(
        label: String,
        data: Vec<DataValue>,
        color: Option<String>,
        fill: bool,
        line_tension: f64,
    ) -> Self {
        Self {
            label,
            data,
            border_color: ColorValue::Single(color.clone()),
            background_color: ColorValue::Single(color),
            fill: Some(fill),
            line_tension: Some(line_tension),
        }
    }

    /// Bar dataset: shared border/background color, nothing else.
    #[must_use]
    pub fn bar(label: String, data: Vec<DataValue>, color: Option<String>) -> Self {
        Self {
            label,
            data,
            border_color: ColorValue::Single(color.clone()),
            background_color: ColorValue::Single(color),
            fill: None,
            line_tension: None,
        }
    }

    /// Gauge dataset: a value slice and its complement to 100, with paired
    /// enabled/disabled colors.
    #[must_use]
    pub fn gauge(
        label: String,
        value: f64,
        color: Option<String>,
        disabled_color: Option<String>,
    ) -> Self {
        let colors = [color, disabled_color];
        Self {
            label,
            data: vec![DataValue::Number(value), DataValue::Number(100.0 - value)],
            border_color: ColorValue::Pair(colors.clone()),
            background_color: ColorValue::Pair(colors),
            fill: None,
            line_tension: None,
        }
    }
}
