use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, Dataset};
use crate::error::{ChartError, ChartResult};
use crate::time::DisplayFormats;

/// Assembled configuration record, shaped like the charting library's
/// `{type, data, options}` object.
///
/// The record is built fresh per render call and never mutated after being
/// handed to a backend. Serialized field names match the Chart.js v2 wire
/// shape, so `to_json_pretty` output can be fed to the library directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Serializes the record to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    /// Deserializes a record from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub datasets: Vec<Dataset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub title: TitleOptions,
    pub legend: LegendOptions,
    pub scales: ScalesOptions,
    /// Arc length in radians; set to pi for half-circle gauges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circumference: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutout_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltips: Option<TooltipOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleOptions {
    pub display: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Legend block. `display` stays absent from the serialized record when the
/// caller did not specify a toggle, leaving the library default untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegendOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
}

/// Axis containers. Always exactly one axis per dimension, even though the
/// library accepts more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalesOptions {
    pub x_axes: Vec<AxisOptions>,
    pub y_axes: Vec<AxisOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub display: bool,
    pub scale_label: ScaleLabelOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_lines: Option<GridLineOptions>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeAxisOptions>,
}

impl AxisOptions {
    /// Visible axis whose scale label is gated on a title being present.
    #[must_use]
    pub fn titled(title: Option<&str>) -> Self {
        Self {
            display: true,
            scale_label: ScaleLabelOptions {
                display: title.is_some(),
                label_string: title.map(str::to_owned),
            },
            grid_lines: None,
            axis_type: None,
            time: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Time,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleLabelOptions {
    pub display: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_string: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLineOptions {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeAxisOptions {
    pub display_formats: DisplayFormats,
}

/// Tooltip block. Label generation is a closure in the charting library;
/// here it is a typed mode the backend maps to a real callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipOptions {
    pub callbacks: TooltipCallbacks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipCallbacks {
    pub label: TooltipLabelMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipLabelMode {
    /// Percent labels for gauge slices; see `api::gauge_tooltip_label`.
    GaugePercent,
}
