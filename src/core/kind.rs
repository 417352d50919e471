use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chart kind as understood by the downstream charting library.
///
/// `Custom` carries an arbitrary type string through untouched; whether the
/// library accepts it is decided at chart construction time, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    HorizontalBar,
    Doughnut,
    Custom(String),
}

impl ChartKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::HorizontalBar => "horizontalBar",
            Self::Doughnut => "doughnut",
            Self::Custom(kind) => kind,
        }
    }
}

impl From<&str> for ChartKind {
    fn from(raw: &str) -> Self {
        match raw {
            "line" => Self::Line,
            "bar" => Self::Bar,
            "horizontalBar" => Self::HorizontalBar,
            "doughnut" => Self::Doughnut,
            other => Self::Custom(other.to_owned()),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ChartKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChartKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}
