use derive_more::Display;
use serde::{Serialize, Serializer};
use strum::{AsRefStr, EnumIter, EnumString};

use crate::domain::market_data::Timestamp;

/// Value Object - how a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    Line,
    #[display(fmt = "Column")]
    #[strum(serialize = "column")]
    Column,
}

/// Value Object - horizontal alignment of axis labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelAlign {
    Left,
    Center,
    Right,
}

/// Value Object - share of the plot height, written as "60%"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
#[display(fmt = "{}%", _0)]
pub struct Percent(u8);

impl Percent {
    pub const fn new(value: u8) -> Self {
        Self(if value > 100 { 100 } else { value })
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Serialize for Percent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisLabels {
    pub align: LabelAlign,
    pub x: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesTooltip {
    pub value_decimals: u8,
}

/// Value Object - one (x, y) sample; serialized as `[x, y]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub x: Timestamp,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: Timestamp, y: f64) -> Self {
        Self { x, y }
    }

    /// Equality that treats two NaN y-values as the same sample.
    pub fn same_sample(&self, other: &Self) -> bool {
        self.x == other.x && (self.y == other.y || (self.y.is_nan() && other.y.is_nan()))
    }
}

impl From<(i64, f64)> for DataPoint {
    fn from((x, y): (i64, f64)) -> Self {
        Self::new(Timestamp::from(x), y)
    }
}

impl Serialize for DataPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.x.value(), self.y).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_clamped_and_rendered_with_sign() {
        assert_eq!(Percent::new(60).to_string(), "60%");
        assert_eq!(Percent::new(250).value(), 100);
    }

    #[test]
    fn data_point_serializes_as_pair() {
        let point = DataPoint::from((1000, 42.5));
        assert_eq!(serde_json::to_string(&point).unwrap(), "[1000,42.5]");
    }

    #[test]
    fn nan_samples_compare_equal_with_same_sample() {
        let a = DataPoint::from((1, f64::NAN));
        let b = DataPoint::from((1, f64::NAN));
        assert_ne!(a, b);
        assert!(a.same_sample(&b));
    }
}
