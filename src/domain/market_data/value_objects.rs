use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - trade time, epoch milliseconds by convention
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Deref,
    Constructor, Serialize, Deserialize,
)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

/// Value Object - trade price
#[derive(Debug, Clone, Copy, PartialEq, Display, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// `false` for the NaN produced by a pass-through parse
    pub fn is_numeric(&self) -> bool {
        !self.0.is_nan()
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - traded quantity
#[derive(Debug, Clone, Copy, PartialEq, Display, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Volume(f64);

impl Volume {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_numeric(&self) -> bool {
        !self.0.is_nan()
    }
}

/// Value Object - display name of the traded product ("BTCUSD")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct ProductName(String);

impl ProductName {
    /// Rejects blank names; surrounding whitespace is kept as the host sent it
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.trim().is_empty() { None } else { Some(Self(name)) }
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
