//! The loosely typed key/value bag a host hands to the widget.
//!
//! Keys use the camelCase form a browser exposes through `element.dataset`
//! (`data-trade-price` becomes `tradePrice`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::value_objects::ProductName;
use crate::domain::errors::ValidationError;

pub const PRODUCT_NAME: &str = "productName";
pub const TRADE_TIMESTAMP: &str = "tradeTimestamp";
pub const TRADE_PRICE: &str = "tradePrice";
pub const TRADE_VOLUME: &str = "tradeVolume";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HookAttributes(BTreeMap<String, String>);

impl HookAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for hosts that assemble the bag by hand.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Presence of the timestamp is the only gate for an update.
    pub fn has_trade(&self) -> bool {
        self.0.contains_key(TRADE_TIMESTAMP)
    }

    pub fn product_name(&self) -> Result<ProductName, ValidationError> {
        self.get(PRODUCT_NAME)
            .and_then(|name| ProductName::new(name))
            .ok_or(ValidationError::MissingAttribute(PRODUCT_NAME))
    }

    /// Compact JSON form used as log metadata.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HookAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_name_is_required_and_non_blank() {
        let attrs = HookAttributes::new().with(PRODUCT_NAME, "BTCUSD");
        assert_eq!(attrs.product_name().unwrap().value(), "BTCUSD");

        let blank = HookAttributes::new().with(PRODUCT_NAME, "  ");
        assert_eq!(blank.product_name(), Err(ValidationError::MissingAttribute(PRODUCT_NAME)));
        assert!(HookAttributes::new().product_name().is_err());
    }

    #[test]
    fn empty_timestamp_still_counts_as_present() {
        let attrs = HookAttributes::new().with(TRADE_TIMESTAMP, "");
        assert!(attrs.has_trade());
        assert!(!HookAttributes::new().with(TRADE_PRICE, "1").has_trade());
    }

    #[test]
    fn json_metadata_is_sorted() {
        let attrs: HookAttributes = [("tradePrice", "1.5"), ("productName", "ETHUSD")].into_iter().collect();
        assert_eq!(attrs.to_json(), r#"{"productName":"ETHUSD","tradePrice":"1.5"}"#);
    }
}
