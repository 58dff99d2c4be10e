pub use super::value_objects::{Price, Timestamp, Volume};

use super::attributes::{HookAttributes, TRADE_PRICE, TRADE_TIMESTAMP, TRADE_VOLUME};
use crate::domain::errors::ValidationError;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// What to do with a price or volume that does not parse as a number
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, StrumDisplay, EnumString, AsRefStr, Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MalformedFieldPolicy {
    /// Drop the whole tick
    #[default]
    Reject,
    /// Read the leading numeric prefix and hand NaN to the chart when there is none
    PassThrough,
}

/// Domain entity - one observed trade, built per update and never retained
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeTick {
    pub timestamp: Timestamp,
    pub price: Price,
    pub volume: Volume,
}

impl TradeTick {
    pub fn new(timestamp: Timestamp, price: Price, volume: Volume) -> Self {
        Self { timestamp, price, volume }
    }

    /// Reads a tick out of the attribute bag.
    ///
    /// `Ok(None)` means the bag carries no trade (no timestamp key). Price and
    /// volume are not checked for presence separately: a missing one parses
    /// like an empty string.
    pub fn from_attributes(
        attributes: &HookAttributes,
        policy: MalformedFieldPolicy,
    ) -> Result<Option<Self>, ValidationError> {
        let Some(raw_timestamp) = attributes.get(TRADE_TIMESTAMP) else {
            return Ok(None);
        };
        let raw_price = attributes.get(TRADE_PRICE).unwrap_or_default();
        let raw_volume = attributes.get(TRADE_VOLUME).unwrap_or_default();

        let tick = match policy {
            MalformedFieldPolicy::Reject => Self::new(
                Timestamp::from(parse_strict_int(TRADE_TIMESTAMP, raw_timestamp)?),
                Price::from(parse_strict_float(TRADE_PRICE, raw_price)?),
                Volume::from(parse_strict_float(TRADE_VOLUME, raw_volume)?),
            ),
            MalformedFieldPolicy::PassThrough => Self::new(
                Timestamp::from(parse_int_prefix(raw_timestamp).ok_or_else(|| {
                    ValidationError::InvalidNumber {
                        field: TRADE_TIMESTAMP,
                        value: raw_timestamp.to_string(),
                    }
                })?),
                Price::from(parse_float_prefix(raw_price).unwrap_or(f64::NAN)),
                Volume::from(parse_float_prefix(raw_volume).unwrap_or(f64::NAN)),
            ),
        };
        Ok(Some(tick))
    }

    pub fn is_fully_numeric(&self) -> bool {
        self.price.is_numeric() && self.volume.is_numeric()
    }
}

fn invalid(field: &'static str, raw: &str) -> ValidationError {
    ValidationError::InvalidNumber { field, value: raw.to_string() }
}

/// Integer, or a float literal with no fractional part ("1000.0").
/// Values outside the `i64` range are rejected rather than saturated.
fn parse_strict_int(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    let in_range = |value: f64| value >= i64::MIN as f64 && value < i64::MAX as f64;
    match trimmed.parse::<f64>() {
        Ok(value) if in_range(value) && value.fract() == 0.0 => Ok(value as i64),
        _ => Err(invalid(field, raw)),
    }
}

fn parse_strict_float(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid(field, raw)),
    }
}

/// Longest leading `[+-]digits` run, leading whitespace ignored.
/// A run that overflows `i64` yields `None`, unlike JS `parseInt`.
fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

/// Longest leading decimal literal (sign, digits, fraction, exponent).
fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = usize::from(s.starts_with(['+', '-']));

    let int_digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = bytes[end + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return s[end..].starts_with("Infinity").then(|| {
            if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY }
        });
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = bytes[exp_end.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    s[..end].parse().ok()
}
