/*
[INPUT]:  Exchange JSON payloads (string-encoded numerics, positional arrays)
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::Side;
use super::serde_helpers;
use crate::http::{OkcoinError, Result};

/// Exchange trading-pair identifier, e.g. `btc_usd`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(Cow<'static, str>);

impl Symbol {
    pub const BCC_USD: Symbol = Symbol(Cow::Borrowed("bcc_usd"));
    pub const BTC_USD: Symbol = Symbol(Cow::Borrowed("btc_usd"));
    pub const ETC_USD: Symbol = Symbol(Cow::Borrowed("etc_usd"));
    pub const ETH_USD: Symbol = Symbol(Cow::Borrowed("eth_usd"));
    pub const LTC_USD: Symbol = Symbol(Cow::Borrowed("ltc_usd"));

    pub fn new(symbol: impl Into<String>) -> Self {
        Self(Cow::Owned(symbol.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Symbol::BTC_USD
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub buy: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub high: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub last: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub low: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub sell: Decimal,
    #[serde(
        rename = "vol",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub volume: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    #[serde(rename = "tid")]
    pub id: i64,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub amount: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub price: Decimal,
    #[serde(rename = "type")]
    pub side: Side,
    /// Execution time in epoch seconds.
    #[serde(default)]
    pub date: i64,
    /// Execution time in epoch milliseconds.
    #[serde(default)]
    pub date_ms: i64,
}

impl Trade {
    /// Execution time, preferring the millisecond field when present.
    pub fn executed_at(&self) -> Option<DateTime<Utc>> {
        if self.date_ms > 0 {
            DateTime::from_timestamp_millis(self.date_ms)
        } else {
            DateTime::from_timestamp(self.date, 0)
        }
    }
}

/// Number of positional fields in a kline record.
pub const CANDLESTICK_FIELD_COUNT: usize = 6;

/// One kline bucket.
///
/// The wire form is an unlabeled array whose order is fixed:
/// `[timestamp_ms, open, high, low, close, volume]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandleStick {
    pub timestamp_ms: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

impl CandleStick {
    /// Parse a single positional record.
    pub fn from_record(record: &Value) -> Result<Self> {
        let fields = record.as_array().ok_or_else(|| {
            OkcoinError::InvalidResponse(format!(
                "candlestick: expected a positional array; data={record}"
            ))
        })?;

        let [timestamp, open, high, low, close, volume] = fields.as_slice() else {
            return Err(OkcoinError::FieldCount {
                got: fields.len(),
                want: CANDLESTICK_FIELD_COUNT,
                data: record.to_string(),
            });
        };

        Ok(Self {
            timestamp_ms: record_timestamp(timestamp, record)?,
            open: record_decimal("open", open, record)?,
            high: record_decimal("high", high, record)?,
            low: record_decimal("low", low, record)?,
            close: record_decimal("close", close, record)?,
            volume: record_decimal("volume", volume, record)?,
        })
    }

    pub fn opened_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp_ms)
    }
}

/// Decode a bare array of kline records.
pub fn decode_candlesticks(body: &[u8]) -> Result<Vec<CandleStick>> {
    let records: Vec<Value> = serde_json::from_slice(body)?;
    records.iter().map(CandleStick::from_record).collect()
}

fn record_timestamp(value: &Value, record: &Value) -> Result<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|ts| ts.fract() == 0.0).map(|ts| ts as i64))
        .or_else(|| value.as_str().and_then(|raw| raw.parse().ok()))
        .ok_or_else(|| {
            OkcoinError::InvalidResponse(format!(
                "candlestick: invalid timestamp {value}; data={record}"
            ))
        })
}

fn record_decimal(field: &str, value: &Value, record: &Value) -> Result<Decimal> {
    let raw = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        _ => String::new(),
    };

    Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|_| {
            OkcoinError::InvalidResponse(format!(
                "candlestick: invalid {field} {value}; data={record}"
            ))
        })
}

/// Balance figures for one bucket. The exchange only sends the currencies
/// relevant to the bucket, the rest default to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub net: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub total: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub btc: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub eth: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub ltc: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub usd: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Funds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<Fund>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borrow: Option<Fund>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free: Option<Fund>,
    #[serde(rename = "freezed", default, skip_serializing_if = "Option::is_none")]
    pub frozen: Option<Fund>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub union_fund: Option<Fund>,
}

impl Funds {
    /// True when no bucket was present in the payload.
    pub fn is_empty(&self) -> bool {
        self.asset.is_none()
            && self.borrow.is_none()
            && self.free.is_none()
            && self.frozen.is_none()
            && self.union_fund.is_none()
    }
}
