/*
[INPUT]:  Loosely typed exchange values (numbers sent as strings, nulls, blanks)
[OUTPUT]: serde adapters for Decimal and integer fields
[POS]:    Data layer - shared (de)serialization helpers
[UPDATE]: When a new loosely typed wire field appears
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;
use std::str::FromStr;

pub fn deserialize_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(Decimal::ZERO);
    }

    if let Some(raw) = value.as_str() {
        if raw.trim().is_empty() {
            return Ok(Decimal::ZERO);
        }
        return Decimal::from_str(raw.trim()).map_err(serde::de::Error::custom);
    }

    if value.is_number() {
        return Decimal::from_str(&value.to_string())
            .or_else(|_| Decimal::from_scientific(&value.to_string()))
            .map_err(serde::de::Error::custom);
    }

    Err(serde::de::Error::custom("invalid decimal value"))
}

pub fn serialize_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

/// Integer that may arrive as a JSON number or a numeric string (`"1410431279"`).
pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => number
            .as_i64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid integer value {number}"))),
        Value::String(raw) if raw.trim().is_empty() => Ok(None),
        Value::String(raw) => raw
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        other => Err(serde::de::Error::custom(format!(
            "invalid integer value {other}"
        ))),
    }
}
