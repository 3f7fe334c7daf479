/*
[INPUT]:  Caller-supplied request options (all optional)
[OUTPUT]: Typed Rust request structs with defaulting rules
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::Period;
use super::models::Symbol;

fn symbol_or_default(symbol: Option<&Symbol>) -> Symbol {
    symbol
        .filter(|symbol| !symbol.is_blank())
        .cloned()
        .unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastTradesRequest {
    /// Return trades after this id. Zero or negative means from the start.
    #[serde(default)]
    pub since_trade_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<Symbol>,
}

impl LastTradesRequest {
    pub fn symbol_or_default(&self) -> Symbol {
        symbol_or_default(self.symbol.as_ref())
    }

    pub fn since_or_zero(&self) -> i64 {
        self.since_trade_id.max(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandleStickRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<Symbol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    /// Start of the window in epoch milliseconds. Zero or negative means
    /// the exchange's default window.
    #[serde(default)]
    pub since: f64,
    /// Maximum number of buckets. `None` leaves it to the exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl CandleStickRequest {
    pub fn symbol_or_default(&self) -> Symbol {
        symbol_or_default(self.symbol.as_ref())
    }

    pub fn period_or_default(&self) -> Period {
        self.period.unwrap_or_default()
    }

    /// Negative (and NaN) values become zero; positive values pass through.
    pub fn since_or_zero(&self) -> f64 {
        if self.since > 0.0 { self.since } else { 0.0 }
    }
}
