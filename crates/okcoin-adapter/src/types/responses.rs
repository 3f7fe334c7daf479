/*
[INPUT]:  Decoded endpoint payloads and resolved request inputs
[OUTPUT]: Typed Rust response structs returned to callers
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Period;
use super::models::{CandleStick, Funds, Symbol, Ticker, Trade};
use super::serde_helpers;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerResponse {
    /// Snapshot time in epoch seconds.
    pub timestamp: i64,
    pub ticker: Ticker,
}

impl TickerResponse {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// Wire shape of `ticker.do`. Both keys are optional so the decoder can tell
/// an absent snapshot (e.g. an `{"error_code":...}` body) from a zero one.
#[derive(Debug, Deserialize)]
pub(crate) struct TickerEnvelope {
    #[serde(default, deserialize_with = "serde_helpers::deserialize_optional_i64")]
    date: Option<i64>,
    #[serde(default)]
    ticker: Option<Ticker>,
}

impl TickerEnvelope {
    pub(crate) fn into_response(self) -> Option<TickerResponse> {
        let ticker = self.ticker?;
        Some(TickerResponse {
            timestamp: self.date.unwrap_or_default(),
            ticker,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastTradesResponse {
    pub trades: Vec<Trade>,
    pub symbol: Symbol,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleStickResponse {
    pub symbol: Symbol,
    pub since: f64,
    pub period: Period,
    pub candle_sticks: Vec<CandleStick>,
}

/// Wire shape of `userinfo.do`: `{ result, info: { funds } }`.
#[derive(Debug, Deserialize)]
pub(crate) struct FundsEnvelope {
    #[serde(default)]
    result: bool,
    #[serde(default)]
    info: Option<FundsInfo>,
}

#[derive(Debug, Deserialize)]
struct FundsInfo {
    #[serde(default)]
    funds: Option<Funds>,
}

impl FundsEnvelope {
    pub(crate) fn into_funds(self) -> Option<Funds> {
        if !self.result {
            return None;
        }
        self.info?.funds.filter(|funds| !funds.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn ticker_envelope(body: &str) -> TickerEnvelope {
        serde_json::from_str(body).expect("ticker envelope")
    }

    fn funds_envelope(body: &str) -> FundsEnvelope {
        serde_json::from_str(body).expect("funds envelope")
    }

    #[test]
    fn ticker_envelope_with_snapshot() {
        let response = ticker_envelope(
            r#"{"date":"1410431279","ticker":{"buy":"33.15","high":"34.15","last":"33.15","low":"32.05","sell":"33.16","vol":"10532696.39199642"}}"#,
        )
        .into_response()
        .expect("snapshot present");

        assert_eq!(response.timestamp, 1_410_431_279);
        assert_eq!(response.ticker.sell, "33.16".parse::<Decimal>().unwrap());
        assert_eq!(response.time().map(|t| t.timestamp()), Some(1_410_431_279));
    }

    #[test]
    fn ticker_envelope_without_snapshot_is_blank() {
        assert!(ticker_envelope("{}").into_response().is_none());
        assert!(ticker_envelope(r#"{"error_code":1007}"#).into_response().is_none());
        assert!(ticker_envelope(r#"{"date":"1410431279"}"#).into_response().is_none());
    }

    #[test]
    fn ticker_envelope_keeps_zero_prices() {
        let response = ticker_envelope(r#"{"date":"0","ticker":{}}"#)
            .into_response()
            .expect("present ticker object is data");
        assert_eq!(response.ticker, Ticker::default());
    }

    #[test]
    fn funds_envelope_requires_result_and_buckets() {
        let body = r#"{"result":true,"info":{"funds":{"free":{"btc":"1"}}}}"#;
        assert!(funds_envelope(body).into_funds().is_some());

        let body = r#"{"result":false,"info":{"funds":{"free":{"btc":"1"}}}}"#;
        assert!(funds_envelope(body).into_funds().is_none());

        assert!(funds_envelope(r#"{"result":true}"#).into_funds().is_none());
        assert!(funds_envelope(r#"{"result":true,"info":{}}"#).into_funds().is_none());
        assert!(
            funds_envelope(r#"{"result":true,"info":{"funds":{}}}"#)
                .into_funds()
                .is_none()
        );
    }
}
