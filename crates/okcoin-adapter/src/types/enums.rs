/*
[INPUT]:  Exchange wire vocabulary (trade sides, kline granularities)
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the exchange adds a granularity or trade side
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::http::OkcoinError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

/// Candlestick bucket width, sent as the `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1min")]
    OneMinute,
    #[serde(rename = "3min")]
    ThreeMinutes,
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "15min")]
    FifteenMinutes,
    #[serde(rename = "30min")]
    ThirtyMinutes,
    #[default]
    #[serde(rename = "1hour")]
    OneHour,
    #[serde(rename = "2hour")]
    TwoHours,
    #[serde(rename = "4hour")]
    FourHours,
    #[serde(rename = "6hour")]
    SixHours,
    #[serde(rename = "12hour")]
    TwelveHours,
    #[serde(rename = "1day")]
    OneDay,
    #[serde(rename = "3day")]
    ThreeDays,
    #[serde(rename = "1week")]
    OneWeek,
}

impl Period {
    pub const ALL: [Period; 13] = [
        Period::OneMinute,
        Period::ThreeMinutes,
        Period::FiveMinutes,
        Period::FifteenMinutes,
        Period::ThirtyMinutes,
        Period::OneHour,
        Period::TwoHours,
        Period::FourHours,
        Period::SixHours,
        Period::TwelveHours,
        Period::OneDay,
        Period::ThreeDays,
        Period::OneWeek,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::OneMinute => "1min",
            Period::ThreeMinutes => "3min",
            Period::FiveMinutes => "5min",
            Period::FifteenMinutes => "15min",
            Period::ThirtyMinutes => "30min",
            Period::OneHour => "1hour",
            Period::TwoHours => "2hour",
            Period::FourHours => "4hour",
            Period::SixHours => "6hour",
            Period::TwelveHours => "12hour",
            Period::OneDay => "1day",
            Period::ThreeDays => "3day",
            Period::OneWeek => "1week",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = OkcoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|period| period.as_str() == s)
            .ok_or_else(|| OkcoinError::InvalidInput(format!("unknown candlestick period {s:?}")))
    }
}
