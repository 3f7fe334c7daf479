/*
[INPUT]:  Symbols and optional request options
[OUTPUT]: Market data (ticker, recent trades, candlesticks)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use reqwest::Method;
use tracing::{debug, warn};

use crate::http::signature::QueryParams;
use crate::http::transport::HttpRequest;
use crate::http::{OkcoinClient, OkcoinError, Result};
use crate::types::responses::TickerEnvelope;
use crate::types::{
    CandleStickRequest, CandleStickResponse, LastTradesRequest, LastTradesResponse, Symbol,
    TickerResponse, Trade, decode_candlesticks,
};

const TICKER_ENDPOINT: &str = "ticker.do";
const TRADES_ENDPOINT: &str = "trades.do";
const KLINE_ENDPOINT: &str = "kline.do";

impl OkcoinClient {
    /// Query the latest ticker snapshot
    ///
    /// GET /api/v1/ticker.do?symbol={symbol}
    pub async fn ticker(&self, symbol: &Symbol) -> Result<TickerResponse> {
        if symbol.is_blank() {
            return Err(OkcoinError::blank_symbol());
        }

        let mut params = QueryParams::new();
        params.insert("symbol".to_string(), symbol.to_string());
        let url = self.endpoint_url(TICKER_ENDPOINT, &params)?;

        let envelope: TickerEnvelope = self.send_json(HttpRequest::new(Method::GET, url)).await?;
        envelope.into_response().ok_or_else(|| {
            warn!(symbol = %symbol, "ticker response carried no snapshot");
            OkcoinError::BlankTicker
        })
    }

    /// Query recent trades. An empty list is a valid answer.
    ///
    /// GET /api/v1/trades.do?symbol={symbol}&since={trade_id}
    pub async fn last_trades(
        &self,
        request: Option<LastTradesRequest>,
    ) -> Result<LastTradesResponse> {
        let request = request.unwrap_or_default();
        let symbol = request.symbol_or_default();

        let mut params = QueryParams::new();
        params.insert("symbol".to_string(), symbol.to_string());
        params.insert("since".to_string(), request.since_or_zero().to_string());
        let url = self.endpoint_url(TRADES_ENDPOINT, &params)?;

        let trades: Vec<Trade> = self.send_json(HttpRequest::new(Method::GET, url)).await?;
        debug!(symbol = %symbol, count = trades.len(), "trades decoded");
        Ok(LastTradesResponse { trades, symbol })
    }

    /// Get kline/candlestick history
    ///
    /// GET /api/v1/kline.do?symbol={symbol}&type={period}&since={since}&size={count}
    pub async fn candlesticks(
        &self,
        request: Option<CandleStickRequest>,
    ) -> Result<CandleStickResponse> {
        let request = request.unwrap_or_default();
        let symbol = request.symbol_or_default();
        let period = request.period_or_default();
        let since = request.since_or_zero();

        let mut params = QueryParams::new();
        params.insert("symbol".to_string(), symbol.to_string());
        params.insert("type".to_string(), period.to_string());
        params.insert("since".to_string(), since.to_string());
        if let Some(count) = request.count.filter(|count| *count > 0) {
            params.insert("size".to_string(), count.to_string());
        }
        let url = self.endpoint_url(KLINE_ENDPOINT, &params)?;

        let body = self.send(HttpRequest::new(Method::GET, url)).await?;
        let candle_sticks = decode_candlesticks(&body)?;
        debug!(
            symbol = %symbol,
            period = %period,
            count = candle_sticks.len(),
            "candlesticks decoded"
        );

        Ok(CandleStickResponse {
            symbol,
            since,
            period,
            candle_sticks,
        })
    }
}
