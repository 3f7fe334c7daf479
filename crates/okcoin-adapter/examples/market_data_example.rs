/*
[INPUT]:  Symbol identifier (e.g., "btc_usd")
[OUTPUT]: Market data (ticker, recent trades, candlesticks)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use okcoin_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Query market data (no authentication required)
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== OKCoin Market Data Example ===\n");

    let client = match OkcoinClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let symbol = Symbol::BTC_USD;

    println!("Querying ticker for {}...", symbol);
    match client.ticker(&symbol).await {
        Ok(ticker) => {
            println!("✓ TimeAtEpoch: {}", ticker.timestamp);
            println!("  Buy:    {}", ticker.ticker.buy);
            println!("  Sell:   {}", ticker.ticker.sell);
            println!("  Low:    {}", ticker.ticker.low);
            println!("  High:   {}", ticker.ticker.high);
            println!("  Volume: {}", ticker.ticker.volume);
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying recent trades for {}...", symbol);
    match client.last_trades(None).await {
        Ok(trades) => {
            println!("✓ {} trades", trades.trades.len());
            for trade in trades.trades.iter().take(5) {
                println!(
                    "  #{} {:?} {} @ {}",
                    trade.id, trade.side, trade.amount, trade.price
                );
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying daily candlesticks for {}...", symbol);
    let request = CandleStickRequest {
        symbol: Some(symbol.clone()),
        period: Some(Period::OneDay),
        count: Some(7),
        ..Default::default()
    };
    match client.candlesticks(Some(request)).await {
        Ok(response) => {
            for stick in &response.candle_sticks {
                println!(
                    "  {:?} O:{} H:{} L:{} C:{} V:{}",
                    stick.opened_at(),
                    stick.open,
                    stick.high,
                    stick.low,
                    stick.close,
                    stick.volume
                );
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
