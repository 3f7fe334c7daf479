/*
[INPUT]:  OKCOIN_API_KEY and OKCOIN_API_SECRET environment variables
[OUTPUT]: Account balances
[POS]:    Examples - signed account queries
[UPDATE]: When adding new user endpoints
*/

use okcoin_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Query balances with a signed request
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== OKCoin Funds Example ===\n");

    let client = match OkcoinClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client:\n{}", e);
            return;
        }
    };
    println!("✓ Credentials loaded from environment\n");

    match client.funds().await {
        Ok(funds) => {
            let buckets = [
                ("asset", &funds.asset),
                ("borrow", &funds.borrow),
                ("free", &funds.free),
                ("freezed", &funds.frozen),
                ("union_fund", &funds.union_fund),
            ];
            for (name, fund) in buckets {
                if let Some(fund) = fund {
                    println!("{name}: {fund:?}");
                }
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }
}
