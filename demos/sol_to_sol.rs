/// Split 10 SOL across two wallets through two exchangers.
///
/// Demonstrates: quote the route, create the split order, check its status.
/// Requires SPLITNOW_API_KEY in the environment.
use rust_decimal_macros::dec;
use splitnow_sdk::{SplitNow, WalletDistribution};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("SPLITNOW_API_KEY")?;
    let client = SplitNow::with_api_key(api_key)?;

    println!("Creating order to split 10 SOL to 2 wallets.");

    // 1. Price the route
    let quote = client
        .create_and_fetch_quote(dec!(10), "sol", "solana", "sol", "solana")
        .await?;
    println!("Quote {}:", quote.quote_id);
    for rate in &quote.rates {
        println!("  {} -> {}", rate.exchange_id, rate.exchange_rate);
    }

    // 2. Create the split order
    let order = client
        .create_and_fetch_order(
            Some(&quote.quote_id),
            dec!(10),
            "sol",
            "solana",
            vec![
                WalletDistribution {
                    to_address: "7ingPqZUYmuso5HakTLgoXjMpETpbZYzxeQBJChGrQn5".into(),
                    to_pct_bips: 5000,
                    to_asset_id: "sol".into(),
                    to_network_id: "solana".into(),
                    to_exchanger_id: "binance".into(),
                },
                WalletDistribution {
                    to_address: "92CzWZt7fD5ffhwkRNBKHxqHahVTPeWedd5UYmdmHjMw".into(),
                    to_pct_bips: 5000,
                    to_asset_id: "sol".into(),
                    to_network_id: "solana".into(),
                    to_exchanger_id: "bybit".into(),
                },
            ],
        )
        .await?;
    println!(
        "Order {}: send {} SOL to {}",
        order.order_id, order.deposit_amount, order.deposit_address
    );

    // 3. Check where it stands
    let status = client.get_order_status(&order.order_id).await?;
    println!(
        "Status: {:?} ({:?})",
        status.order_status_short, status.order_status
    );

    println!("Done!");
    Ok(())
}
