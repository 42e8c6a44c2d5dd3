//! SplitNOW SDK for Rust.
//!
//! A typed async client for the SplitNOW currency-exchange API: query
//! supported assets, exchangers, prices, and deposit limits, and create and
//! monitor split orders that divide one source deposit across multiple
//! wallet destinations and exchangers.
//!
//! # What This SDK Provides
//!
//! - High-level workflow client: [`SplitNow`]
//! - Typed REST API access: [`api::SplitNowApi`]
//! - Strong domain models for assets, exchangers, quotes, and orders
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use splitnow_sdk::SplitNow;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), splitnow_sdk::SplitNowError> {
//!     let client = SplitNow::with_api_key(std::env::var("SPLITNOW_API_KEY").unwrap())?;
//!
//!     // Check the API is up
//!     assert!(client.get_health().await?);
//!
//!     // Discover supported assets and exchangers
//!     let _assets = client.get_assets().await?;
//!     let _exchangers = client.get_exchangers().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Recommended Workflow
//!
//! 1. Create a [`SplitNow`] client with your API key.
//! 2. Price the route with [`SplitNow::create_and_fetch_quote`].
//! 3. Submit the split with [`SplitNow::create_and_fetch_order`], passing the
//!    quote id and one [`WalletDistribution`] per destination (shares in
//!    basis points summing to 10000).
//! 4. Fund the returned deposit address with the deposit amount.
//! 5. Poll [`SplitNow::get_order_status`] until the order completes.
//!
//! ## Splitting a Deposit
//!
//! ```rust,no_run
//! use rust_decimal::Decimal;
//! use splitnow_sdk::{SplitNow, WalletDistribution};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), splitnow_sdk::SplitNowError> {
//!     let client = SplitNow::with_api_key("my-api-key")?;
//!
//!     let quote = client
//!         .create_and_fetch_quote(Decimal::from(10), "sol", "solana", "sol", "solana")
//!         .await?;
//!
//!     let order = client
//!         .create_and_fetch_order(
//!             Some(&quote.quote_id),
//!             Decimal::from(10),
//!             "sol",
//!             "solana",
//!             vec![
//!                 WalletDistribution {
//!                     to_address: "7ingPqZUYmuso5HakTLgoXjMpETpbZYzxeQBJChGrQn5".into(),
//!                     to_pct_bips: 5000,
//!                     to_asset_id: "sol".into(),
//!                     to_network_id: "solana".into(),
//!                     to_exchanger_id: "binance".into(),
//!                 },
//!                 WalletDistribution {
//!                     to_address: "92CzWZt7fD5ffhwkRNBKHxqHahVTPeWedd5UYmdmHjMw".into(),
//!                     to_pct_bips: 5000,
//!                     to_asset_id: "sol".into(),
//!                     to_network_id: "solana".into(),
//!                     to_exchanger_id: "bybit".into(),
//!                 },
//!             ],
//!         )
//!         .await?;
//!
//!     println!("send {} to {}", order.deposit_amount, order.deposit_address);
//!     Ok(())
//! }
//! ```
//!
//! # Logging
//!
//! This crate emits debug-level logs through the [`log`](https://docs.rs/log/)
//! facade for every API call. Configure any compatible logger in your binary,
//! then set `RUST_LOG=debug` to inspect request flow.
//!
//! # Errors
//!
//! All fallible operations return [`SplitNowError`]. Match specific variants
//! for robust handling:
//!
//! - Provider-reported failures on quote/order endpoints ([`SplitNowError::Api`])
//! - Transport or non-2xx failures ([`SplitNowError::RequestFailed`])
//! - Local pre-flight rejection of underfunded orders
//!   ([`SplitNowError::InsufficientDeposit`])
pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;

// Re-export primary types for convenience.
pub use client::SplitNow;
pub use config::{ClientConfig, SPLITNOW_API_URL};
pub use errors::SplitNowError;
pub use models::*;
