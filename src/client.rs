/// High-level SplitNow client.
///
/// This is the primary entry point for SDK users. It validates the
/// configuration, runs the create-then-fetch flows for quotes and orders,
/// and projects fetched resources into the compact result records.
use std::time::Duration;

use rust_decimal::Decimal;

use crate::api::SplitNowApi;
use crate::config::ClientConfig;
use crate::errors::SplitNowError;
use crate::models::*;

/// Rate type sent with every quote and order this SDK creates.
const FLOATING_RATE: &str = "floating_rate";

/// 100% of an order, in basis points.
const FULL_SHARE_BIPS: u32 = 10_000;

/// Pause between creating a quote/order and the first fetch, while the venue
/// fans the RFQs out to its exchangers.
const CREATE_FETCH_DELAY: Duration = Duration::from_millis(1000);

/// Display rate for one quote leg: the output amount less the 1% service
/// fee, rounded to 3 decimal places.
fn display_rate(to_amount: Decimal) -> Decimal {
    (to_amount * Decimal::new(99, 2)).round_dp(3)
}

/// The high-level SplitNOW client.
#[derive(Debug, Clone)]
pub struct SplitNow {
    pub api: SplitNowApi,
    pub config: ClientConfig,
}

impl SplitNow {
    /// Create a new client with the given configuration.
    ///
    /// Fails with [`SplitNowError::InvalidConfiguration`] if the API key is
    /// empty, before any network access.
    pub fn new(config: ClientConfig) -> Result<Self, SplitNowError> {
        if config.api_key.is_empty() {
            return Err(SplitNowError::InvalidConfiguration(
                "invalid or missing SplitNOW API key".into(),
            ));
        }
        Ok(Self {
            api: SplitNowApi::new(config.clone()),
            config,
        })
    }

    /// Create a new client for the production API with the given key.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, SplitNowError> {
        Self::new(ClientConfig::new(api_key))
    }

    // -----------------------------------------------------------------------
    // Discovery
    // -----------------------------------------------------------------------

    /// Whether the API is online and healthy.
    pub async fn get_health(&self) -> Result<bool, SplitNowError> {
        self.api.get_health().await
    }

    /// Supported assets.
    pub async fn get_assets(&self) -> Result<Vec<Asset>, SplitNowError> {
        self.api.get_assets().await
    }

    /// Current asset prices, keyed by asset id.
    pub async fn get_asset_prices(
        &self,
    ) -> Result<std::collections::HashMap<String, serde_json::Value>, SplitNowError> {
        self.api.get_asset_prices().await
    }

    /// Per-asset deposit limits.
    pub async fn get_asset_deposit_limits(
        &self,
    ) -> Result<Vec<AssetDepositLimit>, SplitNowError> {
        self.api.get_asset_deposit_limits().await
    }

    /// Supported exchangers.
    pub async fn get_exchangers(&self) -> Result<Vec<Exchanger>, SplitNowError> {
        self.api.get_exchangers().await
    }

    // -----------------------------------------------------------------------
    // Quotes
    // -----------------------------------------------------------------------

    /// Create a floating-rate quote for a trade route and amount, then fetch
    /// it and return one display rate per responding exchanger.
    ///
    /// The quote requests a single output leg at 100% to the given
    /// destination; the returned [`QuoteData::quote_id`] can be passed to
    /// [`SplitNow::create_and_fetch_order`].
    pub async fn create_and_fetch_quote(
        &self,
        from_amount: Decimal,
        from_asset_id: &str,
        from_network_id: &str,
        to_asset_id: &str,
        to_network_id: &str,
    ) -> Result<QuoteData, SplitNowError> {
        let request = QuoteRequest {
            quote_type: FLOATING_RATE.into(),
            quote_input: TradeInput {
                from_amount,
                from_asset_id: from_asset_id.into(),
                from_network_id: from_network_id.into(),
            },
            quote_outputs: vec![QuoteOutput {
                to_pct_bips: FULL_SHARE_BIPS,
                to_asset_id: to_asset_id.into(),
                to_network_id: to_network_id.into(),
            }],
        };
        let quote_id = self.api.create_quote(&request).await?;

        tokio::time::sleep(CREATE_FETCH_DELAY).await;

        let quote = self.api.get_quote(&quote_id).await?;
        let rates = quote
            .quote_legs
            .iter()
            .map(|leg| Rate {
                exchange_id: leg.quote_leg_output.to_exchanger_id.clone(),
                exchange_rate: display_rate(leg.quote_leg_output.to_amount),
            })
            .collect();

        Ok(QuoteData { quote_id, rates })
    }

    /// Fetch a quote by id.
    pub async fn get_quote(&self, quote_id: &str) -> Result<Quote, SplitNowError> {
        self.api.get_quote(quote_id).await
    }

    // -----------------------------------------------------------------------
    // Orders
    // -----------------------------------------------------------------------

    /// Create an order splitting `from_amount` across the given wallet
    /// distributions, then fetch it and return the deposit details the
    /// caller must fund.
    ///
    /// The `to_pct_bips` values across all distributions must sum to 10000;
    /// that invariant is enforced by the provider. Locally, the requested
    /// amount is checked against the asset's minimum deposit multiplied by
    /// the number of wallets, and [`SplitNowError::InsufficientDeposit`] is
    /// returned before any order-creation request when it falls short.
    pub async fn create_and_fetch_order(
        &self,
        quote_id: Option<&str>,
        from_amount: Decimal,
        from_asset_id: &str,
        from_network_id: &str,
        wallet_distributions: Vec<WalletDistribution>,
    ) -> Result<OrderData, SplitNowError> {
        let limits = self.api.get_asset_deposit_limits().await?;
        let limit = limits
            .iter()
            .find(|limit| limit.asset_id == from_asset_id)
            .ok_or_else(|| SplitNowError::UnknownAsset(from_asset_id.to_string()))?;

        let wallet_count = wallet_distributions.len();
        let min_amount = limit.min_deposit * Decimal::from(wallet_count);
        if min_amount > from_amount {
            return Err(SplitNowError::InsufficientDeposit {
                min_amount,
                asset_id: from_asset_id.to_string(),
                min_per_wallet: limit.min_deposit,
                wallet_count,
            });
        }

        let request = OrderRequest {
            order_type: FLOATING_RATE.into(),
            quote_id: quote_id.map(str::to_string),
            order_input: TradeInput {
                from_amount,
                from_asset_id: from_asset_id.into(),
                from_network_id: from_network_id.into(),
            },
            order_outputs: wallet_distributions,
        };
        let created = self.api.create_order(&request).await?;

        tokio::time::sleep(CREATE_FETCH_DELAY).await;

        let order = self.api.get_order(&created.short_id).await?;
        Ok(OrderData {
            order_id: order.short_id,
            deposit_address: order.deposit_wallet_address,
            deposit_amount: order.order_input.from_amount,
        })
    }

    /// Fetch an order by its short id.
    pub async fn get_order(&self, order_id: &str) -> Result<Order, SplitNowError> {
        self.api.get_order(order_id).await
    }

    /// Fetch an order and project its status triple, verbatim.
    pub async fn get_order_status(
        &self,
        order_id: &str,
    ) -> Result<OrderStatusData, SplitNowError> {
        let order = self.api.get_order(order_id).await?;
        Ok(OrderStatusData {
            order_id: order_id.to_string(),
            order_status: order.status,
            order_status_short: order.status_short,
            order_status_text: order.status_text,
        })
    }
}
