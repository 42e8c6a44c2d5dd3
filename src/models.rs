/// Data models for SplitNOW API types.
///
/// All models use serde for JSON serialization/deserialization. The wire
/// format is camelCase JSON; monetary amounts are JSON numbers and map to
/// `Decimal`.
use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

/// Per-asset transfer limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetTransferLimits {
    pub min: Decimal,
    pub max: Decimal,
}

/// Send/receive availability flags for an asset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetAvailability {
    pub send: bool,
    pub receive: bool,
}

/// A tradable asset on a specific network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub url: String,
    /// Contract address, for token assets.
    pub ca: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub asset_id: String,
    pub network_id: String,
    pub network_name: String,
    pub symbol: String,
    pub display_name: String,
    pub decimals: u32,
    pub precision: u32,
    pub limits: AssetTransferLimits,
    pub status: AssetAvailability,
    pub logo_path: Option<String>,
    pub asset_color: Option<String>,
    pub network_color: Option<String>,
}

/// Minimum and (optionally unbounded) maximum deposit amount for an asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetDepositLimit {
    pub asset_id: String,
    pub min_deposit: Decimal,
    pub max_deposit: Option<Decimal>,
}

/// Top-level response from GET /assets/.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsResponse {
    pub assets: Vec<Asset>,
}

/// Top-level response from GET /assets/prices/.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetPricesResponse {
    pub prices: HashMap<String, serde_json::Value>,
}

/// Top-level response from GET /assets/limits/.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetDepositLimitsResponse {
    pub limits: Vec<AssetDepositLimit>,
}

// ---------------------------------------------------------------------------
// Exchangers
// ---------------------------------------------------------------------------

/// Country metadata for an exchanger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangerCountry {
    pub country_code: String,
    pub country_name: String,
    pub country_flag: String,
}

/// Descriptive metadata for an exchanger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExchangerAbout {
    pub country: ExchangerCountry,
    pub year: u32,
    pub description: String,
}

/// Light/dark banner image paths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangerBanner {
    pub light_mode: String,
    pub dark_mode: String,
}

/// Brand colors for an exchanger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExchangerColors {
    pub background: String,
    pub foreground: String,
    pub icon: String,
}

/// Capability flags for an exchanger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExchangerStatus {
    pub show: bool,
    pub quotes: bool,
    pub orders: bool,
}

/// A liquidity/execution venue that fills order legs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exchanger {
    pub id: String,
    pub name: String,
    pub website: String,
    pub category: String,
    pub about: ExchangerAbout,
    pub logo_path: Option<String>,
    pub banner_path: Option<ExchangerBanner>,
    pub colors: Option<ExchangerColors>,
    pub status: ExchangerStatus,
    /// Estimated time to completion, in minutes.
    pub eta: Option<f64>,
    pub is_available: bool,
}

/// Top-level response from GET /exchangers/.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangersResponse {
    pub exchangers: Vec<Exchanger>,
}

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

/// Source side of a quote, an order, or one of their legs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeInput {
    pub from_amount: Decimal,
    pub from_asset_id: String,
    pub from_network_id: String,
}

/// Requested output share in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOutput {
    pub to_pct_bips: u32,
    pub to_asset_id: String,
    pub to_network_id: String,
}

/// Priced output of a single quote leg.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLegOutput {
    pub to_pct_bips: u32,
    pub to_amount: Decimal,
    pub to_asset_id: String,
    pub to_network_id: String,
    pub to_exchanger_id: String,
}

/// Per-leg amount bounds reported by the exchanger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLegLimits {
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
}

/// One exchanger's priced proposal within a quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLeg {
    pub status: String,
    #[serde(rename = "type")]
    pub quote_type: String,
    pub quote_id: String,
    pub quote_leg_input: TradeInput,
    pub quote_leg_output: QuoteLegOutput,
    pub limits: Option<QuoteLegLimits>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A full quote, referenced by its opaque id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: String,
    #[serde(rename = "type")]
    pub quote_type: String,
    pub user_id: Option<String>,
    pub api_key_id: Option<String>,
    pub quote_input: TradeInput,
    pub quote_legs: Vec<QuoteLeg>,
}

/// Request body for POST /quotes/.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(rename = "type")]
    pub quote_type: String,
    pub quote_input: TradeInput,
    pub quote_outputs: Vec<QuoteOutput>,
}

/// One exchanger's display rate within a fetched quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    pub exchange_id: String,
    pub exchange_rate: Decimal,
}

/// Result of `create_and_fetch_quote`: the quote id plus one rate per leg.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteData {
    pub quote_id: String,
    pub rates: Vec<Rate>,
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

/// Caller-supplied destination for one share of an order.
///
/// The provider requires the `to_pct_bips` values across all distributions
/// of one order to sum to 10000.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletDistribution {
    pub to_address: String,
    pub to_pct_bips: u32,
    pub to_asset_id: String,
    pub to_network_id: String,
    pub to_exchanger_id: String,
}

/// A resolved output of a created order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderOutput {
    pub to_distribution_id: u32,
    pub to_address: String,
    pub to_pct_bips: u32,
    pub to_amount: Decimal,
    pub to_asset_id: String,
    pub to_network_id: String,
    pub to_exchanger_id: String,
}

/// One input-to-output conversion segment of an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLeg {
    pub status: OrderLegStatus,
    pub status_short: OrderLegStatusShort,
    pub status_text: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub order_id: String,
    pub order_leg_input: TradeInput,
    pub order_leg_output: OrderOutput,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A created exchange order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: OrderStatus,
    pub status_short: OrderStatusShort,
    pub status_text: OrderStatusText,
    #[serde(rename = "type")]
    pub order_type: String,
    pub short_id: String,
    pub user_id: Option<String>,
    pub api_key_id: Option<String>,
    pub quote_id: Option<String>,
    pub order_input: TradeInput,
    pub order_outputs: Vec<OrderOutput>,
    pub order_legs: Vec<OrderLeg>,
    pub expired_at: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub deposit_wallet_address: String,
    pub deposit_amount: Decimal,
}

/// Request body for POST /orders/.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(rename = "type")]
    pub order_type: String,
    pub quote_id: Option<String>,
    pub order_input: TradeInput,
    pub order_outputs: Vec<WalletDistribution>,
}

/// Envelope payload of POST /orders/: the provider's short order id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrder {
    pub short_id: String,
}

/// Result of `create_and_fetch_order`: what the caller needs to fund it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    pub order_id: String,
    pub deposit_address: String,
    pub deposit_amount: Decimal,
}

/// Result of `get_order_status`: the order's status triple, verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusData {
    pub order_id: String,
    pub order_status: OrderStatus,
    pub order_status_short: OrderStatusShort,
    pub order_status_text: OrderStatusText,
}

// ---------------------------------------------------------------------------
// Status enums
// ---------------------------------------------------------------------------
// Closed sets defined and transitioned by the server; the client only relays
// them. Unknown wire values are a deserialization error, never coerced.

/// Full order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    PendingDepositWallet,
    CreatingDepositWallet,
    CreatingDepositWalletFailed,
    CreatingDepositWalletHalted,
    CreatingDepositWalletCompleted,
    UserDepositPending,
    UserDepositDetected,
    UserDepositExpired,
    UserDepositFailed,
    UserDepositHalted,
    UserDepositCompleted,
    SendingToDepositWallet,
    SendingToDepositWalletFailed,
    SendingToDepositWalletHalted,
    SendingToDepositWalletCompleted,
    SendingToHotWallet,
    SendingToHotWalletFailed,
    SendingToHotWalletHalted,
    SendingToHotWalletCompleted,
    SendingToGasWallet,
    SendingToGasWalletFailed,
    SendingToGasWalletHalted,
    SendingToGasWalletCompleted,
    SendingToFeeWallet,
    SendingToFeeWalletFailed,
    SendingToFeeWalletHalted,
    SendingToFeeWalletCompleted,
    CreatingOrderLegs,
    CreatingOrderLegsFailed,
    CreatingOrderLegsHalted,
    CreatingOrderLegsCompleted,
    SettlingOrderLegs,
    SettlingOrderLegsFailed,
    SettlingOrderLegsHalted,
    SettlingOrderLegsCompleted,
    Monitoring,
    Expired,
    Halted,
    Failed,
    Refunded,
    Completed,
}

/// Condensed order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatusShort {
    Pending,
    Sending,
    Monitoring,
    Expired,
    Halted,
    Failed,
    Refunded,
    Completed,
}

/// Human-readable order status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatusText {
    #[serde(rename = "Awaiting Deposit")]
    AwaitingDeposit,
    #[serde(rename = "Settling Order Legs")]
    SettlingOrderLegs,
    #[serde(rename = "Monitoring Order Legs")]
    MonitoringOrderLegs,
    #[serde(rename = "Order Expired")]
    OrderExpired,
    #[serde(rename = "Order Halted")]
    OrderHalted,
    #[serde(rename = "Order Failed")]
    OrderFailed,
    #[serde(rename = "Order Refunded")]
    OrderRefunded,
    #[serde(rename = "Order Completed")]
    OrderCompleted,
}

/// Full order-leg lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderLegStatus {
    Waiting,
    PendingProviderOrder,
    CreatingProviderOrder,
    CreatingProviderOrderFailed,
    CreatingProviderOrderHalted,
    CreatingProviderOrderCompleted,
    SendingToProviderDeposit,
    SendingToProviderDepositFailed,
    SendingToProviderDepositHalted,
    SendingToProviderDepositCompleted,
    Pending,
    ProviderDepositDetected,
    ProviderDepositConfirmed,
    ProviderExchangeConfirmed,
    ProviderWithdrawalConfirmed,
    Expired,
    Halted,
    Failed,
    Refunded,
    Completed,
}

/// Condensed order-leg status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderLegStatusShort {
    Waiting,
    Pending,
    Sending,
    Confirming,
    Exchanging,
    Withdrawing,
    Expired,
    Halted,
    Failed,
    Refunded,
    Completed,
}
