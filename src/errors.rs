/// Error types for the SplitNOW SDK.
///
/// Transport and decode failures are folded into two coarse variants;
/// `/quotes*` and `/orders*` envelope failures surface the provider's own
/// message through [`SplitNowError::Api`].
use rust_decimal::Decimal;
use thiserror::Error;

/// The primary error type for the SplitNOW SDK.
#[derive(Error, Debug)]
pub enum SplitNowError {
    /// The client was constructed with an empty API key.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The transport reported a failure, or the response status was non-2xx.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// A `/quotes*` or `/orders*` envelope came back with `success: false`.
    #[error("api error: {0}")]
    Api(String),

    /// The requested deposit is below the per-order minimum. Raised locally,
    /// before the order-creation request is issued.
    #[error(
        "minimum deposit is {min_amount} {asset_id} ({min_per_wallet} x {wallet_count} wallets)"
    )]
    InsufficientDeposit {
        min_amount: Decimal,
        asset_id: String,
        min_per_wallet: Decimal,
        wallet_count: usize,
    },

    /// No deposit-limit entry exists for the requested asset.
    #[error("no deposit limit found for asset: {0}")]
    UnknownAsset(String),

    /// A response body could not be decoded into the expected type.
    #[error("json error: {0}")]
    Json(String),
}

impl From<reqwest::Error> for SplitNowError {
    fn from(err: reqwest::Error) -> Self {
        SplitNowError::RequestFailed(err.to_string())
    }
}

impl From<serde_json::Error> for SplitNowError {
    fn from(err: serde_json::Error) -> Self {
        SplitNowError::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn insufficient_deposit_reports_computed_minimum() {
        let err = SplitNowError::InsufficientDeposit {
            min_amount: dec!(0.02),
            asset_id: "sol".into(),
            min_per_wallet: dec!(0.01),
            wallet_count: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("0.02"));
        assert!(msg.contains("2 wallets"));
    }

    #[test]
    fn api_error_carries_provider_message() {
        let err = SplitNowError::Api("Quote not found".into());
        assert!(err.to_string().contains("Quote not found"));
    }
}
