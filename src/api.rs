/// REST API client for SplitNOW.
///
/// Typed wrappers for every SplitNOW endpoint. Uses reqwest for HTTP with
/// JSON support. Endpoints under /quotes and /orders wrap their bodies in a
/// `{success, data, error}` envelope; everything else returns its body
/// directly.
use std::collections::HashMap;

use log::debug;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::errors::SplitNowError;
use crate::models::*;

/// Low-level REST API client for SplitNOW.
#[derive(Debug, Clone)]
pub struct SplitNowApi {
    client: Client,
    config: ClientConfig,
}

/// Response wrapper used by the /quotes and /orders endpoints.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

impl SplitNowApi {
    /// Create a new API client with the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Build a request with the standard headers attached.
    fn request(&self, method: Method, endpoint: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.api_url, endpoint);
        self.client
            .request(method, url)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.config.api_key)
    }

    /// Send a request and return the raw body, mapping transport failures
    /// and non-2xx statuses to `RequestFailed`.
    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<String, SplitNowError> {
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(
            "api.send status={} body_len={}",
            status,
            text.len()
        );
        if !status.is_success() {
            return Err(SplitNowError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(text)
    }

    fn decode<T: DeserializeOwned>(text: &str) -> Result<T, SplitNowError> {
        serde_json::from_str(text)
            .map_err(|e| SplitNowError::Json(format!("failed to parse response: {e}")))
    }

    /// Unwrap a `{success, data, error}` envelope, surfacing the provider's
    /// error message when `success` is false.
    fn unwrap_envelope<T: DeserializeOwned>(text: &str) -> Result<T, SplitNowError> {
        let envelope: Envelope<T> = Self::decode(text)?;
        if !envelope.success {
            return Err(SplitNowError::Api(
                envelope.error.unwrap_or_else(|| "unknown error".into()),
            ));
        }
        envelope
            .data
            .ok_or_else(|| SplitNowError::Json("envelope is missing the data field".into()))
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, SplitNowError> {
        let text = self.send(self.request(Method::GET, endpoint)).await?;
        Self::decode(&text)
    }

    async fn get_enveloped<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, SplitNowError> {
        let text = self.send(self.request(Method::GET, endpoint)).await?;
        Self::unwrap_envelope(&text)
    }

    async fn post_enveloped<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, SplitNowError> {
        let text = self
            .send(self.request(Method::POST, endpoint).json(body))
            .await?;
        Self::unwrap_envelope(&text)
    }

    // -----------------------------------------------------------------------
    // Health
    // -----------------------------------------------------------------------

    /// GET /health/ - Whether the API is online and healthy.
    ///
    /// The endpoint replies with plain text; anything other than the literal
    /// `OK` counts as unhealthy.
    pub async fn get_health(&self) -> Result<bool, SplitNowError> {
        debug!("api.get_health");
        let text = self.send(self.request(Method::GET, "/health/")).await?;
        Ok(text == "OK")
    }

    // -----------------------------------------------------------------------
    // Assets
    // -----------------------------------------------------------------------

    /// GET /assets/ - List supported assets.
    pub async fn get_assets(&self) -> Result<Vec<Asset>, SplitNowError> {
        debug!("api.get_assets");
        let resp: AssetsResponse = self.get_json("/assets/").await?;
        Ok(resp.assets)
    }

    /// GET /assets/prices/ - Current asset prices, keyed by asset id.
    pub async fn get_asset_prices(
        &self,
    ) -> Result<HashMap<String, serde_json::Value>, SplitNowError> {
        debug!("api.get_asset_prices");
        let resp: AssetPricesResponse = self.get_json("/assets/prices/").await?;
        Ok(resp.prices)
    }

    /// GET /assets/limits/ - Per-asset deposit limits.
    pub async fn get_asset_deposit_limits(
        &self,
    ) -> Result<Vec<AssetDepositLimit>, SplitNowError> {
        debug!("api.get_asset_deposit_limits");
        let resp: AssetDepositLimitsResponse = self.get_json("/assets/limits/").await?;
        Ok(resp.limits)
    }

    // -----------------------------------------------------------------------
    // Exchangers
    // -----------------------------------------------------------------------

    /// GET /exchangers/ - List supported exchangers.
    pub async fn get_exchangers(&self) -> Result<Vec<Exchanger>, SplitNowError> {
        debug!("api.get_exchangers");
        let resp: ExchangersResponse = self.get_json("/exchangers/").await?;
        Ok(resp.exchangers)
    }

    // -----------------------------------------------------------------------
    // Quotes
    // -----------------------------------------------------------------------

    /// POST /quotes/ - Create a quote. The envelope payload is the new
    /// quote's opaque id.
    pub async fn create_quote(&self, request: &QuoteRequest) -> Result<String, SplitNowError> {
        debug!(
            "api.create_quote from_asset_id={} from_network_id={} outputs={}",
            request.quote_input.from_asset_id,
            request.quote_input.from_network_id,
            request.quote_outputs.len()
        );
        self.post_enveloped("/quotes/", request).await
    }

    /// GET /quotes/{id} - Fetch a quote.
    pub async fn get_quote(&self, quote_id: &str) -> Result<Quote, SplitNowError> {
        debug!("api.get_quote quote_id={}", quote_id);
        self.get_enveloped(&format!("/quotes/{quote_id}")).await
    }

    // -----------------------------------------------------------------------
    // Orders
    // -----------------------------------------------------------------------

    /// POST /orders/ - Create an order. The envelope payload carries the
    /// provider's short order id.
    pub async fn create_order(
        &self,
        request: &OrderRequest,
    ) -> Result<CreatedOrder, SplitNowError> {
        debug!(
            "api.create_order from_asset_id={} quote_id={:?} outputs={}",
            request.order_input.from_asset_id,
            request.quote_id,
            request.order_outputs.len()
        );
        self.post_enveloped("/orders/", request).await
    }

    /// GET /orders/{id} - Fetch an order by its short id.
    pub async fn get_order(&self, order_id: &str) -> Result<Order, SplitNowError> {
        debug!("api.get_order order_id={}", order_id);
        self.get_enveloped(&format!("/orders/{order_id}")).await
    }
}
