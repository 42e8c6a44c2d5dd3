/// Client configuration for the SplitNOW API.
/// Production base URL for the SplitNOW API.
pub const SPLITNOW_API_URL: &str = "https://splitnow.io/api";

/// Configuration holding the API key and base URL for a client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub api_url: String,
}

impl ClientConfig {
    /// Create a configuration for the production API with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: SPLITNOW_API_URL.into(),
        }
    }

    /// Override the base URL, e.g. for a staging deployment or a local mock.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}
