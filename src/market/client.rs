//! Price API Client
//!
//! HTTP client for the CoinCap-style `/assets` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{
    status_message, AssetList, AssetsResponse, FetchError, FetchResult, DEFAULT_ENDPOINT,
    DEFAULT_LIMIT,
};

/// Anything that can produce the current asset list.
///
/// One call is one attempt: implementations do not retry.
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Short name used in log lines
    fn name(&self) -> &str;

    /// Fetch the current asset list, in rank order
    async fn fetch_assets(&self) -> FetchResult<AssetList>;
}

/// Configuration for the price API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Asset listing URL, without query string
    pub endpoint: String,
    /// Value of the `limit` query parameter
    pub limit: usize,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            limit: DEFAULT_LIMIT,
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Price API client
pub struct PriceApiClient {
    client: Client,
    config: ClientConfig,
}

impl PriceApiClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("coinwatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn map_request_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.config.request_timeout.as_millis() as u64)
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl AssetSource for PriceApiClient {
    fn name(&self) -> &str {
        &self.config.endpoint
    }

    async fn fetch_assets(&self) -> FetchResult<AssetList> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("limit", self.config.limit)])
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: status_message(&text, status.canonical_reason().unwrap_or("Unknown")),
            });
        }

        let body = response.text().await.map_err(|e| self.map_request_error(e))?;
        let mut parsed: AssetsResponse = serde_json::from_str(&body)?;
        parsed.data.truncate(self.config.limit);

        tracing::debug!(
            "Fetched {} assets from {}",
            parsed.data.len(),
            self.config.endpoint
        );

        Ok(parsed.data)
    }
}
