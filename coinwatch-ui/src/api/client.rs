//! HTTP API Client
//!
//! Fetches the asset list from the public price API.

use futures_util::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use coinwatch::market;
use coinwatch::{AssetList, AssetsResponse, FetchError, DEFAULT_ENDPOINT, DEFAULT_LIMIT};

/// Local storage key for an endpoint override, set from the browser console
const API_URL_KEY: &str = "coinwatch_api_url";

/// Per-request timeout
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Get the endpoint from local storage or use the default
pub fn get_api_url() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    normalize_url(stored.as_deref().unwrap_or(DEFAULT_ENDPOINT))
}

/// Trim whitespace and any trailing slash
fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Full request URL with the limit parameter
pub fn assets_url(endpoint: &str) -> String {
    format!("{}?limit={}", normalize_url(endpoint), DEFAULT_LIMIT)
}

/// Fetch the top assets. One attempt, no retry.
pub async fn fetch_assets(endpoint: &str) -> Result<AssetList, FetchError> {
    let request = Request::get(&assets_url(endpoint)).send();
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);

    let response = match select(Box::pin(request), Box::pin(timeout)).await {
        Either::Left((result, _)) => result.map_err(|e| FetchError::Network(e.to_string()))?,
        Either::Right(_) => return Err(FetchError::Timeout(REQUEST_TIMEOUT_MS as u64)),
    };

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::Status {
            status: response.status(),
            message: market::status_message(&body, &response.status_text()),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let mut parsed: AssetsResponse = serde_json::from_str(&body)?;
    parsed.data.truncate(DEFAULT_LIMIT);

    Ok(parsed.data)
}
