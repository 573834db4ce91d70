//! Market Data
//!
//! Asset records from the public price API and the client that fetches them.

mod error;
mod types;

#[cfg(feature = "client")]
mod client;

pub use error::{status_message, FetchError, FetchResult, MAX_STATUS_MESSAGE};
pub use types::{parse_numeric, AssetList, AssetRecord, AssetsResponse};

/// Default asset listing endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.coincap.io/v2/assets";

/// Default number of assets requested per fetch
pub const DEFAULT_LIMIT: usize = 10;

#[cfg(feature = "client")]
pub use client::{AssetSource, ClientConfig, PriceApiClient};
