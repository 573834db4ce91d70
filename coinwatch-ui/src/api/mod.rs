//! Price API access

mod client;

pub use client::{fetch_assets, get_api_url};
