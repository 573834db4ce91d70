//! # Coinwatch
//!
//! Crypto price dashboard: polls a public price API, lists the top assets,
//! and shows details plus a 7-point trend chart for the selected one.
//!
//! ## Modules
//!
//! - [`market`]: Asset records and the price API client
//! - [`query`]: Loading/error/success state and the polling task
//! - [`selection`]: The selected asset
//! - [`view`]: Page view model shared by the terminal and browser pages
//! - [`render`]: Terminal rendering
//! - [`dashboard`]: Ties query state and selection together for one page
//!
//! The `client` feature (on by default) adds networking, polling, config
//! files and the `coinwatch` binary. Without it the crate is plain data and
//! formatting, which is what the browser page builds on.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coinwatch::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PriceApiClient::new(ClientConfig::default())?;
//!     let mut poller = AssetPoller::new(Arc::new(client), DEFAULT_POLL_INTERVAL).start();
//!
//!     let mut dashboard = Dashboard::default();
//!     while let Some(state) = poller.changed().await {
//!         dashboard.apply(state);
//!         println!("{}", render_page(&dashboard.view(), &RenderOptions::default()));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod dashboard;
pub mod market;
pub mod query;
pub mod render;
pub mod selection;
pub mod view;

#[cfg(feature = "client")]
pub mod config;

pub use dashboard::Dashboard;

pub use market::{
    parse_numeric, AssetList, AssetRecord, AssetsResponse, FetchError, FetchResult,
    DEFAULT_ENDPOINT, DEFAULT_LIMIT,
};

pub use query::{QueryState, QueryStatus};

pub use selection::{Resolved, Selection};

pub use view::{
    build_page, AssetDetail, ChartScale, DashboardView, DetailView, DisplayOptions, ListEntry,
    PageView, TrendPoint,
};

pub use render::{render_chart, render_page, ChartSize, RenderOptions};

#[cfg(feature = "client")]
pub use market::{AssetSource, ClientConfig, PriceApiClient};

#[cfg(feature = "client")]
pub use query::{AssetPoller, PollerHandle, DEFAULT_POLL_INTERVAL};

#[cfg(feature = "client")]
pub use config::{
    generate_default_config, ApiConfig, Config, ConfigError, DefaultLoad, DisplayConfig,
    LoggingConfig, PollingConfig,
};
