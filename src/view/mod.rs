//! Page View Model
//!
//! Turns the query state and the selection into exactly what the page shows.
//! Both the terminal renderer and the browser components read this model, so
//! the loading/error/success rules and the detail formatting are shared.

pub mod format;
pub mod trend;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::market::AssetRecord;
use crate::query::{QueryState, QueryStatus};
use crate::selection::{Resolved, Selection};

pub use trend::{synthetic_trend, trend_for, ChartScale, TrendPoint, TREND_MULTIPLIERS};

pub const PAGE_TITLE: &str = "Crypto Tracker";
pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str = "Error fetching data";
pub const CHART_TITLE: &str = "Price Chart (Last 7 days)";

/// Presentation switches
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    /// Keep showing the last good list under an error banner instead of
    /// replacing the page with the error indicator
    pub show_stale_on_error: bool,
    /// Requested list size, used in the list heading
    pub limit: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_stale_on_error: false,
            limit: crate::market::DEFAULT_LIMIT,
        }
    }
}

/// Whole page
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Loading,
    Error { message: String },
    Ready(DashboardView),
}

/// List plus detail, shown once data is available
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub list_title: String,
    pub entries: Vec<ListEntry>,
    pub detail: DetailView,
    /// Error of the latest attempt when stale data is shown anyway
    pub stale_error: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One selectable list row
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    /// 0-based position in response order
    pub index: usize,
    pub id: String,
    /// "Bitcoin (BTC)"
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    /// Nothing selected (only possible while the list is empty)
    Empty,
    /// The selected asset dropped out of the latest list
    Missing { name: String, symbol: String },
    Asset(AssetDetail),
}

/// Detail panel for one asset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetDetail {
    pub id: String,
    /// "Bitcoin Details"
    pub title: String,
    pub symbol: String,
    pub price: String,
    pub market_cap: String,
    pub change_24h: String,
    /// Parsed change, for up/down styling
    pub change_24h_value: Option<f64>,
    pub volume_24h: String,
    pub supply: String,
    /// Empty when the price does not parse
    pub trend: Vec<TrendPoint>,
}

impl AssetDetail {
    pub fn from_record(asset: &AssetRecord) -> Self {
        Self {
            id: asset.id.clone(),
            title: format!("{} Details", asset.name),
            symbol: asset.symbol.clone(),
            price: format::usd(asset.price_value()),
            market_cap: format::usd(asset.market_cap_value()),
            change_24h: format::percent(asset.change_percent_value()),
            change_24h_value: asset.change_percent_value(),
            volume_24h: format::usd(asset.volume_value()),
            supply: format::fixed2(asset.supply_value()),
            trend: trend_for(asset),
        }
    }

    /// Left column of the detail panel as (label, value)
    pub fn primary_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("Symbol", self.symbol.as_str()),
            ("Price", self.price.as_str()),
            ("Market Cap", self.market_cap.as_str()),
        ]
    }

    /// Right column of the detail panel as (label, value)
    pub fn secondary_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("24h Change", self.change_24h.as_str()),
            ("Volume (24h)", self.volume_24h.as_str()),
            ("Supply", self.supply.as_str()),
        ]
    }
}

/// Build the page for the given query state and selection
pub fn build_page(query: &QueryState, selection: &Selection, options: &DisplayOptions) -> PageView {
    let stale_error = match query.status() {
        QueryStatus::Loading => return PageView::Loading,
        QueryStatus::Error => match (query.data(), options.show_stale_on_error) {
            (Some(_), true) => query.error().map(str::to_string),
            _ => {
                return PageView::Error {
                    message: query.error().unwrap_or(ERROR_TEXT).to_string(),
                }
            }
        },
        QueryStatus::Success => None,
    };

    let assets: &[AssetRecord] = query.data().map(Vec::as_slice).unwrap_or_default();

    let entries = assets
        .iter()
        .enumerate()
        .map(|(index, asset)| ListEntry {
            index,
            id: asset.id.clone(),
            label: asset.label(),
            selected: selection.is_selected(asset),
        })
        .collect();

    let detail = match selection.resolve(assets) {
        Resolved::Empty => DetailView::Empty,
        Resolved::Live(asset) => DetailView::Asset(AssetDetail::from_record(asset)),
        Resolved::Missing(snapshot) => DetailView::Missing {
            name: snapshot.name.clone(),
            symbol: snapshot.symbol.clone(),
        },
    };

    PageView::Ready(DashboardView {
        list_title: format!("Top {} Cryptocurrencies", options.limit),
        entries,
        detail,
        stale_error,
        updated_at: query.data_updated_at(),
    })
}
