//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod asset_detail;
pub mod asset_list;
pub mod chart;
pub mod loading;

pub use asset_detail::AssetDetailPanel;
pub use asset_list::AssetList;
pub use chart::PriceChart;
pub use loading::{ErrorNotice, InlineLoading, Loading};
