//! State Management
//!
//! Dashboard state and the polling query that feeds it.

pub mod global;
pub mod query;

pub use global::{provide_dashboard_state, use_dashboard_state};
pub use query::use_asset_query;
