//! Query state
//!
//! The observable lifecycle of the polled asset list. Both the terminal poller
//! and the browser page drive this reducer, so the loading/error/success rules
//! live in one place.

use chrono::{DateTime, Utc};

use crate::market::AssetList;

/// Three-way status the page renders from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// No data yet and no error
    Loading,
    /// The most recent attempt failed
    Error,
    /// Data present and the most recent attempt succeeded
    Success,
}

/// Cached result of the asset query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    data: Option<AssetList>,
    error: Option<String>,
    is_fetching: bool,
    data_updated_at: Option<DateTime<Utc>>,
    error_updated_at: Option<DateTime<Utc>>,
    /// Completed attempts, successful or not
    fetch_count: u64,
    /// Failures since the last success
    failure_count: u32,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> QueryStatus {
        if self.error.is_some() {
            QueryStatus::Error
        } else if self.data.is_some() {
            QueryStatus::Success
        } else {
            QueryStatus::Loading
        }
    }

    /// Mark an attempt as started
    pub fn begin_fetch(&mut self) {
        self.is_fetching = true;
    }

    /// Replace the cached list with a fresh one and clear any error
    pub fn succeed(&mut self, data: AssetList, at: DateTime<Utc>) {
        self.data = Some(data);
        self.error = None;
        self.is_fetching = false;
        self.data_updated_at = Some(at);
        self.fetch_count += 1;
        self.failure_count = 0;
    }

    /// Record a failed attempt. The last good list is kept.
    pub fn fail(&mut self, error: impl ToString, at: DateTime<Utc>) {
        self.error = Some(error.to_string());
        self.is_fetching = false;
        self.error_updated_at = Some(at);
        self.fetch_count += 1;
        self.failure_count = self.failure_count.saturating_add(1);
    }

    /// Last successfully fetched list, even while in the error state
    pub fn data(&self) -> Option<&AssetList> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    pub fn data_updated_at(&self) -> Option<DateTime<Utc>> {
        self.data_updated_at
    }

    pub fn error_updated_at(&self) -> Option<DateTime<Utc>> {
        self.error_updated_at
    }

    pub fn fetch_count(&self) -> u64 {
        self.fetch_count
    }

    pub fn failure_count(&self) -> u32 {
        self.failure_count
    }
}
