//! Dashboard
//!
//! Owns the latest query snapshot and the selection for one mounted page.
//! There is exactly one writer: whoever drives the page loop.

use crate::market::AssetRecord;
use crate::query::QueryState;
use crate::selection::Selection;
use crate::view::{build_page, DisplayOptions, PageView};

pub struct Dashboard {
    query: QueryState,
    selection: Selection,
    options: DisplayOptions,
}

impl Dashboard {
    pub fn new(options: DisplayOptions) -> Self {
        Self {
            query: QueryState::new(),
            selection: Selection::new(),
            options,
        }
    }

    /// Take a new query snapshot. Selects the first asset on the first
    /// non-empty load; later loads leave the selection alone.
    pub fn apply(&mut self, query: QueryState) {
        self.query = query;
        if let Some(assets) = self.query.data() {
            self.selection.sync_default(assets);
            self.selection.refresh(assets);
        }
    }

    /// Select by 0-based list position
    pub fn select_index(&mut self, index: usize) -> bool {
        let assets = self.query.data().map(Vec::as_slice).unwrap_or_default();
        self.selection.select_index(assets, index)
    }

    /// Select by id or symbol
    pub fn select_matching(&mut self, needle: &str) -> bool {
        let assets = self.query.data().map(Vec::as_slice).unwrap_or_default();
        self.selection.select_matching(assets, needle)
    }

    /// Select a specific record
    pub fn select(&mut self, record: &AssetRecord) {
        self.selection.select(record);
    }

    /// Current list, empty before the first successful load
    pub fn assets(&self) -> &[AssetRecord] {
        self.query.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn view(&self) -> PageView {
        build_page(&self.query, &self.selection, &self.options)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DisplayOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::DetailView;
    use chrono::Utc;

    fn loaded(ids: &[&str]) -> QueryState {
        let mut state = QueryState::new();
        state.succeed(
            ids.iter()
                .map(|id| AssetRecord::new(*id, id.to_uppercase(), id.to_uppercase()).price("100.00"))
                .collect(),
            Utc::now(),
        );
        state
    }

    fn detail_symbol(dashboard: &Dashboard) -> Option<String> {
        match dashboard.view() {
            PageView::Ready(view) => match view.detail {
                DetailView::Asset(detail) => Some(detail.symbol),
                _ => None,
            },
            _ => None,
        }
    }

    #[test]
    fn test_first_load_selects_first_entry() {
        let mut dashboard = Dashboard::default();
        assert_eq!(dashboard.view(), PageView::Loading);

        dashboard.apply(loaded(&["bitcoin", "ethereum"]));
        assert_eq!(dashboard.selection().selected_id(), Some("bitcoin"));
        assert_eq!(detail_symbol(&dashboard).as_deref(), Some("BITCOIN"));
    }

    #[test]
    fn test_later_loads_keep_selection() {
        let mut dashboard = Dashboard::default();
        dashboard.apply(loaded(&["bitcoin", "ethereum"]));
        dashboard.apply(loaded(&["ethereum", "bitcoin"]));
        assert_eq!(dashboard.selection().selected_id(), Some("bitcoin"));
    }

    #[test]
    fn test_click_changes_detail() {
        let mut dashboard = Dashboard::default();
        dashboard.apply(loaded(&["bitcoin", "ethereum", "solana"]));

        assert!(dashboard.select_index(2));
        assert_eq!(detail_symbol(&dashboard).as_deref(), Some("SOLANA"));

        assert!(dashboard.select_matching("ethereum"));
        assert_eq!(detail_symbol(&dashboard).as_deref(), Some("ETHEREUM"));

        dashboard.apply(loaded(&["solana", "ethereum"]));
        assert_eq!(dashboard.selection().selected_id(), Some("ethereum"));
    }

    #[test]
    fn test_empty_first_load_defers_default() {
        let mut dashboard = Dashboard::default();
        dashboard.apply(loaded(&[]));
        assert_eq!(dashboard.selection().selected_id(), None);

        dashboard.apply(loaded(&["solana"]));
        assert_eq!(dashboard.selection().selected_id(), Some("solana"));
    }

    #[test]
    fn test_error_then_recovery() {
        let mut dashboard = Dashboard::default();
        dashboard.apply(loaded(&["bitcoin"]));

        let mut failed = dashboard.query().clone();
        failed.fail("Request timed out after 10000 ms", Utc::now());
        dashboard.apply(failed);
        assert!(matches!(dashboard.view(), PageView::Error { .. }));
        assert_eq!(dashboard.selection().selected_id(), Some("bitcoin"));

        dashboard.apply(loaded(&["bitcoin"]));
        assert!(matches!(dashboard.view(), PageView::Ready(_)));
    }
}
