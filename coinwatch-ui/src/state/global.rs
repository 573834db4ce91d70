//! Global Application State
//!
//! Reactive wrapper around the shared `Dashboard`.

use leptos::*;

use coinwatch::{Dashboard, DisplayOptions, PageView, QueryState};

/// Global dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Latest query snapshot from the poller
    pub query: RwSignal<QueryState>,
    /// Query snapshot plus selection
    pub dashboard: RwSignal<Dashboard>,
    /// Page view model, recomputed on any change
    pub page: Memo<PageView>,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state(query: RwSignal<QueryState>) {
    let dashboard = create_rw_signal(Dashboard::new(DisplayOptions::default()));

    create_effect(move |_| {
        let snapshot = query.get();
        dashboard.update(|d| d.apply(snapshot));
    });

    let page = create_memo(move |_| dashboard.with(Dashboard::view));

    provide_context(DashboardState {
        query,
        dashboard,
        page,
    });
}

/// Fetch the dashboard state from context
pub fn use_dashboard_state() -> DashboardState {
    use_context::<DashboardState>().expect("DashboardState not found")
}

impl DashboardState {
    /// Select a list entry by position
    pub fn select_index(&self, index: usize) {
        self.dashboard.update(|d| {
            d.select_index(index);
        });
    }

    /// A fetch is running
    pub fn is_fetching(&self) -> bool {
        self.query.with(QueryState::is_fetching)
    }

    /// Footer text for the last successful load
    pub fn sync_label(&self) -> String {
        self.query.with(sync_label)
    }
}

pub fn sync_label(query: &QueryState) -> String {
    query
        .data_updated_at()
        .map(|at| format!("Updated {}", at.format("%H:%M:%S")))
        .unwrap_or_else(|| "Not synced".to_string())
}
