//! Dashboard Page
//!
//! Asset list beside the detail panel for the selected asset.

use leptos::*;

use coinwatch::PageView;

use crate::components::{AssetDetailPanel, AssetList, ErrorNotice, Loading};
use crate::state::use_dashboard_state;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_dashboard_state();

    move || match state.page.get() {
        PageView::Loading => view! { <Loading /> }.into_view(),
        PageView::Error { message } => view! { <ErrorNotice message=message /> }.into_view(),
        PageView::Ready(page) => view! {
            <div class="space-y-6">
                {page.stale_error.map(|e| view! {
                    <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-2 text-sm">
                        {format!("Refresh failed, showing earlier data: {}", e)}
                    </div>
                })}

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <div class="md:col-span-1">
                        <AssetList title=page.list_title entries=page.entries />
                    </div>
                    <div class="md:col-span-2">
                        <AssetDetailPanel detail=page.detail />
                    </div>
                </div>
            </div>
        }
        .into_view(),
    }
}
