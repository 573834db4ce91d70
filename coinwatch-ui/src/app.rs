//! App Root Component
//!
//! Header, dashboard page and footer with refresh status.

use leptos::*;

use coinwatch::view::PAGE_TITLE;

use crate::components::InlineLoading;
use crate::pages::Dashboard;
use crate::state::{provide_dashboard_state, use_asset_query, use_dashboard_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let query = use_asset_query();
    provide_dashboard_state(query);

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <header class="bg-gray-800 border-b border-gray-700 py-4 px-4">
                <h1 class="container mx-auto text-2xl font-bold">{PAGE_TITLE}</h1>
            </header>

            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <Dashboard />
            </main>

            <Footer />
        </div>
    }
}

/// Footer showing the last successful load and a refresh indicator
#[component]
fn Footer() -> impl IntoView {
    let state = use_dashboard_state();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">{move || state.sync_label()}</div>

                {move || {
                    if state.is_fetching() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <InlineLoading />
                                <span>"Refreshing..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
