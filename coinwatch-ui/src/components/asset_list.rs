//! Asset List Component
//!
//! Selectable list of the top assets in response order.

use leptos::*;

use coinwatch::ListEntry;

use crate::state::use_dashboard_state;

#[component]
pub fn AssetList(
    #[prop(into)] title: String,
    entries: Vec<ListEntry>,
) -> impl IntoView {
    let state = use_dashboard_state();

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">{title}</h2>
            <ul class="space-y-2">
                {entries
                    .into_iter()
                    .map(|entry| {
                        let index = entry.index;
                        let class = if entry.selected {
                            "px-4 py-2 rounded-lg cursor-pointer bg-primary-600 text-white"
                        } else {
                            "px-4 py-2 rounded-lg cursor-pointer bg-gray-700 text-gray-300 hover:bg-gray-600"
                        };
                        view! {
                            <li class=class on:click=move |_| state.select_index(index)>
                                {entry.label}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
