//! Asset Detail Component
//!
//! Detail panel and trend chart for the selected asset.

use leptos::*;

use coinwatch::view::CHART_TITLE;
use coinwatch::{AssetDetail, DetailView};

use crate::components::PriceChart;

#[component]
pub fn AssetDetailPanel(detail: DetailView) -> impl IntoView {
    match detail {
        DetailView::Empty => view! {}.into_view(),
        DetailView::Missing { name, symbol } => view! {
            <section class="bg-gray-800 rounded-xl p-6 text-gray-400">
                {format!("{} ({}) is no longer in the list", name, symbol)}
            </section>
        }
        .into_view(),
        DetailView::Asset(detail) => view! { <AssetCard detail=detail /> }.into_view(),
    }
}

#[component]
fn AssetCard(detail: AssetDetail) -> impl IntoView {
    let change_class = match detail.change_24h_value {
        Some(v) if v < 0.0 => "text-red-400",
        Some(_) => "text-green-400",
        None => "text-gray-300",
    };
    let primary = field_rows(&detail.primary_fields(), "text-gray-100");
    let secondary = field_rows(&detail.secondary_fields(), change_class);

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-6">
            <h2 class="text-xl font-semibold">{detail.title.clone()}</h2>

            <div class="grid grid-cols-2 gap-4">
                <dl class="space-y-2">{primary}</dl>
                <dl class="space-y-2">{secondary}</dl>
            </div>

            <div>
                <h3 class="text-lg font-semibold mb-4">{CHART_TITLE}</h3>
                <PriceChart points=detail.trend />
            </div>
        </section>
    }
}

/// Label/value rows; `first_class` styles the first value only
fn field_rows(fields: &[(&'static str, &str)], first_class: &'static str) -> View {
    fields
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let class = if i == 0 { first_class } else { "text-gray-100" };
            view! {
                <div class="flex justify-between">
                    <dt class="text-gray-400">{*label}</dt>
                    <dd class=class>{value.to_string()}</dd>
                </div>
            }
        })
        .collect_view()
}
