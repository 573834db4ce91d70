//! Loading Component
//!
//! Loading and error placeholders shown in place of the dashboard.

use leptos::*;

use coinwatch::view::{ERROR_TEXT, LOADING_TEXT};

/// Full-page loading indicator
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center space-x-3 py-12 text-gray-300">
            <div class="loading-spinner w-8 h-8" />
            <span>{LOADING_TEXT}</span>
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Error indicator for a failed fetch
#[component]
pub fn ErrorNotice(
    /// Underlying error, shown as secondary text
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 text-center">
            <div class="text-red-400 text-lg font-semibold">{ERROR_TEXT}</div>
            <div class="text-gray-500 text-sm mt-2">{message}</div>
        </div>
    }
}
