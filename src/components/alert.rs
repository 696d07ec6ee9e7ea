//! Status Banners
//!
//! Error banner and the loading indicator.

use leptos::prelude::*;

/// Red banner, hidden while `message` is empty.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="alert alert-error" role="alert">
                <span class="alert-icon">"⚠"</span>
                <p class="alert-text">{move || message.get()}</p>
            </div>
        </Show>
    }
}

#[component]
pub fn LoadingIndicator(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="loading">
            <span class="spinner"></span>
            <p class="loading-text">{label}</p>
        </div>
    }
}
