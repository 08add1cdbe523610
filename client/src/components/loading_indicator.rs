//! Spinner shown while the results page has no data.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__spinner" aria-hidden="true"></div>
            <p class="loading__label">"Loading analysis results..."</p>
        </div>
    }
}
