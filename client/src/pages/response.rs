//! Results page for one analysis.
//!
//! SYSTEM CONTEXT
//! ==============
//! Normally entered right after an upload, with the response waiting in the
//! `NavigationHandoff` context. Entered directly (reload, bookmark), it
//! issues a one-shot fallback fetch. Panels render only once data exists;
//! until then, or if the fetch fails or never returns, the loader stays up.

use leptos::prelude::*;

use crate::app::LANDING_PATH;
use crate::components::file_list::FileList;
use crate::components::findings_panel::FindingsPanel;
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::status_banner::StatusBanner;
use crate::config::ClientConfig;
use crate::net::types::AnalysisResponse;
use crate::state::results::{NavigationHandoff, ResultsSource};

#[component]
pub fn ResponsePage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let handoff = expect_context::<RwSignal<NavigationHandoff>>();
    let source = RwSignal::new(ResultsSource::from_handoff(
        handoff.try_update(NavigationHandoff::take).flatten(),
    ));

    #[cfg(feature = "hydrate")]
    {
        if source.with_untracked(ResultsSource::needs_fetch) {
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::fetch_latest_analysis(&config).await;
                if let Err(e) = &outcome {
                    log::error!("Error fetching response data: {e}");
                }
                // The page may be gone by now; a disposed signal just drops the result.
                source.try_update(|s| s.resolve(outcome));
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <Show
            when=move || !source.with(ResultsSource::is_loading)
            fallback=|| view! { <LoadingIndicator/> }
        >
            {move || {
                source
                    .with(|s| s.data().cloned())
                    .map(|response| view! { <AnalysisReport response/> })
            }}
        </Show>
    }
}

#[component]
fn AnalysisReport(response: AnalysisResponse) -> impl IntoView {
    view! {
        <div class="results-page">
            <div class="results-page__inner">
                <header class="results-page__header">
                    <h1>"Analysis Results"</h1>
                    <a class="results-page__back" href=LANDING_PATH>"← New Analysis"</a>
                </header>
                <FileList files=response.files/>
                <StatusBanner risk=response.risk/>
                <FindingsPanel groups=response.findings/>
            </div>
        </div>
    }
}
