//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{BACKEND_URL_META, ClientConfig};
use crate::pages::{landing::LandingPage, response::ResponsePage};
use crate::state::results::NavigationHandoff;

/// Route of the upload form.
pub const LANDING_PATH: &str = "/";
/// Route of the results view.
pub const RESULTS_PATH: &str = "/response";

/// HTML shell rendered on the server for SSR + hydration.
///
/// The backend base URL is written into a `<meta>` tag so the hydrate entry
/// point can rebuild the same `ClientConfig` in the browser.
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    let backend_url = config.backend_url().unwrap_or_default().to_owned();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=BACKEND_URL_META content=backend_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the injected backend config and the navigation handoff, and sets
/// up client-side routing.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    provide_context(config);
    provide_context(RwSignal::new(NavigationHandoff::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/report-analyzer.css"/>
        <Title text="Medical Report Analyzer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("response") view=ResponsePage/>
            </Routes>
        </Router>
    }
}
