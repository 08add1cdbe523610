//! "Medical Status" panel driven by the risk flag.

use leptos::prelude::*;

use crate::net::types::RiskStatus;
use crate::util::risk::risk_banner;

#[component]
pub fn StatusBanner(risk: RiskStatus) -> impl IntoView {
    let banner = risk_banner(risk);
    let class = format!("status-banner status-banner--{}", banner.modifier);

    view! {
        <section class="result-panel">
            <h2 class="result-panel__title">"Medical Status"</h2>
            <div class=class role="status">
                <p class="status-banner__headline">{banner.headline}</p>
                <p class="status-banner__detail">{banner.detail}</p>
            </div>
        </section>
    }
}
