//! "Detailed Analysis" panel: one colored card per finding category.
//!
//! Cards follow the backend's category order and list findings in input
//! order; the card color comes from `CategoryStyle`.

use leptos::prelude::*;

use crate::net::types::FindingGroup;
use crate::util::category::CategoryStyle;

#[component]
pub fn FindingsPanel(groups: Vec<FindingGroup>) -> impl IntoView {
    let cards = groups
        .into_iter()
        .map(|group| view! { <FindingCard group/> })
        .collect_view();

    view! {
        <section class="result-panel">
            <h2 class="result-panel__title">"Detailed Analysis"</h2>
            <div class="findings-grid">{cards}</div>
        </section>
    }
}

#[component]
fn FindingCard(group: FindingGroup) -> impl IntoView {
    let style = CategoryStyle::from_label(&group.category);
    let items = group
        .findings
        .into_iter()
        .map(|finding| view! { <li class="finding-card__item">{finding}</li> })
        .collect_view();

    view! {
        <div class=style.card_class()>
            <h3 class="finding-card__title">
                <span class=style.dot_class()></span>
                {group.category}
            </h3>
            <ul class="finding-card__items">{items}</ul>
        </div>
    }
}
