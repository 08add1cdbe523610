//! "Analyzed Files" panel.

use leptos::prelude::*;

use crate::net::types::AnalyzedFile;
use crate::util::format::file_size_label;

/// Enumerated list of analyzed files with their sizes in KiB.
/// An empty list renders an empty section.
#[component]
pub fn FileList(files: Vec<AnalyzedFile>) -> impl IntoView {
    let rows = files
        .into_iter()
        .map(|file| {
            view! {
                <li class="file-list__item">
                    <span class="file-list__name">{file.filename}</span>
                    <span class="file-list__size">{file_size_label(file.size)}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="result-panel">
            <h2 class="result-panel__title">"Analyzed Files"</h2>
            <ol class="file-list">{rows}</ol>
        </section>
    }
}
