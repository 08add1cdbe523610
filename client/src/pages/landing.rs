//! Landing page: pick or drop one report and submit it for analysis.
//!
//! SYSTEM CONTEXT
//! ==============
//! On a successful upload the parsed response is parked in the
//! `NavigationHandoff` context and the router moves to `/response`. Failures
//! raise a blocking alert and leave the selection in place.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::results::NavigationHandoff;
use crate::state::upload::{ACCEPTED_FILE_TYPES, SubmitBlocked, UploadState};
use crate::util::alert::show_alert;

#[component]
pub fn LandingPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let handoff = expect_context::<RwSignal<NavigationHandoff>>();
    let upload = RwSignal::new(UploadState::default());
    let navigate = use_navigate();

    // Browser `File` handle for the current selection; `UploadState` only
    // carries its display metadata.
    #[cfg(feature = "hydrate")]
    let picked = StoredValue::new_local(None::<web_sys::File>);

    let on_browse = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(file) = input.files().and_then(|list| list.get(0)) {
                upload.update(|s| s.select(selected_file(&file)));
                picked.set_value(Some(file));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(UploadState::drag_over);
    };

    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(UploadState::drag_leave);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let file = ev.data_transfer().and_then(|dt| dt.files()).and_then(|list| list.get(0));
            upload.update(|s| s.drop_file(file.as_ref().map(selected_file)));
            if file.is_some() {
                picked.set_value(file);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        upload.update(|s| s.drop_file(None));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match upload.try_update(UploadState::begin_submit) {
            Some(Ok(_)) => {}
            Some(Err(SubmitBlocked::InFlight)) => return,
            Some(Err(SubmitBlocked::NoFile)) | None => {
                show_alert(&SubmitBlocked::NoFile.to_string());
                return;
            }
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = picked.get_value() else {
                upload.update(UploadState::finish_submit);
                show_alert(&SubmitBlocked::NoFile.to_string());
                return;
            };
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_report(&config, &file).await {
                    Ok(response) => {
                        handoff.update(|h| h.put(response));
                        upload.try_update(UploadState::finish_submit);
                        navigate(crate::app::RESULTS_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("Error: {e}");
                        upload.try_update(UploadState::finish_submit);
                        show_alert(e.alert_message());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, &navigate, handoff);
            upload.update(UploadState::finish_submit);
        }
    };

    let has_file = move || upload.with(|s| s.selected.is_some());
    let file_name = move || upload.with(|s| s.selected.as_ref().map(|f| f.name.clone()).unwrap_or_default());

    view! {
        <div class="landing-page">
            <div class="landing-page__inner">
                <header class="landing-page__header">
                    <h1>"Medical Report Analyzer"</h1>
                    <p class="landing-page__subtitle">
                        "Upload your medical reports for instant analysis and insights"
                    </p>
                </header>
                <form class="upload-form" on:submit=on_submit>
                    <div
                        class=move || upload.with(|s| s.drop_zone().class())
                        on:dragover=on_drag_over
                        on:dragleave=on_drag_leave
                        on:drop=on_drop
                    >
                        <Show when=has_file>
                            <p class="drop-zone__filename">{file_name}</p>
                        </Show>
                        <div class="drop-zone__prompt" class:drop-zone__prompt--hidden=has_file>
                            <p>"Drop your file here, or"</p>
                            <label class="drop-zone__browse">
                                "browse"
                                <input
                                    class="drop-zone__input"
                                    type="file"
                                    accept=ACCEPTED_FILE_TYPES
                                    on:change=on_browse
                                />
                            </label>
                        </div>
                        <p class="drop-zone__hint">"Supports PDF, JPEG, PNG, DOC files"</p>
                    </div>
                    <button
                        class="upload-form__submit"
                        class:upload-form__submit--ready=move || upload.with(UploadState::can_submit)
                        type="submit"
                        disabled=move || !upload.with(UploadState::can_submit)
                    >
                        {move || upload.with(UploadState::submit_label)}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn selected_file(file: &web_sys::File) -> crate::state::upload::SelectedFile {
    crate::state::upload::SelectedFile { name: file.name(), size: file.size().max(0.0) as u64 }
}
