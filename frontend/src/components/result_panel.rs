//! Result panel: generated-image display, download, open-in-new-tab.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::config::DOWNLOAD_FILENAME;
use crate::types::SubmissionPhase;

/// Download the result through a synthetic anchor click, so the browser
/// saves it under a suggested filename instead of navigating to it.
fn trigger_download(url: &str, filename: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(element), Some(body)) = (document.create_element("a"), document.body()) {
                if let Ok(anchor) = element.dyn_into::<HtmlAnchorElement>() {
                    anchor.set_href(url);
                    anchor.set_download(filename);
                    if body.append_child(&anchor).is_ok() {
                        anchor.click();
                        let _ = body.remove_child(&anchor);
                    }
                }
            }
        }
    }
}

#[component]
pub fn ResultPanel(
    phase: ReadSignal<SubmissionPhase>,
    result_url: ReadSignal<Option<String>>,
) -> impl IntoView {
    let on_download = move |_| {
        if let Some(url) = result_url.get() {
            log::info!("💾 Downloading result as {}", DOWNLOAD_FILENAME);
            trigger_download(&url, DOWNLOAD_FILENAME);
        }
    };

    view! {
        <div class="result-card">
            <h2>"Your preview"</h2>
            <p class="result-caption">
                "Generated image will appear here. You can open it in a new "
                "tab or download it."
            </p>

            <div class="result-frame">
                {move || match result_url.get() {
                    Some(url) => view! {
                        <img src=url alt="Result" class="result-img"/>
                    }.into_view(),
                    None => view! {
                        <div class="result-placeholder">
                            <span>
                                {move || if phase.get().is_busy() {
                                    "Generating your image..."
                                } else {
                                    "Waiting for your first generation ✨"
                                }}
                            </span>
                        </div>
                    }.into_view(),
                }}
            </div>

            <div class="result-actions">
                <button
                    type="button"
                    class="btn-secondary"
                    on:click=on_download
                    disabled=move || result_url.get().is_none()
                >
                    "Download image"
                </button>
                <Show
                    when=move || result_url.get().is_some()
                    fallback=|| view! { }
                >
                    <a
                        href=move || result_url.get().unwrap_or_default()
                        target="_blank"
                        rel="noreferrer"
                        class="link-open"
                    >
                        "Open full size ↗"
                    </a>
                </Show>
            </div>
        </div>
    }
}
