//! Photo upload form with preview and submission handling.
//!
//! Owns the two upload slots, the prompt, and the request-shape toggle;
//! drives the submission cycle and reports its outcome through the
//! phase / error / result signals passed in by the page.

use leptos::*;
use web_sys::{Event, HtmlInputElement, SubmitEvent};

use crate::config::{api_url, DEFAULT_PROMPT};
use crate::services::{personalize, UploadSlot};
use crate::types::{PersonalizationRequest, SubmissionMode, SubmissionPhase, Template};

#[component]
pub fn UploadForm(
    phase: ReadSignal<SubmissionPhase>,
    set_phase: WriteSignal<SubmissionPhase>,
    error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
    set_result_url: WriteSignal<Option<String>>,
) -> impl IntoView {
    let (main_slot, set_main_slot) = create_signal(None::<UploadSlot>);
    let (optional_slot, set_optional_slot) = create_signal(None::<UploadSlot>);
    let (prompt, set_prompt) = create_signal(DEFAULT_PROMPT.to_string());
    let (mode, set_mode) = create_signal(SubmissionMode::Reference);
    let (template, set_template) = create_signal(Template::Classic);

    // Writing a slot signal drops the previous UploadSlot, which revokes
    // its preview URL. Selection itself never fails; validation waits for
    // submit.
    let on_main_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));

        // A different main image makes the previous output and error stale.
        set_error.set(None);
        set_result_url.set(None);
        set_phase.set(SubmissionPhase::Idle);

        match file {
            Some(file) => {
                log::info!("Main image selected: {}", file.name());
                set_main_slot.set(Some(UploadSlot::new(file)));
            }
            None => set_main_slot.set(None),
        }
    };

    let on_optional_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        set_optional_slot.set(file.map(UploadSlot::new));
    };

    let on_template_change = move |ev: Event| {
        if let Some(selected) = Template::from_id(&event_target_value(&ev)) {
            set_template.set(selected);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        set_phase.set(SubmissionPhase::Validating);

        let main = main_slot.with(|slot| slot.as_ref().map(|s| s.file().clone()));
        let request = match mode.get() {
            SubmissionMode::Reference => {
                let optional =
                    optional_slot.with(|slot| slot.as_ref().map(|s| s.file().clone()));
                PersonalizationRequest::freeform(main, optional, prompt.get())
            }
            SubmissionMode::Template => {
                PersonalizationRequest::templated(main, template.get(), prompt.get())
            }
        };

        // Validation failures never reach the network.
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                log::warn!("Submission rejected locally: {}", e);
                set_error.set(Some(e.to_string()));
                set_phase.set(SubmissionPhase::Failed);
                return;
            }
        };

        set_error.set(None);
        set_result_url.set(None);
        set_phase.set(SubmissionPhase::InFlight);

        spawn_local(async move {
            log::info!("📤 Submitting personalization request...");

            // Every arm ends in a terminal phase; the busy flag derived
            // from it clears on success and failure alike.
            match personalize(&request, api_url()).await {
                Ok(url) => {
                    log::info!("✅ Generation succeeded: {}", url);
                    set_result_url.set(Some(url));
                    set_phase.set(SubmissionPhase::Succeeded);
                }
                Err(e) => {
                    log::error!("❌ Generation failed: {}", e);
                    set_error.set(Some(e.to_string()));
                    set_phase.set(SubmissionPhase::Failed);
                }
            }
        });
    };

    view! {
        <form class="form" on:submit=on_submit>
            // Main image (required)
            <div class="field">
                <label class="label">
                    "Main image"
                    <span class="chip chip-required">"required"</span>
                </label>
                <div class="upload-row">
                    <label class="upload-box">
                        <span class="upload-title">"Click to upload"</span>
                        <span class="upload-subtext">"JPG / PNG"</span>
                        <input
                            type="file"
                            accept="image/*"
                            style="display:none"
                            on:change=on_main_change
                        />
                    </label>
                    <Show
                        when=move || main_slot.with(|slot| slot.is_some())
                        fallback=|| view! { }
                    >
                        <img
                            class="preview-img"
                            alt="Main preview"
                            src=move || main_slot.with(|slot| {
                                slot.as_ref().and_then(|s| s.preview_url().map(String::from))
                            })
                        />
                    </Show>
                </div>
            </div>

            // Request shape: free reference image or enumerated template
            <div class="field">
                <label class="label">"Personalization"</label>
                <div class="mode-row">
                    <label class="mode-option">
                        <input
                            type="radio"
                            name="mode"
                            prop:checked=move || mode.get() == SubmissionMode::Reference
                            on:change=move |_| set_mode.set(SubmissionMode::Reference)
                        />
                        "Reference image"
                    </label>
                    <label class="mode-option">
                        <input
                            type="radio"
                            name="mode"
                            prop:checked=move || mode.get() == SubmissionMode::Template
                            on:change=move |_| set_mode.set(SubmissionMode::Template)
                        />
                        "Template"
                    </label>
                </div>
            </div>

            <Show
                when=move || mode.get() == SubmissionMode::Reference
                fallback=move || view! {
                    <div class="field">
                        <label class="label">"Template"</label>
                        <select class="template-select" on:change=on_template_change>
                            {Template::ALL
                                .into_iter()
                                .map(|t| view! {
                                    <option value=t.id() selected=move || template.get() == t>
                                        {t.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                }
            >
                <div class="field">
                    <label class="label">
                        "Personalization image"
                        <span class="chip chip-optional">"optional"</span>
                    </label>
                    <p class="hint">
                        "Use this as a pose / style reference. If you skip it, "
                        "we'll just reuse the main image."
                    </p>
                    <div class="upload-row">
                        <label class="upload-box upload-box-ghost">
                            <span class="upload-title">"Click to upload"</span>
                            <span class="upload-subtext">"JPG / PNG"</span>
                            <input
                                type="file"
                                accept="image/*"
                                style="display:none"
                                on:change=on_optional_change
                            />
                        </label>
                        <Show
                            when=move || optional_slot.with(|slot| slot.is_some())
                            fallback=|| view! { }
                        >
                            <img
                                class="preview-img"
                                alt="Optional preview"
                                src=move || optional_slot.with(|slot| {
                                    slot.as_ref().and_then(|s| s.preview_url().map(String::from))
                                })
                            />
                        </Show>
                    </div>
                </div>
            </Show>

            // Prompt
            <div class="field">
                <label class="label">"Prompt"</label>
                <textarea
                    class="prompt-input"
                    rows=3
                    prop:value=prompt
                    placeholder="e.g. high-quality studio portrait, soft lighting, cinematic look"
                    on:input=move |ev| set_prompt.set(event_target_value(&ev))
                ></textarea>
            </div>

            <Show
                when=move || error.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-banner">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <button
                type="submit"
                class="btn-primary"
                disabled=move || phase.get().is_busy()
            >
                {move || if phase.get().is_busy() {
                    "Generating..."
                } else {
                    "Generate image"
                }}
            </button>
        </form>
    }
}
