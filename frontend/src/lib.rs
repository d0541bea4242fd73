//! InstantID Studio - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading one or two photos, describing the
//! desired result, and generating an AI-personalized portrait through the
//! remote personalization service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (brand bar)                                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadForm (slots, prompt, submit)                     │
//! │  └── ResultPanel (generated image, download)                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (SubmissionPhase, PersonalizationRequest, etc.)
//! - [`components`] - UI components (Header, UploadForm, ResultPanel, etc.)
//! - [`services`] - Backend communication and preview lifetime management

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Submission
    SubmissionPhase, SubmissionMode, Template, PersonalizationRequest,
    // API
    GenerateResponse, ErrorBody,
    // Errors
    SubmitError,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 InstantID Studio - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Submission state shared between the form and the result panel.
    // One form instance means at most one request in flight.
    let (phase, set_phase) = create_signal(SubmissionPhase::Idle);
    let (error, set_error) = create_signal(None::<String>);
    let (result_url, set_result_url) = create_signal(None::<String>);

    view! {
        <Header/>

        <div class="main-layout">
            <section class="left-panel">
                <Hero/>

                <UploadForm
                    phase=phase
                    set_phase=set_phase
                    error=error
                    set_error=set_error
                    set_result_url=set_result_url
                />
            </section>

            <section class="right-panel">
                <ResultPanel
                    phase=phase
                    result_url=result_url
                />
            </section>
        </div>

        <Footer/>
    }
}
