//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Create AI-personalized portraits in seconds"</h1>
            <p class="subtitle">
                "Upload your main photo, optionally add a personalization image "
                "for pose / style, describe what you want - we'll generate a "
                "unique result for you."
            </p>
        </div>
    }
}
