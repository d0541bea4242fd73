use leptos::*;
use crate::config::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-left">
                <div class="logo-dot"></div>
                <span class="logo-text">{APP_NAME}</span>
            </div>
            <div class="nav-right">
                <span class="nav-pill">"beta"</span>
            </div>
        </nav>
    }
}
