use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container header-row">
                <h1 class="site-title">"Rust Theme App"</h1>
                <ThemeToggle />
            </div>
        </header>
    }
}
