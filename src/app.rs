use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::ThemeConfig;
use crate::pages::home::HomePage;
use crate::theme::ThemeProvider;

#[component]
pub fn App(config: ThemeConfig) -> impl IntoView {
    view! {
        <ThemeProvider config=config>
            <Router>
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </Router>
        </ThemeProvider>
    }
}
