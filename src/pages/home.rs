use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::card::Card;
use crate::components::site_header::SiteHeader;
use crate::theme::use_theme;

#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="page home-page">
            <SiteHeader />

            <main class="container content">
                <section class="hero">
                    <h2 class="hero-title">"Welcome to Leptos with Theme Toggle"</h2>
                    <p class="page-description">
                        "This application demonstrates a complete theme system with light, dark, and system \
                         preference detection using a shared theme context."
                    </p>
                    <div class="badge-row">
                        <Badge label="Leptos 0.8" />
                        <Badge label="Reactive Context" />
                        <Badge label="CSS Variables" />
                        <Badge label="WebAssembly" />
                    </div>
                    <p class="theme-status">
                        "Preference: " <strong>{move || theme.theme().label()}</strong>
                        " \u{00B7} Applied: " <strong>{move || theme.resolved_theme().to_string()}</strong>
                    </p>
                </section>

                <div class="card-grid">
                    <Card title="Theme Features" description="Explore the theme functionality">
                        <div class="card-section">
                            <h4>"Available Themes:"</h4>
                            <ul class="muted-list">
                                <li>"\u{2022} Light mode"</li>
                                <li>"\u{2022} Dark mode"</li>
                                <li>"\u{2022} System preference (default)"</li>
                            </ul>
                        </div>
                        <div class="card-section">
                            <h4>"Features:"</h4>
                            <ul class="muted-list">
                                <li>"\u{2022} Persistent theme selection"</li>
                                <li>"\u{2022} System theme detection"</li>
                                <li>"\u{2022} Smooth transitions"</li>
                                <li>"\u{2022} Accessible controls"</li>
                            </ul>
                        </div>
                    </Card>

                    <Card title="Getting Started" description="How to use the theme toggle">
                        <div class="card-section">
                            <h4>"Instructions:"</h4>
                            <ol class="muted-list">
                                <li>"1. Click the theme toggle button in the header"</li>
                                <li>"2. Select your preferred theme option"</li>
                                <li>"3. The theme will be saved automatically"</li>
                                <li>"4. System theme follows your OS preference"</li>
                            </ol>
                        </div>
                        <button class="btn btn-primary btn-block">"Explore More Features"</button>
                    </Card>
                </div>

                <Card
                    title="Theme Context Implementation"
                    description="Built with provide_context and use_context"
                >
                    <div class="callout">
                        <p class="muted">
                            "This application uses a reactive context to manage theme state across all \
                             components. The theme preference is automatically detected from your system \
                             settings and persisted in localStorage for future visits."
                        </p>
                    </div>
                </Card>
            </main>

            <footer class="site-footer">
                <div class="container">
                    <p class="muted">"Built with Leptos, web-sys, and CSS custom properties"</p>
                </div>
            </footer>
        </div>
    }
}
