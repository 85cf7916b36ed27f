use leptos::prelude::*;

use crate::theme::{use_theme, ThemePreference};

const SUN: &str = "\u{2600}";
const MOON: &str = "\u{263E}";
const MONITOR: &str = "\u{1F5B5}";

fn icon_for(preference: ThemePreference) -> &'static str {
    match preference {
        ThemePreference::Light => SUN,
        ThemePreference::Dark => MOON,
        ThemePreference::System => MONITOR,
    }
}

/// Icon button that opens a Light / Dark / System menu.
///
/// Only the open/closed state of the menu lives here; the selection is read
/// from and written to the theme context.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let (is_open, set_is_open) = signal(false);

    let button_icon = move || {
        if theme.resolved_theme().is_dark() {
            MOON
        } else {
            SUN
        }
    };

    let on_select = move |preference: ThemePreference| {
        theme.set_theme(preference);
        set_is_open.set(false);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            set_is_open.set(false);
        }
    };

    view! {
        <div class="theme-toggle" on:keydown=on_keydown>
            <button
                class="btn btn-icon"
                aria-haspopup="menu"
                aria-expanded=move || is_open.get().to_string()
                title="Toggle theme"
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                <span aria-hidden="true">{button_icon}</span>
                <span class="sr-only">"Toggle theme"</span>
            </button>

            <Show when=move || is_open.get()>
                // Clicking anywhere outside the menu closes it.
                <div class="theme-menu-backdrop" on:click=move |_| set_is_open.set(false)></div>
                <ul class="theme-menu" role="menu">
                    {ThemePreference::ALL
                        .into_iter()
                        .map(|preference| {
                            let checked = move || theme.theme() == preference;
                            view! {
                                <li
                                    class="theme-menu-item"
                                    class:selected=checked
                                    role="menuitemradio"
                                    tabindex="0"
                                    aria-checked=move || checked().to_string()
                                    on:click=move |_| on_select(preference)
                                >
                                    <span class="theme-menu-icon" aria-hidden="true">
                                        {icon_for(preference)}
                                    </span>
                                    <span>{preference.label()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
