use leptos::prelude::*;

use super::store::ThemeStore;
use super::types::{ResolvedTheme, ThemePreference, ThemeState};
use crate::config::ThemeConfig;
use crate::platform::{Platform, Subscription};

struct StoreHandle {
    store: ThemeStore,
    _listener: Subscription,
}

/// Theme access for components below a [`ThemeProvider`].
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub state: ReadSignal<ThemeState>,
    handle: StoredValue<StoreHandle, LocalStorage>,
}

impl ThemeContext {
    pub fn theme(&self) -> ThemePreference {
        self.state.get().theme
    }

    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.state.get().resolved_theme
    }

    pub fn set_theme(&self, preference: ThemePreference) {
        self.handle.with_value(|h| h.store.set_theme(preference));
    }
}

/// Initializes the theme store before its children render and tears it down
/// with them.
#[component]
pub fn ThemeProvider(
    /// Default preference and storage key.
    config: ThemeConfig,
    /// Environment seams. Detected from the target when omitted.
    #[prop(optional)]
    platform: Option<Platform>,
    children: Children,
) -> impl IntoView {
    let platform = platform.unwrap_or_else(Platform::detect);
    let store = ThemeStore::initialize(config, platform);
    let (state, set_state) = signal(store.state());
    let listener = store.on_change(move |next| set_state.set(next));

    let handle = StoredValue::new_local(StoreHandle {
        store,
        _listener: listener,
    });
    provide_context(ThemeContext { state, handle });

    on_cleanup(move || {
        let _ = handle.try_with_value(|h| h.store.dispose());
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a <ThemeProvider>")
}
