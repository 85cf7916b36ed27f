use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, info, warn};

use super::types::{ResolvedTheme, ThemePreference, ThemeState};
use crate::config::ThemeConfig;
use crate::platform::{ColorSchemeSignal, Platform, PreferenceStorage, Subscription};

type StateListener = Rc<dyn Fn(ThemeState)>;

/// Owns the theme preference and the theme resolved from it.
///
/// Cloning yields another handle to the same store. The store lives on the
/// UI thread only; every operation runs to completion synchronously and
/// failures in storage, the OS signal or the marker degrade to a default.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<StoreInner>,
}

struct StoreInner {
    config: ThemeConfig,
    platform: Platform,
    state: Cell<ThemeState>,
    listeners: RefCell<Vec<(u64, StateListener)>>,
    next_listener_id: Cell<u64>,
    system_subscription: RefCell<Option<Subscription>>,
}

impl ThemeStore {
    /// Load the persisted preference (or the configured default), apply the
    /// resolved theme to the document and start following the OS signal.
    pub fn initialize(config: ThemeConfig, platform: Platform) -> Self {
        let theme = load_preference(platform.storage.as_ref(), &config);
        let resolved_theme = resolve(theme, platform.color_scheme.as_ref());

        let inner = Rc::new(StoreInner {
            config,
            platform,
            state: Cell::new(ThemeState {
                theme,
                resolved_theme,
            }),
            listeners: RefCell::new(Vec::new()),
            next_listener_id: Cell::new(0),
            system_subscription: RefCell::new(None),
        });
        inner.mark(resolved_theme);

        let weak: Weak<StoreInner> = Rc::downgrade(&inner);
        let on_change = Box::new(move |prefers_dark: bool| {
            if let Some(inner) = weak.upgrade() {
                inner.system_preference_changed(prefers_dark);
            }
        });
        match inner.platform.color_scheme.subscribe(on_change) {
            Ok(subscription) => {
                *inner.system_subscription.borrow_mut() = Some(subscription);
            }
            Err(e) => warn!("Not following system color scheme: {}", e),
        }

        let store = Self { inner };
        info!(
            "Theme initialized: {} (resolved {}) from key '{}', default {}",
            theme,
            resolved_theme,
            store.config().storage_key,
            store.config().default_preference
        );
        store
    }

    /// Change the preference, persist it and re-apply the document marker.
    pub fn set_theme(&self, preference: ThemePreference) {
        let inner = &self.inner;
        let resolved_theme = resolve(preference, inner.platform.color_scheme.as_ref());

        if let Err(e) = inner
            .platform
            .storage
            .write(&inner.config.storage_key, preference.as_str())
        {
            warn!("Failed to persist theme '{}': {}", preference, e);
        }
        inner.mark(resolved_theme);
        inner.replace_state(ThemeState {
            theme: preference,
            resolved_theme,
        });
        debug!("Theme set to {} (resolved {})", preference, resolved_theme);
    }

    pub fn state(&self) -> ThemeState {
        self.inner.state.get()
    }

    pub fn theme(&self) -> ThemePreference {
        self.state().theme
    }

    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.state().resolved_theme
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.inner.config
    }

    /// Whether the store is attached to the OS colour-scheme signal.
    pub fn is_tracking_system(&self) -> bool {
        self.inner.system_subscription.borrow().is_some()
    }

    /// Call `listener` with the new state after every change.
    pub fn on_change(&self, listener: impl Fn(ThemeState) + 'static) -> Subscription {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().retain(|(i, _)| *i != id);
            }
        })
    }

    /// Detach from the OS signal and drop all listeners.
    pub fn dispose(&self) {
        let subscription = self.inner.system_subscription.borrow_mut().take();
        if let Some(subscription) = subscription {
            subscription.dispose();
            debug!("Detached from system color scheme");
        }
        self.inner.listeners.borrow_mut().clear();
    }
}

impl StoreInner {
    fn system_preference_changed(&self, prefers_dark: bool) {
        let current = self.state.get();
        if current.theme != ThemePreference::System {
            debug!(
                "Ignoring system color scheme change while theme is {}",
                current.theme
            );
            return;
        }

        let resolved_theme = ResolvedTheme::from_prefers_dark(prefers_dark);
        self.mark(resolved_theme);
        self.replace_state(ThemeState {
            resolved_theme,
            ..current
        });
        debug!("System color scheme changed, resolved {}", resolved_theme);
    }

    fn mark(&self, resolved: ResolvedTheme) {
        if let Err(e) = self.platform.marker.apply(resolved) {
            warn!("Failed to apply {} theme marker: {}", resolved, e);
        }
    }

    fn replace_state(&self, next: ThemeState) {
        if self.state.replace(next) == next {
            return;
        }
        // Listeners may add or remove listeners.
        let listeners: Vec<StateListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(next);
        }
    }
}

fn load_preference(storage: &dyn PreferenceStorage, config: &ThemeConfig) -> ThemePreference {
    match storage.read(&config.storage_key) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
            warn!("Ignoring stored theme: {}", e);
            config.default_preference
        }),
        Ok(None) => config.default_preference,
        Err(e) => {
            warn!("Failed to read stored theme: {}", e);
            config.default_preference
        }
    }
}

/// Unsupported OS signal resolves `system` to light.
fn resolve(preference: ThemePreference, color_scheme: &dyn ColorSchemeSignal) -> ResolvedTheme {
    preference.resolve(|| {
        color_scheme.prefers_dark().unwrap_or_else(|e| {
            warn!("Falling back to light theme: {}", e);
            false
        })
    })
}
