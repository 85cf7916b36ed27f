use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, MediaQueryList, MediaQueryListEvent, Storage};

use super::{ColorSchemeSignal, Platform, PreferenceStorage, Subscription, ThemeMarker};
use crate::error::ThemeError;
use crate::theme::ResolvedTheme;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub fn platform() -> Platform {
    Platform::new(WebStorage, MediaColorScheme, RootClassMarker)
}

fn js_error(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

/// `window.localStorage`. Looked up on every call because access can be
/// revoked while the page is open.
pub struct WebStorage;

impl WebStorage {
    fn storage() -> Result<Storage, ThemeError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(ThemeError::StorageUnavailable)
    }
}

impl PreferenceStorage for WebStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| ThemeError::Storage(js_error(&e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(js_error(&e)))
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
pub struct MediaColorScheme;

impl MediaColorScheme {
    fn query() -> Result<MediaQueryList, ThemeError> {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .ok_or(ThemeError::MediaQueryUnsupported)
    }
}

impl ColorSchemeSignal for MediaColorScheme {
    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        Ok(Self::query()?.matches())
    }

    fn subscribe(&self, on_change: Box<dyn Fn(bool)>) -> Result<Subscription, ThemeError> {
        let list = Self::query()?;
        let closure = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            on_change(event.matches());
        }) as Box<dyn FnMut(_)>);

        list.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .map_err(|e| ThemeError::MediaQuery(js_error(&e)))?;

        // The closure lives inside the detach callback so it is freed only
        // after the listener is removed.
        Ok(Subscription::new(move || {
            let _ = list
                .remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        }))
    }
}

/// Toggles the `light`/`dark` class on `<html>` and sets its `color-scheme`.
pub struct RootClassMarker;

impl ThemeMarker for RootClassMarker {
    fn apply(&self, resolved: ResolvedTheme) -> Result<(), ThemeError> {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
            .ok_or(ThemeError::DocumentUnavailable)?;

        // Both steps run in one task, so no frame ever sees zero or two markers.
        let classes = root.class_list();
        classes
            .remove_2(
                ResolvedTheme::Light.class_name(),
                ResolvedTheme::Dark.class_name(),
            )
            .map_err(|e| ThemeError::Marker(js_error(&e)))?;
        classes
            .add_1(resolved.class_name())
            .map_err(|e| ThemeError::Marker(js_error(&e)))?;

        if let Some(html) = root.dyn_ref::<HtmlElement>() {
            html.style()
                .set_property("color-scheme", resolved.as_str())
                .map_err(|e| ThemeError::Marker(js_error(&e)))?;
        }
        Ok(())
    }
}
