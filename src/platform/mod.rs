//! Seams between the theme store and its host environment.
//!
//! The store only talks to durable key-value storage, the OS colour-scheme
//! signal and the document-root marker through these traits. [`browser`]
//! implements them with `web-sys`; [`memory`] keeps everything in process.

pub mod browser;
pub mod memory;

use crate::error::ThemeError;
use crate::theme::ResolvedTheme;

/// Durable, origin-scoped key-value storage.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The platform's "prefers dark colour scheme" signal.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> Result<bool, ThemeError>;

    /// Register `on_change` for every change of the signal. The listener stays
    /// attached until the returned [`Subscription`] is disposed or dropped.
    fn subscribe(&self, on_change: Box<dyn Fn(bool)>) -> Result<Subscription, ThemeError>;
}

/// The marker on the document root that stylesheets select on.
pub trait ThemeMarker {
    fn apply(&self, resolved: ResolvedTheme) -> Result<(), ThemeError>;
}

/// Handle to an attached listener. Detaches on [`dispose`](Self::dispose) or drop.
#[must_use = "dropping a Subscription detaches its listener"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    pub fn dispose(mut self) {
        self.detach_now();
    }

    fn detach_now(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

/// Everything the store needs from its environment.
pub struct Platform {
    pub storage: Box<dyn PreferenceStorage>,
    pub color_scheme: Box<dyn ColorSchemeSignal>,
    pub marker: Box<dyn ThemeMarker>,
}

impl Platform {
    pub fn new(
        storage: impl PreferenceStorage + 'static,
        color_scheme: impl ColorSchemeSignal + 'static,
        marker: impl ThemeMarker + 'static,
    ) -> Self {
        Self {
            storage: Box::new(storage),
            color_scheme: Box::new(color_scheme),
            marker: Box::new(marker),
        }
    }

    /// Browser implementation on wasm, in-memory everywhere else.
    pub fn detect() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            browser::platform()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            memory::MemoryPlatform::default().platform()
        }
    }
}
