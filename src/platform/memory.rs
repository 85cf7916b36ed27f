//! In-process implementations of the platform seams.
//!
//! Every type is a cheap clonable handle over shared state, so a caller can
//! hand one clone to the store and keep another to inspect or drive it.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::{ColorSchemeSignal, Platform, PreferenceStorage, Subscription, ThemeMarker};
use crate::error::ThemeError;
use crate::theme::ResolvedTheme;

#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
    unavailable: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that fails every read and write, like a blocked `localStorage`.
    pub fn unavailable() -> Self {
        let storage = Self::default();
        storage.set_available(false);
        storage
    }

    pub fn set_available(&self, available: bool) {
        self.unavailable.set(!available);
    }

    /// Seed a value without counting it as a write.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of successful writes through [`PreferenceStorage::write`].
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if self.unavailable.get() {
            return Err(ThemeError::StorageUnavailable);
        }
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.unavailable.get() {
            return Err(ThemeError::StorageUnavailable);
        }
        self.insert(key, value);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

type ChangeListener = Rc<dyn Fn(bool)>;

#[derive(Default)]
struct SchemeState {
    /// `None` when the media feature is unsupported.
    prefers_dark: Option<bool>,
    listeners: Vec<(u64, ChangeListener)>,
    next_id: u64,
}

#[derive(Clone)]
pub struct MemoryColorScheme {
    state: Rc<RefCell<SchemeState>>,
}

impl MemoryColorScheme {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            state: Rc::new(RefCell::new(SchemeState {
                prefers_dark: Some(prefers_dark),
                ..SchemeState::default()
            })),
        }
    }

    pub fn unsupported() -> Self {
        Self {
            state: Rc::new(RefCell::new(SchemeState::default())),
        }
    }

    /// Change the OS preference and notify listeners if it actually changed.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        let listeners: Vec<ChangeListener> = {
            let mut state = self.state.borrow_mut();
            match state.prefers_dark {
                None => return,
                Some(current) if current == prefers_dark => return,
                Some(_) => state.prefers_dark = Some(prefers_dark),
            }
            state.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener(prefers_dark);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl Default for MemoryColorScheme {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ColorSchemeSignal for MemoryColorScheme {
    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        self.state
            .borrow()
            .prefers_dark
            .ok_or(ThemeError::MediaQueryUnsupported)
    }

    fn subscribe(&self, on_change: Box<dyn Fn(bool)>) -> Result<Subscription, ThemeError> {
        let mut state = self.state.borrow_mut();
        if state.prefers_dark.is_none() {
            return Err(ThemeError::MediaQueryUnsupported);
        }
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push((id, Rc::from(on_change)));

        let weak = Rc::downgrade(&self.state);
        Ok(Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().listeners.retain(|(i, _)| *i != id);
            }
        }))
    }
}

/// Records every marker application.
#[derive(Clone, Default)]
pub struct MemoryMarker {
    applied: Rc<RefCell<Vec<ResolvedTheme>>>,
}

impl MemoryMarker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The marker currently on the root, if any was ever applied.
    pub fn current(&self) -> Option<ResolvedTheme> {
        self.applied.borrow().last().copied()
    }

    pub fn history(&self) -> Vec<ResolvedTheme> {
        self.applied.borrow().clone()
    }
}

impl ThemeMarker for MemoryMarker {
    fn apply(&self, resolved: ResolvedTheme) -> Result<(), ThemeError> {
        self.applied.borrow_mut().push(resolved);
        Ok(())
    }
}

/// The three memory seams bundled together.
#[derive(Clone, Default)]
pub struct MemoryPlatform {
    pub storage: MemoryStorage,
    pub color_scheme: MemoryColorScheme,
    pub marker: MemoryMarker,
}

impl MemoryPlatform {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            color_scheme: MemoryColorScheme::new(prefers_dark),
            ..Self::default()
        }
    }

    /// A [`Platform`] sharing state with this handle.
    pub fn platform(&self) -> Platform {
        Platform::new(
            self.storage.clone(),
            self.color_scheme.clone(),
            self.marker.clone(),
        )
    }
}
