pub mod context;
pub mod store;
pub mod types;

pub use context::{use_theme, ThemeContext, ThemeProvider};
pub use store::ThemeStore;
pub use types::{ResolvedTheme, ThemePreference, ThemeState};
