use serde::Deserialize;

use crate::error::ThemeError;
use crate::theme::ThemePreference;

/// Id of the `<script type="application/json">` block in `index.html`.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Options accepted by [`ThemeStore::initialize`](crate::theme::ThemeStore::initialize).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub default_preference: ThemePreference,
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_preference: ThemePreference::System,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn new(default_preference: ThemePreference, storage_key: impl Into<String>) -> Self {
        Self {
            default_preference,
            storage_key: storage_key.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: ThemeConfig,
    /// `tracing_subscriber::EnvFilter` directives, e.g. `"info,theme_toggle=debug"`.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(json).map_err(|e| ThemeError::Config(e.to_string()))
    }

    /// Read the config block embedded in the page. A missing block yields
    /// the defaults.
    pub fn from_document() -> Result<Self, ThemeError> {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.theme.default_preference, ThemePreference::System);
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_from_json_full() {
        let config = AppConfig::from_json(
            r#"{"theme":{"defaultPreference":"dark","storageKey":"nextjs-theme"},"logFilter":"debug"}"#,
        )
        .unwrap();
        assert_eq!(
            config.theme,
            ThemeConfig::new(ThemePreference::Dark, "nextjs-theme")
        );
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_from_json_partial_fills_defaults() {
        let config = AppConfig::from_json(r#"{"theme":{"storageKey":"custom"}}"#).unwrap();
        assert_eq!(config.theme.default_preference, ThemePreference::System);
        assert_eq!(config.theme.storage_key, "custom");
        assert_eq!(config.log_filter, "info");

        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_preference() {
        let err = AppConfig::from_json(r#"{"theme":{"defaultPreference":"purple"}}"#).unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(AppConfig::from_json("{not json").is_err());
    }
}
