use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("Storage unavailable")]
    StorageUnavailable,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid theme preference: {0:?}")]
    InvalidPreference(String),

    #[error("prefers-color-scheme media query unsupported")]
    MediaQueryUnsupported,

    #[error("Media query error: {0}")]
    MediaQuery(String),

    #[error("Document root unavailable")]
    DocumentUnavailable,

    #[error("Marker error: {0}")]
    Marker(String),

    #[error("Config error: {0}")]
    Config(String),
}
