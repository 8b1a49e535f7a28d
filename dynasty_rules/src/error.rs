//! Error types for content loading and layout computation.

use thiserror::Error;

/// Errors raised by the rules crate.
#[derive(Debug, Error)]
pub enum RulesError {
    /// Input that can never produce a valid layout or record.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A theme key that is not present in the registry.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// Two catalog entries share the same era id.
    #[error("duplicate era id: {0}")]
    DuplicateEra(String),

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse theme TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience alias used throughout the crate.
pub type RulesResult<T> = Result<T, RulesError>;
