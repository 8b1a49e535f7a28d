//! Error types for surfaces and configuration.

use thiserror::Error;

/// Failures reported by a drawing surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The surface was detached or destroyed.
    #[error("drawing surface is unavailable")]
    Unavailable,
}

/// Failures loading or validating a particle configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid particle config: {0}")]
    Invalid(String),

    #[error("failed to parse particle config: {0}")]
    Toml(#[from] toml::de::Error),
}
