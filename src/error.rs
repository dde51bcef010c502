use std::path::PathBuf;

pub use crate::game::MoveError;

/// Errors produced while translating and validating a client request.
///
/// Every variant is a client-input error: it is reported synchronously and
/// the engine state is guaranteed unmodified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// Row or col absent or empty in the request
    #[error("Invalid data")]
    MissingField,

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
