use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while loading the data the application runs on.
#[derive(Debug, Error)]
pub enum HemolinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid center directory: {0}")]
    InvalidDirectory(String),
}
