use crate::models::LocationId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpawnError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Unknown spawn location: {0}")]
    UnknownLocation(LocationId),
}

impl SpawnError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        SpawnError::InvalidConfiguration(msg.into())
    }

    /// Setup problems that a caller can only fix by changing configuration.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            SpawnError::InvalidConfiguration(_)
                | SpawnError::ConfigIo { .. }
                | SpawnError::UnsupportedSchema { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SpawnError>;
