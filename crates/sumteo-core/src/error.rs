//! Core error types for sumteo-core.
//!
//! Timer commands never fail (invalid transitions are no-ops), so the
//! hierarchy only covers construction, configuration and the mint pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed source error handed back by external collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Core error type for sumteo-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Mint pipeline errors
    #[error("Mint error: {0}")]
    Mint(#[from] MintError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A focus session must last at least one second.
    #[error("target duration must be greater than zero")]
    ZeroTarget,

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Mint pipeline errors, one variant per stage.
#[derive(Error, Debug)]
pub enum MintError {
    #[error("failed while recording proof of reading: {source}")]
    RecordProof {
        #[source]
        source: BoxError,
    },

    #[error("failed during tree creation: {source}")]
    CreateTree {
        #[source]
        source: BoxError,
    },

    #[error("failed while storing tree address: {source}")]
    StoreTree {
        #[source]
        source: BoxError,
    },

    #[error("failed during mint: {source}")]
    Mint {
        #[source]
        source: BoxError,
    },
}

impl MintError {
    /// Short stage name, stable for logs and JSON output.
    pub fn stage(&self) -> &'static str {
        match self {
            MintError::RecordProof { .. } => "record_proof",
            MintError::CreateTree { .. } => "create_tree",
            MintError::StoreTree { .. } => "store_tree",
            MintError::Mint { .. } => "mint",
        }
    }
}

impl From<BoxError> for CoreError {
    fn from(err: BoxError) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_error_names_its_stage() {
        let err = MintError::CreateTree {
            source: "rpc unavailable".into(),
        };
        assert_eq!(err.stage(), "create_tree");
        assert_eq!(err.to_string(), "failed during tree creation: rpc unavailable");
    }

    #[test]
    fn core_error_wraps_validation() {
        let err: CoreError = ValidationError::ZeroTarget.into();
        assert!(err.to_string().contains("greater than zero"));
    }
}
