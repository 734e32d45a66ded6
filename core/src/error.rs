//! Error types for urlstate

use thiserror::Error;

/// Errors produced while reading or rewriting the address bar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The href could not be split into base, query and fragment
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Mode string was not one of `simple`, `required`, `suppress`
    #[error("invalid mode: {0} (expected simple, required or suppress)")]
    InvalidMode(String),

    /// Parameter names must be non-empty
    #[error("parameter name must not be empty")]
    EmptyName,

    /// The navigation surface refused a read or replace
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// Binding options could not be decoded
    #[error("invalid options: {0}")]
    Options(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SyncError>;

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Options(err.to_string())
    }
}
