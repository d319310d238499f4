//! Error taxonomy for setup and configuration
//!
//! The per-tick path is total over valid state and never returns these.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Precondition violated at setup; the session cannot start
    #[error("invalid configuration: {field}: {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    /// An asset failed to load; setup recovers with zero bouncers
    #[error("resource unavailable: {}: {reason}", .path.display())]
    ResourceUnavailable { path: PathBuf, reason: String },

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl SimError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
