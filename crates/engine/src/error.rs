//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`Validation`] thrown when a submitted field is not a valid amount.
//! - [`StorageCorrupt`] thrown when the history file exists but can't be parsed.
//! - [`Storage`] thrown when the history file can't be read or written.
//! - [`NoData`] thrown when an export is requested on an empty history.
//! - [`Config`] thrown when the engine is built with invalid settings.
//!
//!  [`Validation`]: EngineError::Validation
//!  [`StorageCorrupt`]: EngineError::StorageCorrupt
//!  [`Storage`]: EngineError::Storage
//!  [`NoData`]: EngineError::NoData
//!  [`Config`]: EngineError::Config
use std::path::PathBuf;

use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid value for {field}: \"{value}\"")]
    Validation { field: &'static str, value: String },
    #[error("history file {} is corrupt: {source}", .path.display())]
    StorageCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage failure on {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serialization failed: {0}")]
    Serialization(String),
    #[error("No data available")]
    NoData,
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }
}

impl From<csv::Error> for EngineError {
    fn from(value: csv::Error) -> Self {
        Self::Serialization(value.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value.to_string())
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Validation { field: a, value: x },
                Self::Validation { field: b, value: y },
            ) => a == b && x == y,
            (Self::StorageCorrupt { path: a, .. }, Self::StorageCorrupt { path: b, .. }) => a == b,
            (Self::Storage { path: a, source: x }, Self::Storage { path: b, source: y }) => {
                a == b && x.kind() == y.kind()
            }
            (Self::Serialization(a), Self::Serialization(b)) => a == b,
            (Self::NoData, Self::NoData) => true,
            (Self::Config(a), Self::Config(b)) => a == b,
            _ => false,
        }
    }
}
