//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! malformed scene-file names, invalid scatter configuration, missing selections,
//! failed saves, scene host failures, IO, and generic errors.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed scene file name '{name}': {reason}")]
    MalformedName { name: String, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no source object selected to scatter")]
    NoSourceObject,

    #[error("no target vertices selected to scatter onto")]
    NoTargets,

    #[error("failed to save '{}': {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scene host error: {0}")]
    Host(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub(crate) fn malformed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
