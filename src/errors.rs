// src/errors.rs

//! Crate-wide error aliases and helpers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShaderwatchError {
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ShaderwatchError>;

/// One-line diagnostic for a fatal error, with the cause chain inlined.
pub fn error_line(err: &Error) -> String {
    format!("shaderwatch error: {err:#}")
}
