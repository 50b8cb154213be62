//! The error type shared by this crate's fallible operations.

use std::path::PathBuf;

/// Errors that can occur outside of the (infallible) gesture and menu logic.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize config for {path:?}: {source}")]
    ConfigSerialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("sender status lookup failed: {0}")]
    Lookup(String),
    #[error("invalid replay script: {0}")]
    ScriptParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
