use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a key-value substrate.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read '{key}' from '{path}': {source}")]
    Read {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{key}' to '{path}': {source}")]
    Write {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from favorite and alert intents.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// Target price was not a finite positive number.
    #[error("Alert price must be a positive number, got '{input}'")]
    InvalidAlertPrice { input: String },

    /// The intent needs a current search result and there is none.
    #[error("No drug is selected")]
    NoActiveDrug,

    #[error(transparent)]
    Storage(#[from] StorageError),
}
