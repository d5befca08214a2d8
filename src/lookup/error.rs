//! Lookup failure classification.

use thiserror::Error;

/// Shown to the user for any failure that is not the service's own message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors that can occur while looking up a drug.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The service answered with an `error` field.
    #[error("{message}")]
    Service { message: String },

    /// The request never produced a readable body.
    #[error("Lookup request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The body was not the JSON shape the service promises.
    #[error("Invalid lookup response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl LookupError {
    /// Message to display in the search view.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::Service { message } => message.clone(),
            LookupError::Transport { .. } | LookupError::Decode { .. } => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }

    /// Short error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            LookupError::Service { .. } => "service_error",
            LookupError::Transport { .. } => "transport_error",
            LookupError::Decode { .. } => "decode_error",
        }
    }
}
