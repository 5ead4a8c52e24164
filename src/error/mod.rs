//! Error handling for the person registry client.

use std::io;

use crate::validation::ValidationErrors;

/// Specialized error type for registry operations
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The form did not pass its rule set
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// The API answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Body text returned by the API, if any
        message: String,
    },

    /// Transport level failure talking to the API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Error writing an export
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No route is registered for a path
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RegistryError {
    /// Message suitable for showing to the person using the form.
    ///
    /// Validation errors surface their first field message; API errors prefer
    /// the server-supplied text.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(errors) => errors
                .first()
                .map_or_else(|| "Invalid form".to_string(), |e| e.message.clone()),
            Self::Api { message, .. } if !message.trim().is_empty() => message.trim().to_string(),
            Self::Api { .. } | Self::Http(_) | Self::Decode(_) => {
                "Register failed due to network issue".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
