use std::result;

use thiserror::Error;

/// Error types for Zotero client and workshop operations
#[derive(Error, Debug)]
pub enum ZoteroError {
    /// The HTTP transport could not be initialized (e.g. no TLS backend)
    #[error("HTTP transport unavailable: {0}")]
    TransportUnavailable(#[source] reqwest::Error),

    /// The request could not be completed or returned no body
    #[error("Request to {url} failed: {reason}")]
    TransportFailure { url: String, reason: String },

    /// The response body was not well-formed XML, or a value could not be read
    #[error("XML parsing failed: {message}")]
    ParseFailure { message: String },

    /// An expected element is absent from the document
    #[error("Missing field in response: {field}")]
    MissingField { field: String },

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// JSON encoding or decoding failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Stored workshop settings cannot be used to reach a library
    #[error("Invalid workshop settings: {message}")]
    InvalidSettings { message: String },
}

impl ZoteroError {
    pub(crate) fn transport(url: &str, err: reqwest::Error) -> Self {
        ZoteroError::TransportFailure {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn parse(message: impl ToString) -> Self {
        ZoteroError::ParseFailure {
            message: message.to_string(),
        }
    }

    pub(crate) fn missing(field: &str) -> Self {
        ZoteroError::MissingField {
            field: field.to_string(),
        }
    }

    /// Whether the failure happened before a response could be read
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            ZoteroError::TransportFailure { .. } | ZoteroError::TransportUnavailable(_)
        )
    }
}

pub type Result<T> = result::Result<T, ZoteroError>;
