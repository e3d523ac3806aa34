//! Error types for the REST client

use thiserror::Error;

/// Errors that can occur while talking to the REST API
#[derive(Debug, Error)]
pub enum RestError {
    /// Network, IO or HTTP communication error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// Non-200 response. `message` is the error envelope's message when the
    /// body carried one, otherwise the raw response body.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The redirect chain was longer than the transport is willing to follow
    #[error("stopped after {0} redirects")]
    TooManyRedirects(usize),

    /// A request or redirect target could not be parsed as a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl RestError {
    /// HTTP status of an API error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            RestError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
