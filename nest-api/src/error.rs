use rest_client::RestError;
use thiserror::Error;

use crate::services::thermostat::TemperatureScale;

/// High-level API errors for Nest operations
///
/// Validation variants are raised locally before any request is made. Their
/// display text is the user-facing message, so it is kept free of prefixes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required parameter was blank (device ID, label, mode, ...)
    #[error("{0} must not be empty")]
    EmptyParameter(&'static str),

    /// A numeric parameter fell outside its allowed range
    #[error("{name} must be in the range of {min} - {max}")]
    OutOfRange {
        name: &'static str,
        min: String,
        max: String,
    },

    /// A parameter was not one of an enumerated set of values.
    /// `allowed` lists the set space-separated, in its defined order.
    #[error("{name} must be one of the following: [{allowed}]")]
    NotAllowed { name: &'static str, allowed: String },

    /// A temperature write used a different unit than the device is set to
    #[error("Temperature Scale must be set to {0}")]
    ScaleMismatch(TemperatureScale),

    /// Any other invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Network, redirect or remote API failure
    #[error(transparent)]
    Transport(#[from] RestError),

    /// A single-field read came back empty
    #[error("{resource} {field} not found")]
    FieldNotFound { resource: String, field: String },

    /// A whole-resource read or a write came back empty
    #[error("{resource} {id} not found")]
    ResourceNotFound { resource: &'static str, id: String },

    /// A 200 response held malformed JSON or an unexpected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Build a `NotAllowed` error from the allowed values, kept in order
    pub fn not_allowed<T: std::fmt::Display>(name: &'static str, allowed: &[T]) -> Self {
        let allowed = allowed
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        Self::NotAllowed { name, allowed }
    }

    /// Build an `OutOfRange` error
    pub fn out_of_range(
        name: &'static str,
        min: impl std::fmt::Display,
        max: impl std::fmt::Display,
    ) -> Self {
        Self::OutOfRange {
            name,
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// True for errors raised before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ApiError::EmptyParameter(_)
                | ApiError::OutOfRange { .. }
                | ApiError::NotAllowed { .. }
                | ApiError::ScaleMismatch(_)
                | ApiError::InvalidParameter(_)
        )
    }

    /// True for the empty-body "not found" conditions
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApiError::FieldNotFound { .. } | ApiError::ResourceNotFound { .. }
        )
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::Decode(error.to_string())
    }
}
