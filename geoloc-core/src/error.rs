use thiserror::Error;

use crate::model::ErrorStatus;

/// Failure of a single validation step or remote lookup.
///
/// `InvalidFormat` and `NotFound` are user-facing and reported as
/// `validation_error`; everything else is reported as a generic `error`.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{0}")]
    InvalidFormat(String),

    #[error("{0}")]
    NotFound(String),

    /// Built through [`LookupError::http`]; the request URL carries the API key.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("geocoding request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse {context} JSON: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl LookupError {
    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidFormat(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    /// Wrap a transport failure with the request URL stripped.
    pub fn http(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }

    /// Classification carried into the uniform error record.
    pub fn status(&self) -> ErrorStatus {
        match self {
            LookupError::InvalidFormat(_) | LookupError::NotFound(_) => {
                ErrorStatus::ValidationError
            }
            LookupError::Http(_) | LookupError::Status { .. } | LookupError::Decode { .. } => {
                ErrorStatus::Error
            }
        }
    }
}
