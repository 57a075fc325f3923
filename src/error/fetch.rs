//! Errors produced while fetching a fact.

use thiserror::Error;

use crate::traits::HttpError;

/// Why a fact fetch failed.
///
/// The UI shows every kind the same way (see [`FetchError::user_message`]);
/// the variants exist for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The service answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    /// No response could be obtained.
    #[error("{0}")]
    Network(String),

    /// The body was not a valid fact document.
    #[error("{0}")]
    Parse(String),
}

impl FetchError {
    /// The single human-readable message shown in the error area.
    pub fn user_message(&self) -> String {
        format!("Failed to load fact: {}.", self)
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::HttpStatus { .. } => "E_FETCH_HTTP",
            FetchError::Network(_) => "E_FETCH_NET",
            FetchError::Parse(_) => "E_FETCH_PARSE",
        }
    }
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}
