/*
[INPUT]:  Error sources (validation, transport, decoding, empty results, credentials)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the OKCoin adapter
#[derive(Error, Debug)]
pub enum OkcoinError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (code {code}): {message}")]
    Api { code: u16, message: String },

    /// Caller input rejected before any request was made
    #[error("{0}")]
    InvalidInput(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Positional record had the wrong number of fields
    #[error("fields: got {got} want {want}; data={data}")]
    FieldCount {
        got: usize,
        want: usize,
        data: String,
    },

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Ticker payload carried no snapshot
    #[error("expecting a non-blank ticker response")]
    BlankTicker,

    /// Balance payload was unsuccessful or empty
    #[error("no funds information returned")]
    NoFundsReturned,

    /// Signed call attempted without the named credential
    #[error("expecting {field:?} in credentials")]
    MissingCredential { field: &'static str },

    /// Required environment variables were not set
    #[error("{}", missing_env_message(.vars))]
    MissingEnv { vars: Vec<&'static str> },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

fn missing_env_message(vars: &[&'static str]) -> String {
    vars.iter()
        .map(|var| format!("{var:?} was not set"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl OkcoinError {
    pub fn blank_symbol() -> Self {
        OkcoinError::InvalidInput("expecting a non-blank symbol".to_string())
    }

    /// Check if the error is worth retrying by the caller
    pub fn is_retryable(&self) -> bool {
        match self {
            OkcoinError::Http(err) => err.is_timeout() || err.is_connect(),
            OkcoinError::Api { code, .. } => *code == 429 || *code >= 500,
            _ => false,
        }
    }

    /// Check if error indicates an authentication problem
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            OkcoinError::MissingCredential { .. }
                | OkcoinError::MissingEnv { .. }
                | OkcoinError::Api { code: 401 | 403, .. }
        )
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        OkcoinError::Api {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for OKCoin operations
pub type Result<T> = std::result::Result<T, OkcoinError>;
