use axum::http::StatusCode;
use thiserror::Error;

/// Failure of a single relay call
///
/// Every variant carries a human-readable reason that ends up in the
/// `{"error": ...}` body returned to the client.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Missing or malformed input supplied by the caller
    #[error("{0}")]
    Validation(String),

    /// Operator-side setup problem (missing credential, sender address)
    #[error("{0}")]
    Configuration(String),

    /// Completion provider rejected the request or returned nothing usable
    #[error("{0}")]
    Upstream(String),

    /// SMTP verification or send failure
    #[error("{0}")]
    Delivery(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::Configuration(_) | RelayError::Upstream(_) | RelayError::Delivery(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Short label used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::Validation(_) => "validation",
            RelayError::Configuration(_) => "configuration",
            RelayError::Upstream(_) => "upstream",
            RelayError::Delivery(_) => "delivery",
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::Upstream(error.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for RelayError {
    fn from(error: lettre::transport::smtp::Error) -> Self {
        RelayError::Delivery(error.to_string())
    }
}

pub type RelayResult<T> = Result<T, RelayError>;
