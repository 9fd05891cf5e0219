//! Error types and HTTP response conversion
//!
//! Client failures reach the HTTP layer through [`classify`], which dispatches
//! on the failure's [`FailureKind`] tag:
//!
//! | Kind                | Status |
//! |---------------------|--------|
//! | `InvalidIdentifier` | 400    |
//! | `NotFound`          | 404    |
//! | `Unclassified`      | 500    |
//!
//! Every error body has the same shape: `{"error": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::client::{ClientError, FailureKind};

/// Result type alias using the gateway error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the gateway
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure raised by the scraping client
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error message
    pub error: String,
}

impl ErrorBody {
    /// Create a new error body
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

/// Map a client failure to its HTTP status and body
pub fn classify(err: &ClientError) -> (StatusCode, ErrorBody) {
    let kind = err.kind();
    let status = match kind {
        FailureKind::InvalidIdentifier => StatusCode::BAD_REQUEST,
        FailureKind::NotFound => StatusCode::NOT_FOUND,
        FailureKind::Unclassified => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if kind == FailureKind::Unclassified {
        tracing::error!(kind = %kind, "Client call failed: {}", err);
    } else {
        tracing::debug!(kind = %kind, status = status.as_u16(), "Client call rejected: {}", err);
    }

    (status, ErrorBody::new(err.to_string()))
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Error::Client(ref e) => classify(e),
            Error::Config(ref e) => {
                tracing::error!("Configuration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(self.to_string()),
                )
            }
            Error::Io(ref e) => {
                tracing::error!("I/O error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("I/O operation failed"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

// Manual From implementation for the boxed figment error
impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
