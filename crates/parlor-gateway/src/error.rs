//! Gateway error types.
//!
//! A remote failure is never fatal and never retried automatically: it is
//! surfaced to the user as a generic failure message and the session stays
//! where it was (unauthenticated for auth calls, unsubmitted for bookings).

use thiserror::Error;

/// Errors from the remote auth gateway and booking submission calls.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport-level failure (connect, timeout, TLS, decode).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Credentials were rejected (401/403).
    #[error("Authentication failed")]
    Unauthorized,

    /// The request was rejected locally before any network traffic.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] parlor_core::ValidationError),
}

impl GatewayError {
    /// Maps an HTTP status plus response body to a gateway error.
    pub(crate) fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            GatewayError::Unauthorized
        } else {
            GatewayError::Status {
                status: status.as_u16(),
                message: if body.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                } else {
                    body
                },
            }
        }
    }
}

/// Convenience type alias for Results with GatewayError.
pub type GatewayResult<T> = Result<T, GatewayError>;
