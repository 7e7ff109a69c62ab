//! API error-handling module

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::domain::{communication::email_addresses::EmailAddress, contact::RelayError};

/// An error response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    #[schema(example = false)]
    pub success: bool,

    /// The error message
    #[schema(example = "Invalid email address")]
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: &str) -> Self {
        Self {
            success: false,
            error: error.to_string(),
        }
    }
}

/// An error raised in the API
#[derive(Debug)]
pub struct ApiError {
    /// The status code
    pub status: StatusCode,

    /// The error message
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Create a new bad request error
    pub fn new_400(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Create new internal server error
    pub fn new_500(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Maps a relay failure to what the visitor gets to see.
    ///
    /// Provider and input failures share one message; the detail only goes
    /// to the log.
    pub fn from_relay_error(err: RelayError, fallback: &EmailAddress) -> Self {
        match err {
            RelayError::ConfigMissing => {
                error!("BREVO_API_KEY not configured");

                ApiError::new_500(&format!(
                    "Email service not configured. Please email us directly at {fallback}"
                ))
            }
            RelayError::ValidationFailed(err) => {
                debug!(reason = %err, "rejected contact submission");

                ApiError::new_400(&err.to_string())
            }
            err @ (RelayError::ProviderCallFailed(_)
            | RelayError::MalformedInput(_)
            | RelayError::UnknownError(_)) => {
                error!(error = %err, "contact form error");

                send_failed(fallback)
            }
        }
    }
}

/// The generic failure every unexpected error collapses into
pub fn send_failed(fallback: &EmailAddress) -> ApiError {
    ApiError::new_500(&format!(
        "Failed to send message. Please email us directly at {fallback}"
    ))
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse::new(&self.message))).into_response()
    }
}
