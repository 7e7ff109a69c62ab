//! Mailer errors

use thiserror::Error;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// The provider credential is not configured
    #[error("email provider is not configured")]
    NotConfigured,

    /// The provider answered with a non-success status
    #[error("email provider returned status {status}: {body}")]
    Rejected {
        /// HTTP status returned by the provider
        status: u16,

        /// Raw response body, kept for diagnostics
        body: String,
    },

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::UnknownError(err)
    }
}
