//! Contact relay errors

use thiserror::Error;
use tracing::debug;

use crate::domain::communication::{email_addresses::EmailAddressError, mailer::MailerError};

/// Reasons a submission is rejected before anything is sent
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// One of name, email or message is missing or empty
    #[error("Name, email, and message are required")]
    MissingRequiredFields,

    /// The email does not look like `local@domain.tld`
    #[error("Invalid email address")]
    InvalidEmailAddress,
}

impl From<EmailAddressError> for SubmissionError {
    fn from(_err: EmailAddressError) -> Self {
        SubmissionError::InvalidEmailAddress
    }
}

/// Everything that can stop a submission from being relayed
#[derive(Debug, Error)]
pub enum RelayError {
    /// The email provider credential is not configured
    #[error("email provider credential is not configured")]
    ConfigMissing,

    /// The submission failed validation
    #[error(transparent)]
    ValidationFailed(#[from] SubmissionError),

    /// The provider call failed or was rejected
    #[error("provider call failed: {0}")]
    ProviderCallFailed(MailerError),

    /// The request body could not be understood
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl From<MailerError> for RelayError {
    fn from(err: MailerError) -> Self {
        debug!("MailerError -> RelayError");

        match err {
            MailerError::NotConfigured => RelayError::ConfigMissing,
            err => RelayError::ProviderCallFailed(err),
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::MalformedInput(err.to_string())
    }
}
