//! Contact form submission

use crate::domain::{
    communication::email_addresses::EmailAddress, contact::errors::SubmissionError,
};

/// A validated contact form entry. Lives for a single request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// Who is asking
    pub name: String,

    /// Where to reply
    pub email: EmailAddress,

    /// The submitter's company, if given
    pub company: Option<String>,

    /// The service the submitter is interested in, if given
    pub service: Option<String>,

    /// The inquiry itself, kept verbatim
    pub message: String,
}

impl Submission {
    /// Validates raw form fields into a submission.
    ///
    /// Required fields are checked before the email shape, so a missing
    /// message wins over a malformed address. Empty optional fields are
    /// dropped.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        company: Option<String>,
        service: Option<String>,
        message: Option<String>,
    ) -> Result<Self, SubmissionError> {
        let (Some(name), Some(email), Some(message)) = (
            non_empty(name),
            non_empty(email),
            non_empty(message),
        ) else {
            return Err(SubmissionError::MissingRequiredFields);
        };

        Ok(Self {
            name,
            email: EmailAddress::new(&email)?,
            company: non_empty(company),
            service: non_empty(service),
            message,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
