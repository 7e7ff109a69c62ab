//! Email message

use serde::Serialize;

use crate::domain::communication::email_addresses::EmailAddress;

/// An address with a display name
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mailbox {
    /// The email address
    pub email: EmailAddress,

    /// The display name
    pub name: String,
}

impl Mailbox {
    /// Creates a new mailbox
    pub fn new(email: EmailAddress, name: &str) -> Self {
        Self {
            email,
            name: name.to_string(),
        }
    }
}

/// Email message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// The sender of the email
    pub sender: Mailbox,

    /// The recipients of the email
    pub to: Vec<Mailbox>,

    /// Where replies should go, if not to the sender
    pub reply_to: Option<Mailbox>,

    /// The subject of the email
    pub subject: String,

    /// The HTML body of the email
    pub html_body: String,

    /// The plain text body of the email
    pub plain_body: String,
}
