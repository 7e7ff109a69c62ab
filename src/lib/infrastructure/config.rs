//! Operator identity configuration

use clap::Parser;

use crate::domain::{
    communication::{
        email_addresses::{EmailAddress, EmailAddressError},
        mailer::Mailbox,
    },
    contact::ContactConfig,
};

/// Addresses used when relaying submissions
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
pub struct OperatorConfig {
    /// The inbox receiving submissions, also shown to visitors as the fallback contact
    #[clap(long, env = "OPERATOR_EMAIL", default_value = "contact@1889dev.com")]
    pub operator_email: String,

    /// Display name of the operator inbox
    #[clap(long, env = "OPERATOR_NAME", default_value = "1889 Development")]
    pub operator_name: String,

    /// The sender address on relayed submissions
    #[clap(long, env = "SENDER_EMAIL", default_value = "contact@1889dev.com")]
    pub sender_email: String,

    /// The sender display name
    #[clap(long, env = "SENDER_NAME", default_value = "1889 Development")]
    pub sender_name: String,
}

impl OperatorConfig {
    /// The fallback address given to visitors when relaying fails
    pub fn fallback_contact(&self) -> Result<EmailAddress, EmailAddressError> {
        EmailAddress::new(&self.operator_email)
    }

    /// Builds the relay's sender and recipient identities
    pub fn contact_config(&self) -> Result<ContactConfig, EmailAddressError> {
        Ok(ContactConfig {
            sender: Mailbox::new(EmailAddress::new(&self.sender_email)?, &self.sender_name),
            recipient: Mailbox::new(self.fallback_contact()?, &self.operator_name),
        })
    }
}
