//! Contact relay service

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

#[cfg(test)]
use mockall::mock;

use crate::domain::{
    communication::mailer::{Mailbox, Mailer, Message},
    contact::{emails::NewInquiryTemplate, errors::RelayError, Submission},
};

/// Who the relay sends as and who receives the submissions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactConfig {
    /// The sender identity on outgoing notifications
    pub sender: Mailbox,

    /// The operator inbox that receives every submission
    pub recipient: Mailbox,
}

/// Contact relay service
#[async_trait]
pub trait ContactService: Clone + Send + Sync + 'static {
    /// Fails with [`RelayError::ConfigMissing`] when submissions cannot be
    /// delivered at all.
    fn ensure_configured(&self) -> Result<(), RelayError>;

    /// Forwards a validated submission to the operator.
    ///
    /// # Arguments
    /// * `submission` - The validated [`Submission`].
    ///
    /// # Returns
    /// - [`Ok`] once the provider has accepted the message.
    /// - [`Err`] containing a [`RelayError`] otherwise. Nothing is retried.
    async fn relay_submission(&self, submission: &Submission) -> Result<(), RelayError>;
}

#[cfg(test)]
mock! {
    pub ContactService {}

    impl Clone for ContactService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl ContactService for ContactService {
        fn ensure_configured(&self) -> Result<(), RelayError>;
        async fn relay_submission(&self, submission: &Submission) -> Result<(), RelayError>;
    }
}

/// Contact relay service implementation
#[derive(Debug, Clone)]
pub struct ContactServiceImpl<M>
where
    M: Mailer,
{
    config: ContactConfig,
    mailer: Arc<M>,
}

impl<M> ContactServiceImpl<M>
where
    M: Mailer,
{
    /// Creates a new contact relay service.
    pub fn new(config: ContactConfig, mailer: Arc<M>) -> Self {
        Self { config, mailer }
    }

    fn compose(
        &self,
        submission: &Submission,
        submitted_at: DateTime<Utc>,
    ) -> Result<Message, RelayError> {
        let template = NewInquiryTemplate::new(&self.config.sender.name, submission, submitted_at);

        Ok(Message {
            sender: self.config.sender.clone(),
            to: vec![self.config.recipient.clone()],
            reply_to: Some(Mailbox::new(submission.email.clone(), &submission.name)),
            subject: template.subject(),
            html_body: template.render_html()?,
            plain_body: template.render_plain(),
        })
    }
}

#[async_trait]
impl<M> ContactService for ContactServiceImpl<M>
where
    M: Mailer,
{
    fn ensure_configured(&self) -> Result<(), RelayError> {
        if self.mailer.is_configured() {
            Ok(())
        } else {
            warn!("email provider credential not configured");
            Err(RelayError::ConfigMissing)
        }
    }

    async fn relay_submission(&self, submission: &Submission) -> Result<(), RelayError> {
        self.ensure_configured()?;

        let message = self.compose(submission, Utc::now())?;

        debug!(subject = %message.subject, "relaying contact submission");

        self.mailer.send_email(&message).await?;

        info!(reply_to = %submission.email, "contact submission relayed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::communication::{
        email_addresses::EmailAddress,
        mailer::{tests::MockMailer, MailerError},
    };

    use super::*;

    fn config() -> ContactConfig {
        let operator = Mailbox::new(
            EmailAddress::new("contact@1889dev.com").expect("valid email"),
            "1889 Development",
        );

        ContactConfig {
            sender: operator.clone(),
            recipient: operator,
        }
    }

    fn submission() -> Submission {
        Submission::new(
            Some("Jane Doe".to_string()),
            Some("jane@example.com".to_string()),
            None,
            Some("Automation".to_string()),
            Some("Need help".to_string()),
        )
        .expect("valid submission")
    }

    #[tokio::test]
    async fn test_relay_submission_success() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer.expect_is_configured().return_const(true);
        mailer
            .expect_send_email()
            .times(1)
            .withf(|message| {
                let reply_to = message.reply_to.as_ref().expect("reply to is set");

                reply_to.email.as_str() == "jane@example.com"
                    && reply_to.name == "Jane Doe"
                    && message.to.len() == 1
                    && message.to[0].email.as_str() == "contact@1889dev.com"
                    && message.sender.name == "1889 Development"
                    && message.subject == "New Inquiry: Jane Doe - Automation"
                    && message.plain_body.contains("Need help")
                    && message.html_body.contains("Need help")
            })
            .returning(|_| Ok(()));

        let service = ContactServiceImpl::new(config(), Arc::new(mailer));

        service.relay_submission(&submission()).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_relay_submission_provider_failure() {
        let mut mailer = MockMailer::new();

        mailer.expect_is_configured().return_const(true);
        mailer.expect_send_email().times(1).returning(|_| {
            Err(MailerError::Rejected {
                status: 400,
                body: r#"{"code":"invalid_parameter"}"#.to_string(),
            })
        });

        let service = ContactServiceImpl::new(config(), Arc::new(mailer));

        let result = service.relay_submission(&submission()).await;

        assert!(matches!(result, Err(RelayError::ProviderCallFailed(_))));
    }

    #[tokio::test]
    async fn test_relay_submission_not_configured_sends_nothing() {
        let mut mailer = MockMailer::new();

        mailer.expect_is_configured().return_const(false);
        mailer.expect_send_email().times(0);

        let service = ContactServiceImpl::new(config(), Arc::new(mailer));

        let result = service.relay_submission(&submission()).await;

        assert!(matches!(result, Err(RelayError::ConfigMissing)));
    }

    #[test]
    fn test_ensure_configured() {
        let mut mailer = MockMailer::new();
        mailer.expect_is_configured().return_const(true);

        let service = ContactServiceImpl::new(config(), Arc::new(mailer));

        assert!(service.ensure_configured().is_ok());
    }

    #[tokio::test]
    async fn test_same_submission_is_relayed_every_time() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer.expect_is_configured().return_const(true);
        mailer.expect_send_email().times(2).returning(|_| Ok(()));

        let service = ContactServiceImpl::new(config(), Arc::new(mailer));

        service.relay_submission(&submission()).await?;
        service.relay_submission(&submission()).await?;

        Ok(())
    }
}
