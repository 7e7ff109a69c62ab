//! Brevo transactional email implementation

use anyhow::Context;
use async_trait::async_trait;
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::domain::communication::mailer::{Mailbox, Mailer, MailerError, Message};

/// Brevo configuration
#[derive(Clone, Default, Parser)]
pub struct BrevoConfig {
    /// The Brevo API key. Without it every submission fails fast.
    #[clap(long, env = "BREVO_API_KEY")]
    pub api_key: Option<String>,

    /// The transactional email endpoint
    #[clap(
        long,
        env = "BREVO_API_URL",
        default_value = "https://api.brevo.com/v3/smtp/email"
    )]
    pub api_url: String,
}

impl std::fmt::Debug for BrevoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrevoConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Request body of `POST /v3/smtp/email`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendTransacEmail<'a> {
    sender: &'a Mailbox,
    to: &'a [Mailbox],
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a Mailbox>,
    subject: &'a str,
    text_content: &'a str,
    html_content: &'a str,
}

impl<'a> From<&'a Message> for SendTransacEmail<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            sender: &message.sender,
            to: &message.to,
            reply_to: message.reply_to.as_ref(),
            subject: &message.subject,
            text_content: &message.plain_body,
            html_content: &message.html_body,
        }
    }
}

/// Success body of `POST /v3/smtp/email`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendTransacEmailResponse {
    message_id: Option<String>,
}

/// Brevo mailer
#[derive(Debug, Clone)]
pub struct BrevoMailer {
    config: BrevoConfig,
    client: reqwest::Client,
}

impl BrevoMailer {
    /// Create a new Brevo mailer
    pub fn new(config: BrevoConfig) -> Self {
        info!(
            has_api_key = config.api_key.is_some(),
            key_length = config.api_key.as_ref().map_or(0, String::len),
            api_url = %config.api_url,
            "Brevo mailer configured"
        );

        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Mailer for BrevoMailer {
    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    async fn send_email(&self, message: &Message) -> Result<(), MailerError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(MailerError::NotConfigured);
        };

        debug!("sending email via Brevo");

        let response = self
            .client
            .post(&self.config.api_url)
            .header("accept", "application/json")
            .header("api-key", api_key)
            .json(&SendTransacEmail::from(message))
            .send()
            .await
            .with_context(|| format!("failed to reach Brevo at {}", self.config.api_url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("failed to read Brevo response")?;

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "Brevo API error response");

            return Err(MailerError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str::<SendTransacEmailResponse>(&body) {
            Ok(sent) => info!(message_id = ?sent.message_id, "email sent via Brevo"),
            Err(e) => warn!(error = %e, body = %body, "email sent but Brevo response was unreadable"),
        }

        Ok(())
    }
}
