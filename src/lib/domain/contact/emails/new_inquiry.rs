//! New inquiry notification template

use anyhow::Result;
use askama::Template;
use chrono::{DateTime, Utc};
use time::{macros::format_description, OffsetDateTime};
use time_tz::{timezones, ToTimezone};

use crate::domain::{communication::email_addresses::EmailAddress, contact::Submission};

const EASTERN_TIMEZONE: &str = "America/New_York";

/// Notification sent to the operator for every contact form submission
#[derive(Debug, Template)]
#[template(path = "emails/contact/new_inquiry.html")]
pub struct NewInquiryTemplate {
    /// Name shown in the plain text heading
    pub brand: String,

    /// Submitter name
    pub name: String,

    /// Submitter email
    pub email: EmailAddress,

    /// Submitter company
    pub company: Option<String>,

    /// Service of interest
    pub service: Option<String>,

    /// The inquiry text
    pub message: String,

    /// Submission time, already formatted for US Eastern
    pub submitted_at: String,
}

impl NewInquiryTemplate {
    /// Creates a new `NewInquiryTemplate`
    pub fn new(brand: &str, submission: &Submission, submitted_at: DateTime<Utc>) -> Self {
        Self {
            brand: brand.to_string(),
            name: submission.name.clone(),
            email: submission.email.clone(),
            company: submission.company.clone(),
            service: submission.service.clone(),
            message: submission.message.clone(),
            submitted_at: eastern_timestamp(submitted_at),
        }
    }

    /// The email subject
    pub fn subject(&self) -> String {
        match &self.service {
            Some(service) => format!("New Inquiry: {} - {service}", self.name),
            None => format!("New Inquiry: {}", self.name),
        }
    }

    /// Renders the HTML version of the email with its stylesheet inlined
    pub fn render_html(&self) -> Result<String> {
        Ok(css_inline::inline(&self.render()?)?)
    }

    /// Renders the plain text version of the email
    pub fn render_plain(&self) -> String {
        let company = self
            .company
            .as_ref()
            .map(|company| format!("\nCompany: {company}"))
            .unwrap_or_default();

        let service = self
            .service
            .as_ref()
            .map(|service| format!("\nService Interest: {service}"))
            .unwrap_or_default();

        format!(
            "New Contact Form Submission - {brand}\n\
             \n\
             From: {name}\n\
             Email: {email}{company}{service}\n\
             \n\
             Message:\n\
             {message}\n\
             \n\
             ---\n\
             Submitted: {submitted_at} EST",
            brand = self.brand,
            name = self.name,
            email = self.email,
            message = self.message,
            submitted_at = self.submitted_at,
        )
    }
}

/// Formats `at` the way an en-US browser shows New York time,
/// e.g. `10/19/2026, 3:04:05 PM`.
pub fn eastern_timestamp(at: DateTime<Utc>) -> String {
    OffsetDateTime::from_unix_timestamp(at.timestamp())
        .ok()
        .zip(timezones::get_by_name(EASTERN_TIMEZONE))
        .and_then(|(utc, tz)| {
            utc.to_timezone(tz)
                .format(format_description!(
                    "[month padding:none]/[day padding:none]/[year], [hour repr:12 padding:none]:[minute]:[second] [period]"
                ))
                .ok()
        })
        .unwrap_or_else(|| at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use testresult::TestResult;

    use super::*;

    fn submission(company: Option<&str>, service: Option<&str>) -> Submission {
        Submission {
            name: "Jane Doe".to_string(),
            email: EmailAddress::new("jane@example.com").expect("valid email"),
            company: company.map(String::from),
            service: service.map(String::from),
            message: "Need help\nwith our PLCs".to_string(),
        }
    }

    fn submitted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 19, 4, 5).unwrap()
    }

    #[test]
    fn test_eastern_timestamp_daylight_saving() {
        assert_eq!(eastern_timestamp(submitted_at()), "10/19/2026, 3:04:05 PM");
    }

    #[test]
    fn test_eastern_timestamp_standard_time() {
        let at = Utc.with_ymd_and_hms(2026, 1, 5, 5, 30, 0).unwrap();

        assert_eq!(eastern_timestamp(at), "1/5/2026, 12:30:00 AM");
    }

    #[test]
    fn test_subject_without_service() {
        let template =
            NewInquiryTemplate::new("1889 Development", &submission(None, None), submitted_at());

        assert_eq!(template.subject(), "New Inquiry: Jane Doe");
    }

    #[test]
    fn test_subject_with_service() {
        let template = NewInquiryTemplate::new(
            "1889 Development",
            &submission(None, Some("Automation")),
            submitted_at(),
        );

        assert_eq!(template.subject(), "New Inquiry: Jane Doe - Automation");
    }

    #[test]
    fn test_plain_text_with_all_fields() {
        let template = NewInquiryTemplate::new(
            "1889 Development",
            &submission(Some("Acme"), Some("Automation")),
            submitted_at(),
        );

        assert_eq!(
            template.render_plain(),
            "New Contact Form Submission - 1889 Development\n\
             \n\
             From: Jane Doe\n\
             Email: jane@example.com\n\
             Company: Acme\n\
             Service Interest: Automation\n\
             \n\
             Message:\n\
             Need help\n\
             with our PLCs\n\
             \n\
             ---\n\
             Submitted: 10/19/2026, 3:04:05 PM EST"
        );
    }

    #[test]
    fn test_plain_text_omits_missing_optional_lines() {
        let template =
            NewInquiryTemplate::new("1889 Development", &submission(None, None), submitted_at());
        let plain = template.render_plain();

        assert!(plain.contains("Email: jane@example.com\n\nMessage:"));
        assert!(!plain.contains("Company:"));
        assert!(!plain.contains("Service Interest:"));
    }

    #[test]
    fn test_html_contains_fields_with_inlined_styles() -> TestResult {
        let template = NewInquiryTemplate::new(
            "1889 Development",
            &submission(Some("Acme"), None),
            submitted_at(),
        );

        let html = template.render_html()?;

        assert!(html.contains("Jane Doe"));
        assert!(html.contains("mailto:jane@example.com"));
        assert!(html.contains("Acme"));
        assert!(!html.contains("Service Interest:"));
        assert!(html.contains("10/19/2026, 3:04:05 PM EST"));
        assert!(html.contains("style=\""));
        assert!(!html.contains("<style>"));

        Ok(())
    }

    #[test]
    fn test_html_escapes_user_input() -> TestResult {
        let mut submission = submission(Some("<b>Acme</b>"), None);
        submission.message = "<script>alert(1)</script>".to_string();

        let html = NewInquiryTemplate::new("1889 Development", &submission, submitted_at())
            .render_html()?;

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>Acme</b>"));

        Ok(())
    }
}
