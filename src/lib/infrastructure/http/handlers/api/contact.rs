//! Contact form handler

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    domain::contact::{ContactService, RelayError, Submission, SubmissionError},
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// Shown to visitors once the provider accepted their submission
pub const SUCCESS_MESSAGE: &str =
    "Thank you for your inquiry! We'll get back to you within 24 hours.";

/// Contact form request body. Unknown fields are ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SubmitContactBody {
    /// The submitter's name
    #[schema(example = "Jane Doe")]
    name: Option<String>,

    /// The submitter's email address
    #[schema(example = "jane@example.com")]
    email: Option<String>,

    /// The submitter's company
    #[schema(example = "Acme Manufacturing")]
    company: Option<String>,

    /// The service the submitter is interested in
    #[schema(example = "Systems Integration")]
    service: Option<String>,

    /// The inquiry
    #[schema(example = "We need help connecting our line PLCs to our ERP.")]
    message: Option<String>,
}

impl TryFrom<SubmitContactBody> for Submission {
    type Error = SubmissionError;

    fn try_from(body: SubmitContactBody) -> Result<Self, Self::Error> {
        Submission::new(
            body.name,
            body.email,
            body.company,
            body.service,
            body.message,
        )
    }
}

/// Contact form response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitContactResponse {
    /// Always `true`
    #[schema(example = true)]
    success: bool,

    #[schema(example = "Thank you for your inquiry! We'll get back to you within 24 hours.")]
    message: String,
}

impl SubmitContactResponse {
    fn success() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Relay a contact form submission to the operator
#[utoipa::path(
    post,
    operation_id = "submit_contact",
    tag = "Contact",
    path = "/api/contact",
    request_body = SubmitContactBody,
    responses(
        (status = StatusCode::OK, description = "Submission relayed", body = SubmitContactResponse),
        (status = StatusCode::BAD_REQUEST, description = "Missing fields or invalid email", body = ErrorResponse, example = json!({"success": false, "error": "Name, email, and message are required"})),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Submission could not be relayed", body = ErrorResponse, example = json!({"success": false, "error": "Failed to send message. Please email us directly at contact@1889dev.com"})),
    )
)]
pub async fn handler<C: ContactService>(
    State(state): State<AppState<C>>,
    body: Bytes,
) -> Result<Json<SubmitContactResponse>, ApiError> {
    relay(&state, &body)
        .await
        .map_err(|err| ApiError::from_relay_error(err, &state.config.contact_email))?;

    Ok(Json(SubmitContactResponse::success()))
}

async fn relay<C: ContactService>(state: &AppState<C>, body: &[u8]) -> Result<(), RelayError> {
    state.contact.ensure_configured()?;

    let body: SubmitContactBody = match serde_json::from_slice(body)? {
        object @ Value::Object(_) => serde_json::from_value(object)?,
        other => {
            return Err(RelayError::MalformedInput(format!(
                "expected a JSON object, got {other}"
            )))
        }
    };
    let submission = Submission::try_from(body)?;

    state.contact.relay_submission(&submission).await
}

/// CORS preflight for the contact form
#[utoipa::path(
    options,
    operation_id = "contact_preflight",
    tag = "Contact",
    path = "/api/contact",
    responses(
        (status = StatusCode::OK, description = "Cross-origin POST allowed"),
    )
)]
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
