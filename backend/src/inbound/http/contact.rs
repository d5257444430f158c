//! Contact-form submission endpoint.
//!
//! ```text
//! POST /api/submit-form
//! {"name":"Ada","email":"ada@example.com","message":"Hello"}
//! ```

use actix_web::{post, web};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ApiResult;
use super::error::json_error_handler;
use super::schemas::ErrorEnvelope;
use super::state::HttpState;
use crate::domain::SubmissionDraft;
use crate::domain::ports::SubmissionReceipt;

/// Value of `status` on an accepted submission.
pub const SUCCESS_STATUS: &str = "success";

/// Inbound contact-form payload.
///
/// `email` is parsed as an RFC 5322 address during extraction, so obviously
/// broken addresses never reach the validator.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitFormRequest {
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(value_type = String, format = Email, example = "ada@example.com")]
    pub email: EmailAddress,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[schema(example = "Hello")]
    pub message: String,
    #[serde(default)]
    pub service_type: Option<String>,
}

impl From<SubmitFormRequest> for SubmissionDraft {
    fn from(value: SubmitFormRequest) -> Self {
        Self {
            name: value.name,
            email: value.email.to_string(),
            company: value.company,
            phone: value.phone,
            message: value.message,
            service_type: value.service_type,
        }
    }
}

/// Outbound acknowledgement for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubmitFormResponse {
    #[schema(example = "success")]
    pub status: String,
    #[schema(example = "Your submission has been received.")]
    pub message: String,
    /// Whether the confirmation email reached the relay.
    pub user_email_sent: bool,
}

impl From<SubmissionReceipt> for SubmitFormResponse {
    fn from(receipt: SubmissionReceipt) -> Self {
        Self {
            status: SUCCESS_STATUS.to_owned(),
            message: receipt.message,
            user_email_sent: receipt.user_email_sent,
        }
    }
}

/// JSON extractor settings for submission bodies.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Accept a contact-form submission and notify both parties.
#[utoipa::path(
    post,
    path = "/api/submit-form",
    tags = ["contact"],
    request_body = SubmitFormRequest,
    responses(
        (status = 200, description = "Submission accepted", body = SubmitFormResponse),
        (status = 400, description = "Invalid submission", body = ErrorEnvelope),
        (status = 500, description = "Unexpected failure", body = ErrorEnvelope)
    )
)]
#[post("/api/submit-form")]
pub async fn submit_form(
    state: web::Data<HttpState>,
    payload: web::Json<SubmitFormRequest>,
) -> ApiResult<web::Json<SubmitFormResponse>> {
    let draft = SubmissionDraft::from(payload.into_inner());
    let receipt = state.submissions.submit(draft).await?;
    Ok(web::Json(receipt.into()))
}

#[cfg(test)]
#[path = "contact_tests.rs"]
mod tests;
