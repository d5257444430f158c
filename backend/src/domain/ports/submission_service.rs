//! Driving port for contact-form submissions.
//!
//! Inbound adapters call [`SubmissionService::submit`] with the raw draft and
//! render whatever comes back; validation, notification and outcome
//! aggregation all sit behind the port.

use async_trait::async_trait;

use crate::domain::{ContactSubmission, Error, SubmissionDraft};

/// Message returned to submitters once validation has passed.
pub const RECEIVED_MESSAGE: &str = "Your submission has been received.";

/// Outcome reported back to the submitter.
///
/// Carries the confirmation outcome only; the office notification never
/// surfaces here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Human-readable acknowledgement.
    pub message: String,
    /// Whether the confirmation email reached the relay.
    pub user_email_sent: bool,
}

impl SubmissionReceipt {
    /// Receipt for an accepted submission.
    pub fn received(user_email_sent: bool) -> Self {
        Self {
            message: RECEIVED_MESSAGE.to_owned(),
            user_email_sent,
        }
    }
}

/// Accepts one submission per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Validate `draft`, notify both parties and report the result.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` when the draft fails validation; nothing is sent.
    /// - `InternalError` for unexpected failures while orchestrating.
    async fn submit(&self, draft: SubmissionDraft) -> Result<SubmissionReceipt, Error>;
}

/// Validates drafts and reports every confirmation as sent, without mailing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSubmissionService;

#[async_trait]
impl SubmissionService for FixtureSubmissionService {
    async fn submit(&self, draft: SubmissionDraft) -> Result<SubmissionReceipt, Error> {
        ContactSubmission::try_from_draft(draft)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        Ok(SubmissionReceipt::received(true))
    }
}
