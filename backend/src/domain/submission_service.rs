//! Contact submission service implementing the driving port.
//!
//! A submission moves through Received → Validated → Notifying → Responded.
//! Validation failures skip straight to the response; once validated both
//! notifications are always attempted, office first, and only the
//! submitter's confirmation outcome reaches the caller.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::FutureExt;
use tracing::{debug, error, info, warn};

use crate::domain::notification::{admin_notification, user_confirmation};
use crate::domain::ports::{Mailer, SubmissionReceipt, SubmissionService};
use crate::domain::{ContactSubmission, Error, SubmissionDraft, SubmissionValidationError};

/// Submission service backed by a [`Mailer`].
#[derive(Clone)]
pub struct ContactSubmissionService<M: ?Sized> {
    mailer: Arc<M>,
    admin_address: String,
}

impl<M: ?Sized> ContactSubmissionService<M> {
    /// Create a service notifying `admin_address` about every submission.
    pub fn new(mailer: Arc<M>, admin_address: impl Into<String>) -> Self {
        Self {
            mailer,
            admin_address: admin_address.into(),
        }
    }
}

fn panic_detail<'a>(payload: &'a (dyn Any + Send + 'static)) -> &'a str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

fn map_validation_error(error: SubmissionValidationError) -> Error {
    debug!(field = error.field(), %error, "submission rejected");
    Error::invalid_request(error.to_string())
}

#[async_trait]
impl<M> SubmissionService for ContactSubmissionService<M>
where
    M: Mailer + ?Sized,
{
    async fn submit(&self, draft: SubmissionDraft) -> Result<SubmissionReceipt, Error> {
        let submission = ContactSubmission::try_from_draft(draft).map_err(map_validation_error)?;

        match AssertUnwindSafe(self.notify(&submission))
            .catch_unwind()
            .await
        {
            Ok(receipt) => Ok(receipt),
            Err(payload) => {
                error!(
                    panic = panic_detail(payload.as_ref()),
                    "submission processing panicked"
                );
                Err(Error::internal("submission processing panicked"))
            }
        }
    }
}

impl<M> ContactSubmissionService<M>
where
    M: Mailer + ?Sized,
{
    async fn notify(&self, submission: &ContactSubmission) -> SubmissionReceipt {
        let admin_message = admin_notification(submission, &self.admin_address);
        let user_message = user_confirmation(submission);

        let admin_outcome = self.mailer.send(&admin_message).await;
        let user_outcome = self.mailer.send(&user_message).await;

        if !admin_outcome.is_delivered() {
            // Logged only: the submitter is never told the office missed it.
            warn!(
                subject = admin_message.subject(),
                "admin notification email failed"
            );
        }
        if !user_outcome.is_delivered() {
            warn!("confirmation email to submitter failed");
        }
        info!(
            admin_delivered = admin_outcome.is_delivered(),
            user_delivered = user_outcome.is_delivered(),
            "submission processed"
        );

        SubmissionReceipt::received(user_outcome.is_delivered())
    }
}

#[cfg(test)]
#[path = "submission_service_tests.rs"]
mod tests;
