//! Test doubles shared by unit tests (in `src/`) and integration tests (in
//! `tests/`).

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::Mailer;
use crate::domain::{DeliveryOutcome, EmailMessage};

/// [`Mailer`] that records every message and fails for chosen recipients.
///
/// # Examples
///
/// ```rust
/// use novashield_backend::domain::ports::Mailer;
/// use novashield_backend::domain::{DeliveryOutcome, EmailMessage};
/// use novashield_backend::test_support::RecordingMailer;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mailer = RecordingMailer::new().failing_for("down@example.com");
/// let message = EmailMessage::html("down@example.com", "Hi", "<p>Hi</p>");
/// assert_eq!(mailer.send(&message).await, DeliveryOutcome::Failed);
/// assert_eq!(mailer.recipients(), vec!["down@example.com".to_owned()]);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<EmailMessage>>,
    failing: HashSet<String>,
}

impl RecordingMailer {
    /// Mailer that delivers everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report [`DeliveryOutcome::Failed`] for `recipient`.
    #[must_use]
    pub fn failing_for(mut self, recipient: impl Into<String>) -> Self {
        self.failing.insert(recipient.into());
        self
    }

    /// Every attempted message, in send order.
    pub fn messages(&self) -> Vec<EmailMessage> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recipients of every attempted message, in send order.
    pub fn recipients(&self) -> Vec<String> {
        self.messages()
            .iter()
            .map(|message| message.recipient().to_owned())
            .collect()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> DeliveryOutcome {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.clone());
        DeliveryOutcome::from(!self.failing.contains(message.recipient()))
    }
}
