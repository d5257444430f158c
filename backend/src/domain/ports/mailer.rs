//! Driven port for outbound email delivery.
//!
//! Adapters keep their failures to themselves: whatever goes wrong while
//! talking to a relay is logged with full detail and reported to the domain
//! as [`DeliveryOutcome::Failed`]. [`MailDeliveryError`] is the shared
//! vocabulary adapters use for that detail.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{DeliveryOutcome, EmailMessage};

define_port_error! {
    /// Detailed reasons a single send attempt failed.
    pub enum MailDeliveryError {
        /// Sender or recipient address could not be parsed.
        Address { message: String } => "invalid mail address: {message}",
        /// The MIME message could not be assembled.
        Build { message: String } => "failed to build message: {message}",
        /// Connection, TLS, authentication or protocol failure.
        Transport { message: String } => "mail relay transport failed: {message}",
        /// The relay session exceeded its time budget.
        Timeout { seconds: u64 } => "mail relay session timed out after {seconds}s",
    }
}

/// Sends one message per call.
///
/// Implementations must not panic or propagate errors; every failure becomes
/// [`DeliveryOutcome::Failed`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Attempt delivery of `message`.
    async fn send(&self, message: &EmailMessage) -> DeliveryOutcome;
}

/// Mailer that accepts every message without sending anything.
///
/// Used when no relay is configured in tests and local tooling.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMailer;

#[async_trait]
impl Mailer for FixtureMailer {
    async fn send(&self, _message: &EmailMessage) -> DeliveryOutcome {
        DeliveryOutcome::Delivered
    }
}
