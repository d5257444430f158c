//! Domain ports: the traits adapters implement (driven) or call (driving).

mod macros;
pub(crate) use macros::define_port_error;

mod mailer;
mod submission_service;

#[cfg(test)]
pub use mailer::MockMailer;
pub use mailer::{FixtureMailer, MailDeliveryError, Mailer};
#[cfg(test)]
pub use submission_service::MockSubmissionService;
pub use submission_service::{
    FixtureSubmissionService, RECEIVED_MESSAGE, SubmissionReceipt, SubmissionService,
};
