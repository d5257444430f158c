//! Domain primitives and services.
//!
//! Purpose: model a contact-form submission from validation through
//! notification without any knowledge of HTTP or SMTP. Adapters reach the
//! domain only through the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure type.
//! - SubmissionDraft / ContactSubmission: raw and validated submissions.
//! - EmailMessage / DeliveryOutcome: what the mailer consumes and returns.
//! - ContactSubmissionService: the submission state machine.

pub mod email;
pub mod error;
pub mod notification;
pub mod ports;
pub mod submission;
pub mod submission_service;
pub mod trace_id;

pub use self::email::{ContentKind, DeliveryOutcome, EmailMessage};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::submission::{
    ContactSubmission, EMAIL_PATTERN, SubmissionDraft, SubmissionValidationError, has_email_shape,
};
pub use self::submission_service::ContactSubmissionService;
pub use self::trace_id::TraceId;
