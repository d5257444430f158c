//! SMTP submission adapter.
//!
//! One relay session per message: connect, upgrade with STARTTLS,
//! authenticate, transmit, close. Nothing is pooled or retried.

mod mailer;
mod settings;

pub use mailer::SmtpMailer;
pub use settings::{DEFAULT_MAIL_PORT, DEFAULT_MAIL_TIMEOUT, MailSecret, SmtpSettings};
