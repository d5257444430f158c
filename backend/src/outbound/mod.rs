//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **smtp**: lettre-backed [`Mailer`](crate::domain::ports::Mailer) talking
//!   to a mail relay over STARTTLS.
//!
//! Adapters translate between domain values and wire formats and contain no
//! business logic.

pub mod smtp;
