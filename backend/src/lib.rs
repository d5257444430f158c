//! NovaShield contact-form backend.
//!
//! Validates contact submissions and notifies the office and the submitter
//! by email. The domain sits behind ports; HTTP and SMTP live at the edges.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
