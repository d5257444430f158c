//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! port, so they can be exercised with doubles.

use std::sync::Arc;

use crate::domain::ports::SubmissionService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub submissions: Arc<dyn SubmissionService>,
}

impl HttpState {
    /// Bundle the submission use-case for handlers.
    pub fn new(submissions: Arc<dyn SubmissionService>) -> Self {
        Self { submissions }
    }
}
