//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use novashield_backend::domain::ports::{FixtureSubmissionService, SubmissionService};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) submissions: Arc<dyn SubmissionService>,
}

impl ServerConfig {
    /// Configuration binding `bind_addr`.
    ///
    /// Submissions go to [`FixtureSubmissionService`] until
    /// [`with_submission_service`](Self::with_submission_service) replaces it.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            submissions: Arc::new(FixtureSubmissionService),
        }
    }

    /// Route submissions through `service`.
    #[must_use]
    pub fn with_submission_service(mut self, service: Arc<dyn SubmissionService>) -> Self {
        self.submissions = service;
        self
    }

    /// Socket the server will bind.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "read by server tests only")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
