//! Wire shapes shared across handlers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Value of `status` on every failure body.
pub const ERROR_STATUS: &str = "error";

/// Failure body returned for every non-2xx response the API produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `"error"`.
    #[schema(example = "error")]
    pub status: String,
    /// Mirrors the HTTP status code.
    #[schema(example = 400)]
    pub status_code: u16,
    /// Reason shown to the client; generic for server faults.
    #[schema(example = "Name is required")]
    pub detail: String,
}

impl ErrorEnvelope {
    /// Envelope for `status_code` carrying `detail`.
    pub fn new(status_code: u16, detail: impl Into<String>) -> Self {
        Self {
            status: ERROR_STATUS.to_owned(),
            status_code,
            detail: detail.into(),
        }
    }
}
