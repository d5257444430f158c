//! HTTP adapter mapping for domain errors.
//!
//! The domain error stays HTTP-agnostic; this module turns it into the JSON
//! failure envelope and status code clients see.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use tracing::{debug, error};

use super::schemas::ErrorEnvelope;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Detail sent in place of any internal error message.
pub const INTERNAL_DETAIL: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn client_detail(error: &Error) -> &str {
    match error.code() {
        ErrorCode::InternalError => INTERNAL_DETAIL,
        _ => error.message(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if self.code() == ErrorCode::InternalError {
            error!(
                error = %self,
                trace_id = self.trace_id().unwrap_or_default(),
                "request failed unexpectedly"
            );
        }

        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorEnvelope::new(status.as_u16(), client_detail(self)))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(INTERNAL_DETAIL)
    }
}

/// Reject unreadable JSON bodies with the standard 400 envelope.
///
/// Wired through `web::JsonConfig::error_handler` so malformed bodies,
/// missing fields and schema-level address rejections share the validation
/// failure shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejecting unreadable JSON payload");
    Error::invalid_request(err.to_string()).into()
}
