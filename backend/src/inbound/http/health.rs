//! Service banner, health summary and orchestration health checks.
//!
//! `/` and `/api/health` report a fixed payload regardless of relay
//! availability. `/health/ready` reflects [`HealthState`]; `/health/live`
//! answers whenever the process can serve a request.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Service name reported by the health summary.
pub const SERVICE_NAME: &str = "NovaShield API";
/// Banner returned from the root path.
pub const BANNER: &str = "NovaShield API is running";

/// Root banner payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BannerResponse {
    #[schema(example = "NovaShield API is running")]
    pub message: String,
}

/// Health summary payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "NovaShield API")]
    pub service: String,
}

impl HealthResponse {
    fn healthy() -> Self {
        Self {
            status: "healthy".to_owned(),
            service: SERVICE_NAME.to_owned(),
        }
    }
}

/// Readiness flag shared with the server bootstrap.
#[derive(Default)]
pub struct HealthState {
    ready: AtomicBool,
}

impl HealthState {
    /// Not ready until the listener is bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip readiness once the listener is bound.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

fn check_response(passing: bool) -> HttpResponse {
    let mut response = if passing {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Root banner.
#[utoipa::path(
    get,
    path = "/",
    tags = ["health"],
    responses((status = 200, description = "Service banner", body = BannerResponse))
)]
#[get("/")]
pub async fn root() -> web::Json<BannerResponse> {
    web::Json(BannerResponse {
        message: BANNER.to_owned(),
    })
}

/// Health summary. Always healthy while the process can answer.
#[utoipa::path(
    get,
    path = "/api/health",
    tags = ["health"],
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
#[get("/api/health")]
pub async fn api_health() -> web::Json<HealthResponse> {
    web::Json(HealthResponse::healthy())
}

/// Readiness check: 200 once the server is bound, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    check_response(state.is_ready())
}

/// Liveness check: 200 while the process is serving.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses((status = 200, description = "Server is alive"))
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    check_response(true)
}
