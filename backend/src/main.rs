//! Backend entry-point: loads configuration, wires the mail adapter and
//! serves the contact API.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use novashield_backend::config::AppConfig;
use novashield_backend::domain::ContactSubmissionService;
use novashield_backend::inbound::http::health::HealthState;
use novashield_backend::outbound::smtp::SmtpMailer;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env(&DefaultEnv::new()).map_err(std::io::Error::other)?;
    info!(
        bind_addr = %config.bind_addr,
        relay = config.smtp.host(),
        relay_port = config.smtp.port(),
        "configuration loaded"
    );

    let mailer = Arc::new(SmtpMailer::new(config.smtp));
    let submissions = Arc::new(ContactSubmissionService::new(mailer, config.admin_email));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state,
        ServerConfig::new(config.bind_addr).with_submission_service(submissions),
    )?;
    server.await
}
