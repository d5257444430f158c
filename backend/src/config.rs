//! Process configuration read once from the environment.
//!
//! Every value the service needs is resolved here so the rest of the crate
//! receives an immutable [`AppConfig`] instead of consulting the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use mockable::Env;

use crate::domain::has_email_shape;
use crate::outbound::smtp::{DEFAULT_MAIL_PORT, DEFAULT_MAIL_TIMEOUT, MailSecret, SmtpSettings};

pub(crate) const MAIL_SERVER_ENV: &str = "MAIL_SERVER";
pub(crate) const MAIL_PORT_ENV: &str = "MAIL_PORT";
pub(crate) const MAIL_USERNAME_ENV: &str = "MAIL_USERNAME";
pub(crate) const MAIL_PASSWORD_ENV: &str = "MAIL_PASSWORD";
pub(crate) const MAIL_TIMEOUT_ENV: &str = "MAIL_TIMEOUT_SECS";
pub(crate) const ADMIN_EMAIL_ENV: &str = "ADMIN_EMAIL";
pub(crate) const HOST_ENV: &str = "HOST";
pub(crate) const PORT_ENV: &str = "PORT";

/// Listening address used when `HOST` is unset.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
/// Listening port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

const PORT_EXPECTED: &str = "an integer in 1..=65535";
const SECONDS_EXPECTED: &str = "a positive number of seconds";
const HOST_EXPECTED: &str = "an IPv4 or IPv6 address";
const ADDRESS_EXPECTED: &str = "an address like admin@example.com";

/// Errors raised while reading configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is missing or blank.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but cannot be used.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Immutable service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Relay connection used for both notification emails.
    pub smtp: SmtpSettings,
    /// Recipient of the admin notification.
    pub admin_email: String,
    /// Socket the HTTP server binds.
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Resolve configuration from `env`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mockable::MockEnv;
    /// use novashield_backend::config::AppConfig;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "MAIL_SERVER" => Some("smtp.example.com".to_owned()),
    ///     "MAIL_USERNAME" => Some("bot@example.com".to_owned()),
    ///     "MAIL_PASSWORD" => Some("hunter2".to_owned()),
    ///     "ADMIN_EMAIL" => Some("office@example.com".to_owned()),
    ///     _ => None,
    /// });
    ///
    /// let config = AppConfig::from_env(&env).expect("config resolves");
    /// assert_eq!(config.bind_addr.port(), 5000);
    /// assert_eq!(config.smtp.port(), 587);
    /// ```
    pub fn from_env<E: Env>(env: &E) -> Result<Self, ConfigError> {
        let host = required(env, MAIL_SERVER_ENV)?;
        let username = address_from_env(env, MAIL_USERNAME_ENV)?;
        let password = MailSecret::new(password_from_env(env)?);
        let admin_email = address_from_env(env, ADMIN_EMAIL_ENV)?;
        let port = port_from_env(env, MAIL_PORT_ENV, DEFAULT_MAIL_PORT)?;
        let timeout = timeout_from_env(env)?;

        let smtp = SmtpSettings::new(host, username, password)
            .with_port(port)
            .with_timeout(timeout);

        Ok(Self {
            smtp,
            admin_email,
            bind_addr: bind_addr_from_env(env)?,
        })
    }
}

fn optional<E: Env>(env: &E, name: &'static str) -> Option<String> {
    env.string(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn required<E: Env>(env: &E, name: &'static str) -> Result<String, ConfigError> {
    optional(env, name).ok_or(ConfigError::MissingEnv { name })
}

/// The relay password is used verbatim; only a blank value counts as unset.
fn password_from_env<E: Env>(env: &E) -> Result<String, ConfigError> {
    env.string(MAIL_PASSWORD_ENV)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingEnv {
            name: MAIL_PASSWORD_ENV,
        })
}

fn address_from_env<E: Env>(env: &E, name: &'static str) -> Result<String, ConfigError> {
    let value = required(env, name)?;
    if has_email_shape(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidEnv {
            name,
            value,
            expected: ADDRESS_EXPECTED,
        })
    }
}

fn port_from_env<E: Env>(env: &E, name: &'static str, default: u16) -> Result<u16, ConfigError> {
    let Some(value) = optional(env, name) else {
        return Ok(default);
    };
    match value.parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::InvalidEnv {
            name,
            value,
            expected: PORT_EXPECTED,
        }),
    }
}

fn timeout_from_env<E: Env>(env: &E) -> Result<Duration, ConfigError> {
    let Some(value) = optional(env, MAIL_TIMEOUT_ENV) else {
        return Ok(DEFAULT_MAIL_TIMEOUT);
    };
    match value.parse::<u64>() {
        Ok(seconds) if seconds > 0 => Ok(Duration::from_secs(seconds)),
        _ => Err(ConfigError::InvalidEnv {
            name: MAIL_TIMEOUT_ENV,
            value,
            expected: SECONDS_EXPECTED,
        }),
    }
}

fn bind_addr_from_env<E: Env>(env: &E) -> Result<SocketAddr, ConfigError> {
    let host = match optional(env, HOST_ENV) {
        Some(value) => value.parse::<IpAddr>().map_err(|_| ConfigError::InvalidEnv {
            name: HOST_ENV,
            value,
            expected: HOST_EXPECTED,
        })?,
        None => DEFAULT_HOST,
    };
    let port = port_from_env(env, PORT_ENV, DEFAULT_PORT)?;
    Ok(SocketAddr::new(host, port))
}
