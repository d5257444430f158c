//! Relay connection settings.

use std::fmt;
use std::time::Duration;

use zeroize::Zeroizing;

/// Standard mail submission port.
pub const DEFAULT_MAIL_PORT: u16 = 587;

/// Upper bound on a single relay session.
pub const DEFAULT_MAIL_TIMEOUT: Duration = Duration::from_secs(20);

/// SMTP account secret, wiped from memory on drop and never printed.
#[derive(Clone)]
pub struct MailSecret(Zeroizing<String>);

impl MailSecret {
    /// Wrap a secret value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Borrow the secret for handing to the transport.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for MailSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MailSecret(<redacted>)")
    }
}

/// Builder-style settings for [`SmtpMailer`](super::SmtpMailer).
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) username: String,
    pub(crate) password: MailSecret,
    pub(crate) timeout: Duration,
}

impl SmtpSettings {
    /// Settings for `host` on the default port and timeout.
    ///
    /// `username` doubles as the sender address of every message.
    #[must_use]
    pub fn new(host: impl Into<String>, username: impl Into<String>, password: MailSecret) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_MAIL_PORT,
            username: username.into(),
            password,
            timeout: DEFAULT_MAIL_TIMEOUT,
        }
    }

    /// Override the relay port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the per-session timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Relay host name.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Relay port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Authenticated account, also used as `From`.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Per-session timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
