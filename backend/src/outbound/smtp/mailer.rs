//! Lettre-backed [`Mailer`] adapter.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, warn};

use super::SmtpSettings;
use crate::domain::ports::{MailDeliveryError, Mailer};
use crate::domain::{ContentKind, DeliveryOutcome, EmailMessage};

/// Sends each message over its own authenticated STARTTLS session.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    settings: SmtpSettings,
}

impl SmtpMailer {
    /// Build a mailer for the configured relay. No connection is opened
    /// until the first send.
    #[must_use]
    pub fn new(settings: SmtpSettings) -> Self {
        Self { settings }
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailDeliveryError> {
        let credentials = Credentials::new(
            self.settings.username.clone(),
            self.settings.password.expose().to_owned(),
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.settings.host)
            .map_err(|err| MailDeliveryError::transport(err.to_string()))?
            .port(self.settings.port)
            .credentials(credentials)
            .build();
        Ok(transport)
    }

    async fn deliver(&self, message: &EmailMessage) -> Result<(), MailDeliveryError> {
        let email = build_message(&self.settings.username, message)?;
        let transport = self.transport()?;
        let timeout = self.settings.timeout;
        match tokio::time::timeout(timeout, transport.send(email)).await {
            Ok(Ok(response)) => {
                debug!(code = %response.code(), "relay accepted message");
                Ok(())
            }
            Ok(Err(err)) => Err(MailDeliveryError::transport(err.to_string())),
            Err(_elapsed) => Err(MailDeliveryError::timeout(timeout.as_secs())),
        }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &EmailMessage) -> DeliveryOutcome {
        match self.deliver(message).await {
            Ok(()) => DeliveryOutcome::Delivered,
            Err(error) => {
                warn!(
                    %error,
                    relay = %self.settings.host,
                    port = self.settings.port,
                    subject = message.subject(),
                    "email delivery failed"
                );
                DeliveryOutcome::Failed
            }
        }
    }
}

/// Assemble a `multipart/alternative` message with a single body part.
pub(crate) fn build_message(sender: &str, message: &EmailMessage) -> Result<Message, MailDeliveryError> {
    let from: Mailbox = sender
        .parse()
        .map_err(|err| MailDeliveryError::address(format!("sender {sender:?}: {err}")))?;
    let to: Mailbox = message.recipient().parse().map_err(|err| {
        MailDeliveryError::address(format!("recipient {:?}: {err}", message.recipient()))
    })?;

    let body = message.body().to_owned();
    let part = match message.kind() {
        ContentKind::Html => SinglePart::html(body),
        ContentKind::Plain => SinglePart::plain(body),
    };

    Message::builder()
        .from(from)
        .to(to)
        .subject(message.subject())
        .multipart(MultiPart::alternative().singlepart(part))
        .map_err(|err| MailDeliveryError::build(err.to_string()))
}

#[cfg(test)]
mod tests {
    //! Message assembly and failure reduction.

    use std::time::Duration;

    use rstest::rstest;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
    use tokio::net::TcpListener;

    use super::*;
    use crate::outbound::smtp::MailSecret;

    const SENDER: &str = "bot@novashield.test";

    fn formatted(message: &EmailMessage) -> String {
        let email = build_message(SENDER, message).expect("message builds");
        String::from_utf8(email.formatted()).expect("message is UTF-8")
    }

    #[rstest]
    fn html_messages_are_single_part_alternatives() {
        let text = formatted(&EmailMessage::html(
            "ada@example.com",
            "Hello Ada",
            "<p>Hi</p>",
        ));
        assert!(text.contains("From: bot@novashield.test"));
        assert!(text.contains("To: ada@example.com"));
        assert!(text.contains("Subject: Hello Ada"));
        assert!(text.contains("multipart/alternative"));
        assert!(text.contains("text/html"));
        assert!(!text.contains("text/plain"));
    }

    #[rstest]
    fn plain_messages_use_text_plain() {
        let text = formatted(&EmailMessage::new(
            "ada@example.com",
            "Hello",
            "Hi",
            ContentKind::Plain,
        ));
        assert!(text.contains("text/plain"));
        assert!(!text.contains("text/html"));
    }

    #[rstest]
    #[case("not an address")]
    #[case("")]
    fn unparsable_recipients_are_address_errors(#[case] recipient: &str) {
        let message = EmailMessage::html(recipient, "Hi", "<p>Hi</p>");
        let err = build_message(SENDER, &message).expect_err("recipient is rejected");
        assert!(matches!(err, MailDeliveryError::Address { .. }));
    }

    #[rstest]
    fn unparsable_sender_is_an_address_error() {
        let message = EmailMessage::html("ada@example.com", "Hi", "<p>Hi</p>");
        let err = build_message("apikey", &message).expect_err("sender is rejected");
        assert!(matches!(err, MailDeliveryError::Address { .. }));
    }

    fn mailer_for(port: u16, timeout: Duration) -> SmtpMailer {
        SmtpMailer::new(
            SmtpSettings::new("127.0.0.1", SENDER, MailSecret::new("secret"))
                .with_port(port)
                .with_timeout(timeout),
        )
    }

    #[tokio::test]
    async fn silent_relay_times_out_as_failure() {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind local listener");
        let port = listener.local_addr().expect("local addr").port();
        let accept = tokio::spawn(async move {
            // Hold the socket open without ever sending a greeting.
            let (socket, _) = listener.accept().await.expect("accept");
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let mailer = mailer_for(port, Duration::from_millis(300));
        let message = EmailMessage::html("ada@example.com", "Hi", "<p>Hi</p>");
        assert_eq!(mailer.send(&message).await, DeliveryOutcome::Failed);
        accept.abort();
    }

    #[tokio::test]
    async fn relay_without_starttls_is_refused_after_ehlo() {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind local listener");
        let port = listener.local_addr().expect("local addr").port();
        let relay = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.expect("accept");
            let (read, mut write) = socket.into_split();
            let mut lines = BufReader::new(read);
            write
                .write_all(b"220 relay.test ESMTP\r\n")
                .await
                .expect("write greeting");
            let mut greeting = String::new();
            lines.read_line(&mut greeting).await.expect("read EHLO");
            write
                .write_all(b"250 relay.test\r\n")
                .await
                .expect("write EHLO reply");
            greeting
        });

        let mailer = mailer_for(port, Duration::from_secs(2));
        let message = EmailMessage::html("ada@example.com", "Hi", "<p>Hi</p>");
        assert_eq!(mailer.send(&message).await, DeliveryOutcome::Failed);

        let greeting = tokio::time::timeout(Duration::from_secs(2), relay)
            .await
            .expect("relay finishes")
            .expect("relay task succeeds");
        assert!(greeting.starts_with("EHLO "), "got {greeting:?}");
    }

    #[tokio::test]
    async fn refused_connection_is_a_failure() {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind local listener");
        let port = listener.local_addr().expect("local addr").port();
        drop(listener);

        let mailer = mailer_for(port, Duration::from_secs(2));
        let message = EmailMessage::html("ada@example.com", "Hi", "<p>Hi</p>");
        assert_eq!(mailer.send(&message).await, DeliveryOutcome::Failed);
    }

    #[tokio::test]
    async fn bad_recipient_fails_without_touching_the_network() {
        let mailer = mailer_for(9, Duration::from_secs(1));
        let message = EmailMessage::html("nobody", "Hi", "<p>Hi</p>");
        assert_eq!(mailer.send(&message).await, DeliveryOutcome::Failed);
    }
}
