//! Outbound email values handed to the [`Mailer`](crate::domain::ports::Mailer) port.

/// Whether a body is HTML markup or plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentKind {
    /// `text/html` body.
    #[default]
    Html,
    /// `text/plain` body.
    Plain,
}

/// One message addressed to a single recipient.
///
/// Built per send and consumed by the mailer; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    recipient: String,
    subject: String,
    body: String,
    kind: ContentKind,
}

impl EmailMessage {
    /// Assemble an HTML message.
    pub fn html(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::new(recipient, subject, body, ContentKind::Html)
    }

    /// Assemble a message with an explicit content kind.
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        kind: ContentKind,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
            kind,
        }
    }

    /// Destination address, unparsed.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Subject line.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Rendered body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Body content kind.
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Convenience check for [`ContentKind::Html`].
    pub fn is_html(&self) -> bool {
        matches!(self.kind, ContentKind::Html)
    }
}

/// Result of one send attempt, reduced to pass/fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The relay accepted the message.
    Delivered,
    /// The attempt failed for any reason; details were logged by the mailer.
    Failed,
}

impl DeliveryOutcome {
    /// `true` for [`DeliveryOutcome::Delivered`].
    #[must_use]
    pub fn is_delivered(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl From<bool> for DeliveryOutcome {
    fn from(delivered: bool) -> Self {
        if delivered {
            Self::Delivered
        } else {
            Self::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_constructor_sets_kind() {
        let message = EmailMessage::html("ada@example.com", "Hi", "<p>Hi</p>");
        assert!(message.is_html());
        assert_eq!(message.recipient(), "ada@example.com");
    }

    #[test]
    fn plain_messages_are_not_html() {
        let message = EmailMessage::new("ada@example.com", "Hi", "Hi", ContentKind::Plain);
        assert!(!message.is_html());
    }

    #[test]
    fn outcome_maps_from_bool() {
        assert!(DeliveryOutcome::from(true).is_delivered());
        assert!(!DeliveryOutcome::from(false).is_delivered());
    }
}
