//! Rendering of the two notification emails sent per submission.
//!
//! Submitter-controlled text is HTML-escaped before it is placed in a body.
//! Subjects are plain header text and carry the trimmed name verbatim.

use crate::domain::{ContactSubmission, EmailMessage};

/// Placeholder rendered for optional fields the submitter left out.
pub const NOT_PROVIDED: &str = "N/A";

/// Brand name used in subjects and signatures.
pub const BRAND: &str = "NovaShield";

/// Subject of the confirmation sent to the submitter.
pub const CONFIRMATION_SUBJECT: &str = "We received your message - NovaShield";

fn escape(text: &str) -> String {
    ammonia::clean_text(text)
}

/// Absent and empty optionals both render as [`NOT_PROVIDED`].
fn or_placeholder(value: Option<&str>) -> String {
    value
        .filter(|text| !text.is_empty())
        .map_or_else(|| NOT_PROVIDED.to_owned(), escape)
}

/// Office notification listing every submitted field.
pub fn admin_notification(submission: &ContactSubmission, admin_address: &str) -> EmailMessage {
    let body = format!(
        r#"<html>
<body style="font-family: Arial;">
    <h2>New Contact Form Submission</h2>
    <p><b>Name:</b> {name}</p>
    <p><b>Email:</b> {email}</p>
    <p><b>Company:</b> {company}</p>
    <p><b>Phone:</b> {phone}</p>
    <p><b>Service:</b> {service}</p>
    <hr>
    <p><b>Message:</b></p>
    <p>{message}</p>
</body>
</html>
"#,
        name = escape(submission.name()),
        email = escape(submission.email()),
        company = or_placeholder(submission.company()),
        phone = or_placeholder(submission.phone()),
        service = or_placeholder(submission.service_type()),
        message = escape(submission.message()),
    );
    EmailMessage::html(
        admin_address,
        format!("New Contact Request - {}", submission.name()),
        body,
    )
}

/// Thank-you note addressed to the submitter; mentions only their name.
pub fn user_confirmation(submission: &ContactSubmission) -> EmailMessage {
    let body = format!(
        r#"<html>
<body style="font-family: Arial;">
    <h2>Thank you, {name}!</h2>
    <p>Your message has been received.</p>
    <p>Our team will contact you shortly.</p>
    <br>
    <p>Regards,<br><b>{BRAND} Team</b></p>
</body>
</html>
"#,
        name = escape(submission.name()),
    );
    EmailMessage::html(submission.email(), CONFIRMATION_SUBJECT, body)
}
