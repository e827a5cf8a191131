use serde::{Deserialize, Serialize};

/// A contact-form submission as produced by the upstream web form.
///
/// The current producer emits lowercase keys; the legacy producer's serializer
/// emitted PascalCase, so both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSubmission {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Email")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub plain_text: String,
}

pub const CONFIRMATION_SUBJECT: &str = "Confirmation of your contact form";

impl EmailRequest {
    /// Build the confirmation email for a form submission. The HTML body
    /// carries one extra closing sentence the plain-text body omits.
    pub fn confirmation(submission: &FormSubmission) -> Self {
        Self {
            to: submission.email.clone(),
            subject: CONFIRMATION_SUBJECT.to_string(),
            html_body: format!(
                "<p>Thank you {} for contacting us! We have received your message \
                 and will get back to you as soon as we can.</p>",
                submission.name
            ),
            plain_text: format!(
                "Thank you {} for contacting us! We have received your message.",
                submission.name
            ),
        }
    }

    pub fn has_recipient(&self) -> bool {
        !self.to.trim().is_empty()
    }
}
