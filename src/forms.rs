use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub const MIN_MESSAGE_LEN: usize = 20;

pub const CONTACT_THANKS: &str =
    "Thanks for reaching out! We'll get back to you within 24 hours.";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Service,
    Message,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Service => self.service = value,
            ContactField::Message => self.message = value,
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ContactFieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Please provide more details (min 20 characters)")]
    MessageTooShort,
}

/// Per-field validation results for the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<ContactFieldError>,
    pub email: Option<ContactFieldError>,
    pub message: Option<ContactFieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    /// Drops the error shown under `field` once the user edits it.
    pub fn clear(&mut self, field: ContactField) {
        match field {
            ContactField::Name => self.name = None,
            ContactField::Email => self.email = None,
            ContactField::Message => self.message = None,
            ContactField::Service => {}
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_contact(form: &ContactForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some(ContactFieldError::NameRequired);
    }

    if form.email.trim().is_empty() {
        errors.email = Some(ContactFieldError::EmailRequired);
    } else if !is_valid_email(&form.email) {
        errors.email = Some(ContactFieldError::EmailInvalid);
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.message = Some(ContactFieldError::MessageRequired);
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.message = Some(ContactFieldError::MessageTooShort);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A contact request as it would be handed to a mail service.
#[derive(Clone, Debug, Serialize)]
pub struct ContactSubmission {
    pub id: String,
    #[serde(flatten)]
    pub form: ContactForm,
    pub created_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn new(form: ContactForm, created_at: DateTime<Utc>) -> Self {
        Self {
            id: format!("contact-{}", created_at.timestamp_millis()),
            form,
            created_at,
        }
    }
}

/// Where a simulated submission is in its round trip.
///
/// `Sent` holds until the reset delay elapses. The contact form keeps its
/// values until then.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitState {
    pub fn accepts_submit(self) -> bool {
        self == SubmitState::Idle
    }
}

/// The newsletter box only wants something that looks like an address.
pub fn accepts_newsletter_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            service: "web-dev".into(),
            message: "We need a landing page for our launch.".into(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(validate_contact(&filled()), Ok(()));
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate_contact(&ContactForm::default()).unwrap_err();
        assert_eq!(errors.name, Some(ContactFieldError::NameRequired));
        assert_eq!(errors.email, Some(ContactFieldError::EmailRequired));
        assert_eq!(errors.message, Some(ContactFieldError::MessageRequired));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let form = ContactForm {
            name: "   ".into(),
            ..filled()
        };
        let errors = validate_contact(&form).unwrap_err();
        assert_eq!(errors.name, Some(ContactFieldError::NameRequired));
        assert!(errors.email.is_none());
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["ada", "ada@example", "ada @example.com", "@example.com"] {
            let form = ContactForm {
                email: email.into(),
                ..filled()
            };
            let errors = validate_contact(&form).unwrap_err();
            assert_eq!(errors.email, Some(ContactFieldError::EmailInvalid), "{email}");
        }
    }

    #[test]
    fn short_message_asks_for_details() {
        let form = ContactForm {
            message: "  hi there  ".into(),
            ..filled()
        };
        let errors = validate_contact(&form).unwrap_err();
        assert_eq!(errors.message, Some(ContactFieldError::MessageTooShort));
        assert_eq!(
            errors.message.unwrap().to_string(),
            "Please provide more details (min 20 characters)"
        );
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut errors = validate_contact(&ContactForm::default()).unwrap_err();
        errors.clear(ContactField::Email);
        assert!(errors.email.is_none());
        assert!(errors.name.is_some());
    }

    #[test]
    fn submission_serializes_flat() {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let submission = ContactSubmission::new(filled(), at);
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["service"], "web-dev");
        assert_eq!(json["id"], format!("contact-{}", at.timestamp_millis()));
        assert_eq!(json["created_at"], "2025-01-02T03:04:05Z");
    }

    #[test]
    fn only_an_idle_form_submits() {
        assert!(SubmitState::default().accepts_submit());
        assert!(!SubmitState::Sending.accepts_submit());
        assert!(!SubmitState::Sent.accepts_submit());
    }

    #[test]
    fn success_notice_promises_a_reply() {
        assert_eq!(
            CONTACT_THANKS,
            "Thanks for reaching out! We'll get back to you within 24 hours."
        );
    }

    #[test]
    fn newsletter_needs_an_at_sign() {
        assert!(accepts_newsletter_email(" a@b "));
        assert!(!accepts_newsletter_email("   "));
        assert!(!accepts_newsletter_email("ab.com"));
    }
}
