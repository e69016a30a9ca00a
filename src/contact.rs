use crate::{Millis, Scheduled};
use std::fmt;
use thiserror::Error;

pub const DEFAULT_SERVICE: &str = "General Inquiry";
pub const SUBMIT_DELAY_MS: Millis = 1_500;
pub const STATUS_CLEAR_MS: Millis = 5_000;
pub const SUBMITTING_STATUS: &str = "Submitting...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Service,
    Message,
}

impl ContactField {
    /// Resolves a form control's `name` attribute.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "service" => Some(Self::Service),
            "message" => Some(Self::Message),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Service => "service",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(ContactField),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("a message is already being sent")]
    Pending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl Default for ContactFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            service: DEFAULT_SERVICE.to_string(),
            message: String::new(),
        }
    }
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Service => &self.service,
            ContactField::Message => &self.message,
        }
    }

    fn validate(&self) -> Result<(), ContactError> {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::Missing(field));
            }
        }

        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Stage {
    Editing,
    Submitting { deliver_at: Millis, sender: String },
    Sent { clear_at: Millis },
}

/// Contact form with a mocked delivery: submitting shows a pending status, then a
/// thank-you note that clears itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    stage: Stage,
    status: Option<String>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            fields: ContactFields::default(),
            stage: Stage::Editing,
            status: None,
        }
    }
}

impl ContactForm {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.stage, Stage::Submitting { .. })
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.fields.name = value,
            ContactField::Email => self.fields.email = value,
            ContactField::Service => self.fields.service = value,
            ContactField::Message => self.fields.message = value,
        }
    }

    /// Pre-fills the form after a service or "why choose us" card was picked.
    pub fn apply_inquiry(&mut self, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            return;
        }

        self.fields.service = title.to_string();
        self.fields.message = inquiry_message(title);
    }

    pub fn submit(&mut self, now: Millis) -> Result<(), ContactError> {
        if self.is_submitting() {
            return Err(ContactError::Pending);
        }
        self.fields.validate()?;

        log::info!("contact inquiry queued for {}", self.fields.service);
        self.stage = Stage::Submitting {
            deliver_at: now + SUBMIT_DELAY_MS,
            sender: self.fields.name.trim().to_string(),
        };
        self.status = Some(SUBMITTING_STATUS.to_string());
        Ok(())
    }
}

impl Scheduled for ContactForm {
    fn next_deadline(&self) -> Option<Millis> {
        match self.stage {
            Stage::Editing => None,
            Stage::Submitting { deliver_at, .. } => Some(deliver_at),
            Stage::Sent { clear_at } => Some(clear_at),
        }
    }

    fn advance(&mut self, now: Millis) {
        while let Some(due) = self.next_deadline().filter(|deadline| *deadline <= now) {
            match std::mem::replace(&mut self.stage, Stage::Editing) {
                Stage::Submitting { sender, .. } => {
                    self.status = Some(thank_you_message(&sender));
                    self.fields = ContactFields::default();
                    self.stage = Stage::Sent {
                        clear_at: due + STATUS_CLEAR_MS,
                    };
                }
                Stage::Sent { .. } => self.status = None,
                Stage::Editing => {}
            }
        }
    }
}

pub fn inquiry_message(title: &str) -> String {
    format!("I'm interested in learning more about your \"{title}\" service.")
}

pub fn thank_you_message(name: &str) -> String {
    format!("Thank you, {name}! Your message has been sent. We'll be in touch shortly.")
}

fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(ContactField::Name, "Ada");
        form.set_field(ContactField::Email, "ada@example.com");
        form.set_field(ContactField::Message, "A launch film for our new watch.");
        form
    }

    #[test]
    fn inquiry_prefills_service_and_message() {
        let mut form = ContactForm::default();
        form.apply_inquiry("Cinematic Videos");

        assert_eq!(form.fields().service, "Cinematic Videos");
        assert_eq!(
            form.fields().message,
            "I'm interested in learning more about your \"Cinematic Videos\" service."
        );
    }

    #[test]
    fn blank_inquiry_is_ignored() {
        let mut form = ContactForm::default();
        form.apply_inquiry("  ");
        assert_eq!(form.fields(), &ContactFields::default());
    }

    #[test]
    fn submission_walks_through_status_messages() {
        let mut form = filled_form();
        form.submit(1_000).expect("valid form submits");
        assert_eq!(form.status(), Some(SUBMITTING_STATUS));

        form.advance(1_000 + SUBMIT_DELAY_MS - 1);
        assert_eq!(form.status(), Some(SUBMITTING_STATUS));

        form.advance(1_000 + SUBMIT_DELAY_MS);
        assert_eq!(
            form.status(),
            Some("Thank you, Ada! Your message has been sent. We'll be in touch shortly.")
        );
        assert_eq!(form.fields(), &ContactFields::default());

        form.advance(1_000 + SUBMIT_DELAY_MS + STATUS_CLEAR_MS);
        assert_eq!(form.status(), None);
        assert_eq!(form.next_deadline(), None);
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let mut form = ContactForm::default();
        assert_eq!(form.submit(0), Err(ContactError::Missing(ContactField::Name)));

        form.set_field(ContactField::Name, "Ada");
        assert_eq!(form.submit(0), Err(ContactError::Missing(ContactField::Email)));
        assert_eq!(form.status(), None);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled_form();
        for email in ["ada", "ada@", "@example.com", "ada@example", "ada@ex ample.com"] {
            form.set_field(ContactField::Email, email);
            assert_eq!(form.submit(0), Err(ContactError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut form = filled_form();
        form.submit(0).expect("valid form submits");
        assert_eq!(form.submit(10), Err(ContactError::Pending));
    }

    #[test]
    fn field_names_resolve() {
        assert_eq!(ContactField::from_name("service"), Some(ContactField::Service));
        assert_eq!(ContactField::from_name("phone"), None);
        assert_eq!(ContactError::Missing(ContactField::Message).to_string(), "message is required");
    }
}
