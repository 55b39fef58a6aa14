//! Contact form state.
//!
//! The form holds raw strings only; there is no validation, the delivery
//! service is the judge of what it accepts.

use serde::Serialize;

use crate::content::contact::{FAILURE_MESSAGE, SUCCESS_MESSAGE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// DOM id (and `name` attribute) of the matching input.
    pub fn id(self) -> &'static str {
        use crate::constants::*;
        match self {
            ContactField::Name => ID_CONTACT_NAME,
            ContactField::Email => ID_CONTACT_EMAIL,
            ContactField::Subject => ID_CONTACT_SUBJECT,
            ContactField::Message => ID_CONTACT_MESSAGE,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your name",
            ContactField::Email => "your.email@example.com",
            ContactField::Subject => "What's this about?",
            ContactField::Message => "Your message here...",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// The template parameters handed to the delivery service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: SubmissionStatus,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    /// Move to `Sending` and hand out the payload, or `None` while a request
    /// is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.is_sending() {
            return None;
        }
        self.status = SubmissionStatus::Sending;
        Some(ContactPayload {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }

    pub fn complete<E>(&mut self, outcome: Result<(), E>) {
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message.clear();
                self.status = SubmissionStatus::Success;
            }
            Err(_) => self.status = SubmissionStatus::Error,
        }
    }

    /// Banner text under the form; `None` hides the banner.
    pub fn status_message(&self) -> Option<&'static str> {
        match self.status {
            SubmissionStatus::Success => Some(SUCCESS_MESSAGE),
            SubmissionStatus::Error => Some(FAILURE_MESSAGE),
            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
        }
    }

    /// CSS modifier for the banner.
    pub fn status_class(&self) -> &'static str {
        match self.status {
            SubmissionStatus::Success => "status-message success",
            SubmissionStatus::Error => "status-message error",
            _ => "status-message",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(ContactField::Name, "Ada");
        form.set_field(ContactField::Email, "ada@example.com");
        form.set_field(ContactField::Subject, "Hello");
        form.set_field(ContactField::Message, "Nice site");
        form
    }

    #[test]
    fn begin_submit_snapshots_fields() {
        let mut form = filled();
        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.from_name, "Ada");
        assert_eq!(payload.from_email, "ada@example.com");
        assert_eq!(payload.subject, "Hello");
        assert_eq!(payload.message, "Nice site");
        assert!(form.is_sending());
        assert_eq!(form.status_message(), None);
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.status, SubmissionStatus::Sending);
    }

    #[test]
    fn success_clears_fields() {
        let mut form = filled();
        form.begin_submit();
        form.complete::<()>(Ok(()));
        for field in ContactField::ALL {
            assert_eq!(form.field(field), "");
        }
        assert_eq!(form.status_message(), Some(SUCCESS_MESSAGE));
        assert_eq!(form.status_class(), "status-message success");
    }

    #[test]
    fn failure_keeps_fields() {
        let mut form = filled();
        form.begin_submit();
        form.complete(Err("offline"));
        assert_eq!(form.name, "Ada");
        assert_eq!(form.message, "Nice site");
        assert_eq!(form.status, SubmissionStatus::Error);
        assert_eq!(form.status_message(), Some(FAILURE_MESSAGE));
    }

    #[test]
    fn resubmitting_after_an_error_clears_the_banner() {
        let mut form = filled();
        form.begin_submit();
        form.complete(Err("boom"));
        assert!(form.begin_submit().is_some());
        assert_eq!(form.status_message(), None);
    }

    #[test]
    fn empty_fields_are_still_sent() {
        let mut form = ContactForm::default();
        assert_eq!(form.begin_submit(), Some(ContactPayload::default()));
    }

    #[test]
    fn field_ids_round_trip() {
        for field in ContactField::ALL {
            assert_eq!(ContactField::from_id(field.id()), Some(field));
        }
        assert_eq!(ContactField::from_id("phone"), None);
    }
}
