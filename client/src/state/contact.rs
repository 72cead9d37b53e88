//! Contact form fields and submission state machine.
//!
//! DESIGN
//! ======
//! `Idle -> Loading -> Success | Error`. A submit that fails the input guard
//! is a no-op. `Success` and `Error` are terminal for that attempt: the next
//! field edit returns the machine to `Idle`, and the retained contents can be
//! sent again. Fields are never cleared.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::api::ApiError;
use crate::net::types::ContactMessage;

/// Minimum message length is strictly greater than this many characters.
pub const MIN_MESSAGE_CHARS: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubmitStatus {
    /// Inline status text, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Loading => Some("Sending..."),
            Self::Success => Some("Thanks! Your message has been sent."),
            Self::Error => Some("Something went wrong. Please try again."),
        }
    }

    pub fn is_settled(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Form contents plus submission status.
#[derive(Clone, Debug, Default)]
pub struct ContactState {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: SubmitStatus,
}

impl ContactState {
    /// Update one field. Editing after a settled attempt re-arms the form.
    pub fn edit(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
        if self.status.is_settled() {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Whether the current contents pass the submit guard.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && looks_like_email(&self.email)
            && self.message.trim().chars().count() > MIN_MESSAGE_CHARS
    }

    /// Attempt to start a submission.
    ///
    /// Returns the payload to send and moves to `Loading`, or `None` with no
    /// state change when the guard fails or the form is not `Idle`.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.status != SubmitStatus::Idle || !self.is_valid() {
            return None;
        }
        self.status = SubmitStatus::Loading;
        Some(ContactMessage {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            message: self.message.trim().to_owned(),
        })
    }

    /// Settle an in-flight submission. Ignored unless `Loading`.
    pub fn finish(&mut self, outcome: &Result<(), ApiError>) {
        if self.status != SubmitStatus::Loading {
            return;
        }
        self.status = if outcome.is_ok() { SubmitStatus::Success } else { SubmitStatus::Error };
    }
}

/// `local@domain` with both sides non-empty. Nothing else is checked.
pub fn looks_like_email(raw: &str) -> bool {
    raw.trim()
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
}
