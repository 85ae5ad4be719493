//! Contact form draft and simulated submission.
//!
//! There is no backend: a complete submission is always accepted locally,
//! which sets a fixed confirmation and clears the fields. The status lives
//! only as long as the Contact page.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Shown after a (simulated) successful submission.
pub const CONFIRMATION: &str = "Merci ! Votre message a été envoyé (simulation).";

/// A required field was left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Contact page state: three inputs plus the submission status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: Option<String>,
}

impl ContactForm {
    /// Accept the draft locally.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingField`] for the first blank field; the
    /// form is left untouched in that case.
    pub fn submit(&mut self) -> Result<(), ContactError> {
        for (field, value) in [("name", &self.name), ("email", &self.email), ("message", &self.message)] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.status = Some(CONFIRMATION.to_owned());
        Ok(())
    }
}
