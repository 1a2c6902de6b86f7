//! Contact form and footer newsletter signup.
//!
//! Both end in a transient confirmation: the contact page swaps to a
//! thank-you note and the footer shows "subscribed". The session handle
//! clears each confirmation three seconds after it appears; the flags here
//! only record state, they do not time anything themselves.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use riddhi_core::{Email, EmailError};

/// Errors raised by the contact form and newsletter signup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    /// A required field was blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The supplied email is not a usable address.
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),
}

// ============================================================================
// Contact form
// ============================================================================

/// The contact page form plus its confirmation flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    submitted: bool,
}

impl ContactForm {
    /// An empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the form and raises the confirmation flag.
    ///
    /// Every field is required and the email must parse. The first blank
    /// field in display order is reported.
    pub fn submit(&mut self) -> Result<(), ContactError> {
        let fields: [(&'static str, &str); 4] = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(label));
            }
        }
        Email::parse(&self.email)?;
        self.submitted = true;
        Ok(())
    }

    /// Whether the thank-you note is currently shown.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Blanks every field and clears the confirmation flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Newsletter signup
// ============================================================================

/// The footer newsletter input plus its confirmation flag.
///
/// Unlike the contact form this lives in the footer, which is rendered on
/// every view, so its confirmation outlives navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSignup {
    pub email: String,
    subscribed: bool,
}

impl NewsletterSignup {
    /// An empty signup box.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the subscription and empties the input on success.
    pub fn subscribe(&mut self) -> Result<(), ContactError> {
        Email::parse(&self.email)?;
        self.email.clear();
        self.subscribed = true;
        Ok(())
    }

    /// Whether the "subscribed" confirmation is currently shown.
    #[must_use]
    pub const fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Clears the confirmation flag. The input is left as typed.
    pub fn reset(&mut self) {
        self.subscribed = false;
    }
}
