//! Email address validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing an email address.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    /// The input was empty (after trimming whitespace).
    #[error("email address cannot be empty")]
    Empty,

    /// The input exceeds the maximum accepted length.
    #[error("email address cannot exceed {} characters", Email::MAX_LENGTH)]
    TooLong,

    /// The input is not of the form `local@domain`.
    #[error("email address must look like local@domain")]
    Malformed,
}

/// A structurally valid email address.
///
/// Validation is intentionally shallow - non-empty local part and domain
/// around a single `@` cut. There is no mail server behind this storefront,
/// so deliverability never comes into play; the type exists so the identity
/// boundary and forms cannot hold arbitrary junk strings.
///
/// The address is stored exactly as supplied (trimmed, not case-folded);
/// any comparison semantics belong to the caller.
///
/// # Example
///
/// ```
/// use riddhi_core::Email;
///
/// let email = Email::parse("priya@example.com").unwrap();
/// assert_eq!(email.as_str(), "priya@example.com");
///
/// assert!(Email::parse("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns an [`EmailError`] if the input is empty, longer than
    /// [`Email::MAX_LENGTH`], or not of the form `local@domain`.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }
        if trimmed.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong);
        }

        match trimmed.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(trimmed.to_owned()))
            }
            _ => Err(EmailError::Malformed),
        }
    }

    /// The address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
