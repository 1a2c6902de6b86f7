//! Identity and the sign-in boundary.
//!
//! [`Authenticator`] is the seam between the session and whatever verifies
//! credentials. The shipped [`DemoAuthenticator`] recognizes one fixed admin
//! account and accepts every other well-formed email as a regular shopper;
//! a backend-verified implementation can stand in without touching the
//! session.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use riddhi_core::{Email, EmailError};

/// Email of the built-in admin account.
pub const ADMIN_EMAIL: &str = "admin@riddhi.com";

/// Password of the built-in admin account.
pub const ADMIN_PASSWORD: &str = "admin123";

/// Errors raised while resolving credentials to an identity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The supplied email is not a usable address.
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),

    /// The password field was left blank.
    #[error("password must not be empty")]
    MissingPassword,
}

// ============================================================================
// Credentials
// ============================================================================

/// Sign-in input as collected from the login or signup form.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: SecretString,
    name: Option<String>,
}

impl Credentials {
    /// Credentials from the login form, which has no name field.
    #[must_use]
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
            name: None,
        }
    }

    /// Credentials from the signup form, which also collects a display name.
    #[must_use]
    pub fn signup(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
            name: Some(name.into()),
        }
    }

    /// The email exactly as typed.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .finish()
    }
}

// ============================================================================
// Identity
// ============================================================================

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Display name shown in the header greeting.
    pub name: String,
    /// Address the account signed in with.
    pub email: Email,
    /// Whether this identity may open the admin panel.
    pub is_admin: bool,
}

/// Resolves credentials to an identity.
pub trait Authenticator {
    /// Verifies `credentials` and produces the signed-in identity.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the email does not parse or the
    /// password is blank.
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError>;
}

/// Demo credential policy.
///
/// Any well-formed email with a non-blank password signs in. The admin
/// email and password pair, compared exactly, is the only path to an admin
/// identity; everything else yields a regular shopper named after the
/// signup form, falling back to "User" when no name was given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoAuthenticator;

impl Authenticator for DemoAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        let email = Email::parse(&credentials.email)?;
        let password = credentials.password.expose_secret();
        if password.is_empty() {
            return Err(AuthError::MissingPassword);
        }

        if email.as_str() == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            return Ok(Identity {
                name: "Admin".to_string(),
                email,
                is_admin: true,
            });
        }

        let name = credentials
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or_else(|| "User".to_string(), ToOwned::to_owned);
        Ok(Identity {
            name,
            email,
            is_admin: false,
        })
    }
}
