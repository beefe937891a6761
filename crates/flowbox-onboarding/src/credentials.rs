//! Credential forms and the identities they resolve to

use crate::error::AuthError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// `local@domain.tld`, no whitespace
#[must_use]
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

/// Email form contents
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Full name, required on the sign-up step only
    pub name: Option<String>,
}

impl Credentials {
    pub fn sign_in(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: None,
        }
    }

    pub fn sign_up(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: Some(name.into()),
        }
    }

    /// Check the fields the form marks as required
    pub(crate) fn validate(&self, require_name: bool) -> Result<(), AuthError> {
        if require_name && self.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
            return Err(AuthError::MissingField("name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }
        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
    GitHub,
}

impl OAuthProvider {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::GitHub => "github",
        }
    }
}

/// How an identity was established
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMethod {
    EmailSignIn,
    EmailSignUp,
    OAuth(OAuthProvider),
}

/// Result of a successful credential step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub method: AuthMethod,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_requires_email_and_password() {
        assert!(Credentials::sign_in("a@b.com", "x").validate(false).is_ok());
        assert_eq!(
            Credentials::sign_in("", "x").validate(false),
            Err(AuthError::MissingField("email"))
        );
        assert_eq!(
            Credentials::sign_in("a@b.com", "").validate(false),
            Err(AuthError::MissingField("password"))
        );
    }

    #[test]
    fn sign_up_requires_name() {
        assert_eq!(
            Credentials::sign_in("a@b.com", "x").validate(true),
            Err(AuthError::MissingField("name"))
        );
        assert_eq!(
            Credentials::sign_up("  ", "a@b.com", "x").validate(true),
            Err(AuthError::MissingField("name"))
        );
        assert!(Credentials::sign_up("Ada", "a@b.com", "x").validate(true).is_ok());
    }

    #[test]
    fn malformed_email_rejected() {
        assert!(matches!(
            Credentials::sign_in("not-an-email", "x").validate(false),
            Err(AuthError::InvalidEmail(_))
        ));
        assert!(!is_valid_email("a b@c.com"));
        assert!(is_valid_email("alice@company.com"));
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!("{:?}", Credentials::sign_in("a@b.com", "hunter2"));
        assert!(!rendered.contains("hunter2"));
    }
}
