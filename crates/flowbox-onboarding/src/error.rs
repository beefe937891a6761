//! Error types for onboarding
//!
//! None of these are fatal. The flow stays on its current step and the user
//! can retry the action that failed.

use crate::flow::AuthStep;

/// Credential and flow errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Identity provider rejected the email/password pair
    #[error("invalid credentials")]
    InvalidCredentials,

    /// OAuth provider refused the grant
    #[error("provider denied access: {0}")]
    ProviderDenied(String),

    /// Identity provider could not be reached
    #[error("network unavailable")]
    NetworkUnavailable,

    /// Required form field left blank
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Email does not look like an address
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// Action not offered on the current step
    #[error("cannot {action} during {step}")]
    InvalidAction {
        step: AuthStep,
        action: &'static str,
    },

    /// Flow has been closed; reopen it first
    #[error("onboarding flow is closed")]
    FlowClosed,
}

impl AuthError {
    /// Whether re-submitting the same step can succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials
                | Self::ProviderDenied(_)
                | Self::NetworkUnavailable
                | Self::MissingField(_)
                | Self::InvalidEmail(_)
        )
    }

    /// Whether the error came back from the identity provider
    #[inline]
    #[must_use]
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::ProviderDenied(_) | Self::NetworkUnavailable
        )
    }
}

/// Team and pod setup errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{0} must not be blank")]
    BlankField(&'static str),

    #[error("invalid invite address: {0}")]
    InvalidInvite(String),

    #[error("invalid invite code: {0}")]
    InvalidInviteCode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_display() {
        let err = AuthError::InvalidAction {
            step: AuthStep::RoleSelection,
            action: "continue as guest",
        };
        assert_eq!(err.to_string(), "cannot continue as guest during role-selection");
        assert_eq!(AuthError::FlowClosed.to_string(), "onboarding flow is closed");
    }

    #[test]
    fn auth_error_is_retryable() {
        assert!(AuthError::NetworkUnavailable.is_retryable());
        assert!(AuthError::MissingField("email").is_retryable());
        assert!(!AuthError::FlowClosed.is_retryable());
        assert!(!AuthError::InvalidAction {
            step: AuthStep::SignIn,
            action: "select role"
        }
        .is_retryable());
    }

    #[test]
    fn provider_failures_classified() {
        assert!(AuthError::ProviderDenied("github".to_string()).is_provider_failure());
        assert!(!AuthError::InvalidEmail("x".to_string()).is_provider_failure());
    }

    #[test]
    fn setup_error_display() {
        assert_eq!(
            SetupError::BlankField("team name").to_string(),
            "team name must not be blank"
        );
    }
}
