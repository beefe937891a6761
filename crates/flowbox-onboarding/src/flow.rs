//! Auth modal state machine
//!
//! ```text
//!            show_sign_up            credentials ok
//!   SignIn ───────────────▶ SignUp ─────────────────┐
//!     │  ▲                    │                     ▼
//!     │  └── back_to_sign_in ─┘              RoleSelection ── select_role ──▶ (timer) ──▶ role destination
//!     │                                             ▲
//!     ├── credentials ok / oauth ok ────────────────┘
//!     └── continue_as_guest ──▶ /dashboard
//! ```
//!
//! Credential checks happen in two phases so the machine itself never awaits:
//! `validate_*` records the attempt, the caller talks to the identity
//! provider, and [`AuthFlow::complete_credentials`] applies the outcome.
//! Every step change, close or newer attempt supersedes the outstanding
//! [`CredentialAttempt`], so late outcomes are rejected.

use crate::credentials::{AuthMethod, Credentials, Identity, OAuthProvider};
use crate::error::AuthError;
use crate::role::{Destination, UserRole};
use crate::timer::{TimerSlot, TimerToken};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Delay between confirming a role and leaving the modal
pub const DEFAULT_CONFIRMATION_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlowId(pub Uuid);

impl FlowId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FlowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FlowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthStep {
    #[serde(rename = "signin")]
    SignIn,
    #[serde(rename = "signup")]
    SignUp,
    #[serde(rename = "role-selection")]
    RoleSelection,
}

impl AuthStep {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignIn => "signin",
            Self::SignUp => "signup",
            Self::RoleSelection => "role-selection",
        }
    }
}

impl fmt::Display for AuthStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle for a credential check in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialAttempt {
    method: AuthMethod,
    generation: u64,
}

impl CredentialAttempt {
    #[inline]
    #[must_use]
    pub fn method(&self) -> AuthMethod {
        self.method
    }
}

/// Serializable view of a flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowSnapshot {
    pub id: FlowId,
    pub step: AuthStep,
    pub open: bool,
    pub selected_role: Option<UserRole>,
    pub last_error: Option<String>,
    pub dispatched: Option<Destination>,
    pub confirmation_pending: bool,
}

/// One auth modal instance
#[derive(Debug)]
pub struct AuthFlow {
    id: FlowId,
    step: AuthStep,
    open: bool,
    selected_role: Option<UserRole>,
    identity: Option<Identity>,
    last_error: Option<AuthError>,
    dispatched: Option<Destination>,
    attempt: Option<CredentialAttempt>,
    attempt_generation: u64,
    confirmation: TimerSlot,
    confirmation_delay: Duration,
}

impl AuthFlow {
    /// Open flow on the sign-in step
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: FlowId::new(),
            step: AuthStep::SignIn,
            open: true,
            selected_role: None,
            identity: None,
            last_error: None,
            dispatched: None,
            attempt: None,
            attempt_generation: 0,
            confirmation: TimerSlot::new(),
            confirmation_delay: DEFAULT_CONFIRMATION_DELAY,
        }
    }

    #[must_use]
    pub fn with_confirmation_delay(mut self, delay: Duration) -> Self {
        self.confirmation_delay = delay;
        self
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> FlowId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn step(&self) -> AuthStep {
        self.step
    }

    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    #[must_use]
    pub fn selected_role(&self) -> Option<UserRole> {
        self.selected_role
    }

    #[inline]
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn last_error(&self) -> Option<&AuthError> {
        self.last_error.as_ref()
    }

    /// Destination handed to the navigator, once the flow has finished
    #[inline]
    #[must_use]
    pub fn dispatched(&self) -> Option<Destination> {
        self.dispatched
    }

    #[inline]
    #[must_use]
    pub fn confirmation_delay(&self) -> Duration {
        self.confirmation_delay
    }

    #[inline]
    #[must_use]
    pub fn confirmation_pending(&self) -> bool {
        self.confirmation.is_armed()
    }

    /// Open the modal. Reopening a closed flow resets it to sign-in.
    ///
    /// Returns whether a reset happened; opening an open flow changes nothing.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        tracing::debug!("Reopening auth flow {}", self.id);
        self.step = AuthStep::SignIn;
        self.selected_role = None;
        self.identity = None;
        self.last_error = None;
        self.dispatched = None;
        self.attempt = None;
        self.confirmation.cancel();
        self.open = true;
        true
    }

    /// Close the modal, cancelling any pending confirmation
    pub fn close(&mut self) {
        if self.confirmation.cancel() {
            tracing::debug!("Cancelled pending confirmation for flow {}", self.id);
        }
        self.attempt = None;
        self.open = false;
    }

    pub fn show_sign_up(&mut self) -> Result<(), AuthError> {
        self.expect_step(AuthStep::SignIn, "show sign-up")?;
        self.step = AuthStep::SignUp;
        self.last_error = None;
        self.attempt = None;
        Ok(())
    }

    pub fn back_to_sign_in(&mut self) -> Result<(), AuthError> {
        self.expect_step(AuthStep::SignUp, "go back to sign-in")?;
        self.step = AuthStep::SignIn;
        self.selected_role = None;
        self.last_error = None;
        self.attempt = None;
        Ok(())
    }

    /// First phase of an email submission on sign-in or sign-up
    ///
    /// Validation failures are recorded as `last_error` and returned; the step
    /// does not change.
    pub fn validate_email(
        &mut self,
        credentials: &Credentials,
    ) -> Result<CredentialAttempt, AuthError> {
        self.ensure_open()?;
        let method = match self.step {
            AuthStep::SignIn => AuthMethod::EmailSignIn,
            AuthStep::SignUp => AuthMethod::EmailSignUp,
            AuthStep::RoleSelection => {
                return Err(AuthError::InvalidAction {
                    step: self.step,
                    action: "submit credentials",
                })
            }
        };
        if let Err(err) = credentials.validate(self.step == AuthStep::SignUp) {
            tracing::debug!("Rejected {} form: {}", self.step, err);
            self.last_error = Some(err.clone());
            return Err(err);
        }
        Ok(self.begin_attempt(method))
    }

    /// First phase of an OAuth login; only offered on sign-in
    pub fn validate_oauth(
        &mut self,
        provider: OAuthProvider,
    ) -> Result<CredentialAttempt, AuthError> {
        self.ensure_open()?;
        self.expect_step(AuthStep::SignIn, "use oauth")?;
        Ok(self.begin_attempt(AuthMethod::OAuth(provider)))
    }

    fn begin_attempt(&mut self, method: AuthMethod) -> CredentialAttempt {
        self.attempt_generation += 1;
        let attempt = CredentialAttempt {
            method,
            generation: self.attempt_generation,
        };
        self.last_error = None;
        self.attempt = Some(attempt);
        attempt
    }

    /// Second phase: apply what the identity provider returned
    ///
    /// Success moves to role selection. Failure stays put and is surfaced as
    /// `last_error`. Outcomes for an attempt that is no longer the pending one
    /// (the flow was closed, the step changed or a newer attempt started) are
    /// rejected and leave the flow untouched.
    pub fn complete_credentials(
        &mut self,
        attempt: &CredentialAttempt,
        outcome: Result<Identity, AuthError>,
    ) -> Result<AuthStep, AuthError> {
        self.ensure_open()?;
        if self.attempt.as_ref() != Some(attempt) {
            tracing::warn!("Ignoring stale credential outcome for flow {}", self.id);
            return Err(AuthError::InvalidAction {
                step: self.step,
                action: "complete credentials",
            });
        }
        self.attempt = None;
        let method = attempt.method;
        match outcome {
            Ok(identity) => {
                tracing::info!("Flow {} authenticated via {:?}", self.id, method);
                self.identity = Some(identity);
                self.last_error = None;
                self.step = AuthStep::RoleSelection;
                Ok(self.step)
            }
            Err(err) => {
                tracing::warn!("Flow {} credential step failed: {}", self.id, err);
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Skip auth and role selection entirely
    pub fn continue_as_guest(&mut self) -> Result<Destination, AuthError> {
        self.ensure_open()?;
        self.expect_step(AuthStep::SignIn, "continue as guest")?;
        let destination = Destination::Dashboard;
        tracing::info!("Flow {} continuing as guest", self.id);
        self.dispatched = Some(destination);
        self.close();
        Ok(destination)
    }

    /// Record the role and arm the confirmation timer
    ///
    /// A role can be chosen once per flow.
    pub fn select_role(&mut self, role: UserRole) -> Result<TimerToken, AuthError> {
        self.ensure_open()?;
        self.expect_step(AuthStep::RoleSelection, "select role")?;
        if self.selected_role.is_some() {
            return Err(AuthError::InvalidAction {
                step: self.step,
                action: "change role",
            });
        }
        tracing::info!("Flow {} selected role {}", self.id, role);
        self.selected_role = Some(role);
        Ok(self.confirmation.arm(self.confirmation_delay))
    }

    /// Timer callback. Dispatches only for the live token of an open flow.
    pub fn fire_confirmation(&mut self, token: &TimerToken) -> Option<Destination> {
        if !self.open || !self.confirmation.fire(token) {
            tracing::warn!("Ignoring stale confirmation for flow {}", self.id);
            return None;
        }
        let destination = self.selected_role?.destination();
        self.dispatched = Some(destination);
        self.close();
        tracing::info!("Flow {} dispatched to {}", self.id, destination);
        Some(destination)
    }

    #[must_use]
    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            id: self.id,
            step: self.step,
            open: self.open,
            selected_role: self.selected_role,
            last_error: self.last_error.as_ref().map(ToString::to_string),
            dispatched: self.dispatched,
            confirmation_pending: self.confirmation.is_armed(),
        }
    }

    fn ensure_open(&self) -> Result<(), AuthError> {
        if self.open {
            Ok(())
        } else {
            Err(AuthError::FlowClosed)
        }
    }

    fn expect_step(&self, expected: AuthStep, action: &'static str) -> Result<(), AuthError> {
        self.ensure_open()?;
        if self.step == expected {
            Ok(())
        } else {
            Err(AuthError::InvalidAction {
                step: self.step,
                action,
            })
        }
    }
}

impl Default for AuthFlow {
    fn default() -> Self {
        Self::new()
    }
}
