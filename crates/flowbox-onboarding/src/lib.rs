//! Flowbox Onboarding
//!
//! Sequences a visitor through credential entry (or the guest bypass) and a
//! mandatory role choice, then hands off to the destination bound to that
//! role.
//!
//! - [`AuthFlow`]: synchronous state machine, one per modal instance
//! - [`OnboardingSession`]: async driver that talks to an [`IdentityProvider`],
//!   runs the confirmation delay on Tokio and calls the [`Navigator`]
//! - [`TimerSlot`]: cancellable one-shot timer tokens
//! - [`setup`]: team and pod setup steps that follow role selection
//!
//! # Example
//!
//! ```rust,ignore
//! use flowbox_onboarding::{AuthFlow, Credentials, MockIdentityProvider, OnboardingSession, UserRole};
//!
//! # async fn example(navigator: std::sync::Arc<impl flowbox_onboarding::Navigator + 'static>) {
//! let session = OnboardingSession::new(AuthFlow::new(), MockIdentityProvider.into(), navigator);
//! session.submit_email(Credentials::sign_in("a@b.com", "x")).await.unwrap();
//! session.select_role(UserRole::Student).unwrap();
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod credentials;
pub mod error;
pub mod flow;
pub mod navigator;
pub mod provider;
pub mod role;
pub mod session;
pub mod setup;
pub mod timer;

pub use credentials::{is_valid_email, AuthMethod, Credentials, Identity, OAuthProvider};
pub use error::{AuthError, SetupError};
pub use flow::{
    AuthFlow, AuthStep, CredentialAttempt, FlowId, FlowSnapshot, DEFAULT_CONFIRMATION_DELAY,
};
pub use navigator::Navigator;
pub use provider::{IdentityProvider, MockIdentityProvider};
pub use role::{Destination, ParseRoleError, UserRole};
pub use session::OnboardingSession;
pub use setup::{InviteCode, PodEntry, PodPlan, PodSetup, TeamGoal, TeamPlan, TeamSetup};
pub use timer::{TimerSlot, TimerToken};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
