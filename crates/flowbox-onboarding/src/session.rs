//! Async driver around [`AuthFlow`]
//!
//! Holds the flow behind a mutex, forwards credentials to the identity
//! provider and schedules the role confirmation on the Tokio timer. The mutex
//! is never held across an await point.

use crate::credentials::{AuthMethod, Credentials, OAuthProvider};
use crate::error::AuthError;
use crate::flow::{AuthFlow, AuthStep, FlowSnapshot};
use crate::navigator::Navigator;
use crate::provider::IdentityProvider;
use crate::role::{Destination, UserRole};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub struct OnboardingSession<P, N>
where
    P: IdentityProvider + 'static,
    N: Navigator + 'static,
{
    flow: Arc<Mutex<AuthFlow>>,
    provider: Arc<P>,
    navigator: Arc<N>,
    timer_task: Mutex<Option<JoinHandle<()>>>,
}

impl<P, N> OnboardingSession<P, N>
where
    P: IdentityProvider + 'static,
    N: Navigator + 'static,
{
    pub fn new(flow: AuthFlow, provider: Arc<P>, navigator: Arc<N>) -> Self {
        Self {
            flow: Arc::new(Mutex::new(flow)),
            provider,
            navigator,
            timer_task: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn step(&self) -> AuthStep {
        self.flow.lock().step()
    }

    #[must_use]
    pub fn snapshot(&self) -> FlowSnapshot {
        self.flow.lock().snapshot()
    }

    pub fn show_sign_up(&self) -> Result<(), AuthError> {
        self.flow.lock().show_sign_up()
    }

    pub fn back_to_sign_in(&self) -> Result<(), AuthError> {
        self.flow.lock().back_to_sign_in()
    }

    /// Submit the email form of the current step
    pub async fn submit_email(&self, credentials: Credentials) -> Result<AuthStep, AuthError> {
        let attempt = self.flow.lock().validate_email(&credentials)?;
        let outcome = match attempt.method() {
            AuthMethod::EmailSignUp => self.provider.sign_up(&credentials).await,
            _ => self.provider.sign_in(&credentials).await,
        };
        self.flow.lock().complete_credentials(&attempt, outcome)
    }

    pub async fn sign_in_with(&self, provider: OAuthProvider) -> Result<AuthStep, AuthError> {
        let attempt = self.flow.lock().validate_oauth(provider)?;
        let outcome = self.provider.oauth(provider).await;
        self.flow.lock().complete_credentials(&attempt, outcome)
    }

    pub fn continue_as_guest(&self) -> Result<Destination, AuthError> {
        let destination = self.flow.lock().continue_as_guest()?;
        self.navigator.navigate(destination);
        Ok(destination)
    }

    /// Choose a role; navigation happens once the confirmation delay elapses
    ///
    /// Must be called from within a Tokio runtime.
    pub fn select_role(&self, role: UserRole) -> Result<(), AuthError> {
        let token = self.flow.lock().select_role(role)?;
        let flow = Arc::clone(&self.flow);
        let navigator = Arc::clone(&self.navigator);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(token.delay()).await;
            let destination = flow.lock().fire_confirmation(&token);
            if let Some(destination) = destination {
                navigator.navigate(destination);
            }
        });
        if let Some(previous) = self.timer_task.lock().replace(handle) {
            previous.abort();
        }
        Ok(())
    }

    /// Close the modal; a pending confirmation never fires
    pub fn close(&self) {
        self.flow.lock().close();
        self.abort_timer();
    }

    /// Reopen a closed modal on sign-in; a no-op while it is still open
    pub fn reopen(&self) {
        let mut flow = self.flow.lock();
        if flow.open() {
            self.abort_timer();
        }
    }

    fn abort_timer(&self) {
        if let Some(handle) = self.timer_task.lock().take() {
            handle.abort();
        }
    }
}

impl<P, N> Drop for OnboardingSession<P, N>
where
    P: IdentityProvider + 'static,
    N: Navigator + 'static,
{
    fn drop(&mut self) {
        self.flow.lock().close();
        self.abort_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Identity;
    use crate::navigator::MockNavigator;
    use crate::provider::MockIdentityProvider;
    use async_trait::async_trait;
    use mockall::predicate::eq;
    use std::time::Duration;

    struct RejectingProvider;

    #[async_trait]
    impl IdentityProvider for RejectingProvider {
        async fn sign_in(&self, _: &Credentials) -> Result<Identity, AuthError> {
            Err(AuthError::InvalidCredentials)
        }

        async fn sign_up(&self, _: &Credentials) -> Result<Identity, AuthError> {
            Err(AuthError::InvalidCredentials)
        }

        async fn oauth(&self, provider: OAuthProvider) -> Result<Identity, AuthError> {
            Err(AuthError::ProviderDenied(provider.name().to_string()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn role_navigates_after_delay() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate()
            .with(eq(Destination::Student))
            .times(1)
            .return_const(());

        let session = OnboardingSession::new(
            AuthFlow::new(),
            Arc::new(MockIdentityProvider),
            Arc::new(navigator),
        );
        let step = session
            .submit_email(Credentials::sign_in("a@b.com", "x"))
            .await
            .unwrap();
        assert_eq!(step, AuthStep::RoleSelection);

        session.select_role(UserRole::Student).unwrap();
        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(session.snapshot().open);

        tokio::time::sleep(Duration::from_millis(2)).await;
        let snapshot = session.snapshot();
        assert!(!snapshot.open);
        assert_eq!(snapshot.dispatched, Some(Destination::Student));
    }

    #[tokio::test(start_paused = true)]
    async fn close_cancels_pending_navigation() {
        let mut navigator = MockNavigator::new();
        navigator.expect_navigate().never();

        let session = OnboardingSession::new(
            AuthFlow::new(),
            Arc::new(MockIdentityProvider),
            Arc::new(navigator),
        );
        session.sign_in_with(OAuthProvider::Google).await.unwrap();
        session.select_role(UserRole::SoloCreator).unwrap();
        session.close();

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(session.snapshot().dispatched, None);
    }

    #[tokio::test(start_paused = true)]
    async fn reopen_while_open_keeps_pending_navigation() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate()
            .with(eq(Destination::Student))
            .times(1)
            .return_const(());

        let session = OnboardingSession::new(
            AuthFlow::new(),
            Arc::new(MockIdentityProvider),
            Arc::new(navigator),
        );
        session
            .submit_email(Credentials::sign_in("a@b.com", "x"))
            .await
            .unwrap();
        session.select_role(UserRole::Student).unwrap();
        session.reopen();
        assert!(session.snapshot().confirmation_pending);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        let snapshot = session.snapshot();
        assert!(!snapshot.open);
        assert_eq!(snapshot.dispatched, Some(Destination::Student));
    }

    #[tokio::test]
    async fn guest_navigates_to_dashboard() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate()
            .with(eq(Destination::Dashboard))
            .times(1)
            .return_const(());

        let session = OnboardingSession::new(
            AuthFlow::new(),
            Arc::new(MockIdentityProvider),
            Arc::new(navigator),
        );
        assert_eq!(session.continue_as_guest().unwrap(), Destination::Dashboard);
        assert!(!session.snapshot().open);
    }

    #[tokio::test]
    async fn rejected_credentials_stay_on_sign_in() {
        let mut navigator = MockNavigator::new();
        navigator.expect_navigate().never();

        let session = OnboardingSession::new(
            AuthFlow::new(),
            Arc::new(RejectingProvider),
            Arc::new(navigator),
        );
        let err = session
            .submit_email(Credentials::sign_in("a@b.com", "wrong"))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(session.step(), AuthStep::SignIn);
        assert_eq!(
            session.snapshot().last_error.as_deref(),
            Some("invalid credentials")
        );

        let err = session.sign_in_with(OAuthProvider::GitHub).await.unwrap_err();
        assert!(err.is_provider_failure());
        assert_eq!(session.step(), AuthStep::SignIn);
    }

    #[tokio::test]
    async fn sign_up_uses_provider_sign_up() {
        let navigator = MockNavigator::new();
        let session = OnboardingSession::new(
            AuthFlow::new(),
            Arc::new(MockIdentityProvider),
            Arc::new(navigator),
        );
        session.show_sign_up().unwrap();
        session
            .submit_email(Credentials::sign_up("Ada", "ada@b.com", "pw"))
            .await
            .unwrap();
        assert_eq!(session.step(), AuthStep::RoleSelection);
    }
}
