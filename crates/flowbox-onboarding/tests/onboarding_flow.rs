use flowbox_onboarding::{
    AuthError, AuthFlow, AuthStep, Credentials, Destination, Identity,
    MockIdentityProvider, Navigator, OAuthProvider, OnboardingSession, PodEntry, PodSetup,
    TeamSetup, UserRole,
};
use flowbox_test_utils::{
    seeded_rng, sign_in_credentials, sign_up_credentials, FailingIdentityProvider,
    FlakyIdentityProvider, RecordingNavigator,
};
use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_sign_up_to_team_setup() {
    let navigator = Arc::new(RecordingNavigator::new());
    let session = OnboardingSession::new(
        AuthFlow::new(),
        Arc::new(MockIdentityProvider),
        Arc::clone(&navigator),
    );

    session.show_sign_up().unwrap();
    session.submit_email(sign_up_credentials()).await.unwrap();
    session.select_role(UserRole::SmallTeam).unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(navigator.visits(), vec![Destination::TeamSetup]);

    let plan = TeamSetup::new("Rockets")
        .with_invites("bob@company.com, mia@company.com")
        .create()
        .unwrap();
    assert_eq!(plan.invites.len(), 2);
    navigator.navigate(plan.destination);
    assert_eq!(navigator.last(), Some(Destination::Team));
}

#[tokio::test(start_paused = true)]
async fn test_learning_pod_then_join() {
    let navigator = Arc::new(RecordingNavigator::new());
    let session = OnboardingSession::new(
        AuthFlow::new(),
        Arc::new(MockIdentityProvider),
        Arc::clone(&navigator),
    );
    session.sign_in_with(OAuthProvider::GitHub).await.unwrap();
    session.select_role(UserRole::LearningPod).unwrap();
    tokio::time::sleep(Duration::from_millis(1001)).await;
    assert_eq!(navigator.last(), Some(Destination::PodEntry));

    let (code, destination) = PodEntry.join("pod-x7k2q").unwrap();
    assert_eq!(code.as_str(), "POD-X7K2Q");
    assert_eq!(destination, Destination::Pod);

    let mut rng = seeded_rng();
    let plan = PodSetup::new("Bio crew", "Biology").create(&mut rng).unwrap();
    assert!(plan.code.as_str().starts_with("POD-"));
}

#[tokio::test(start_paused = true)]
async fn test_reopen_after_close_starts_over() {
    let navigator = Arc::new(RecordingNavigator::new());
    let session = OnboardingSession::new(
        AuthFlow::new().with_confirmation_delay(Duration::from_millis(250)),
        Arc::new(MockIdentityProvider),
        Arc::clone(&navigator),
    );
    session.submit_email(sign_in_credentials()).await.unwrap();
    session.select_role(UserRole::Student).unwrap();
    session.close();
    session.reopen();
    tokio::time::sleep(Duration::from_millis(1000)).await;

    assert!(navigator.visits().is_empty());
    assert_eq!(session.step(), AuthStep::SignIn);
    assert_eq!(session.snapshot().selected_role, None);

    session.submit_email(sign_in_credentials()).await.unwrap();
    session.select_role(UserRole::SoloCreator).unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(navigator.visits(), vec![Destination::SoloCreator]);
}

#[tokio::test]
async fn test_failing_provider_keeps_step_and_error() {
    let navigator = Arc::new(RecordingNavigator::new());
    let session = OnboardingSession::new(
        AuthFlow::new(),
        Arc::new(FailingIdentityProvider::new(AuthError::ProviderDenied(
            "google".to_string(),
        ))),
        Arc::clone(&navigator),
    );
    let err = session.sign_in_with(OAuthProvider::Google).await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(session.step(), AuthStep::SignIn);
    assert_eq!(
        session.snapshot().last_error.as_deref(),
        Some("provider denied access: google")
    );
    assert!(session.select_role(UserRole::Student).is_err());

    assert_eq!(session.continue_as_guest().unwrap(), Destination::Dashboard);
    assert_eq!(navigator.visits(), vec![Destination::Dashboard]);
}

#[tokio::test]
async fn test_retry_after_network_failure() {
    let session = OnboardingSession::new(
        AuthFlow::new(),
        Arc::new(FlakyIdentityProvider::new(1)),
        Arc::new(RecordingNavigator::new()),
    );
    assert_eq!(
        session.submit_email(sign_in_credentials()).await,
        Err(AuthError::NetworkUnavailable)
    );
    assert_eq!(
        session.submit_email(sign_in_credentials()).await,
        Ok(AuthStep::RoleSelection)
    );
    assert_eq!(session.snapshot().last_error, None);
}

#[derive(Debug, Clone)]
enum Action {
    ShowSignUp,
    Back,
    SubmitValid,
    SubmitInvalid,
    ProviderFails,
    OAuth,
    Guest,
    Select(UserRole),
    Close,
    Reopen,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::ShowSignUp),
        Just(Action::Back),
        Just(Action::SubmitValid),
        Just(Action::SubmitInvalid),
        Just(Action::ProviderFails),
        Just(Action::OAuth),
        Just(Action::Guest),
        prop::sample::select(UserRole::ALL.to_vec()).prop_map(Action::Select),
        Just(Action::Close),
        Just(Action::Reopen),
    ]
}

proptest! {
    /// Role selection is only reachable through a successful credential step,
    /// and a guest exit never records a role.
    #[test]
    fn prop_role_selection_requires_credentials(actions in prop::collection::vec(action(), 1..40)) {
        let mut flow = AuthFlow::new();
        let mut authenticated = false;

        for action in actions {
            let before = flow.step();
            match action {
                Action::ShowSignUp => { let _ = flow.show_sign_up(); }
                Action::Back => { let _ = flow.back_to_sign_in(); }
                Action::SubmitValid => {
                    let creds = if before == AuthStep::SignUp {
                        Credentials::sign_up("Ada", "ada@b.com", "pw")
                    } else {
                        Credentials::sign_in("ada@b.com", "pw")
                    };
                    if let Ok(attempt) = flow.validate_email(&creds) {
                        let identity = Identity {
                            method: attempt.method(),
                            email: Some("ada@b.com".to_string()),
                            display_name: None,
                        };
                        prop_assert!(flow.complete_credentials(&attempt, Ok(identity)).is_ok());
                        authenticated = true;
                    }
                }
                Action::SubmitInvalid => {
                    let _ = flow.validate_email(&Credentials::sign_in("nope", ""));
                    prop_assert_eq!(flow.step(), before);
                }
                Action::ProviderFails => {
                    if let Ok(attempt) = flow.validate_email(&Credentials::sign_up("Ada", "ada@b.com", "pw")) {
                        prop_assert!(flow.complete_credentials(&attempt, Err(AuthError::InvalidCredentials)).is_err());
                    }
                    prop_assert_eq!(flow.step(), before);
                }
                Action::OAuth => {
                    if let Ok(attempt) = flow.validate_oauth(OAuthProvider::Google) {
                        let identity = Identity {
                            method: attempt.method(),
                            email: None,
                            display_name: None,
                        };
                        prop_assert!(flow.complete_credentials(&attempt, Ok(identity)).is_ok());
                        authenticated = true;
                    }
                }
                Action::Guest => {
                    if flow.continue_as_guest().is_ok() {
                        prop_assert_eq!(flow.selected_role(), None);
                        prop_assert_eq!(flow.dispatched(), Some(Destination::Dashboard));
                        prop_assert!(!flow.is_open());
                    }
                }
                Action::Select(role) => {
                    if let Ok(token) = flow.select_role(role) {
                        prop_assert_eq!(flow.fire_confirmation(&token), Some(role.destination()));
                    }
                }
                Action::Close => flow.close(),
                Action::Reopen => {
                    let was_open = flow.is_open();
                    let reset = flow.open();
                    prop_assert_eq!(reset, !was_open);
                    if reset {
                        authenticated = false;
                    }
                }
            }

            if flow.step() == AuthStep::RoleSelection {
                prop_assert!(authenticated);
            }
            if flow.selected_role().is_some() {
                prop_assert_eq!(flow.step(), AuthStep::RoleSelection);
            }
        }
    }
}
