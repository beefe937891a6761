//! Scripted end-to-end walkthrough
//!
//! Signs a demo user up, picks a role, follows the setup step the role
//! routes to and opens the resulting workspace.

use flowbox_onboarding::{
    AuthError, AuthFlow, Credentials, Destination, MockIdentityProvider, Navigator,
    OnboardingSession, PodEntry, PodSetup, SetupError, TeamGoal, TeamSetup, UserRole,
};
use flowbox_workspace::{
    AnyWorkspace, FlowboxConfig, MockTimelineGenerator, TimelineRequest, WorkspaceError,
    WorkspaceReport,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const DEMO_NAME: &str = "Flowbox Demo";
const DEMO_EMAIL: &str = "demo@flowbox.dev";
const DEMO_INVITES: &str = "alice@company.com, bob@company.com";

#[derive(Debug, thiserror::Error)]
pub enum WalkthroughError {
    #[error("auth failed: {0}")]
    Auth(#[from] AuthError),

    #[error("setup failed: {0}")]
    Setup(#[from] SetupError),

    #[error("workspace failed: {0}")]
    Workspace(#[from] WorkspaceError),

    #[error("no navigation within {0:?}")]
    NotDispatched(Duration),

    #[error("{0} is not a workspace page")]
    NotAWorkspace(Destination),
}

/// Forwards every navigation onto a channel
#[derive(Debug)]
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<Destination>,
}

impl ChannelNavigator {
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Destination>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, destination: Destination) {
        tracing::info!("Navigating to {}", destination);
        if self.tx.send(destination).is_err() {
            tracing::warn!("Navigation to {} dropped; receiver gone", destination);
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WalkthroughReport {
    pub role: UserRole,
    /// Routes visited, in order
    pub visits: Vec<Destination>,
    pub invite_code: Option<String>,
    pub workspace: WorkspaceReport,
}

/// Run the demo journey for `role`
pub async fn run_walkthrough(
    role: UserRole,
    config: &FlowboxConfig,
) -> Result<WalkthroughReport, WalkthroughError> {
    let (navigator, mut rx) = ChannelNavigator::channel();
    let navigator = Arc::new(navigator);
    let session = OnboardingSession::new(
        AuthFlow::new().with_confirmation_delay(config.confirmation_delay()),
        Arc::new(MockIdentityProvider),
        Arc::clone(&navigator),
    );

    session.show_sign_up()?;
    session
        .submit_email(Credentials::sign_up(DEMO_NAME, DEMO_EMAIL, "demo-password"))
        .await?;
    session.select_role(role)?;

    let wait = config.confirmation_delay() * 2 + Duration::from_secs(1);
    let first = tokio::time::timeout(wait, rx.recv())
        .await
        .ok()
        .flatten()
        .ok_or(WalkthroughError::NotDispatched(wait))?;

    let mut rng = config.rng();
    let mut invite_code = None;
    let landing = match first {
        Destination::TeamSetup => {
            let plan = TeamSetup::new("Demo Team")
                .with_invites(DEMO_INVITES)
                .with_goal(TeamGoal::Project)
                .create()?;
            plan.destination
        }
        Destination::PodEntry => {
            navigator.navigate(PodEntry.start_setup());
            let plan = PodSetup::new("Demo Pod", "Systems Programming")
                .with_invites(DEMO_INVITES)
                .create(&mut rng)?;
            invite_code = Some(plan.code.to_string());
            plan.destination
        }
        other => other,
    };
    if landing != first {
        navigator.navigate(landing);
    }

    let mut workspace = AnyWorkspace::for_destination(landing, config)?
        .ok_or(WalkthroughError::NotAWorkspace(landing))?;
    if role == UserRole::SoloCreator {
        let generator = MockTimelineGenerator::new(config.generation_delay());
        workspace
            .generate_timeline(&generator, TimelineRequest::new("Demo Project"))
            .await?;
    } else {
        workspace.add_random_item(&mut rng);
    }

    drop(session);
    drop(navigator);
    let mut visits = vec![first];
    while let Some(destination) = rx.recv().await {
        visits.push(destination);
    }

    Ok(WalkthroughReport {
        role,
        visits,
        invite_code,
        workspace: workspace.report(),
    })
}
