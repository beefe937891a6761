//! Testing utilities for Flowbox workspace
//!
//! Shared test helpers, fixtures, and recording collaborators.

#![allow(missing_docs)]

use async_trait::async_trait;
use chrono::NaiveDate;
use flowbox_board::{
    Board, Bounds, CanvasKind, ItemKind, KanbanBoard, Member, MemberId, Roster, TeamStatus,
};
use flowbox_onboarding::{
    AuthError, AuthMethod, Credentials, Destination, Identity, IdentityProvider, Navigator,
    OAuthProvider,
};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const TEST_SEED: u64 = 0x00F1_0B0C;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(TEST_SEED)
}

pub fn sign_in_credentials() -> Credentials {
    Credentials::sign_in("alice@company.com", "correct horse")
}

pub fn sign_up_credentials() -> Credentials {
    Credentials::sign_up("Alice Doe", "alice@company.com", "correct horse")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Navigator that records every destination it is asked to open
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<Destination>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<Destination> {
        self.visits.lock().clone()
    }

    pub fn last(&self) -> Option<Destination> {
        self.visits.lock().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, destination: Destination) {
        self.visits.lock().push(destination);
    }
}

/// Identity provider that fails every request with the same error
#[derive(Debug, Clone)]
pub struct FailingIdentityProvider {
    error: AuthError,
}

impl FailingIdentityProvider {
    pub fn new(error: AuthError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl IdentityProvider for FailingIdentityProvider {
    async fn sign_in(&self, _: &Credentials) -> Result<Identity, AuthError> {
        Err(self.error.clone())
    }

    async fn sign_up(&self, _: &Credentials) -> Result<Identity, AuthError> {
        Err(self.error.clone())
    }

    async fn oauth(&self, _: OAuthProvider) -> Result<Identity, AuthError> {
        Err(self.error.clone())
    }
}

/// Identity provider that fails the first `failures` requests, then succeeds
#[derive(Debug)]
pub struct FlakyIdentityProvider {
    remaining: Mutex<usize>,
}

impl FlakyIdentityProvider {
    pub fn new(failures: usize) -> Self {
        Self {
            remaining: Mutex::new(failures),
        }
    }

    fn next(&self, method: AuthMethod, email: Option<String>) -> Result<Identity, AuthError> {
        let mut remaining = self.remaining.lock();
        if *remaining > 0 {
            *remaining -= 1;
            return Err(AuthError::NetworkUnavailable);
        }
        Ok(Identity {
            method,
            email,
            display_name: None,
        })
    }
}

#[async_trait]
impl IdentityProvider for FlakyIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        self.next(AuthMethod::EmailSignIn, Some(credentials.email.clone()))
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        self.next(AuthMethod::EmailSignUp, Some(credentials.email.clone()))
    }

    async fn oauth(&self, provider: OAuthProvider) -> Result<Identity, AuthError> {
        self.next(AuthMethod::OAuth(provider), None)
    }
}

pub fn sample_roster() -> Roster {
    Roster::new(vec![
        Member::new("1", "Sarah Chen", "SC", "#3b82f6"),
        Member::new("2", "John Smith", "JS", "#10b981"),
    ])
}

/// Canvas board holding one item of every kind
pub fn populated_canvas() -> Board<CanvasKind> {
    let mut rng = seeded_rng();
    let mut board = Board::new(Bounds::CANVAS);
    for kind in CanvasKind::ALL {
        board.add_item(*kind, &mut rng);
    }
    board
}

/// Team kanban with one task per column, the first assigned to member "1"
pub fn populated_team_kanban() -> KanbanBoard<TeamStatus> {
    let mut kanban = KanbanBoard::new();
    let due = date(2025, 10, 9);
    let first = kanban.add_task("Draft brief", due, Some(MemberId::from("1")));
    let second = kanban.add_task("Collect feedback", due, None);
    kanban.add_task("Ship v1", due, None);
    kanban.set_status(&first, TeamStatus::Done);
    kanban.set_status(&second, TeamStatus::InProgress);
    kanban
}
