//! Per-role workspace profiles
//!
//! A profile fixes the card kinds, status columns, sidebar views and seed
//! content of one workspace page.

use crate::seed;
use flowbox_board::{
    BoardItem, CanvasKind, ItemKind, PodKind, PodStatus, Roster, StudyKind, Task, TaskStatus,
    TeamKind, TeamStatus,
};
use flowbox_onboarding::UserRole;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sidebar view of a workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Canvas,
    Timeline,
    Exports,
    Study,
    Reports,
    Resources,
    Tasks,
    Assignments,
}

impl View {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Canvas => "canvas",
            Self::Timeline => "timeline",
            Self::Exports => "exports",
            Self::Study => "study",
            Self::Reports => "reports",
            Self::Resources => "resources",
            Self::Tasks => "tasks",
            Self::Assignments => "assignments",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait WorkspaceProfile: Send + Sync + 'static {
    type Kind: ItemKind;
    type Status: TaskStatus;

    const ROLE: UserRole;

    /// Views offered in the sidebar; the first one is active on load
    const VIEWS: &'static [View];

    const DEFAULT_TITLE: &'static str;

    fn seed_items() -> Vec<BoardItem<Self::Kind>>;

    fn seed_roster() -> Roster {
        Roster::empty()
    }

    fn seed_tasks() -> Vec<Task<Self::Status>> {
        Vec::new()
    }
}

/// Solo creator canvas
#[derive(Debug, Clone, Copy)]
pub struct Solo;

impl WorkspaceProfile for Solo {
    type Kind = CanvasKind;
    type Status = TeamStatus;

    const ROLE: UserRole = UserRole::SoloCreator;
    const VIEWS: &'static [View] = &[View::Canvas, View::Timeline, View::Exports];
    const DEFAULT_TITLE: &'static str = "My Creative Workspace";

    fn seed_items() -> Vec<BoardItem<CanvasKind>> {
        seed::solo_items()
    }
}

/// Student study board
#[derive(Debug, Clone, Copy)]
pub struct Study;

impl WorkspaceProfile for Study {
    type Kind = StudyKind;
    type Status = PodStatus;

    const ROLE: UserRole = UserRole::Student;
    const VIEWS: &'static [View] = &[View::Canvas, View::Study, View::Reports, View::Resources];
    const DEFAULT_TITLE: &'static str = "My Learning Pod";

    fn seed_items() -> Vec<BoardItem<StudyKind>> {
        seed::study_items()
    }
}

/// Small team board with a kanban
#[derive(Debug, Clone, Copy)]
pub struct Team;

impl WorkspaceProfile for Team {
    type Kind = TeamKind;
    type Status = TeamStatus;

    const ROLE: UserRole = UserRole::SmallTeam;
    const VIEWS: &'static [View] = &[View::Canvas, View::Tasks, View::Timeline, View::Reports];
    const DEFAULT_TITLE: &'static str = "Team Flowboard";

    fn seed_items() -> Vec<BoardItem<TeamKind>> {
        seed::team_items()
    }

    fn seed_roster() -> Roster {
        seed::team_roster()
    }

    fn seed_tasks() -> Vec<Task<TeamStatus>> {
        seed::team_tasks()
    }
}

/// Learning pod board with an assignment tracker
#[derive(Debug, Clone, Copy)]
pub struct Pod;

impl WorkspaceProfile for Pod {
    type Kind = PodKind;
    type Status = PodStatus;

    const ROLE: UserRole = UserRole::LearningPod;
    const VIEWS: &'static [View] = &[View::Canvas, View::Study, View::Assignments, View::Reports];
    const DEFAULT_TITLE: &'static str = "My Learning Pod";

    fn seed_items() -> Vec<BoardItem<PodKind>> {
        seed::pod_items()
    }

    fn seed_roster() -> Roster {
        seed::pod_roster()
    }

    fn seed_tasks() -> Vec<Task<PodStatus>> {
        seed::pod_assignments()
    }
}
