//! Workspace reports and serializable snapshots

use crate::profile::{View, WorkspaceProfile};
use flowbox_board::{
    Board, BoardItem, ItemKind, KanbanBoard, Member, Milestone, Task, TaskStatus, Timeline,
};
use flowbox_onboarding::UserRole;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::Write as _;

/// Progress summary shown on the reports view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceReport {
    pub role: UserRole,
    pub title: String,
    pub item_count: usize,
    pub items_by_kind: IndexMap<String, usize>,
    pub task_count: usize,
    pub tasks_by_status: IndexMap<String, usize>,
    pub completion_percent: u8,
    pub milestones_by_status: IndexMap<String, usize>,
}

impl WorkspaceReport {
    pub(crate) fn build<K: ItemKind, S: TaskStatus>(
        role: UserRole,
        title: &str,
        board: &Board<K>,
        kanban: &KanbanBoard<S>,
        timeline: &Timeline,
    ) -> Self {
        Self {
            role,
            title: title.to_string(),
            item_count: board.len(),
            items_by_kind: board
                .counts_by_kind()
                .into_iter()
                .map(|(kind, count)| (kind.label().to_string(), count))
                .collect(),
            task_count: kanban.len(),
            tasks_by_status: kanban
                .column_counts()
                .into_iter()
                .map(|(status, count)| (status.label().to_string(), count))
                .collect(),
            completion_percent: kanban.completion_percent(),
            milestones_by_status: timeline
                .status_counts()
                .into_iter()
                .map(|(status, count)| (status.label().to_string(), count))
                .collect(),
        }
    }

    /// Plain-text rendering for terminals
    #[must_use]
    pub fn generate_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== {} ({}) ===", self.title, self.role.title());
        let _ = writeln!(out, "Items: {}", self.item_count);
        for (kind, count) in &self.items_by_kind {
            let _ = writeln!(out, "  {kind:<12} {count}");
        }
        if self.task_count > 0 {
            let _ = writeln!(
                out,
                "Tasks: {} ({}% done)",
                self.task_count, self.completion_percent
            );
            for (status, count) in &self.tasks_by_status {
                let _ = writeln!(out, "  {status:<12} {count}");
            }
        }
        let milestones: usize = self.milestones_by_status.values().sum();
        if milestones > 0 {
            let _ = writeln!(out, "Milestones: {milestones}");
            for (status, count) in &self.milestones_by_status {
                let _ = writeln!(out, "  {status:<12} {count}");
            }
        }
        out
    }
}

/// Borrowed view of a workspace for the presentation layer
#[derive(Debug, Serialize)]
#[serde(bound = "")]
pub struct WorkspaceSnapshot<'a, P: WorkspaceProfile> {
    pub role: UserRole,
    pub title: &'a str,
    pub view: View,
    pub views: &'static [View],
    pub items: &'a [BoardItem<P::Kind>],
    pub tasks: &'a [Task<P::Status>],
    pub members: &'a [Member],
    pub milestones: &'a [Milestone],
}
