//! Kanban status board
//!
//! Tasks live in exactly one of a fixed set of status columns. Any column is
//! reachable from any other; there is no enforced workflow order.

use crate::error::BoardError;
use crate::id::{MemberId, TaskId};
use crate::member::Roster;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Status column set of a kanban board
pub trait TaskStatus: Copy + Eq + Hash + fmt::Debug + Serialize + Send + Sync + 'static {
    /// Columns in display order
    const COLUMNS: &'static [Self];

    /// Status a freshly added task starts in
    const INITIAL: Self;

    fn label(&self) -> &'static str;

    /// Whether the column counts toward completion
    fn is_done(&self) -> bool;
}

/// Small team columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamStatus {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl TaskStatus for TeamStatus {
    const COLUMNS: &'static [Self] = &[Self::ToDo, Self::InProgress, Self::Done];
    const INITIAL: Self = Self::ToDo;

    fn label(&self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Learning pod assignment columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PodStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl TaskStatus for PodStatus {
    const COLUMNS: &'static [Self] = &[Self::Pending, Self::InProgress, Self::Done];
    const INITIAL: Self = Self::Pending;

    fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// A task or assignment card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task<S> {
    id: TaskId,
    title: String,
    assignee: Option<MemberId>,
    due: NaiveDate,
    status: S,
}

impl<S: TaskStatus> Task<S> {
    /// Create an unassigned task
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>, due: NaiveDate, status: S) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            assignee: None,
            due,
            status,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_assignee(mut self, member: impl Into<MemberId>) -> Self {
        self.assignee = Some(member.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    #[must_use]
    pub fn assignee(&self) -> Option<&MemberId> {
        self.assignee.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn due(&self) -> NaiveDate {
        self.due
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> S {
        self.status
    }

    /// Assignee display name, `"Unassigned"` when the reference does not resolve
    #[must_use]
    pub fn assignee_name<'a>(&self, roster: &'a Roster) -> &'a str {
        roster.display_name(self.assignee.as_ref())
    }
}

/// Kanban board over the columns of `S`
#[derive(Debug, Clone)]
pub struct KanbanBoard<S: TaskStatus> {
    tasks: Vec<Task<S>>,
}

impl<S: TaskStatus> KanbanBoard<S> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Create a board pre-populated with `tasks`
    ///
    /// # Errors
    /// - `BoardError::DuplicateItemId` if two tasks share an id
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task<S>>) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for task in tasks {
            board.insert_task(task)?;
        }
        Ok(board)
    }

    /// Add a task in the initial column with a generated id
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        due: NaiveDate,
        assignee: Option<MemberId>,
    ) -> TaskId {
        let id = loop {
            let candidate = TaskId::generate();
            if self.get(&candidate).is_none() {
                break candidate;
            }
        };
        let mut task = Task::new(id.clone(), title, due, S::INITIAL);
        task.assignee = assignee;
        tracing::debug!("Adding task {} to {}", id, S::INITIAL.label());
        self.tasks.push(task);
        id
    }

    /// Append a caller-built task
    ///
    /// # Errors
    /// - `BoardError::DuplicateItemId` if the id is already present
    pub fn insert_task(&mut self, task: Task<S>) -> Result<(), BoardError> {
        if self.get(task.id()).is_some() {
            return Err(BoardError::DuplicateItemId(task.id().to_string()));
        }
        self.tasks.push(task);
        Ok(())
    }

    pub fn remove_task(&mut self, id: &TaskId) -> Option<Task<S>> {
        let index = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(index))
    }

    /// Move a task to `status`. Returns `false` if the id is unknown.
    pub fn set_status(&mut self, id: &TaskId, status: S) -> bool {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => {
                tracing::debug!(
                    "Moving task {} from {} to {}",
                    id,
                    task.status.label(),
                    status.label()
                );
                task.status = status;
                true
            }
            None => false,
        }
    }

    /// Reassign a task. Returns `false` if the id is unknown.
    pub fn assign(&mut self, id: &TaskId, assignee: Option<MemberId>) -> bool {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => {
                task.assignee = assignee;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task<S>> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Look up a task that must exist
    ///
    /// # Errors
    /// - `BoardError::UnknownReference` if no task has this id
    pub fn require_task(&self, id: &TaskId) -> Result<&Task<S>, BoardError> {
        self.get(id)
            .ok_or_else(|| BoardError::UnknownReference(id.to_string()))
    }

    /// Tasks in insertion order
    #[inline]
    #[must_use]
    pub fn list(&self) -> &[Task<S>] {
        &self.tasks
    }

    /// One column, in insertion order
    pub fn tasks_in(&self, status: S) -> impl Iterator<Item = &Task<S>> + '_ {
        self.tasks.iter().filter(move |task| task.status == status)
    }

    /// Task count per column in display order
    ///
    /// Every column is present; the values sum to [`len`](Self::len).
    #[must_use]
    pub fn column_counts(&self) -> IndexMap<S, usize> {
        let mut counts: IndexMap<S, usize> =
            S::COLUMNS.iter().map(|status| (*status, 0)).collect();
        for task in &self.tasks {
            *counts.entry(task.status).or_insert(0) += 1;
        }
        counts
    }

    /// Share of tasks in a done column, rounded down; `0` for an empty board
    #[must_use]
    pub fn completion_percent(&self) -> u8 {
        if self.tasks.is_empty() {
            return 0;
        }
        let done = self.tasks.iter().filter(|task| task.status.is_done()).count();
        u8::try_from(done * 100 / self.tasks.len()).unwrap_or(100)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<S: TaskStatus> Default for KanbanBoard<S> {
    fn default() -> Self {
        Self::new()
    }
}
