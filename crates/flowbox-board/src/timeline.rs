//! Timeline milestones

use crate::id::MilestoneId;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Completed,
}

impl MilestoneStatus {
    pub const ALL: [MilestoneStatus; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        }
    }
}

/// One week of a generated plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: MilestoneId,
    pub week: u32,
    pub title: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub status: MilestoneStatus,
}

impl Milestone {
    pub fn new(
        id: impl Into<MilestoneId>,
        week: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            week,
            title: title.into(),
            description: description.into(),
            deadline,
            status: MilestoneStatus::Pending,
        }
    }
}

/// Milestones of a workspace. Always replaced as a whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timeline {
    milestones: Vec<Milestone>,
}

impl Timeline {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a new batch, ordered by week
    pub fn replace(&mut self, mut batch: Vec<Milestone>) {
        batch.sort_by_key(|milestone| milestone.week);
        tracing::debug!("Replacing timeline with {} milestones", batch.len());
        self.milestones = batch;
    }

    #[inline]
    #[must_use]
    pub fn list(&self) -> &[Milestone] {
        &self.milestones
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.milestones.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }

    /// Milestone count per status, zero-filled
    #[must_use]
    pub fn status_counts(&self) -> IndexMap<MilestoneStatus, usize> {
        let mut counts: IndexMap<MilestoneStatus, usize> =
            MilestoneStatus::ALL.iter().map(|status| (*status, 0)).collect();
        for milestone in &self.milestones {
            *counts.entry(milestone.status).or_insert(0) += 1;
        }
        counts
    }
}
