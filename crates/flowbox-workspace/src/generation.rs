//! Timeline generation
//!
//! A generator turns a project title (and optional deadline) into a batch of
//! weekly milestones. The bundled mock returns a fixed four-week plan after a
//! short delay.

use crate::error::GenerationError;
use crate::seed::day;
use async_trait::async_trait;
use chrono::NaiveDate;
use flowbox_board::Milestone;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Title used when a generation request leaves the project title blank
pub const FALLBACK_TITLE: &str = "My Creative Workspace";

pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRequest {
    pub project_title: String,
    pub deadline: Option<NaiveDate>,
}

impl TimelineRequest {
    pub fn new(project_title: impl Into<String>) -> Self {
        Self {
            project_title: project_title.into(),
            deadline: None,
        }
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Title the workspace takes when the result is accepted
    #[must_use]
    pub fn effective_title(&self) -> &str {
        let trimmed = self.project_title.trim();
        if trimmed.is_empty() {
            FALLBACK_TITLE
        } else {
            trimmed
        }
    }
}

#[async_trait]
pub trait TimelineGenerator: Send + Sync {
    async fn generate(&self, request: &TimelineRequest) -> Result<Vec<Milestone>, GenerationError>;
}

/// Fixed four-week starter plan
#[must_use]
pub fn starter_plan() -> Vec<Milestone> {
    vec![
        Milestone::new(
            "w1",
            1,
            "Outline plan",
            "Define high-level goals and deliverables",
            day(2025, 10, 10),
        ),
        Milestone::new(
            "w2",
            2,
            "Research & drafts",
            "Collect references and draft ideas",
            day(2025, 10, 17),
        ),
        Milestone::new(
            "w3",
            3,
            "Prototype",
            "Build a quick clickable prototype",
            day(2025, 10, 24),
        ),
        Milestone::new(
            "w4",
            4,
            "Refine & share",
            "Polish and prepare shareable demo",
            day(2025, 10, 31),
        ),
    ]
}

/// Waits `delay` then returns [`starter_plan`]
#[derive(Debug, Clone, Copy)]
pub struct MockTimelineGenerator {
    delay: Duration,
}

impl MockTimelineGenerator {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockTimelineGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATION_DELAY)
    }
}

#[async_trait]
impl TimelineGenerator for MockTimelineGenerator {
    async fn generate(&self, request: &TimelineRequest) -> Result<Vec<Milestone>, GenerationError> {
        tracing::debug!(
            "Generating timeline for {} (deadline {:?})",
            request.effective_title(),
            request.deadline
        );
        tokio::time::sleep(self.delay).await;
        Ok(starter_plan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowbox_board::MilestoneStatus;

    #[test]
    fn blank_title_falls_back() {
        assert_eq!(TimelineRequest::new("   ").effective_title(), FALLBACK_TITLE);
        assert_eq!(
            TimelineRequest::new(" Portfolio Website ").effective_title(),
            "Portfolio Website"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn mock_waits_then_returns_four_weeks() {
        let generator = MockTimelineGenerator::default();
        let start = tokio::time::Instant::now();
        let plan = generator
            .generate(&TimelineRequest::new("Portfolio"))
            .await
            .unwrap();
        assert!(start.elapsed() >= DEFAULT_GENERATION_DELAY);

        let titles: Vec<_> = plan.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Outline plan", "Research & drafts", "Prototype", "Refine & share"]
        );
        assert!(plan.iter().all(|m| m.status == MilestoneStatus::Pending));
        assert_eq!(plan[3].deadline, day(2025, 10, 31));
    }
}
