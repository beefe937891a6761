//! Workspace controller
//!
//! Owns every piece of state one workspace page needs: title, active view,
//! canvas board, kanban, roster, timeline and the RNG used for placement.
//! Each instance is independent; nothing is shared between workspaces.

use crate::config::FlowboxConfig;
use crate::error::{GenerationError, WorkspaceError};
use crate::generation::{MockTimelineGenerator, TimelineGenerator, TimelineRequest};
use crate::profile::{View, WorkspaceProfile};
use crate::report::{WorkspaceReport, WorkspaceSnapshot};
use flowbox_board::{
    Board, BoardItem, ItemId, ItemPatch, KanbanBoard, Milestone, Position, Roster, TaskId,
    Timeline,
};
use flowbox_onboarding::{TimerSlot, TimerToken};
use rand::rngs::StdRng;
use std::marker::PhantomData;
use std::time::Duration;

/// Handle for an in-flight timeline generation
#[derive(Debug, Clone)]
pub struct GenerationTicket {
    token: TimerToken,
    request: TimelineRequest,
}

impl GenerationTicket {
    /// Configured generation delay at the time the ticket was issued
    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.token.delay()
    }

    #[inline]
    #[must_use]
    pub fn request(&self) -> &TimelineRequest {
        &self.request
    }
}

#[derive(Debug)]
pub struct Workspace<P: WorkspaceProfile> {
    title: String,
    view: View,
    board: Board<P::Kind>,
    kanban: KanbanBoard<P::Status>,
    roster: Roster,
    timeline: Timeline,
    rng: StdRng,
    generation: TimerSlot,
    generation_delay: Duration,
    _profile: PhantomData<P>,
}

impl<P: WorkspaceProfile> Workspace<P> {
    /// Seeded workspace for profile `P`
    pub fn new(config: &FlowboxConfig) -> Result<Self, WorkspaceError> {
        config.validate()?;
        let bounds = config.placement.for_role(P::ROLE);
        let board = Board::with_items(bounds, P::seed_items())?;
        let kanban = KanbanBoard::with_tasks(P::seed_tasks())?;
        tracing::info!(
            "Opened {} workspace with {} items and {} tasks",
            P::ROLE,
            board.len(),
            kanban.len()
        );
        Ok(Self {
            title: P::DEFAULT_TITLE.to_string(),
            view: P::VIEWS[0],
            board,
            kanban,
            roster: P::seed_roster(),
            timeline: Timeline::new(),
            rng: config.rng(),
            generation: TimerSlot::new(),
            generation_delay: config.generation_delay(),
            _profile: PhantomData,
        })
    }

    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rename the workspace; surrounding whitespace is trimmed
    pub fn rename(&mut self, title: &str) -> Result<(), WorkspaceError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            tracing::warn!("Rejected blank title for {} workspace", P::ROLE);
            return Err(WorkspaceError::BlankTitle);
        }
        tracing::debug!("Renaming workspace to {}", trimmed);
        self.title = trimmed.to_string();
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[inline]
    #[must_use]
    pub fn views(&self) -> &'static [View] {
        P::VIEWS
    }

    pub fn select_view(&mut self, view: View) -> Result<(), WorkspaceError> {
        if !P::VIEWS.contains(&view) {
            return Err(WorkspaceError::ViewUnavailable {
                view,
                role: P::ROLE,
            });
        }
        self.view = view;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board<P::Kind> {
        &self.board
    }

    /// Add a default card at a random spot inside the role's placement region
    pub fn add_item(&mut self, kind: P::Kind) -> ItemId {
        self.board.add_item(kind, &mut self.rng)
    }

    pub fn insert_item(&mut self, item: BoardItem<P::Kind>) -> Result<(), WorkspaceError> {
        Ok(self.board.insert_item(item)?)
    }

    pub fn remove_item(&mut self, id: &ItemId) -> Option<BoardItem<P::Kind>> {
        self.board.remove_item(id)
    }

    pub fn update_item(&mut self, id: &ItemId, patch: ItemPatch) -> bool {
        self.board.update_item(id, patch)
    }

    pub fn move_item(&mut self, id: &ItemId, position: Position) -> bool {
        self.board.move_item(id, position)
    }

    #[inline]
    #[must_use]
    pub fn kanban(&self) -> &KanbanBoard<P::Status> {
        &self.kanban
    }

    #[inline]
    pub fn kanban_mut(&mut self) -> &mut KanbanBoard<P::Status> {
        &mut self.kanban
    }

    pub fn set_task_status(&mut self, id: &TaskId, status: P::Status) -> bool {
        self.kanban.set_status(id, status)
    }

    #[inline]
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[inline]
    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    #[inline]
    #[must_use]
    pub fn generation_delay(&self) -> Duration {
        self.generation_delay
    }

    /// Offline generator that waits the configured generation delay
    #[inline]
    #[must_use]
    pub fn mock_generator(&self) -> MockTimelineGenerator {
        MockTimelineGenerator::new(self.generation_delay)
    }

    #[inline]
    #[must_use]
    pub fn generation_pending(&self) -> bool {
        self.generation.is_armed()
    }

    /// Register a generation request, superseding any pending one
    pub fn begin_generation(&mut self, request: TimelineRequest) -> GenerationTicket {
        if self.generation.is_armed() {
            tracing::debug!("Superseding pending timeline generation");
        }
        GenerationTicket {
            token: self.generation.arm(self.generation_delay),
            request,
        }
    }

    /// Drop the pending generation; its result will be discarded
    pub fn cancel_generation(&mut self) -> bool {
        self.generation.cancel()
    }

    /// Accept a generator result for `ticket`
    ///
    /// On success the workspace takes the project title, swaps in the
    /// milestones and switches to the timeline view when the role has one.
    ///
    /// # Errors
    /// - `GenerationError::Stale` if the ticket was cancelled or superseded
    /// - the generator's own error, which also clears the pending ticket
    pub fn complete_generation(
        &mut self,
        ticket: &GenerationTicket,
        outcome: Result<Vec<Milestone>, GenerationError>,
    ) -> Result<(), WorkspaceError> {
        if !self.generation.fire(&ticket.token) {
            tracing::warn!("Discarding stale timeline for {}", ticket.request.effective_title());
            return Err(GenerationError::Stale.into());
        }
        let milestones = outcome?;
        self.title = ticket.request.effective_title().to_string();
        tracing::info!(
            "Accepted {} milestones for {}",
            milestones.len(),
            self.title
        );
        self.timeline.replace(milestones);
        if P::VIEWS.contains(&View::Timeline) {
            self.view = View::Timeline;
        }
        Ok(())
    }

    /// Run `generator` for `request` and accept its result
    pub async fn generate_timeline<G>(
        &mut self,
        generator: &G,
        request: TimelineRequest,
    ) -> Result<(), WorkspaceError>
    where
        G: TimelineGenerator + ?Sized,
    {
        let ticket = self.begin_generation(request);
        let outcome = generator.generate(ticket.request()).await;
        self.complete_generation(&ticket, outcome)
    }

    #[must_use]
    pub fn report(&self) -> WorkspaceReport {
        WorkspaceReport::build(
            P::ROLE,
            &self.title,
            &self.board,
            &self.kanban,
            &self.timeline,
        )
    }

    #[must_use]
    pub fn snapshot(&self) -> WorkspaceSnapshot<'_, P> {
        WorkspaceSnapshot {
            role: P::ROLE,
            title: &self.title,
            view: self.view,
            views: P::VIEWS,
            items: self.board.list(),
            tasks: self.kanban.list(),
            members: self.roster.members(),
            milestones: self.timeline.list(),
        }
    }

    pub fn to_json(&self) -> Result<String, WorkspaceError> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}
