//! Flowbox Simulator - seeded property harness for the onboarding flow and
//! a team workspace
//!
//! Each run drives one [`AuthFlow`] and one [`Workspace<Team>`] with a
//! reproducible stream of operations, checks every outcome against what the
//! current state says should happen, and re-checks the model invariants after
//! every step.

use flowbox_board::{Bounds, ItemId, ItemPatch, Position, TaskId, TeamKind, TeamStatus};
use flowbox_board::{ItemKind, TaskStatus};
use flowbox_onboarding::{
    AuthError, AuthFlow, AuthStep, Credentials, Destination, Identity, OAuthProvider, TimerToken,
    UserRole,
};
use flowbox_workspace::{FlowboxConfig, Team, Workspace, WorkspaceError};
use indexmap::IndexMap;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use std::fmt::Write as _;

/// Simulator configuration
#[derive(Debug, Clone, Serialize)]
pub struct SimulatorConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// Total operations to execute
    pub total_operations: u64,
    /// Distribution of operation types
    pub operation_distribution: OperationDistribution,
    /// Stop conditions
    pub stop_on_first_violation: bool,
    pub stop_on_error_count: Option<usize>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            total_operations: 10_000,
            operation_distribution: OperationDistribution::default(),
            stop_on_first_violation: true,
            stop_on_error_count: None,
        }
    }
}

impl SimulatorConfig {
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_operations(mut self, total_operations: u64) -> Self {
        self.total_operations = total_operations;
        self
    }
}

/// Probability distribution for operation generation
#[derive(Debug, Clone, Serialize)]
pub struct OperationDistribution {
    /// Ordinary board and flow usage
    pub valid_ops: f64,
    /// Boundary values: far-away drops, empty patches, stale timers
    pub edge_cases: f64,
    /// Operations that must be rejected
    pub invalid_ops: f64,
}

impl Default for OperationDistribution {
    fn default() -> Self {
        Self {
            valid_ops: 0.70,
            edge_cases: 0.20,
            invalid_ops: 0.10,
        }
    }
}

/// All operations the simulator can generate
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SimulatedOperation {
    // Canvas
    AddItem { kind: TeamKind },
    RemoveItem { id: ItemId },
    UpdateItem { id: ItemId, title: Option<String> },
    MoveItem { id: ItemId, position: Position },

    // Kanban
    AddTask { title: String },
    SetTaskStatus { id: TaskId, status: TeamStatus },

    // Auth flow
    ShowSignUp,
    BackToSignIn,
    SubmitCredentials { valid: bool },
    ProviderFailure,
    OAuth { provider: OAuthProvider },
    ContinueAsGuest,
    SelectRole { role: UserRole },
    FireConfirmation { stale: bool },
    CloseFlow,
    ReopenFlow,
}

impl SimulatedOperation {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddItem { .. } => "AddItem",
            Self::RemoveItem { .. } => "RemoveItem",
            Self::UpdateItem { .. } => "UpdateItem",
            Self::MoveItem { .. } => "MoveItem",
            Self::AddTask { .. } => "AddTask",
            Self::SetTaskStatus { .. } => "SetTaskStatus",
            Self::ShowSignUp => "ShowSignUp",
            Self::BackToSignIn => "BackToSignIn",
            Self::SubmitCredentials { .. } => "SubmitCredentials",
            Self::ProviderFailure => "ProviderFailure",
            Self::OAuth { .. } => "OAuth",
            Self::ContinueAsGuest => "ContinueAsGuest",
            Self::SelectRole { .. } => "SelectRole",
            Self::FireConfirmation { .. } => "FireConfirmation",
            Self::CloseFlow => "CloseFlow",
            Self::ReopenFlow => "ReopenFlow",
        }
    }
}

/// Expected result classification for an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExpectedResult {
    ShouldSucceed,
    ShouldFail,
}

/// A violation detected during simulation
#[derive(Debug, Clone, Serialize)]
pub enum Violation {
    /// Operation outcome didn't match expectation
    UnexpectedOutcome {
        operation_index: u64,
        operation: SimulatedOperation,
        expected: ExpectedResult,
        actual: Result<String, String>,
    },
    /// Invariant was violated
    Invariant(InvariantViolation),
}

#[derive(Debug, Clone, Serialize)]
pub struct InvariantViolation {
    pub operation_index: u64,
    pub check: InvariantCheck,
    pub details: String,
}

/// Types of invariant checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InvariantCheck {
    // Board
    BoardMatchesModel,
    PlacedItemsWithinBounds,

    // Kanban
    ColumnCountsCoverAllTasks,

    // Flow
    RoleSelectionRequiresCredentials,
    AtMostOneDispatchPerFlow,
    GuestDispatchHasNoRole,
}

/// Statistics collected during simulation
#[derive(Debug, Clone, Default, Serialize)]
pub struct OperationStats {
    pub total_operations: u64,
    pub successful_operations: u64,
    pub failed_operations: u64,
    pub invariant_violations: u64,
    pub dispatches: u64,
    pub operations_by_type: IndexMap<String, u64>,
}

impl OperationStats {
    pub fn record(&mut self, operation: &SimulatedOperation, result: &Result<String, String>) {
        self.total_operations += 1;
        *self
            .operations_by_type
            .entry(operation.name().to_string())
            .or_insert(0) += 1;

        match result {
            Ok(_) => self.successful_operations += 1,
            Err(_) => self.failed_operations += 1,
        }
    }
}

/// Final report from the simulator
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub config: SimulatorConfig,
    pub stats: OperationStats,
    pub violations: Vec<Violation>,
    pub final_item_count: usize,
    pub final_task_count: usize,
    pub final_step: AuthStep,
}

impl SimulationReport {
    /// Check if simulation passed all criteria
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Generate a text report
    #[must_use]
    pub fn generate_text(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Flowbox Simulator Report ===\n\n");
        let _ = writeln!(report, "Seed: {}", self.config.seed);
        let _ = writeln!(report, "Total Operations: {}", self.stats.total_operations);
        let _ = writeln!(report, "Successful: {}", self.stats.successful_operations);
        let _ = writeln!(report, "Failed: {}", self.stats.failed_operations);
        let _ = writeln!(report, "Dispatches: {}", self.stats.dispatches);
        let _ = writeln!(report, "Violations: {}", self.violations.len());
        let _ = writeln!(report, "Final Items: {}", self.final_item_count);
        let _ = writeln!(report, "Final Tasks: {}", self.final_task_count);
        let _ = writeln!(report, "Final Step: {}", self.final_step);

        if !self.stats.operations_by_type.is_empty() {
            report.push_str("\n=== Operations ===\n");
            for (name, count) in &self.stats.operations_by_type {
                let _ = writeln!(report, "  {name:<20} {count}");
            }
        }

        if !self.violations.is_empty() {
            report.push_str("\n=== Violations ===\n");
            for (i, v) in self.violations.iter().enumerate() {
                let _ = writeln!(report, "{}. {:?}", i + 1, v);
            }
        }

        let _ = writeln!(
            report,
            "\n=== Result: {} ===",
            if self.passed() { "PASS" } else { "FAIL" }
        );

        report
    }
}

/// Everything the simulator tracks next to the system under test
struct SimState {
    workspace: Workspace<Team>,
    flow: AuthFlow,
    bounds: Bounds,
    /// Expected item order
    items: Vec<ItemId>,
    /// Items added by the simulator and never moved
    placed: Vec<ItemId>,
    tasks: Vec<TaskId>,
    pending: Option<TimerToken>,
    stale: Vec<TimerToken>,
    authenticated: bool,
    dispatches_this_flow: u32,
    next_title: u64,
}

impl SimState {
    fn new(seed: u64) -> Result<Self, WorkspaceError> {
        let workspace = Workspace::<Team>::new(&FlowboxConfig::new().with_seed(seed))?;
        let bounds = workspace.board().bounds();
        let items = workspace.board().ids().cloned().collect();
        let tasks = workspace.kanban().list().iter().map(|t| t.id().clone()).collect();
        Ok(Self {
            workspace,
            flow: AuthFlow::new(),
            bounds,
            items,
            placed: Vec::new(),
            tasks,
            pending: None,
            stale: Vec::new(),
            authenticated: false,
            dispatches_this_flow: 0,
            next_title: 0,
        })
    }

    fn retire_pending(&mut self) {
        if let Some(token) = self.pending.take() {
            self.stale.push(token);
        }
    }
}

/// Run the simulator
///
/// # Errors
/// Fails only if the team workspace cannot be constructed for the seed.
pub fn run_simulator(config: SimulatorConfig) -> Result<SimulationReport, WorkspaceError> {
    let mut state = SimState::new(config.seed)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut stats = OperationStats::default();
    let mut violations = Vec::new();

    tracing::info!(
        "Simulating {} operations with seed {}",
        config.total_operations,
        config.seed
    );

    for i in 0..config.total_operations {
        let operation = generate_operation(&mut rng, &config.operation_distribution, &state);
        let expected_result = classify_expected_result(&operation, &state);
        let actual_result = execute_operation(&operation, &mut state, &mut stats);

        let outcome_matches = matches!(
            (expected_result, &actual_result),
            (ExpectedResult::ShouldSucceed, Ok(_)) | (ExpectedResult::ShouldFail, Err(_))
        );

        if !outcome_matches {
            tracing::warn!("Operation {} ({}) diverged from model", i, operation.name());
            violations.push(Violation::UnexpectedOutcome {
                operation_index: i,
                operation: operation.clone(),
                expected: expected_result,
                actual: actual_result.clone(),
            });

            if config.stop_on_first_violation {
                break;
            }

            if let Some(max_errors) = config.stop_on_error_count {
                if violations.len() >= max_errors {
                    break;
                }
            }
        }

        let broken = check_invariants(i, &state);
        if !broken.is_empty() {
            stats.invariant_violations += broken.len() as u64;
            violations.extend(broken.into_iter().map(Violation::Invariant));
            if config.stop_on_first_violation {
                break;
            }
        }

        stats.record(&operation, &actual_result);
    }

    Ok(SimulationReport {
        config,
        stats,
        violations,
        final_item_count: state.workspace.board().len(),
        final_task_count: state.workspace.kanban().len(),
        final_step: state.flow.step(),
    })
}

fn generate_operation(
    rng: &mut StdRng,
    distribution: &OperationDistribution,
    state: &SimState,
) -> SimulatedOperation {
    let r: f64 = rng.random();

    if r < distribution.valid_ops {
        generate_valid_operation(rng, state)
    } else if r < distribution.valid_ops + distribution.edge_cases {
        generate_edge_case_operation(rng, state)
    } else {
        generate_invalid_operation(rng, state)
    }
}

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, from: &'a [T]) -> Option<&'a T> {
    if from.is_empty() {
        None
    } else {
        Some(&from[rng.random_range(0..from.len())])
    }
}

fn generate_valid_operation(rng: &mut StdRng, state: &SimState) -> SimulatedOperation {
    let kind = TeamKind::ALL[rng.random_range(0..TeamKind::ALL.len())];
    match rng.random_range(0..12) {
        0 | 1 => SimulatedOperation::AddItem { kind },
        2 => match pick(rng, &state.items) {
            Some(id) => SimulatedOperation::RemoveItem { id: id.clone() },
            None => SimulatedOperation::AddItem { kind },
        },
        3 => match pick(rng, &state.items) {
            Some(id) => SimulatedOperation::UpdateItem {
                id: id.clone(),
                title: Some(format!("Card {}", state.next_title)),
            },
            None => SimulatedOperation::AddItem { kind },
        },
        4 => match pick(rng, &state.items) {
            Some(id) => SimulatedOperation::MoveItem {
                id: id.clone(),
                position: state.bounds.sample(rng),
            },
            None => SimulatedOperation::AddItem { kind },
        },
        5 => SimulatedOperation::AddTask {
            title: format!("Task {}", state.next_title),
        },
        6 => match pick(rng, &state.tasks) {
            Some(id) => SimulatedOperation::SetTaskStatus {
                id: id.clone(),
                status: TeamStatus::COLUMNS[rng.random_range(0..TeamStatus::COLUMNS.len())],
            },
            None => SimulatedOperation::AddTask {
                title: format!("Task {}", state.next_title),
            },
        },
        _ => generate_flow_operation(rng, state),
    }
}

/// Flow operation that is legal for the current step
fn generate_flow_operation(rng: &mut StdRng, state: &SimState) -> SimulatedOperation {
    if !state.flow.is_open() {
        return SimulatedOperation::ReopenFlow;
    }
    if state.pending.is_some() {
        return if rng.random_bool(0.8) {
            SimulatedOperation::FireConfirmation { stale: false }
        } else {
            SimulatedOperation::CloseFlow
        };
    }
    match state.flow.step() {
        AuthStep::SignIn => match rng.random_range(0..5) {
            0 => SimulatedOperation::ShowSignUp,
            1 => SimulatedOperation::OAuth {
                provider: if rng.random_bool(0.5) {
                    OAuthProvider::Google
                } else {
                    OAuthProvider::GitHub
                },
            },
            2 => SimulatedOperation::ContinueAsGuest,
            _ => SimulatedOperation::SubmitCredentials { valid: true },
        },
        AuthStep::SignUp => {
            if rng.random_bool(0.2) {
                SimulatedOperation::BackToSignIn
            } else {
                SimulatedOperation::SubmitCredentials { valid: true }
            }
        }
        AuthStep::RoleSelection => SimulatedOperation::SelectRole {
            role: UserRole::ALL[rng.random_range(0..UserRole::ALL.len())],
        },
    }
}

fn generate_edge_case_operation(rng: &mut StdRng, state: &SimState) -> SimulatedOperation {
    match rng.random_range(0..5) {
        // Drops are not clamped to the placement region
        0 => match pick(rng, &state.items) {
            Some(id) => SimulatedOperation::MoveItem {
                id: id.clone(),
                position: Position::new(rng.random_range(-5_000.0..5_000.0), -1.0),
            },
            None => SimulatedOperation::AddItem {
                kind: TeamKind::DailyLog,
            },
        },
        1 => match pick(rng, &state.items) {
            Some(id) => SimulatedOperation::UpdateItem {
                id: id.clone(),
                title: None,
            },
            None => SimulatedOperation::AddItem {
                kind: TeamKind::Note,
            },
        },
        2 => SimulatedOperation::FireConfirmation { stale: true },
        3 => SimulatedOperation::CloseFlow,
        _ => SimulatedOperation::ReopenFlow,
    }
}

fn generate_invalid_operation(rng: &mut StdRng, state: &SimState) -> SimulatedOperation {
    match rng.random_range(0..7) {
        0 => SimulatedOperation::RemoveItem {
            id: ItemId::new(format!("missing-{}", rng.random::<u32>())),
        },
        1 => SimulatedOperation::SetTaskStatus {
            id: TaskId::new(format!("missing-{}", rng.random::<u32>())),
            status: TeamStatus::Done,
        },
        2 => SimulatedOperation::SubmitCredentials { valid: false },
        3 => SimulatedOperation::ProviderFailure,
        // Out-of-step actions
        4 => match state.flow.step() {
            AuthStep::RoleSelection => SimulatedOperation::ContinueAsGuest,
            _ => SimulatedOperation::SelectRole {
                role: UserRole::Student,
            },
        },
        5 => match state.flow.step() {
            AuthStep::SignIn => SimulatedOperation::BackToSignIn,
            _ => SimulatedOperation::ShowSignUp,
        },
        _ => SimulatedOperation::FireConfirmation { stale: true },
    }
}

/// What the current state says an operation must do
fn classify_expected_result(operation: &SimulatedOperation, state: &SimState) -> ExpectedResult {
    use ExpectedResult::{ShouldFail, ShouldSucceed};
    use SimulatedOperation as Op;

    let flow = &state.flow;
    let open = flow.is_open();
    let at = |step: AuthStep| open && flow.step() == step;
    let ok = |cond: bool| if cond { ShouldSucceed } else { ShouldFail };

    match operation {
        Op::AddItem { .. } | Op::AddTask { .. } => ShouldSucceed,
        Op::RemoveItem { id } | Op::UpdateItem { id, .. } | Op::MoveItem { id, .. } => {
            ok(state.items.contains(id))
        }
        Op::SetTaskStatus { id, .. } => ok(state.tasks.contains(id)),
        Op::ShowSignUp | Op::OAuth { .. } | Op::ContinueAsGuest => ok(at(AuthStep::SignIn)),
        Op::BackToSignIn => ok(at(AuthStep::SignUp)),
        Op::SubmitCredentials { valid } => {
            ok(*valid && (at(AuthStep::SignIn) || at(AuthStep::SignUp)))
        }
        Op::ProviderFailure => ShouldFail,
        Op::SelectRole { .. } => ok(at(AuthStep::RoleSelection) && flow.selected_role().is_none()),
        Op::FireConfirmation { stale } => ok(!stale && state.pending.is_some()),
        Op::CloseFlow | Op::ReopenFlow => ShouldSucceed,
    }
}

fn describe<T: std::fmt::Debug, E: std::fmt::Display>(result: Result<T, E>) -> Result<String, String> {
    result
        .map(|value| format!("{value:?}"))
        .map_err(|err| err.to_string())
}

/// Apply an operation to the system under test and the tracking model
fn execute_operation(
    operation: &SimulatedOperation,
    state: &mut SimState,
    stats: &mut OperationStats,
) -> Result<String, String> {
    use SimulatedOperation as Op;

    match operation {
        Op::AddItem { kind } => {
            let id = state.workspace.add_item(*kind);
            state.items.push(id.clone());
            state.placed.push(id.clone());
            Ok(id.to_string())
        }
        Op::RemoveItem { id } => match state.workspace.remove_item(id) {
            Some(item) => {
                state.items.retain(|known| known != id);
                state.placed.retain(|known| known != id);
                Ok(item.id().to_string())
            }
            None => Err(format!("no item {id}")),
        },
        Op::UpdateItem { id, title } => {
            let mut patch = ItemPatch::new();
            if let Some(title) = title {
                patch = patch.with_title(title.clone());
                state.next_title += 1;
            }
            if state.workspace.update_item(id, patch) {
                Ok(id.to_string())
            } else {
                Err(format!("no item {id}"))
            }
        }
        Op::MoveItem { id, position } => {
            if state.workspace.move_item(id, *position) {
                state.placed.retain(|known| known != id);
                Ok(format!("{id} -> ({:.1}, {:.1})", position.x, position.y))
            } else {
                Err(format!("no item {id}"))
            }
        }
        Op::AddTask { title } => {
            let due = chrono::Utc::now().date_naive();
            let id = state.workspace.kanban_mut().add_task(title.clone(), due, None);
            state.tasks.push(id.clone());
            state.next_title += 1;
            Ok(id.to_string())
        }
        Op::SetTaskStatus { id, status } => {
            if state.workspace.set_task_status(id, *status) {
                Ok(format!("{id} -> {}", status.label()))
            } else {
                Err(format!("no task {id}"))
            }
        }
        Op::ShowSignUp => describe(state.flow.show_sign_up()),
        Op::BackToSignIn => describe(state.flow.back_to_sign_in()),
        Op::SubmitCredentials { valid } => {
            let credentials = match (state.flow.step(), *valid) {
                (AuthStep::SignUp, true) => {
                    Credentials::sign_up("Sim User", "sim@flowbox.dev", "pw")
                }
                (_, true) => Credentials::sign_in("sim@flowbox.dev", "pw"),
                (_, false) => Credentials::sign_in("not-an-email", ""),
            };
            let attempt = state
                .flow
                .validate_email(&credentials)
                .map_err(|err| err.to_string())?;
            let outcome = state.flow.complete_credentials(&attempt, Ok(Identity {
                method: attempt.method(),
                email: Some(credentials.email.clone()),
                display_name: credentials.name.clone(),
            }));
            if outcome.is_ok() {
                state.authenticated = true;
            }
            describe(outcome)
        }
        Op::ProviderFailure => {
            let attempt = state
                .flow
                .validate_email(&Credentials::sign_up("Sim User", "sim@flowbox.dev", "pw"))
                .map_err(|err| err.to_string())?;
            describe(
                state
                    .flow
                    .complete_credentials(&attempt, Err(AuthError::NetworkUnavailable)),
            )
        }
        Op::OAuth { provider } => {
            let attempt = state
                .flow
                .validate_oauth(*provider)
                .map_err(|err| err.to_string())?;
            let outcome = state.flow.complete_credentials(&attempt, Ok(Identity {
                method: attempt.method(),
                email: None,
                display_name: None,
            }));
            if outcome.is_ok() {
                state.authenticated = true;
            }
            describe(outcome)
        }
        Op::ContinueAsGuest => {
            let destination = state
                .flow
                .continue_as_guest()
                .map_err(|err| err.to_string())?;
            record_dispatch(state, stats, destination);
            Ok(destination.to_string())
        }
        Op::SelectRole { role } => {
            let token = state.flow.select_role(*role).map_err(|err| err.to_string())?;
            state.pending = Some(token);
            Ok(role.to_string())
        }
        Op::FireConfirmation { stale } => {
            let token = if *stale {
                state.stale.last().copied()
            } else {
                state.pending.take()
            };
            let token = token.ok_or_else(|| "no timer token".to_string())?;
            match state.flow.fire_confirmation(&token) {
                Some(destination) => {
                    record_dispatch(state, stats, destination);
                    Ok(destination.to_string())
                }
                None => Err("stale confirmation ignored".to_string()),
            }
        }
        Op::CloseFlow => {
            state.flow.close();
            state.retire_pending();
            Ok("closed".to_string())
        }
        Op::ReopenFlow => {
            if state.flow.open() {
                state.retire_pending();
                state.authenticated = false;
                state.dispatches_this_flow = 0;
            }
            Ok(state.flow.step().to_string())
        }
    }
}

fn record_dispatch(state: &mut SimState, stats: &mut OperationStats, destination: Destination) {
    tracing::debug!("Simulated flow dispatched to {}", destination);
    state.dispatches_this_flow += 1;
    stats.dispatches += 1;
}

/// Check every model invariant against the current state
fn check_invariants(operation_index: u64, state: &SimState) -> Vec<InvariantViolation> {
    let mut broken = Vec::new();
    let mut fail = |check: InvariantCheck, details: String| {
        broken.push(InvariantViolation {
            operation_index,
            check,
            details,
        });
    };

    let board = state.workspace.board();
    if !board.ids().eq(state.items.iter()) {
        fail(
            InvariantCheck::BoardMatchesModel,
            format!("board has {} items, model {}", board.len(), state.items.len()),
        );
    }

    for id in &state.placed {
        if let Some(item) = board.get(id) {
            if !state.bounds.contains(item.position()) {
                fail(
                    InvariantCheck::PlacedItemsWithinBounds,
                    format!("{id} placed at {:?}", item.position()),
                );
            }
        }
    }

    let kanban = state.workspace.kanban();
    let counted: usize = kanban.column_counts().values().sum();
    if counted != kanban.len() || kanban.len() != state.tasks.len() {
        fail(
            InvariantCheck::ColumnCountsCoverAllTasks,
            format!(
                "columns hold {counted}, kanban {}, model {}",
                kanban.len(),
                state.tasks.len()
            ),
        );
    }

    let flow = &state.flow;
    if flow.step() == AuthStep::RoleSelection && !state.authenticated {
        fail(
            InvariantCheck::RoleSelectionRequiresCredentials,
            "reached role selection without an identity".to_string(),
        );
    }
    if state.dispatches_this_flow > 1 {
        fail(
            InvariantCheck::AtMostOneDispatchPerFlow,
            format!("{} dispatches", state.dispatches_this_flow),
        );
    }
    if flow.dispatched() == Some(Destination::Dashboard) && flow.selected_role().is_some() {
        fail(
            InvariantCheck::GuestDispatchHasNoRole,
            format!("guest carried role {:?}", flow.selected_role()),
        );
    }

    broken
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_passes() {
        let report = run_simulator(SimulatorConfig::default().with_operations(2_000)).unwrap();
        assert!(report.passed(), "{}", report.generate_text());
        assert_eq!(report.stats.total_operations, 2_000);
        assert!(report.stats.dispatches > 0);
    }

    #[test]
    fn same_seed_same_run() {
        let config = SimulatorConfig::default().with_seed(7).with_operations(500);
        let a = run_simulator(config.clone()).unwrap();
        let b = run_simulator(config).unwrap();
        assert_eq!(a.stats.operations_by_type, b.stats.operations_by_type);
        assert_eq!(a.final_item_count, b.final_item_count);
        assert_eq!(a.final_task_count, b.final_task_count);
    }

    #[test]
    fn invalid_only_run_changes_nothing() {
        let config = SimulatorConfig {
            operation_distribution: OperationDistribution {
                valid_ops: 0.0,
                edge_cases: 0.0,
                invalid_ops: 1.0,
            },
            ..SimulatorConfig::default().with_operations(300)
        };
        let report = run_simulator(config).unwrap();
        assert!(report.passed(), "{}", report.generate_text());
        assert_eq!(report.stats.successful_operations, 0);
        assert_eq!(report.final_item_count, 4);
    }

    #[test]
    fn text_report_names_result() {
        let report = run_simulator(SimulatorConfig::default().with_operations(10)).unwrap();
        let text = report.generate_text();
        assert!(text.contains("Seed: 42"));
        assert!(text.contains("=== Result: PASS ==="));
    }
}
