//! Harness runner: drives an [`IncrementalSearch`] one slice per frame.
//!
//! # Pipeline
//!
//! ```text
//! RunConfig::resolve() → world.start_state()/goal_state()
//!   → IncrementalSearch::new() → [step(iterations_per_slice) × frames]
//!   → replay_verify() (success only) → SearchReportV1 → walkthrough
//! ```
//!
//! The runner never inspects the node table; it sees only the search's
//! public status and result.

use arcosphere_kernel::carrier::inventory::InventoryV1;
use arcosphere_kernel::operators::catalog::OperationId;
use arcosphere_kernel::proof::canon::CanonError;
use arcosphere_kernel::proof::replay::{replay_verify, ReplayError, ReplayVerdict};
use arcosphere_search::error::SearchError;
use arcosphere_search::report::SearchReportV1;
use arcosphere_search::search::{IncrementalSearch, SearchStatus};

use crate::contract::{PlanningWorldV1, WorldError};
use crate::policy::RunConfig;
use crate::walkthrough::render_walkthrough;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The world could not produce its start or goal.
    World(WorldError),
    /// The resolved policy is invalid.
    Policy(SearchError),
    /// The search driver failed.
    Search(SearchError),
    /// The found path could not be replayed.
    Replay(ReplayError),
    /// The found path replays to the wrong inventory.
    ReplayDivergence { detail: String },
    /// Report serialization failed.
    Canon(CanonError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::World(e) => write!(f, "world error: {e}"),
            Self::Policy(e) => write!(f, "policy error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Replay(e) => write!(f, "replay error: {e}"),
            Self::ReplayDivergence { detail } => write!(f, "replay divergence: {detail}"),
            Self::Canon(e) => write!(f, "canonical JSON error: {e}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<WorldError> for RunError {
    fn from(e: WorldError) -> Self {
        Self::World(e)
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcomeV1 {
    /// The goal was reached and the path replays to it.
    Succeeded,
    /// The reachable set was exhausted without finding the goal.
    Unreachable,
    /// `max_slices` frames elapsed while the search was still running.
    SliceBudgetExhausted,
}

impl RunOutcomeV1 {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Unreachable => "unreachable",
            Self::SliceBudgetExhausted => "slice_budget_exhausted",
        }
    }
}

/// Everything a single run produced.
#[derive(Debug, Clone)]
pub struct PlanRunV1 {
    pub world_id: String,
    pub start: InventoryV1,
    pub goal: InventoryV1,
    pub baseline: i32,
    pub outcome: RunOutcomeV1,
    /// Frames (calls to `step`) used.
    pub slices: u64,
    /// Present iff `outcome == Succeeded`.
    pub path: Option<Vec<OperationId>>,
    pub report: SearchReportV1,
    pub walkthrough: String,
}

/// Run a planning world to completion or until the frame budget runs out.
///
/// # Errors
///
/// Returns [`RunError`] if the world, policy, search, replay, or report
/// serialization fails. Unreachable goals and exhausted budgets are outcomes,
/// not errors.
pub fn run_plan(world: &dyn PlanningWorldV1, config: &RunConfig) -> Result<PlanRunV1, RunError> {
    let policy = config.resolve().map_err(RunError::Policy)?;
    let start = world.start_state()?;
    let goal = world.goal_state()?;

    tracing::info!(
        world = world.world_id(),
        start = %start.pack(),
        goal = %goal.pack(),
        iterations_per_slice = policy.iterations_per_slice,
        "plan run starting"
    );

    let mut search = IncrementalSearch::new(start, goal);
    let mut status = search.status();
    let mut slices: u64 = 0;
    while !status.is_terminal() && slices < policy.max_slices {
        status = search
            .step(policy.iterations_per_slice)
            .map_err(RunError::Search)?;
        slices += 1;
    }

    let (outcome, path) = match status {
        SearchStatus::Succeeded => {
            let path = search.result().map_err(RunError::Search)?.to_vec();
            match replay_verify(&start, &goal, &path).map_err(RunError::Replay)? {
                ReplayVerdict::Match => {}
                ReplayVerdict::Divergence { detail, .. } => {
                    return Err(RunError::ReplayDivergence { detail });
                }
            }
            (RunOutcomeV1::Succeeded, Some(path))
        }
        SearchStatus::Failed => (RunOutcomeV1::Unreachable, None),
        SearchStatus::Running => (RunOutcomeV1::SliceBudgetExhausted, None),
    };

    let report = SearchReportV1::from_search(&search).map_err(RunError::Canon)?;
    let walkthrough = render_walkthrough(
        &start,
        world.baseline(),
        status,
        search.steps_taken(),
        path.as_deref(),
    )
    .map_err(RunError::Replay)?;

    tracing::info!(
        world = world.world_id(),
        outcome = outcome.as_str(),
        slices,
        steps = search.steps_taken(),
        length = path.as_ref().map(Vec::len),
        "plan run finished"
    );

    Ok(PlanRunV1 {
        world_id: world.world_id().to_string(),
        start,
        goal,
        baseline: world.baseline(),
        outcome,
        slices,
        path,
        report,
        walkthrough,
    })
}
