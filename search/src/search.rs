//! The incremental BFS driver and path reconstruction.
//!
//! [`IncrementalSearch`] owns its frontier and node table exclusively and does
//! bounded work per [`IncrementalSearch::step`] call. There is no internal
//! scheduling: the caller decides when and how much to run, and discarding
//! the value is the only cancellation.
//!
//! The discovered path does not depend on how the work is sliced: `step(1)`
//! a thousand times and `step(1000)` once pop the same keys in the same order.

use arcosphere_kernel::carrier::packed::PackedKeyV1;
use arcosphere_kernel::operators::catalog::OperationId;

use crate::error::SearchError;
use crate::frontier::FifoFrontier;
use crate::node::NodeTable;

/// Externally observable search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No path yet; the frontier still has keys.
    Running,
    /// A shortest path has been reconstructed.
    Succeeded,
    /// Frontier exhausted: the goal is unreachable from the start.
    Failed,
}

impl SearchStatus {
    /// Canonical string for JSON serialization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }

    /// `true` for `Succeeded` and `Failed`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// One search request from `start` to `goal`.
#[derive(Debug)]
pub struct IncrementalSearch {
    start: PackedKeyV1,
    goal: PackedKeyV1,
    frontier: FifoFrontier,
    nodes: NodeTable,
    steps: u32,
    path: Option<Vec<OperationId>>,
}

impl IncrementalSearch {
    /// Seed the table with the start key and enqueue it.
    ///
    /// Accepts inventories or packed keys.
    pub fn new(start: impl Into<PackedKeyV1>, goal: impl Into<PackedKeyV1>) -> Self {
        let start = start.into();
        let goal = goal.into();
        let mut nodes = NodeTable::new();
        nodes.seed_root(start);
        let mut frontier = FifoFrontier::new();
        frontier.push(start);
        Self {
            start,
            goal,
            frontier,
            nodes,
            steps: 0,
            path: None,
        }
    }

    /// Perform up to `iterations` dequeue-and-expand rounds.
    ///
    /// Stops early when the frontier drains or the goal is discovered. Calling
    /// this after a terminal status is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::BrokenDiscoveryChain`] if path reconstruction
    /// finds a key with no link back to the start. That cannot happen for a
    /// table built by this driver.
    pub fn step(&mut self, iterations: u32) -> Result<SearchStatus, SearchError> {
        for _ in 0..iterations {
            if self.path.is_some() {
                break;
            }
            let Some(current) = self.frontier.pop() else {
                break;
            };
            self.steps = self.steps.saturating_add(1);

            // Only the start can be popped while equal to the goal; every
            // other key is checked when it is discovered.
            if current == self.goal {
                self.complete()?;
                break;
            }

            for next in self.nodes.explore(current) {
                if next == self.goal {
                    self.complete()?;
                    break;
                }
                self.frontier.push(next);
            }
        }

        let status = self.status();
        tracing::debug!(
            steps = self.steps,
            frontier = self.frontier.len(),
            nodes = self.nodes.len(),
            status = status.as_str(),
            "search slice finished"
        );
        Ok(status)
    }

    fn complete(&mut self) -> Result<(), SearchError> {
        let path = reconstruct_path(self.start, self.goal, &self.nodes)?;
        tracing::info!(
            steps = self.steps,
            length = path.len(),
            nodes = self.nodes.len(),
            "search reached goal"
        );
        self.path = Some(path);
        self.frontier.clear();
        Ok(())
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> SearchStatus {
        if self.path.is_some() {
            SearchStatus::Succeeded
        } else if self.frontier.is_empty() {
            SearchStatus::Failed
        } else {
            SearchStatus::Running
        }
    }

    /// `true` iff a path has been reconstructed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.path.is_some()
    }

    /// `true` iff not done and the frontier is empty.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status() == SearchStatus::Failed
    }

    /// Number of keys popped so far.
    #[must_use]
    pub fn steps_taken(&self) -> u32 {
        self.steps
    }

    /// The shortest operation sequence from start to goal.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::ResultNotReady`] unless [`is_done`](Self::is_done).
    pub fn result(&self) -> Result<&[OperationId], SearchError> {
        self.path
            .as_deref()
            .ok_or(SearchError::ResultNotReady {
                status: self.status(),
            })
    }

    /// Consuming form of [`result`](Self::result).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::ResultNotReady`] unless the search succeeded.
    pub fn into_result(self) -> Result<Vec<OperationId>, SearchError> {
        let status = self.status();
        self.path.ok_or(SearchError::ResultNotReady { status })
    }

    #[must_use]
    pub fn start(&self) -> PackedKeyV1 {
        self.start
    }

    #[must_use]
    pub fn goal(&self) -> PackedKeyV1 {
        self.goal
    }

    /// The node table (read-only).
    #[must_use]
    pub fn nodes(&self) -> &NodeTable {
        &self.nodes
    }

    /// Keys currently awaiting expansion.
    #[must_use]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Largest frontier size seen.
    #[must_use]
    pub fn frontier_high_water(&self) -> u64 {
        self.frontier.high_water()
    }
}

/// Walk discovery links from `end` back to `start` and return the operations
/// in forward order.
///
/// # Errors
///
/// Returns [`SearchError::BrokenDiscoveryChain`] if some key on the way has no
/// link, or if the walk runs longer than the table could support.
pub fn reconstruct_path(
    start: PackedKeyV1,
    end: PackedKeyV1,
    nodes: &NodeTable,
) -> Result<Vec<OperationId>, SearchError> {
    let mut path = Vec::new();
    let mut at = end;

    while at != start {
        let link = nodes
            .link(at)
            .ok_or(SearchError::BrokenDiscoveryChain { key: at })?;
        path.push(link.operation);
        if path.len() > nodes.len() {
            return Err(SearchError::BrokenDiscoveryChain { key: at });
        }
        at = link.from;
    }

    path.reverse();
    Ok(path)
}
