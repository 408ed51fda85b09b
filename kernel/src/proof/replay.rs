//! `replay_verify()`: verify an operation path by deterministic replay.
//!
//! A search result is a claim: "applying these operations in order to the
//! start inventory yields the goal inventory." Replay re-executes the claim
//! with the kernel transition function.

use crate::carrier::inventory::InventoryV1;
use crate::operators::apply::{apply, ApplyFailure};
use crate::operators::catalog::{operation_name, OperationId};
use crate::proof::hash::{canonical_hash, ContentHash};
use crate::proof::hash_domain::HashDomain;

/// Error during replay (distinct from a divergence verdict).
///
/// A `ReplayError` means the path could not be replayed at all.
/// A [`ReplayVerdict::Divergence`] means it replayed but ended elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// Operation at `step` could not be applied to the inventory before it.
    StepFailed {
        step: usize,
        operation: OperationId,
        failure: ApplyFailure,
    },
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StepFailed {
                step,
                operation,
                failure,
            } => write!(
                f,
                "step {step} ({}) failed: {failure}",
                operation_name(*operation)
            ),
        }
    }
}

impl std::error::Error for ReplayError {}

/// Outcome of a replay that ran to the end of the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayVerdict {
    /// The path ends at the expected goal.
    Match,
    /// The path ends somewhere else.
    Divergence { reached: InventoryV1, detail: String },
}

/// Apply `path` to `start`, returning every inventory along the way.
///
/// The first element is `start`; element `i + 1` is the inventory after
/// `path[i]`. The result always has `path.len() + 1` elements.
///
/// # Errors
///
/// Returns [`ReplayError::StepFailed`] at the first inapplicable operation.
pub fn replay_path(start: &InventoryV1, path: &[OperationId]) -> Result<Vec<InventoryV1>, ReplayError> {
    let mut states = Vec::with_capacity(path.len() + 1);
    states.push(*start);
    let mut at = *start;
    for (step, &operation) in path.iter().enumerate() {
        at = apply(&at, operation).map_err(|failure| ReplayError::StepFailed {
            step,
            operation,
            failure,
        })?;
        states.push(at);
    }
    Ok(states)
}

/// Replay `path` from `start` and compare the final inventory to `goal`.
///
/// # Errors
///
/// Returns [`ReplayError`] if any step cannot be applied.
pub fn replay_verify(
    start: &InventoryV1,
    goal: &InventoryV1,
    path: &[OperationId],
) -> Result<ReplayVerdict, ReplayError> {
    let states = replay_path(start, path)?;
    let reached = states.last().copied().unwrap_or(*start);
    if reached == *goal {
        Ok(ReplayVerdict::Match)
    } else {
        Ok(ReplayVerdict::Divergence {
            reached,
            detail: format!(
                "path of {} operations reached {} instead of {}",
                path.len(),
                reached.pack(),
                goal.pack()
            ),
        })
    }
}

/// Content digest of an operation path (one byte per id).
#[must_use]
pub fn path_digest(path: &[OperationId]) -> ContentHash {
    let bytes: Vec<u8> = path.iter().map(|id| id.as_u8()).collect();
    canonical_hash(HashDomain::OperationPath, &bytes)
}
