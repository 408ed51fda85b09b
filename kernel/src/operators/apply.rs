//! `apply()`: the transition function.
//!
//! Applies one operation to one inventory, producing a new inventory. Pure
//! and deterministic: the input is never mutated, and the same
//! `(inventory, operation)` pair always yields the same result.
//!
//! Two-phase check:
//! 1. Availability: every polarization in `takes` must be present at least as
//!    many times as it occurs in `takes`.
//! 2. Capacity: every count after `makes` must still fit in a byte.
//!
//! Either failure leaves no partial state behind, because all arithmetic
//! happens on a copy that is only returned on success.

use crate::carrier::inventory::InventoryV1;
use crate::carrier::polarization::Polarization;
use crate::operators::catalog::{operation, OperationId};
use crate::operators::recipes::RecipeV1;

/// Typed failure for operation application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyFailure {
    /// `takes` requires more of a polarization than the inventory holds.
    InsufficientCount {
        polarization: Polarization,
        required: u8,
        available: u8,
    },
    /// A produced count would exceed 255.
    CountOverflow { polarization: Polarization },
}

impl std::fmt::Display for ApplyFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientCount {
                polarization,
                required,
                available,
            } => write!(
                f,
                "insufficient {polarization}: requires {required}, have {available}"
            ),
            Self::CountOverflow { polarization } => {
                write!(f, "{polarization} count would exceed 255")
            }
        }
    }
}

impl std::error::Error for ApplyFailure {}

/// Result type for apply.
pub type ApplyResult = Result<InventoryV1, ApplyFailure>;

/// Apply catalog operation `id` to `state`.
///
/// # Errors
///
/// Returns [`ApplyFailure::InsufficientCount`] for the first polarization (in
/// ordinal order) that `takes` over-draws, or [`ApplyFailure::CountOverflow`]
/// if a produced count would not fit in a byte.
pub fn apply(state: &InventoryV1, id: OperationId) -> ApplyResult {
    let op = operation(id);
    transfer(state, op.takes, op.makes)
}

/// [`apply`] with the failure discarded. Used by search expansion, where an
/// infeasible operation is simply skipped.
#[must_use]
pub fn try_apply(state: &InventoryV1, id: OperationId) -> Option<InventoryV1> {
    apply(state, id).ok()
}

/// Apply a production recipe to `state`.
///
/// # Errors
///
/// Same failure modes as [`apply`].
pub fn apply_recipe(state: &InventoryV1, recipe: &RecipeV1) -> ApplyResult {
    transfer(state, recipe.takes, recipe.makes)
}

fn tally(pols: &[Polarization]) -> [u8; Polarization::COUNT] {
    let mut counts = [0u8; Polarization::COUNT];
    for pol in pols {
        counts[pol.index()] = counts[pol.index()].saturating_add(1);
    }
    counts
}

fn transfer(state: &InventoryV1, takes: &[Polarization], makes: &[Polarization]) -> ApplyResult {
    let required = tally(takes);
    let produced = tally(makes);
    let mut next = *state;

    for pol in Polarization::ALL {
        let available = state.count(pol);
        let need = required[pol.index()];
        let Some(remaining) = available.checked_sub(need) else {
            return Err(ApplyFailure::InsufficientCount {
                polarization: pol,
                required: need,
                available,
            });
        };
        next.set_count(pol, remaining);
    }

    for pol in Polarization::ALL {
        let Some(count) = next.count(pol).checked_add(produced[pol.index()]) else {
            return Err(ApplyFailure::CountOverflow { polarization: pol });
        };
        next.set_count(pol, count);
    }

    Ok(next)
}
