//! Search slicing policy.

use crate::error::SearchError;

/// Default iterations per slice (one slice per rendered frame).
pub const DEFAULT_ITERATIONS_PER_SLICE: u32 = 1000;

/// Default cap on slices a runner may spend before giving up.
pub const DEFAULT_MAX_SLICES: u64 = 1_000_000;

/// How a caller time-slices an [`crate::search::IncrementalSearch`].
///
/// The search itself never consults this; it only ever does what one
/// `step(budget)` call asks. Runners use it to choose the per-slice budget and
/// to bound how many slices they are willing to spend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Budget passed to each `step()` call.
    pub iterations_per_slice: u32,
    /// Hard cap on `step()` calls.
    pub max_slices: u64,
}

impl SearchPolicyV1 {
    /// Validate that a runner can make progress under this policy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if either value is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.iterations_per_slice == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "iterations_per_slice must be at least 1".into(),
            });
        }
        if self.max_slices == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_slices must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Canonical JSON projection (for report bindings).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "iterations_per_slice": self.iterations_per_slice,
            "max_slices": self.max_slices,
        })
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            iterations_per_slice: DEFAULT_ITERATIONS_PER_SLICE,
            max_slices: DEFAULT_MAX_SLICES,
        }
    }
}
