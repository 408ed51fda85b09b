//! Run configuration: optional overrides resolved against search defaults.

use arcosphere_search::error::SearchError;
use arcosphere_search::policy::SearchPolicyV1;

/// Overrides for a harness run. `None` fields use [`SearchPolicyV1::default`].
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Search iterations per frame ("steps per frame").
    pub iterations_per_slice: Option<u32>,
    /// Frames to spend before giving up.
    pub max_slices: Option<u64>,
}

impl RunConfig {
    /// Resolve overrides into a validated policy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the resolved policy is invalid.
    pub fn resolve(&self) -> Result<SearchPolicyV1, SearchError> {
        let defaults = SearchPolicyV1::default();
        let policy = SearchPolicyV1 {
            iterations_per_slice: self
                .iterations_per_slice
                .unwrap_or(defaults.iterations_per_slice),
            max_slices: self.max_slices.unwrap_or(defaults.max_slices),
        };
        policy.validate()?;
        Ok(policy)
    }
}
