//! Typed search errors.
//!
//! Expected outcomes (an infeasible operation, an unreachable goal) are not
//! errors: the first is skipped during expansion and the second is reported as
//! [`crate::search::SearchStatus::Failed`]. `SearchError` covers contract
//! violations by the caller and broken internal invariants.

use arcosphere_kernel::carrier::packed::PackedKeyV1;

use crate::search::SearchStatus;

/// Typed failure for the search API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A result was requested before the search succeeded.
    ResultNotReady { status: SearchStatus },
    /// A key on the way back to the start has no discovery link.
    BrokenDiscoveryChain { key: PackedKeyV1 },
    /// Policy values outside the supported range.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResultNotReady { status } => {
                write!(f, "search result requested while {}", status.as_str())
            }
            Self::BrokenDiscoveryChain { key } => {
                write!(f, "no discovery chain from {key} back to the start")
            }
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
