//! `SearchReportV1`: canonical snapshot of a search.
//!
//! A report binds the search outcome to the catalog it ran against (by
//! digest) so that two reports with identical bytes describe the same search
//! under the same rules.

use arcosphere_kernel::carrier::inventory::InventoryV1;
use arcosphere_kernel::carrier::packed::PackedKeyV1;
use arcosphere_kernel::operators::catalog::{
    catalog_digest, path_to_glyphs, path_to_string, OperationId,
};
use arcosphere_kernel::proof::canon::{canonical_json_bytes, CanonError};
use arcosphere_kernel::proof::hash::{canonical_hash, ContentHash};
use arcosphere_kernel::proof::hash_domain::HashDomain;
use arcosphere_kernel::proof::replay::path_digest;

use crate::search::{IncrementalSearch, SearchStatus};

/// Schema tag written into every report.
pub const REPORT_SCHEMA_VERSION: &str = "search_report.v1";

/// Snapshot of an [`IncrementalSearch`] at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReportV1 {
    pub start: PackedKeyV1,
    pub goal: PackedKeyV1,
    pub status: SearchStatus,
    pub steps_taken: u32,
    pub nodes_discovered: u64,
    pub frontier_high_water: u64,
    /// Present iff `status == Succeeded`.
    pub path: Option<Vec<OperationId>>,
    pub catalog_digest: ContentHash,
}

impl SearchReportV1 {
    /// Snapshot `search`.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the catalog digest cannot be computed.
    pub fn from_search(search: &IncrementalSearch) -> Result<Self, CanonError> {
        Ok(Self {
            start: search.start(),
            goal: search.goal(),
            status: search.status(),
            steps_taken: search.steps_taken(),
            nodes_discovered: search.nodes().len() as u64,
            frontier_high_water: search.frontier_high_water(),
            path: search.result().ok().map(<[OperationId]>::to_vec),
            catalog_digest: catalog_digest()?,
        })
    }

    /// Convert to a `serde_json::Value` for canonical serialization.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "catalog_digest": self.catalog_digest.as_str(),
            "frontier_high_water": self.frontier_high_water,
            "goal": inventory_to_json(self.goal),
            "nodes_discovered": self.nodes_discovered,
            "path": self.path.as_deref().map_or(serde_json::Value::Null, path_to_json),
            "schema_version": REPORT_SCHEMA_VERSION,
            "start": inventory_to_json(self.start),
            "status": self.status.as_str(),
            "steps_taken": self.steps_taken,
        })
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content digest of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::SearchReport,
            &self.to_canonical_json_bytes()?,
        ))
    }
}

fn inventory_to_json(key: PackedKeyV1) -> serde_json::Value {
    let inventory = InventoryV1::unpack(key);
    serde_json::json!({
        "counts": inventory.counts().to_vec(),
        "key": key.to_string(),
    })
}

fn path_to_json(path: &[OperationId]) -> serde_json::Value {
    serde_json::json!({
        "digest": path_digest(path).as_str(),
        "glyphs": path_to_glyphs(path),
        "ids": path.iter().map(|id| id.as_u8()).collect::<Vec<_>>(),
        "length": path.len(),
        "names": path_to_string(path),
    })
}
