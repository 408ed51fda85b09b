//! Search node table and single-state expansion.
//!
//! The discovery relation is a parent-pointer map keyed by [`PackedKeyV1`],
//! not a graph of owned nodes: a node refers to its predecessor by value, so
//! the table owns every node exactly once even though the transition graph
//! has cycles.

use std::collections::HashMap;

use arcosphere_kernel::carrier::inventory::InventoryV1;
use arcosphere_kernel::carrier::packed::PackedKeyV1;
use arcosphere_kernel::operators::apply::try_apply;
use arcosphere_kernel::operators::catalog::{OperationId, CATALOG_LEN};

/// The predecessor and operation that first reached a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryLinkV1 {
    pub from: PackedKeyV1,
    pub operation: OperationId,
}

/// How a node entered the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryV1 {
    /// The search start, reached with zero operations.
    Root,
    /// First reached from another key.
    Link(DiscoveryLinkV1),
}

/// Per-key search metadata.
///
/// `discovery` is written at most once (first discoverer wins). `reachable`
/// is filled when the node is expanded and never invalidated, because the
/// transition function is pure.
#[derive(Debug, Clone, Default)]
pub struct SearchNodeV1 {
    discovery: Option<DiscoveryV1>,
    reachable: [Option<PackedKeyV1>; CATALOG_LEN],
    expanded: bool,
}

impl SearchNodeV1 {
    #[must_use]
    pub fn discovery(&self) -> Option<DiscoveryV1> {
        self.discovery
    }

    /// The discovery link, or `None` for the root and undiscovered nodes.
    #[must_use]
    pub fn link(&self) -> Option<DiscoveryLinkV1> {
        match self.discovery {
            Some(DiscoveryV1::Link(link)) => Some(link),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_discovered(&self) -> bool {
        self.discovery.is_some()
    }

    /// Whether [`NodeTable::explore`] has run on this node.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Cached successor via `operation`; `None` if infeasible or not yet expanded.
    #[must_use]
    pub fn reachable(&self, operation: OperationId) -> Option<PackedKeyV1> {
        self.reachable[operation.index()]
    }

    /// Number of feasible operations recorded in the cache.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.reachable.iter().filter(|r| r.is_some()).count()
    }
}

/// Packed key → [`SearchNodeV1`].
#[derive(Debug, Default)]
pub struct NodeTable {
    nodes: HashMap<PackedKeyV1, SearchNodeV1>,
}

impl NodeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key` as the search root.
    ///
    /// The root counts as discovered, so no later expansion can attach a link
    /// to it or enqueue it a second time.
    pub fn seed_root(&mut self, key: PackedKeyV1) {
        let node = self.nodes.entry(key).or_default();
        if node.discovery.is_none() {
            node.discovery = Some(DiscoveryV1::Root);
        }
    }

    #[must_use]
    pub fn get(&self, key: PackedKeyV1) -> Option<&SearchNodeV1> {
        self.nodes.get(&key)
    }

    /// Discovery link of `key`, if it has one.
    #[must_use]
    pub fn link(&self, key: PackedKeyV1) -> Option<DiscoveryLinkV1> {
        self.nodes.get(&key).and_then(SearchNodeV1::link)
    }

    #[must_use]
    pub fn contains(&self, key: PackedKeyV1) -> bool {
        self.nodes.contains_key(&key)
    }

    /// Number of keys in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Record `link` as the discovery of `key` unless it is already discovered.
    ///
    /// Returns `true` iff this call set the link.
    pub fn record_discovery(&mut self, key: PackedKeyV1, link: DiscoveryLinkV1) -> bool {
        let node = self.nodes.entry(key).or_default();
        if node.discovery.is_some() {
            return false;
        }
        node.discovery = Some(DiscoveryV1::Link(link));
        true
    }

    /// Expand `key` through the whole catalog in id order.
    ///
    /// Fills the node's per-operation successor cache and returns the
    /// successors discovered for the first time by this call, in catalog
    /// order. Infeasible operations leave their cache slot empty.
    pub fn explore(&mut self, key: PackedKeyV1) -> Vec<PackedKeyV1> {
        let successors = self.successors(key);

        let mut discovered = Vec::new();
        for (operation, next) in successors {
            if self.record_discovery(
                next,
                DiscoveryLinkV1 {
                    from: key,
                    operation,
                },
            ) {
                discovered.push(next);
            }
        }
        discovered
    }

    /// Feasible `(operation, successor)` pairs of `key`, from the cache when
    /// the node was already expanded.
    fn successors(&mut self, key: PackedKeyV1) -> Vec<(OperationId, PackedKeyV1)> {
        let node = self.nodes.entry(key).or_default();
        if !node.expanded {
            let state = InventoryV1::unpack(key);
            for operation in OperationId::all() {
                node.reachable[operation.index()] =
                    try_apply(&state, operation).map(|next| next.pack());
            }
            node.expanded = true;
        }
        OperationId::all()
            .filter_map(|operation| node.reachable[operation.index()].map(|next| (operation, next)))
            .collect()
    }
}
