//! Reference breadth-first distance over inventories.
//!
//! Deliberately shares nothing with the search crate: no packed keys, no node
//! table, no frontier type. It only uses `try_apply` from the kernel, so it
//! can be used to check the incremental search's path lengths.

use std::collections::{HashMap, VecDeque};

use arcosphere_kernel::carrier::inventory::InventoryV1;
use arcosphere_kernel::operators::apply::try_apply;
use arcosphere_kernel::operators::catalog::OperationId;

/// Outcome of an oracle query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleDistance {
    /// Goal is reachable in exactly this many operations, and no fewer.
    Reachable(usize),
    /// Every reachable inventory was visited without meeting the goal.
    Unreachable { visited: usize },
    /// `max_visited` inventories were visited without a verdict.
    Inconclusive,
}

/// Minimum number of catalog operations from `start` to `goal`.
#[must_use]
pub fn shortest_distance(
    start: InventoryV1,
    goal: InventoryV1,
    max_visited: usize,
) -> OracleDistance {
    let mut depth: HashMap<InventoryV1, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    depth.insert(start, 0);
    queue.push_back(start);

    while let Some(at) = queue.pop_front() {
        let d = depth[&at];
        if at == goal {
            return OracleDistance::Reachable(d);
        }
        for id in OperationId::all() {
            if let Some(next) = try_apply(&at, id) {
                if !depth.contains_key(&next) {
                    depth.insert(next, d + 1);
                    queue.push_back(next);
                }
            }
        }
        if depth.len() > max_visited {
            return OracleDistance::Inconclusive;
        }
    }
    OracleDistance::Unreachable {
        visited: depth.len(),
    }
}

/// Deterministic pseudo-random walk of up to `len` applicable operations.
///
/// Uses a fixed 64-bit LCG so every run sees the same walks.
#[must_use]
pub fn walk(start: InventoryV1, len: usize, seed: u64) -> InventoryV1 {
    let mut state = seed;
    let mut at = start;
    for _ in 0..len {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let ops: Vec<OperationId> = OperationId::all()
            .filter(|&id| try_apply(&at, id).is_some())
            .collect();
        if ops.is_empty() {
            break;
        }
        let pick = ops[((state >> 33) as usize) % ops.len()];
        if let Some(next) = try_apply(&at, pick) {
            at = next;
        }
    }
    at
}
