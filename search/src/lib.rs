//! Arcosphere Search: incremental, interruptible breadth-first search over
//! packed inventories.
//!
//! This crate depends only on `arcosphere_kernel`; it does NOT depend on
//! `arcosphere_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! arcosphere_kernel  ←  arcosphere_search  ←  arcosphere_harness
//! (inventory, ops)      (node table, BFS)     (worlds, frame runner)
//! ```
//!
//! # Key types
//!
//! - [`NodeTable`] -- packed key → discovery link + per-operation successor cache
//! - [`FifoFrontier`] -- the BFS work queue
//! - [`IncrementalSearch`] -- the time-sliced driver (`step(budget)`)
//! - [`SearchReportV1`] -- canonical JSON snapshot of a search
//!
//! [`NodeTable`]: node::NodeTable
//! [`FifoFrontier`]: frontier::FifoFrontier
//! [`IncrementalSearch`]: search::IncrementalSearch
//! [`SearchReportV1`]: report::SearchReportV1

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod report;
pub mod search;
