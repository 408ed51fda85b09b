//! Arcosphere Kernel: the deterministic core of the arcosphere planner.
//!
//! # API Surface
//!
//! - [`carrier::inventory::InventoryV1`] -- eight polarization counts with a
//!   reversible pack/unpack to [`carrier::packed::PackedKeyV1`]
//! - [`operators::apply::apply`] -- apply one catalog operation to an inventory
//! - [`proof::replay::replay_verify`] -- verify an operation path by deterministic replay
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `proof`
//!
//! `carrier` depends on nothing internal. `operators` depends on `carrier`
//! and uses `proof::canon`/`proof::hash` only for the catalog digest.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
