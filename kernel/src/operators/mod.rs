//! Operators module: the fixed operation catalog, the recipe table, and the
//! `apply()` transition function.
//!
//! Depends on `carrier`. Uses `proof::canon` and `proof::hash` for snapshot digests.

pub mod apply;
pub mod catalog;
pub mod recipes;
