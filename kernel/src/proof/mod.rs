//! Proof module: canonical JSON, content hashing, path replay.
//!
//! `canon` and `hash` depend on nothing internal. `replay` depends on
//! `carrier` and `operators`.

pub mod canon;
pub mod hash;
pub mod hash_domain;
pub mod replay;
