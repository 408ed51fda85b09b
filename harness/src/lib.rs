//! Arcosphere Harness: drives searches the way an interactive front end does.
//!
//! A world supplies a start and goal inventory; the runner constructs an
//! [`arcosphere_search::search::IncrementalSearch`], feeds it one budgeted
//! slice per frame until it settles, replays the result through the kernel,
//! and packages the outcome as a report plus a plain-text walkthrough.
//!
//! The harness does NOT implement search or transition logic; it delegates
//! to the search crate and the kernel.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod policy;
pub mod report_dir;
pub mod runner;
pub mod walkthrough;
pub mod worlds;
