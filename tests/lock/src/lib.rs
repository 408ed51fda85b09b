//! Shared helpers for the workspace lock tests.

pub mod oracle;
