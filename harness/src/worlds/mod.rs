//! World implementations for the harness runner.

pub mod fixed_pair;
pub mod recipe_plan;
