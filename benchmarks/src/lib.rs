//! Shared helpers for arcosphere benchmark suites.

use arcosphere_harness::contract::PlanningWorldV1;
use arcosphere_harness::worlds::recipe_plan::RecipePlan;
use arcosphere_kernel::carrier::inventory::InventoryV1;
use arcosphere_search::search::{IncrementalSearch, SearchStatus};

/// A named start/goal pair.
pub struct PlanCase {
    pub name: &'static str,
    pub start: InventoryV1,
    pub goal: InventoryV1,
}

/// Recipe plans with known-reachable goals, from trivial to a few operations deep.
///
/// # Panics
///
/// Panics if a recipe name is unknown or a plan overdraws the baseline.
/// Benchmark setup failures are fatal.
#[must_use]
pub fn plan_cases() -> Vec<PlanCase> {
    let plans: [(&'static str, &[(&str, u32)]); 3] = [
        ("balanced", &[]),
        ("folding_b", &[("Folding B", 1)]),
        ("folding_b_x2", &[("Folding B", 2)]),
    ];
    plans
        .iter()
        .map(|&(name, amounts)| {
            let plan = amounts
                .iter()
                .try_fold(RecipePlan::new(), |plan, &(recipe, n)| {
                    plan.with_amount(recipe, n)
                })
                .expect("benchmark recipe plan");
            PlanCase {
                name,
                start: plan.start_state().expect("benchmark start state"),
                goal: plan.goal_state().expect("benchmark goal state"),
            }
        })
        .collect()
}

/// Drive a fresh search to a terminal status with `budget` iterations per call.
///
/// Returns the terminal status and the number of `step` calls used.
///
/// # Panics
///
/// Panics if the search reports an error.
#[must_use]
pub fn run_to_completion(start: InventoryV1, goal: InventoryV1, budget: u32) -> (SearchStatus, u64) {
    let mut search = IncrementalSearch::new(start, goal);
    let mut status = search.status();
    let mut calls = 0u64;
    while !status.is_terminal() {
        status = search.step(budget).expect("search step");
        calls += 1;
    }
    (status, calls)
}
