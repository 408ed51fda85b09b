//! Determinism under slicing: the step budget never changes the answer.

use arcosphere_harness::contract::PlanningWorldV1;
use arcosphere_harness::worlds::recipe_plan::RecipePlan;
use arcosphere_kernel::carrier::inventory::InventoryV1;
use arcosphere_search::report::SearchReportV1;
use arcosphere_search::search::{IncrementalSearch, SearchStatus};
use lock_tests::oracle::walk;

fn run_with_budget(start: InventoryV1, goal: InventoryV1, budget: u32) -> (SearchStatus, Vec<u8>) {
    let mut search = IncrementalSearch::new(start, goal);
    let mut status = search.status();
    let mut calls = 0u32;
    while !status.is_terminal() {
        status = search.step(budget).unwrap();
        calls += 1;
        assert!(calls < 1_000_000, "search did not settle");
    }
    let report = SearchReportV1::from_search(&search).unwrap();
    (status, report.to_canonical_json_bytes().unwrap())
}

fn assert_slicing_invariant(start: InventoryV1, goal: InventoryV1) {
    let (reference_status, reference) = run_with_budget(start, goal, u32::MAX);
    for budget in [1, 2, 7, 1000] {
        let (status, bytes) = run_with_budget(start, goal, budget);
        assert_eq!(status, reference_status, "budget {budget}");
        assert_eq!(
            bytes,
            reference,
            "report bytes differ at budget {budget}:\n{}\n{}",
            String::from_utf8_lossy(&bytes),
            String::from_utf8_lossy(&reference)
        );
    }
}

#[test]
fn recipe_plan_is_slice_invariant() {
    let plan = RecipePlan::new().with_amount("Folding B", 1).unwrap();
    assert_slicing_invariant(plan.start_state().unwrap(), plan.goal_state().unwrap());
}

#[test]
fn random_walk_goals_are_slice_invariant() {
    let start = InventoryV1::uniform(2);
    for seed in 0..8 {
        let goal = walk(start, 3, seed);
        assert_slicing_invariant(start, goal);
    }
}

#[test]
fn unreachable_goal_is_slice_invariant() {
    let start = InventoryV1::from_counts([1, 0, 0, 0, 0, 0, 0, 1]);
    let goal = InventoryV1::from_counts([0, 0, 0, 0, 0, 0, 0, 2]);
    assert_slicing_invariant(start, goal);
}

#[test]
fn repeated_construction_is_identical() {
    let start = InventoryV1::uniform(2);
    let goal = walk(start, 4, 99);
    let a = run_with_budget(start, goal, 3);
    let b = run_with_budget(start, goal, 3);
    assert_eq!(a, b);
}
