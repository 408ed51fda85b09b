//! End-to-end scenarios for the incremental search.

use arcosphere_kernel::carrier::inventory::InventoryV1;
use arcosphere_kernel::carrier::polarization::Polarization;
use arcosphere_kernel::operators::apply::{apply, try_apply};
use arcosphere_kernel::operators::catalog::{inverse_of, OperationId, OP_FOLD_3};
use arcosphere_search::error::SearchError;
use arcosphere_search::search::{IncrementalSearch, SearchStatus};

#[test]
fn start_equal_to_goal_finishes_on_first_step() {
    let s = InventoryV1::uniform(5);
    let mut search = IncrementalSearch::new(s, s);
    assert!(!search.is_done());
    assert_eq!(search.step(1).unwrap(), SearchStatus::Succeeded);
    assert!(search.is_done());
    assert!(!search.is_failed());
    assert!(search.result().unwrap().is_empty());
    assert_eq!(search.steps_taken(), 1);
}

#[test]
fn nothing_applicable_fails_immediately() {
    let start = InventoryV1::new();
    let goal = InventoryV1::uniform(1);
    let mut search = IncrementalSearch::new(start, goal);
    assert_eq!(search.step(1000).unwrap(), SearchStatus::Failed);
    assert!(search.is_failed());
    assert!(!search.is_done());
    assert_eq!(search.steps_taken(), 1);
    assert_eq!(search.nodes().len(), 1);
    assert!(matches!(
        search.result(),
        Err(SearchError::ResultNotReady {
            status: SearchStatus::Failed
        })
    ));
}

#[test]
fn invert_round_trip_restores_state() {
    let states = [
        InventoryV1::uniform(1),
        InventoryV1::uniform(5),
        InventoryV1::from_counts([3, 9, 1, 4, 7, 2, 6, 1]),
    ];
    for s in states {
        for id in OperationId::all() {
            let Some(inverse) = inverse_of(id) else {
                continue;
            };
            if let Some(once) = try_apply(&s, id) {
                if let Some(back) = try_apply(&once, inverse) {
                    assert_eq!(back, s, "{id} then {inverse} from {s:?}");
                }
            }
        }
    }
}

#[test]
fn one_operation_away_yields_that_operation() {
    let start = InventoryV1::uniform(3);
    for id in OperationId::all() {
        let goal = apply(&start, id).unwrap();
        let mut search = IncrementalSearch::new(start, goal);
        let status = search.step(u32::MAX).unwrap();
        assert_eq!(status, SearchStatus::Succeeded, "{id}");
        assert_eq!(search.result().unwrap(), &[id], "{id}");
    }
}

#[test]
fn small_closed_component_is_exhausted() {
    // Lambda + Omega folds into Xi + Theta and nothing applies afterwards.
    let start = InventoryV1::new()
        .with_count(Polarization::Lambda, 1)
        .with_count(Polarization::Omega, 1);
    let goal = InventoryV1::new().with_count(Polarization::Lambda, 2);
    let mut search = IncrementalSearch::new(start, goal);
    assert_eq!(search.step(1).unwrap(), SearchStatus::Running);
    assert_eq!(search.step(1).unwrap(), SearchStatus::Failed);
    assert_eq!(search.nodes().len(), 2);
    assert_eq!(search.steps_taken(), 2);
}

#[test]
fn stepping_after_success_is_a_no_op() {
    let start = InventoryV1::uniform(2);
    let goal = apply(&start, OP_FOLD_3).unwrap();
    let mut search = IncrementalSearch::new(start, goal);
    search.step(10).unwrap();
    let steps = search.steps_taken();
    assert_eq!(search.step(10).unwrap(), SearchStatus::Succeeded);
    assert_eq!(search.steps_taken(), steps);
    assert_eq!(search.result().unwrap(), &[OP_FOLD_3]);
}
