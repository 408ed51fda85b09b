//! Runner output persisted to a report directory and read back.

use arcosphere_harness::policy::RunConfig;
use arcosphere_harness::report_dir::{
    read_report_dir, write_report_dir, ReportDirReadError, DIGEST_FILENAME, REPORT_FILENAME,
    WALKTHROUGH_FILENAME,
};
use arcosphere_harness::runner::{run_plan, RunOutcomeV1};
use arcosphere_harness::worlds::fixed_pair::FixedPair;
use arcosphere_harness::worlds::recipe_plan::RecipePlan;
use arcosphere_kernel::carrier::inventory::InventoryV1;

#[test]
fn succeeded_run_round_trips() {
    let plan = RecipePlan::new().with_amount("Folding B", 1).unwrap();
    let run = run_plan(&plan, &RunConfig::default()).unwrap();
    assert_eq!(run.outcome, RunOutcomeV1::Succeeded);

    let dir = tempfile::tempdir().unwrap();
    let digest = write_report_dir(&run, dir.path()).unwrap();
    let loaded = read_report_dir(dir.path()).unwrap();

    assert_eq!(loaded.digest, digest);
    assert_eq!(loaded.report["path"]["length"], 2);
    assert_eq!(loaded.report["path"]["names"], "Fold-7 -> Fold-8");
    assert_eq!(loaded.report["path"]["ids"][0], 8);
    assert!(loaded.walkthrough.contains("Fold-7 -> Fold-8"));
}

#[test]
fn unreachable_run_round_trips_with_null_path() {
    let world = FixedPair::new(InventoryV1::new(), InventoryV1::uniform(1));
    let run = run_plan(&world, &RunConfig::default()).unwrap();
    assert_eq!(run.outcome, RunOutcomeV1::Unreachable);

    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&run, dir.path()).unwrap();
    let loaded = read_report_dir(dir.path()).unwrap();
    assert!(loaded.report["path"].is_null());
    assert_eq!(loaded.report["status"], "failed");
    assert!(loaded.walkthrough.ends_with("Destination unreachable\n"));
}

#[test]
fn rewriting_same_run_is_byte_identical() {
    let plan = RecipePlan::new().with_amount("Folding B", 1).unwrap();
    let run = run_plan(&plan, &RunConfig::default()).unwrap();
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    write_report_dir(&run, a.path()).unwrap();
    write_report_dir(&run, b.path()).unwrap();
    for name in [REPORT_FILENAME, WALKTHROUGH_FILENAME, DIGEST_FILENAME] {
        assert_eq!(
            std::fs::read(a.path().join(name)).unwrap(),
            std::fs::read(b.path().join(name)).unwrap(),
            "{name}"
        );
    }
}

#[test]
fn missing_walkthrough_is_rejected() {
    let run = run_plan(&RecipePlan::new(), &RunConfig::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&run, dir.path()).unwrap();
    std::fs::remove_file(dir.path().join(WALKTHROUGH_FILENAME)).unwrap();
    let err = read_report_dir(dir.path()).unwrap_err();
    assert!(
        matches!(err, ReportDirReadError::MissingFile { ref filename } if filename == WALKTHROUGH_FILENAME),
        "got {err:?}"
    );
}
