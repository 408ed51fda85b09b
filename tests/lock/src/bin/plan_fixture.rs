//! Binary that runs a fixed `RecipePlan` through the harness runner
//! and prints deterministic output lines for cross-process verification.
//!
//! Usage: `plan_fixture`
//!
//! Output: key=value lines (see source for format).

use arcosphere_harness::policy::RunConfig;
use arcosphere_harness::runner::run_plan;
use arcosphere_harness::worlds::recipe_plan::RecipePlan;
use arcosphere_kernel::operators::catalog::{catalog_digest, path_to_glyphs, path_to_string};
use arcosphere_kernel::proof::replay::path_digest;

fn main() {
    let plan = RecipePlan::new()
        .with_amount("Folding B", 1)
        .expect("known recipe");
    let run = run_plan(&plan, &RunConfig::default()).expect("plan run failed");
    let path = run.path.as_deref().unwrap_or(&[]);

    println!("world={}", run.world_id);
    println!("outcome={}", run.outcome.as_str());
    println!("start={}", run.start.pack());
    println!("goal={}", run.goal.pack());
    println!("steps={}", run.report.steps_taken);
    println!("nodes={}", run.report.nodes_discovered);
    println!("length={}", path.len());
    println!("path={}", path_to_string(path));
    println!("glyphs={}", path_to_glyphs(path));
    println!("path_digest={}", path_digest(path).as_str());
    println!(
        "catalog_digest={}",
        catalog_digest().expect("catalog digest").as_str()
    );
    println!(
        "report_digest={}",
        run.report.digest().expect("report digest").as_str()
    );
}
