//! Plain-text walkthrough of a search, laid out the way the planner screen shows it.
//!
//! ```text
//!       0  0  0  0  0  0  0  0 [20, 20 = 0]
//! --------
//! Steps: 3
//! Done
//! Length: 2
//! Invert-left -> Invert-right
//! --------
//! Invert-left
//!     ...
//! ```

use std::fmt::Write as _;

use arcosphere_kernel::carrier::inventory::InventoryV1;
use arcosphere_kernel::operators::catalog::{operation_name, path_to_string, OperationId};
use arcosphere_kernel::proof::replay::{replay_path, ReplayError};
use arcosphere_search::search::SearchStatus;

/// Separator line between walkthrough sections.
pub const SEPARATOR: &str = "--------";

/// Indentation applied to rendered inventories.
pub const INDENT: &str = "    ";

/// Render the walkthrough for a search that started at `start`.
///
/// `path` is consulted only when `status` is `Succeeded`. While the search is
/// still running only the step counter is shown.
///
/// # Errors
///
/// Returns [`ReplayError`] if `path` cannot be replayed from `start`.
pub fn render_walkthrough(
    start: &InventoryV1,
    baseline: i32,
    status: SearchStatus,
    steps: u32,
    path: Option<&[OperationId]>,
) -> Result<String, ReplayError> {
    let mut out = String::new();
    push_line(&mut out, &format!("{INDENT}{}", start.render(baseline)));
    push_line(&mut out, SEPARATOR);
    push_line(&mut out, &format!("Steps: {steps}"));

    match (status, path) {
        (SearchStatus::Succeeded, Some(path)) => {
            let states = replay_path(start, path)?;
            push_line(&mut out, "Done");
            push_line(&mut out, &format!("Length: {}", path.len()));
            push_line(&mut out, &path_to_string(path));
            push_line(&mut out, SEPARATOR);
            for (&op, after) in path.iter().zip(states.iter().skip(1)) {
                push_line(&mut out, operation_name(op));
                push_line(&mut out, &format!("{INDENT}{}", after.render(baseline)));
            }
        }
        (SearchStatus::Failed, _) => push_line(&mut out, "Destination unreachable"),
        _ => {}
    }
    Ok(out)
}

fn push_line(out: &mut String, line: &str) {
    let _ = writeln!(out, "{line}");
}
