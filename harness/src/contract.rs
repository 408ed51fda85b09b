//! Planning world contract: the minimal trait a world must implement.
//!
//! Worlds provide domain data only (which inventory to start from, which to
//! reach, which baseline to render against). Worlds may NOT run searches,
//! replay paths, or write reports; those are runner concerns.

use arcosphere_kernel::carrier::inventory::InventoryV1;
use arcosphere_kernel::operators::apply::ApplyFailure;

/// Typed failure for world setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// A recipe could not be applied while deriving the start inventory.
    RecipeFailed {
        recipe: &'static str,
        iteration: u32,
        failure: ApplyFailure,
    },
    /// A recipe name did not match the recipe table.
    UnknownRecipe { name: String },
}

impl std::fmt::Display for WorldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RecipeFailed {
                recipe,
                iteration,
                failure,
            } => write!(f, "{recipe} #{iteration} could not be applied: {failure}"),
            Self::UnknownRecipe { name } => write!(f, "unknown recipe: {name}"),
        }
    }
}

impl std::error::Error for WorldError {}

/// The contract a world must implement to be run by the harness runner.
pub trait PlanningWorldV1 {
    /// Unique world identifier (e.g., `"recipe_plan"`).
    fn world_id(&self) -> &str;

    /// The inventory the search starts from.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if the world cannot produce a valid inventory.
    fn start_state(&self) -> Result<InventoryV1, WorldError>;

    /// The inventory the search must reach.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if the world cannot produce a valid inventory.
    fn goal_state(&self) -> Result<InventoryV1, WorldError>;

    /// Baseline count used when rendering inventories.
    fn baseline(&self) -> i32;
}
