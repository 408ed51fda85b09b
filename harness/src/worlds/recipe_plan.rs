//! `RecipePlan`: restore a balanced inventory after running production recipes.
//!
//! Starts from a baseline with every polarization at the same count, applies
//! each recipe `amounts[i]` times in table order, and asks the search for the
//! shortest catalog sequence that returns to the baseline.

use arcosphere_kernel::carrier::inventory::InventoryV1;
use arcosphere_kernel::operators::apply::apply_recipe;
use arcosphere_kernel::operators::recipes::{recipe_index, RECIPES, RECIPE_COUNT};

use crate::contract::{PlanningWorldV1, WorldError};

/// Default per-polarization count of the balanced baseline.
pub const DEFAULT_BASE_COUNT: u8 = 5;

/// Recipe amounts applied to a uniform baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipePlan {
    pub base_count: u8,
    pub amounts: [u32; RECIPE_COUNT],
}

impl Default for RecipePlan {
    fn default() -> Self {
        Self {
            base_count: DEFAULT_BASE_COUNT,
            amounts: [0; RECIPE_COUNT],
        }
    }
}

impl RecipePlan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the amount for the recipe named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownRecipe`] if no recipe has that name.
    pub fn with_amount(mut self, name: &str, amount: u32) -> Result<Self, WorldError> {
        let index =
            recipe_index(name).ok_or_else(|| WorldError::UnknownRecipe { name: name.into() })?;
        self.amounts[index] = amount;
        Ok(self)
    }

    /// The balanced baseline (also the goal).
    #[must_use]
    pub fn baseline_state(&self) -> InventoryV1 {
        InventoryV1::uniform(self.base_count)
    }
}

impl PlanningWorldV1 for RecipePlan {
    fn world_id(&self) -> &'static str {
        "recipe_plan"
    }

    fn start_state(&self) -> Result<InventoryV1, WorldError> {
        let mut state = self.baseline_state();
        for (recipe, &amount) in RECIPES.iter().zip(&self.amounts) {
            for iteration in 0..amount {
                state = apply_recipe(&state, recipe).map_err(|failure| {
                    WorldError::RecipeFailed {
                        recipe: recipe.name,
                        iteration,
                        failure,
                    }
                })?;
            }
        }
        Ok(state)
    }

    fn goal_state(&self) -> Result<InventoryV1, WorldError> {
        Ok(self.baseline_state())
    }

    fn baseline(&self) -> i32 {
        i32::from(self.base_count)
    }
}
