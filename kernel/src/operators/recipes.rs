//! Production recipes: the ten ways a factory perturbs an arcosphere inventory.
//!
//! Recipes are not part of the search catalog. They exist to derive a start
//! inventory ("what the factory left me with") from a balanced baseline, after
//! which the search finds catalog operations that restore the baseline.

use crate::carrier::polarization::Polarization::{
    self, Epsilon, Gamma, Lambda, Omega, Phi, Theta, Xi, Zeta,
};
use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash};
use crate::proof::hash_domain::HashDomain;

/// Number of recipes.
pub const RECIPE_COUNT: usize = 10;

/// One production recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeV1 {
    pub name: &'static str,
    pub takes: &'static [Polarization],
    pub makes: &'static [Polarization],
}

/// The recipe table, in presentation order (A/B outcome pairs).
pub static RECIPES: [RecipeV1; RECIPE_COUNT] = [
    RecipeV1 {
        name: "Folding A",
        takes: &[Lambda, Xi],
        makes: &[Zeta, Theta],
    },
    RecipeV1 {
        name: "Folding B",
        takes: &[Lambda, Xi],
        makes: &[Epsilon, Phi],
    },
    RecipeV1 {
        name: "Warping A",
        takes: &[Epsilon, Phi],
        makes: &[Zeta, Theta],
    },
    RecipeV1 {
        name: "Warping B",
        takes: &[Epsilon, Phi],
        makes: &[Omega, Gamma],
    },
    RecipeV1 {
        name: "Dilation A",
        takes: &[Zeta, Omega],
        makes: &[Lambda, Lambda],
    },
    RecipeV1 {
        name: "Dilation B",
        takes: &[Zeta, Omega],
        makes: &[Phi, Phi],
    },
    RecipeV1 {
        name: "Injection A",
        takes: &[Theta, Gamma],
        makes: &[Epsilon, Epsilon],
    },
    RecipeV1 {
        name: "Injection B",
        takes: &[Theta, Gamma],
        makes: &[Zeta, Zeta],
    },
    RecipeV1 {
        name: "Naq tesseract A",
        takes: &[Lambda, Xi, Zeta],
        makes: &[Theta, Epsilon, Phi],
    },
    RecipeV1 {
        name: "Naq tesseract B",
        takes: &[Lambda, Xi, Zeta],
        makes: &[Phi, Gamma, Omega],
    },
];

/// Table position of the recipe with presentation name `name`.
#[must_use]
pub fn recipe_index(name: &str) -> Option<usize> {
    RECIPES.iter().position(|r| r.name == name)
}

/// Look up a recipe by its presentation name.
#[must_use]
pub fn recipe_by_name(name: &str) -> Option<&'static RecipeV1> {
    recipe_index(name).map(|index| &RECIPES[index])
}

/// Content digest of the recipe table.
///
/// # Errors
///
/// Returns [`CanonError`] if canonical serialization fails.
pub fn recipe_table_digest() -> Result<ContentHash, CanonError> {
    let recipes: Vec<serde_json::Value> = RECIPES
        .iter()
        .enumerate()
        .map(|(index, r)| {
            serde_json::json!({
                "index": index,
                "makes": r.makes.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
                "name": r.name,
                "takes": r.takes.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
            })
        })
        .collect();
    let bytes = canonical_json_bytes(&serde_json::json!({
        "recipes": recipes,
        "schema_version": "recipe_table.v1",
    }))?;
    Ok(canonical_hash(HashDomain::RecipeTable, &bytes))
}
