use serde::{Deserialize, Serialize};

use crate::catalog::{Diet, Difficulty, Recipe};
use crate::matching::normalize::normalize;

/// The bundle of independent, optionally-bypassed predicates applied to a
/// recipe catalog. An empty `search_query`, empty `ingredients` list,
/// `None` `max_minutes`, or an `Any` difficulty/diet each mean "no
/// constraint on that axis".
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Free-text term matched against the title or any ingredient.
    pub search_query: String,
    /// Required ingredient terms; every term must match some ingredient.
    pub ingredients: Vec<String>,
    /// Upper bound on cook time, in minutes.
    pub max_minutes: Option<u32>,
    pub difficulty: Difficulty,
    pub diet: Diet,
}

/// Return the subset of `recipes` satisfying every active filter, in the
/// same relative order as the input. Strict boolean predicates, no ranking,
/// no result limit; input records are never mutated.
pub fn filter_recipes(recipes: &[Recipe], filters: &FilterSpec) -> Vec<Recipe> {
    let query = normalize(&filters.search_query);
    let required_terms: Vec<String> = filters
        .ingredients
        .iter()
        .map(|term| normalize(term))
        .filter(|term| !term.is_empty())
        .collect();

    recipes
        .iter()
        .filter(|recipe| {
            if !query.is_empty() && !matches_search(recipe, &query) {
                return false;
            }
            if !required_terms.iter().all(|term| has_ingredient(recipe, term)) {
                return false;
            }
            if let Some(max_minutes) = filters.max_minutes {
                if recipe.cook_time > max_minutes {
                    return false;
                }
            }
            if filters.difficulty != Difficulty::Any && recipe.difficulty != filters.difficulty {
                return false;
            }
            if filters.diet != Diet::Any && recipe.diet != filters.diet {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

/// Free-text search: the normalized query is a substring of the normalized
/// title, or of at least one ingredient's normalized name.
fn matches_search(recipe: &Recipe, normalized_query: &str) -> bool {
    normalize(&recipe.title).contains(normalized_query)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| normalize(ingredient.name()).contains(normalized_query))
}

/// Required-ingredient terms match against the ingredient list only, never
/// the title.
fn has_ingredient(recipe: &Recipe, normalized_term: &str) -> bool {
    recipe
        .ingredients
        .iter()
        .any(|ingredient| normalize(ingredient.name()).contains(normalized_term))
}
