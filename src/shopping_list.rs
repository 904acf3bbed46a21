use std::collections::HashSet;

use crate::catalog::Ingredient;
use crate::matching::normalize::normalize_key;

/// Collapse the missing ingredients of one or more recipes into a single
/// shopping list. Entries are deduplicated by `normalize_key`, so "Apples"
/// and "apple" collapse to one line; the first-seen display name wins and
/// insertion order is preserved. Entries with no usable name are dropped.
///
/// The key heuristic is naive on purpose (see `normalize_key`): "tomato"
/// and "tomatoes" stay as two lines.
pub fn build_shopping_list(missing: &[Ingredient]) -> Vec<String> {
    let mut seen_keys = HashSet::new();
    let mut items = Vec::new();
    for ingredient in missing {
        let key = normalize_key(ingredient.name());
        if key.is_empty() {
            continue;
        }
        if seen_keys.insert(key) {
            items.push(ingredient.name().trim().to_string());
        }
    }
    items
}
