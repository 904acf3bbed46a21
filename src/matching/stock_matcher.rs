use serde::Serialize;

use crate::catalog::Ingredient;
use crate::matching::normalize::normalize;

/// Partition of a recipe's ingredient list against the user's stock.
///
/// Invariant: `have_count + missing_count == total_ingredients`, and every
/// input ingredient lands in exactly one of the two lists, in input order.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub in_stock: Vec<Ingredient>,
    pub missing: Vec<Ingredient>,
    pub have_count: usize,
    pub missing_count: usize,
    pub total_ingredients: usize,
}

/// Decide which ingredients are covered by the given in-stock product names.
///
/// Each stock name is normalized once up front. An ingredient counts as in
/// stock when its normalized name is non-empty and shares a substring
/// relationship with some stock name in either direction: "milk" matches
/// "Chocolate Milk" and "Chocolate Milk" matches "milk". This deliberately
/// over-matches compound names; it mirrors how the stored product names are
/// entered and is relied on by callers.
pub fn match_against_stock(ingredients: &[Ingredient], stock_names: &[String]) -> MatchResult {
    let normalized_stock: Vec<String> = stock_names.iter().map(|name| normalize(name)).collect();

    let mut in_stock = Vec::new();
    let mut missing = Vec::new();
    for ingredient in ingredients {
        let norm_name = normalize(ingredient.name());
        let available = !norm_name.is_empty()
            && normalized_stock
                .iter()
                .any(|product| norm_name.contains(product.as_str()) || product.contains(norm_name.as_str()));
        if available {
            in_stock.push(ingredient.clone());
        } else {
            missing.push(ingredient.clone());
        }
    }

    MatchResult {
        have_count: in_stock.len(),
        missing_count: missing.len(),
        total_ingredients: ingredients.len(),
        in_stock,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::Alphanumeric;
    use rand::{Rng, SeedableRng};

    fn names(items: &[&str]) -> Vec<Ingredient> {
        items.iter().map(|s| Ingredient::Name(s.to_string())).collect()
    }

    fn stock(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_case_and_whitespace_insensitive_match() {
        let result = match_against_stock(&names(&["Tomato  "]), &stock(&["tomato"]));
        assert_eq!(result.have_count, 1);
        assert_eq!(result.missing_count, 0);
        // Original, non-normalized value is preserved in the partition.
        assert_eq!(result.in_stock[0].name(), "Tomato  ");
    }

    #[test]
    fn test_bidirectional_substring_containment() {
        let forward = match_against_stock(&names(&["milk"]), &stock(&["Chocolate Milk"]));
        assert_eq!(forward.have_count, 1);

        let backward = match_against_stock(&names(&["Chocolate Milk"]), &stock(&["milk"]));
        assert_eq!(backward.have_count, 1);
    }

    #[test]
    fn test_partition_preserves_input_order() {
        let ingredients = names(&["rice", "nori", "spam", "furikake"]);
        let result = match_against_stock(&ingredients, &stock(&["Spam", "Sushi Rice"]));
        assert_eq!(
            result.in_stock.iter().map(|i| i.name()).collect::<Vec<_>>(),
            vec!["rice", "spam"]
        );
        assert_eq!(
            result.missing.iter().map(|i| i.name()).collect::<Vec<_>>(),
            vec!["nori", "furikake"]
        );
        assert_eq!(result.total_ingredients, 4);
    }

    #[test]
    fn test_empty_inputs_are_safe() {
        let empty = match_against_stock(&[], &stock(&["milk"]));
        assert_eq!(empty.have_count, 0);
        assert_eq!(empty.missing_count, 0);
        assert_eq!(empty.total_ingredients, 0);
        assert!(empty.in_stock.is_empty());
        assert!(empty.missing.is_empty());

        let no_stock = match_against_stock(&names(&["milk"]), &[]);
        assert_eq!(no_stock.have_count, 0);
        assert_eq!(no_stock.missing_count, 1);
    }

    #[test]
    fn test_blank_ingredient_name_is_never_in_stock() {
        let ingredients = vec![Ingredient::Name(String::new()), Ingredient::Name("  ".into())];
        let result = match_against_stock(&ingredients, &stock(&["milk", "rice"]));
        assert_eq!(result.have_count, 0);
        assert_eq!(result.missing_count, 2);
    }

    #[test]
    fn test_record_ingredients_match_by_name() {
        let ingredients = vec![
            Ingredient::Record {
                name: "Soy Sauce".into(),
                quantity: Some(0.25),
                unit: Some("cup".into()),
                note: None,
            },
            Ingredient::Record {
                name: "ginger".into(),
                quantity: None,
                unit: None,
                note: Some("grated".into()),
            },
        ];
        let result = match_against_stock(&ingredients, &stock(&["soy sauce"]));
        assert_eq!(result.have_count, 1);
        assert_eq!(result.in_stock[0].name(), "Soy Sauce");
        assert_eq!(result.missing[0].name(), "ginger");
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let ingredients = names(&["chicken", "soy sauce", "sugar"]);
        let pantry = stock(&["Chicken Thighs", "sugar"]);
        let first = match_against_stock(&ingredients, &pantry);
        let second = match_against_stock(&ingredients, &pantry);
        assert_eq!(first, second);
    }

    #[test]
    fn test_partition_invariant_on_random_inputs() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let ingredient_count = rng.gen_range(0..12);
            let stock_count = rng.gen_range(0..8);
            let ingredients: Vec<Ingredient> = (0..ingredient_count)
                .map(|_| {
                    let len = rng.gen_range(0..6);
                    let name: String =
                        (&mut rng).sample_iter(&Alphanumeric).take(len).map(char::from).collect();
                    Ingredient::Name(name)
                })
                .collect();
            let pantry: Vec<String> = (0..stock_count)
                .map(|_| {
                    let len = rng.gen_range(0..6);
                    (&mut rng).sample_iter(&Alphanumeric).take(len).map(char::from).collect()
                })
                .collect();

            let result = match_against_stock(&ingredients, &pantry);
            assert_eq!(result.in_stock.len() + result.missing.len(), ingredients.len());
            assert_eq!(result.have_count, result.in_stock.len());
            assert_eq!(result.missing_count, result.missing.len());
            assert_eq!(result.total_ingredients, ingredients.len());
        }
    }
}
