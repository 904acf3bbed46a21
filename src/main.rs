use anyhow::{Context, Result};
use pantry_match::catalog::parse_recipe_catalog;
use pantry_match::cli::parse_args;
use pantry_match::matching::filter_engine::filter_recipes;
use pantry_match::matching::stock_matcher::match_against_stock;
use pantry_match::pantry::load_pantry_stock;
use pantry_match::shopping_list::build_shopping_list;
use std::path::Path;
use tokio::fs;

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = parse_args();

    let catalog_json = fs::read_to_string(&cli_args.recipes)
        .await
        .with_context(|| format!("Failed to read recipe catalog '{}'", cli_args.recipes))?;
    let recipes = parse_recipe_catalog(&catalog_json)
        .with_context(|| format!("Failed to load recipe catalog '{}'", cli_args.recipes))?;
    println!("Loaded {} recipes from '{}'.", recipes.len(), cli_args.recipes);

    let stock_names = match &cli_args.pantry {
        Some(pantry_path) => {
            let stock = load_pantry_stock(Path::new(pantry_path), cli_args.location.as_deref())
                .with_context(|| format!("Failed to load pantry export '{}'", pantry_path))?;
            match &cli_args.location {
                Some(location) => println!(
                    "Pantry: {} products in stock in location '{}'.",
                    stock.len(),
                    location
                ),
                None => println!("Pantry: {} products in stock.", stock.len()),
            }
            Some(stock)
        }
        None => None,
    };

    let filters = cli_args.filter_spec();
    let matching = filter_recipes(&recipes, &filters);
    println!("\n{} of {} recipes match the active filters.", matching.len(), recipes.len());

    let mut all_missing = Vec::new();
    for recipe in &matching {
        match &stock_names {
            Some(stock) => {
                let result = match_against_stock(&recipe.ingredients, stock);
                println!(
                    "- {} ({} min, {:?}, {:?}): {}/{} ingredients in stock",
                    recipe.title,
                    recipe.cook_time,
                    recipe.difficulty,
                    recipe.diet,
                    result.have_count,
                    result.total_ingredients
                );
                for ingredient in &result.missing {
                    println!("    missing: {}", ingredient.name());
                }
                all_missing.extend(result.missing);
            }
            None => {
                println!(
                    "- {} ({} min, {:?}, {:?}, {} ingredients)",
                    recipe.title,
                    recipe.cook_time,
                    recipe.difficulty,
                    recipe.diet,
                    recipe.ingredients.len()
                );
            }
        }
    }

    if cli_args.shopping_list {
        let shopping_items = build_shopping_list(&all_missing);
        if shopping_items.is_empty() {
            println!("\nShopping list: nothing missing, you are fully stocked.");
        } else {
            println!("\nShopping list ({} items):", shopping_items.len());
            for item in &shopping_items {
                println!("  [ ] {}", item);
            }
        }
    }

    Ok(())
}
