use clap::Parser;

use crate::catalog::{Diet, Difficulty};
use crate::matching::filter_engine::FilterSpec;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the recipe catalog JSON file
    #[arg(short, long)]
    pub recipes: String,

    /// Path to a pantry CSV export (columns: Name, Quantity, Location)
    #[arg(short, long)]
    pub pantry: Option<String>,

    /// Only count pantry products stored in this location
    #[arg(long, requires = "pantry")]
    pub location: Option<String>,

    /// Free-text search matched against recipe titles and ingredients
    #[arg(short, long)]
    pub search: Option<String>,

    /// Require this ingredient; repeat the flag to require several
    #[arg(short, long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Maximum cook time in minutes
    #[arg(long)]
    pub max_minutes: Option<u32>,

    /// Difficulty filter; "any" imposes no constraint
    #[arg(long, value_enum, default_value_t = Difficulty::Any)]
    pub difficulty: Difficulty,

    /// Diet filter; "any" imposes no constraint
    #[arg(long, value_enum, default_value_t = Diet::Any)]
    pub diet: Diet,

    /// Print a deduplicated shopping list of missing ingredients
    #[arg(long, requires = "pantry")]
    pub shopping_list: bool,
}

impl Cli {
    /// Collect the filter flags into the engine's filter shape.
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            search_query: self.search.clone().unwrap_or_default(),
            ingredients: self.ingredients.clone(),
            max_minutes: self.max_minutes,
            difficulty: self.difficulty,
            diet: self.diet,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
