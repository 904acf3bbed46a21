use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One line item of a recipe's ingredient list. Stored catalogs mix bare
/// name strings with structured records, so this is a sum type with a
/// single accessor rather than two parallel representations.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Ingredient {
    Name(String),
    Record {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
}

impl Ingredient {
    /// The ingredient's display name, whichever variant it is.
    pub fn name(&self) -> &str {
        match self {
            Ingredient::Name(name) => name,
            Ingredient::Record { name, .. } => name,
        }
    }

    /// Build an ingredient from an arbitrary stored JSON value. Anything
    /// that is neither a string nor an object with a string `name` degrades
    /// to an empty name instead of failing, so one junk entry cannot take
    /// down a whole catalog load.
    pub fn from_value(value: &Value) -> Ingredient {
        match value {
            Value::String(name) => Ingredient::Name(name.clone()),
            Value::Object(map) => Ingredient::Record {
                name: map
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                quantity: map.get("quantity").and_then(Value::as_f64),
                unit: map.get("unit").and_then(Value::as_str).map(str::to_string),
                note: map.get("note").and_then(Value::as_str).map(str::to_string),
            },
            _ => Ingredient::Name(String::new()),
        }
    }
}

impl<'de> Deserialize<'de> for Ingredient {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Ingredient, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Ingredient::from_value(&value))
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    /// Sentinel: no constraint on this axis.
    #[default]
    Any,
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Difficulty, D::Error> {
        // Stored labels outside the known set fall back to the Any
        // sentinel so one odd row cannot fail a catalog load.
        let value = Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some("Easy") => Difficulty::Easy,
            Some("Normal") => Difficulty::Normal,
            Some("Hard") => Difficulty::Hard,
            _ => Difficulty::Any,
        })
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Diet {
    Vegan,
    Vegetarian,
    Pescetarian,
    /// Sentinel: no constraint on this axis.
    #[default]
    Any,
}

impl<'de> Deserialize<'de> for Diet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Diet, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some("Vegan") => Diet::Vegan,
            Some("Vegetarian") => Diet::Vegetarian,
            Some("Pescetarian") => Diet::Pescetarian,
            _ => Diet::Any,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    /// Total cook time in minutes.
    #[serde(default)]
    pub cook_time: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub diet: Diet,
    #[serde(default, deserialize_with = "deserialize_ingredient_list")]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Stored ingredient lists come from loosely-typed JSON columns. A value
/// that is not an array is treated as an empty list rather than an error.
fn deserialize_ingredient_list<'de, D>(deserializer: D) -> Result<Vec<Ingredient>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(ingredients_from_value(&value))
}

pub fn ingredients_from_value(value: &Value) -> Vec<Ingredient> {
    match value {
        Value::Array(items) => items.iter().map(Ingredient::from_value).collect(),
        _ => Vec::new(),
    }
}

/// Parse a recipe catalog from its stored JSON form (a top-level array).
pub fn parse_recipe_catalog(json: &str) -> Result<Vec<Recipe>> {
    serde_json::from_str(json).context("Failed to parse recipe catalog JSON")
}
