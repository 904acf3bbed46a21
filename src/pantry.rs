use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

use crate::matching::normalize::normalize;

// Expected column headers of a pantry export.
const NAME_COL: &str = "Name";
const QUANTITY_COL: &str = "Quantity";
const LOCATION_COL: &str = "Location";

fn parse_optional_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

/// Load the in-stock product names from a pantry CSV export.
///
/// Only rows with a non-empty name and a parseable quantity greater than
/// zero are kept; the matching layer downstream receives plain name
/// strings with no quantity semantics. When `location` is given, rows are
/// additionally scoped to that storage location (case-insensitive), which
/// requires the export to carry a `Location` column.
pub fn load_pantry_stock(csv_path: &Path, location: Option<&str>) -> Result<Vec<String>> {
    if !csv_path.exists() {
        return Err(anyhow::anyhow!("Pantry CSV file not found at: {:?}", csv_path));
    }

    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open pantry CSV file at {:?}", csv_path))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = rdr.headers()?.clone();
    let name_idx = headers
        .iter()
        .position(|h| h == NAME_COL)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", NAME_COL))?;
    let quantity_idx = headers
        .iter()
        .position(|h| h == QUANTITY_COL)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", QUANTITY_COL))?;
    let location_idx = headers.iter().position(|h| h == LOCATION_COL);

    let wanted_location = location.map(normalize);
    if wanted_location.is_some() && location_idx.is_none() {
        return Err(anyhow::anyhow!(
            "Cannot scope to a location: column '{}' not found in {:?}",
            LOCATION_COL,
            csv_path
        ));
    }

    let mut stock_names = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("Failed to read record at row index {}", row_index))?;

        let name = record.get(name_idx).unwrap_or("").trim().to_string();
        if name.is_empty() {
            continue;
        }

        let quantity = record.get(quantity_idx).and_then(parse_optional_f64);
        if quantity.map_or(true, |q| q <= 0.0) {
            continue;
        }

        if let (Some(wanted), Some(loc_idx)) = (&wanted_location, location_idx) {
            let row_location = normalize(record.get(loc_idx).unwrap_or(""));
            if row_location != *wanted {
                continue;
            }
        }

        stock_names.push(name);
    }

    Ok(stock_names)
}
