use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::core::domain::PlanetRecord;

/// Key under which a wrapped catalog export stores its rows
const PLANETS_KEY: &str = "planets";

/// Container for a wrapped catalog export: `{"planets": [...]}`
#[derive(Debug, Deserialize)]
struct CatalogJson {
    planets: Vec<PlanetRecord>,
}

/// Parse a catalog JSON file into planet records
pub fn parse_catalog_json(json_path: &Path) -> Result<Vec<PlanetRecord>> {
    let json_content = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read JSON file: {}", json_path.display()))?;

    parse_catalog_json_str(&json_content)
}

/// Parse catalog JSON from a string.
///
/// Accepts either a bare array of rows or an object with a `planets` array.
/// Only `hostname` and `pl_name` are mandatory on each row; every other column
/// is coerced leniently and dropped to `None` when unreadable.
pub fn parse_catalog_json_str(json_str: &str) -> Result<Vec<PlanetRecord>> {
    // First validate that it's valid JSON
    let json_value: Value = serde_json::from_str(json_str).with_context(|| {
        let preview: String = json_str.chars().take(500).collect();
        format!("Invalid JSON syntax. First 500 chars: {}", preview)
    })?;

    let is_wrapped = json_value.get(PLANETS_KEY).is_some();

    match json_value {
        Value::Array(_) => {
            let planets: Vec<PlanetRecord> = serde_path_to_error::deserialize(json_value)
                .map_err(|e| {
                    anyhow::anyhow!(
                        "JSON deserialization error at {}: {}",
                        e.path(),
                        e.inner()
                    )
                })?;
            Ok(planets)
        }
        Value::Object(_) if is_wrapped => {
            let catalog: CatalogJson = serde_path_to_error::deserialize(json_value)
                .map_err(|e| {
                    anyhow::anyhow!(
                        "JSON deserialization error at {}: {}",
                        e.path(),
                        e.inner()
                    )
                })?;
            Ok(catalog.planets)
        }
        Value::Object(map) => anyhow::bail!(
            "JSON must be an array of planets or contain a '{}' key. Found keys: {:?}",
            PLANETS_KEY,
            map.keys().collect::<Vec<_>>()
        ),
        other => anyhow::bail!(
            "JSON must be an array of planets or an object, found: {}",
            json_type_name(&other)
        ),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
