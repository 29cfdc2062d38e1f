use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::core::domain::PlanetRecord;
use crate::core::error::{CatalogError, CatalogResult, ErrorContext};
use crate::parsing::json_parser;

/// Supplies planet rows to a render pass.
///
/// The dashboard owns loading and caching; the core only asks a source for
/// the current rows and recomputes everything from them.
pub trait CatalogSource {
    /// Return every planet row of the catalog.
    fn planets(&self) -> CatalogResult<Vec<PlanetRecord>>;
}

/// A catalog already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    planets: Vec<PlanetRecord>,
}

impl InMemoryCatalog {
    pub fn new(planets: Vec<PlanetRecord>) -> Self {
        Self { planets }
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }
}

impl CatalogSource for InMemoryCatalog {
    fn planets(&self) -> CatalogResult<Vec<PlanetRecord>> {
        Ok(self.planets.clone())
    }
}

/// A JSON catalog file, read on every request.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileCatalog {
    fn planets(&self) -> CatalogResult<Vec<PlanetRecord>> {
        json_parser::parse_catalog_json(&self.path).map_err(|e| {
            CatalogError::parse(format!("{:#}", e)).with_context(
                ErrorContext::new("load_catalog")
                    .with_entity("catalog")
                    .with_entity_id(self.path.display()),
            )
        })
    }
}

/// Result of loading catalog data
#[derive(Debug)]
pub struct CatalogLoadResult {
    pub planets: Vec<PlanetRecord>,
    pub num_planets: usize,
    pub num_hosts: usize,
}

impl CatalogLoadResult {
    pub fn new(planets: Vec<PlanetRecord>) -> Self {
        let num_planets = planets.len();
        let num_hosts = planets
            .iter()
            .map(|p| p.host_name.as_str())
            .collect::<BTreeSet<_>>()
            .len();
        Self {
            planets,
            num_planets,
            num_hosts,
        }
    }

    /// Hand the rows to a render pass as an in-memory source.
    pub fn into_catalog(self) -> InMemoryCatalog {
        InMemoryCatalog::new(self.planets)
    }
}

/// Unified interface for loading catalog data
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load catalog data from a file (format chosen by extension)
    pub fn load_from_file(path: &Path) -> Result<CatalogLoadResult> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("File has no extension")?;

        match extension.to_lowercase().as_str() {
            "json" => Self::load_from_json(path),
            _ => anyhow::bail!("Unsupported file format: {}", extension),
        }
    }

    /// Load catalog data from a JSON file
    pub fn load_from_json(json_path: &Path) -> Result<CatalogLoadResult> {
        let planets =
            json_parser::parse_catalog_json(json_path).context("Failed to parse JSON file")?;

        let result = CatalogLoadResult::new(planets);
        log::info!(
            "Loaded {} planets around {} hosts from {}",
            result.num_planets,
            result.num_hosts,
            json_path.display()
        );
        Ok(result)
    }

    /// Load catalog data from a JSON string
    pub fn load_from_json_str(json_str: &str) -> Result<CatalogLoadResult> {
        let planets =
            json_parser::parse_catalog_json_str(json_str).context("Failed to parse JSON string")?;

        Ok(CatalogLoadResult::new(planets))
    }
}
