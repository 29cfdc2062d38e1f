use pyo3::prelude::*;
use std::path::PathBuf;

use super::{to_json, to_py_err};
use crate::config::DashboardConfig;
use crate::io::loaders::CatalogLoader;

/// Load a planet catalog file and return its rows as a JSON array
///
/// Args:
///     file_path: Path to the catalog export (.json)
///
/// Returns:
///     str: JSON array of planet rows using the catalog column names
///
/// Example:
///     >>> import exo_rust, pandas as pd
///     >>> df = pd.read_json(exo_rust.load_catalog("data/planets.json"))
#[pyfunction]
pub fn load_catalog(file_path: &str) -> PyResult<String> {
    let path = PathBuf::from(file_path);

    let result = CatalogLoader::load_from_file(&path).map_err(|e| {
        pyo3::exceptions::PyRuntimeError::new_err(format!("Failed to load catalog: {:#}", e))
    })?;

    to_json(&result.planets)
}

/// Load dashboard settings and return them as JSON
///
/// Args:
///     config_path: Path to a TOML file; when omitted the standard locations
///         are searched and built-in defaults used if nothing is found
#[pyfunction]
#[pyo3(signature = (config_path=None))]
pub fn load_config(config_path: Option<&str>) -> PyResult<String> {
    let config = match config_path {
        Some(path) => DashboardConfig::from_file(path).map_err(to_py_err)?,
        None => DashboardConfig::from_default_location_or_default(),
    };
    to_json(&config)
}

/// Register loader functions with the Python module.
pub fn register_loader_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(load_catalog, m)?)?;
    m.add_function(wrap_pyfunction!(load_config, m)?)?;
    Ok(())
}
