use pyo3::prelude::*;

use super::{from_json, to_json, to_py_err};
use crate::core::domain::{HostStarRecord, PlanetRecord};
use crate::services::orbit::{self, OrbitConfig};
use crate::services::starmap::{self, StarmapConfig, StarmapData};
use crate::services::blurb;

/// Build the starmap for already-filtered planet rows
///
/// Args:
///     records_json: JSON array of planet rows
///     config_json: Optional `[starmap]` settings as JSON
///
/// Returns:
///     str: JSON object with `hosts`, `selectors` and axis ranges
#[pyfunction]
#[pyo3(signature = (records_json, config_json=None))]
pub fn py_build_starmap(records_json: String, config_json: Option<String>) -> PyResult<String> {
    let records: Vec<PlanetRecord> = from_json(&records_json)?;
    let config: StarmapConfig = match config_json {
        Some(json) => from_json(&json)?,
        None => StarmapConfig::default(),
    };
    config.validate().map_err(to_py_err)?;

    to_json(&starmap::build_starmap(&records, &config))
}

/// Blurb for one host record
#[pyfunction]
pub fn py_generate_blurb(host_json: String) -> PyResult<String> {
    let host: HostStarRecord = from_json(&host_json)?;
    Ok(blurb::generate_blurb(&host))
}

/// Blurb of the clicked host, or `None` when it is not on the map
#[pyfunction]
pub fn py_lookup_blurb(starmap_json: String, hostname: &str) -> PyResult<Option<String>> {
    let data: StarmapData = from_json(&starmap_json)?;
    Ok(starmap::lookup_blurb(&data, hostname).map(str::to_string))
}

/// Orbit diagram for the selected planet
///
/// Returns:
///     str: `{"status": "no_planets"}` or `{"status": "diagram", "diagram": {...}}`
#[pyfunction]
#[pyo3(signature = (records_json, planet_name, samples=None))]
pub fn py_orbit_diagram(
    records_json: String,
    planet_name: &str,
    samples: Option<usize>,
) -> PyResult<String> {
    let records: Vec<PlanetRecord> = from_json(&records_json)?;
    let samples = samples.unwrap_or(OrbitConfig::default().samples);

    let outcome = orbit::orbit_diagram(&records, planet_name, samples).map_err(to_py_err)?;
    to_json(&outcome)
}

/// Register starmap, blurb and orbit functions with the Python module.
pub fn register_service_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_build_starmap, m)?)?;
    m.add_function(wrap_pyfunction!(py_generate_blurb, m)?)?;
    m.add_function(wrap_pyfunction!(py_lookup_blurb, m)?)?;
    m.add_function(wrap_pyfunction!(py_orbit_diagram, m)?)?;
    Ok(())
}
