use pyo3::prelude::*;

use super::{from_json, to_json, to_py_err};
use crate::core::domain::PlanetRecord;
use crate::transformations::filtering::{self, PlanetFilter};

/// Filter planet rows by spectral type, radius, distance and temperature
///
/// Args:
///     records_json: JSON array of planet rows
///     spectral_types: Spectral types to keep; empty keeps every type
///     min_radius: Minimum radius in Earth radii
///     max_distance: Maximum distance in parsecs
///     temperature_range: Equilibrium temperature window in kelvin
#[pyfunction]
#[pyo3(signature = (
    records_json,
    spectral_types=Vec::new(),
    min_radius=filtering::default_min_radius(),
    max_distance=filtering::default_max_distance(),
    temperature_range=filtering::default_temperature_range()
))]
pub fn py_filter_planets(
    records_json: String,
    spectral_types: Vec<String>,
    min_radius: f64,
    max_distance: f64,
    temperature_range: (f64, f64),
) -> PyResult<String> {
    let records: Vec<PlanetRecord> = from_json(&records_json)?;
    let filter = PlanetFilter {
        spectral_types,
        min_radius,
        max_distance,
        temperature_range,
    };

    let result = filtering::filter_planets(&records, &filter).map_err(to_py_err)?;
    to_json(&result)
}

/// Unique spectral types in the order they first appear
#[pyfunction]
pub fn py_spectral_type_options(records_json: String) -> PyResult<Vec<String>> {
    let records: Vec<PlanetRecord> = from_json(&records_json)?;
    Ok(filtering::spectral_type_options(&records))
}

/// Register filter functions with the Python module.
pub fn register_transformation_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_filter_planets, m)?)?;
    m.add_function(wrap_pyfunction!(py_spectral_type_options, m)?)?;
    Ok(())
}
