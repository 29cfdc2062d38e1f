#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod algorithms;
pub mod config;
pub mod core;
pub mod io;
pub mod parsing;
pub mod services;
pub mod transformations;

#[cfg(feature = "python")]
pub mod python;

pub use crate::config::DashboardConfig;
pub use crate::core::{CatalogError, CatalogResult, HostStarRecord, PlanetRecord};

/// Exoplanet dashboard core - starmap, blurbs and orbit diagrams
#[cfg(feature = "python")]
#[pymodule]
fn exo_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_loader_functions(m)?;
    python::register_transformation_functions(m)?;
    python::register_service_functions(m)?;
    Ok(())
}
