//! Python bindings for the exoplanet dashboard core.
//!
//! Built only with the `python` feature. Every function takes and returns
//! JSON strings so the Streamlit side can hand over DataFrame records
//! directly.
//!
//! # Modules
//!
//! - [`loaders`]: Catalog loading and configuration
//! - [`transformations`]: Planet filters and selector options
//! - [`services`]: Starmap, blurb lookup and orbit diagram

pub mod loaders;
pub mod services;
pub mod transformations;

pub use loaders::*;
pub use services::*;
pub use transformations::*;

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::PyErr;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::CatalogError;

pub(crate) fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, PyErr> {
    serde_json::from_str(json)
        .map_err(|e| PyValueError::new_err(format!("Failed to parse JSON: {}", e)))
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String, PyErr> {
    serde_json::to_string(value)
        .map_err(|e| PyRuntimeError::new_err(format!("Failed to serialize result: {}", e)))
}

pub(crate) fn to_py_err(err: CatalogError) -> PyErr {
    match err {
        CatalogError::InvalidFilter { .. }
        | CatalogError::Configuration { .. }
        | CatalogError::Parse { .. } => PyValueError::new_err(err.to_string()),
        _ => PyRuntimeError::new_err(err.to_string()),
    }
}
