//! Core domain models for the exoplanet catalog.
//!
//! This module defines the planet rows read from the catalog, the per-host
//! records produced for the starmap, and the error type shared by every
//! layer of the crate.

pub mod domain;
pub mod error;

pub use domain::{CartesianPosition, HostStarRecord, PlanetRecord, SpectralClass};
pub use error::{CatalogError, CatalogResult, ErrorContext};
