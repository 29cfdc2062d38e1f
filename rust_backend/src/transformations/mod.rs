//! Row-level cleaning and filtering of planet catalogs.
//!
//! # Modules
//!
//! - [`cleaning`]: Drop rows that cannot be placed on the starmap
//! - [`filtering`]: Dashboard filter thresholds and spectral-type options
//!
//! # Example
//!
//! ```
//! use exo_rust::transformations::{filter_planets, PlanetFilter};
//!
//! let filtered = filter_planets(&[], &PlanetFilter::default()).unwrap();
//! assert!(filtered.is_empty());
//! ```

pub mod cleaning;
pub mod filtering;

pub use cleaning::{has_spatial_fields, remove_missing_coordinates};
pub use filtering::{filter_planets, spectral_type_options, PlanetFilter};
