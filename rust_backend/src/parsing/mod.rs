//! Parsers for exoplanet catalog input.
//!
//! # Parsers
//!
//! - [`json_parser`]: Parse JSON catalog exports (bare arrays or `{"planets": [...]}`)
//! - [`coercion`]: Lenient per-cell deserializers shared by the catalog row types
//!
//! # Example
//!
//! ```no_run
//! use exo_rust::parsing::json_parser::parse_catalog_json;
//! use std::path::Path;
//!
//! let planets = parse_catalog_json(Path::new("planets.json"))
//!     .expect("Failed to parse catalog");
//! ```

pub mod coercion;
pub mod json_parser;

#[cfg(test)]
mod json_parser_tests;
