//! Catalog sources and loaders.
//!
//! A render pass receives its planet rows through the [`CatalogSource`] trait;
//! the dashboard decides where they come from and how long they are cached.
//! [`CatalogLoader`] reads JSON exports with error context.
//!
//! # Example
//!
//! ```no_run
//! use exo_rust::io::loaders::CatalogLoader;
//! use std::path::Path;
//!
//! let result = CatalogLoader::load_from_file(Path::new("planets.json"))
//!     .expect("Failed to load");
//! println!("Loaded {} planets around {} hosts", result.num_planets, result.num_hosts);
//! ```

pub mod loaders;


pub use loaders::{CatalogLoadResult, CatalogLoader, CatalogSource, InMemoryCatalog, JsonFileCatalog};
