//! Positional and per-host computations behind the starmap.
//!
//! # Components
//!
//! - [`coordinates`]: RA/Dec/distance to heliocentric Cartesian positions
//! - [`aggregation`]: Grouping planet rows into one aggregate per host star
//!
//! # Example
//!
//! ```
//! use exo_rust::algorithms::to_cartesian;
//!
//! let pos = to_cartesian(Some(90.0), Some(0.0), Some(10.0)).unwrap();
//! assert!((pos.y - 10.0).abs() < 1e-9);
//! ```

pub mod aggregation;
pub mod coordinates;

pub use aggregation::{aggregate_by_host, HostAggregate, PLANET_NAME_SEPARATOR};
pub use coordinates::{is_valid_position, spherical_to_cartesian, to_cartesian};
