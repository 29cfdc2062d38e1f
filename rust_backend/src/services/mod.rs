//! Service layer for the dashboard views.
//!
//! This module sits between the catalog rows and the Python bindings. Each
//! service recomputes its output from the rows it is given and holds no
//! state between calls.

pub mod blurb;
pub mod orbit;
pub mod starmap;

pub use blurb::generate_blurb;
pub use orbit::{orbit_diagram, OrbitConfig, OrbitDiagram, OrbitOutcome, OrbitalElements};
pub use starmap::{
    build_starmap, find_host, lookup_blurb, render_starmap, FieldSelectors, StarmapConfig,
    StarmapData, HOST_FIELDS,
};
