//! Two-dimensional orbit diagram for a selected planet.
//!
//! The planet's orbit is drawn next to Earth's circular 1 AU reference orbit,
//! both projected onto the reference plane. Longitude of the ascending node and
//! argument of periapsis are not catalogued, so both are taken as zero.

use qtty::Degrees;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::core::domain::PlanetRecord;
use crate::core::error::{CatalogError, CatalogResult, ErrorContext};

/// Semi-major axis used when the catalog has none (AU).
pub const DEFAULT_SEMI_MAJOR_AXIS_AU: f64 = 1.0;
/// Eccentricity used when the catalog has none.
pub const DEFAULT_ECCENTRICITY: f64 = 0.0;
/// Inclination used when the catalog has none (degrees).
pub const DEFAULT_INCLINATION_DEG: f64 = 0.0;
/// Fewest points that still draw a closed curve.
pub const MIN_SAMPLES: usize = 3;

pub const EARTH_LABEL: &str = "Earth (1 AU)";
pub const EARTH_COLOR: &str = "blue";
pub const PLANET_COLOR: &str = "orange";

/// Orbit diagram settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Points per orbit trace.
    #[serde(default = "default_samples")]
    pub samples: usize,
}

fn default_samples() -> usize {
    360
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
        }
    }
}

/// Classical elements needed to draw an orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination: Degrees,
}

impl OrbitalElements {
    /// Earth's reference orbit.
    pub fn earth() -> Self {
        Self {
            semi_major_axis_au: 1.0,
            eccentricity: 0.0,
            inclination: Degrees::new(0.0),
        }
    }

    /// Elements from a catalog row, substituting defaults for missing values.
    pub fn from_planet(planet: &PlanetRecord) -> Self {
        Self {
            semi_major_axis_au: planet
                .semi_major_axis_au
                .unwrap_or(DEFAULT_SEMI_MAJOR_AXIS_AU),
            eccentricity: planet.eccentricity.unwrap_or(DEFAULT_ECCENTRICITY),
            inclination: Degrees::new(planet.inclination_deg.unwrap_or(DEFAULT_INCLINATION_DEG)),
        }
    }

    /// Only bound, elliptical orbits can be drawn.
    pub fn validate(&self) -> CatalogResult<()> {
        let a = self.semi_major_axis_au;
        let e = self.eccentricity;
        if !a.is_finite() || a <= 0.0 {
            return Err(CatalogError::invalid_orbit(format!(
                "semi-major axis must be positive, got {}",
                a
            )));
        }
        if !e.is_finite() || !(0.0..1.0).contains(&e) {
            return Err(CatalogError::invalid_orbit(format!(
                "eccentricity must be in [0, 1), got {}",
                e
            )));
        }
        if !self.inclination.value().is_finite() {
            return Err(CatalogError::invalid_orbit("inclination is not finite"));
        }
        Ok(())
    }

    /// Projected position at true anomaly `nu` (radians), in AU.
    pub fn position_at(&self, nu: f64) -> OrbitPoint {
        let a = self.semi_major_axis_au;
        let e = self.eccentricity;
        let r = a * (1.0 - e * e) / (1.0 + e * nu.cos());
        OrbitPoint {
            x_au: r * nu.cos(),
            y_au: r * nu.sin() * self.inclination.cos(),
        }
    }

    /// `samples` points evenly spaced in true anomaly; the first and last coincide.
    pub fn sample(&self, samples: usize) -> Vec<OrbitPoint> {
        let n = samples.max(MIN_SAMPLES);
        (0..n)
            .map(|k| self.position_at(TAU * k as f64 / (n - 1) as f64))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitPoint {
    pub x_au: f64,
    pub y_au: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitTrace {
    pub label: String,
    pub color: String,
    pub points: Vec<OrbitPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitDiagram {
    pub title: String,
    pub traces: Vec<OrbitTrace>,
}

/// Result of an orbit request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "diagram", rename_all = "snake_case")]
pub enum OrbitOutcome {
    /// The filtered catalog is empty; nothing to select.
    NoPlanets,
    Diagram(OrbitDiagram),
}

/// Build the orbit diagram for `selected_planet` among the filtered rows.
///
/// The first row whose `pl_name` matches exactly is used.
pub fn orbit_diagram(
    planets: &[PlanetRecord],
    selected_planet: &str,
    samples: usize,
) -> CatalogResult<OrbitOutcome> {
    if planets.is_empty() {
        return Ok(OrbitOutcome::NoPlanets);
    }

    let ctx = || {
        ErrorContext::new("orbit_diagram")
            .with_entity("planet")
            .with_entity_id(selected_planet)
    };

    let planet = planets
        .iter()
        .find(|p| p.planet_name == selected_planet)
        .ok_or_else(|| {
            CatalogError::not_found(format!("planet '{}' is not in the catalog", selected_planet))
                .with_context(ctx())
        })?;

    let elements = OrbitalElements::from_planet(planet);
    if let Err(err) = elements.validate() {
        log::warn!("Couldn't plot orbit for {}: {}", selected_planet, err);
        return Err(err.with_context(ctx()));
    }

    Ok(OrbitOutcome::Diagram(OrbitDiagram {
        title: format!("2D Orbit of {} (Earth reference)", selected_planet),
        traces: vec![
            OrbitTrace {
                label: EARTH_LABEL.to_string(),
                color: EARTH_COLOR.to_string(),
                points: OrbitalElements::earth().sample(samples),
            },
            OrbitTrace {
                label: selected_planet.to_string(),
                color: PLANET_COLOR.to_string(),
                points: elements.sample(samples),
            },
        ],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(a: Option<f64>, e: Option<f64>, inc: Option<f64>) -> PlanetRecord {
        let mut p = PlanetRecord::new("Host", "Host b");
        p.semi_major_axis_au = a;
        p.eccentricity = e;
        p.inclination_deg = inc;
        p
    }

    #[test]
    fn test_no_planets() {
        assert_eq!(orbit_diagram(&[], "anything", 10).unwrap(), OrbitOutcome::NoPlanets);
    }

    #[test]
    fn test_unknown_planet() {
        let err = orbit_diagram(&[planet(None, None, None)], "Other b", 10).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
        assert_eq!(err.context().entity_id.as_deref(), Some("Other b"));
    }

    #[test]
    fn test_fallback_elements_match_earth() {
        let outcome = orbit_diagram(&[planet(None, None, None)], "Host b", 36).unwrap();
        let OrbitOutcome::Diagram(diagram) = outcome else {
            panic!("expected a diagram");
        };
        assert_eq!(diagram.title, "2D Orbit of Host b (Earth reference)");
        assert_eq!(diagram.traces.len(), 2);
        assert_eq!(diagram.traces[0].label, EARTH_LABEL);
        assert_eq!(diagram.traces[0].color, "blue");
        assert_eq!(diagram.traces[1].label, "Host b");
        assert_eq!(diagram.traces[1].color, "orange");
        assert_eq!(diagram.traces[1].points.len(), 36);
        assert_eq!(diagram.traces[0].points, diagram.traces[1].points);
    }

    #[test]
    fn test_ellipse_periapsis_and_apoapsis() {
        let elements = OrbitalElements::from_planet(&planet(Some(2.0), Some(0.5), None));
        let peri = elements.position_at(0.0);
        let apo = elements.position_at(std::f64::consts::PI);
        assert!((peri.x_au - 1.0).abs() < 1e-12);
        assert!((apo.x_au + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_inclination_flattens_projection() {
        let edge_on = OrbitalElements::from_planet(&planet(Some(1.0), Some(0.0), Some(90.0)));
        for p in edge_on.sample(20) {
            assert!(p.y_au.abs() < 1e-9);
        }
    }

    #[test]
    fn test_sample_is_closed() {
        let points = OrbitalElements::earth().sample(8);
        let first = points.first().unwrap();
        let last = points.last().unwrap();
        assert!((first.x_au - last.x_au).abs() < 1e-12);
        assert!((first.y_au - last.y_au).abs() < 1e-12);
        assert_eq!(OrbitalElements::earth().sample(0).len(), MIN_SAMPLES);
    }

    #[test]
    fn test_invalid_elements() {
        for bad in [
            planet(Some(-1.0), None, None),
            planet(Some(0.0), None, None),
            planet(None, Some(1.0), None),
            planet(None, Some(-0.1), None),
        ] {
            let err = orbit_diagram(&[bad], "Host b", 10).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidOrbit { .. }));
        }
    }

    #[test]
    fn test_outcome_serialization() {
        let value = serde_json::to_value(OrbitOutcome::NoPlanets).unwrap();
        assert_eq!(value["status"], "no_planets");
    }
}
