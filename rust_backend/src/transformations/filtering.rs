use serde::{Deserialize, Serialize};

use crate::core::domain::PlanetRecord;
use crate::core::error::{CatalogError, CatalogResult, ErrorContext};

/// Dashboard filter thresholds applied to planet rows before any starmap work.
///
/// A row passes when every condition holds. A missing value never satisfies
/// a numeric comparison, so rows without a radius, distance or equilibrium
/// temperature are filtered out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetFilter {
    /// Exact spectral types to keep; empty keeps every type (including unknown).
    #[serde(default)]
    pub spectral_types: Vec<String>,
    /// Minimum planet radius in Earth radii (inclusive).
    #[serde(default = "default_min_radius")]
    pub min_radius: f64,
    /// Maximum system distance in parsecs (inclusive).
    #[serde(default = "default_max_distance")]
    pub max_distance: f64,
    /// Equilibrium temperature window in kelvin (inclusive on both ends).
    #[serde(default = "default_temperature_range")]
    pub temperature_range: (f64, f64),
}

pub fn default_min_radius() -> f64 {
    0.5
}

pub fn default_max_distance() -> f64 {
    200.0
}

pub fn default_temperature_range() -> (f64, f64) {
    (200.0, 400.0)
}

impl Default for PlanetFilter {
    fn default() -> Self {
        Self {
            spectral_types: Vec::new(),
            min_radius: default_min_radius(),
            max_distance: default_max_distance(),
            temperature_range: default_temperature_range(),
        }
    }
}

impl PlanetFilter {
    /// Check that the thresholds describe a usable filter.
    pub fn validate(&self) -> CatalogResult<()> {
        let (low, high) = self.temperature_range;
        let ctx = || ErrorContext::new("validate_filter").with_entity("filter");

        if !self.min_radius.is_finite() || self.min_radius < 0.0 {
            return Err(CatalogError::invalid_filter(format!(
                "min_radius must be a non-negative number, got {}",
                self.min_radius
            ))
            .with_context(ctx().with_details("min_radius")));
        }
        if !self.max_distance.is_finite() || self.max_distance < 0.0 {
            return Err(CatalogError::invalid_filter(format!(
                "max_distance must be a non-negative number, got {}",
                self.max_distance
            ))
            .with_context(ctx().with_details("max_distance")));
        }
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(CatalogError::invalid_filter(format!(
                "temperature_range must be an ordered pair of numbers, got ({}, {})",
                low, high
            ))
            .with_context(ctx().with_details("temperature_range")));
        }
        Ok(())
    }

    /// Returns `true` if a single row passes every condition.
    pub fn matches(&self, planet: &PlanetRecord) -> bool {
        self.matches_spectral_type(planet)
            && planet.radius_earth.is_some_and(|r| r >= self.min_radius)
            && planet.distance_pc.is_some_and(|d| d <= self.max_distance)
            && planet
                .equilibrium_temp_k
                .is_some_and(|t| t >= self.temperature_range.0 && t <= self.temperature_range.1)
    }

    fn matches_spectral_type(&self, planet: &PlanetRecord) -> bool {
        if self.spectral_types.is_empty() {
            return true;
        }
        planet
            .spectral_type
            .as_ref()
            .map(|s| self.spectral_types.contains(s))
            .unwrap_or(false)
    }
}

/// Filter planet rows by the dashboard thresholds.
pub fn filter_planets(planets: &[PlanetRecord], filter: &PlanetFilter) -> CatalogResult<Vec<PlanetRecord>> {
    filter.validate()?;

    let filtered: Vec<PlanetRecord> = planets
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();

    log::debug!(
        "Filter kept {} of {} planet rows",
        filtered.len(),
        planets.len()
    );
    Ok(filtered)
}

/// Unique spectral types in first-appearance order, for the type selector.
pub fn spectral_type_options(planets: &[PlanetRecord]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for spectral_type in planets.iter().filter_map(|p| p.spectral_type.as_ref()) {
        if !options.contains(spectral_type) {
            options.push(spectral_type.clone());
        }
    }
    options
}
