//! Dashboard configuration file support.
//!
//! This module reads filter defaults, starmap field selectors and orbit
//! settings from a TOML file. Every key is optional:
//!
//! ```toml
//! [filters]
//! spectral_types = ["G2 V", "K1 V"]
//! min_radius = 0.5
//! max_distance = 200.0
//! temperature_range = [200.0, 400.0]
//!
//! [starmap]
//! color_field = "st_teff"
//! size_field = "planet_count"
//! hover_field = "hostname"
//! label_field = "hostname"
//! show_labels = true
//!
//! [orbit]
//! samples = 360
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::error::{CatalogError, CatalogResult, ErrorContext};
use crate::services::orbit::{OrbitConfig, MIN_SAMPLES};
use crate::services::starmap::StarmapConfig;
use crate::transformations::filtering::PlanetFilter;

/// File name searched by [`DashboardConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "exoplanets.toml";

/// Slider limits exposed by the dashboard.
pub const RADIUS_SLIDER: (f64, f64) = (0.1, 20.0);
pub const DISTANCE_SLIDER: (f64, f64) = (10.0, 1000.0);
pub const TEMPERATURE_SLIDER: (f64, f64) = (100.0, 600.0);

const MAX_ORBIT_SAMPLES: usize = 100_000;

/// Dashboard configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub filters: PlanetFilter,
    #[serde(default)]
    pub starmap: StarmapConfig,
    #[serde(default)]
    pub orbit: OrbitConfig,
}

fn within(value: f64, (low, high): (f64, f64)) -> bool {
    value >= low && value <= high
}

impl DashboardConfig {
    /// Load dashboard configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(DashboardConfig)` if the file parses and passes [`validate`](Self::validate)
    /// * `Err(CatalogError)` if file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref();
        let ctx = || {
            ErrorContext::new("load_config")
                .with_entity("config")
                .with_entity_id(path.display())
        };

        let content = fs::read_to_string(path).map_err(|e| {
            CatalogError::configuration(format!("Failed to read config file: {}", e))
                .with_context(ctx())
        })?;

        let config = Self::from_str(&content).map_err(|e| e.with_context(ctx()))?;
        log::info!("Loaded dashboard configuration from {}", path.display());
        Ok(config)
    }

    /// Load dashboard configuration from the default location.
    ///
    /// Searches for `exoplanets.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> CatalogResult<Self> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("rust_backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in &search_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Err(CatalogError::configuration(format!(
            "No {} found in standard locations",
            CONFIG_FILE_NAME
        )))
    }

    /// Load from the default location, falling back to built-in defaults.
    pub fn from_default_location_or_default() -> Self {
        match Self::from_default_location() {
            Ok(config) => config,
            Err(e) => {
                log::debug!("Using default dashboard configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Check every section against the dashboard's slider limits.
    pub fn validate(&self) -> CatalogResult<()> {
        self.filters.validate()?;

        let f = &self.filters;
        if !within(f.min_radius, RADIUS_SLIDER) {
            return Err(CatalogError::configuration(format!(
                "filters.min_radius {} outside {:?}",
                f.min_radius, RADIUS_SLIDER
            )));
        }
        if !within(f.max_distance, DISTANCE_SLIDER) {
            return Err(CatalogError::configuration(format!(
                "filters.max_distance {} outside {:?}",
                f.max_distance, DISTANCE_SLIDER
            )));
        }
        let (low, high) = f.temperature_range;
        if !within(low, TEMPERATURE_SLIDER) || !within(high, TEMPERATURE_SLIDER) {
            return Err(CatalogError::configuration(format!(
                "filters.temperature_range ({}, {}) outside {:?}",
                low, high, TEMPERATURE_SLIDER
            )));
        }

        self.starmap.validate()?;

        if !(MIN_SAMPLES..=MAX_ORBIT_SAMPLES).contains(&self.orbit.samples) {
            return Err(CatalogError::configuration(format!(
                "orbit.samples must be between {} and {}, got {}",
                MIN_SAMPLES, MAX_ORBIT_SAMPLES, self.orbit.samples
            )));
        }
        Ok(())
    }
}

impl FromStr for DashboardConfig {
    type Err = CatalogError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: DashboardConfig = toml::from_str(content).map_err(|e| {
            CatalogError::configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
