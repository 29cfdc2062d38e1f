//! Domain models for catalogued exoplanets and their host stars.
//!
//! A [`PlanetRecord`] is one row of the exoplanet catalog. Host-star columns
//! (position, spectral type, stellar parameters) are repeated on every planet
//! row of the same system, as in the NASA Exoplanet Archive tables. A
//! [`HostStarRecord`] is derived from those rows, one per host name, during a
//! starmap render pass.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parsing::coercion::{lenient_bool, lenient_date, lenient_f64, lenient_i32, lenient_string};

/// One catalogued exoplanet.
///
/// Field names serialize to the catalog column names (`hostname`, `pl_name`,
/// `sy_dist`, ...). Every numeric field is optional: values that are missing,
/// `null`, non-numeric or non-finite in the input deserialize to `None`.
///
/// # Examples
///
/// ```
/// use exo_rust::core::domain::PlanetRecord;
///
/// let planet = PlanetRecord::new("Kepler-22", "Kepler-22 b")
///     .with_position(285.67, 47.88, 195.0)
///     .with_discovery_year(2011);
///
/// assert_eq!(planet.host_name, "Kepler-22");
/// assert_eq!(planet.distance_pc, Some(195.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    #[serde(rename = "hostname")]
    pub host_name: String,
    #[serde(rename = "pl_name")]
    pub planet_name: String,

    // Host-star columns
    #[serde(rename = "ra", default, deserialize_with = "lenient_f64")]
    pub ra_deg: Option<f64>,
    #[serde(rename = "dec", default, deserialize_with = "lenient_f64")]
    pub dec_deg: Option<f64>,
    #[serde(rename = "sy_dist", default, deserialize_with = "lenient_f64")]
    pub distance_pc: Option<f64>,
    #[serde(rename = "st_spectype", default, deserialize_with = "lenient_string")]
    pub spectral_type: Option<String>,
    #[serde(rename = "st_teff", default, deserialize_with = "lenient_f64")]
    pub effective_temp_k: Option<f64>,
    #[serde(rename = "st_mass", default, deserialize_with = "lenient_f64")]
    pub stellar_mass: Option<f64>,
    #[serde(rename = "st_rad", default, deserialize_with = "lenient_f64")]
    pub stellar_radius: Option<f64>,
    #[serde(rename = "st_met", default, deserialize_with = "lenient_f64")]
    pub metallicity: Option<f64>,
    #[serde(rename = "st_logg", default, deserialize_with = "lenient_f64")]
    pub surface_gravity: Option<f64>,
    #[serde(rename = "sy_vmag", default, deserialize_with = "lenient_f64")]
    pub v_magnitude: Option<f64>,
    #[serde(rename = "sy_kmag", default, deserialize_with = "lenient_f64")]
    pub k_magnitude: Option<f64>,
    #[serde(rename = "sy_gaiamag", default, deserialize_with = "lenient_f64")]
    pub gaia_magnitude: Option<f64>,

    // Planet columns
    #[serde(rename = "pl_rade", default, deserialize_with = "lenient_f64")]
    pub radius_earth: Option<f64>,
    #[serde(rename = "pl_orbsmax", default, deserialize_with = "lenient_f64")]
    pub semi_major_axis_au: Option<f64>,
    #[serde(rename = "pl_orbper", default, deserialize_with = "lenient_f64")]
    pub orbital_period_days: Option<f64>,
    #[serde(rename = "pl_orbeccen", default, deserialize_with = "lenient_f64")]
    pub eccentricity: Option<f64>,
    #[serde(rename = "pl_orbincl", default, deserialize_with = "lenient_f64")]
    pub inclination_deg: Option<f64>,
    #[serde(rename = "pl_eqt", default, deserialize_with = "lenient_f64")]
    pub equilibrium_temp_k: Option<f64>,

    // Discovery
    #[serde(rename = "disc_year", default, deserialize_with = "lenient_i32")]
    pub discovery_year: Option<i32>,
    #[serde(rename = "disc_pubdate", default, deserialize_with = "lenient_date")]
    pub discovery_pubdate: Option<NaiveDate>,

    /// Supplied by an upstream classifier; never derived here.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub potentially_habitable: Option<bool>,
}

impl PlanetRecord {
    /// Creates a planet row with only its host and planet names set.
    pub fn new(host_name: impl Into<String>, planet_name: impl Into<String>) -> Self {
        Self {
            host_name: host_name.into(),
            planet_name: planet_name.into(),
            ..Default::default()
        }
    }

    /// Sets right ascension, declination (degrees) and distance (parsecs).
    pub fn with_position(mut self, ra_deg: f64, dec_deg: f64, distance_pc: f64) -> Self {
        self.ra_deg = Some(ra_deg);
        self.dec_deg = Some(dec_deg);
        self.distance_pc = Some(distance_pc);
        self
    }

    pub fn with_spectral_type(mut self, spectral_type: impl Into<String>) -> Self {
        self.spectral_type = Some(spectral_type.into());
        self
    }

    pub fn with_discovery_year(mut self, year: i32) -> Self {
        self.discovery_year = Some(year);
        self
    }

    pub fn with_habitability(mut self, potentially_habitable: bool) -> Self {
        self.potentially_habitable = Some(potentially_habitable);
        self
    }
}

/// Heliocentric Cartesian position in parsecs.
///
/// The Sun sits at the origin; x points to RA = 0°, Dec = 0°, y to RA = 90°,
/// Dec = 0° and z to the north celestial pole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartesianPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPosition {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance from the Sun in parsecs.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// One host star, aggregated from every planet row that names it.
///
/// Created fresh on every render pass and never mutated afterwards; the
/// `blurb` is filled in by the starmap service before the record is handed
/// to the chart layer.
///
/// Only `hostname` and `sy_dist` are required when a record is read back
/// from JSON; everything else defaults so a bare host can still get a blurb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostStarRecord {
    pub hostname: String,
    #[serde(rename = "ra", default)]
    pub ra_deg: f64,
    #[serde(rename = "dec", default)]
    pub dec_deg: f64,
    #[serde(rename = "sy_dist")]
    pub distance_pc: f64,
    #[serde(rename = "st_spectype")]
    pub spectral_type: Option<String>,
    #[serde(rename = "st_teff")]
    pub effective_temp_k: Option<f64>,
    #[serde(rename = "st_mass")]
    pub stellar_mass: Option<f64>,
    #[serde(rename = "st_rad")]
    pub stellar_radius: Option<f64>,
    #[serde(flatten)]
    pub position: CartesianPosition,
    #[serde(default)]
    pub planet_count: usize,
    /// Unique planet names, sorted and joined with `", "`.
    #[serde(rename = "pl_names", default)]
    pub planet_names: String,
    #[serde(rename = "disc_year")]
    pub discovery_year: Option<i32>,
    pub potentially_habitable: Option<bool>,
    #[serde(default)]
    pub blurb: String,
}

/// Narrative bucket for a star, keyed on the first letter of its spectral type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralClass {
    M,
    K,
    G,
    F,
    Other,
}

impl SpectralClass {
    /// Classifies a spectral type string such as `"G2V"` or `"M4.5 V"`.
    ///
    /// Leading whitespace is ignored and the match is case-sensitive; a
    /// missing or empty type is [`SpectralClass::Other`].
    ///
    /// ```
    /// use exo_rust::core::domain::SpectralClass;
    ///
    /// assert_eq!(SpectralClass::from_spectral_type(Some("G2V")), SpectralClass::G);
    /// assert_eq!(SpectralClass::from_spectral_type(Some("A0")), SpectralClass::Other);
    /// assert_eq!(SpectralClass::from_spectral_type(None), SpectralClass::Other);
    /// ```
    pub fn from_spectral_type(spectral_type: Option<&str>) -> Self {
        match spectral_type.and_then(|s| s.trim_start().chars().next()) {
            Some('M') => SpectralClass::M,
            Some('K') => SpectralClass::K,
            Some('G') => SpectralClass::G,
            Some('F') => SpectralClass::F,
            _ => SpectralClass::Other,
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            SpectralClass::M => "M",
            SpectralClass::K => "K",
            SpectralClass::G => "G",
            SpectralClass::F => "F",
            SpectralClass::Other => "other",
        };
        write!(f, "{}", s)
    }
}
