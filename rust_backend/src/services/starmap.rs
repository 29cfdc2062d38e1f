use serde::{Deserialize, Serialize};

use crate::algorithms::aggregation::aggregate_by_host;
use crate::core::domain::{HostStarRecord, PlanetRecord};
use crate::core::error::{CatalogError, CatalogResult, ErrorContext};
use crate::io::loaders::CatalogSource;
use crate::services::blurb::generate_blurb;
use crate::transformations::cleaning::remove_missing_coordinates;
use crate::transformations::filtering::{filter_planets, PlanetFilter};

/// Serialized field names of [`HostStarRecord`] that a chart may select.
pub const HOST_FIELDS: &[&str] = &[
    "hostname",
    "ra",
    "dec",
    "sy_dist",
    "st_spectype",
    "st_teff",
    "st_mass",
    "st_rad",
    "x",
    "y",
    "z",
    "planet_count",
    "pl_names",
    "disc_year",
    "potentially_habitable",
    "blurb",
];

/// Chart settings for the 3D starmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarmapConfig {
    #[serde(default = "default_color_field")]
    pub color_field: String,
    #[serde(default = "default_size_field")]
    pub size_field: String,
    #[serde(default = "default_hover_field")]
    pub hover_field: String,
    #[serde(default = "default_label_field")]
    pub label_field: String,
    #[serde(default = "default_show_labels")]
    pub show_labels: bool,
}

fn default_color_field() -> String {
    "st_teff".to_string()
}

fn default_size_field() -> String {
    "planet_count".to_string()
}

fn default_hover_field() -> String {
    "hostname".to_string()
}

fn default_label_field() -> String {
    "hostname".to_string()
}

fn default_show_labels() -> bool {
    true
}

impl Default for StarmapConfig {
    fn default() -> Self {
        Self {
            color_field: default_color_field(),
            size_field: default_size_field(),
            hover_field: default_hover_field(),
            label_field: default_label_field(),
            show_labels: default_show_labels(),
        }
    }
}

impl StarmapConfig {
    /// Every selector must name a serialized host field.
    pub fn validate(&self) -> CatalogResult<()> {
        for (setting, field) in [
            ("color_field", &self.color_field),
            ("size_field", &self.size_field),
            ("hover_field", &self.hover_field),
            ("label_field", &self.label_field),
        ] {
            if !HOST_FIELDS.contains(&field.as_str()) {
                return Err(CatalogError::configuration(format!(
                    "{} '{}' is not a host star field",
                    setting, field
                ))
                .with_context(
                    ErrorContext::new("validate_starmap_config").with_details(setting),
                ));
            }
        }
        Ok(())
    }

    pub fn selectors(&self) -> FieldSelectors {
        FieldSelectors {
            color: self.color_field.clone(),
            size: self.size_field.clone(),
            hover_name: self.hover_field.clone(),
            text: self.show_labels.then(|| self.label_field.clone()),
        }
    }
}

/// Named fields the chart renderer reads from each host record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSelectors {
    pub color: String,
    pub size: String,
    pub hover_name: String,
    /// Text label field; `None` renders markers without labels.
    pub text: Option<String>,
}

/// Everything the starmap chart needs for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarmapData {
    /// One record per placed host, ordered by host name.
    pub hosts: Vec<HostStarRecord>,
    pub selectors: FieldSelectors,
    pub host_count: usize,
    /// Planet rows behind the placed hosts.
    pub planet_count: usize,
    /// Input rows left off the map for lack of a usable position.
    pub excluded_rows: usize,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub z_range: (f64, f64),
}

impl StarmapData {
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

/// Build starmap data from planet rows.
///
/// Rows without a usable RA, Dec or distance are dropped, the remainder are
/// grouped per host, placed in Cartesian parsecs and given a blurb. Empty
/// input yields an empty map with zero ranges.
pub fn build_starmap(planets: &[PlanetRecord], config: &StarmapConfig) -> StarmapData {
    let placeable = remove_missing_coordinates(planets);
    let excluded_rows = planets.len() - placeable.len();

    let hosts: Vec<HostStarRecord> = aggregate_by_host(placeable)
        .into_iter()
        .filter_map(|agg| agg.into_host_record())
        .map(|mut host| {
            host.blurb = generate_blurb(&host);
            host
        })
        .collect();

    let mut x_range = (f64::MAX, f64::MIN);
    let mut y_range = (f64::MAX, f64::MIN);
    let mut z_range = (f64::MAX, f64::MIN);
    let mut planet_count = 0;

    for host in &hosts {
        let p = host.position;
        x_range = (x_range.0.min(p.x), x_range.1.max(p.x));
        y_range = (y_range.0.min(p.y), y_range.1.max(p.y));
        z_range = (z_range.0.min(p.z), z_range.1.max(p.z));
        planet_count += host.planet_count;
    }

    if hosts.is_empty() {
        x_range = (0.0, 0.0);
        y_range = (0.0, 0.0);
        z_range = (0.0, 0.0);
    }

    log::debug!(
        "Starmap: {} hosts from {} planet rows ({} rows without position)",
        hosts.len(),
        planets.len(),
        excluded_rows
    );

    StarmapData {
        host_count: hosts.len(),
        hosts,
        selectors: config.selectors(),
        planet_count,
        excluded_rows,
        x_range,
        y_range,
        z_range,
    }
}

/// Full dashboard pass: read the catalog, apply the filter, build the map.
pub fn render_starmap(
    source: &dyn CatalogSource,
    filter: &PlanetFilter,
    config: &StarmapConfig,
) -> CatalogResult<StarmapData> {
    config.validate()?;
    let planets = source.planets()?;
    let filtered = filter_planets(&planets, filter)?;
    Ok(build_starmap(&filtered, config))
}

/// Look up a host by the name reported from a clicked point (exact match).
pub fn find_host<'a>(data: &'a StarmapData, hostname: &str) -> Option<&'a HostStarRecord> {
    data.hosts.iter().find(|h| h.hostname == hostname)
}

/// Blurb for the clicked host, if it is on the map.
pub fn lookup_blurb<'a>(data: &'a StarmapData, hostname: &str) -> Option<&'a str> {
    find_host(data, hostname).map(|h| h.blurb.as_str())
}
