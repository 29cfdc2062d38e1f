use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::algorithms::coordinates;
use crate::core::domain::{HostStarRecord, PlanetRecord};

/// Separator between names in the combined planet list
pub const PLANET_NAME_SEPARATOR: &str = ", ";

/// Per-host summary before coordinate conversion.
///
/// Host-level columns take the first non-missing value seen in input order.
/// `planet_count` is the number of rows in the group, `discovery_year` the
/// earliest year, and `planet_names` the sorted unique names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostAggregate {
    pub hostname: String,
    pub ra_deg: Option<f64>,
    pub dec_deg: Option<f64>,
    pub distance_pc: Option<f64>,
    pub spectral_type: Option<String>,
    pub effective_temp_k: Option<f64>,
    pub stellar_mass: Option<f64>,
    pub stellar_radius: Option<f64>,
    pub planet_count: usize,
    pub planet_names: String,
    pub discovery_year: Option<i32>,
    pub potentially_habitable: Option<bool>,
}

impl HostAggregate {
    /// Places the host on the starmap.
    ///
    /// Returns `None` if the host's position cannot be converted; the blurb is
    /// left empty for the starmap service to fill.
    pub fn into_host_record(self) -> Option<HostStarRecord> {
        let position = coordinates::to_cartesian(self.ra_deg, self.dec_deg, self.distance_pc)?;
        Some(HostStarRecord {
            hostname: self.hostname,
            ra_deg: self.ra_deg?,
            dec_deg: self.dec_deg?,
            distance_pc: self.distance_pc?,
            spectral_type: self.spectral_type,
            effective_temp_k: self.effective_temp_k,
            stellar_mass: self.stellar_mass,
            stellar_radius: self.stellar_radius,
            position,
            planet_count: self.planet_count,
            planet_names: self.planet_names,
            discovery_year: self.discovery_year,
            potentially_habitable: self.potentially_habitable,
            blurb: String::new(),
        })
    }
}

/// Accumulator for one host group
struct GroupState<'a> {
    first: HostAggregate,
    names: BTreeSet<&'a str>,
}

fn fill<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
    if slot.is_none() {
        slot.clone_from(value);
    }
}

/// Groups planet rows by exact (case-sensitive) host name.
///
/// Output is ordered by host name. An empty input yields an empty vector.
///
/// # Examples
///
/// ```
/// use exo_rust::algorithms::aggregation::aggregate_by_host;
/// use exo_rust::core::domain::PlanetRecord;
///
/// let planets = vec![
///     PlanetRecord::new("HD 1", "HD 1 c").with_discovery_year(2015),
///     PlanetRecord::new("HD 1", "HD 1 b").with_discovery_year(2010),
/// ];
/// let hosts = aggregate_by_host(&planets);
///
/// assert_eq!(hosts.len(), 1);
/// assert_eq!(hosts[0].planet_count, 2);
/// assert_eq!(hosts[0].planet_names, "HD 1 b, HD 1 c");
/// assert_eq!(hosts[0].discovery_year, Some(2010));
/// ```
pub fn aggregate_by_host<'a, I>(planets: I) -> Vec<HostAggregate>
where
    I: IntoIterator<Item = &'a PlanetRecord>,
{
    let mut groups: BTreeMap<&'a str, GroupState<'a>> = BTreeMap::new();

    for planet in planets {
        let state = groups
            .entry(planet.host_name.as_str())
            .or_insert_with(|| GroupState {
                first: HostAggregate {
                    hostname: planet.host_name.clone(),
                    ra_deg: None,
                    dec_deg: None,
                    distance_pc: None,
                    spectral_type: None,
                    effective_temp_k: None,
                    stellar_mass: None,
                    stellar_radius: None,
                    planet_count: 0,
                    planet_names: String::new(),
                    discovery_year: None,
                    potentially_habitable: None,
                },
                names: BTreeSet::new(),
            });

        let agg = &mut state.first;
        fill(&mut agg.ra_deg, &planet.ra_deg);
        fill(&mut agg.dec_deg, &planet.dec_deg);
        fill(&mut agg.distance_pc, &planet.distance_pc);
        fill(&mut agg.spectral_type, &planet.spectral_type);
        fill(&mut agg.effective_temp_k, &planet.effective_temp_k);
        fill(&mut agg.stellar_mass, &planet.stellar_mass);
        fill(&mut agg.stellar_radius, &planet.stellar_radius);
        fill(&mut agg.potentially_habitable, &planet.potentially_habitable);

        agg.planet_count += 1;
        agg.discovery_year = match (agg.discovery_year, planet.discovery_year) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };

        if !planet.planet_name.is_empty() {
            state.names.insert(planet.planet_name.as_str());
        }
    }

    groups
        .into_values()
        .map(|state| {
            let mut agg = state.first;
            agg.planet_names = state
                .names
                .into_iter()
                .collect::<Vec<_>>()
                .join(PLANET_NAME_SEPARATOR);
            agg
        })
        .collect()
}
