use crate::algorithms::coordinates::is_valid_position;
use crate::core::domain::PlanetRecord;

/// Returns `true` if the row carries a usable RA, Dec and distance.
pub fn has_spatial_fields(planet: &PlanetRecord) -> bool {
    match (planet.ra_deg, planet.dec_deg, planet.distance_pc) {
        (Some(ra), Some(dec), Some(dist)) => is_valid_position(ra, dec, dist),
        _ => false,
    }
}

/// Remove rows with a missing or unusable RA, Dec or distance.
///
/// This is a filtering step, not an error: the returned slice keeps input
/// order and the dropped rows are simply absent from the starmap.
pub fn remove_missing_coordinates(planets: &[PlanetRecord]) -> Vec<&PlanetRecord> {
    let retained: Vec<&PlanetRecord> = planets.iter().filter(|p| has_spatial_fields(p)).collect();

    let excluded = planets.len() - retained.len();
    if excluded > 0 {
        log::debug!(
            "Excluded {} of {} planet rows without a usable position",
            excluded,
            planets.len()
        );
    }

    retained
}
