//! Descriptive blurb for a selected host star.
//!
//! The text is fully determined by the host record and the constants below:
//! identical input always produces a byte-identical string.

use qtty::{Kilometer, LightYear, LightYears, Parsecs};

use crate::core::domain::{HostStarRecord, SpectralClass};

/// Reference cruise speed for the travel-time estimate (Parker Solar Probe peak).
pub const REFERENCE_SPEED_KMH: f64 = 692_000.0;

/// Hours in a 365-day year.
pub const HOURS_PER_YEAR: f64 = 8_760.0;

/// Spectral-type text used when a host has none.
pub const UNKNOWN_SPECTRAL_TYPE: &str = "mysterious";

/// Planet-list text used when a host has no named planets.
pub const NO_PLANETS_TEXT: &str = "none known yet";

pub const HABITABLE_REMARK: &str =
    "At least one of its planets may orbit in the habitable zone, where liquid water could pool on the surface.";

pub const NOT_HABITABLE_REMARK: &str =
    "None of its known planets is flagged as potentially habitable, so don't pack your bags just yet.";

/// Distance in light-years for a distance in parsecs.
pub fn light_years(distance_pc: f64) -> f64 {
    Parsecs::new(distance_pc).to::<LightYear>().value()
}

/// One-way travel time in whole years at [`REFERENCE_SPEED_KMH`].
///
/// Flat-speed approximation: no acceleration phase and no relativity.
pub fn travel_time_years(distance_ly: f64) -> u64 {
    let distance_km = LightYears::new(distance_ly).to::<Kilometer>().value();
    let km_per_year = REFERENCE_SPEED_KMH * HOURS_PER_YEAR;
    (distance_km / km_per_year).floor().max(0.0) as u64
}

/// Narrative phrase for a star's spectral type.
pub fn describe_star(spectral_type: Option<&str>) -> String {
    let label = spectral_type
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_SPECTRAL_TYPE);

    match SpectralClass::from_spectral_type(spectral_type) {
        SpectralClass::M => format!(
            "a red dwarf (type {}), small and cool, the most common kind of star in the galaxy",
            label
        ),
        SpectralClass::K => format!(
            "an orange dwarf (type {}), a little cooler and dimmer than our Sun and famously long-lived",
            label
        ),
        SpectralClass::G => format!(
            "a Sun-like yellow dwarf (type {}), a close cousin of our own star",
            label
        ),
        SpectralClass::F => format!(
            "a hot yellow-white star (type {}), brighter and shorter-lived than our Sun",
            label
        ),
        SpectralClass::Other => format!(
            "{} {} star, an unusual kind of planet host",
            indefinite_article(label),
            label
        ),
    }
}

/// `"an"` before a label that starts with a vowel letter, `"a"` otherwise.
fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('A' | 'E' | 'I' | 'O' | 'U') => "an",
        _ => "a",
    }
}

/// `"1 planet"`, `"3 planets"`, `"0 planets"`.
pub fn pluralize_planets(count: usize) -> String {
    if count == 1 {
        "1 planet".to_string()
    } else {
        format!("{} planets", count)
    }
}

/// Formats an integer with `,` between groups of three digits.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Builds the multi-line blurb shown when a host star is selected.
///
/// # Examples
///
/// ```
/// use exo_rust::algorithms::aggregation::aggregate_by_host;
/// use exo_rust::core::domain::PlanetRecord;
/// use exo_rust::services::blurb::generate_blurb;
///
/// let planets = vec![PlanetRecord::new("Sol Twin", "X")
///     .with_position(0.0, 0.0, 10.0)
///     .with_spectral_type("G2V")];
/// let host = aggregate_by_host(&planets)
///     .into_iter()
///     .next()
///     .and_then(|agg| agg.into_host_record())
///     .unwrap();
///
/// let blurb = generate_blurb(&host);
/// assert!(blurb.contains("Sun-like"));
/// assert!(blurb.contains("1 planet (X)"));
/// ```
pub fn generate_blurb(host: &HostStarRecord) -> String {
    let distance_ly = light_years(host.distance_pc);
    let planet_names = if host.planet_names.trim().is_empty() {
        NO_PLANETS_TEXT
    } else {
        host.planet_names.as_str()
    };
    let habitability = if host.potentially_habitable.unwrap_or(false) {
        HABITABLE_REMARK
    } else {
        NOT_HABITABLE_REMARK
    };

    format!(
        "{name} is {description}.\n\
         It lies about {distance:.1} light-years from the Sun.\n\
         It hosts {count} ({planets}).\n\
         {habitability}\n\
         Cruising at a constant {speed} km/h, as fast as the fastest spacecraft ever built, \
         a one-way trip would take about {years} years (no acceleration, no relativity).",
        name = host.hostname,
        description = describe_star(host.spectral_type.as_deref()),
        distance = distance_ly,
        count = pluralize_planets(host.planet_count),
        planets = planet_names,
        habitability = habitability,
        speed = format_thousands(REFERENCE_SPEED_KMH as u64),
        years = format_thousands(travel_time_years(distance_ly)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::CartesianPosition;

    fn host(spectral: Option<&str>, count: usize, names: &str, habitable: Option<bool>) -> HostStarRecord {
        HostStarRecord {
            hostname: "Test Star".to_string(),
            ra_deg: 0.0,
            dec_deg: 0.0,
            distance_pc: 10.0,
            spectral_type: spectral.map(String::from),
            effective_temp_k: None,
            stellar_mass: None,
            stellar_radius: None,
            position: CartesianPosition::new(10.0, 0.0, 0.0),
            planet_count: count,
            planet_names: names.to_string(),
            discovery_year: None,
            potentially_habitable: habitable,
            blurb: String::new(),
        }
    }

    #[test]
    fn test_light_years() {
        assert!((light_years(1.0) - 3.26156).abs() < 1e-4);
        assert!((light_years(10.0) - 32.6156).abs() < 1e-3);
    }

    #[test]
    fn test_travel_time() {
        // 1 ly = 9.4607e12 km; 692,000 km/h * 8760 h = 6.06192e9 km/yr
        assert_eq!(travel_time_years(1.0), 1560);
        assert_eq!(travel_time_years(0.0), 0);
        assert_eq!(travel_time_years(-5.0), 0);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(50_902), "50,902");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize_planets(0), "0 planets");
        assert_eq!(pluralize_planets(1), "1 planet");
        assert_eq!(pluralize_planets(7), "7 planets");
    }

    #[test]
    fn test_sun_like_host_blurb() {
        let blurb = generate_blurb(&host(Some("G2V"), 1, "X", Some(false)));
        assert!(blurb.starts_with("Test Star is a Sun-like yellow dwarf (type G2V)"));
        assert!(blurb.contains("32.6 light-years"));
        assert!(blurb.contains("1 planet (X)"));
        assert!(blurb.contains(NOT_HABITABLE_REMARK));
        assert!(blurb.contains("692,000 km/h"));
        assert!(blurb.contains("about 50,902 years"));
        assert_eq!(blurb.lines().count(), 5);
    }

    #[test]
    fn test_habitable_flag() {
        let blurb = generate_blurb(&host(Some("M3V"), 2, "b, c", Some(true)));
        assert!(blurb.contains(HABITABLE_REMARK));
        assert!(blurb.contains("2 planets (b, c)"));
        assert!(blurb.contains("red dwarf (type M3V)"));
    }

    #[test]
    fn test_fallback_text() {
        let blurb = generate_blurb(&host(None, 0, "", None));
        assert!(blurb.contains("a mysterious star"));
        assert!(blurb.contains("0 planets (none known yet)"));
        assert!(blurb.contains(NOT_HABITABLE_REMARK));
    }

    #[test]
    fn test_other_bucket_interpolates_type() {
        assert_eq!(
            describe_star(Some("A1V")),
            "an A1V star, an unusual kind of planet host"
        );
        assert!(describe_star(Some("O9")).starts_with("an O9 star"));
        assert!(describe_star(Some("B9 IV")).starts_with("a B9 IV star"));
        assert!(describe_star(Some("K0")).starts_with("an orange dwarf (type K0)"));
        assert!(describe_star(Some("F7 V")).starts_with("a hot yellow-white star (type F7 V)"));
        assert!(describe_star(Some("   ")).starts_with("a mysterious star"));
    }

    #[test]
    fn test_blurb_for_minimal_host_json() {
        let record: HostStarRecord =
            serde_json::from_str(r#"{"hostname": "X", "sy_dist": 10}"#).unwrap();
        let blurb = generate_blurb(&record);
        assert!(blurb.starts_with("X is a mysterious star"));
        assert!(blurb.contains("32.6 light-years"));
        assert!(blurb.contains("0 planets (none known yet)"));
        assert!(blurb.contains(NOT_HABITABLE_REMARK));
    }

    #[test]
    fn test_blurb_is_deterministic() {
        let record = host(Some("K2V"), 3, "a, b, c", Some(true));
        assert_eq!(generate_blurb(&record), generate_blurb(&record));
    }
}
