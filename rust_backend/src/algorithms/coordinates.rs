//! Sky position to heliocentric Cartesian coordinates.
//!
//! Uses the equatorial (ICRS-aligned) axis convention with the Sun at the
//! origin:
//!
//! ```text
//! x = d · cos(dec) · cos(ra)
//! y = d · cos(dec) · sin(ra)
//! z = d · sin(dec)
//! ```

use qtty::{Degrees, Parsecs};

use crate::core::domain::CartesianPosition;

/// Converts a sky position and distance into Cartesian parsecs.
///
/// # Examples
///
/// ```
/// use exo_rust::algorithms::coordinates::spherical_to_cartesian;
/// use qtty::{Degrees, Parsecs};
///
/// let p = spherical_to_cartesian(Degrees::new(0.0), Degrees::new(0.0), Parsecs::new(10.0));
/// assert!((p.x - 10.0).abs() < 1e-12);
/// ```
pub fn spherical_to_cartesian(ra: Degrees, dec: Degrees, distance: Parsecs) -> CartesianPosition {
    let d = distance.value();
    let cos_dec = dec.cos();
    CartesianPosition {
        x: d * cos_dec * ra.cos(),
        y: d * cos_dec * ra.sin(),
        z: d * dec.sin(),
    }
}

/// Returns `true` when the triple can be placed on the starmap.
///
/// All three values must be finite and the distance non-negative. RA and Dec
/// are not range-checked; out-of-range angles still map onto the sphere.
pub fn is_valid_position(ra_deg: f64, dec_deg: f64, distance_pc: f64) -> bool {
    ra_deg.is_finite() && dec_deg.is_finite() && distance_pc.is_finite() && distance_pc >= 0.0
}

/// Checked conversion from raw catalog values.
///
/// Returns `None` when any input is missing or fails [`is_valid_position`];
/// such hosts are left off the starmap rather than placed at the origin.
pub fn to_cartesian(
    ra_deg: Option<f64>,
    dec_deg: Option<f64>,
    distance_pc: Option<f64>,
) -> Option<CartesianPosition> {
    let (ra, dec, dist) = (ra_deg?, dec_deg?, distance_pc?);
    if !is_valid_position(ra, dec, dist) {
        return None;
    }
    Some(spherical_to_cartesian(
        Degrees::new(ra),
        Degrees::new(dec),
        Parsecs::new(dist),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_vernal_equinox_direction() {
        let p = to_cartesian(Some(0.0), Some(0.0), Some(10.0)).unwrap();
        assert!(approx_eq(p.x, 10.0));
        assert!(approx_eq(p.y, 0.0));
        assert!(approx_eq(p.z, 0.0));
    }

    #[test]
    fn test_ra_ninety_degrees() {
        let p = to_cartesian(Some(90.0), Some(0.0), Some(10.0)).unwrap();
        assert!(approx_eq(p.x, 0.0));
        assert!(approx_eq(p.y, 10.0));
        assert!(approx_eq(p.z, 0.0));
    }

    #[test]
    fn test_celestial_poles() {
        let north = to_cartesian(Some(123.0), Some(90.0), Some(5.0)).unwrap();
        assert!(approx_eq(north.x, 0.0));
        assert!(approx_eq(north.y, 0.0));
        assert!(approx_eq(north.z, 5.0));

        let south = to_cartesian(Some(0.0), Some(-90.0), Some(5.0)).unwrap();
        assert!(approx_eq(south.z, -5.0));
    }

    #[test]
    fn test_zero_distance_is_origin() {
        let p = to_cartesian(Some(200.0), Some(-30.0), Some(0.0)).unwrap();
        assert_eq!(p.norm(), 0.0);
    }

    #[test]
    fn test_missing_inputs_excluded() {
        assert!(to_cartesian(None, Some(0.0), Some(1.0)).is_none());
        assert!(to_cartesian(Some(0.0), None, Some(1.0)).is_none());
        assert!(to_cartesian(Some(0.0), Some(0.0), None).is_none());
    }

    #[test]
    fn test_invalid_inputs_excluded() {
        assert!(to_cartesian(Some(f64::NAN), Some(0.0), Some(1.0)).is_none());
        assert!(to_cartesian(Some(0.0), Some(f64::INFINITY), Some(1.0)).is_none());
        assert!(to_cartesian(Some(0.0), Some(0.0), Some(-1.0)).is_none());
    }

    proptest! {
        #[test]
        fn prop_norm_equals_distance(
            ra in 0.0f64..360.0,
            dec in -90.0f64..=90.0,
            dist in 0.0f64..10_000.0,
        ) {
            let p = spherical_to_cartesian(Degrees::new(ra), Degrees::new(dec), Parsecs::new(dist));
            let r2 = p.x * p.x + p.y * p.y + p.z * p.z;
            prop_assert!((r2 - dist * dist).abs() <= 1e-9 * (1.0 + dist * dist));
        }

        #[test]
        fn prop_ra_full_turn_is_periodic(
            ra in 0.0f64..360.0,
            dec in -90.0f64..=90.0,
            dist in 0.1f64..1_000.0,
        ) {
            let a = spherical_to_cartesian(Degrees::new(ra), Degrees::new(dec), Parsecs::new(dist));
            let b = spherical_to_cartesian(Degrees::new(ra + 360.0), Degrees::new(dec), Parsecs::new(dist));
            prop_assert!((a.x - b.x).abs() < 1e-6);
            prop_assert!((a.y - b.y).abs() < 1e-6);
            prop_assert!((a.z - b.z).abs() < 1e-6);
        }
    }
}
