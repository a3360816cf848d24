//! Property-based tests for the orbital mechanics helpers using proptest.
//!
//! These tests verify that the layout formulas keep their physical shape
//! across the full range of catalog inputs.

use proptest::prelude::*;

use crate::mechanics::{
    height_km, position_from_radius_and_ra, radius_from_height, rotation_period_seconds,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Faster rotation means a lower orbit.
    ///
    /// Kepler's third law gives a ∝ T^(2/3), so height must strictly decrease
    /// as the daily rotation count increases.
    #[test]
    fn prop_height_decreases_with_rotation_rate(
        rotations in 0.05f64..20.0,
        step in 0.001f64..5.0,
    ) {
        let lower = height_km(rotations);
        let higher_rate = height_km(rotations + step);

        prop_assert!(lower.is_finite() && higher_rate.is_finite());
        prop_assert!(
            higher_rate < lower,
            "height not decreasing: h({})={} vs h({})={}",
            rotations, lower, rotations + step, higher_rate
        );
    }

    /// Rotation period scales inversely with the speed factor.
    #[test]
    fn prop_period_inverse_to_speed_factor(
        rotations in 0.01f64..20.0,
        f1 in 1.0f64..5000.0,
        f2 in 1.0f64..5000.0,
    ) {
        let ratio = rotation_period_seconds(rotations, f1) / rotation_period_seconds(rotations, f2);
        let expected = f2 / f1;

        prop_assert!(
            ((ratio - expected) / expected).abs() < 1e-12,
            "period ratio {} != {}", ratio, expected
        );
    }

    /// The flat projection always lands on the orbit circle.
    #[test]
    fn prop_position_on_orbit_circle(
        radius in 0.1f64..2.0,
        right_ascension in 0.0f64..360.0,
    ) {
        let (x, z) = position_from_radius_and_ra(radius, right_ascension);
        let length = (x * x + z * z).sqrt();

        prop_assert!((length - radius).abs() < 1e-12);
    }

    /// Every bound orbit renders outside the Earth model.
    #[test]
    fn prop_radius_grows_with_height(
        height in 0.0f64..100_000.0,
        extra in 1.0f64..10_000.0,
    ) {
        prop_assert!(radius_from_height(height + extra) > radius_from_height(height));
    }
}
