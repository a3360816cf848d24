//! Orbital mechanics for the scene layout.
//!
//! Every orbit is modeled as circular: its height comes from the orbital
//! frequency via Kepler's third law, and the body is placed on a flat circle
//! at its right ascension. Inclination is not part of the position; it is
//! applied afterwards as a rotation of the orbit's parent frame about +X.

use bevy::math::DVec3;
use std::f64::consts::{PI, TAU};

use crate::elements::OrbitalElements;
use crate::types::{
    DEG_TO_RAD, EARTH_MASS_KG, EARTH_RADIUS_M, EARTH_RENDER_RADIUS, G, HOURS_PER_DAY,
    RENDER_UNITS_PER_KM, SECONDS_PER_DAY, SECONDS_PER_HOUR,
};

/// Orbital height above the Earth's surface in kilometers.
///
/// Solves Kepler's third law for the semi-major axis of a circular orbit:
/// `a = ∛(T² · G · M / 4π²)` with `T = 86400 / rotations_per_day`.
///
/// Only defined for `rotations_per_day > 0`; callers must reject other
/// values before calling (the parser does).
pub fn height_km(rotations_per_day: f64) -> f64 {
    let orbital_period_s = SECONDS_PER_DAY / rotations_per_day;
    let height_m = (orbital_period_s.powi(2) * G * EARTH_MASS_KG / (4.0 * PI.powi(2))).cbrt()
        - EARTH_RADIUS_M;
    height_m / 1000.0
}

/// Render-space orbit radius for a height in kilometers.
///
/// Height 0 lands on the surface of the Earth model.
pub fn radius_from_height(height_km: f64) -> f64 {
    height_km * RENDER_UNITS_PER_KM + EARTH_RENDER_RADIUS
}

/// Flat projection of a body onto its orbit circle, returned as `(x, z)`.
///
/// Right ascension 0 points along +Z and 90 along +X. The Y coordinate is
/// always zero before the inclination tilt.
pub fn position_from_radius_and_ra(radius: f64, right_ascension_deg: f64) -> (f64, f64) {
    let angle = TAU * right_ascension_deg / 360.0;
    (radius * angle.sin(), radius * angle.cos())
}

/// Rotation about +X that tilts the orbit frame to the given inclination.
///
/// 0 is equatorial, 90 polar, above 90 retrograde. The sign is negated to
/// match the render-space rotation convention.
pub fn inclination_to_axis_angle_radians(inclination_deg: f64) -> f64 {
    -(inclination_deg * DEG_TO_RAD)
}

/// Real-time seconds for one rotation period at the given speed factor.
///
/// Both inputs must be positive.
pub fn rotation_period_seconds(rotations_per_day: f64, speed_factor: f64) -> f64 {
    (HOURS_PER_DAY / rotations_per_day) * SECONDS_PER_HOUR / speed_factor
}

/// Geometry derived once from a body's orbital elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedOrbit {
    /// Height above the surface in kilometers.
    pub height_km: f64,
    /// Render-space orbit radius.
    pub orbit_radius: f64,
    /// Flat position on the orbit circle as `(x, z)`.
    pub position_xz: (f64, f64),
    /// Parent-frame rotation about +X in radians.
    pub inclination_axis_angle: f64,
}

impl DerivedOrbit {
    pub fn from_elements(elements: &OrbitalElements) -> Self {
        let height_km = height_km(elements.rotations_per_day);
        let orbit_radius = radius_from_height(height_km);
        Self {
            height_km,
            orbit_radius,
            position_xz: position_from_radius_and_ra(orbit_radius, elements.right_ascension_deg),
            inclination_axis_angle: inclination_to_axis_angle_radians(elements.inclination_deg),
        }
    }

    /// Position inside the (untilted) orbit frame.
    pub fn local_position(&self) -> DVec3 {
        let (x, z) = self.position_xz;
        DVec3::new(x, 0.0, z)
    }
}
