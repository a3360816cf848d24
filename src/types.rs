//! Core constants shared by the orbital model and the scene.

/// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.673e-11;

/// Earth mass in kilograms
pub const EARTH_MASS_KG: f64 = 5.972e24;

/// Earth mean radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Earth mean radius in kilometers
pub const EARTH_RADIUS_KM: f64 = EARTH_RADIUS_M / 1000.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Hours per day
pub const HOURS_PER_DAY: f64 = 24.0;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = HOURS_PER_DAY * SECONDS_PER_HOUR;

// Render-space constants.
//
// The scene is laid out in meters of the display: the Earth model is a
// 10 cm sphere and every orbit radius is expressed relative to it.

/// Radius of the Earth model in render units.
pub const EARTH_RENDER_RADIUS: f64 = 0.1;

/// Render units per kilometer of orbital height.
///
/// Chosen so that 6371 km (one Earth radius) spans 0.1 render units.
pub const RENDER_UNITS_PER_KM: f64 = 0.000_015_696_12;

/// Default global speed factor (simulation seconds per real second).
pub const DEFAULT_SPEED_FACTOR: f64 = 100.0;
