//! Repeating rotation descriptors.
//!
//! The model never runs animations itself. It publishes a descriptor
//! (axis, period, sweep, epoch) and the render layer keeps exactly one
//! running rotation per node, restarting it whenever the epoch changes.

use bevy::math::DVec3;
use std::f64::consts::PI;

use crate::mechanics::rotation_period_seconds;

/// Angle swept by one period of the repeating rotation.
pub const SWEEP_PER_PERIOD: f64 = PI;

/// A repeating rotation about a fixed axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationDescriptor {
    /// Rotation axis in the node's local frame.
    pub axis: DVec3,
    /// Real-time seconds per sweep.
    pub period_seconds: f64,
    /// Radians turned per period.
    pub sweep_radians: f64,
    /// Incremented on every replacement; the render layer restarts on change.
    pub epoch: u64,
}

impl RotationDescriptor {
    /// Angular velocity in radians per real-time second.
    pub fn angular_velocity(&self) -> f64 {
        self.sweep_radians / self.period_seconds
    }
}

/// Owner of a node's current rotation descriptor.
///
/// Each speed change builds a fresh descriptor from the frequency and the
/// new factor alone, so no state from an earlier factor survives.
#[derive(Clone, Debug)]
pub struct SpinState {
    rotations_per_day: f64,
    speed_factor: f64,
    current: RotationDescriptor,
}

impl SpinState {
    pub fn new(rotations_per_day: f64, speed_factor: f64) -> Self {
        Self {
            rotations_per_day,
            speed_factor,
            current: descriptor(rotations_per_day, speed_factor, 0),
        }
    }

    /// Replace the descriptor with one computed for `speed_factor`.
    ///
    /// Always bumps the epoch, even when the factor is unchanged, so a
    /// re-issued speed selection restarts the running rotation.
    pub fn set_speed_factor(&mut self, speed_factor: f64) {
        self.speed_factor = speed_factor;
        self.current = descriptor(
            self.rotations_per_day,
            speed_factor,
            self.current.epoch.wrapping_add(1),
        );
    }

    pub fn descriptor(&self) -> &RotationDescriptor {
        &self.current
    }

    pub fn speed_factor(&self) -> f64 {
        self.speed_factor
    }
}

fn descriptor(rotations_per_day: f64, speed_factor: f64, epoch: u64) -> RotationDescriptor {
    RotationDescriptor {
        axis: DVec3::Y,
        period_seconds: rotation_period_seconds(rotations_per_day, speed_factor),
        sweep_radians: SWEEP_PER_PERIOD,
        epoch,
    }
}
