//! Applying rotation descriptors to scene nodes.
//!
//! Each spinning node runs exactly one rotation. When the catalog publishes
//! a descriptor with a new epoch, the running rotation is replaced in place:
//! the node keeps its current orientation and continues at the new rate.

use bevy::prelude::*;

use crate::body::BodyKey;
use crate::catalog::OrbitCatalog;
use crate::spin::RotationDescriptor;

/// Where a node's rotation descriptor comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinSource {
    World,
    Body(BodyKey),
}

/// The rotation currently running on a node.
#[derive(Component, Clone, Copy, Debug)]
pub struct Spin {
    pub source: SpinSource,
    epoch: Option<u64>,
    axis: Vec3,
    angular_velocity: f32,
}

impl Spin {
    /// A node that has not started rotating yet.
    pub fn new(source: SpinSource) -> Self {
        Self {
            source,
            epoch: None,
            axis: Vec3::Y,
            angular_velocity: 0.0,
        }
    }

    /// Adopt `descriptor` if its epoch differs from the running one.
    ///
    /// Returns true when the running rotation was replaced.
    pub fn sync(&mut self, descriptor: &RotationDescriptor) -> bool {
        if self.epoch == Some(descriptor.epoch) {
            return false;
        }
        self.epoch = Some(descriptor.epoch);
        self.axis = descriptor.axis.as_vec3().normalize_or(Vec3::Y);
        self.angular_velocity = descriptor.angular_velocity() as f32;
        true
    }

    /// Rotation covered in `dt` seconds.
    pub fn step(&self, dt: f32) -> Quat {
        Quat::from_axis_angle(self.axis, self.angular_velocity * dt)
    }

    pub fn epoch(&self) -> Option<u64> {
        self.epoch
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }
}

/// Restart any node whose descriptor epoch changed.
pub fn sync_spins(catalog: Res<OrbitCatalog>, mut spins: Query<&mut Spin>) {
    for mut spin in &mut spins {
        let descriptor = match spin.source {
            SpinSource::World => Some(catalog.world().rotation()),
            SpinSource::Body(key) => catalog.get(key).map(|body| body.rotation()),
        };
        let Some(descriptor) = descriptor.copied() else {
            continue;
        };
        // Compare before writing so change detection stays quiet.
        if spin.epoch != Some(descriptor.epoch) {
            spin.sync(&descriptor);
        }
    }
}

/// Advance every running rotation by the frame time.
pub fn apply_spins(time: Res<Time>, mut nodes: Query<(&Spin, &mut Transform)>) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }
    for (spin, mut transform) in &mut nodes {
        transform.rotate_local(spin.step(dt));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spin::SpinState;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn test_sync_adopts_first_descriptor() {
        let state = SpinState::new(16.0, 100.0);
        let mut spin = Spin::new(SpinSource::Body(BodyKey(0)));

        assert!(spin.sync(state.descriptor()));
        assert_eq!(spin.epoch(), Some(0));
        assert_relative_eq!(spin.angular_velocity(), PI / 54.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sync_ignores_same_epoch() {
        let state = SpinState::new(16.0, 100.0);
        let mut spin = Spin::new(SpinSource::World);
        spin.sync(state.descriptor());

        assert!(!spin.sync(state.descriptor()));
    }

    #[test]
    fn test_sync_replaces_rate_on_new_epoch() {
        let mut state = SpinState::new(16.0, 100.0);
        let mut spin = Spin::new(SpinSource::World);
        spin.sync(state.descriptor());

        state.set_speed_factor(200.0);
        assert!(spin.sync(state.descriptor()));
        // 27 s per half turn.
        assert_relative_eq!(spin.angular_velocity(), PI / 27.0, epsilon = 1e-6);
    }

    #[test]
    fn test_step_turns_about_y() {
        let state = SpinState::new(16.0, 200.0);
        let mut spin = Spin::new(SpinSource::World);
        spin.sync(state.descriptor());

        let turned = spin.step(27.0) * Vec3::X;
        assert_relative_eq!(turned.x, -1.0, epsilon = 1e-4);
        assert_relative_eq!(turned.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_unsynced_spin_does_not_move() {
        let spin = Spin::new(SpinSource::World);
        assert_eq!(spin.step(10.0), Quat::IDENTITY);
    }
}
