//! The Earth at the centre of the scene.

use bevy::prelude::Entity;

use crate::spin::{RotationDescriptor, SpinState};

/// Central reference body. Turns once per simulated day.
#[derive(Clone, Debug)]
pub struct WorldBody {
    spin: SpinState,
    node: Option<Entity>,
}

impl WorldBody {
    /// Rotations per day of the Earth model.
    pub const ROTATIONS_PER_DAY: f64 = 1.0;

    pub fn new(speed_factor: f64) -> Self {
        Self {
            spin: SpinState::new(Self::ROTATIONS_PER_DAY, speed_factor),
            node: None,
        }
    }

    /// Replace the rotation descriptor for a new global speed factor.
    pub fn set_speed_factor(&mut self, speed_factor: f64) {
        self.spin.set_speed_factor(speed_factor);
    }

    pub fn rotation(&self) -> &RotationDescriptor {
        self.spin.descriptor()
    }

    pub fn node(&self) -> Option<Entity> {
        self.node
    }

    pub fn attach_node(&mut self, node: Entity) {
        self.node = Some(node);
    }
}
