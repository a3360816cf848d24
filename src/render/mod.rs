//! Scene rendering for the catalog.
//!
//! The catalog owns all domain state. This module spawns one node chain per
//! body (tilt frame, orbit frame, marker), hands the orbit frame back to the
//! body as its node handle, and each frame mirrors catalog state onto those
//! nodes: spin descriptors, fade opacity, and selection annotations.

mod annotations;
pub mod nodes;
pub mod spin;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::catalog::CatalogSet;
use crate::types::EARTH_RENDER_RADIUS;

pub use self::nodes::{BodyMarker, EarthNode, OrbitFrame, SceneAnchor};
pub use self::spin::{Spin, SpinSource};

/// Scene layout and appearance.
#[derive(Resource, Clone, Debug)]
pub struct SceneSettings {
    /// Where the scene anchor sits in world space.
    pub anchor: Vec3,
    /// Render-space radius of the Earth sphere.
    pub earth_radius: f32,
    /// Render-space radius of a body marker.
    pub marker_radius: f32,
    /// Segments used to draw a selection ring.
    pub ring_segments: usize,
    pub earth_color: Color,
    pub ring_color: Color,
    pub connector_color: Color,
    pub label_color: Color,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            anchor: Vec3::ZERO,
            earth_radius: EARTH_RENDER_RADIUS as f32,
            marker_radius: 0.004,
            ring_segments: 96,
            earth_color: Color::srgb(0.2, 0.5, 0.8),
            ring_color: Color::srgb(1.0, 1.0, 0.0),
            connector_color: Color::WHITE,
            label_color: Color::WHITE,
        }
    }
}

/// Ordering for scene systems, all after the catalog has applied the
/// frame's user events.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneSet {
    /// Nodes are created for bodies that have none.
    Spawn,
    /// Spin, opacity and annotations are mirrored from the catalog.
    Sync,
}

/// Scene nodes without any drawing: node chains, spins and opacity.
///
/// Needs only the mesh and material asset stores, so it runs headless.
pub struct SceneNodesPlugin;

impl Plugin for SceneNodesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneSettings>()
            .configure_sets(
                Update,
                (SceneSet::Spawn, SceneSet::Sync)
                    .chain()
                    .after(CatalogSet::Apply),
            )
            .add_systems(Startup, nodes::spawn_scene)
            .add_systems(
                Update,
                (nodes::despawn_orphan_nodes, nodes::spawn_body_nodes)
                    .chain()
                    .in_set(SceneSet::Spawn),
            )
            .add_systems(
                Update,
                (spin::sync_spins, spin::apply_spins, nodes::sync_opacity)
                    .chain()
                    .in_set(SceneSet::Sync),
            );
    }
}

/// Plugin aggregating all scene rendering.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(SceneNodesPlugin)
            .add_systems(
                Update,
                annotations::draw_selection_geometry
                    .after(nodes::sync_opacity)
                    .in_set(SceneSet::Sync),
            )
            .add_systems(EguiPrimaryContextPass, annotations::draw_selection_labels);
    }
}
