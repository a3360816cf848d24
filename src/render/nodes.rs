//! Scene node spawning and opacity.
//!
//! Node chain per body:
//!
//! ```text
//! SceneAnchor
//! ├── EarthNode (sphere, spins once per simulated day)
//! └── tilt frame (rotated about X by the inclination)
//!     └── OrbitFrame (spins about local +Y)
//!         └── BodyMarker (sphere at the projected position)
//! ```

use bevy::color::Alpha;
use bevy::prelude::*;

use crate::body::{BodyKey, OrbitingBody};
use crate::catalog::OrbitCatalog;
use crate::render::SceneSettings;
use crate::render::spin::{Spin, SpinSource};

/// Root of the scene. Camera zoom and rotate act on this node.
#[derive(Component)]
pub struct SceneAnchor;

/// The Earth sphere.
#[derive(Component)]
pub struct EarthNode;

/// Spinning frame of one body. This is the node handle stored on the body.
#[derive(Component, Debug)]
pub struct OrbitFrame {
    pub key: BodyKey,
}

/// Visible marker of one body.
#[derive(Component, Debug)]
pub struct BodyMarker {
    pub key: BodyKey,
}

/// Rotation of a body's tilt frame.
pub fn tilt_rotation(body: &OrbitingBody) -> Quat {
    Quat::from_rotation_x(body.derived().inclination_axis_angle as f32)
}

/// Marker translation inside the orbit frame.
pub fn marker_translation(body: &OrbitingBody) -> Vec3 {
    body.local_position().as_vec3()
}

/// Visibility for a marker at `opacity`.
pub fn visibility_for(opacity: f32) -> Visibility {
    if opacity > 0.0 {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

/// Spawn the anchor, the Earth and the light.
pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SceneSettings>,
    mut catalog: ResMut<OrbitCatalog>,
) {
    let anchor = commands
        .spawn((
            Transform::from_translation(settings.anchor),
            Visibility::default(),
            SceneAnchor,
        ))
        .id();

    let earth = commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(settings.earth_radius))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: settings.earth_color,
                perceptual_roughness: 0.8,
                ..default()
            })),
            Transform::default(),
            EarthNode,
            Spin::new(SpinSource::World),
            ChildOf(anchor),
        ))
        .id();
    catalog.world_mut().attach_node(earth);

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_xyz(1.0, 1.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Scene anchor spawned at {}", settings.anchor);
}

/// Spawn a node chain for every body that has none yet.
///
/// Runs every frame so bodies loaded after startup get nodes too.
pub fn spawn_body_nodes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SceneSettings>,
    anchor: Query<Entity, With<SceneAnchor>>,
    mut catalog: ResMut<OrbitCatalog>,
) {
    if catalog.iter().all(|body| body.node().is_some()) {
        return;
    }
    let Ok(anchor) = anchor.single() else {
        return;
    };

    let marker_mesh = meshes.add(Sphere::new(settings.marker_radius));
    let mut spawned = 0;

    for body in catalog.iter_mut().filter(|body| body.node().is_none()) {
        let material = materials.add(StandardMaterial {
            base_color: body.category().color().with_alpha(body.opacity()),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        let tilt = commands
            .spawn((
                Transform::from_rotation(tilt_rotation(body)),
                Visibility::default(),
                ChildOf(anchor),
            ))
            .id();

        let frame = commands
            .spawn((
                Transform::default(),
                Visibility::default(),
                OrbitFrame { key: body.key() },
                Spin::new(SpinSource::Body(body.key())),
                ChildOf(tilt),
            ))
            .id();

        commands.spawn((
            Mesh3d(marker_mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(marker_translation(body)),
            visibility_for(body.opacity()),
            BodyMarker { key: body.key() },
            ChildOf(frame),
        ));

        body.attach_node(frame);
        spawned += 1;
    }

    info!("Spawned {} body nodes", spawned);
}

/// Despawn node chains whose body is gone or owns a different node.
///
/// The tilt frame is the root of a chain, so despawning it takes the orbit
/// frame and the marker with it.
pub fn despawn_orphan_nodes(
    mut commands: Commands,
    catalog: Res<OrbitCatalog>,
    frames: Query<(Entity, &OrbitFrame, &ChildOf)>,
) {
    let mut despawned = 0;
    for (entity, frame, child_of) in &frames {
        if catalog.get(frame.key).and_then(|body| body.node()) == Some(entity) {
            continue;
        }
        commands.entity(child_of.parent()).despawn();
        despawned += 1;
    }

    if despawned > 0 {
        info!("Despawned {} orphaned body nodes", despawned);
    }
}

/// Mirror each body's fade opacity onto its marker.
pub fn sync_opacity(
    catalog: Res<OrbitCatalog>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut markers: Query<(&BodyMarker, &MeshMaterial3d<StandardMaterial>, &mut Visibility)>,
) {
    for (marker, material, mut visibility) in &mut markers {
        let Some(body) = catalog.get(marker.key) else {
            continue;
        };
        let opacity = body.opacity();

        let target = visibility_for(opacity);
        if *visibility != target {
            *visibility = target;
        }

        let Some(current) = materials.get(&material.0) else {
            continue;
        };
        if current.base_color.alpha() == opacity {
            continue;
        }
        if let Some(mut material) = materials.get_mut(&material.0) {
            material.base_color.set_alpha(opacity);
        }
    }
}
