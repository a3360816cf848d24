//! Camera and scene manipulation.
//!
//! The camera stays put. Scroll zoom scales the scene anchor and a right
//! drag spins it about the vertical axis, so the whole Earth system moves
//! as one node.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};
use bevy_egui::EguiContexts;

use crate::render::SceneAnchor;

/// Smallest anchor scale.
pub const MIN_SCALE: f32 = 0.2;

/// Largest anchor scale.
pub const MAX_SCALE: f32 = 20.0;

/// Scale change per scroll line.
pub const ZOOM_SPEED: f32 = 0.1;

/// Radians of anchor yaw per pixel dragged.
pub const ROTATE_SPEED: f32 = 0.005;

/// Distance of the camera from the anchor.
pub const CAMERA_DISTANCE: f32 = 0.6;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Current scene manipulation state.
#[derive(Resource, Debug)]
pub struct SceneView {
    pub scale: f32,
    pub yaw: f32,
}

impl Default for SceneView {
    fn default() -> Self {
        Self {
            scale: 1.0,
            yaw: 0.0,
        }
    }
}

impl SceneView {
    /// Apply a scroll of `lines` (positive zooms in).
    pub fn zoom(&mut self, lines: f32) {
        let factor = 1.0 + lines * ZOOM_SPEED;
        if factor > 0.0 {
            self.scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        }
    }

    /// Apply a horizontal drag of `pixels`.
    pub fn rotate(&mut self, pixels: f32) {
        self.yaw = (self.yaw + pixels * ROTATE_SPEED).rem_euclid(std::f32::consts::TAU);
    }
}

/// Plugin providing the camera and scene manipulation.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneView>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (scene_zoom, scene_rotate, apply_scene_view).chain());
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            near: 0.001,
            ..default()
        }),
        Transform::from_xyz(0.0, CAMERA_DISTANCE * 0.4, CAMERA_DISTANCE)
            .looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

fn pointer_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .is_ok_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
}

fn scene_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut view: ResMut<SceneView>,
    mut contexts: EguiContexts,
) {
    if mouse_scroll.delta.y == 0.0 || pointer_over_ui(&mut contexts) {
        return;
    }
    view.zoom(mouse_scroll.delta.y);
}

fn scene_rotate(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut view: ResMut<SceneView>,
) {
    if !mouse_buttons.pressed(MouseButton::Right) || mouse_motion.delta.x == 0.0 {
        return;
    }
    view.rotate(mouse_motion.delta.x);
}

fn apply_scene_view(view: Res<SceneView>, mut anchor: Query<&mut Transform, With<SceneAnchor>>) {
    if !view.is_changed() {
        return;
    }
    let Ok(mut transform) = anchor.single_mut() else {
        return;
    };
    transform.scale = Vec3::splat(view.scale);
    transform.rotation = Quat::from_rotation_y(view.yaw);
}
