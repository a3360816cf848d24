//! Keyboard shortcuts and click-to-select.
//!
//! Input never touches the catalog directly. It resolves what the user did
//! into catalog messages (`SetSpeedFactor`, `SelectBody`, `ClearSelection`).

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::body::BodyKey;
use crate::camera::MainCamera;
use crate::catalog::{
    CatalogSet, CatalogSettings, ClearSelection, OrbitCatalog, SelectBody, SetSpeedFactor,
};
use crate::render::{BodyMarker, SceneSettings};
use crate::ui::UiState;

/// Markers are easier to hit than they are to see.
pub const PICK_RADIUS_SCALE: f32 = 3.0;

const PRESET_KEYS: [KeyCode; 4] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
];

/// Plugin providing keyboard and mouse handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (keyboard_shortcuts, click_to_select).before(CatalogSet::Apply),
        );
    }
}

/// Distance along the ray to the first intersection with a sphere.
///
/// `direction` must be normalized. Spheres behind the origin are missed.
pub fn ray_sphere_hit(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let along = to_center.dot(direction);
    if along < 0.0 {
        return None;
    }
    let miss_sq = to_center.length_squared() - along * along;
    let radius_sq = radius * radius;
    if miss_sq > radius_sq {
        return None;
    }
    Some(along - (radius_sq - miss_sq).sqrt())
}

fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    settings: Res<CatalogSettings>,
    mut ui_state: ResMut<UiState>,
    mut speed: MessageWriter<SetSpeedFactor>,
    mut clear: MessageWriter<ClearSelection>,
) {
    for (key, factor) in PRESET_KEYS.iter().zip(&settings.speed_presets) {
        if keys.just_pressed(*key) {
            speed.write(SetSpeedFactor(*factor));
        }
    }

    if keys.just_pressed(KeyCode::Escape) {
        clear.write(ClearSelection);
    }

    // H: hide or show the controls
    if keys.just_pressed(KeyCode::KeyH) {
        ui_state.controls_visible = !ui_state.controls_visible;
        info!(
            "Controls {}",
            if ui_state.controls_visible { "shown" } else { "hidden" }
        );
    }
}

/// Select the nearest shown marker under the cursor.
fn click_to_select(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    markers: Query<(&BodyMarker, &GlobalTransform)>,
    catalog: Res<OrbitCatalog>,
    settings: Res<SceneSettings>,
    mut select: MessageWriter<SelectBody>,
    mut contexts: EguiContexts,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    // Don't interact if egui wants the pointer
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_pointer_input()
    {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_pos) else {
        return;
    };

    let mut closest: Option<(BodyKey, f32)> = None;
    for (marker, transform) in &markers {
        if !catalog.get(marker.key).is_some_and(|body| body.is_shown()) {
            continue;
        }
        let (scale, _, center) = transform.to_scale_rotation_translation();
        let radius = settings.marker_radius * scale.max_element() * PICK_RADIUS_SCALE;
        let Some(distance) = ray_sphere_hit(ray.origin, *ray.direction, center, radius) else {
            continue;
        };
        if closest.is_none_or(|(_, d)| distance < d) {
            closest = Some((marker.key, distance));
        }
    }

    if let Some((key, _)) = closest {
        select.write(SelectBody(key));
    }
}
