//! Selection annotations: orbit ring, connector line and detail label.
//!
//! Geometry comes from the body's `Annotations`, expressed in its orbit
//! frame, so it is mapped through that frame's global transform each frame.

use bevy::color::Alpha;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use std::f32::consts::TAU;

use crate::body::Annotations;
use crate::camera::MainCamera;
use crate::catalog::OrbitCatalog;
use crate::render::SceneSettings;

/// Points of a closed circle of `radius` in the local XZ plane.
pub fn ring_points(radius: f32, segments: usize) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            Vec3::new(radius * angle.sin(), 0.0, radius * angle.cos())
        })
        .collect()
}

/// Draw the ring and connector of every selected body.
pub fn draw_selection_geometry(
    mut gizmos: Gizmos,
    catalog: Res<OrbitCatalog>,
    settings: Res<SceneSettings>,
    frames: Query<&GlobalTransform>,
) {
    for body in catalog.selected() {
        let (Some(annotations), Some(node)) = (body.annotations(), body.node()) else {
            continue;
        };
        let Ok(frame) = frames.get(node) else {
            continue;
        };
        let alpha = body.opacity();

        let ring = ring_points(annotations.ring_radius as f32, settings.ring_segments)
            .into_iter()
            .map(|p| frame.transform_point(p));
        gizmos.linestrip(
            ring,
            settings
                .ring_color
                .with_alpha(annotations.ring_opacity * alpha),
        );

        let (start, end) = annotations.connector;
        gizmos.line(
            frame.transform_point(start.as_vec3()),
            frame.transform_point(end.as_vec3()),
            settings
                .connector_color
                .with_alpha(annotations.connector_opacity * alpha),
        );
    }
}

/// Draw the detail label of every selected body next to its marker.
pub fn draw_selection_labels(
    mut contexts: EguiContexts,
    catalog: Res<OrbitCatalog>,
    settings: Res<SceneSettings>,
    frames: Query<&GlobalTransform>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) {
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    for body in catalog.selected() {
        let (Some(annotations), Some(node)) = (body.annotations(), body.node()) else {
            continue;
        };
        let Ok(frame) = frames.get(node) else {
            continue;
        };
        let world = frame.transform_point(annotations.label_position.as_vec3());
        let Ok(screen) = camera.world_to_viewport(camera_transform, world) else {
            continue;
        };

        egui::Area::new(egui::Id::new(("detail_label", body.key().0)))
            .fixed_pos(egui::pos2(screen.x, screen.y))
            .order(egui::Order::Background)
            .interactable(false)
            .show(ctx, |ui| {
                label_card(ui, annotations, settings.label_color, body.opacity());
            });
    }
}

fn label_card(ui: &mut egui::Ui, annotations: &Annotations, color: Color, alpha: f32) {
    let opacity = annotations.label_opacity * alpha;
    let text = to_color32(color.with_alpha(opacity));
    let fill = egui::Color32::from_black_alpha((opacity * 200.0) as u8);

    egui::Frame::new()
        .fill(fill)
        .corner_radius(4.0)
        .inner_margin(egui::Margin::same(6))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(&annotations.label.name)
                    .strong()
                    .size(14.0)
                    .color(text),
            );
            for line in annotations.label.to_string().lines() {
                ui.label(egui::RichText::new(line).size(12.0).color(text));
            }
        });
}

fn to_color32(color: Color) -> egui::Color32 {
    let c = color.to_srgba();
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(c.red),
        channel(c.green),
        channel(c.blue),
        channel(c.alpha),
    )
}
