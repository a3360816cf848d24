//! Orbit AR - Earth-orbit visualization
//!
//! A desktop application showing satellites, stations and debris around a
//! spinning Earth, with speed, filter and inspection controls.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orbit_ar::camera::CameraPlugin;
use orbit_ar::catalog::CatalogPlugin;
use orbit_ar::input::InputPlugin;
use orbit_ar::render::RenderPlugin;
use orbit_ar::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orbit AR".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        // Catalog first: everything else reads it
        .add_plugins(CatalogPlugin)
        .add_plugins((RenderPlugin, CameraPlugin, InputPlugin, UiPlugin))
        .run();
}
