//! UI module providing the egui control bar.

mod controls;
pub mod icons;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use controls::{category_button_label, is_current_preset, speed_label};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiState>()
            .init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                controls::controls_system
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// Global UI state.
#[derive(Resource)]
pub struct UiState {
    /// Whether the control bar is drawn.
    pub controls_visible: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            controls_visible: true,
        }
    }
}
