//! Control bar: speed presets and category toggles.
//!
//! Buttons only emit catalog messages. Counts and highlight state are read
//! back from the catalog every frame, never cached here.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::catalog::{CatalogSettings, OrbitCatalog, SetSpeedFactor, ToggleCategory};
use crate::category::Category;
use crate::ui::{UiState, icons};

/// Colors for the control bar.
mod colors {
    use bevy_egui::egui::Color32;

    pub const BAR_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 220);
    pub const SPEED_ACTIVE: Color32 = Color32::from_rgb(85, 221, 136);
    pub const SPEED_INACTIVE: Color32 = Color32::from_rgb(120, 120, 130);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
}

/// Opacity multiplier for a category with nothing shown.
pub const DIMMED_ALPHA: f32 = 0.35;

/// Button text for a category.
pub fn category_button_label(category: Category, count: usize) -> String {
    format!("{} ({})", category.display_name(), count)
}

/// Button text for a speed preset.
pub fn speed_label(factor: f64) -> String {
    format!("{}x", factor)
}

/// Whether `preset` is the factor currently running.
pub fn is_current_preset(current: f64, preset: f64) -> bool {
    (current - preset).abs() < 1e-9
}

/// System that renders the control bar at the bottom.
pub fn controls_system(
    mut contexts: EguiContexts,
    ui_state: Res<UiState>,
    catalog: Res<OrbitCatalog>,
    settings: Res<CatalogSettings>,
    mut speed: MessageWriter<SetSpeedFactor>,
    mut toggle: MessageWriter<ToggleCategory>,
) {
    if !ui_state.controls_visible {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::bottom("controls")
        .frame(
            egui::Frame::new()
                .fill(colors::BAR_BG)
                .inner_margin(egui::Margin::symmetric(20, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;

                render_speed_presets(ui, &catalog, &settings.speed_presets, &mut speed);

                ui.separator();

                for category in Category::STARTUP {
                    render_category_button(ui, &catalog, category, &mut toggle);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(icons::HELP).size(16.0).color(colors::TEXT))
                        .on_hover_text(
                            "1-4: speed  Click: select  Esc: deselect  \
                             Scroll: zoom  Right drag: rotate  H: hide controls",
                        );
                });
            });
        });
}

fn render_speed_presets(
    ui: &mut egui::Ui,
    catalog: &OrbitCatalog,
    presets: &[f64],
    speed: &mut MessageWriter<SetSpeedFactor>,
) {
    ui.label(egui::RichText::new(icons::SPEED).size(18.0).color(colors::TEXT));

    for (i, &preset) in presets.iter().enumerate() {
        let is_active = is_current_preset(catalog.speed_factor(), preset);
        let color = if is_active {
            colors::SPEED_ACTIVE
        } else {
            colors::SPEED_INACTIVE
        };

        let text = egui::RichText::new(speed_label(preset)).size(14.0).color(color);
        let text = if is_active { text.strong() } else { text };

        let tooltip = format!("{} speed (press {})", speed_label(preset), i + 1);
        if ui
            .add(egui::Button::new(text).frame(is_active).min_size(egui::vec2(48.0, 28.0)))
            .on_hover_text(tooltip)
            .clicked()
        {
            speed.write(SetSpeedFactor(preset));
        }
    }
}

fn render_category_button(
    ui: &mut egui::Ui,
    catalog: &OrbitCatalog,
    category: Category,
    toggle: &mut MessageWriter<ToggleCategory>,
) {
    let count = catalog.count(category);
    let any_shown = catalog.shown_count(category) > 0;

    let base = category.color().to_srgba();
    let alpha = if any_shown { 1.0 } else { DIMMED_ALPHA };
    let color = egui::Color32::from_rgba_unmultiplied(
        (base.red * 255.0) as u8,
        (base.green * 255.0) as u8,
        (base.blue * 255.0) as u8,
        (alpha * 255.0) as u8,
    );
    let icon = if any_shown { icons::SHOWN } else { icons::HIDDEN };

    let text = egui::RichText::new(format!("{} {}", icon, category_button_label(category, count)))
        .size(14.0)
        .color(color);

    if ui
        .add(egui::Button::new(text).min_size(egui::vec2(0.0, 28.0)))
        .on_hover_text(format!("Show or hide {} objects", category.display_name()))
        .clicked()
    {
        toggle.write(ToggleCategory(category));
    }
}
