//! Bevy wiring for the catalog: settings, user-event messages and systems.

use bevy::prelude::*;
use std::path::PathBuf;

use super::OrbitCatalog;
use crate::body::{BodyKey, FADE_SECONDS};
use crate::category::Category;
use crate::types::DEFAULT_SPEED_FACTOR;

/// Catalog configuration.
#[derive(Resource, Clone, Debug)]
pub struct CatalogSettings {
    /// Directory holding the element files.
    pub data_dir: PathBuf,
    /// Data sets loaded at startup, as `(category, file name)`.
    pub sources: Vec<(Category, String)>,
    /// Speed factor applied before the user picks one.
    pub initial_speed_factor: f64,
    /// Speed factors offered by the controls.
    pub speed_presets: Vec<f64>,
    /// Seconds for a full fade between hidden and shown.
    pub fade_seconds: f32,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets/orbits"),
            sources: Category::STARTUP
                .iter()
                .filter_map(|c| c.file_name().map(|f| (*c, f.to_string())))
                .collect(),
            initial_speed_factor: DEFAULT_SPEED_FACTOR,
            speed_presets: vec![100.0, 200.0, 500.0, 1000.0],
            fade_seconds: FADE_SECONDS,
        }
    }
}

/// Request a new global speed factor.
#[derive(Message, Clone, Copy, Debug)]
pub struct SetSpeedFactor(pub f64);

/// Flip the visibility of every body in a category.
#[derive(Message, Clone, Copy, Debug)]
pub struct ToggleCategory(pub Category);

/// Select a body (already resolved from a hit test).
#[derive(Message, Clone, Copy, Debug)]
pub struct SelectBody(pub BodyKey);

/// Deselect every body.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ClearSelection;

/// Ordering for catalog systems. Scene sync runs after `Apply`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CatalogSet {
    /// User events applied to the catalog, then fades advanced.
    Apply,
}

/// Plugin providing the catalog resource and its event handling.
///
/// Runs headless: nothing here touches rendering.
pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CatalogSettings>()
            .add_message::<SetSpeedFactor>()
            .add_message::<ToggleCategory>()
            .add_message::<SelectBody>()
            .add_message::<ClearSelection>()
            .add_systems(PreStartup, init_catalog)
            .add_systems(Startup, load_startup_catalog)
            .add_systems(
                Update,
                (
                    apply_speed_changes,
                    apply_category_toggles,
                    apply_selection,
                    advance_fades,
                )
                    .chain()
                    .in_set(CatalogSet::Apply),
            );
    }
}

/// Insert the catalog at the configured speed unless one was provided.
fn init_catalog(
    mut commands: Commands,
    settings: Res<CatalogSettings>,
    existing: Option<Res<OrbitCatalog>>,
) {
    if existing.is_none() {
        commands.insert_resource(OrbitCatalog::new(settings.initial_speed_factor));
    }
}

/// Load the startup data sets.
#[cfg(not(feature = "embedded-catalog"))]
fn load_startup_catalog(mut catalog: ResMut<OrbitCatalog>, settings: Res<CatalogSettings>) {
    let reports = catalog.load_sources(&settings.data_dir, &settings.sources);
    let rejected: usize = reports.iter().map(|r| r.rejected_count()).sum();
    info!(
        "Catalog ready: {} objects from {} data sets ({} records rejected)",
        catalog.len(),
        reports.len(),
        rejected
    );
}

/// Load the startup data sets compiled into the binary.
#[cfg(feature = "embedded-catalog")]
fn load_startup_catalog(mut catalog: ResMut<OrbitCatalog>) {
    let reports = super::embedded::load_all(&mut catalog);
    let rejected: usize = reports.iter().map(|r| r.rejected_count()).sum();
    info!(
        "Catalog ready: {} embedded objects ({} records rejected)",
        catalog.len(),
        rejected
    );
}

/// Apply speed factor requests. Only the last request of a frame matters,
/// but each one is applied in order so the last write wins.
fn apply_speed_changes(
    mut requests: MessageReader<SetSpeedFactor>,
    mut catalog: ResMut<OrbitCatalog>,
) {
    for SetSpeedFactor(factor) in requests.read() {
        match catalog.set_global_speed_factor(*factor) {
            Ok(()) => info!("Speed factor: {}x", factor),
            Err(err) => warn!("Ignoring speed change: {}", err),
        }
    }
}

fn apply_category_toggles(
    mut requests: MessageReader<ToggleCategory>,
    mut catalog: ResMut<OrbitCatalog>,
) {
    for ToggleCategory(category) in requests.read() {
        let toggled = catalog.toggle_category(*category);
        info!("Toggled {} {} objects", toggled, category);
    }
}

fn apply_selection(
    mut selections: MessageReader<SelectBody>,
    mut clears: MessageReader<ClearSelection>,
    mut catalog: ResMut<OrbitCatalog>,
) {
    if clears.read().count() > 0 {
        let cleared = catalog.clear_selection();
        debug!("Cleared {} selections", cleared);
    }

    for SelectBody(key) in selections.read() {
        match catalog.select(*key) {
            Ok(true) => {
                if let Some(body) = catalog.get(*key) {
                    info!("Selected {} ({})", body.name(), body.category());
                }
            }
            Ok(false) => debug!("Ignoring selection of hidden body {}", key),
            Err(err) => warn!("Ignoring selection: {}", err),
        }
    }
}

fn advance_fades(
    time: Res<Time>,
    settings: Res<CatalogSettings>,
    mut catalog: ResMut<OrbitCatalog>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }
    catalog.advance_fades(dt, settings.fade_seconds);
}
