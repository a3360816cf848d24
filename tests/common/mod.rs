//! Common test utilities for integration tests.
#![allow(dead_code)]

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use orbit_ar::catalog::{CatalogPlugin, CatalogSettings, OrbitCatalog};
use orbit_ar::category::Category;
use orbit_ar::render::SceneNodesPlugin;
use std::path::PathBuf;
use std::time::Duration;

pub const HEADER: &str = "OBJECT_NAME,OBJECT_ID,EPOCH,MEAN_MOTION,ECCENTRICITY,INCLINATION,RA_OF_ASC_NODE,ARG_OF_PERICENTER,MEAN_ANOMALY";

/// Two stations, in the GP CSV column layout.
pub const STATIONS_CSV: &str = "\
OBJECT_NAME,OBJECT_ID,EPOCH,MEAN_MOTION,ECCENTRICITY,INCLINATION,RA_OF_ASC_NODE,ARG_OF_PERICENTER,MEAN_ANOMALY
ISS (ZARYA),1998-067A,2024-03-01T12:00:00.000000,15.50103472,0.0005703,51.6416,247.4627,130.5360,325.0288
CSS (TIANHE),2021-035A,2024-03-01T12:30:00.000000,15.61612,0.0004,41.4700,108.9100,10.2000,349.9000
";

/// A single body at exactly 16 revolutions per day.
pub const SIXTEEN_REV_CSV: &str = "\
OBJECT_NAME,OBJECT_ID,EPOCH,MEAN_MOTION,ECCENTRICITY,INCLINATION,RA_OF_ASC_NODE
FAST SAT,2020-001A,2024-03-01T00:00:00.000000,16.0,0.0,45.0,0.0
";

/// Directory of the sample element files shipped with the crate.
pub fn asset_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/orbits")
}

/// Settings pointing at a directory that does not exist.
pub fn settings_without_data() -> CatalogSettings {
    CatalogSettings {
        data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("no-such-dir"),
        ..default()
    }
}

/// Headless app running the catalog plugin with a fixed frame time.
pub fn catalog_app(settings: CatalogSettings, frame: Duration) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(frame))
        .insert_resource(settings)
        .add_plugins(CatalogPlugin);
    app
}

/// Headless app whose catalog is pre-populated from `(csv, category)` pairs.
pub fn populated_app(sets: &[(&str, Category)], frame: Duration) -> App {
    let mut catalog = OrbitCatalog::default();
    for (csv, category) in sets {
        catalog.load_str(csv, *category);
    }
    let mut app = catalog_app(settings_without_data(), frame);
    app.insert_resource(catalog);
    app
}

/// `populated_app` plus the scene node systems, backed by in-memory assets.
pub fn scene_app(sets: &[(&str, Category)], frame: Duration) -> App {
    let mut app = populated_app(sets, frame);
    app.add_plugins(AssetPlugin::default())
        .init_asset::<Mesh>()
        .init_asset::<StandardMaterial>()
        .add_plugins(SceneNodesPlugin);
    app
}

pub fn catalog(app: &App) -> &OrbitCatalog {
    app.world().resource::<OrbitCatalog>()
}
