//! Element files compiled into the binary.
//!
//! Enabled by the `embedded-catalog` feature so the application runs with
//! no `assets/orbits` directory next to it.

use super::{LoadReport, OrbitCatalog};
use crate::category::Category;

/// Active satellites.
pub const ACTIVE: &str = include_str!("../../assets/orbits/active-satellites.csv");

/// Weather satellites.
pub const WEATHER: &str = include_str!("../../assets/orbits/weather-satellites.csv");

/// Crewed space stations.
pub const SPACE_STATIONS: &str = include_str!("../../assets/orbits/space-stations.csv");

/// Debris from the 2009 Cosmos 2251 / Iridium 33 collision.
pub const COSMOS_DEBRIS: &str = include_str!("../../assets/orbits/cosmos-2251-debris.csv");

/// Embedded contents for a category, if it has a data set.
pub fn contents(category: Category) -> Option<&'static str> {
    match category {
        Category::Active => Some(ACTIVE),
        Category::Weather => Some(WEATHER),
        Category::SpaceStation => Some(SPACE_STATIONS),
        Category::CosmosDebris => Some(COSMOS_DEBRIS),
        Category::Unknown => None,
    }
}

/// Load every embedded data set.
pub fn load_all(catalog: &mut OrbitCatalog) -> Vec<LoadReport> {
    Category::STARTUP
        .iter()
        .filter_map(|&category| contents(category).map(|data| catalog.load_str(data, category)))
        .collect()
}
