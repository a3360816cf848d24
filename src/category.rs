//! Object categories and their data files.

use bevy::prelude::*;

/// Kind of tracked object. Drives colour coding and bulk visibility toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Active,
    Weather,
    SpaceStation,
    CosmosDebris,
    Unknown,
}

impl Category {
    /// Categories loaded at startup, in display order.
    pub const STARTUP: [Category; 4] = [
        Category::Active,
        Category::Weather,
        Category::SpaceStation,
        Category::CosmosDebris,
    ];

    /// Map a data-set label to a category. Unrecognised labels are `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "active" => Category::Active,
            "weather" => Category::Weather,
            "space-station" => Category::SpaceStation,
            "cosmos-2251-debris" | "cosmos-debris" => Category::CosmosDebris,
            _ => Category::Unknown,
        }
    }

    /// Machine label, as used on the command line and in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Active => "active",
            Category::Weather => "weather",
            Category::SpaceStation => "space-station",
            Category::CosmosDebris => "cosmos-2251-debris",
            Category::Unknown => "unknown",
        }
    }

    /// Human-readable name for buttons.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Active => "Active",
            Category::Weather => "Weather",
            Category::SpaceStation => "Space Station",
            Category::CosmosDebris => "Cosmos 2251 Debris",
            Category::Unknown => "Unknown",
        }
    }

    /// Element file backing this category, if it has one.
    pub fn file_name(&self) -> Option<&'static str> {
        match self {
            Category::Active => Some("active-satellites.csv"),
            Category::Weather => Some("weather-satellites.csv"),
            Category::SpaceStation => Some("space-stations.csv"),
            Category::CosmosDebris => Some("cosmos-2251-debris.csv"),
            Category::Unknown => None,
        }
    }

    /// Marker colour.
    pub fn color(&self) -> Color {
        match self {
            Category::Active => Color::srgb(0.0, 1.0, 0.0),
            Category::Weather => Color::srgb(1.0, 1.0, 0.0),
            Category::SpaceStation => Color::srgb(0.0, 0.0, 1.0),
            Category::CosmosDebris => Color::srgb(1.0, 0.0, 0.0),
            Category::Unknown => Color::srgb(0.5, 0.5, 0.5),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
