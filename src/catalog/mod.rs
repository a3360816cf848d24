//! Catalog of orbiting bodies grouped by category.
//!
//! The catalog owns every body, the Earth, and the single global speed
//! factor. Speed changes are broadcast synchronously, so after any call
//! returns every rotation descriptor matches the current factor.

#[cfg(feature = "embedded-catalog")]
pub mod embedded;
mod systems;

#[cfg(test)]
mod proptest_catalog;

pub use systems::{
    CatalogPlugin, CatalogSet, CatalogSettings, ClearSelection, SelectBody, SetSpeedFactor,
    ToggleCategory,
};

use bevy::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};

use crate::body::{BodyKey, OrbitingBody};
use crate::category::Category;
use crate::elements::{OrbitalElements, ParseError, record_reader};
use crate::types::DEFAULT_SPEED_FACTOR;
use crate::world::WorldBody;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid speed factor {0} (must be positive and finite)")]
    InvalidSpeedFactor(f64),

    #[error("no body with key {0}")]
    UnknownBody(BodyKey),
}

/// A record that failed to parse during a load.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectedRecord {
    /// 1-based line number in the source, header included.
    pub line: usize,
    pub error: ParseError,
}

/// Outcome of loading one data set.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadReport {
    pub category: Category,
    pub loaded: usize,
    pub rejected: Vec<RejectedRecord>,
}

impl LoadReport {
    fn empty(category: Category) -> Self {
        Self {
            category,
            loaded: 0,
            rejected: Vec::new(),
        }
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

/// Resource holding every orbiting body and the Earth.
#[derive(Resource, Debug)]
pub struct OrbitCatalog {
    groups: BTreeMap<Category, Vec<OrbitingBody>>,
    index: HashMap<BodyKey, (Category, usize)>,
    next_key: u32,
    speed_factor: f64,
    world: WorldBody,
}

impl Default for OrbitCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED_FACTOR)
    }
}

impl OrbitCatalog {
    /// Create an empty catalog. Non-positive factors fall back to the default.
    pub fn new(speed_factor: f64) -> Self {
        let speed_factor = if is_valid_speed_factor(speed_factor) {
            speed_factor
        } else {
            warn!(
                "Invalid initial speed factor {}, using {}x",
                speed_factor, DEFAULT_SPEED_FACTOR
            );
            DEFAULT_SPEED_FACTOR
        };
        Self {
            groups: BTreeMap::new(),
            index: HashMap::new(),
            next_key: 0,
            speed_factor,
            world: WorldBody::new(speed_factor),
        }
    }

    /// Parse CSV records and append the valid ones to `category`.
    ///
    /// The first row is a header. Blank rows are skipped. Bad records are
    /// logged and reported; they never abort the batch. Other categories are
    /// left untouched.
    pub fn load_reader<R: io::Read>(&mut self, source: R, category: Category) -> LoadReport {
        let mut reader = record_reader(true, source);
        let mut report = LoadReport::empty(category);

        for result in reader.records() {
            let (line, parsed) = match result {
                Ok(record) => {
                    if record.iter().all(str::is_empty) {
                        continue;
                    }
                    (
                        line_of(record.position()),
                        OrbitalElements::from_record(&record),
                    )
                }
                Err(err) => {
                    let line = line_of(err.position());
                    if err.is_io_error() {
                        warn!("Stopped reading {} records at line {}: {}", category, line, err);
                        break;
                    }
                    (line, Err(ParseError::from(err)))
                }
            };

            match parsed {
                Ok(elements) => {
                    self.insert(category, elements);
                    report.loaded += 1;
                }
                Err(error) => {
                    warn!("Skipping {} record on line {}: {}", category, line, error);
                    report.rejected.push(RejectedRecord { line, error });
                }
            }
        }

        info!(
            "Loaded {} {} objects ({} rejected)",
            report.loaded,
            category,
            report.rejected_count()
        );
        report
    }

    /// Load the contents of a whole element file.
    pub fn load_str(&mut self, contents: &str, category: Category) -> LoadReport {
        self.load_reader(contents.as_bytes(), category)
    }

    /// Read and load an element file.
    pub fn load_file(
        &mut self,
        path: impl AsRef<Path>,
        category: Category,
    ) -> Result<LoadReport, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.load_str(&contents, category))
    }

    /// Load every `(category, file)` source from `dir`.
    ///
    /// An unreadable file leaves its category empty and is logged; the
    /// remaining sources still load.
    pub fn load_sources(&mut self, dir: &Path, sources: &[(Category, String)]) -> Vec<LoadReport> {
        sources
            .iter()
            .map(|(category, file)| {
                self.load_file(dir.join(file), *category)
                    .unwrap_or_else(|err| {
                        warn!("{} objects unavailable: {}", category, err);
                        LoadReport::empty(*category)
                    })
            })
            .collect()
    }

    fn insert(&mut self, category: Category, elements: OrbitalElements) -> BodyKey {
        let key = BodyKey(self.next_key);
        self.next_key += 1;

        let group = self.groups.entry(category).or_default();
        self.index.insert(key, (category, group.len()));
        group.push(OrbitingBody::new(key, category, elements, self.speed_factor));
        key
    }

    /// Flip every body of `category` independently, each by its own state.
    ///
    /// Returns the number of bodies touched.
    pub fn toggle_category(&mut self, category: Category) -> usize {
        let Some(group) = self.groups.get_mut(&category) else {
            return 0;
        };
        for body in group.iter_mut() {
            body.toggle_visibility();
        }
        group.len()
    }

    /// Set the global speed factor and re-issue every rotation descriptor,
    /// including the Earth's.
    pub fn set_global_speed_factor(&mut self, speed_factor: f64) -> Result<(), CatalogError> {
        if !is_valid_speed_factor(speed_factor) {
            return Err(CatalogError::InvalidSpeedFactor(speed_factor));
        }
        self.speed_factor = speed_factor;
        for body in self.groups.values_mut().flatten() {
            body.set_speed_factor(speed_factor);
        }
        self.world.set_speed_factor(speed_factor);
        Ok(())
    }

    pub fn speed_factor(&self) -> f64 {
        self.speed_factor
    }

    /// Number of loaded bodies in `category`.
    pub fn count(&self, category: Category) -> usize {
        self.groups.get(&category).map_or(0, Vec::len)
    }

    /// Number of bodies in `category` currently shown (or fading in).
    pub fn shown_count(&self, category: Category) -> usize {
        self.bodies(category).iter().filter(|b| b.is_shown()).count()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Bodies of one category in load order.
    pub fn bodies(&self, category: Category) -> &[OrbitingBody] {
        self.groups.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories that have at least one body, in display order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.groups.keys().copied()
    }

    /// All bodies, grouped by category.
    pub fn iter(&self) -> impl Iterator<Item = &OrbitingBody> {
        self.groups.values().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut OrbitingBody> {
        self.groups.values_mut().flatten()
    }

    pub fn get(&self, key: BodyKey) -> Option<&OrbitingBody> {
        let (category, i) = self.index.get(&key)?;
        self.groups.get(category)?.get(*i)
    }

    pub fn get_mut(&mut self, key: BodyKey) -> Option<&mut OrbitingBody> {
        let (category, i) = self.index.get(&key)?;
        self.groups.get_mut(category)?.get_mut(*i)
    }

    /// Select a body. Returns `Ok(false)` if it is hidden.
    pub fn select(&mut self, key: BodyKey) -> Result<bool, CatalogError> {
        let body = self.get_mut(key).ok_or(CatalogError::UnknownBody(key))?;
        Ok(body.select())
    }

    pub fn deselect(&mut self, key: BodyKey) -> Result<(), CatalogError> {
        let body = self.get_mut(key).ok_or(CatalogError::UnknownBody(key))?;
        body.deselect();
        Ok(())
    }

    /// Deselect every body. Returns how many were selected.
    pub fn clear_selection(&mut self) -> usize {
        let mut cleared = 0;
        for body in self.iter_mut().filter(|b| b.is_selected()) {
            body.deselect();
            cleared += 1;
        }
        cleared
    }

    pub fn selected(&self) -> impl Iterator<Item = &OrbitingBody> {
        self.iter().filter(|b| b.is_selected())
    }

    /// Advance every running fade. Returns the number of bodies still fading.
    pub fn advance_fades(&mut self, dt: f32, fade_seconds: f32) -> usize {
        let mut fading = 0;
        for body in self.iter_mut() {
            body.advance_fade(dt, fade_seconds);
            if body.is_fading() {
                fading += 1;
            }
        }
        fading
    }

    pub fn world(&self) -> &WorldBody {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut WorldBody {
        &mut self.world
    }

    /// Drop every body. The Earth and the speed factor are kept.
    ///
    /// Node chains of dropped bodies are despawned by the scene on its next
    /// update.
    pub fn clear(&mut self) {
        self.groups.clear();
        self.index.clear();
    }
}

/// 1-based line a record starts on, or 0 when unknown.
fn line_of(position: Option<&csv::Position>) -> usize {
    position.map_or(0, |p| p.line() as usize)
}

fn is_valid_speed_factor(speed_factor: f64) -> bool {
    speed_factor.is_finite() && speed_factor > 0.0
}
