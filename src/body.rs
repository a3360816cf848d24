//! Orbiting bodies: identity, derived geometry, visibility, selection and spin.
//!
//! A body is a plain value owned by the catalog. It holds an optional handle
//! to the scene node that renders it, but never depends on the renderer.

use bevy::math::DVec3;
use bevy::prelude::Entity;
use std::fmt;

use crate::category::Category;
use crate::elements::OrbitalElements;
use crate::mechanics::DerivedOrbit;
use crate::spin::{RotationDescriptor, SpinState};

/// Duration of a full fade between hidden and shown, in seconds.
pub const FADE_SECONDS: f32 = 1.0;

/// Label position relative to the marker, in orbit-frame units.
pub const LABEL_OFFSET: DVec3 = DVec3::new(0.0, 0.05, 0.0);

pub const LABEL_OPACITY: f32 = 0.7;
pub const CONNECTOR_OPACITY: f32 = 0.5;
pub const RING_OPACITY: f32 = 0.7;

/// Stable handle for a body inside its catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyKey(pub u32);

impl fmt::Display for BodyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display state of a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayState {
    Hidden,
    Visible,
    Selected,
}

/// Text shown next to a selected body.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailPayload {
    pub name: String,
    pub catalog_id: String,
    pub inclination_deg: f64,
    pub right_ascension_deg: f64,
    pub height_km: f64,
    pub orbit_radius: f64,
    pub rotations_per_day: f64,
}

impl fmt::Display for DetailPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Id: {}", self.catalog_id)?;
        writeln!(f, "Inclination: {} degrees", self.inclination_deg)?;
        writeln!(f, "Right Ascension: {} degrees", self.right_ascension_deg)?;
        writeln!(f, "Daily Rotations: {}", self.rotations_per_day)?;
        writeln!(f, "Height: {:.1} km", self.height_km)?;
        write!(f, "Radius: {:.4}", self.orbit_radius)
    }
}

/// Detail annotations materialized on selection.
///
/// All positions are in the body's orbit frame, so they follow the body as
/// the frame spins and tilts.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotations {
    pub label: DetailPayload,
    pub label_position: DVec3,
    pub label_opacity: f32,
    /// Connector from the marker to the label.
    pub connector: (DVec3, DVec3),
    pub connector_opacity: f32,
    /// Highlight ring around the Earth in the orbit plane.
    pub ring_radius: f64,
    pub ring_opacity: f32,
}

/// A tracked object in the scene.
#[derive(Clone, Debug)]
pub struct OrbitingBody {
    key: BodyKey,
    category: Category,
    elements: OrbitalElements,
    derived: DerivedOrbit,
    state: DisplayState,
    opacity: f32,
    spin: SpinState,
    annotations: Option<Annotations>,
    node: Option<Entity>,
}

impl OrbitingBody {
    /// Create a visible body spinning at `speed_factor`.
    pub fn new(
        key: BodyKey,
        category: Category,
        elements: OrbitalElements,
        speed_factor: f64,
    ) -> Self {
        let derived = DerivedOrbit::from_elements(&elements);
        let spin = SpinState::new(elements.rotations_per_day, speed_factor);
        Self {
            key,
            category,
            elements,
            derived,
            state: DisplayState::Visible,
            opacity: 1.0,
            spin,
            annotations: None,
            node: None,
        }
    }

    pub fn key(&self) -> BodyKey {
        self.key
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.elements.name
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    pub fn derived(&self) -> &DerivedOrbit {
        &self.derived
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn is_shown(&self) -> bool {
        self.state != DisplayState::Hidden
    }

    pub fn is_selected(&self) -> bool {
        self.state == DisplayState::Selected
    }

    /// Current opacity, moving towards [`Self::target_opacity`] while fading.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn target_opacity(&self) -> f32 {
        if self.is_shown() { 1.0 } else { 0.0 }
    }

    pub fn is_fading(&self) -> bool {
        self.opacity != self.target_opacity()
    }

    /// Marker position inside the orbit frame.
    pub fn local_position(&self) -> DVec3 {
        self.derived.local_position()
    }

    pub fn rotation(&self) -> &RotationDescriptor {
        self.spin.descriptor()
    }

    pub fn annotations(&self) -> Option<&Annotations> {
        self.annotations.as_ref()
    }

    pub fn node(&self) -> Option<Entity> {
        self.node
    }

    /// Attach the scene node rendering this body.
    pub fn attach_node(&mut self, node: Entity) {
        self.node = Some(node);
    }

    pub fn detail(&self) -> DetailPayload {
        DetailPayload {
            name: self.elements.name.clone(),
            catalog_id: self.elements.catalog_id.clone(),
            inclination_deg: self.elements.inclination_deg,
            right_ascension_deg: self.elements.right_ascension_deg,
            height_km: self.derived.height_km,
            orbit_radius: self.derived.orbit_radius,
            rotations_per_day: self.elements.rotations_per_day,
        }
    }

    /// Start fading in. Supersedes a fade-out in progress.
    pub fn show(&mut self) {
        if self.state == DisplayState::Hidden {
            self.state = DisplayState::Visible;
        }
    }

    /// Start fading out. Supersedes a fade-in in progress and drops any
    /// selection annotations.
    pub fn hide(&mut self) {
        self.annotations = None;
        self.state = DisplayState::Hidden;
    }

    /// Show a hidden body, hide a shown one.
    ///
    /// Decides from the visibility target, not the current opacity. A body
    /// still fading out counts as hidden, so toggling it fades it back in
    /// rather than letting the fade-out run on.
    pub fn toggle_visibility(&mut self) {
        if self.is_shown() {
            self.hide();
        } else {
            self.show();
        }
    }

    /// Select a shown body and materialize its annotations.
    ///
    /// Selecting an already selected body leaves its annotations untouched.
    /// Returns `false` if the body is hidden.
    pub fn select(&mut self) -> bool {
        match self.state {
            DisplayState::Hidden => false,
            DisplayState::Selected => true,
            DisplayState::Visible => {
                self.annotations = Some(self.build_annotations());
                self.state = DisplayState::Selected;
                true
            }
        }
    }

    /// Remove annotations and return to plain visible.
    pub fn deselect(&mut self) {
        if self.state == DisplayState::Selected {
            self.annotations = None;
            self.state = DisplayState::Visible;
        }
    }

    /// Replace the rotation descriptor for a new global speed factor.
    pub fn set_speed_factor(&mut self, speed_factor: f64) {
        self.spin.set_speed_factor(speed_factor);
    }

    /// Advance the opacity fade by `dt` seconds. Returns true if it moved.
    pub fn advance_fade(&mut self, dt: f32, fade_seconds: f32) -> bool {
        let target = self.target_opacity();
        if self.opacity == target {
            return false;
        }
        let step = if fade_seconds > 0.0 { dt / fade_seconds } else { 1.0 };
        self.opacity = if target > self.opacity {
            (self.opacity + step).min(target)
        } else {
            (self.opacity - step).max(target)
        };
        true
    }

    fn build_annotations(&self) -> Annotations {
        let marker = self.local_position();
        let label_position = marker + LABEL_OFFSET;
        Annotations {
            label: self.detail(),
            label_position,
            label_opacity: LABEL_OPACITY,
            connector: (marker, label_position),
            connector_opacity: CONNECTOR_OPACITY,
            ring_radius: self.derived.orbit_radius,
            ring_opacity: RING_OPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;
    use approx::assert_abs_diff_eq;

    fn body() -> OrbitingBody {
        OrbitingBody::new(
            BodyKey(0),
            Category::SpaceStation,
            fixtures::elements("ISS (ZARYA)", 15.5, 51.64, 247.46),
            100.0,
        )
    }

    #[test]
    fn test_new_body_is_visible_and_opaque() {
        let b = body();
        assert_eq!(b.state(), DisplayState::Visible);
        assert_eq!(b.opacity(), 1.0);
        assert!(!b.is_fading());
        assert!(b.annotations().is_none());
        assert!(b.node().is_none());
    }

    #[test]
    fn test_hide_then_fade_out() {
        let mut b = body();
        b.hide();
        assert_eq!(b.state(), DisplayState::Hidden);
        assert!(b.is_fading());

        assert!(b.advance_fade(0.25, FADE_SECONDS));
        assert_abs_diff_eq!(b.opacity(), 0.75, epsilon = 1e-6);

        // Fades are bounded: overshooting clamps at the target
        b.advance_fade(5.0, FADE_SECONDS);
        assert_eq!(b.opacity(), 0.0);
        assert!(!b.advance_fade(0.1, FADE_SECONDS));
    }

    #[test]
    fn test_hide_supersedes_fade_in() {
        let mut b = body();
        b.hide();
        b.advance_fade(1.0, FADE_SECONDS);
        b.show();
        b.advance_fade(0.4, FADE_SECONDS);
        assert_abs_diff_eq!(b.opacity(), 0.4, epsilon = 1e-6);

        // Fade-out continues from the current opacity, not from 1
        b.hide();
        b.advance_fade(0.3, FADE_SECONDS);
        assert_abs_diff_eq!(b.opacity(), 0.1, epsilon = 1e-6);
        assert_eq!(b.target_opacity(), 0.0);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut b = body();
        b.toggle_visibility();
        assert!(!b.is_shown());
        b.toggle_visibility();
        assert!(b.is_shown());
        assert_eq!(b.target_opacity(), 1.0);
    }

    #[test]
    fn test_toggle_mid_fade_out_fades_back_in() {
        let mut b = body();
        b.toggle_visibility();
        b.advance_fade(0.4, FADE_SECONDS);
        assert_abs_diff_eq!(b.opacity(), 0.6, epsilon = 1e-6);

        // Still partly visible, but the target already says hidden
        b.toggle_visibility();
        assert!(b.is_shown());
        b.advance_fade(0.2, FADE_SECONDS);
        assert_abs_diff_eq!(b.opacity(), 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_select_materializes_annotations() {
        let mut b = body();
        assert!(b.select());
        assert_eq!(b.state(), DisplayState::Selected);

        let a = b.annotations().unwrap();
        assert_eq!(a.ring_radius, b.derived().orbit_radius);
        assert_eq!(a.connector.0, b.local_position());
        assert_eq!(a.connector.1, b.local_position() + LABEL_OFFSET);
        assert_eq!(a.label.catalog_id, "2000-001A");
        assert_eq!(a.label_opacity, LABEL_OPACITY);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut once = body();
        once.select();

        let mut twice = body();
        twice.select();
        twice.select();

        assert_eq!(once.state(), twice.state());
        assert_eq!(once.annotations(), twice.annotations());
    }

    #[test]
    fn test_select_hidden_body_rejected() {
        let mut b = body();
        b.hide();
        assert!(!b.select());
        assert_eq!(b.state(), DisplayState::Hidden);
        assert!(b.annotations().is_none());
    }

    #[test]
    fn test_deselect_and_hide_drop_annotations() {
        let mut b = body();
        b.select();
        b.deselect();
        assert_eq!(b.state(), DisplayState::Visible);
        assert!(b.annotations().is_none());

        b.select();
        b.hide();
        assert_eq!(b.state(), DisplayState::Hidden);
        assert!(b.annotations().is_none());
    }

    #[test]
    fn test_speed_factor_valid_in_any_state() {
        let mut b = body();
        b.select();
        b.set_speed_factor(500.0);
        b.hide();
        b.set_speed_factor(1000.0);

        let expected = crate::mechanics::rotation_period_seconds(15.5, 1000.0);
        assert_eq!(b.rotation().period_seconds, expected);
        assert_eq!(b.rotation().epoch, 2);
    }

    #[test]
    fn test_detail_text() {
        let text = body().detail().to_string();
        assert!(text.starts_with("Id: 2000-001A\n"));
        assert!(text.contains("Inclination: 51.64 degrees"));
        assert!(text.contains("Right Ascension: 247.46 degrees"));
        assert!(text.contains("Daily Rotations: 15.5"));
        assert!(text.contains(" km"));
        assert!(text.contains("Radius: "));
    }
}
