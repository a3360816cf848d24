//! Orbit AR - Earth-orbit visualization core
//!
//! A library crate exposing the orbital catalog, its mechanics and the Bevy
//! plugins that render it, for testing and integration purposes.

pub mod body;
pub mod camera;
pub mod catalog;
pub mod category;
pub mod elements;
pub mod input;
pub mod mechanics;
pub mod render;
pub mod spin;
pub mod types;
pub mod ui;
pub mod world;

#[cfg(test)]
mod proptest_mechanics;

#[cfg(test)]
pub mod test_utils;
