//! Effects Module
//!
//! Cosmetic particles driven by the ship's controls. Nothing here feeds back
//! into the physics.

pub mod flames;

pub use flames::{FLAME_COLOR, FLAME_RADIUS, Flame, FlameSystem};
