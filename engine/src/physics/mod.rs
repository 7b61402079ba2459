//! Physics module for the orbit lander
//!
//! Gravity, collision and impulse response for a single rigid ship flying
//! between circular celestials. Built from scratch without an external
//! physics library.
//!
//! # Unit System
//!
//! The simulation is tick based, not SI: velocities are units per tick,
//! accelerations units per tick². The driver is assumed to tick at 60 Hz and
//! the impulse maths hardcodes that rate.
//!
//! # Submodules
//!
//! - [`types`] - `Vec2` re-export and celestial ids
//! - [`vector_ops`] - dot / cross / rotate / reflect / line intersection
//! - [`celestial`] - gravitating circular bodies
//! - [`movement`] - kinematic snapshots
//! - [`ship`] - ship body, collision points, landing streak
//! - [`contact`] - sweep-back contact geometry and impulses
//! - [`simulator`] - per-tick integrator and collision scan
//! - [`config`] - tunable parameters
//! - [`error`] - error types

pub mod celestial;
pub mod config;
pub mod contact;
pub mod error;
pub mod movement;
pub mod ship;
pub mod simulator;
pub mod types;
pub mod vector_ops;

// Re-export commonly used types at the physics module level
pub use celestial::{Celestial, CelestialKind, DEFAULT_DENSITY, GRAVITATIONAL_CONSTANT};
pub use config::{PhysicsConfig, ShipConfig};
pub use contact::{Contact, ContactGeometry};
pub use error::{DegenerateContact, PhysicsError, VectorError};
pub use movement::Movement;
pub use ship::{RotationInput, Ship};
pub use simulator::{ShipSimulator, TickOutcome};
pub use types::{CelestialId, Vec2};
