//! Orbit Lander Engine Library
//!
//! The physics and collision core of a 2D orbital-flight game: a rigid ship
//! under Newtonian gravity from circular celestials, swept collision against
//! their surfaces with impulse response, and landing detection.
//!
//! # Modules
//!
//! - [`physics`] - Vector helpers, celestials, movement snapshots, the ship and its simulator
//! - [`world`] - The stepped world (run modes, landing events) and the system generator
//! - [`input`] - Platform-agnostic key bindings and held ship controls
//! - [`render`] - Draw data for an external renderer
//! - [`game`] - Scenario files, thruster flames and the interactive session
//!
//! # Example
//!
//! ```ignore
//! use orbit_lander_engine::physics::{Celestial, PhysicsConfig, Ship, ShipConfig, Vec2};
//! use orbit_lander_engine::world::{SimulationRunMode, World};
//!
//! let planet = Celestial::with_radius(Vec2::ZERO, 800.0)?;
//! let ship = Ship::new(Vec2::new(0.0, -2000.0), &ShipConfig::default());
//! let mut world = World::new(vec![planet], ship, PhysicsConfig::default());
//!
//! world.on_landed(|id, _| println!("landed on {}", id));
//! for _ in 0..600 {
//!     world.advance(SimulationRunMode::Run);
//! }
//! ```

pub mod input;
pub mod physics;
pub mod render;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the most used types at crate level for convenience
pub use input::{InputAction, InputState, KeyBindings, KeyCode, ShipControls};
pub use physics::{Celestial, CelestialId, Movement, PhysicsConfig, Ship, ShipConfig, ShipSimulator, Vec2};
pub use render::{DrawList, Drawable};
pub use world::{SimulationRunMode, TickReport, World};
