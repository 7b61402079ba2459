//! World Module
//!
//! The simulated space (celestials plus the ship, stepped under a run mode)
//! and the procedural solar-system generator.

pub mod generator;
pub mod space;

pub use generator::{GeneratorConfig, distribution, generate, generate_system};
pub use space::{DebugSettings, LandingListener, SimulationRunMode, TickReport, World};
