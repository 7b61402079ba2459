//! Game Module
//!
//! Game-level systems built on top of the engine: scenario files, thruster
//! effects and the interactive session.

pub mod config;
pub mod effects;
pub mod session;

pub use config::{ConfigError, ScenarioConfig, load_scenario, save_scenario};
pub use effects::{Flame, FlameSystem};
pub use session::OrbitSession;
