//! Config Module
//!
//! Scenario files: physics tuning, ship start, celestials and debug switches.

pub mod scenario;

pub use scenario::{
    CelestialConfig, ConfigError, DebugConfig, GeneratedSystem, ScenarioConfig, ShipStart,
    load_scenario, save_scenario,
};
