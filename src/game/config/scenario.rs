//! Scenario Configuration
//!
//! A scenario is everything needed to set up a flight: physics tuning, the
//! ship and where it starts, a hand-placed list of celestials and optionally
//! a generated solar system on top. Scenarios are stored as pretty JSON.
//! `Default` reproduces the two-planet test scene.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::physics::{
    Celestial, CelestialKind, DEFAULT_DENSITY, Movement, PhysicsConfig, PhysicsError, Ship, ShipConfig,
};
use crate::world::{DebugSettings, GeneratorConfig, World, generate_system};

/// One hand-placed celestial. Exactly one of `radius` and `mass` must be set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CelestialConfig {
    pub position: Vec2,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f32>,
    #[serde(default = "default_density")]
    pub density: f32,
    #[serde(default)]
    pub kind: CelestialKind,
    /// Packed 0x00RRGGBB, engine default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
}

fn default_density() -> f32 {
    DEFAULT_DENSITY
}

impl CelestialConfig {
    /// A planet of the given radius at the default density.
    pub fn planet(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            radius: Some(radius),
            mass: None,
            density: DEFAULT_DENSITY,
            kind: CelestialKind::Planet,
            color: None,
        }
    }

    pub fn build(&self) -> Result<Celestial, PhysicsError> {
        let celestial = Celestial::new(self.position, self.radius, self.mass, self.density)?.kind(self.kind);
        Ok(match self.color {
            Some(color) => celestial.color(color),
            None => celestial,
        })
    }
}

/// Initial ship state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipStart {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Radians, 0 = nose up
    pub angle: f32,
    pub angular_velocity: f32,
}

impl ShipStart {
    pub fn movement(&self) -> Movement {
        Movement::at_rest(self.position)
            .with_velocity(self.velocity)
            .with_rotation(self.angle, self.angular_velocity)
    }
}

/// A generated system appended after the hand-placed celestials.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSystem {
    pub seed: u64,
    #[serde(default)]
    pub sun_position: Vec2,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Debug switches saved with a scenario.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    pub pause_on_collision: bool,
}

impl From<DebugConfig> for DebugSettings {
    fn from(config: DebugConfig) -> Self {
        DebugSettings {
            pause_on_collision: config.pause_on_collision,
        }
    }
}

/// A complete flight setup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub physics: PhysicsConfig,
    pub ship: ShipConfig,
    pub start: ShipStart,
    pub celestials: Vec<CelestialConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated: Option<GeneratedSystem>,
    pub debug: DebugConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            ship: ShipConfig::default(),
            start: ShipStart::default(),
            celestials: vec![
                CelestialConfig::planet(Vec2::new(1000.0, 1000.0), 800.0),
                CelestialConfig::planet(Vec2::new(-500.0, -500.0), 200.0),
            ],
            generated: None,
            debug: DebugConfig::default(),
        }
    }
}

impl ScenarioConfig {
    /// A scenario made only of a generated system, ship at rest at the origin.
    pub fn generated(seed: u64, sun_position: Vec2) -> Self {
        Self {
            celestials: Vec::new(),
            generated: Some(GeneratedSystem {
                seed,
                sun_position,
                generator: GeneratorConfig::default(),
            }),
            ..Self::default()
        }
    }

    /// Build every celestial, hand-placed ones first.
    pub fn build_celestials(&self) -> Result<Vec<Celestial>, ConfigError> {
        let mut celestials = self
            .celestials
            .iter()
            .enumerate()
            .map(|(index, c)| c.build().map_err(|error| ConfigError::InvalidCelestial { index, error }))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(system) = &self.generated {
            celestials.extend(generate_system(system.seed, system.sun_position, &system.generator)?);
        }
        Ok(celestials)
    }

    /// Assemble the world this scenario describes.
    pub fn build_world(&self) -> Result<World, ConfigError> {
        self.ship.validate().map_err(ConfigError::InvalidShip)?;
        let ship = Ship::new(self.start.position, &self.ship).with_movement(self.start.movement());
        Ok(World::new(self.build_celestials()?, ship, self.physics).with_debug(self.debug.into()))
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Read a scenario JSON file.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, ConfigError> {
    let json = std::fs::read_to_string(path)?;
    ScenarioConfig::from_json(&json)
}

/// Write a scenario as pretty JSON, creating parent directories.
pub fn save_scenario(path: &Path, scenario: &ScenarioConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, scenario.to_json()?)?;
    Ok(())
}

/// Errors that can occur while loading or building a scenario.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
    /// A hand-placed celestial could not be built.
    InvalidCelestial { index: usize, error: PhysicsError },
    /// The generated system could not be built.
    InvalidGenerator(PhysicsError),
    /// The ship parameters are unusable.
    InvalidShip(PhysicsError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
            ConfigError::InvalidCelestial { index, error } => {
                write!(f, "celestial {index}: {error}")
            }
            ConfigError::InvalidGenerator(e) => write!(f, "generated system: {e}"),
            ConfigError::InvalidShip(e) => write!(f, "ship: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::JsonError(e) => Some(e),
            ConfigError::InvalidCelestial { error, .. } => Some(error),
            ConfigError::InvalidGenerator(e) => Some(e),
            ConfigError::InvalidShip(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}

impl From<PhysicsError> for ConfigError {
    fn from(e: PhysicsError) -> Self {
        ConfigError::InvalidGenerator(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene() {
        let scenario = ScenarioConfig::default();
        let world = scenario.build_world().unwrap();
        assert_eq!(world.celestials().len(), 2);
        assert_eq!(world.celestials()[0].position, Vec2::new(1000.0, 1000.0));
        assert_eq!(world.celestials()[0].radius, 800.0);
        assert_eq!(world.celestials()[1].radius, 200.0);
        assert_eq!(world.ship().position(), Vec2::ZERO);
        assert!(!world.debug().pause_on_collision);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut scenario = ScenarioConfig::default();
        scenario.start.velocity = Vec2::new(1.5, -2.0);
        scenario.debug.pause_on_collision = true;
        scenario.celestials[1].color = Some(0x336699);

        let json = scenario.to_json().unwrap();
        let back = ScenarioConfig::from_json(&json).unwrap();
        assert_eq!(back, scenario);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{
            "celestials": [ { "position": [0.0, 0.0], "mass": 5000.0, "kind": "Sun" } ],
            "start": { "position": [0.0, -300.0] }
        }"#;
        let scenario = ScenarioConfig::from_json(json).unwrap();
        assert_eq!(scenario.physics, PhysicsConfig::default());
        assert_eq!(scenario.celestials[0].density, DEFAULT_DENSITY);

        let world = scenario.build_world().unwrap();
        assert_eq!(world.celestials()[0].kind, CelestialKind::Sun);
        assert_eq!(world.ship().position(), Vec2::new(0.0, -300.0));
    }

    #[test]
    fn test_invalid_celestial_reports_index() {
        let mut scenario = ScenarioConfig::default();
        scenario.celestials[1].mass = Some(10.0);
        match scenario.build_world() {
            Err(ConfigError::InvalidCelestial { index, error }) => {
                assert_eq!(index, 1);
                assert_eq!(error, PhysicsError::ConflictingMassAndRadius);
            }
            other => panic!("expected InvalidCelestial, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_ship_mass_is_error() {
        let mut scenario = ScenarioConfig::default();
        scenario.ship.mass = 0.0;
        assert!(matches!(
            scenario.build_world(),
            Err(ConfigError::InvalidShip(PhysicsError::InvalidQuantity { .. }))
        ));
    }

    #[test]
    fn test_generated_scenario() {
        let scenario = ScenarioConfig::generated(7, Vec2::new(0.0, 5000.0));
        let a = scenario.build_celestials().unwrap();
        let b = scenario.build_celestials().unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0].kind, CelestialKind::Sun);
        assert_eq!(a[0].position, Vec2::new(0.0, 5000.0));
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(matches!(
            ScenarioConfig::from_json("{ not json"),
            Err(ConfigError::JsonError(_))
        ));
    }
}
