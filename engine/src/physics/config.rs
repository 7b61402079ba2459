//! Tunable physics parameters
//!
//! Defaults reproduce the game's hand-tuned feel. Every rate is per tick:
//! the simulation assumes a fixed 60 Hz driver and never scales by real
//! frame time.

use serde::{Deserialize, Serialize};

use super::celestial::check_positive;
use super::error::PhysicsError;

/// Fraction of the reflected speed kept on a hard bounce
pub const BOUNCE_SPEED: f32 = 0.6;

/// Reflected speeds above this use the bounce-based impulse
pub const BOUNCE_THRESHOLD: f32 = 100.0;

/// Consecutive colliding ticks before the ship counts as landed
pub const PLANET_LAND_DELAY: u32 = 10;

/// Timestep the impulse maths assumes, independent of real frame time
pub const IMPULSE_TIMESTEP: f32 = 1.0 / 60.0;

/// Angular velocity removed per tick while no rotation input is held
pub const ANGULAR_FRICTION: f32 = 0.005;

/// Angular velocities smaller than this snap to zero
pub const ANGULAR_SNAP: f32 = 1e-4;

/// Ship mass
pub const SHIP_MASS: f32 = 10.0;

/// Main engine acceleration per tick
pub const THRUST_FORCE: f32 = 0.1;

/// Rotation thruster angular acceleration per tick
pub const ROTATION_FORCE: f32 = 0.003;

/// Integrator and collision response parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fraction of the reflected speed kept on a hard bounce
    pub bounce_speed: f32,
    /// Reflected speed above which the bounce-based impulse is used
    pub bounce_threshold: f32,
    /// Consecutive colliding ticks before a landing is reported
    pub land_delay: u32,
    /// Timestep assumed by the impulse maths (seconds)
    pub impulse_timestep: f32,
    /// Linear angular drag per tick without rotation input
    pub angular_friction: f32,
    /// Angular velocity snap-to-zero threshold
    pub angular_snap: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            bounce_speed: BOUNCE_SPEED,
            bounce_threshold: BOUNCE_THRESHOLD,
            land_delay: PLANET_LAND_DELAY,
            impulse_timestep: IMPULSE_TIMESTEP,
            angular_friction: ANGULAR_FRICTION,
            angular_snap: ANGULAR_SNAP,
        }
    }
}

/// Ship body and engine parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Mass used for gravity and impulses
    pub mass: f32,
    /// Main engine acceleration per tick
    pub thrust_force: f32,
    /// Rotation thruster angular acceleration per tick
    pub rotation_force: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            mass: SHIP_MASS,
            thrust_force: THRUST_FORCE,
            rotation_force: ROTATION_FORCE,
        }
    }
}

impl ShipConfig {
    /// Reject a mass the impulse maths cannot divide by.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        check_positive("ship mass", self.mass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physics_config_default() {
        let config = PhysicsConfig::default();
        assert_eq!(config.bounce_speed, 0.6);
        assert_eq!(config.bounce_threshold, 100.0);
        assert_eq!(config.land_delay, 10);
        assert!((config.impulse_timestep - 1.0 / 60.0).abs() < 1e-9);
        assert_eq!(config.angular_friction, 0.005);
    }

    #[test]
    fn test_ship_config_default() {
        let config = ShipConfig::default();
        assert_eq!(config.mass, 10.0);
        assert_eq!(config.thrust_force, 0.1);
        assert_eq!(config.rotation_force, 0.003);
    }

    #[test]
    fn test_ship_config_validate() {
        assert!(ShipConfig::default().validate().is_ok());
        for mass in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            let config = ShipConfig { mass, ..Default::default() };
            assert!(matches!(
                config.validate(),
                Err(PhysicsError::InvalidQuantity { name: "ship mass", .. })
            ));
        }
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: PhysicsConfig = serde_json::from_str(r#"{ "land_delay": 3 }"#).unwrap();
        assert_eq!(config.land_delay, 3);
        assert_eq!(config.bounce_speed, BOUNCE_SPEED);
    }
}
