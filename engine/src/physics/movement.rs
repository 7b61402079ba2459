//! Kinematic snapshot
//!
//! A `Movement` is everything the integrator needs to know about where a
//! body is and how it moves, linear and angular. The ship owns exactly one
//! current snapshot; each tick builds a fresh candidate and the world decides
//! whether to commit it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vector_ops::rotate;

/// Linear and angular kinematic state for one tick.
///
/// All rates are per tick, not per second.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Movement {
    /// World-space position of the body origin
    pub position: Vec2,
    /// Displacement per tick
    pub velocity: Vec2,
    /// Velocity change applied on the last integration
    pub acceleration: Vec2,
    /// Orientation in radians, counter-clockwise, 0 = nose along +Y
    pub angle: f32,
    /// Rotation per tick
    pub angular_velocity: f32,
    /// Angular velocity change per tick from the rotation thrusters
    pub angular_acceleration: f32,
}

impl Movement {
    /// A body at `position` with no motion.
    pub fn at_rest(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Same snapshot with a different velocity.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Same snapshot with a different orientation and spin.
    pub fn with_rotation(mut self, angle: f32, angular_velocity: f32) -> Self {
        self.angle = angle;
        self.angular_velocity = angular_velocity;
        self
    }

    /// Unit vector the nose points along.
    pub fn up(&self) -> Vec2 {
        rotate(Vec2::Y, self.angle)
    }

    /// Linear speed per tick.
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Whether every component is finite.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.velocity.is_finite()
            && self.acceleration.is_finite()
            && self.angle.is_finite()
            && self.angular_velocity.is_finite()
            && self.angular_acceleration.is_finite()
    }
}
