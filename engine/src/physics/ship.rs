//! The player ship
//!
//! The ship is a rigid 100x100 quad for drawing, but collides through 11
//! sample points traced around its silhouette. Those points are fixed in
//! ship-local space and are also what the moment of inertia is built from.
//!
//! ```text
//!        6  7
//!       8
//!
//!   9           10
//!
//!   5             4
//!
//!     1  0  2  3
//! ```

use glam::Vec2;

use crate::input::ShipControls;

use super::config::ShipConfig;
use super::movement::Movement;
use super::types::CelestialId;
use super::vector_ops::rotate;

/// Edge length of the ship's bounding square.
pub const SHIP_SIZE: f32 = 100.0;

/// Number of collision sample points.
pub const COLLISION_POINT_COUNT: usize = 11;

/// Collision sample points as fractions of the bounding square, measured
/// from its bottom-left corner.
pub const COLLISION_POINTS: [Vec2; COLLISION_POINT_COUNT] = [
    Vec2::new(0.41, 0.07),
    Vec2::new(0.22, 0.09),
    Vec2::new(0.62, 0.07),
    Vec2::new(0.80, 0.09),
    Vec2::new(0.95, 0.33),
    Vec2::new(0.04, 0.32),
    Vec2::new(0.49, 0.97),
    Vec2::new(0.55, 0.95),
    Vec2::new(0.44, 0.94),
    Vec2::new(0.24, 0.64),
    Vec2::new(0.78, 0.62),
];

/// Which way the rotation thrusters push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationInput {
    /// Counter-clockwise
    Left,
    /// Clockwise
    Right,
    #[default]
    None,
}

/// Collision point `index` in ship-local coordinates (origin at the centre).
#[inline]
pub fn local_collision_point(index: usize) -> Vec2 {
    (COLLISION_POINTS[index] - Vec2::splat(0.5)) * SHIP_SIZE
}

/// Corners of the hull quad in ship-local space:
/// bottom-left, bottom-right, top-left, top-right.
pub fn local_hull_corners() -> [Vec2; 4] {
    let h = SHIP_SIZE / 2.0;
    [
        Vec2::new(-h, -h),
        Vec2::new(h, -h),
        Vec2::new(-h, h),
        Vec2::new(h, h),
    ]
}

/// Transform a ship-local point by a movement's position and angle.
#[inline]
pub fn to_world(movement: &Movement, local: Vec2) -> Vec2 {
    movement.position + rotate(local, movement.angle)
}

/// Mass-weighted mean squared distance of the collision points from the
/// local origin.
pub fn moment_of_inertia(mass: f32) -> f32 {
    let share = mass / COLLISION_POINT_COUNT as f32;
    (0..COLLISION_POINT_COUNT)
        .map(|i| share * local_collision_point(i).length_squared())
        .sum()
}

/// The player-controlled rigid body.
#[derive(Debug, Clone)]
pub struct Ship {
    movement: Movement,
    mass: f32,
    moment_of_inertia: f32,
    thrust_force: f32,
    rotation_force: f32,
    is_accelerating: bool,
    rotation_input: RotationInput,
    landed_streak: u32,
    landed_on: Option<CelestialId>,
}

impl Ship {
    /// A ship at rest at `position`, nose up.
    ///
    /// The mass is floored at 0.001. Use [`ShipConfig::validate`] to reject
    /// a bad mass instead.
    pub fn new(position: Vec2, config: &ShipConfig) -> Self {
        let mass = config.mass.max(0.001);
        Self {
            movement: Movement::at_rest(position),
            mass,
            moment_of_inertia: moment_of_inertia(mass),
            thrust_force: config.thrust_force,
            rotation_force: config.rotation_force,
            is_accelerating: false,
            rotation_input: RotationInput::None,
            landed_streak: 0,
            landed_on: None,
        }
    }

    /// Same ship starting from a given snapshot.
    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    /// The committed kinematic state.
    pub fn movement(&self) -> &Movement {
        &self.movement
    }

    pub fn position(&self) -> Vec2 {
        self.movement.position
    }

    pub fn angle(&self) -> f32 {
        self.movement.angle
    }

    pub fn speed(&self) -> f32 {
        self.movement.speed()
    }

    /// Nose direction of the committed state.
    pub fn up(&self) -> Vec2 {
        self.movement.up()
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn moment_of_inertia(&self) -> f32 {
        self.moment_of_inertia
    }

    pub fn thrust_force(&self) -> f32 {
        self.thrust_force
    }

    pub fn is_accelerating(&self) -> bool {
        self.is_accelerating
    }

    pub fn rotation_input(&self) -> RotationInput {
        self.rotation_input
    }

    /// Consecutive committed ticks spent touching a celestial.
    pub fn landed_streak(&self) -> u32 {
        self.landed_streak
    }

    /// The celestial the ship has settled on, if any.
    pub fn landed_on(&self) -> Option<CelestialId> {
        self.landed_on
    }

    /// Angular acceleration requested by the current rotation input.
    pub fn angular_input(&self) -> f32 {
        match self.rotation_input {
            RotationInput::Left => self.rotation_force,
            RotationInput::Right => -self.rotation_force,
            RotationInput::None => 0.0,
        }
    }

    /// Sample the held control levels for the next tick.
    ///
    /// Pressing thrust restarts the contact streak. The ship stays settled
    /// until a tick passes without contact.
    pub fn set_controls(&mut self, controls: &ShipControls) {
        if controls.accelerate && !self.is_accelerating {
            self.landed_streak = 0;
        }
        self.is_accelerating = controls.accelerate;
        self.rotation_input = controls.rotation();
    }

    /// Collision points of the ship placed at `movement`.
    pub fn collision_polygon(&self, movement: &Movement) -> [Vec2; COLLISION_POINT_COUNT] {
        std::array::from_fn(|i| to_world(movement, local_collision_point(i)))
    }

    /// Hull quad corners (bottom-left, bottom-right, top-left, top-right) of
    /// the ship placed at `movement`.
    pub fn hull_corners(&self, movement: &Movement) -> [Vec2; 4] {
        local_hull_corners().map(|c| to_world(movement, c))
    }

    /// Update the landing streak with this tick's contact.
    ///
    /// Returns the celestial when the streak first exceeds `land_delay`.
    pub fn record_contact(&mut self, contact: Option<CelestialId>, land_delay: u32) -> Option<CelestialId> {
        let Some(id) = contact else {
            self.landed_streak = 0;
            self.landed_on = None;
            return None;
        };

        self.landed_streak = self.landed_streak.saturating_add(1);
        if self.landed_streak > land_delay && self.landed_on.is_none() {
            self.landed_on = Some(id);
            return Some(id);
        }
        None
    }

    /// Replace the current snapshot with a computed one.
    pub fn commit(&mut self, movement: Movement) {
        self.movement = movement;
    }
}
