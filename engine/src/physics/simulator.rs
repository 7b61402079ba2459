//! Ship integrator and collision responder
//!
//! One call to [`ShipSimulator::step`] turns the ship's committed movement
//! into the candidate movement for the next tick:
//!
//! 1. rotation: thruster input, linear angular friction, snap to zero
//! 2. linear motion: thrust along the *new* heading plus gravity sampled at
//!    the *old* position, semi-implicit Euler
//! 3. collision scan against every celestial, first penetrating vertex wins,
//!    impulse and position correction applied in place
//!
//! The simulator never mutates the ship. Committing the candidate and the
//! landing bookkeeping belong to the world, which may decide not to commit
//! (paused or previewing).

use glam::Vec2;

use super::celestial::Celestial;
use super::config::PhysicsConfig;
use super::contact::{Contact, apply_impulse, contact_geometry};
use super::movement::Movement;
use super::ship::Ship;
use super::types::CelestialId;

/// Result of simulating one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Candidate movement, already corrected for any contact
    pub movement: Movement,
    /// The contact resolved this tick, if any
    pub contact: Option<Contact>,
}

impl TickOutcome {
    pub fn collided(&self) -> bool {
        self.contact.is_some()
    }

    pub fn collided_with(&self) -> Option<CelestialId> {
        self.contact.map(|c| c.celestial)
    }
}

/// Advances a ship by one fixed tick.
#[derive(Debug, Clone, Default)]
pub struct ShipSimulator {
    config: PhysicsConfig,
}

impl ShipSimulator {
    pub fn new(config: PhysicsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Integrate rotation and linear motion without looking for collisions.
    pub fn integrate(&self, ship: &Ship, celestials: &[Celestial]) -> Movement {
        let current = ship.movement();

        let angular_acceleration = ship.angular_input();
        let mut angular_velocity = current.angular_velocity + angular_acceleration;
        if angular_acceleration == 0.0 && angular_velocity != 0.0 {
            let friction = angular_velocity.abs().min(self.config.angular_friction);
            angular_velocity -= angular_velocity.signum() * friction;
        }
        if angular_velocity.abs() < self.config.angular_snap {
            angular_velocity = 0.0;
        }
        let angle = current.angle + angular_velocity;

        let mut acceleration = Vec2::ZERO;
        if ship.is_accelerating() {
            acceleration += Vec2::new((-angle).sin(), (-angle).cos()) * ship.thrust_force();
        }
        acceleration += gravity_at(celestials, current.position, ship.mass());

        let velocity = current.velocity + acceleration;
        let position = current.position + velocity;

        Movement {
            position,
            velocity,
            acceleration,
            angle,
            angular_velocity,
            angular_acceleration,
        }
    }

    /// Produce the next candidate movement, resolving at most one contact.
    pub fn step(&self, ship: &Ship, celestials: &[Celestial]) -> TickOutcome {
        let mut movement = self.integrate(ship, celestials);
        let contact = self.resolve_collision(ship, celestials, &mut movement);
        TickOutcome { movement, contact }
    }

    /// Scan celestials and collision points in order and resolve the first
    /// penetration with well-defined geometry.
    ///
    /// Vertices whose sweep is degenerate are skipped as near-misses.
    fn resolve_collision(
        &self,
        ship: &Ship,
        celestials: &[Celestial],
        movement: &mut Movement,
    ) -> Option<Contact> {
        let old_polygon = ship.collision_polygon(ship.movement());
        let new_polygon = ship.collision_polygon(movement);

        for (index, celestial) in celestials.iter().enumerate() {
            for (point_index, &vertex) in new_polygon.iter().enumerate() {
                if !celestial.contains(vertex) {
                    continue;
                }

                let geometry = match contact_geometry(
                    celestial.position,
                    celestial.radius,
                    old_polygon[point_index],
                    vertex,
                ) {
                    Ok(geometry) => geometry,
                    Err(_) => continue,
                };

                let (delta_v, angular_impulse) = apply_impulse(
                    movement,
                    &geometry,
                    vertex,
                    celestial.position,
                    ship.mass(),
                    ship.moment_of_inertia(),
                    &self.config,
                );

                return Some(Contact {
                    celestial: CelestialId(index),
                    point_index,
                    point: geometry.point,
                    normal: geometry.normal,
                    delta_v,
                    angular_impulse,
                });
            }
        }

        None
    }
}

/// Sum of the gravitational forces all celestials exert on a body.
pub fn gravity_at(celestials: &[Celestial], position: Vec2, mass: f32) -> Vec2 {
    celestials
        .iter()
        .map(|c| c.gravitational_force(position, mass))
        .fold(Vec2::ZERO, |acc, f| acc + f)
}
