//! Thruster flames
//!
//! Every frame the ship is thrusting, two flames leave the bottom edge of the
//! hull; a rotation thruster adds one flame on the side opposite the turn.
//! Flames drift in a straight line, shrink and darken until they vanish.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;

use crate::physics::{RotationInput, Ship};
use crate::render::{DrawList, Drawable, pack_color_f32};

/// Starting radius of a new flame.
pub const FLAME_RADIUS: f32 = 15.0;

/// Starting colour of a new flame (linear RGB).
pub const FLAME_COLOR: [f32; 3] = [1.0, 0.32, 0.08];

/// Radius lost per frame.
pub const FLAME_SHRINK: f32 = 0.5;

/// Colour multiplier per frame.
pub const FLAME_DECAY: f32 = 0.95;

/// One flame particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flame {
    pub position: Vec2,
    /// Unit direction of travel
    pub direction: Vec2,
    /// Distance travelled per frame
    pub speed: f32,
    pub radius: f32,
    pub color: [f32; 3],
}

impl Flame {
    pub fn new(position: Vec2, direction: Vec2, speed: f32) -> Self {
        Self {
            position,
            direction,
            speed,
            radius: FLAME_RADIUS,
            color: FLAME_COLOR,
        }
    }

    /// Advance one frame.
    pub fn update(&mut self) {
        self.position += self.direction * self.speed;
        self.radius -= FLAME_SHRINK;
        self.color = self.color.map(|c| c * FLAME_DECAY);
    }

    pub fn is_alive(&self) -> bool {
        self.radius > 0.0
    }
}

impl Drawable for Flame {
    fn draw(&self, list: &mut DrawList) {
        list.push_circle(self.position, self.radius, pack_color_f32(self.color));
    }
}

/// Owns the live flames and the random source for their speeds.
pub struct FlameSystem {
    flames: Vec<Flame>,
    rng: fastrand::Rng,
}

impl std::fmt::Debug for FlameSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlameSystem")
            .field("flames_len", &self.flames.len())
            .finish()
    }
}

impl FlameSystem {
    pub fn new(seed: u64) -> Self {
        Self {
            flames: Vec::new(),
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Spawn flames for the ship's current controls.
    pub fn emit(&mut self, ship: &Ship) {
        let movement = ship.movement();
        let angle = movement.angle;
        let [bottom_left, bottom_right, top_left, top_right] = ship.hull_corners(movement);

        if ship.is_accelerating() {
            let bottom = bottom_right - bottom_left;
            let direction = Vec2::new((angle - FRAC_PI_2).cos(), (angle - FRAC_PI_2).sin());
            for position in [bottom_left + bottom * 0.3, bottom_left + bottom * 0.7] {
                self.spawn(position, direction);
            }
        }

        let top_center = (top_left + top_right) / 2.0;
        match ship.rotation_input() {
            // Clockwise turn: fire from the right side
            RotationInput::Right => {
                let position = (top_center + bottom_right * 2.0) / 3.0;
                self.spawn(position, Vec2::new(angle.cos(), angle.sin()));
            }
            RotationInput::Left => {
                let position = (top_center + bottom_left * 2.0) / 3.0;
                self.spawn(position, Vec2::new((angle - PI).cos(), (angle - PI).sin()));
            }
            RotationInput::None => {}
        }
    }

    fn spawn(&mut self, position: Vec2, direction: Vec2) {
        let speed = 4.0 + self.rng.f32() * 2.0;
        self.flames.push(Flame::new(position, direction, speed));
    }

    /// Advance all flames one frame and drop the burnt-out ones.
    pub fn update(&mut self) {
        for flame in &mut self.flames {
            flame.update();
        }
        self.flames.retain(Flame::is_alive);
    }

    /// One visual frame: emit for `ship`, then advance.
    pub fn frame(&mut self, ship: &Ship) {
        self.emit(ship);
        self.update();
    }

    pub fn flames(&self) -> &[Flame] {
        &self.flames
    }

    pub fn len(&self) -> usize {
        self.flames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flames.is_empty()
    }

    pub fn clear(&mut self) {
        self.flames.clear();
    }
}

impl Drawable for FlameSystem {
    fn draw(&self, list: &mut DrawList) {
        self.flames.as_slice().draw(list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ShipControls;
    use crate::physics::ShipConfig;

    fn ship_with(controls: ShipControls) -> Ship {
        let mut ship = Ship::new(Vec2::ZERO, &ShipConfig::default());
        ship.set_controls(&controls);
        ship
    }

    #[test]
    fn test_thrust_spawns_two_downward_flames() {
        let ship = ship_with(ShipControls { accelerate: true, ..Default::default() });
        let mut flames = FlameSystem::new(1);
        flames.emit(&ship);

        assert_eq!(flames.len(), 2);
        let [left, right] = [flames.flames()[0], flames.flames()[1]];
        assert!((left.position - Vec2::new(-20.0, -50.0)).length() < 1e-4);
        assert!((right.position - Vec2::new(20.0, -50.0)).length() < 1e-4);
        assert!((left.direction - Vec2::new(0.0, -1.0)).length() < 1e-6);
        assert!(left.speed >= 4.0 && left.speed < 6.0);
        assert_eq!(left.radius, FLAME_RADIUS);
    }

    #[test]
    fn test_rotation_flames() {
        let mut flames = FlameSystem::new(1);
        flames.emit(&ship_with(ShipControls { rotate_right: true, ..Default::default() }));
        assert_eq!(flames.len(), 1);
        let flame = flames.flames()[0];
        // (top_center + 2 * bottom_right) / 3
        assert!((flame.position - Vec2::new(100.0 / 3.0, -50.0 / 3.0)).length() < 1e-4);
        assert!((flame.direction - Vec2::X).length() < 1e-6);

        flames.clear();
        flames.emit(&ship_with(ShipControls { rotate_left: true, ..Default::default() }));
        let flame = flames.flames()[0];
        assert!((flame.position - Vec2::new(-100.0 / 3.0, -50.0 / 3.0)).length() < 1e-4);
        assert!((flame.direction - Vec2::NEG_X).length() < 1e-5);
    }

    #[test]
    fn test_idle_ship_emits_nothing() {
        let mut flames = FlameSystem::new(1);
        flames.emit(&ship_with(ShipControls::default()));
        assert!(flames.is_empty());
    }

    #[test]
    fn test_flame_burns_out_after_thirty_frames() {
        let mut flame = Flame::new(Vec2::ZERO, Vec2::Y, 5.0);
        flame.update();
        assert_eq!(flame.position, Vec2::new(0.0, 5.0));
        assert_eq!(flame.radius, 14.5);
        assert!((flame.color[0] - 0.95).abs() < 1e-6);

        let mut system = FlameSystem::new(3);
        system.flames.push(Flame::new(Vec2::ZERO, Vec2::Y, 5.0));
        for _ in 0..29 {
            system.update();
        }
        assert_eq!(system.len(), 1);
        system.update();
        assert!(system.is_empty());
    }

    #[test]
    fn test_same_seed_same_speeds() {
        let ship = ship_with(ShipControls { accelerate: true, ..Default::default() });
        let mut a = FlameSystem::new(9);
        let mut b = FlameSystem::new(9);
        for _ in 0..5 {
            a.frame(&ship);
            b.frame(&ship);
        }
        assert_eq!(a.flames(), b.flames());
    }

    #[test]
    fn test_draws_one_circle_per_flame() {
        let ship = ship_with(ShipControls { accelerate: true, rotate_left: true, ..Default::default() });
        let mut flames = FlameSystem::new(2);
        flames.emit(&ship);
        let mut list = DrawList::new();
        flames.draw(&mut list);
        assert_eq!(list.circles.len(), 3);
        assert_eq!(list.circles[0].color, pack_color_f32(FLAME_COLOR));
    }
}
