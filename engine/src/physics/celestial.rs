//! Celestial bodies
//!
//! Suns, planets and moons are all the same physical object: a circle with
//! a uniform density that pulls on the ship and can be landed on. Mass and
//! radius are tied together by the density, so a celestial is built from
//! exactly one of them.
//!
//! # Example
//!
//! ```ignore
//! use orbit_lander_engine::physics::{Celestial, Vec2};
//!
//! let planet = Celestial::with_radius(Vec2::new(1000.0, 1000.0), 800.0)?;
//! let pull = planet.gravitational_force(Vec2::ZERO, 10.0);
//! ```

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::error::PhysicsError;
use super::vector_ops::dot;

/// Gravitational constant. Tuned for game feel, not SI units.
pub const GRAVITATIONAL_CONSTANT: f32 = 0.0003;

/// Density used when a celestial does not specify one.
pub const DEFAULT_DENSITY: f32 = 0.01;

/// Largest angle between the surface normal and the ship's up vector that
/// still counts as an upright landing (5 degrees).
pub const VALID_LANDING_ANGLE: f32 = 2.0 * PI * (5.0 / 360.0);

/// Distances below this are clamped before computing gravity.
pub const MIN_GRAVITY_DISTANCE: f32 = 1.0;

/// Colour used for celestials that were not given one (0x00RRGGBB).
pub const DEFAULT_CELESTIAL_COLOR: u32 = 0x8A8A99;

/// What role a celestial plays in its system. Purely descriptive; physics
/// treats every kind the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CelestialKind {
    Sun,
    #[default]
    Planet,
    Moon,
}

/// A gravitating, collidable circular body.
#[derive(Debug, Clone, PartialEq)]
pub struct Celestial {
    /// Centre in world space
    pub position: Vec2,
    /// Surface radius
    pub radius: f32,
    /// Mass per unit volume (treated as a sphere)
    pub density: f32,
    /// Total mass
    pub mass: f32,
    /// Descriptive role
    pub kind: CelestialKind,
    /// Packed RGB colour (0x00RRGGBB), cosmetic only
    pub color: u32,
    /// Set once the ship has settled on this body, cosmetic only
    pub landed: bool,
}

impl Celestial {
    /// Build a celestial from exactly one of `radius` or `mass`.
    ///
    /// The missing quantity is derived from `density`.
    ///
    /// # Errors
    /// * [`PhysicsError::MissingMassAndRadius`] if neither is given
    /// * [`PhysicsError::ConflictingMassAndRadius`] if both are given
    /// * [`PhysicsError::InvalidQuantity`] for non-positive or non-finite input
    pub fn new(
        position: Vec2,
        radius: Option<f32>,
        mass: Option<f32>,
        density: f32,
    ) -> Result<Self, PhysicsError> {
        check_positive("density", density)?;

        let mut celestial = Self {
            position,
            radius: 0.0,
            density,
            mass: 0.0,
            kind: CelestialKind::default(),
            color: DEFAULT_CELESTIAL_COLOR,
            landed: false,
        };

        match (radius, mass) {
            (None, None) => return Err(PhysicsError::MissingMassAndRadius),
            (Some(_), Some(_)) => return Err(PhysicsError::ConflictingMassAndRadius),
            (Some(radius), None) => {
                check_positive("radius", radius)?;
                celestial.radius = radius;
                celestial.mass = celestial.calc_mass();
            }
            (None, Some(mass)) => {
                check_positive("mass", mass)?;
                celestial.mass = mass;
                celestial.radius = celestial.calc_radius();
            }
        }

        Ok(celestial)
    }

    /// Build from a radius with the default density.
    pub fn with_radius(position: Vec2, radius: f32) -> Result<Self, PhysicsError> {
        Self::new(position, Some(radius), None, DEFAULT_DENSITY)
    }

    /// Build from a mass with the default density.
    pub fn with_mass(position: Vec2, mass: f32) -> Result<Self, PhysicsError> {
        Self::new(position, None, Some(mass), DEFAULT_DENSITY)
    }

    /// Set the descriptive kind.
    pub fn kind(mut self, kind: CelestialKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the packed display colour.
    pub fn color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    /// Mass of a sphere with this radius and density.
    pub fn calc_mass(&self) -> f32 {
        let volume = (4.0 / 3.0) * PI * self.radius.powi(3);
        volume * self.density
    }

    /// Radius of a sphere with this mass and density.
    pub fn calc_radius(&self) -> f32 {
        ((3.0 * self.mass) / (4.0 * self.density * PI)).cbrt()
    }

    /// Force pulling a body of `body_mass` at `body_position` toward this
    /// celestial: `G * m1 * m2 / d²`.
    ///
    /// Distance is clamped to [`MIN_GRAVITY_DISTANCE`]; a body sitting exactly
    /// on the centre feels no force.
    pub fn gravitational_force(&self, body_position: Vec2, body_mass: f32) -> Vec2 {
        let to_center = self.position - body_position;
        let distance = to_center.length().max(MIN_GRAVITY_DISTANCE);
        let magnitude = (GRAVITATIONAL_CONSTANT * body_mass * self.mass) / (distance * distance);
        to_center.normalize_or_zero() * magnitude
    }

    /// Whether `point` lies on or inside the surface.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.position).length() <= self.radius
    }

    /// Whether any of `points` lies on or inside the surface.
    ///
    /// Only vertices are tested: a polygon edge crossing the circle with
    /// every vertex outside is not detected.
    pub fn contains_any_of(&self, points: &[Vec2]) -> bool {
        points.iter().any(|&p| self.contains(p))
    }

    /// Outward unit normal of the surface below `point`.
    ///
    /// Falls back to `Vec2::Y` at the centre.
    pub fn outward_normal(&self, point: Vec2) -> Vec2 {
        let out = point - self.position;
        if out.length_squared() < 1e-8 {
            Vec2::Y
        } else {
            out.normalize()
        }
    }

    /// Height of `point` above the surface (negative when inside).
    pub fn height_above_surface(&self, point: Vec2) -> f32 {
        (point - self.position).length() - self.radius
    }

    /// Where a ship of the given standoff `height` rests above `ship_center`,
    /// and the angle it has to face to stand upright there.
    ///
    /// The angle comes from `atan(out.y / out.x)` with a half-turn added on
    /// the `x > 0` hemisphere, so it jumps at `x = 0`.
    pub fn surface_landing_position(&self, ship_center: Vec2, height: f32) -> (Vec2, f32) {
        let out = ship_center - self.position;
        let normal = self.outward_normal(ship_center);
        let position = self.position + normal * (self.radius + height / 2.0);

        if out == Vec2::ZERO {
            return (position, 0.0);
        }

        let half_turn = if out.x > 0.0 { PI } else { 0.0 };
        let angle = (out.y / out.x).atan() + FRAC_PI_2 + half_turn;
        (position, angle)
    }

    /// Whether `ship_up` is within [`VALID_LANDING_ANGLE`] of the outward
    /// radial direction at `center`.
    pub fn is_valid_landing_angle(&self, center: Vec2, ship_up: Vec2) -> bool {
        let out = self.outward_normal(center);
        let up = ship_up.normalize_or_zero();
        let cos = dot(out, up).clamp(-1.0, 1.0);
        cos.acos() < VALID_LANDING_ANGLE
    }
}

pub(crate) fn check_positive(name: &'static str, value: f32) -> Result<(), PhysicsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidQuantity { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_derives_mass() {
        let c = Celestial::with_radius(Vec2::ZERO, 10.0).unwrap();
        let expected = (4.0 / 3.0) * PI * 1000.0 * DEFAULT_DENSITY;
        assert!((c.mass - expected).abs() < 1e-3);
        assert_eq!(c.radius, 10.0);
        assert_eq!(c.density, DEFAULT_DENSITY);
    }

    #[test]
    fn test_mass_radius_round_trip() {
        for &(radius, density) in &[(1.0, 0.01), (200.0, 0.01), (800.0, 0.5), (3.5, 2.0)] {
            let c = Celestial::new(Vec2::ZERO, Some(radius), None, density).unwrap();
            let back = Celestial::new(Vec2::ZERO, None, Some(c.mass), density).unwrap();
            assert!(
                (back.radius - radius).abs() / radius < 1e-4,
                "radius {} density {} came back as {}",
                radius,
                density,
                back.radius
            );
        }
    }

    #[test]
    fn test_constructor_requires_exactly_one() {
        assert_eq!(
            Celestial::new(Vec2::ZERO, None, None, DEFAULT_DENSITY),
            Err(PhysicsError::MissingMassAndRadius)
        );
        assert_eq!(
            Celestial::new(Vec2::ZERO, Some(1.0), Some(1.0), DEFAULT_DENSITY),
            Err(PhysicsError::ConflictingMassAndRadius)
        );
    }

    #[test]
    fn test_constructor_rejects_bad_values() {
        assert!(matches!(
            Celestial::with_radius(Vec2::ZERO, -5.0),
            Err(PhysicsError::InvalidQuantity { name: "radius", .. })
        ));
        assert!(matches!(
            Celestial::with_mass(Vec2::ZERO, f32::NAN),
            Err(PhysicsError::InvalidQuantity { name: "mass", .. })
        ));
        assert!(matches!(
            Celestial::new(Vec2::ZERO, Some(1.0), None, 0.0),
            Err(PhysicsError::InvalidQuantity { name: "density", .. })
        ));
    }

    #[test]
    fn test_gravity_points_at_center() {
        let c = Celestial::with_radius(Vec2::new(100.0, 0.0), 10.0).unwrap();
        let f = c.gravitational_force(Vec2::ZERO, 10.0);
        assert!(f.x > 0.0);
        assert!(f.y.abs() < 1e-9);
        let expected = GRAVITATIONAL_CONSTANT * 10.0 * c.mass / (100.0 * 100.0);
        assert!((f.length() - expected).abs() / expected < 1e-5);
    }

    #[test]
    fn test_gravity_at_center_is_zero() {
        let c = Celestial::with_radius(Vec2::new(5.0, 5.0), 10.0).unwrap();
        let f = c.gravitational_force(Vec2::new(5.0, 5.0), 10.0);
        assert_eq!(f, Vec2::ZERO);
    }

    #[test]
    fn test_gravity_clamps_tiny_distance() {
        let c = Celestial::with_radius(Vec2::ZERO, 10.0).unwrap();
        let f = c.gravitational_force(Vec2::new(1e-4, 0.0), 1.0);
        assert!(f.is_finite());
        let clamped = GRAVITATIONAL_CONSTANT * c.mass;
        assert!((f.length() - clamped).abs() / clamped < 1e-5);
    }

    #[test]
    fn test_height_above_surface() {
        let c = Celestial::with_radius(Vec2::new(3.0, -2.0), 50.0).unwrap();
        assert!((c.height_above_surface(Vec2::new(3.0, 98.0)) - 50.0).abs() < 1e-4);
        assert!((c.height_above_surface(Vec2::new(33.0, 38.0)) - 0.0).abs() < 1e-4);
        assert!((c.height_above_surface(c.position) + 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_contains_any_of_edges() {
        let c = Celestial::with_radius(Vec2::new(3.0, -2.0), 50.0).unwrap();
        let eps = 0.01;
        let inside = c.position + Vec2::new(0.6, 0.8) * (50.0 - eps);
        let outside = c.position + Vec2::new(0.6, 0.8) * (50.0 + eps);
        assert!(c.contains_any_of(&[Vec2::new(1000.0, 0.0), inside]));
        assert!(!c.contains_any_of(&[Vec2::new(1000.0, 0.0), outside]));
        assert!(!c.contains_any_of(&[]));
    }

    #[test]
    fn test_surface_landing_position_distance() {
        let c = Celestial::with_radius(Vec2::new(10.0, 10.0), 100.0).unwrap();
        let (pos, _) = c.surface_landing_position(Vec2::new(10.0, 500.0), 40.0);
        assert!((pos - Vec2::new(10.0, 130.0)).length() < 1e-3, "got {:?}", pos);
    }

    #[test]
    fn test_surface_landing_angle_hemispheres() {
        let c = Celestial::with_radius(Vec2::ZERO, 100.0).unwrap();

        // West side: atan(0) + π/2
        let (_, west) = c.surface_landing_position(Vec2::new(-200.0, 0.0), 10.0);
        assert!((west - FRAC_PI_2).abs() < 1e-5);

        // East side gets the extra half turn
        let (_, east) = c.surface_landing_position(Vec2::new(200.0, 0.0), 10.0);
        assert!((east - (FRAC_PI_2 + PI)).abs() < 1e-5);

        // Directly above: out.x == 0 takes the atan(+inf) branch
        let (_, north) = c.surface_landing_position(Vec2::new(0.0, 200.0), 10.0);
        assert!((north - PI).abs() < 1e-5);
    }

    #[test]
    fn test_surface_landing_at_center_is_finite() {
        let c = Celestial::with_radius(Vec2::ZERO, 100.0).unwrap();
        let (pos, angle) = c.surface_landing_position(Vec2::ZERO, 10.0);
        assert!(pos.is_finite());
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_valid_landing_angle() {
        let c = Celestial::with_radius(Vec2::ZERO, 100.0).unwrap();
        let above = Vec2::new(0.0, 150.0);
        assert!(c.is_valid_landing_angle(above, Vec2::Y));
        let tilt_small = crate::physics::vector_ops::rotate(Vec2::Y, 3f32.to_radians());
        assert!(c.is_valid_landing_angle(above, tilt_small));
        let tilt_large = crate::physics::vector_ops::rotate(Vec2::Y, 8f32.to_radians());
        assert!(!c.is_valid_landing_angle(above, tilt_large));
        assert!(!c.is_valid_landing_angle(above, -Vec2::Y));
    }
}
