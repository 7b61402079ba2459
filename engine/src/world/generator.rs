//! Procedural solar systems
//!
//! A generator is a pure function of a seed and a few placement limits: the
//! same seed always yields the same celestials. One sun sits at the given
//! position, planets circle it on non-overlapping orbits and every planet
//! may carry a few moons on rings of its own.
//!
//! Masses and counts are drawn through [`distribution`], a bell-like curve
//! that makes values near the middle of each range common and extremes
//! rare. Heavier planets shift the moon-count curve upward and grow larger
//! moons; small planets almost never keep a moon.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::physics::{Celestial, CelestialKind, DEFAULT_DENSITY, PhysicsError};
use crate::render::{hsv_to_rgb, pack_color};

/// Limits for a generated system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub min_planet_count: u32,
    pub max_planet_count: u32,
    pub min_sun_mass: f32,
    pub max_sun_mass: f32,
    pub min_planet_mass: f32,
    pub max_planet_mass: f32,
    pub min_moon_mass: f32,
    pub max_moon_mass: f32,
    /// May be negative: draws below zero mean "no moons"
    pub min_moon_count: i32,
    pub max_moon_count: i32,
    /// Density shared by every generated body
    pub density: f32,
    /// Clearance between neighbouring planet systems
    pub orbit_gap: f32,
    /// Clearance between a planet and its moon rings
    pub moon_gap: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_planet_count: 1,
            max_planet_count: 8,
            min_sun_mass: 5000.0,
            max_sun_mass: 50000.0,
            min_planet_mass: 20.0,
            max_planet_mass: 500.0,
            min_moon_mass: 3.0,
            max_moon_mass: 17.0,
            min_moon_count: -3,
            max_moon_count: 5,
            density: DEFAULT_DENSITY,
            orbit_gap: 150.0,
            moon_gap: 40.0,
        }
    }
}

/// Reshape a uniform sample in `[0, 1]`.
///
/// Samples near 0.5 pass through unchanged. Samples further out are raised
/// to a higher odd power of their offset, pulling them toward 0.5; the
/// endpoints 0 and 1 stay fixed.
pub fn distribution(x: f32) -> f32 {
    let d = (x - 0.5).abs();
    let n = if d < 0.1 {
        1
    } else if d < 0.2 {
        3
    } else if d < 0.4 {
        5
    } else {
        7
    };
    ((x * 2.0 - 1.0).powi(n) + 1.0) / 2.0
}

/// Draw a value in `[min, max]` through [`distribution`].
pub fn generate(rng: &mut fastrand::Rng, min: f32, max: f32) -> f32 {
    min + (max - min) * distribution(rng.f32())
}

/// Build a full system around `sun_position`.
///
/// The sun comes first, then each planet followed by its moons.
pub fn generate_system(
    seed: u64,
    sun_position: Vec2,
    config: &GeneratorConfig,
) -> Result<Vec<Celestial>, PhysicsError> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut bodies = Vec::new();

    let sun_mass = generate(&mut rng, config.min_sun_mass, config.max_sun_mass);
    let sun_hue = 0.08 + rng.f32() * 0.07;
    let sun = Celestial::new(sun_position, None, Some(sun_mass), config.density)?
        .kind(CelestialKind::Sun)
        .color(random_color(sun_hue, 0.8, 1.0));
    let mut orbit_edge = sun.radius;
    bodies.push(sun);

    let planet_count = if config.max_planet_count > config.min_planet_count {
        rng.u32(config.min_planet_count..=config.max_planet_count)
    } else {
        config.min_planet_count
    };

    for _ in 0..planet_count {
        let planet_mass = generate(&mut rng, config.min_planet_mass, config.max_planet_mass);
        let skew = mass_skew(planet_mass, config.min_planet_mass, config.max_planet_mass);
        let planet_radius = Celestial::new(Vec2::ZERO, None, Some(planet_mass), config.density)?.radius;

        // Moon masses first: they decide how wide the planet's system is
        let moon_count = moon_count(&mut rng, skew, config);
        let mut moon_masses = Vec::with_capacity(moon_count);
        for _ in 0..moon_count {
            let mass = generate(&mut rng, config.min_moon_mass, config.max_moon_mass) * (0.5 + 0.5 * skew);
            moon_masses.push(mass.max(config.min_moon_mass));
        }
        let moon_radii = moon_masses
            .iter()
            .map(|&m| Celestial::new(Vec2::ZERO, None, Some(m), config.density).map(|c| c.radius))
            .collect::<Result<Vec<_>, _>>()?;
        let extent = planet_radius
            + moon_radii
                .iter()
                .map(|r| config.moon_gap + 2.0 * r)
                .sum::<f32>();

        let orbit_radius = orbit_edge + config.orbit_gap + extent;
        orbit_edge = orbit_radius + extent;
        let planet_position = sun_position + direction(rng.f32() * TAU) * orbit_radius;

        bodies.push(
            Celestial::new(planet_position, None, Some(planet_mass), config.density)?
                .kind(CelestialKind::Planet)
                .color(random_color(rng.f32(), 0.6, 0.6)),
        );

        let mut ring = planet_radius;
        for (&mass, &radius) in moon_masses.iter().zip(&moon_radii) {
            ring += config.moon_gap + radius;
            let position = planet_position + direction(rng.f32() * TAU) * ring;
            ring += radius;
            bodies.push(
                Celestial::new(position, None, Some(mass), config.density)?
                    .kind(CelestialKind::Moon)
                    .color(random_color(rng.f32(), 0.15, 0.7)),
            );
        }
    }

    Ok(bodies)
}

fn mass_skew(mass: f32, min: f32, max: f32) -> f32 {
    if max > min {
        ((mass - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.5
    }
}

fn moon_count(rng: &mut fastrand::Rng, skew: f32, config: &GeneratorConfig) -> usize {
    let min = config.min_moon_count as f32;
    let max = config.max_moon_count as f32;
    let raw = generate(rng, min, max) + (skew - 0.5) * (max - min) * 0.5;
    raw.round().clamp(0.0, max.max(0.0)) as usize
}

fn direction(angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c, s)
}

fn random_color(hue: f32, saturation: f32, value: f32) -> u32 {
    let [r, g, b] = hsv_to_rgb(hue, saturation, value);
    pack_color(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_fixed_points() {
        assert!((distribution(0.0) - 0.0).abs() < 1e-6);
        assert!((distribution(0.5) - 0.5).abs() < 1e-6);
        assert!((distribution(1.0) - 1.0).abs() < 1e-6);
        // Linear in the middle band
        assert!((distribution(0.55) - 0.55).abs() < 1e-6);
    }

    #[test]
    fn test_distribution_stays_in_unit_range() {
        for i in 0..=100 {
            let x = i as f32 / 100.0;
            let y = distribution(x);
            assert!((0.0..=1.0).contains(&y), "distribution({}) = {}", x, y);
        }
    }

    #[test]
    fn test_same_seed_same_system() {
        let config = GeneratorConfig::default();
        let a = generate_system(42, Vec2::ZERO, &config).unwrap();
        let b = generate_system(42, Vec2::ZERO, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_system_shape() {
        let config = GeneratorConfig::default();
        for seed in 0..20 {
            let bodies = generate_system(seed, Vec2::new(100.0, -50.0), &config).unwrap();
            assert_eq!(bodies[0].kind, CelestialKind::Sun);
            assert_eq!(bodies[0].position, Vec2::new(100.0, -50.0));
            assert!(bodies[0].mass >= 5000.0 && bodies[0].mass <= 50000.0);

            let planets = bodies.iter().filter(|b| b.kind == CelestialKind::Planet).count();
            assert!((1..=8).contains(&planets), "seed {} made {} planets", seed, planets);

            for b in &bodies {
                match b.kind {
                    CelestialKind::Planet => assert!(b.mass >= 20.0 && b.mass <= 500.0),
                    CelestialKind::Moon => assert!(b.mass >= 3.0 && b.mass <= 17.0),
                    CelestialKind::Sun => {}
                }
            }
        }
    }

    #[test]
    fn test_bodies_do_not_overlap() {
        let config = GeneratorConfig::default();
        for seed in 0..20 {
            let bodies = generate_system(seed, Vec2::ZERO, &config).unwrap();
            for (i, a) in bodies.iter().enumerate() {
                for b in &bodies[i + 1..] {
                    let gap = (a.position - b.position).length() - a.radius - b.radius;
                    assert!(gap > 0.0, "seed {}: bodies overlap by {}", seed, -gap);
                }
            }
        }
    }

    #[test]
    fn test_invalid_density_is_error() {
        let config = GeneratorConfig {
            density: 0.0,
            ..Default::default()
        };
        assert!(generate_system(1, Vec2::ZERO, &config).is_err());
    }
}
