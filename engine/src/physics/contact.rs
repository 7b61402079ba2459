//! Ship vs celestial contact response
//!
//! Penetration is found per vertex: a collision point that ends a tick inside
//! a celestial is traced back along its own sweep to where it crossed the
//! surface. That crossing gives the contact point and normal, from which a
//! single impulse is built that changes both the linear and the angular
//! velocity of the candidate movement.
//!
//! # Sweep geometry
//!
//! ```text
//!        old ●
//!             \  sweep_dir
//!   surface ---●--- contact = v + sweep_dir * (move - half_chord)
//!               \
//!              v ●----- foot of the perpendicular from the centre
//!                        (at v + sweep_dir * move, r_section from centre)
//! ```
//!
//! Two different normals are in play: the impulse *torque* uses the contact
//! normal, the linear push uses the ship-centre-to-celestial-centre
//! direction. They only agree when the contact point sits straight below the
//! ship's centre.

use glam::Vec2;

use super::config::PhysicsConfig;
use super::error::DegenerateContact;
use super::movement::Movement;
use super::types::CelestialId;
use super::vector_ops::{cross, reflect, rotate90, solve};

/// Sweeps shorter than this are treated as no motion.
pub const MIN_SWEEP_LENGTH: f32 = 1e-6;

/// Where and how a moving point crossed a circle's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactGeometry {
    /// Surface crossing point
    pub point: Vec2,
    /// Outward unit surface normal at `point`
    pub normal: Vec2,
    /// Unit direction the point was moving
    pub sweep_dir: Vec2,
}

/// A resolved collision for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Celestial that was hit
    pub celestial: CelestialId,
    /// Index of the ship collision point that penetrated
    pub point_index: usize,
    /// Surface point the ship was pushed back onto
    pub point: Vec2,
    /// Outward surface normal at the contact
    pub normal: Vec2,
    /// Speed change the impulse was built from
    pub delta_v: f32,
    /// Angular velocity added by the impulse
    pub angular_impulse: f32,
}

/// Trace the segment `old_point -> new_point` back to where it entered the
/// circle at `center` with `radius`.
///
/// # Errors
/// Any [`DegenerateContact`] means no well-defined crossing exists; callers
/// treat that vertex as a near-miss.
pub fn contact_geometry(
    center: Vec2,
    radius: f32,
    old_point: Vec2,
    new_point: Vec2,
) -> Result<ContactGeometry, DegenerateContact> {
    let sweep = new_point - old_point;
    let moved_by = sweep.length();
    if !(moved_by > MIN_SWEEP_LENGTH) {
        return Err(DegenerateContact::ZeroLengthSweep);
    }
    let sweep_dir = sweep / moved_by;

    // Foot of the perpendicular from the centre onto the sweep line
    let perp = rotate90(sweep_dir);
    let (r_section, travel) =
        solve(center, perp, new_point, sweep_dir)?.ok_or(DegenerateContact::ParallelLines)?;

    if !(r_section.abs() <= radius) {
        return Err(DegenerateContact::ChordOutOfRange { r_section, radius });
    }
    let half_chord = (radius * radius - r_section * r_section).max(0.0).sqrt();

    // Step back from the swept endpoint to the entry crossing
    let point = new_point + sweep_dir * (travel - half_chord);

    let out = point - center;
    if out.length_squared() <= f32::EPSILON {
        return Err(DegenerateContact::ZeroLengthNormal);
    }

    Ok(ContactGeometry {
        point,
        normal: out.normalize(),
        sweep_dir,
    })
}

/// Apply the contact impulse and position correction to `movement`.
///
/// `contact_vertex` is the penetrating collision point at `movement`,
/// `celestial_center` the centre it collided with. Returns the speed change
/// and the angular velocity added.
pub fn apply_impulse(
    movement: &mut Movement,
    geometry: &ContactGeometry,
    contact_vertex: Vec2,
    celestial_center: Vec2,
    mass: f32,
    moment_of_inertia: f32,
    config: &PhysicsConfig,
) -> (f32, f32) {
    let dt = config.impulse_timestep;
    let to_center = movement.position - contact_vertex;
    let speed = movement.velocity.length();

    let bounce = reflect(geometry.sweep_dir * speed, geometry.normal);
    let delta_v = if bounce.length() > config.bounce_threshold {
        (bounce * config.bounce_speed - movement.velocity).length()
    } else {
        speed
    };

    // Torque about the ship centre from the contact normal force
    let force = geometry.normal * ((mass * delta_v) / dt);
    let torque = cross(force, -to_center);
    let angular_impulse = if moment_of_inertia > 0.0 {
        -(torque / moment_of_inertia) * dt
    } else {
        0.0
    };
    movement.angular_velocity += angular_impulse;

    // F*dt = m*dv along the centre-to-centre direction
    let force_normal = (movement.position - celestial_center).normalize_or_zero();
    movement.velocity += force_normal * ((force.length() * dt) / mass);

    movement.position = geometry.point + to_center;

    (delta_v, angular_impulse)
}
