//! 2D vector helpers
//!
//! Small pure functions on top of `glam::Vec2` used by the contact solver.

use glam::Vec2;

use super::error::VectorError;

/// Squared-length tolerance under which `reflect` trusts the normal as unit.
pub const UNIT_NORMAL_TOLERANCE: f32 = 1e-3;

/// Dot product.
#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// 2D cross product: the z component of `a × b` (twice the signed area).
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Rotate `v` counter-clockwise by `angle` radians.
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Rotate `v` by 90 degrees counter-clockwise.
#[inline]
pub fn rotate90(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Reflect `v` about the surface normal `n`.
///
/// `n` is normalized first unless it is already within
/// [`UNIT_NORMAL_TOLERANCE`] of unit length. A zero normal leaves `v`
/// unchanged.
pub fn reflect(v: Vec2, n: Vec2) -> Vec2 {
    let n = if (n.length_squared() - 1.0).abs() < UNIT_NORMAL_TOLERANCE {
        n
    } else {
        n.normalize_or_zero()
    };
    v - 2.0 * dot(v, n) * n
}

/// Intersect two parametrized lines.
///
/// Finds `(t1, t2)` such that `start1 + dir1 * t1 == start2 + dir2 * t2`.
///
/// # Returns
/// * `Ok(Some((t1, t2)))` - the unique intersection
/// * `Ok(None)` - the directions are parallel
/// * `Err(VectorError::ZeroLengthDirection)` - either direction has no length
pub fn solve(
    start1: Vec2,
    dir1: Vec2,
    start2: Vec2,
    dir2: Vec2,
) -> Result<Option<(f32, f32)>, VectorError> {
    if dir1 == Vec2::ZERO || dir2 == Vec2::ZERO {
        return Err(VectorError::ZeroLengthDirection);
    }

    // dir1*t1 - dir2*t2 = start2 - start1, solved with Cramer's rule
    let det = cross(dir1, dir2);
    if det == 0.0 {
        return Ok(None);
    }

    let w = start2 - start1;
    let t1 = cross(w, dir2) / det;
    let t2 = cross(w, dir1) / det;
    Ok(Some((t1, t2)))
}
