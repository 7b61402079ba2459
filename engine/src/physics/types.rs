//! Physics type re-exports from glam
//!
//! The simulation is planar, so everything is expressed with `Vec2`
//! (f32 components, matching the rest of the engine).

pub use glam::Vec2;

/// Index of a celestial inside the owning world's celestial list.
///
/// Celestials are never removed during a session, so the index stays valid
/// for the lifetime of the world that handed it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CelestialId(pub usize);

impl CelestialId {
    /// Position of the celestial in the world's list.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for CelestialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
