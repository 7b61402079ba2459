//! Physics error types
//!
//! None of these are fatal to the simulation. Construction errors surface
//! while a world is being assembled; geometry errors are absorbed by the
//! collision scan, which skips the offending contact.

/// Errors raised while constructing physics objects.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A celestial needs either a mass or a radius to derive the other.
    MissingMassAndRadius,
    /// Mass and radius were both given; only one may be supplied.
    ConflictingMassAndRadius,
    /// A physical quantity was zero, negative, NaN or infinite.
    InvalidQuantity {
        /// Name of the offending field
        name: &'static str,
        /// The rejected value
        value: f32,
    },
}

impl std::fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhysicsError::MissingMassAndRadius => {
                write!(f, "celestial constructor must supply mass or radius")
            }
            PhysicsError::ConflictingMassAndRadius => {
                write!(f, "celestial constructor must supply mass or radius, not both")
            }
            PhysicsError::InvalidQuantity { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
        }
    }
}

impl std::error::Error for PhysicsError {}

/// Errors from the vector helpers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VectorError {
    /// A line direction had no length, so the line is undefined.
    ZeroLengthDirection,
}

impl std::fmt::Display for VectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VectorError::ZeroLengthDirection => write!(f, "both direction vectors must have length"),
        }
    }
}

impl std::error::Error for VectorError {}

/// Why a penetrating vertex could not be turned into a surface contact.
///
/// The collision scan treats every variant as a near-miss for that vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DegenerateContact {
    /// The vertex did not move between the two ticks.
    ZeroLengthSweep,
    /// The sweep line and its perpendicular through the celestial centre
    /// did not intersect.
    ParallelLines,
    /// The sweep line passes further from the centre than the radius.
    ChordOutOfRange {
        /// Signed distance between the sweep line and the centre
        r_section: f32,
        /// Radius of the celestial
        radius: f32,
    },
    /// The recovered contact point coincides with the centre.
    ZeroLengthNormal,
}

impl std::fmt::Display for DegenerateContact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegenerateContact::ZeroLengthSweep => write!(f, "contact vertex did not move"),
            DegenerateContact::ParallelLines => write!(f, "sweep line has no perpendicular foot"),
            DegenerateContact::ChordOutOfRange { r_section, radius } => write!(
                f,
                "sweep line misses the surface ({r_section} from centre, radius {radius})"
            ),
            DegenerateContact::ZeroLengthNormal => write!(f, "contact point is the centre"),
        }
    }
}

impl std::error::Error for DegenerateContact {}

impl From<VectorError> for DegenerateContact {
    fn from(e: VectorError) -> Self {
        match e {
            VectorError::ZeroLengthDirection => DegenerateContact::ZeroLengthSweep,
        }
    }
}
