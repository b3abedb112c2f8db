//! Strongly-typed identifiers, axis limits, and the [`GridIndex`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// Maximum number of spatial axes supported anywhere in the toolkit.
///
/// Grids and boundary engines cover the 1D, 2D and 3D cases; the
/// staggering rule also names the third axis for out-of-plane field
/// components of lower-rank grids.
pub const MAX_AXES: usize = 3;

/// Number of momentum components carried by every particle ("Nd3v").
pub const MOMENTUM_DIMS: usize = 3;

/// Identifies a particle across steps.
///
/// Used to derive deterministic random draws for thermalizing
/// boundaries; the toolkit never assigns these itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u64);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ParticleId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// One of the two walls bounding the domain along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    /// The wall at the axis minimum (west, south, bottom).
    Lower,
    /// The wall at the axis maximum (east, north, up).
    Upper,
}

impl Face {
    /// Sign of the inward normal: `+1.0` for [`Face::Lower`], `-1.0` for
    /// [`Face::Upper`].
    pub fn inward_sign(self) -> f64 {
        match self {
            Self::Lower => 1.0,
            Self::Upper => -1.0,
        }
    }

    /// Conventional compass name of this face on `axis`, as used by
    /// plasma codes (`west`/`east`, `south`/`north`, `bottom`/`up`).
    ///
    /// Returns `None` for axes beyond [`MAX_AXES`].
    pub fn compass_name(self, axis: usize) -> Option<&'static str> {
        let name = match (axis, self) {
            (0, Self::Lower) => "west",
            (0, Self::Upper) => "east",
            (1, Self::Lower) => "south",
            (1, Self::Upper) => "north",
            (2, Self::Lower) => "bottom",
            (2, Self::Upper) => "up",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lower => write!(f, "lower"),
            Self::Upper => write!(f, "upper"),
        }
    }
}

/// Result of enforcing domain boundaries on one particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum BoundaryOutcome {
    /// The particle stays in this domain: it was inside, or a policy
    /// moved it back inside.
    Kept,
    /// The particle crossed a face with no bound policy. The caller
    /// must drop it or hand it to the exchange layer.
    Unhandled,
}

impl BoundaryOutcome {
    /// `true` for [`BoundaryOutcome::Kept`].
    pub fn is_kept(self) -> bool {
        matches!(self, Self::Kept)
    }
}

/// A multi-dimensional grid index.
///
/// Uses `SmallVec<[usize; 3]>` so indices for every supported rank
/// stay on the stack.
pub type GridIndex = SmallVec<[usize; MAX_AXES]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inward_sign_points_into_domain() {
        assert_eq!(Face::Lower.inward_sign(), 1.0);
        assert_eq!(Face::Upper.inward_sign(), -1.0);
    }

    #[test]
    fn compass_names_cover_three_axes() {
        assert_eq!(Face::Lower.compass_name(0), Some("west"));
        assert_eq!(Face::Upper.compass_name(1), Some("north"));
        assert_eq!(Face::Upper.compass_name(2), Some("up"));
        assert_eq!(Face::Lower.compass_name(3), None);
    }

    #[test]
    fn outcome_is_kept() {
        assert!(BoundaryOutcome::Kept.is_kept());
        assert!(!BoundaryOutcome::Unhandled.is_kept());
    }
}
