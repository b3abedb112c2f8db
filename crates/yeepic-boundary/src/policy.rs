//! Per-face boundary policies.
//!
//! A policy is what happens to a particle that crossed one wall.
//! [`PolicyKind`] is the parameter-free selector coming out of
//! configuration; [`BoundaryPolicy`] is the resolved variant owning
//! whatever parameters it needs (domain length, thermal bath).

use crate::error::BoundaryError;
use crate::thermal::ThermalBath;
use std::fmt;
use std::str::FromStr;
use yeepic_core::{BoundaryOutcome, Face, ParticleState};

/// Selector for a face's policy, before parameters are attached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// Mirror the position across the wall and reverse the normal momentum.
    Reflecting,
    /// Re-enter through the opposite wall.
    Periodic,
    /// Mirror the position and redraw momentum from a thermal bath.
    Thermalizing,
    /// No policy: the particle is handed back to the caller.
    #[default]
    Unset,
}

impl PolicyKind {
    /// Canonical configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Reflecting => "refl",
            Self::Periodic => "periodic",
            Self::Thermalizing => "thermalize",
            Self::Unset => "supp",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = BoundaryError;

    /// Accepts `refl`/`reflective`, `periodic`, `thermalize`, and
    /// `supp`/`none`/empty for an unset face.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "refl" | "reflective" => Ok(Self::Reflecting),
            "periodic" => Ok(Self::Periodic),
            "thermalize" => Ok(Self::Thermalizing),
            "supp" | "none" | "" => Ok(Self::Unset),
            other => Err(BoundaryError::UnknownPolicy {
                name: other.to_string(),
            }),
        }
    }
}

/// A resolved boundary policy for one face.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BoundaryPolicy {
    /// `x = mirror - x`, `p[axis] = -p[axis]`.
    Reflecting,
    /// `x += max - min` through the lower face, `x -= max - min` through
    /// the upper. A wrap that rounds onto or past the opposite wall lands
    /// on `min`, so the result always lies in `[min, max)`.
    Periodic {
        /// Lower wall.
        min: f64,
        /// Upper wall.
        max: f64,
    },
    /// Reflecting position correction, then thermal momentum redraw.
    Thermalizing(ThermalBath),
    /// No-op; the engine reports [`BoundaryOutcome::Unhandled`].
    #[default]
    Unset,
}

impl BoundaryPolicy {
    /// The selector this policy was resolved from.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::Reflecting => PolicyKind::Reflecting,
            Self::Periodic { .. } => PolicyKind::Periodic,
            Self::Thermalizing(_) => PolicyKind::Thermalizing,
            Self::Unset => PolicyKind::Unset,
        }
    }

    /// `true` for [`BoundaryPolicy::Unset`].
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Apply this policy to a particle that crossed `face` of `axis`.
    ///
    /// `wall_mirror` is twice the crossed wall's coordinate. Returns
    /// [`BoundaryOutcome::Unhandled`] only for [`BoundaryPolicy::Unset`],
    /// which leaves the particle untouched.
    #[inline]
    pub fn apply<P: ParticleState + ?Sized>(
        &self,
        particle: &mut P,
        axis: usize,
        face: Face,
        wall_mirror: f64,
    ) -> BoundaryOutcome {
        match self {
            Self::Reflecting => {
                reflect_position(particle, axis, wall_mirror);
                let p = particle.momentum_mut(axis);
                *p = -*p;
            }
            Self::Periodic { min, max } => {
                let length = max - min;
                let x = particle.position_mut(axis);
                match face {
                    Face::Lower => {
                        *x += length;
                        if *x >= *max {
                            *x = *min;
                        }
                    }
                    Face::Upper => {
                        *x -= length;
                        if *x < *min {
                            *x = *min;
                        }
                    }
                }
            }
            Self::Thermalizing(bath) => {
                reflect_position(particle, axis, wall_mirror);
                bath.redraw(particle, axis, face);
            }
            Self::Unset => return BoundaryOutcome::Unhandled,
        }
        BoundaryOutcome::Kept
    }
}

#[inline]
fn reflect_position<P: ParticleState + ?Sized>(particle: &mut P, axis: usize, wall_mirror: f64) {
    let x = particle.position_mut(axis);
    *x = wall_mirror - *x;
}
