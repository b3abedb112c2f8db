//! The particle seam used by boundary enforcement.
//!
//! Particle storage belongs to the (external) species container and
//! pusher. Boundary code only needs to read and overwrite individual
//! position and momentum components, so it works through
//! [`ParticleState`] rather than a concrete layout.

use crate::id::{ParticleId, MAX_AXES, MOMENTUM_DIMS};
use smallvec::SmallVec;

/// Mutable component access to a single particle.
///
/// Axis and component indices are always within the ranges reported
/// by [`position_dims`](ParticleState::position_dims) and
/// [`MOMENTUM_DIMS`]; callers in this workspace never index outside
/// them.
pub trait ParticleState {
    /// Stable identifier of this particle.
    fn id(&self) -> ParticleId;

    /// Number of position coordinates (1..=3).
    fn position_dims(&self) -> usize;

    /// Position coordinate along `axis`.
    fn position(&self, axis: usize) -> f64;

    /// Mutable position coordinate along `axis`.
    fn position_mut(&mut self, axis: usize) -> &mut f64;

    /// Momentum component `component` (0..3).
    fn momentum(&self, component: usize) -> f64;

    /// Mutable momentum component `component` (0..3).
    fn momentum_mut(&mut self, component: usize) -> &mut f64;
}

/// A plain particle record: 1–3 position coordinates, three momentum
/// components, and an id.
///
/// # Examples
///
/// ```
/// use yeepic_core::{Particle, ParticleId, ParticleState};
///
/// let mut p = Particle::new(ParticleId(7), &[0.5, 1.5], [0.1, 0.0, -0.2]);
/// assert_eq!(p.position_dims(), 2);
/// *p.position_mut(1) += 1.0;
/// assert_eq!(p.position(1), 2.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    id: ParticleId,
    position: SmallVec<[f64; MAX_AXES]>,
    momentum: [f64; MOMENTUM_DIMS],
}

impl Particle {
    /// Create a particle from its position coordinates and momentum.
    ///
    /// # Panics
    ///
    /// Panics if `position` is empty or longer than [`MAX_AXES`].
    pub fn new(id: ParticleId, position: &[f64], momentum: [f64; MOMENTUM_DIMS]) -> Self {
        assert!(
            !position.is_empty() && position.len() <= MAX_AXES,
            "particle position must have 1..={MAX_AXES} coordinates, got {}",
            position.len(),
        );
        Self {
            id,
            position: SmallVec::from_slice(position),
            momentum,
        }
    }

    /// All position coordinates.
    pub fn positions(&self) -> &[f64] {
        &self.position
    }

    /// All momentum components.
    pub fn momenta(&self) -> &[f64; MOMENTUM_DIMS] {
        &self.momentum
    }
}

impl ParticleState for Particle {
    fn id(&self) -> ParticleId {
        self.id
    }

    fn position_dims(&self) -> usize {
        self.position.len()
    }

    #[inline]
    fn position(&self, axis: usize) -> f64 {
        self.position[axis]
    }

    #[inline]
    fn position_mut(&mut self, axis: usize) -> &mut f64 {
        &mut self.position[axis]
    }

    #[inline]
    fn momentum(&self, component: usize) -> f64 {
        self.momentum[component]
    }

    #[inline]
    fn momentum_mut(&mut self, component: usize) -> &mut f64 {
        &mut self.momentum[component]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_round_trip_components() {
        let mut p = Particle::new(ParticleId(3), &[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]);
        assert_eq!(p.id(), ParticleId(3));
        assert_eq!(p.position_dims(), 3);
        *p.momentum_mut(2) = -6.0;
        assert_eq!(p.momentum(2), -6.0);
        assert_eq!(p.positions(), &[1.0, 2.0, 3.0]);
        assert_eq!(p.momenta(), &[4.0, 5.0, -6.0]);
    }

    #[test]
    #[should_panic(expected = "1..=3 coordinates")]
    fn empty_position_panics() {
        let _ = Particle::new(ParticleId(0), &[], [0.0; 3]);
    }

    #[test]
    #[should_panic(expected = "got 4")]
    fn four_coordinates_panic() {
        let _ = Particle::new(ParticleId(0), &[0.0; 4], [0.0; 3]);
    }
}
