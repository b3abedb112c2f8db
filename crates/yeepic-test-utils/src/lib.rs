//! Test utilities and mock types for yeepic development.
//!
//! Provides [`CountingParticle`], a [`ParticleState`] implementation that
//! records every mutable access, plus particle and grid fixtures in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use yeepic_core::{Particle, ParticleId, ParticleState};

/// Wraps a [`Particle`] and counts mutable accesses.
///
/// Boundary code that must leave a particle untouched (in-bounds
/// particles, unset faces) should report zero writes.
#[derive(Clone, Debug)]
pub struct CountingParticle {
    inner: Particle,
    position_writes: usize,
    momentum_writes: usize,
}

impl CountingParticle {
    pub fn new(inner: Particle) -> Self {
        Self {
            inner,
            position_writes: 0,
            momentum_writes: 0,
        }
    }

    pub fn position_writes(&self) -> usize {
        self.position_writes
    }

    pub fn momentum_writes(&self) -> usize {
        self.momentum_writes
    }

    /// Total mutable accesses of either kind.
    pub fn writes(&self) -> usize {
        self.position_writes + self.momentum_writes
    }

    pub fn inner(&self) -> &Particle {
        &self.inner
    }

    pub fn into_inner(self) -> Particle {
        self.inner
    }
}

impl ParticleState for CountingParticle {
    fn id(&self) -> ParticleId {
        self.inner.id()
    }

    fn position_dims(&self) -> usize {
        self.inner.position_dims()
    }

    fn position(&self, axis: usize) -> f64 {
        self.inner.position(axis)
    }

    fn position_mut(&mut self, axis: usize) -> &mut f64 {
        self.position_writes += 1;
        self.inner.position_mut(axis)
    }

    fn momentum(&self, component: usize) -> f64 {
        self.inner.momentum(component)
    }

    fn momentum_mut(&mut self, component: usize) -> &mut f64 {
        self.momentum_writes += 1;
        self.inner.momentum_mut(component)
    }
}
