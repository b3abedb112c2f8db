//! Core types and traits for the yeepic particle-in-cell toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the grid, boundary, and configuration
//! crates: axis and face identifiers, the simulation [`Geometry`],
//! the [`ParticleState`] seam through which boundary policies mutate
//! particles, and the two-valued [`BoundaryOutcome`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod id;
pub mod particle;

pub use error::GeometryError;
pub use geometry::Geometry;
pub use id::{BoundaryOutcome, Face, GridIndex, ParticleId, MAX_AXES, MOMENTUM_DIMS};
pub use particle::{Particle, ParticleState};
