//! yeepic: staggered-grid field storage and particle boundary
//! enforcement for particle-in-cell plasma simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all yeepic sub-crates, plus [`PicDomain`], which wires them together
//! for one spatial domain.
//!
//! # Quick start
//!
//! ```rust
//! use yeepic::prelude::*;
//!
//! let mut params = SimulationParams {
//!     geometry: "1d3v".into(),
//!     timestep: 0.05,
//!     sim_time: 1.0,
//!     cell_length: vec![0.1],
//!     sim_length: vec![1.0],
//!     seed: 42,
//!     species: Default::default(),
//! };
//! params
//!     .add_species("electron", SpeciesParams::new(1.0).with_boundaries("refl", "periodic"))
//!     .unwrap();
//!
//! let domain = PicDomain::new(params).unwrap();
//! assert_eq!(domain.fields().get(YeeComponent::Rho).sizes(), &[11]);
//! assert_eq!(domain.fields().get(YeeComponent::Ex).sizes(), &[12]);
//!
//! let mut electrons = vec![Particle::new(ParticleId(0), &[1.25], [0.1, 0.0, 0.0])];
//! let mut unhandled = Vec::new();
//! let engine = domain.engine("electron").unwrap();
//! engine.apply_batch(&mut electrons, &mut unhandled);
//! assert!(unhandled.is_empty());
//! assert!((electrons[0].position(0) - 0.25).abs() < 1e-12);
//!
//! let mut sink = SnapshotWriter::new(Vec::new());
//! domain.dump(&mut sink, YeeComponent::Ex).unwrap();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `yeepic-core` | Particle seam, ids, faces, geometry |
//! | [`grid`] | `yeepic-grid` | Staggered grids and the Yee field set |
//! | [`boundary`] | `yeepic-boundary` | Boundary policies and the per-species engine |
//! | [`config`] | `yeepic-config` | Simulation and species parameters |
//! | [`dump`] | `yeepic-dump` | Text snapshots and grid hashing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod domain;
pub mod error;

pub use domain::PicDomain;
pub use error::InitError;

/// Core types, traits, and IDs (`yeepic-core`).
///
/// Contains the [`types::ParticleState`] seam every boundary operation
/// goes through, and the [`types::Particle`] record implementing it.
pub use yeepic_core as types;

/// Staggered grid storage (`yeepic-grid`).
pub use yeepic_grid as grid;

/// Particle boundary policies (`yeepic-boundary`).
///
/// [`boundary::BoundaryConditionEngine`] is usually built from
/// configuration via
/// [`SimulationParams::boundary_engine`](config::SimulationParams::boundary_engine).
pub use yeepic_boundary as boundary;

/// Simulation parameters and validation (`yeepic-config`).
pub use yeepic_config as config;

/// Grid snapshots (`yeepic-dump`).
///
/// Write with [`dump::SnapshotWriter`], read back with
/// [`dump::SnapshotReader`], compare runs with [`dump::grid_hash`].
pub use yeepic_dump as dump;

/// Common imports for typical yeepic usage.
///
/// ```rust
/// use yeepic::prelude::*;
/// ```
pub mod prelude {
    // Domain
    pub use crate::{InitError, PicDomain};

    // Core types and traits
    pub use yeepic_core::{BoundaryOutcome, Face, Geometry, Particle, ParticleId, ParticleState};

    // Grid
    pub use yeepic_grid::{StaggeredGrid, Staggering, YeeComponent, YeeFields};

    // Boundary
    pub use yeepic_boundary::{BoundaryConditionEngine, BoundaryPolicy, PolicyKind, ThermalBath};

    // Configuration
    pub use yeepic_config::{SimulationParams, SpeciesParams};

    // Snapshots
    pub use yeepic_dump::{grid_hash, SnapshotReader, SnapshotWriter};

    // Errors
    pub use yeepic_boundary::BoundaryError;
    pub use yeepic_config::ConfigError;
    pub use yeepic_dump::DumpError;
    pub use yeepic_grid::GridError;
}
