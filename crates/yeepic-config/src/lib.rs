//! Simulation parameters for the yeepic particle-in-cell toolkit.
//!
//! [`SimulationParams`] holds the domain geometry, time stepping and
//! species registry. [`validate()`](SimulationParams::validate) checks
//! every structural rule once at startup;
//! [`discretize()`](SimulationParams::discretize) snaps the physical
//! extents to whole cells and whole steps. Per-species boundary engines
//! are built from the validated parameters with
//! [`boundary_engine()`](SimulationParams::boundary_engine).

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod params;
pub mod species;

pub use error::ConfigError;
pub use params::SimulationParams;
pub use species::{SpeciesParams, MAX_THERMAL_VELOCITY};
