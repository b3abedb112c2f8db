//! Particle boundary conditions for the yeepic particle-in-cell toolkit.
//!
//! Each species owns a [`BoundaryConditionEngine`] holding one
//! [`AxisBoundary`] per spatial axis. Every step the pusher hands each
//! particle to [`BoundaryConditionEngine::apply`], which resolves the
//! first wall violation with that face's [`BoundaryPolicy`]:
//!
//! | Policy | Position | Momentum |
//! |---|---|---|
//! | [`Reflecting`](BoundaryPolicy::Reflecting) | mirrored across the wall | normal component negated |
//! | [`Periodic`](BoundaryPolicy::Periodic) | shifted by the domain length | unchanged |
//! | [`Thermalizing`](BoundaryPolicy::Thermalizing) | mirrored across the wall | redrawn from a [`ThermalBath`] |
//! | [`Unset`](BoundaryPolicy::Unset) | unchanged | unchanged, reported unhandled |
//!
//! Particles reported [`Unhandled`](yeepic_core::BoundaryOutcome::Unhandled)
//! belong to the caller (exchange with a neighbouring subdomain, or removal).

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod engine;
pub mod error;
pub mod policy;
pub mod thermal;

pub use engine::{AxisBoundary, BoundaryConditionEngine, BoundaryConditionEngineBuilder};
pub use error::BoundaryError;
pub use policy::{BoundaryPolicy, PolicyKind};
pub use thermal::ThermalBath;
