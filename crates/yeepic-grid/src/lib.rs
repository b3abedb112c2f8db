//! Staggered grid storage for yeepic simulations.
//!
//! This crate defines [`StaggeredGrid`], the contiguous storage for one
//! field component on a mesh whose axes are each either primal (samples
//! at cell indices) or dual (samples at half-cell offsets, one extra
//! point). The [`stagger`] module holds the Yee staggering rule and
//! [`yee`] builds the full electromagnetic component set from it.
//!
//! # Layout
//!
//! Values are stored row-major with axis 0 slowest. A "row" is the
//! contiguous block sharing one axis-0 index; [`StaggeredGrid::dump_rows`]
//! writes rows as whitespace-separated text.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod stagger;
pub mod yee;

pub use error::GridError;
pub use grid::StaggeredGrid;
pub use stagger::{staggering_for, Staggering};
pub use yee::{YeeComponent, YeeFields};
