//! Text snapshots of staggered grids.
//!
//! Diagnostic dumps of [`StaggeredGrid`](yeepic_grid::StaggeredGrid)
//! storage, written after the field solver has finished a step.
//!
//! - [`SnapshotWriter`] streams row dumps to any `Write` sink
//! - [`SnapshotReader`] parses them back from any `BufRead` source
//! - [`grid_hash`] fingerprints a grid for determinism checks
//!
//! # Format
//!
//! ```text
//! v[0][0] v[0][1] ... v[0][n-1]
//! v[1][0] v[1][1] ... v[1][n-1]
//! ...
//! ```
//!
//! One line per row of the first axis, cells in row-major order,
//! separated by a single space. Values use the shortest decimal form
//! that parses back to the same `f64`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hash;
pub mod reader;
pub mod writer;

pub use error::DumpError;
pub use hash::grid_hash;
pub use reader::{RowIter, SnapshotReader};
pub use writer::SnapshotWriter;
