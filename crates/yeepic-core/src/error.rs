//! Error types for core vocabulary parsing.

use std::error::Error;
use std::fmt;

/// Errors from interpreting a geometry name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// The geometry name is not one of `1d3v`, `2d3v`, `3d3v`, `2drz`.
    Unknown {
        /// The offending name.
        name: String,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { name } => write!(f, "geometry '{name}' does not exist"),
        }
    }
}

impl Error for GeometryError {}
