//! Error types for grid allocation and dumping.

use std::fmt;
use std::io;

/// Errors arising from grid allocation, indexing, or row dumps.
#[derive(Debug)]
pub enum GridError {
    /// The supplied dimension list does not match the grid's rank.
    RankMismatch {
        /// Rank the grid was created with.
        expected: usize,
        /// Number of dimensions supplied.
        found: usize,
    },
    /// The requested rank is outside `1..=3`.
    UnsupportedRank {
        /// The offending rank.
        rank: usize,
    },
    /// An axis was given zero cells.
    EmptyAxis {
        /// The zero-length axis.
        axis: usize,
    },
    /// Stored sizes overflow `usize` or exceed the largest allocatable buffer.
    TooLarge {
        /// Axis at which the size or running product overflowed.
        axis: usize,
    },
    /// The staggering main axis is not one of the three physical axes.
    InvalidMainAxis {
        /// The offending axis.
        axis: usize,
    },
    /// The grid has no storage yet.
    NotAllocated,
    /// A dump asked for more rows than axis 0 holds.
    RowCountOutOfRange {
        /// Rows requested.
        requested: usize,
        /// Rows available along axis 0.
        available: usize,
    },
    /// Writing a dump to its sink failed.
    Io(io::Error),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RankMismatch { expected, found } => {
                write!(f, "alloc error: dims must have {expected} entries, got {found}")
            }
            Self::UnsupportedRank { rank } => {
                write!(f, "grid rank {rank} not supported (expected 1..=3)")
            }
            Self::EmptyAxis { axis } => write!(f, "axis {axis} has zero cells"),
            Self::TooLarge { axis } => {
                write!(f, "alloc error: grid size overflows at axis {axis}")
            }
            Self::InvalidMainAxis { axis } => {
                write!(f, "main axis {axis} out of range (expected 0..3)")
            }
            Self::NotAllocated => write!(f, "grid has no storage"),
            Self::RowCountOutOfRange {
                requested,
                available,
            } => {
                write!(
                    f,
                    "cannot dump {requested} rows, axis 0 has {available}"
                )
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GridError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
