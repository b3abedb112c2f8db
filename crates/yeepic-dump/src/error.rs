//! Error types for snapshot dumps.

use std::fmt;
use std::io;
use std::path::PathBuf;

use yeepic_grid::GridError;

/// Errors that can occur while writing or reading snapshots.
#[derive(Debug)]
pub enum DumpError {
    /// The snapshot file could not be created.
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The grid refused the dump request.
    Grid(GridError),
    /// A token is not a decimal floating-point number.
    Parse {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// The stream ended before the requested number of rows.
    Truncated {
        /// Rows requested.
        expected: usize,
        /// Rows available.
        found: usize,
    },
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot open snapshot file {}: {source}", path.display())
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Parse { line, token } => {
                write!(f, "line {line}: '{token}' is not a number")
            }
            Self::Truncated { expected, found } => {
                write!(f, "snapshot truncated: expected {expected} rows, found {found}")
            }
        }
    }
}

impl std::error::Error for DumpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DumpError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for DumpError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::Io(io) => Self::Io(io),
            other => Self::Grid(other),
        }
    }
}
