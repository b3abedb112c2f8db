//! Errors raised while setting up a [`PicDomain`](crate::PicDomain).

use std::error::Error;
use std::fmt;

use yeepic_config::ConfigError;
use yeepic_grid::GridError;

/// Any failure of domain initialisation.
///
/// Every variant is fatal for the run: the driver reports the message
/// and stops before the first step.
#[derive(Debug)]
pub enum InitError {
    /// Parameters failed validation, including a species' boundary
    /// engine (see [`ConfigError::Boundary`]).
    Config(ConfigError),
    /// Field storage could not be allocated.
    Grid(GridError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for InitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for InitError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
