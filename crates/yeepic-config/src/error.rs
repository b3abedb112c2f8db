//! Error types for parameter validation.

use std::error::Error;
use std::fmt;

use yeepic_boundary::BoundaryError;
use yeepic_core::{Face, GeometryError};

/// Errors detected by [`SimulationParams::validate()`](crate::SimulationParams::validate)
/// and the constructors built on it.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The geometry name is not one of `1d3v`, `2d3v`, `3d3v`, `2drz`.
    UnknownGeometry(GeometryError),
    /// A per-axis list has the wrong number of entries for the geometry.
    DimensionMismatch {
        /// Which parameter (`cell_length`, `sim_length`).
        what: &'static str,
        /// Entries required by the geometry.
        expected: usize,
        /// Entries supplied.
        found: usize,
    },
    /// The timestep is not finite and positive.
    InvalidTimestep {
        /// The offending timestep.
        value: f64,
    },
    /// The timestep exceeds the Courant limit of the cell lengths.
    CflViolation {
        /// The configured timestep.
        timestep: f64,
        /// `1 / sqrt(sum(1 / dx^2))`.
        limit: f64,
    },
    /// A length or duration is not finite and positive.
    InvalidLength {
        /// Which parameter.
        what: &'static str,
        /// Axis, or 0 for scalars.
        axis: usize,
        /// The offending value.
        value: f64,
    },
    /// A species was registered with an empty name.
    EmptySpeciesName,
    /// Two species share a name.
    DuplicateSpecies {
        /// The repeated name.
        name: String,
    },
    /// A species mass is not finite and positive.
    InvalidMass {
        /// Species name.
        species: String,
        /// The offending mass.
        value: f64,
    },
    /// A species has no boundary policy for a face of a particle axis.
    MissingBoundary {
        /// Species name.
        species: String,
        /// Axis missing a policy.
        axis: usize,
        /// Face missing a policy.
        face: Face,
    },
    /// A thermalizing face needs `thermal_temperature`, which is absent.
    MissingTemperature {
        /// Species name.
        species: String,
    },
    /// `thermal_temperature` has a component count other than 1 or 3.
    InvalidTemperature {
        /// Species name.
        species: String,
        /// Number of components supplied.
        count: usize,
    },
    /// `sqrt(2T/m)` exceeds the supported thermal velocity.
    ThermalVelocityTooHigh {
        /// Species name.
        species: String,
        /// Momentum component.
        component: usize,
        /// The computed thermal velocity.
        value: f64,
    },
    /// A species name was looked up but is not registered.
    SpeciesNotFound {
        /// The unknown name.
        name: String,
    },
    /// A species' boundary configuration was rejected.
    Boundary {
        /// Species name.
        species: String,
        /// The underlying error.
        source: BoundaryError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownGeometry(e) => write!(f, "geometry: {e}"),
            Self::DimensionMismatch {
                what,
                expected,
                found,
            } => {
                write!(f, "dimension of {what} ({found}) != {expected} for this geometry")
            }
            Self::InvalidTimestep { value } => {
                write!(f, "timestep must be finite and positive, got {value}")
            }
            Self::CflViolation { timestep, limit } => {
                write!(f, "CFL problem: timestep={timestep} should be smaller than {limit}")
            }
            Self::InvalidLength { what, axis, value } => {
                write!(f, "{what}[{axis}] must be finite and positive, got {value}")
            }
            Self::EmptySpeciesName => write!(f, "species name must not be empty"),
            Self::DuplicateSpecies { name } => write!(f, "species '{name}' is defined twice"),
            Self::InvalidMass { species, value } => {
                write!(f, "species '{species}': mass must be finite and positive, got {value}")
            }
            Self::MissingBoundary {
                species,
                axis,
                face,
            } => {
                let label = face.compass_name(*axis).unwrap_or("?");
                write!(
                    f,
                    "species '{species}': no boundary policy for the {label} face of axis {axis}"
                )
            }
            Self::MissingTemperature { species } => write!(
                f,
                "species '{species}': thermal_temperature must be defined for a thermalizing boundary"
            ),
            Self::InvalidTemperature { species, count } => write!(
                f,
                "species '{species}': thermal_temperature needs 1 or 3 components, got {count}"
            ),
            Self::ThermalVelocityTooHigh {
                species,
                component,
                value,
            } => write!(
                f,
                "species '{species}': thermal velocity[{component}] = {value} exceeds {}",
                crate::MAX_THERMAL_VELOCITY
            ),
            Self::SpeciesNotFound { name } => write!(f, "species '{name}' does not exist"),
            Self::Boundary { species, source } => write!(f, "species '{species}': {source}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownGeometry(e) => Some(e),
            Self::Boundary { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<GeometryError> for ConfigError {
    fn from(e: GeometryError) -> Self {
        Self::UnknownGeometry(e)
    }
}
