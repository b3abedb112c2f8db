//! Error types for boundary policy and engine construction.

use std::error::Error;
use std::fmt;
use yeepic_core::Face;

/// Errors detected while building boundary policies or an engine.
///
/// All of these are configuration errors caught at initialisation;
/// [`BoundaryConditionEngine::apply`](crate::BoundaryConditionEngine::apply)
/// itself never fails.
#[derive(Clone, Debug, PartialEq)]
pub enum BoundaryError {
    /// The engine was built without any axis.
    NoAxes,
    /// More axes were configured than the toolkit supports.
    TooManyAxes {
        /// Number of axes supplied.
        count: usize,
    },
    /// Wall coordinates are not finite or not ordered `min < max`.
    InvalidWalls {
        /// Axis with the bad walls.
        axis: usize,
        /// Lower wall.
        min: f64,
        /// Upper wall.
        max: f64,
    },
    /// A thermal temperature component is negative or not finite.
    InvalidTemperature {
        /// Momentum component.
        component: usize,
        /// The offending temperature.
        value: f64,
    },
    /// The thermal bath mass is not finite and positive.
    InvalidMass {
        /// The offending mass.
        value: f64,
    },
    /// A policy name is not part of the known vocabulary.
    UnknownPolicy {
        /// The unrecognised name.
        name: String,
    },
    /// A face selects thermalizing but no thermal bath was supplied.
    MissingThermalBath {
        /// Axis of the face.
        axis: usize,
        /// The face.
        face: Face,
    },
    /// A species asks for more spatial axes than were configured.
    DimensionalityExceeded {
        /// Axes requested by the species.
        requested: usize,
        /// Axes configured.
        available: usize,
    },
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAxes => write!(f, "boundary engine needs at least one axis"),
            Self::TooManyAxes { count } => {
                write!(f, "{count} axes configured, at most 3 supported")
            }
            Self::InvalidWalls { axis, min, max } => {
                write!(f, "axis {axis}: walls must be finite with min < max, got [{min}, {max}]")
            }
            Self::InvalidTemperature { component, value } => {
                write!(
                    f,
                    "thermal temperature[{component}] must be finite and >= 0, got {value}"
                )
            }
            Self::InvalidMass { value } => {
                write!(f, "thermal bath mass must be finite and > 0, got {value}")
            }
            Self::UnknownPolicy { name } => write!(f, "unknown boundary policy '{name}'"),
            Self::MissingThermalBath { axis, face } => {
                write!(f, "axis {axis} {face} face is thermalizing but no thermal bath is set")
            }
            Self::DimensionalityExceeded {
                requested,
                available,
            } => {
                write!(
                    f,
                    "species needs {requested} axes but only {available} are configured"
                )
            }
        }
    }
}

impl Error for BoundaryError {}
