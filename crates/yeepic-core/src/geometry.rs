//! Simulation geometry: how many field and particle axes are resolved.

use crate::error::GeometryError;
use std::fmt;
use std::str::FromStr;

/// Spatial geometry of a simulation.
///
/// All geometries carry three momentum components; they differ in the
/// number of resolved spatial axes for fields and particle positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Geometry {
    /// One spatial axis, three velocity components (`"1d3v"`).
    OneD3V,
    /// Two spatial axes, three velocity components (`"2d3v"`).
    TwoD3V,
    /// Three spatial axes, three velocity components (`"3d3v"`).
    ThreeD3V,
    /// Cylindrical: fields on `(x, r)`, particles at Cartesian
    /// `(x, y, z)` (`"2drz"`).
    TwoDRZ,
}

impl Geometry {
    /// Number of axes on which fields are discretised.
    pub fn field_dims(self) -> usize {
        match self {
            Self::OneD3V => 1,
            Self::TwoD3V | Self::TwoDRZ => 2,
            Self::ThreeD3V => 3,
        }
    }

    /// Number of position coordinates each particle carries.
    pub fn particle_dims(self) -> usize {
        match self {
            Self::TwoDRZ => 3,
            other => other.field_dims(),
        }
    }

    /// Field axis whose extent bounds particle axis `axis`.
    ///
    /// Cartesian geometries map axes one to one. In `2drz` both
    /// transverse particle axes are bounded by the radial field axis.
    /// `None` past [`particle_dims`](Self::particle_dims).
    pub fn field_axis_of(self, axis: usize) -> Option<usize> {
        if axis >= self.particle_dims() {
            return None;
        }
        Some(match self {
            Self::TwoDRZ => axis.min(1),
            _ => axis,
        })
    }

    /// `true` when particle axis `axis` is a transverse Cartesian
    /// coordinate of a radial field axis, spanning `[-r, r]`.
    pub fn is_transverse(self, axis: usize) -> bool {
        self == Self::TwoDRZ && (axis == 1 || axis == 2)
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::OneD3V => "1d3v",
            Self::TwoD3V => "2d3v",
            Self::ThreeD3V => "3d3v",
            Self::TwoDRZ => "2drz",
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Geometry {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d3v" => Ok(Self::OneD3V),
            "2d3v" => Ok(Self::TwoD3V),
            "3d3v" => Ok(Self::ThreeD3V),
            "2drz" => Ok(Self::TwoDRZ),
            other => Err(GeometryError::Unknown {
                name: other.to_string(),
            }),
        }
    }
}
