//! Per-species parameters relevant to boundary enforcement.

use crate::error::ConfigError;
use yeepic_boundary::{PolicyKind, ThermalBath};
use yeepic_core::{Face, MOMENTUM_DIMS};

/// Largest thermal velocity `sqrt(2T/m)` a thermalizing wall supports,
/// in units of the speed of light.
pub const MAX_THERMAL_VELOCITY: f64 = 0.3;

/// Parameters of one particle species.
///
/// Boundary policies are given by name, one `(lower, upper)` pair per
/// particle axis in axis order (`west/east`, `south/north`,
/// `bottom/up`). Names are resolved by [`PolicyKind`]'s `FromStr`.
///
/// # Examples
///
/// ```
/// use yeepic_config::SpeciesParams;
///
/// let electrons = SpeciesParams::new(1.0)
///     .with_boundaries("thermalize", "refl")
///     .with_boundaries("periodic", "periodic")
///     .with_thermal_temperature(&[1e-3]);
/// assert_eq!(electrons.temperature(), Some([1e-3; 3]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SpeciesParams {
    /// Particle mass in units of the electron mass.
    pub mass: f64,
    /// `(lower, upper)` policy names per particle axis.
    pub boundaries: Vec<(String, String)>,
    /// Wall temperature: one value (all components) or three.
    pub thermal_temperature: Option<Vec<f64>>,
}

impl SpeciesParams {
    /// A species of the given mass with no boundaries configured yet.
    pub fn new(mass: f64) -> Self {
        Self {
            mass,
            boundaries: Vec::new(),
            thermal_temperature: None,
        }
    }

    /// Append the policy names of the next particle axis.
    pub fn with_boundaries(mut self, lower: impl Into<String>, upper: impl Into<String>) -> Self {
        self.boundaries.push((lower.into(), upper.into()));
        self
    }

    /// Set the thermalizing wall temperature.
    pub fn with_thermal_temperature(mut self, temperature: &[f64]) -> Self {
        self.thermal_temperature = Some(temperature.to_vec());
        self
    }

    /// Temperature broadcast to three components, if it has 1 or 3.
    pub fn temperature(&self) -> Option<[f64; MOMENTUM_DIMS]> {
        match self.thermal_temperature.as_deref()? {
            [t] => Some([*t; MOMENTUM_DIMS]),
            [x, y, z] => Some([*x, *y, *z]),
            _ => None,
        }
    }

    /// Resolve the policy selectors of the first `particle_dims` axes.
    pub fn policy_kinds(
        &self,
        species: &str,
        particle_dims: usize,
    ) -> Result<Vec<(PolicyKind, PolicyKind)>, ConfigError> {
        let parse = |name: &str| {
            name.parse::<PolicyKind>()
                .map_err(|source| ConfigError::Boundary {
                    species: species.to_string(),
                    source,
                })
        };
        (0..particle_dims)
            .map(|axis| {
                let (lower, upper) =
                    self.boundaries
                        .get(axis)
                        .ok_or_else(|| ConfigError::MissingBoundary {
                            species: species.to_string(),
                            axis,
                            face: Face::Lower,
                        })?;
                Ok((parse(lower.as_str())?, parse(upper.as_str())?))
            })
            .collect()
    }

    /// Thermal bath for this species' thermalizing walls, or `None` if
    /// no temperature is set.
    pub fn thermal_bath(&self, species: &str, seed: u64) -> Result<Option<ThermalBath>, ConfigError> {
        let Some(raw) = &self.thermal_temperature else {
            return Ok(None);
        };
        let temperature = self.temperature().ok_or_else(|| ConfigError::InvalidTemperature {
            species: species.to_string(),
            count: raw.len(),
        })?;
        ThermalBath::new(temperature, self.mass, seed)
            .map(Some)
            .map_err(|source| ConfigError::Boundary {
                species: species.to_string(),
                source,
            })
    }

    /// Check this species against a geometry with `particle_dims` axes.
    pub fn validate(&self, species: &str, particle_dims: usize) -> Result<(), ConfigError> {
        // 1. Mass.
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(ConfigError::InvalidMass {
                species: species.to_string(),
                value: self.mass,
            });
        }
        // 2. Every face of every particle axis has a known policy.
        let kinds = self.policy_kinds(species, particle_dims)?;
        if self.boundaries.len() > particle_dims {
            log::debug!(
                "species '{species}': ignoring boundaries beyond axis {}",
                particle_dims - 1
            );
        }
        // 3. Thermalizing faces need a temperature.
        let thermalizing = kinds
            .iter()
            .any(|&(lo, hi)| lo == PolicyKind::Thermalizing || hi == PolicyKind::Thermalizing);
        if thermalizing && self.thermal_temperature.is_none() {
            return Err(ConfigError::MissingTemperature {
                species: species.to_string(),
            });
        }
        // 4. Temperature shape, sign and thermal velocity.
        if let Some(bath) = self.thermal_bath(species, 0)? {
            for (component, &v) in bath.thermal_velocity().iter().enumerate() {
                if v > MAX_THERMAL_VELOCITY {
                    return Err(ConfigError::ThermalVelocityTooHigh {
                        species: species.to_string(),
                        component,
                        value: v,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yeepic_boundary::BoundaryError;

    fn reflecting_2d() -> SpeciesParams {
        SpeciesParams::new(1.0)
            .with_boundaries("refl", "refl")
            .with_boundaries("refl", "refl")
    }

    #[test]
    fn valid_species_passes() {
        assert!(reflecting_2d().validate("e", 2).is_ok());
    }

    #[test]
    fn three_component_temperature() {
        let sp = reflecting_2d().with_thermal_temperature(&[0.1, 0.2, 0.3]);
        assert_eq!(sp.temperature(), Some([0.1, 0.2, 0.3]));
    }

    #[test]
    fn two_component_temperature_is_rejected() {
        let sp = reflecting_2d().with_thermal_temperature(&[0.01, 0.01]);
        assert_eq!(sp.temperature(), None);
        assert_eq!(
            sp.validate("e", 2),
            Err(ConfigError::InvalidTemperature {
                species: "e".into(),
                count: 2
            })
        );
    }

    #[test]
    fn non_positive_mass_is_rejected() {
        let mut sp = reflecting_2d();
        sp.mass = -1.0;
        assert!(matches!(sp.validate("ion", 2), Err(ConfigError::InvalidMass { .. })));
    }

    #[test]
    fn missing_axis_is_reported() {
        let sp = SpeciesParams::new(1.0).with_boundaries("refl", "refl");
        assert_eq!(
            sp.validate("e", 2),
            Err(ConfigError::MissingBoundary {
                species: "e".into(),
                axis: 1,
                face: Face::Lower
            })
        );
    }

    #[test]
    fn unknown_policy_is_reported() {
        let sp = SpeciesParams::new(1.0).with_boundaries("refl", "absorb");
        assert_eq!(
            sp.validate("e", 1),
            Err(ConfigError::Boundary {
                species: "e".into(),
                source: BoundaryError::UnknownPolicy {
                    name: "absorb".into()
                }
            })
        );
    }

    #[test]
    fn thermalize_requires_temperature() {
        let sp = SpeciesParams::new(1.0).with_boundaries("thermalize", "refl");
        assert_eq!(
            sp.validate("e", 1),
            Err(ConfigError::MissingTemperature {
                species: "e".into()
            })
        );
    }

    #[test]
    fn hot_bath_is_rejected() {
        // sqrt(2 * 0.05 / 1) ~ 0.316 > 0.3
        let sp = SpeciesParams::new(1.0)
            .with_boundaries("thermalize", "thermalize")
            .with_thermal_temperature(&[0.05]);
        assert!(matches!(
            sp.validate("e", 1),
            Err(ConfigError::ThermalVelocityTooHigh { component: 0, .. })
        ));
    }

    #[test]
    fn heavy_species_tolerates_same_temperature() {
        let sp = SpeciesParams::new(1836.0)
            .with_boundaries("thermalize", "thermalize")
            .with_thermal_temperature(&[0.05]);
        assert!(sp.validate("p", 1).is_ok());
    }
}
