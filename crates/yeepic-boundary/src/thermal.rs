//! Thermal re-injection of particles at a wall.
//!
//! A thermalizing wall reflects the particle's position and redraws its
//! momentum from a Maxwellian at the wall temperature. The component
//! normal to the wall follows the flux-weighted distribution
//! `v_th * sqrt(-ln U)` and points back into the domain; tangential
//! components are Gaussian with standard deviation `v_th / sqrt(2)`,
//! where `v_th = sqrt(2 T / m)`.
//!
//! Respects the determinism contract: every draw uses a ChaCha8 RNG
//! seeded from `seed XOR particle id XOR position bits`, so identical
//! particles at identical positions always receive identical momenta
//! and no state is shared between calls.

use crate::error::BoundaryError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::FRAC_1_SQRT_2;
use yeepic_core::{Face, ParticleState, MOMENTUM_DIMS};

/// Temperature, mass and seed of a thermalizing wall.
#[derive(Clone, Debug, PartialEq)]
pub struct ThermalBath {
    temperature: [f64; MOMENTUM_DIMS],
    thermal_velocity: [f64; MOMENTUM_DIMS],
    seed: u64,
}

impl ThermalBath {
    /// Create a bath from per-component temperatures and the species mass.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any temperature is negative or not finite, or if
    /// `mass` is not finite and positive.
    pub fn new(
        temperature: [f64; MOMENTUM_DIMS],
        mass: f64,
        seed: u64,
    ) -> Result<Self, BoundaryError> {
        for (component, &value) in temperature.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(BoundaryError::InvalidTemperature { component, value });
            }
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(BoundaryError::InvalidMass { value: mass });
        }
        let thermal_velocity = temperature.map(|t| (2.0 * t / mass).sqrt());
        Ok(Self {
            temperature,
            thermal_velocity,
            seed,
        })
    }

    /// Same temperature on every component.
    pub fn isotropic(temperature: f64, mass: f64, seed: u64) -> Result<Self, BoundaryError> {
        Self::new([temperature; MOMENTUM_DIMS], mass, seed)
    }

    /// Per-component temperatures.
    pub fn temperature(&self) -> &[f64; MOMENTUM_DIMS] {
        &self.temperature
    }

    /// Per-component thermal velocity `sqrt(2 T / m)`.
    pub fn thermal_velocity(&self) -> &[f64; MOMENTUM_DIMS] {
        &self.thermal_velocity
    }

    /// Seed offset for the per-particle RNG.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Redraw every momentum component of a particle that has just been
    /// reflected off `face` of `axis`.
    pub(crate) fn redraw<P: ParticleState + ?Sized>(&self, particle: &mut P, axis: usize, face: Face) {
        let mut rng = ChaCha8Rng::seed_from_u64(
            self.seed ^ particle.id().0 ^ particle.position(axis).to_bits(),
        );
        for component in 0..MOMENTUM_DIMS {
            let v_th = self.thermal_velocity[component];
            *particle.momentum_mut(component) = if component == axis {
                let u: f64 = rng.random::<f64>().max(1e-300); // avoid ln(0)
                face.inward_sign() * v_th * (-u.ln()).sqrt()
            } else {
                v_th * FRAC_1_SQRT_2 * box_muller(&mut rng)
            };
        }
    }
}

/// Standard normal sample via the Box-Muller transform.
/// Avoids the `rand_distr` dependency.
fn box_muller(rng: &mut ChaCha8Rng) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-300);
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use yeepic_core::{Particle, ParticleId};

    #[test]
    fn thermal_velocity_is_sqrt_two_t_over_m() {
        let bath = ThermalBath::new([0.02, 0.08, 0.0], 2.0, 0).unwrap();
        let v = bath.thermal_velocity();
        assert!((v[0] - 0.1414213562373095).abs() < 1e-12);
        assert!((v[1] - 0.2828427124746190).abs() < 1e-12);
        assert_eq!(v[2], 0.0);
    }

    #[test]
    fn rejects_negative_temperature() {
        assert_eq!(
            ThermalBath::new([0.1, -0.1, 0.1], 1.0, 0),
            Err(BoundaryError::InvalidTemperature {
                component: 1,
                value: -0.1
            })
        );
    }

    #[test]
    fn rejects_non_positive_mass() {
        assert_eq!(
            ThermalBath::isotropic(0.1, 0.0, 0),
            Err(BoundaryError::InvalidMass { value: 0.0 })
        );
        assert!(ThermalBath::isotropic(0.1, f64::NAN, 0).is_err());
    }

    #[test]
    fn normal_component_points_inward() {
        let bath = ThermalBath::isotropic(0.01, 1.0, 42).unwrap();
        for id in 0..64u64 {
            let mut lower = Particle::new(ParticleId(id), &[0.1, 0.5], [0.0; 3]);
            bath.redraw(&mut lower, 0, Face::Lower);
            assert!(lower.momentum(0) >= 0.0);

            let mut upper = Particle::new(ParticleId(id), &[0.5, 0.9], [0.0; 3]);
            bath.redraw(&mut upper, 1, Face::Upper);
            assert!(upper.momentum(1) <= 0.0);
        }
    }

    #[test]
    fn redraw_is_deterministic() {
        let bath = ThermalBath::isotropic(0.01, 1.0, 7).unwrap();
        let mut a = Particle::new(ParticleId(5), &[0.25], [1.0, 1.0, 1.0]);
        let mut b = a.clone();
        bath.redraw(&mut a, 0, Face::Lower);
        bath.redraw(&mut b, 0, Face::Lower);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_temperature_stops_particle() {
        let bath = ThermalBath::isotropic(0.0, 1.0, 0).unwrap();
        let mut p = Particle::new(ParticleId(1), &[0.25], [0.3, -0.2, 0.1]);
        bath.redraw(&mut p, 0, Face::Lower);
        assert_eq!(p.momenta(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn tangential_spread_matches_temperature() {
        let bath = ThermalBath::isotropic(0.02, 1.0, 99).unwrap();
        let n = 4000u64;
        let mut sum_sq = 0.0;
        for id in 0..n {
            let mut p = Particle::new(ParticleId(id), &[0.5], [0.0; 3]);
            bath.redraw(&mut p, 0, Face::Lower);
            sum_sq += p.momentum(1) * p.momentum(1);
        }
        // Variance of a tangential component is T / m.
        let variance = sum_sq / n as f64;
        assert!((variance - 0.02).abs() < 0.003, "variance {variance}");
    }
}
