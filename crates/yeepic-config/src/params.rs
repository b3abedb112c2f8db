//! Domain, time-stepping and species parameters.

use indexmap::IndexMap;
use yeepic_boundary::BoundaryConditionEngine;
use yeepic_core::Geometry;

use crate::error::ConfigError;
use crate::species::SpeciesParams;

/// Complete parameter set of a simulation.
///
/// Build it as a struct literal, register species with
/// [`add_species`](Self::add_species), then call
/// [`discretize`](Self::discretize) once. Every constructor downstream
/// (grid allocation, boundary engines) assumes a validated set.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParams {
    /// Geometry name: `1d3v`, `2d3v`, `3d3v` or `2drz`.
    pub geometry: String,
    /// Time step, in units of the inverse plasma frequency.
    pub timestep: f64,
    /// Total simulated time.
    pub sim_time: f64,
    /// Cell size per field axis.
    pub cell_length: Vec<f64>,
    /// Domain extent per field axis.
    pub sim_length: Vec<f64>,
    /// Seed for every random draw in the run.
    pub seed: u64,
    /// Species by name; insertion order is the species index.
    pub species: IndexMap<String, SpeciesParams>,
}

impl SimulationParams {
    /// Parsed geometry.
    pub fn geometry(&self) -> Result<Geometry, ConfigError> {
        Ok(self.geometry.parse::<Geometry>()?)
    }

    /// Register a species under `name`, returning its index.
    pub fn add_species(
        &mut self,
        name: impl Into<String>,
        params: SpeciesParams,
    ) -> Result<usize, ConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptySpeciesName);
        }
        if self.species.contains_key(&name) {
            return Err(ConfigError::DuplicateSpecies { name });
        }
        let (index, _) = self.species.insert_full(name, params);
        Ok(index)
    }

    /// Courant limit `1 / sqrt(sum(1 / dx^2))` of the cell lengths.
    pub fn cfl_limit(&self) -> f64 {
        let inv_sq: f64 = self.cell_length.iter().map(|dx| 1.0 / (dx * dx)).sum();
        1.0 / inv_sq.sqrt()
    }

    /// Validate all structural invariants.
    ///
    /// Pure: nothing is redefined here, see [`discretize`](Self::discretize).
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Geometry must be known.
        let geometry = self.geometry()?;
        let dims = geometry.field_dims();
        // 2. Per-axis lists match the geometry.
        for (what, list) in [("cell_length", &self.cell_length), ("sim_length", &self.sim_length)] {
            if list.len() != dims {
                return Err(ConfigError::DimensionMismatch {
                    what,
                    expected: dims,
                    found: list.len(),
                });
            }
            for (axis, &value) in list.iter().enumerate() {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ConfigError::InvalidLength { what, axis, value });
                }
            }
        }
        // 3. Timestep is positive and within the CFL limit.
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(ConfigError::InvalidTimestep {
                value: self.timestep,
            });
        }
        let limit = self.cfl_limit();
        if self.timestep > limit {
            return Err(ConfigError::CflViolation {
                timestep: self.timestep,
                limit,
            });
        }
        // 4. Simulated time.
        if !self.sim_time.is_finite() || self.sim_time < 0.0 {
            return Err(ConfigError::InvalidLength {
                what: "sim_time",
                axis: 0,
                value: self.sim_time,
            });
        }
        // 5. Species.
        for (name, species) in &self.species {
            if name.is_empty() {
                return Err(ConfigError::EmptySpeciesName);
            }
            species.validate(name, geometry.particle_dims())?;
        }
        Ok(())
    }

    /// Cells per field axis, `round(sim_length / cell_length)`.
    pub fn n_space(&self) -> Vec<usize> {
        self.sim_length
            .iter()
            .zip(&self.cell_length)
            .map(|(l, dx)| (l / dx).round() as usize)
            .collect()
    }

    /// Primal node count per field axis, `n_space + 1`.
    pub fn primal_dims(&self) -> Vec<usize> {
        self.n_space()
            .into_iter()
            .map(|n| n.saturating_add(1))
            .collect()
    }

    /// Number of whole time steps, `floor(sim_time / timestep)`.
    pub fn n_time(&self) -> usize {
        (self.sim_time / self.timestep) as usize
    }

    /// Validate, then snap `sim_length` to whole cells and `sim_time` to
    /// whole steps. Each value that moves is logged at warn level.
    ///
    /// On error nothing is modified.
    pub fn discretize(&mut self) -> Result<(), ConfigError> {
        self.validate()?;
        let n_space = self.n_space();
        // Snapping must not shrink an axis to zero cells.
        if let Some(axis) = n_space.iter().position(|&n| n == 0) {
            return Err(ConfigError::InvalidLength {
                what: "sim_length",
                axis,
                value: 0.0,
            });
        }
        for (axis, (&n, &dx)) in n_space.iter().zip(&self.cell_length).enumerate() {
            let snapped = n as f64 * dx;
            if snapped != self.sim_length[axis] {
                log::warn!(
                    "sim_length[{axis}] has been redefined from {} to {snapped} to match n x cell_length",
                    self.sim_length[axis]
                );
                self.sim_length[axis] = snapped;
            }
        }
        let snapped = self.n_time() as f64 * self.timestep;
        if snapped != self.sim_time {
            log::warn!(
                "sim_time has been redefined from {} to {snapped} to match n x timestep",
                self.sim_time
            );
            self.sim_time = snapped;
        }
        Ok(())
    }

    /// Index of species `name`.
    pub fn species_index(&self, name: &str) -> Result<usize, ConfigError> {
        self.species
            .get_index_of(name)
            .ok_or_else(|| ConfigError::SpeciesNotFound {
                name: name.to_string(),
            })
    }

    /// Sorted, de-duplicated indices of the named species.
    ///
    /// # Errors
    ///
    /// [`ConfigError::SpeciesNotFound`] for the first unknown name.
    pub fn find_species<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<usize>, ConfigError> {
        let mut indices = names
            .iter()
            .map(|name| self.species_index(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        indices.sort_unstable();
        indices.dedup();
        Ok(indices)
    }

    /// Walls `(min, max)` of every particle axis.
    ///
    /// `[0, sim_length[i]]` on Cartesian axes; `2drz` bounds its two
    /// transverse axes by `[-r, r]` with `r` the radial extent.
    pub fn particle_walls(&self) -> Result<Vec<(f64, f64)>, ConfigError> {
        let geometry = self.geometry()?;
        (0..geometry.particle_dims())
            .map(|axis| -> Result<(f64, f64), ConfigError> {
                let length = geometry
                    .field_axis_of(axis)
                    .and_then(|field_axis| self.sim_length.get(field_axis).copied())
                    .ok_or(ConfigError::DimensionMismatch {
                        what: "sim_length",
                        expected: geometry.field_dims(),
                        found: self.sim_length.len(),
                    })?;
                Ok(if geometry.is_transverse(axis) {
                    (-length, length)
                } else {
                    (0.0, length)
                })
            })
            .collect()
    }

    /// Build the boundary engine of species `name`.
    ///
    /// Walls come from [`particle_walls`](Self::particle_walls). The
    /// thermal bath (if any) is seeded with `seed ^ species index`.
    pub fn boundary_engine(&self, name: &str) -> Result<BoundaryConditionEngine, ConfigError> {
        let index = self.species_index(name)?;
        let species = &self.species[index];
        let geometry = self.geometry()?;
        let dims = geometry.particle_dims();
        species.validate(name, dims)?;

        let boundary_err = |source| ConfigError::Boundary {
            species: name.to_string(),
            source,
        };
        let walls = self.particle_walls()?;
        let mut builder = BoundaryConditionEngine::builder().dimensionality(dims);
        for ((lower, upper), (min, max)) in species.policy_kinds(name, dims)?.into_iter().zip(walls) {
            builder = builder.axis(lower, upper, min, max);
        }
        if let Some(bath) = species.thermal_bath(name, self.seed ^ index as u64)? {
            builder = builder.thermal_bath(bath);
        }
        let engine = builder.build().map_err(boundary_err)?;
        log::debug!(
            "species '{name}' (#{index}): boundary engine with {} axes",
            engine.axis_count()
        );
        Ok(engine)
    }
}
