//! Benchmark profiles for the yeepic particle-in-cell toolkit.
//!
//! Provides pre-built [`SimulationParams`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 2d3v, 256x128 cells, electrons and ions
//! - [`stress_profile`]: 3d3v, 64x64x64 cells, same species

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use indexmap::IndexMap;
use yeepic_config::{ConfigError, SimulationParams, SpeciesParams};

/// Electrons thermalized on x and periodic on the other axes; ions
/// reflected everywhere.
fn register_species(params: &mut SimulationParams, axes: usize) -> Result<(), ConfigError> {
    let mut electron = SpeciesParams::new(1.0)
        .with_boundaries("thermalize", "thermalize")
        .with_thermal_temperature(&[1e-3]);
    let mut ion = SpeciesParams::new(1836.0).with_boundaries("refl", "refl");
    for _ in 1..axes {
        electron = electron.with_boundaries("periodic", "periodic");
        ion = ion.with_boundaries("refl", "refl");
    }
    params.add_species("electron", electron)?;
    params.add_species("ion", ion)?;
    Ok(())
}

/// Reference benchmark profile: 2d3v, 256x128 cells of size 0.1.
///
/// dt=0.05 (within CFL limit of 0.1/sqrt(2) ~ 0.0707).
pub fn reference_profile(seed: u64) -> Result<SimulationParams, ConfigError> {
    let mut params = SimulationParams {
        geometry: "2d3v".into(),
        timestep: 0.05,
        sim_time: 10.0,
        cell_length: vec![0.1, 0.1],
        sim_length: vec![25.6, 12.8],
        seed,
        species: IndexMap::new(),
    };
    register_species(&mut params, 2)?;
    params.discretize()?;
    Ok(params)
}

/// Stress benchmark profile: 3d3v, 64^3 cells of size 0.1.
///
/// dt=0.05 (within CFL limit of 0.1/sqrt(3) ~ 0.0577).
pub fn stress_profile(seed: u64) -> Result<SimulationParams, ConfigError> {
    let mut params = SimulationParams {
        geometry: "3d3v".into(),
        timestep: 0.05,
        sim_time: 10.0,
        cell_length: vec![0.1; 3],
        sim_length: vec![6.4; 3],
        seed,
        species: IndexMap::new(),
    };
    register_species(&mut params, 3)?;
    params.discretize()?;
    Ok(params)
}
