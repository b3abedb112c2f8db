//! A few free-streaming steps through a full domain.

use yeepic::prelude::*;
use yeepic_test_utils::fixtures::scattered_particles;

fn params() -> SimulationParams {
    let mut params = SimulationParams {
        geometry: "2d3v".into(),
        timestep: 0.05,
        sim_time: 0.5,
        cell_length: vec![0.1, 0.1],
        sim_length: vec![1.0, 0.5],
        seed: 17,
        species: Default::default(),
    };
    params
        .add_species(
            "electron",
            SpeciesParams::new(1.0)
                .with_boundaries("periodic", "periodic")
                .with_boundaries("thermalize", "refl")
                .with_thermal_temperature(&[1e-4, 2e-4, 1e-4]),
        )
        .unwrap();
    params
        .add_species(
            "ion",
            SpeciesParams::new(1836.0)
                .with_boundaries("supp", "supp")
                .with_boundaries("refl", "refl"),
        )
        .unwrap();
    params
}

/// Push with `x += p * dt`, then enforce boundaries, for `steps` steps.
fn stream(domain: &PicDomain, species: &str, particles: &mut [Particle], steps: usize) -> Vec<usize> {
    let engine = domain.engine(species).unwrap();
    let dt = domain.params().timestep;
    let mut unhandled = Vec::new();
    for _ in 0..steps {
        for p in particles.iter_mut() {
            for axis in 0..p.position_dims() {
                let dx = p.momentum(axis) * dt;
                *p.position_mut(axis) += dx;
            }
        }
        // One pass per axis, so corner crossings are fully resolved.
        for _ in 0..engine.axis_count() {
            engine.apply_batch(particles, &mut unhandled);
        }
    }
    unhandled
}

#[test]
fn electrons_stay_inside() {
    let domain = PicDomain::new(params()).unwrap();
    let mut electrons = scattered_particles(500, &[(0.0, 1.0), (0.0, 0.5)], 0.0, 2);
    let unhandled = stream(&domain, "electron", &mut electrons, domain.params().n_time());
    assert!(unhandled.is_empty());
    let engine = domain.engine("electron").unwrap();
    for p in &electrons {
        assert!(engine.contains(p), "{p:?}");
    }
}

#[test]
fn ions_leaving_along_x_are_reported() {
    let domain = PicDomain::new(params()).unwrap();
    let mut ions = vec![
        Particle::new(ParticleId(0), &[0.98, 0.25], [1.0, 0.0, 0.0]),
        Particle::new(ParticleId(1), &[0.5, 0.02], [0.0, -1.0, 0.0]),
        Particle::new(ParticleId(2), &[0.02, 0.25], [-1.0, 0.0, 0.0]),
    ];
    let unhandled = stream(&domain, "ion", &mut ions, 1);
    assert_eq!(unhandled, vec![0, 2]);
    assert!((ions[1].position(1) - 0.03).abs() < 1e-12);
    assert_eq!(ions[1].momentum(1), 1.0);
}

#[test]
fn identical_runs_hash_identically() {
    let run = || {
        let mut domain = PicDomain::new(params()).unwrap();
        let mut electrons = scattered_particles(200, &[(0.0, 1.0), (0.0, 0.5)], 0.0, 5);
        let _ = stream(&domain, "electron", &mut electrons, 10);
        let rho = domain.fields_mut().get_mut(YeeComponent::Rho);
        for p in &electrons {
            let i = (p.position(0) / 0.1) as usize;
            let j = (p.position(1) / 0.1) as usize;
            if let Some(cell) = rho.get_mut(&[i, j]) {
                *cell += 1.0;
            }
        }
        let mut sink = SnapshotWriter::new(Vec::new());
        domain.dump(&mut sink, YeeComponent::Rho).unwrap();
        (domain.fields_hash(), sink.into_inner())
    };
    let (hash_a, dump_a) = run();
    let (hash_b, dump_b) = run();
    assert_eq!(hash_a, hash_b);
    assert_eq!(dump_a, dump_b);

    let rows = SnapshotReader::new(dump_a.as_slice()).read_rows(11).unwrap();
    let total: f64 = rows.iter().flatten().sum();
    assert_eq!(total, 200.0);
}

#[test]
fn init_error_chains_source() {
    use std::error::Error;
    let mut bad = params();
    bad.timestep = 1.0;
    let err = PicDomain::new(bad).unwrap_err();
    assert!(matches!(err, InitError::Config(ConfigError::CflViolation { .. })));
    assert!(err.source().is_some());
    assert!(err.to_string().contains("CFL"));
}
