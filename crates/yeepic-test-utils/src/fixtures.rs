//! Reusable particle and grid fixtures.
//!
//! - [`particle`] and [`particle_with_momentum`] build single particles.
//! - [`scattered_particles`] draws a reproducible cloud around a box.
//! - [`fill_decimal_pattern`] writes an index-derived value into every cell.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use yeepic_core::{Particle, ParticleId, MOMENTUM_DIMS};
use yeepic_grid::StaggeredGrid;

/// A particle at `position` with zero momentum.
pub fn particle(id: u64, position: &[f64]) -> Particle {
    Particle::new(ParticleId(id), position, [0.0; MOMENTUM_DIMS])
}

/// A particle at `position` with the given momentum.
pub fn particle_with_momentum(id: u64, position: &[f64], momentum: [f64; MOMENTUM_DIMS]) -> Particle {
    Particle::new(ParticleId(id), position, momentum)
}

/// `count` particles with positions uniform in `[lo - margin, hi + margin)`
/// on each of `walls.len()` axes and momenta uniform in `[-1, 1)`.
///
/// Same `seed` always yields the same cloud. Ids run `0..count`.
pub fn scattered_particles(count: usize, walls: &[(f64, f64)], margin: f64, seed: u64) -> Vec<Particle> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|id| {
            let position: Vec<f64> = walls
                .iter()
                .map(|&(lo, hi)| {
                    let u: f64 = rng.random();
                    (lo - margin) + u * (hi - lo + 2.0 * margin)
                })
                .collect();
            let momentum = [0; MOMENTUM_DIMS].map(|_| rng.random::<f64>() * 2.0 - 1.0);
            Particle::new(ParticleId(id as u64), &position, momentum)
        })
        .collect()
}

/// Set every cell to `sum(index[j] * 10^(rank - 1 - j))`.
///
/// On a 3x2 grid this gives `cell[i][j] = i * 10 + j`.
pub fn fill_decimal_pattern(grid: &mut StaggeredGrid) {
    let rank = grid.rank();
    for off in 0..grid.len() {
        let Some(index) = grid.unravel(off) else {
            continue;
        };
        let value: f64 = index
            .iter()
            .enumerate()
            .map(|(j, &i)| i as f64 * 10f64.powi((rank - 1 - j) as i32))
            .sum();
        grid.data_mut()[off] = value;
    }
}
