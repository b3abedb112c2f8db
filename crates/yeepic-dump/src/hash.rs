//! Grid fingerprinting for determinism checks.
//!
//! FNV-1a over the grid's shape and every stored value's bit pattern.
//! Not cryptographically secure; used only to compare runs.

use yeepic_grid::{Staggering, StaggeredGrid};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash a grid's rank, sizes, staggering and contents.
///
/// Two grids hash equal only if they have the same layout and
/// bit-identical values (`0.0` and `-0.0` differ, as do NaN payloads).
/// An unallocated grid hashes its rank alone.
pub fn grid_hash(grid: &StaggeredGrid) -> u64 {
    let mut hash = fnv1a_u64(FNV_OFFSET, grid.rank() as u64);
    for &size in grid.sizes() {
        hash = fnv1a_u64(hash, size as u64);
    }
    for &s in grid.stagger() {
        hash = fnv1a_byte(hash, matches!(s, Staggering::Dual) as u8);
    }
    for &v in grid.data() {
        hash = fnv1a_u64(hash, v.to_bits());
    }
    hash
}
