//! Staggering rule and storage-size invariants across ranks.

use proptest::prelude::*;
use yeepic_grid::{Staggering, StaggeredGrid};

#[test]
fn dual_on_main_axis_grows_main_axis() {
    let g = StaggeredGrid::with_staggering(&[4, 4], 0, false).unwrap();
    assert_eq!(g.stagger_extents().as_slice(), &[1, 0]);
    assert_eq!(g.sizes(), &[5, 4]);
    assert_eq!(g.len(), 20);
}

#[test]
fn primal_on_main_axis_grows_other_axes() {
    let g = StaggeredGrid::with_staggering(&[4, 4], 0, true).unwrap();
    assert_eq!(g.stagger_extents().as_slice(), &[0, 1]);
    assert_eq!(g.sizes(), &[4, 5]);
    assert_eq!(g.stagger(), &[Staggering::Primal, Staggering::Dual]);
}

#[test]
fn three_d_primal_main_axis_duals_the_rest() {
    let g = StaggeredGrid::with_staggering(&[2, 3, 4], 1, true).unwrap();
    assert_eq!(g.sizes(), &[3, 3, 5]);
    assert_eq!(g.len(), 45);
}

#[test]
fn dims_are_kept_separately_from_sizes() {
    let g = StaggeredGrid::with_staggering(&[4, 4], 1, false).unwrap();
    assert_eq!(g.dims(), &[4, 4]);
    assert_eq!(g.sizes(), &[4, 5]);
}

proptest! {
    #[test]
    fn storage_matches_sizes(
        dims in prop::collection::vec(1usize..8, 1..=3),
        main_axis in 0usize..3,
        primal in any::<bool>(),
    ) {
        let g = StaggeredGrid::with_staggering(&dims, main_axis, primal).unwrap();
        let extents = g.stagger_extents();
        for j in 0..dims.len() {
            prop_assert_eq!(g.sizes()[j], dims[j] + extents[j]);
            let expected_dual = (j == main_axis && !primal) || (j != main_axis && primal);
            prop_assert_eq!(extents[j] == 1, expected_dual);
        }
        prop_assert_eq!(g.len(), g.sizes().iter().product::<usize>());
    }

    #[test]
    fn offset_and_unravel_are_inverse(
        dims in prop::collection::vec(1usize..6, 1..=3),
        seed in any::<usize>(),
    ) {
        let g = StaggeredGrid::with_dims(&dims).unwrap();
        let off = seed % g.len();
        let index = g.unravel(off).unwrap();
        prop_assert_eq!(g.offset(&index), Some(off));
    }
}
