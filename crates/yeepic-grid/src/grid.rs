//! Contiguous storage for one field component on a staggered mesh.

use crate::error::GridError;
use crate::stagger::{is_valid_main_axis, staggering_for, Staggering};
use smallvec::SmallVec;
use std::io::Write;
use std::ops::{Index, IndexMut};
use yeepic_core::{GridIndex, MAX_AXES};

/// Largest number of `f64` values one grid may store.
const MAX_VALUES: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// One scalar field component stored on a (possibly staggered) mesh.
///
/// The grid has a fixed rank chosen at construction. Allocation takes
/// the primal cell counts per axis (`dims`) and a staggering per axis;
/// a dual axis holds one extra point, so `sizes[j] = dims[j] + stagger[j]`.
/// Values live in a single `Vec<f64>` in row-major order with axis 0
/// slowest, addressed through cached strides.
///
/// # Examples
///
/// ```
/// use yeepic_grid::StaggeredGrid;
///
/// // Ex on a 4x4 mesh: dual along x, primal along y.
/// let mut ex = StaggeredGrid::with_staggering(&[4, 4], 0, false).unwrap();
/// assert_eq!(ex.sizes(), &[5, 4]);
/// assert_eq!(ex.len(), 20);
///
/// *ex.at(&[4, 3]) = 1.5;
/// assert_eq!(ex[&[4, 3][..]], 1.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StaggeredGrid {
    rank: usize,
    dims: SmallVec<[usize; MAX_AXES]>,
    stagger: SmallVec<[Staggering; MAX_AXES]>,
    sizes: SmallVec<[usize; MAX_AXES]>,
    strides: SmallVec<[usize; MAX_AXES]>,
    data: Vec<f64>,
}

impl StaggeredGrid {
    /// Create an empty grid of the given rank (1..=3) with no storage.
    pub fn new(rank: usize) -> Result<Self, GridError> {
        if rank == 0 || rank > MAX_AXES {
            return Err(GridError::UnsupportedRank { rank });
        }
        Ok(Self {
            rank,
            dims: SmallVec::new(),
            stagger: SmallVec::new(),
            sizes: SmallVec::new(),
            strides: SmallVec::new(),
            data: Vec::new(),
        })
    }

    /// Create and allocate a fully primal grid; the rank is `dims.len()`.
    pub fn with_dims(dims: &[usize]) -> Result<Self, GridError> {
        let mut grid = Self::new(dims.len())?;
        grid.allocate(dims)?;
        Ok(grid)
    }

    /// Create and allocate a staggered grid; the rank is `dims.len()`.
    pub fn with_staggering(
        dims: &[usize],
        main_axis: usize,
        primal_on_main_axis: bool,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(dims.len())?;
        grid.allocate_staggered(dims, main_axis, primal_on_main_axis)?;
        Ok(grid)
    }

    /// Allocate storage for a fully primal grid of `dims` cells.
    ///
    /// Any existing storage is released first. Fails if `dims` does not
    /// have exactly [`rank`](Self::rank) entries or contains a zero.
    pub fn allocate(&mut self, dims: &[usize]) -> Result<(), GridError> {
        let sizes = self.checked_sizes(dims, |_| Staggering::Primal)?;
        self.install(dims, sizes, |_| Staggering::Primal);
        Ok(())
    }

    /// Allocate storage with Yee staggering.
    ///
    /// Axis `j` is dual when `(j == main_axis && !primal_on_main_axis)`
    /// or `(j != main_axis && primal_on_main_axis)`. `main_axis` may be
    /// any physical axis `0..3`, including one this grid does not
    /// resolve (out-of-plane components on 1D/2D meshes). Any existing
    /// storage is released first.
    pub fn allocate_staggered(
        &mut self,
        dims: &[usize],
        main_axis: usize,
        primal_on_main_axis: bool,
    ) -> Result<(), GridError> {
        if !is_valid_main_axis(main_axis) {
            return Err(GridError::InvalidMainAxis { axis: main_axis });
        }
        let stagger_of = |j| staggering_for(j, main_axis, primal_on_main_axis);
        let sizes = self.checked_sizes(dims, stagger_of)?;
        self.install(dims, sizes, stagger_of);
        Ok(())
    }

    /// Stored points per axis, validated against the rank and the largest
    /// buffer a `Vec<f64>` can hold. Nothing is mutated here.
    fn checked_sizes(
        &self,
        dims: &[usize],
        stagger_of: impl Fn(usize) -> Staggering,
    ) -> Result<SmallVec<[usize; MAX_AXES]>, GridError> {
        if dims.len() != self.rank {
            return Err(GridError::RankMismatch {
                expected: self.rank,
                found: dims.len(),
            });
        }
        if let Some(axis) = dims.iter().position(|&d| d == 0) {
            return Err(GridError::EmptyAxis { axis });
        }
        let mut sizes: SmallVec<[usize; MAX_AXES]> = SmallVec::with_capacity(self.rank);
        for (axis, &d) in dims.iter().enumerate() {
            let size = d
                .checked_add(stagger_of(axis).extent())
                .ok_or(GridError::TooLarge { axis })?;
            sizes.push(size);
        }
        sizes
            .iter()
            .enumerate()
            .try_fold(1usize, |len, (axis, &size)| {
                len.checked_mul(size)
                    .filter(|&n| n <= MAX_VALUES)
                    .ok_or(GridError::TooLarge { axis })
            })?;
        Ok(sizes)
    }

    fn install(
        &mut self,
        dims: &[usize],
        sizes: SmallVec<[usize; MAX_AXES]>,
        stagger_of: impl Fn(usize) -> Staggering,
    ) {
        // Old buffer goes before the new one is built.
        self.data = Vec::new();

        self.dims = SmallVec::from_slice(dims);
        self.stagger = (0..self.rank).map(&stagger_of).collect();
        self.sizes = sizes;

        let mut strides: SmallVec<[usize; MAX_AXES]> = SmallVec::from_elem(1, self.rank);
        for j in (0..self.rank.saturating_sub(1)).rev() {
            strides[j] = strides[j + 1] * self.sizes[j + 1];
        }
        self.strides = strides;

        let len: usize = self.sizes.iter().product();
        self.data = vec![0.0; len];

        log::debug!(
            "staggered grid allocated: sizes={:?} stagger={:?} ({} values)",
            self.sizes.as_slice(),
            self.stagger.as_slice(),
            len
        );
    }

    /// Fixed rank of this grid.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// `true` once storage has been allocated.
    pub fn is_allocated(&self) -> bool {
        !self.sizes.is_empty()
    }

    /// Primal cell counts supplied at allocation.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Staggering of every axis.
    pub fn stagger(&self) -> &[Staggering] {
        &self.stagger
    }

    /// Staggering as `0` (primal) / `1` (dual) per axis.
    pub fn stagger_extents(&self) -> GridIndex {
        self.stagger.iter().map(|s| s.extent()).collect()
    }

    /// Stored points per axis: `dims[j] + stagger[j]`.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Row-major strides per axis (axis 0 slowest).
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of stored values: the product of [`sizes`](Self::sizes).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` when no storage is allocated.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All values, row-major.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// All values, row-major, mutable.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Set every value to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Linear offset of `index`, or `None` if it has the wrong rank or
    /// any component is out of range.
    #[inline]
    pub fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.rank || !self.is_allocated() {
            return None;
        }
        let mut off = 0;
        for ((&i, &size), &stride) in index.iter().zip(&self.sizes).zip(&self.strides) {
            if i >= size {
                return None;
            }
            off += i * stride;
        }
        Some(off)
    }

    /// Multi-dimensional index of a linear offset, or `None` past the end.
    pub fn unravel(&self, offset: usize) -> Option<GridIndex> {
        if offset >= self.data.len() {
            return None;
        }
        let mut rest = offset;
        let mut index = GridIndex::new();
        for &stride in &self.strides {
            index.push(rest / stride);
            rest %= stride;
        }
        Some(index)
    }

    /// Value at `index`, or `None` if out of range.
    pub fn get(&self, index: &[usize]) -> Option<&f64> {
        self.offset(index).map(|off| &self.data[off])
    }

    /// Mutable value at `index`, or `None` if out of range.
    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut f64> {
        let off = self.offset(index)?;
        Some(&mut self.data[off])
    }

    /// Mutable value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` has the wrong rank or any component is
    /// outside `[0, sizes[axis])`.
    #[inline]
    pub fn at(&mut self, index: &[usize]) -> &mut f64 {
        let off = self.checked_offset(index);
        &mut self.data[off]
    }

    fn checked_offset(&self, index: &[usize]) -> usize {
        if let Some(off) = self.offset(index) {
            return off;
        }
        assert!(
            index.len() == self.rank,
            "grid index has {} components, grid rank is {}",
            index.len(),
            self.rank,
        );
        assert!(self.is_allocated(), "grid has no storage");
        let axis = index
            .iter()
            .zip(&self.sizes)
            .position(|(&i, &size)| i >= size)
            .unwrap_or(0);
        panic!(
            "grid index {} out of range on axis {axis} (size {})",
            index[axis], self.sizes[axis],
        );
    }

    /// Length of one axis-0 row: the product of all other sizes.
    pub fn row_len(&self) -> usize {
        self.strides.first().copied().unwrap_or(0)
    }

    /// The contiguous values with axis-0 index `i`.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        let len = self.row_len();
        if i >= self.sizes.first().copied().unwrap_or(0) {
            return None;
        }
        Some(&self.data[i * len..(i + 1) * len])
    }

    /// The contiguous values with axis-0 index `i`, mutable.
    pub fn row_mut(&mut self, i: usize) -> Option<&mut [f64]> {
        let len = self.row_len();
        if i >= self.sizes.first().copied().unwrap_or(0) {
            return None;
        }
        Some(&mut self.data[i * len..(i + 1) * len])
    }

    /// Write the first `row_count` axis-0 rows to `sink` as text.
    ///
    /// Each row becomes one line: its values in storage order separated
    /// by single spaces and terminated by `\n`. Values use the shortest
    /// representation that parses back to the same `f64`.
    pub fn dump_rows<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        row_count: usize,
    ) -> Result<(), GridError> {
        if !self.is_allocated() {
            return Err(GridError::NotAllocated);
        }
        let available = self.sizes[0];
        if row_count > available {
            return Err(GridError::RowCountOutOfRange {
                requested: row_count,
                available,
            });
        }
        let len = self.row_len();
        for row in self.data.chunks_exact(len).take(row_count) {
            let mut values = row.iter();
            if let Some(first) = values.next() {
                write!(sink, "{first}")?;
            }
            for v in values {
                write!(sink, " {v}")?;
            }
            sink.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl Index<&[usize]> for StaggeredGrid {
    type Output = f64;

    fn index(&self, index: &[usize]) -> &f64 {
        &self.data[self.checked_offset(index)]
    }
}

impl IndexMut<&[usize]> for StaggeredGrid {
    fn index_mut(&mut self, index: &[usize]) -> &mut f64 {
        let off = self.checked_offset(index);
        &mut self.data[off]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_bad_rank() {
        assert!(matches!(
            StaggeredGrid::new(0),
            Err(GridError::UnsupportedRank { rank: 0 })
        ));
        assert!(matches!(
            StaggeredGrid::new(4),
            Err(GridError::UnsupportedRank { rank: 4 })
        ));
    }

    #[test]
    fn allocate_rejects_rank_mismatch() {
        let mut g = StaggeredGrid::new(2).unwrap();
        let err = g.allocate(&[4, 4, 4]).unwrap_err();
        assert!(matches!(
            err,
            GridError::RankMismatch {
                expected: 2,
                found: 3
            }
        ));
        assert!(err.to_string().contains('3'));
        assert!(!g.is_allocated());
    }

    #[test]
    fn allocate_rejects_zero_axis() {
        let mut g = StaggeredGrid::new(2).unwrap();
        assert!(matches!(
            g.allocate(&[4, 0]),
            Err(GridError::EmptyAxis { axis: 1 })
        ));
    }

    #[test]
    fn allocate_staggered_rejects_main_axis_past_three() {
        let mut g = StaggeredGrid::new(2).unwrap();
        assert!(matches!(
            g.allocate_staggered(&[4, 4], 3, true),
            Err(GridError::InvalidMainAxis { axis: 3 })
        ));
    }

    #[test]
    fn primal_allocation_has_no_stagger() {
        let g = StaggeredGrid::with_dims(&[3, 2]).unwrap();
        assert_eq!(g.sizes(), &[3, 2]);
        assert_eq!(g.stagger_extents().as_slice(), &[0, 0]);
        assert_eq!(g.strides(), &[2, 1]);
        assert_eq!(g.len(), 6);
        assert!(g.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn reallocation_replaces_storage() {
        let mut g = StaggeredGrid::with_dims(&[2, 2]).unwrap();
        g.fill(7.0);
        g.allocate_staggered(&[3, 3], 1, false).unwrap();
        assert_eq!(g.sizes(), &[3, 4]);
        assert_eq!(g.len(), 12);
        assert!(g.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn failed_reallocation_keeps_old_storage() {
        let mut g = StaggeredGrid::with_dims(&[2, 2]).unwrap();
        g.fill(1.0);
        assert!(g.allocate(&[2]).is_err());
        assert_eq!(g.sizes(), &[2, 2]);
        assert_eq!(g.data(), &[1.0; 4]);
    }

    #[test]
    fn overflowing_dual_axis_is_rejected() {
        let mut g = StaggeredGrid::with_dims(&[2, 2]).unwrap();
        g.fill(1.0);
        assert!(matches!(
            g.allocate_staggered(&[usize::MAX, 1], 0, false),
            Err(GridError::TooLarge { axis: 0 })
        ));
        assert_eq!(g.sizes(), &[2, 2]);
        assert_eq!(g.data(), &[1.0; 4]);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn overflowing_product_is_rejected() {
        let mut g = StaggeredGrid::with_dims(&[2, 2]).unwrap();
        g.fill(1.0);
        let err = g.allocate(&[1 << 33, 1 << 33]).unwrap_err();
        assert!(matches!(err, GridError::TooLarge { axis: 1 }));
        assert!(err.to_string().contains("axis 1"));
        assert_eq!(g.dims(), &[2, 2]);
        assert_eq!(g.data(), &[1.0; 4]);
        assert!(matches!(
            StaggeredGrid::with_dims(&[1 << 33, 1 << 33]),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn offsets_are_row_major() {
        let g = StaggeredGrid::with_dims(&[2, 3, 4]).unwrap();
        assert_eq!(g.strides(), &[12, 4, 1]);
        assert_eq!(g.offset(&[1, 2, 3]), Some(23));
        assert_eq!(g.offset(&[0, 0, 4]), None);
        assert_eq!(g.offset(&[0, 0]), None);
        assert_eq!(g.unravel(23).unwrap().as_slice(), &[1, 2, 3]);
        assert_eq!(g.unravel(24), None);
    }

    #[test]
    fn get_and_at_agree() {
        let mut g = StaggeredGrid::with_dims(&[3, 2]).unwrap();
        *g.at(&[2, 1]) = 4.25;
        assert_eq!(g.get(&[2, 1]), Some(&4.25));
        assert_eq!(g.data()[5], 4.25);
        assert_eq!(g.get(&[3, 0]), None);
        *g.get_mut(&[0, 1]).unwrap() = -1.0;
        assert_eq!(g[&[0, 1][..]], -1.0);
    }

    #[test]
    #[should_panic(expected = "out of range on axis 1")]
    fn at_panics_out_of_range() {
        let mut g = StaggeredGrid::with_dims(&[3, 2]).unwrap();
        let _ = g.at(&[0, 2]);
    }

    #[test]
    #[should_panic(expected = "grid rank is 2")]
    fn at_panics_on_wrong_rank() {
        let mut g = StaggeredGrid::with_dims(&[3, 2]).unwrap();
        let _ = g.at(&[0]);
    }

    #[test]
    fn rows_are_contiguous() {
        let mut g = StaggeredGrid::with_dims(&[3, 2]).unwrap();
        g.row_mut(1).unwrap().copy_from_slice(&[1.0, 2.0]);
        assert_eq!(g.row(1), Some(&[1.0, 2.0][..]));
        assert_eq!(g.row(3), None);
        assert_eq!(g.row_len(), 2);
    }

    #[test]
    fn rank_one_rows_hold_one_value() {
        let mut g = StaggeredGrid::with_staggering(&[3], 0, false).unwrap();
        assert_eq!(g.sizes(), &[4]);
        *g.at(&[3]) = 2.0;
        assert_eq!(g.row(3), Some(&[2.0][..]));
    }

    #[test]
    fn dump_rows_writes_values_not_addresses() {
        let mut g = StaggeredGrid::with_dims(&[2, 3]).unwrap();
        g.data_mut().copy_from_slice(&[0.0, 1.5, -2.0, 10.0, 11.0, 0.125]);
        let mut out = Vec::new();
        g.dump_rows(&mut out, 2).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0 1.5 -2\n10 11 0.125\n"
        );
    }

    #[test]
    fn dump_rows_partial_and_out_of_range() {
        let g = StaggeredGrid::with_dims(&[2, 1]).unwrap();
        let mut out = Vec::new();
        g.dump_rows(&mut out, 1).unwrap();
        assert_eq!(out, b"0\n");
        assert!(matches!(
            g.dump_rows(&mut out, 3),
            Err(GridError::RowCountOutOfRange {
                requested: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn dump_rows_requires_storage() {
        let g = StaggeredGrid::new(2).unwrap();
        let mut out = Vec::new();
        assert!(matches!(
            g.dump_rows(&mut out, 0),
            Err(GridError::NotAllocated)
        ));
    }
}
