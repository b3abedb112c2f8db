//! The electromagnetic component set on a Yee mesh.
//!
//! Electric field and current components are dual along their own
//! axis and primal across it; magnetic components are the reverse;
//! charge density is fully primal. Each component is one
//! [`StaggeredGrid`] allocated from the same primal cell counts.

use crate::error::GridError;
use crate::grid::StaggeredGrid;
use std::fmt;

/// One electromagnetic field component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum YeeComponent {
    /// Electric field, x component.
    Ex,
    /// Electric field, y component.
    Ey,
    /// Electric field, z component.
    Ez,
    /// Magnetic field, x component.
    Bx,
    /// Magnetic field, y component.
    By,
    /// Magnetic field, z component.
    Bz,
    /// Current density, x component.
    Jx,
    /// Current density, y component.
    Jy,
    /// Current density, z component.
    Jz,
    /// Charge density.
    Rho,
}

impl YeeComponent {
    /// Every component, in storage order.
    pub const ALL: [YeeComponent; 10] = [
        Self::Ex,
        Self::Ey,
        Self::Ez,
        Self::Bx,
        Self::By,
        Self::Bz,
        Self::Jx,
        Self::Jy,
        Self::Jz,
        Self::Rho,
    ];

    /// `(main_axis, primal_on_main_axis)` for staggered components,
    /// `None` for the fully primal charge density.
    pub fn staggering(self) -> Option<(usize, bool)> {
        match self {
            Self::Ex | Self::Jx => Some((0, false)),
            Self::Ey | Self::Jy => Some((1, false)),
            Self::Ez | Self::Jz => Some((2, false)),
            Self::Bx => Some((0, true)),
            Self::By => Some((1, true)),
            Self::Bz => Some((2, true)),
            Self::Rho => None,
        }
    }

    /// Short lowercase name, suitable for dump file names.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ex => "ex",
            Self::Ey => "ey",
            Self::Ez => "ez",
            Self::Bx => "bx",
            Self::By => "by",
            Self::Bz => "bz",
            Self::Jx => "jx",
            Self::Jy => "jy",
            Self::Jz => "jz",
            Self::Rho => "rho",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for YeeComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All electromagnetic component grids of one spatial domain.
#[derive(Clone, Debug)]
pub struct YeeFields {
    primal_dims: Vec<usize>,
    grids: Vec<StaggeredGrid>,
}

impl YeeFields {
    /// Allocate every component for a mesh with `primal_dims` points
    /// per axis. The rank is `primal_dims.len()`.
    pub fn allocate(primal_dims: &[usize]) -> Result<Self, GridError> {
        let grids = YeeComponent::ALL
            .iter()
            .map(|c| match c.staggering() {
                Some((main_axis, primal)) => {
                    StaggeredGrid::with_staggering(primal_dims, main_axis, primal)
                }
                None => StaggeredGrid::with_dims(primal_dims),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            primal_dims: primal_dims.to_vec(),
            grids,
        })
    }

    /// Primal points per axis used for allocation.
    pub fn primal_dims(&self) -> &[usize] {
        &self.primal_dims
    }

    /// The grid holding `component`.
    pub fn get(&self, component: YeeComponent) -> &StaggeredGrid {
        &self.grids[component.slot()]
    }

    /// The grid holding `component`, mutable.
    pub fn get_mut(&mut self, component: YeeComponent) -> &mut StaggeredGrid {
        &mut self.grids[component.slot()]
    }

    /// Iterate `(component, grid)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (YeeComponent, &StaggeredGrid)> {
        YeeComponent::ALL.into_iter().zip(&self.grids)
    }

    /// Total stored values across all components.
    pub fn total_len(&self) -> usize {
        self.grids.iter().map(StaggeredGrid::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_d_sizes_follow_yee_layout() {
        let f = YeeFields::allocate(&[4, 6]).unwrap();
        assert_eq!(f.get(YeeComponent::Ex).sizes(), &[5, 6]);
        assert_eq!(f.get(YeeComponent::Ey).sizes(), &[4, 7]);
        assert_eq!(f.get(YeeComponent::Ez).sizes(), &[4, 6]);
        assert_eq!(f.get(YeeComponent::Bx).sizes(), &[4, 7]);
        assert_eq!(f.get(YeeComponent::By).sizes(), &[5, 6]);
        assert_eq!(f.get(YeeComponent::Bz).sizes(), &[5, 7]);
        assert_eq!(f.get(YeeComponent::Jx).sizes(), &[5, 6]);
        assert_eq!(f.get(YeeComponent::Rho).sizes(), &[4, 6]);
    }

    #[test]
    fn one_d_layout() {
        let f = YeeFields::allocate(&[8]).unwrap();
        assert_eq!(f.get(YeeComponent::Ex).sizes(), &[9]);
        assert_eq!(f.get(YeeComponent::Ey).sizes(), &[8]);
        assert_eq!(f.get(YeeComponent::By).sizes(), &[9]);
        assert_eq!(f.get(YeeComponent::Bx).sizes(), &[8]);
    }

    #[test]
    fn iter_visits_every_component_once() {
        let mut f = YeeFields::allocate(&[2, 2, 2]).unwrap();
        f.get_mut(YeeComponent::Jz).fill(3.0);
        let names: Vec<_> = f.iter().map(|(c, _)| c.name()).collect();
        assert_eq!(names.len(), 10);
        assert_eq!(names[9], "rho");
        let jz = f.iter().find(|(c, _)| *c == YeeComponent::Jz).unwrap().1;
        assert!(jz.data().iter().all(|&v| v == 3.0));
        // 3 E, 3 J: 12 each; 3 B: 18 each; rho: 8.
        assert_eq!(f.total_len(), 6 * 12 + 3 * 18 + 8);
    }

    #[test]
    fn rejects_empty_dims() {
        assert!(matches!(
            YeeFields::allocate(&[]),
            Err(GridError::UnsupportedRank { rank: 0 })
        ));
    }
}
