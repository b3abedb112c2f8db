//! Primal/dual staggering of grid axes.

use yeepic_core::MAX_AXES;

/// Position of a field's sample points along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Staggering {
    /// Samples at integer cell indices.
    #[default]
    Primal,
    /// Samples at half-integer offsets; the axis holds one extra point.
    Dual,
}

impl Staggering {
    /// Extra points this staggering adds to an axis: `0` or `1`.
    #[inline]
    pub fn extent(self) -> usize {
        match self {
            Self::Primal => 0,
            Self::Dual => 1,
        }
    }

    /// The opposite staggering.
    pub fn flipped(self) -> Self {
        match self {
            Self::Primal => Self::Dual,
            Self::Dual => Self::Primal,
        }
    }
}

/// Staggering of `axis` for a field whose principal direction is
/// `main_axis`.
///
/// An axis is dual when it is the main axis and the field is not
/// primal there, or when it is any other axis and the field is primal
/// on its main axis. This is the Yee convention: `Ex` is dual along x
/// and primal across, `Bx` the opposite.
///
/// ```
/// use yeepic_grid::stagger::{staggering_for, Staggering};
///
/// assert_eq!(staggering_for(0, 0, false), Staggering::Dual);
/// assert_eq!(staggering_for(1, 0, false), Staggering::Primal);
/// assert_eq!(staggering_for(0, 0, true), Staggering::Primal);
/// assert_eq!(staggering_for(1, 0, true), Staggering::Dual);
/// ```
#[inline]
pub fn staggering_for(axis: usize, main_axis: usize, primal_on_main_axis: bool) -> Staggering {
    let dual = (axis == main_axis && !primal_on_main_axis)
        || (axis != main_axis && primal_on_main_axis);
    if dual {
        Staggering::Dual
    } else {
        Staggering::Primal
    }
}

/// `true` if `main_axis` names one of the physical axes.
pub(crate) fn is_valid_main_axis(main_axis: usize) -> bool {
    main_axis < MAX_AXES
}
