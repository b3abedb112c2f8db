//! Per-species enforcement of particle domain boundaries.
//!
//! Constructed via the builder pattern: [`BoundaryConditionEngine::builder`].

use crate::error::BoundaryError;
use crate::policy::{BoundaryPolicy, PolicyKind};
use crate::thermal::ThermalBath;
use smallvec::SmallVec;
use yeepic_core::{BoundaryOutcome, Face, ParticleState, MAX_AXES};

/// Walls and policies of one configured axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisBoundary {
    lower: BoundaryPolicy,
    upper: BoundaryPolicy,
    min: f64,
    max: f64,
}

impl AxisBoundary {
    /// Policy of the lower wall.
    pub fn lower(&self) -> &BoundaryPolicy {
        &self.lower
    }

    /// Policy of the upper wall.
    pub fn upper(&self) -> &BoundaryPolicy {
        &self.upper
    }

    /// Policy of `face`.
    pub fn policy(&self, face: Face) -> &BoundaryPolicy {
        match face {
            Face::Lower => &self.lower,
            Face::Upper => &self.upper,
        }
    }

    /// Lower wall coordinate.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper wall coordinate.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Domain extent along this axis.
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// `true` if `x` lies in `[min, max)`.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        !(x < self.min || x >= self.max)
    }
}

/// Decides, once per particle per step, what happens to a particle
/// that left the spatial domain.
///
/// Holds an ordered list of configured axes (one per spatial dimension
/// of the species). [`apply`](Self::apply) walks them in order and
/// resolves only the **first** axis the particle is outside of: a
/// particle below the axis-0 minimum and above the axis-1 maximum is
/// handled by the axis-0 lower policy alone, and axis 1 is not looked
/// at in that call.
///
/// The engine is immutable after construction and `Send + Sync`, so a
/// single instance can be shared across worker threads as long as each
/// call gets a distinct particle.
///
/// # Examples
///
/// ```
/// use yeepic_boundary::{BoundaryConditionEngine, PolicyKind};
/// use yeepic_core::{BoundaryOutcome, Particle, ParticleId, ParticleState};
///
/// let engine = BoundaryConditionEngine::builder()
///     .axis(PolicyKind::Reflecting, PolicyKind::Unset, 0.0, 10.0)
///     .build()
///     .unwrap();
///
/// let mut p = Particle::new(ParticleId(0), &[-1.0], [-0.5, 0.0, 0.0]);
/// assert_eq!(engine.apply(&mut p), BoundaryOutcome::Kept);
/// assert_eq!(p.position(0), 1.0);
/// assert_eq!(p.momentum(0), 0.5);
///
/// let mut q = Particle::new(ParticleId(1), &[10.0], [0.5, 0.0, 0.0]);
/// assert_eq!(engine.apply(&mut q), BoundaryOutcome::Unhandled);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryConditionEngine {
    axes: SmallVec<[AxisBoundary; MAX_AXES]>,
}

/// Builder for [`BoundaryConditionEngine`].
///
/// Required: at least one [`axis`](Self::axis). A
/// [`thermal_bath`](Self::thermal_bath) is required when any face is
/// [`PolicyKind::Thermalizing`].
#[derive(Clone, Debug, Default)]
pub struct BoundaryConditionEngineBuilder {
    axes: Vec<(PolicyKind, PolicyKind, f64, f64)>,
    thermal_bath: Option<ThermalBath>,
    dimensionality: Option<usize>,
}

impl BoundaryConditionEngine {
    /// Create a new builder.
    pub fn builder() -> BoundaryConditionEngineBuilder {
        BoundaryConditionEngineBuilder::default()
    }

    /// Number of configured axes.
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    /// Configuration of axis `axis`, if configured.
    pub fn axis(&self, axis: usize) -> Option<&AxisBoundary> {
        self.axes.get(axis)
    }

    /// All configured axes in order.
    pub fn axes(&self) -> &[AxisBoundary] {
        &self.axes
    }

    /// `true` if the particle is inside every configured axis.
    pub fn contains<P: ParticleState + ?Sized>(&self, particle: &P) -> bool {
        self.axes
            .iter()
            .enumerate()
            .all(|(axis, bc)| bc.contains(particle.position(axis)))
    }

    /// Enforce the domain boundaries on one particle.
    ///
    /// For each configured axis in order: below `min` applies the
    /// lower policy with mirror `2 * min`; at or above `max` applies
    /// the upper policy with mirror `2 * max`; in both cases the call
    /// returns immediately. An [`Unset`](BoundaryPolicy::Unset) face
    /// yields [`BoundaryOutcome::Unhandled`] with the particle
    /// untouched. A particle inside every axis is returned
    /// [`BoundaryOutcome::Kept`] unmodified.
    ///
    /// The particle must carry at least [`axis_count`](Self::axis_count)
    /// position coordinates.
    #[inline]
    pub fn apply<P: ParticleState + ?Sized>(&self, particle: &mut P) -> BoundaryOutcome {
        debug_assert!(
            particle.position_dims() >= self.axes.len(),
            "particle has {} coordinates, engine has {} axes",
            particle.position_dims(),
            self.axes.len(),
        );
        for (axis, bc) in self.axes.iter().enumerate() {
            let x = particle.position(axis);
            if x < bc.min {
                return bc.lower.apply(particle, axis, Face::Lower, 2.0 * bc.min);
            }
            if x >= bc.max {
                return bc.upper.apply(particle, axis, Face::Upper, 2.0 * bc.max);
            }
        }
        BoundaryOutcome::Kept
    }

    /// Apply [`apply`](Self::apply) to every particle, collecting the
    /// indices of unhandled ones into `unhandled` (cleared first).
    ///
    /// The index buffer is owned by the caller so the per-step loop can
    /// reuse its allocation; the exchange layer consumes the indices.
    pub fn apply_batch<P: ParticleState>(&self, particles: &mut [P], unhandled: &mut Vec<usize>) {
        unhandled.clear();
        for (i, particle) in particles.iter_mut().enumerate() {
            if self.apply(particle) == BoundaryOutcome::Unhandled {
                unhandled.push(i);
            }
        }
    }
}

impl BoundaryConditionEngineBuilder {
    /// Configure the next axis with its face policies and walls.
    pub fn axis(mut self, lower: PolicyKind, upper: PolicyKind, min: f64, max: f64) -> Self {
        self.axes.push((lower, upper, min, max));
        self
    }

    /// Set the thermal bath used by thermalizing faces.
    pub fn thermal_bath(mut self, bath: ThermalBath) -> Self {
        self.thermal_bath = Some(bath);
        self
    }

    /// Keep only the first `dims` configured axes (the species' spatial
    /// dimensionality). Default: every configured axis.
    pub fn dimensionality(mut self, dims: usize) -> Self {
        self.dimensionality = Some(dims);
        self
    }

    /// Build the engine, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - no axis is configured, or more than three are
    /// - the requested dimensionality is zero or exceeds the configured axes
    /// - any axis has non-finite walls or `min >= max`
    /// - a face is thermalizing and no thermal bath is set
    pub fn build(self) -> Result<BoundaryConditionEngine, BoundaryError> {
        if self.axes.is_empty() {
            return Err(BoundaryError::NoAxes);
        }
        if self.axes.len() > MAX_AXES {
            return Err(BoundaryError::TooManyAxes {
                count: self.axes.len(),
            });
        }
        let dims = self.dimensionality.unwrap_or(self.axes.len());
        if dims == 0 {
            return Err(BoundaryError::NoAxes);
        }
        if dims > self.axes.len() {
            return Err(BoundaryError::DimensionalityExceeded {
                requested: dims,
                available: self.axes.len(),
            });
        }

        let mut axes = SmallVec::new();
        for (axis, &(lower, upper, min, max)) in self.axes.iter().take(dims).enumerate() {
            if !min.is_finite() || !max.is_finite() || min >= max {
                return Err(BoundaryError::InvalidWalls { axis, min, max });
            }
            let resolve = |kind: PolicyKind, face: Face| -> Result<BoundaryPolicy, BoundaryError> {
                Ok(match kind {
                    PolicyKind::Reflecting => BoundaryPolicy::Reflecting,
                    PolicyKind::Periodic => BoundaryPolicy::Periodic { min, max },
                    PolicyKind::Thermalizing => BoundaryPolicy::Thermalizing(
                        self.thermal_bath
                            .clone()
                            .ok_or(BoundaryError::MissingThermalBath { axis, face })?,
                    ),
                    PolicyKind::Unset => BoundaryPolicy::Unset,
                })
            };
            axes.push(AxisBoundary {
                lower: resolve(lower, Face::Lower)?,
                upper: resolve(upper, Face::Upper)?,
                min,
                max,
            });
        }

        log::debug!(
            "boundary engine built: {} axes [{}]",
            axes.len(),
            axes.iter()
                .map(|a: &AxisBoundary| format!("{}/{}", a.lower.kind(), a.upper.kind()))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(BoundaryConditionEngine { axes })
    }
}
