//! One spatial domain: its field set and the boundary engines of
//! every species moving through it.

use std::io::Write;

use indexmap::IndexMap;
use yeepic_boundary::BoundaryConditionEngine;
use yeepic_config::SimulationParams;
use yeepic_dump::{grid_hash, DumpError, SnapshotWriter};
use yeepic_grid::{YeeComponent, YeeFields};

use crate::error::InitError;

/// Field storage and per-species boundary engines for one domain.
///
/// Built once at initialisation. The field solver mutates
/// [`fields_mut`](Self::fields_mut); the particle pusher hands each
/// species' particles to its [`engine`](Self::engine). Engines are
/// immutable and may be shared across worker threads.
#[derive(Debug)]
pub struct PicDomain {
    params: SimulationParams,
    fields: YeeFields,
    engines: IndexMap<String, BoundaryConditionEngine>,
}

impl PicDomain {
    /// Validate and discretize `params`, allocate every Yee component on
    /// `n_space + 1` primal points, and build one engine per species.
    pub fn new(mut params: SimulationParams) -> Result<Self, InitError> {
        params.discretize()?;
        let primal_dims = params.primal_dims();
        let fields = YeeFields::allocate(&primal_dims)?;

        let mut engines = IndexMap::with_capacity(params.species.len());
        for name in params.species.keys() {
            let engine = params.boundary_engine(name)?;
            engines.insert(name.clone(), engine);
        }

        log::info!(
            "domain initialised: geometry {}, {} primal points {:?}, {} species, {} steps",
            params.geometry,
            primal_dims.iter().product::<usize>(),
            primal_dims,
            engines.len(),
            params.n_time(),
        );
        Ok(Self {
            params,
            fields,
            engines,
        })
    }

    /// The discretized parameters this domain was built from.
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// All field components.
    pub fn fields(&self) -> &YeeFields {
        &self.fields
    }

    /// All field components, mutable.
    pub fn fields_mut(&mut self) -> &mut YeeFields {
        &mut self.fields
    }

    /// Boundary engine of species `name`.
    pub fn engine(&self, name: &str) -> Option<&BoundaryConditionEngine> {
        self.engines.get(name)
    }

    /// Boundary engine of the species at `index` (registration order).
    pub fn engine_at(&self, index: usize) -> Option<&BoundaryConditionEngine> {
        self.engines.get_index(index).map(|(_, engine)| engine)
    }

    /// `(species name, engine)` pairs in registration order.
    pub fn engines(&self) -> impl Iterator<Item = (&str, &BoundaryConditionEngine)> {
        self.engines.iter().map(|(name, engine)| (name.as_str(), engine))
    }

    /// Dump every row of one component.
    pub fn dump<W: Write>(
        &self,
        sink: &mut SnapshotWriter<W>,
        component: YeeComponent,
    ) -> Result<(), DumpError> {
        sink.dump_all(self.fields.get(component))
    }

    /// Combined fingerprint of every field component, in storage order.
    pub fn fields_hash(&self) -> u64 {
        self.fields
            .iter()
            .fold(0u64, |acc, (_, grid)| acc.rotate_left(5) ^ grid_hash(grid))
    }
}
