//! Read-only network state passed to every dispatcher call.

use il_core::{Cycle, Section, TrainId};
use il_registry::{OccupancyTable, TrainRegistry};
use il_topology::TopologyGraph;

/// A read-only view of the network for one cycle's intent phase.
///
/// Built once per cycle and shared across all dispatcher calls.  The
/// interlocking cannot be mutated while a `CycleContext` is live, so every
/// train sees the same pre-cycle state.
#[derive(Copy, Clone)]
pub struct CycleContext<'a> {
    pub cycle:     Cycle,
    pub topology:  &'a TopologyGraph,
    pub registry:  &'a TrainRegistry,
    pub occupancy: &'a OccupancyTable,
}

impl<'a> CycleContext<'a> {
    #[inline]
    pub fn new(
        cycle:     Cycle,
        topology:  &'a TopologyGraph,
        registry:  &'a TrainRegistry,
        occupancy: &'a OccupancyTable,
    ) -> Self {
        Self { cycle, topology, registry, occupancy }
    }

    /// Current position of `train`; `None` if it is not registered.
    #[inline]
    pub fn position_of(&self, train: TrainId) -> Option<Section> {
        self.registry.position_of(train).ok()
    }
}
