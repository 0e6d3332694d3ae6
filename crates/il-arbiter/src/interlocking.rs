//! The owned network instance.

use il_core::{Section, TrainClass, TrainId};
use il_registry::{OccupancyTable, RegistryResult, TrainRegistry};
use il_topology::{CrossoverLayout, TopologyGraph, TopologyResult, crossover_layout};

use crate::{CycleArbiter, CycleReport, IntentBatch, PriorityTable, ProposedMove};

/// Topology, occupancy, train registry and priority rules for one network.
///
/// All cycle state lives here; there is no process-wide table.  Resolution
/// takes `&mut self`, so with a single owner a cycle is one critical section
/// by construction.
///
/// # Example
///
/// ```
/// use il_arbiter::{IntentBatch, Interlocking, MovementOutcome};
/// use il_core::{TrainClass, TrainId};
///
/// let (mut net, l) = Interlocking::crossover().unwrap();
/// net.register_train(TrainId(501), TrainClass::Freight, l.s3).unwrap();
/// net.register_train(TrainId(601), TrainClass::Passenger, l.s1).unwrap();
///
/// let batch = IntentBatch::new()
///     .with(TrainId(501), l.s4)
///     .with(TrainId(601), l.s5);
/// let report = net.resolve_cycle(&batch);
/// assert_eq!(report.get(TrainId(501)), Some(MovementOutcome::Blocked));
/// assert_eq!(report.get(TrainId(601)), Some(MovementOutcome::Moved));
/// ```
#[derive(Clone, Debug)]
pub struct Interlocking {
    topology:   TopologyGraph,
    occupancy:  OccupancyTable,
    registry:   TrainRegistry,
    priorities: PriorityTable,
}

impl Interlocking {
    /// A network over `topology` with every section free, no trains and no
    /// priority rules.
    pub fn new(topology: TopologyGraph) -> Self {
        let occupancy = OccupancyTable::new(topology.section_count());
        Self {
            topology,
            occupancy,
            registry:   TrainRegistry::new(),
            priorities: PriorityTable::new(),
        }
    }

    /// Replace the priority table.
    pub fn with_priorities(mut self, priorities: PriorityTable) -> Self {
        self.priorities = priorities;
        self
    }

    /// The default crossover layout with its right-of-way rules.
    pub fn crossover() -> TopologyResult<(Self, CrossoverLayout)> {
        let (topology, layout) = crossover_layout()?;
        let net = Self::new(topology).with_priorities(PriorityTable::crossover(&layout));
        Ok((net, layout))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn topology(&self) -> &TopologyGraph {
        &self.topology
    }

    pub fn occupancy(&self) -> &OccupancyTable {
        &self.occupancy
    }

    pub fn registry(&self) -> &TrainRegistry {
        &self.registry
    }

    pub fn priorities(&self) -> &PriorityTable {
        &self.priorities
    }

    // ── Set-up ────────────────────────────────────────────────────────────

    /// Register a train at `start`.
    ///
    /// Fails, leaving the network untouched, if `start` is a real section
    /// that is already occupied (or unknown), or if `train` is already
    /// registered.  These are set-up errors; abort rather than retry.
    pub fn register_train(
        &mut self,
        train: TrainId,
        class: TrainClass,
        start: impl Into<Section>,
    ) -> RegistryResult<()> {
        self.registry.admit(&mut self.occupancy, train, class, start.into())
    }

    /// Current section of `train`, or `Departed`.
    pub fn position_of(&self, train: TrainId) -> RegistryResult<Section> {
        self.registry.position_of(train)
    }

    // ── Cycle ─────────────────────────────────────────────────────────────

    /// Resolve one batch of intents and commit the survivors.
    ///
    /// The report has an entry only for trains whose intent was valid.  An
    /// empty batch leaves the network unchanged.
    pub fn resolve_cycle(&mut self, intents: &IntentBatch) -> CycleReport {
        let resolution = CycleArbiter::new(
            &self.topology,
            &self.registry,
            &self.occupancy,
            &self.priorities,
        )
        .arbitrate(intents);

        self.commit(&resolution.commits);
        debug_assert!(self.registry.is_consistent_with(&self.occupancy));

        CycleReport::new(resolution.outcomes)
    }

    /// Apply every surviving move.
    ///
    /// All sources are vacated before any target is claimed.  Survivors have
    /// distinct targets that were free at cycle start, so the result does not
    /// depend on commit order.
    ///
    /// A move naming an unregistered train is skipped with a warning and
    /// touches neither table.
    pub(crate) fn commit(&mut self, moves: &[ProposedMove]) {
        let moving: Vec<&ProposedMove> = moves
            .iter()
            .filter(|m| !m.is_hold())
            .filter(|m| {
                let known = self.registry.get(m.train).is_some();
                if !known {
                    tracing::warn!(train = %m.train, "commit skipped: train not registered");
                }
                known
            })
            .collect();

        for m in &moving {
            self.occupancy.vacate(m.from);
        }
        for m in &moving {
            if let Err(e) = self.registry.set_position(m.train, m.to) {
                tracing::warn!(train = %m.train, error = %e, "commit skipped");
                continue;
            }
            if let Section::Track(to) = m.to {
                self.occupancy.occupy(to, m.train);
            }
            tracing::debug!(train = %m.train, from = %m.from, to = %m.to, "committed");
        }
    }
}
