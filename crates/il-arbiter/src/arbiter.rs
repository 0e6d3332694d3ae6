//! The arbitration passes.
//!
//! [`CycleArbiter`] only *reads* the network: it turns an intent batch into
//! a [`Resolution`] (an outcome per valid move plus the list of moves to
//! commit).  Writing the commits is left to [`Interlocking`], which keeps the
//! read phase and the single write phase visibly separate.
//!
//! Every pass assigns outcomes only to moves that are still unresolved, and
//! none of them depends on the order moves appear in: results are a function
//! of the set of valid moves, the pre-cycle occupancy and the priority table.
//!
//! [`Interlocking`]: crate::Interlocking

use std::collections::BTreeMap;

use il_core::{Section, SectionId, TrainClass, TrainId};
use il_registry::{OccupancyTable, TrainRegistry};
use il_topology::TopologyGraph;

use crate::{IntentBatch, MovementOutcome, PriorityTable};

#[cfg(not(feature = "fx-hash"))]
type GroupMap<K, V> = std::collections::HashMap<K, V>;
#[cfg(feature = "fx-hash")]
type GroupMap<K, V> = rustc_hash::FxHashMap<K, V>;

// ── ProposedMove ──────────────────────────────────────────────────────────────

/// A validated one-hop request.
///
/// `from` is always a real section: departed trains never produce moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ProposedMove {
    pub train: TrainId,
    pub class: TrainClass,
    pub from:  SectionId,
    pub to:    Section,
}

impl ProposedMove {
    /// The train asked to stay where it is.
    #[inline]
    pub fn is_hold(&self) -> bool {
        self.to == Section::Track(self.from)
    }
}

/// Output of [`CycleArbiter::arbitrate`].
#[derive(Clone, Debug, Default)]
pub struct Resolution {
    /// One entry per valid move.  Commits are already marked `Moved`.
    pub outcomes: BTreeMap<TrainId, MovementOutcome>,
    /// Moves that survived every pass, in ascending `TrainId` order.
    pub commits:  Vec<ProposedMove>,
}

// ── CycleArbiter ──────────────────────────────────────────────────────────────

/// Read-only view of the network for one cycle.
pub struct CycleArbiter<'a> {
    topology:   &'a TopologyGraph,
    registry:   &'a TrainRegistry,
    occupancy:  &'a OccupancyTable,
    priorities: &'a PriorityTable,
}

impl<'a> CycleArbiter<'a> {
    pub fn new(
        topology:   &'a TopologyGraph,
        registry:   &'a TrainRegistry,
        occupancy:  &'a OccupancyTable,
        priorities: &'a PriorityTable,
    ) -> Self {
        Self { topology, registry, occupancy, priorities }
    }

    /// Run every pass over `intents` and decide the fate of each valid move.
    pub fn arbitrate(&self, intents: &IntentBatch) -> Resolution {
        let moves = self.validate(intents);
        let mut outcomes = BTreeMap::new();

        mark_swap_collisions(&moves, &mut outcomes);
        classify_contention(&moves, &mut outcomes);
        self.apply_priority_rules(&moves, &mut outcomes);
        self.recheck_occupancy(&moves, &mut outcomes);

        let commits: Vec<ProposedMove> = moves
            .into_iter()
            .filter(|m| !outcomes.contains_key(&m.train))
            .collect();
        for m in &commits {
            outcomes.insert(m.train, MovementOutcome::Moved);
        }

        Resolution { outcomes, commits }
    }

    /// Keep only intents that name a registered, non-departed train and a
    /// target that is the departed marker, the train's own section, or a
    /// declared neighbour.  Everything else is dropped without an outcome.
    pub fn validate(&self, intents: &IntentBatch) -> Vec<ProposedMove> {
        intents
            .iter()
            .filter_map(|(train, target)| {
                let Some(record) = self.registry.get(train) else {
                    tracing::trace!(%train, "intent dropped: unknown train");
                    return None;
                };
                let Section::Track(from) = record.position else {
                    tracing::trace!(%train, "intent dropped: train has departed");
                    return None;
                };
                let Some(to) = target else {
                    tracing::trace!(%train, "intent dropped: no target");
                    return None;
                };
                let legal = match to {
                    Section::Departed  => true,
                    Section::Track(to) => to == from || self.topology.is_neighbor(from, to),
                };
                if !legal {
                    tracing::trace!(%train, %from, %to, "intent dropped: not adjacent");
                    return None;
                }
                Some(ProposedMove { train, class: record.class, from, to })
            })
            .collect()
    }

    /// Priority pass: block unresolved moves that must yield to another move
    /// proposed in this batch.
    fn apply_priority_rules(
        &self,
        moves:    &[ProposedMove],
        outcomes: &mut BTreeMap<TrainId, MovementOutcome>,
    ) {
        if self.priorities.is_empty() {
            return;
        }
        for m in moves {
            if outcomes.contains_key(&m.train) {
                continue;
            }
            if self.priorities.must_yield(m, moves) {
                tracing::debug!(train = %m.train, from = %m.from, to = %m.to, "blocked by priority rule");
                outcomes.insert(m.train, MovementOutcome::Blocked);
            }
        }
    }

    /// Occupancy pass: an unresolved move into a section held by another
    /// train at cycle start is a local deadlock, even if that train leaves
    /// in this same batch.
    fn recheck_occupancy(
        &self,
        moves:    &[ProposedMove],
        outcomes: &mut BTreeMap<TrainId, MovementOutcome>,
    ) {
        for m in moves {
            if outcomes.contains_key(&m.train) {
                continue;
            }
            let Section::Track(to) = m.to else { continue };
            if let Some(holder) = self.occupancy.occupant(to) {
                if holder != m.train {
                    tracing::debug!(train = %m.train, %to, %holder, "target occupied");
                    outcomes.insert(m.train, MovementOutcome::DeadlockLocal);
                }
            }
        }
    }
}

// ── Stateless passes ──────────────────────────────────────────────────────────

/// Collision pass: both trains of every mirror swap between real sections.
fn mark_swap_collisions(
    moves:    &[ProposedMove],
    outcomes: &mut BTreeMap<TrainId, MovementOutcome>,
) {
    for (i, a) in moves.iter().enumerate() {
        for b in &moves[i + 1..] {
            if a.to.is_departed() || b.to.is_departed() {
                continue;
            }
            if a.to == Section::Track(b.from) && b.to == Section::Track(a.from) {
                tracing::debug!(a = %a.train, b = %b.train, "head-on swap");
                outcomes.insert(a.train, MovementOutcome::Collision);
                outcomes.insert(b.train, MovementOutcome::Collision);
            }
        }
    }
}

/// Contention pass: groups of unresolved moves sharing a real target.
///
/// A single-class group deadlocks.  In a mixed group every freight proposer
/// is blocked; if more than one passenger proposer remains they deadlock
/// among themselves, since two survivors must never share a target.
fn classify_contention(
    moves:    &[ProposedMove],
    outcomes: &mut BTreeMap<TrainId, MovementOutcome>,
) {
    let mut groups: GroupMap<SectionId, Vec<&ProposedMove>> = GroupMap::default();
    for m in moves {
        if outcomes.contains_key(&m.train) {
            continue;
        }
        if let Section::Track(to) = m.to {
            groups.entry(to).or_default().push(m);
        }
    }

    for (target, group) in groups {
        if group.len() <= 1 {
            continue;
        }
        let priority = group.iter().filter(|m| m.class.is_priority()).count();
        let mixed = priority > 0 && priority < group.len();

        for m in &group {
            let outcome = if mixed && !m.class.is_priority() {
                MovementOutcome::Blocked
            } else if !mixed || priority > 1 {
                MovementOutcome::DeadlockLocal
            } else {
                continue;
            };
            tracing::debug!(train = %m.train, %target, %outcome, "contention");
            outcomes.insert(m.train, outcome);
        }
    }
}
