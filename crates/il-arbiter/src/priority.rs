//! Static right-of-way rules.
//!
//! A [`PriorityRule`] says: a move matching `yielding` is blocked whenever
//! any move in the same batch matches one of `preempting`.  Rules are
//! topology-specific and are checked independently of contention groups, so
//! they apply even when the yielding train is the only proposer for its
//! target (e.g. a freight crossing move against a passenger move over the
//! same junction).

use il_core::{Section, SectionId, TrainClass};
use il_topology::CrossoverLayout;

use crate::ProposedMove;

/// A class plus a one-hop transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MovePattern {
    pub class: TrainClass,
    pub from:  SectionId,
    pub to:    Section,
}

impl MovePattern {
    pub fn new(class: TrainClass, from: SectionId, to: impl Into<Section>) -> Self {
        Self { class, from, to: to.into() }
    }

    #[inline]
    pub fn matches(&self, mv: &ProposedMove) -> bool {
        self.class == mv.class && self.from == mv.from && self.to == mv.to
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriorityRule {
    pub yielding:   MovePattern,
    pub preempting: Vec<MovePattern>,
}

/// An ordered list of [`PriorityRule`]s.  Empty by default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PriorityTable {
    rules: Vec<PriorityRule>,
}

impl PriorityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The right-of-way rules of the default crossover layout: freight
    /// S3→S4 yields to passenger S1→S5 or S2→S6.
    pub fn crossover(layout: &CrossoverLayout) -> Self {
        let mut table = Self::new();
        table.add_rule(
            MovePattern::new(TrainClass::Freight, layout.s3, layout.s4),
            [
                MovePattern::new(TrainClass::Passenger, layout.s1, layout.s5),
                MovePattern::new(TrainClass::Passenger, layout.s2, layout.s6),
            ],
        );
        table
    }

    pub fn add_rule(
        &mut self,
        yielding:   MovePattern,
        preempting: impl IntoIterator<Item = MovePattern>,
    ) -> &mut Self {
        self.rules.push(PriorityRule {
            yielding,
            preempting: preempting.into_iter().collect(),
        });
        self
    }

    pub fn rules(&self) -> &[PriorityRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// `true` if some rule makes `mv` yield to another move in `batch`.
    pub fn must_yield(&self, mv: &ProposedMove, batch: &[ProposedMove]) -> bool {
        self.rules
            .iter()
            .filter(|rule| rule.yielding.matches(mv))
            .any(|rule| {
                batch.iter().any(|other| {
                    other.train != mv.train
                        && rule.preempting.iter().any(|p| p.matches(other))
                })
            })
    }
}
