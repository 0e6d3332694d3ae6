//! Movement intents: what each train asks for this cycle.

use std::collections::BTreeMap;

use il_core::{Section, TrainId};

/// One cycle's worth of movement requests, keyed by train.
///
/// Proposing twice for the same train replaces the earlier target, so a
/// batch never holds more than one intent per train.  A train may also be
/// entered with an *unset* target; such entries never produce an outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntentBatch {
    intents: BTreeMap<TrainId, Option<Section>>,
}

impl IntentBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that `train` move to `target` (or hold, if `target` is its
    /// current section).
    pub fn propose(&mut self, train: TrainId, target: impl Into<Section>) -> &mut Self {
        self.intents.insert(train, Some(target.into()));
        self
    }

    /// Enter `train` with no target.
    pub fn propose_unset(&mut self, train: TrainId) -> &mut Self {
        self.intents.insert(train, None);
        self
    }

    /// Builder-style [`propose`](Self::propose).
    pub fn with(mut self, train: TrainId, target: impl Into<Section>) -> Self {
        self.propose(train, target);
        self
    }

    /// The entry for `train`: `None` if absent, `Some(None)` if unset.
    pub fn get(&self, train: TrainId) -> Option<Option<Section>> {
        self.intents.get(&train).copied()
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Entries in ascending `TrainId` order.
    pub fn iter(&self) -> impl Iterator<Item = (TrainId, Option<Section>)> + '_ {
        self.intents.iter().map(|(&t, &s)| (t, s))
    }
}

impl FromIterator<(TrainId, Section)> for IntentBatch {
    fn from_iter<I: IntoIterator<Item = (TrainId, Section)>>(iter: I) -> Self {
        let mut batch = IntentBatch::new();
        batch.extend(iter);
        batch
    }
}

impl Extend<(TrainId, Section)> for IntentBatch {
    fn extend<I: IntoIterator<Item = (TrainId, Section)>>(&mut self, iter: I) {
        for (train, target) in iter {
            self.propose(train, target);
        }
    }
}
