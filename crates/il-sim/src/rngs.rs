//! Per-train RNG streams, kept apart from the interlocking so the intent
//! phase can borrow them mutably while the network is borrowed shared.

use il_core::{TrainId, TrainRng};

/// `TrainRng`s sorted by `TrainId`.
pub struct TrainRngs {
    seed:  u64,
    inner: Vec<(TrainId, TrainRng)>,
}

impl TrainRngs {
    pub fn new(seed: u64) -> Self {
        Self { seed, inner: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Create the stream for `train` if it does not exist yet.
    pub fn ensure(&mut self, train: TrainId) {
        if let Err(at) = self.inner.binary_search_by_key(&train, |(t, _)| *t) {
            self.inner.insert(at, (train, TrainRng::new(self.seed, train)));
        }
    }

    pub fn get_mut(&mut self, train: TrainId) -> Option<&mut TrainRng> {
        let at = self.inner.binary_search_by_key(&train, |(t, _)| *t).ok()?;
        Some(&mut self.inner[at].1)
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [(TrainId, TrainRng)] {
        &mut self.inner
    }
}
