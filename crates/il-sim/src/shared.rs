//! A lock-guarded interlocking for more than one intent producer.

use std::sync::{Arc, Mutex, MutexGuard};

use il_arbiter::{CycleReport, IntentBatch, Interlocking};
use il_core::{Section, TrainClass, TrainId};

use crate::{SimError, SimResult};

/// Cloneable handle to one [`Interlocking`] shared between threads.
///
/// Every call holds the lock for its whole duration, so a cycle resolution
/// never interleaves with another resolution or a registration.
#[derive(Clone, Debug)]
pub struct SharedInterlocking {
    inner: Arc<Mutex<Interlocking>>,
}

impl SharedInterlocking {
    pub fn new(interlocking: Interlocking) -> Self {
        Self { inner: Arc::new(Mutex::new(interlocking)) }
    }

    fn lock(&self) -> SimResult<MutexGuard<'_, Interlocking>> {
        self.inner.lock().map_err(|_| SimError::Poisoned)
    }

    pub fn resolve_cycle(&self, intents: &IntentBatch) -> SimResult<CycleReport> {
        Ok(self.lock()?.resolve_cycle(intents))
    }

    pub fn register_train(
        &self,
        train: TrainId,
        class: TrainClass,
        start: impl Into<Section>,
    ) -> SimResult<()> {
        self.lock()?.register_train(train, class, start)?;
        Ok(())
    }

    pub fn position_of(&self, train: TrainId) -> SimResult<Section> {
        Ok(self.lock()?.position_of(train)?)
    }

    /// Run `f` with shared access to the locked network.
    pub fn with<R>(&self, f: impl FnOnce(&Interlocking) -> R) -> SimResult<R> {
        let guard = self.lock()?;
        Ok(f(&guard))
    }
}
