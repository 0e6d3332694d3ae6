//! Fluent builder for constructing a [`Sim`].

use il_arbiter::Interlocking;
use il_core::{RunConfig, Section, TrainClass, TrainId};

use crate::{Dispatcher, Sim, SimResult, TrainRngs};

/// Fluent builder for [`Sim<D>`].
///
/// Trains added with [`train`][Self::train] are registered in call order
/// during [`build`][Self::build]; the first failure aborts the build.
/// Trains already registered on the supplied interlocking get RNG streams
/// too.
pub struct SimBuilder<D: Dispatcher> {
    config:       RunConfig,
    interlocking: Interlocking,
    dispatcher:   D,
    trains:       Vec<(TrainId, TrainClass, Section)>,
}

impl<D: Dispatcher> SimBuilder<D> {
    pub fn new(config: RunConfig, interlocking: Interlocking, dispatcher: D) -> Self {
        Self { config, interlocking, dispatcher, trains: Vec::new() }
    }

    /// Queue a train for registration at `start`.
    pub fn train(mut self, train: TrainId, class: TrainClass, start: impl Into<Section>) -> Self {
        self.trains.push((train, class, start.into()));
        self
    }

    /// Validate the config, register queued trains, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<D>> {
        self.config.validate()?;

        let mut interlocking = self.interlocking;
        for (train, class, start) in self.trains {
            interlocking.register_train(train, class, start)?;
        }

        let mut rngs = TrainRngs::new(self.config.seed);
        for (train, _) in interlocking.registry().iter() {
            rngs.ensure(train);
        }

        Ok(Sim {
            clock:      self.config.make_clock(),
            config:     self.config,
            interlocking,
            rngs,
            dispatcher: self.dispatcher,
        })
    }
}
