//! Single crossover block shared by passenger and freight traffic.
//!
//! ```text
//!   pass_wait ──► T_pass_enter ──► pass_in ──► T_pass_exit ──► pass_out
//!                      ▲                            │
//!                     free ◄────────────────────────┤
//!                      ▼                            │
//! freight_wait ─► T_freight_enter ─► freight_in ─► T_freight_exit ─► freight_out
//!                      ┆
//!          inhibited while pass_wait ≥ 1
//! ```

use il_core::{PlaceId, TrainClass, TransitionId};

use crate::{PetriNet, PetriResult};

#[derive(Copy, Clone, Debug)]
struct Lane {
    wait:   PlaceId,
    inside: PlaceId,
    enter:  TransitionId,
    exit:   TransitionId,
}

/// Mutual exclusion on one block, with passengers ahead of freight.
#[derive(Clone, Debug)]
pub struct CrossoverBlock {
    net:       PetriNet,
    free:      PlaceId,
    passenger: Lane,
    freight:   Lane,
}

impl CrossoverBlock {
    pub fn new() -> Self {
        let mut net = PetriNet::new();
        let free = net.add_place("free", 1);
        let pass_wait = net.add_place("pass_wait", 0);
        let pass_in = net.add_place("pass_in", 0);
        let pass_out = net.add_place("pass_out", 0);
        let freight_wait = net.add_place("freight_wait", 0);
        let freight_in = net.add_place("freight_in", 0);
        let freight_out = net.add_place("freight_out", 0);

        let pass_enter = net.add_transition("T_pass_enter");
        let pass_exit = net.add_transition("T_pass_exit");
        let freight_enter = net.add_transition("T_freight_enter");
        let freight_exit = net.add_transition("T_freight_exit");

        // Every id above was just created on this net.
        let wired = (|| -> PetriResult<()> {
            net.input(pass_enter, free, 1)?;
            net.input(pass_enter, pass_wait, 1)?;
            net.output(pass_enter, pass_in, 1)?;
            net.input(pass_exit, pass_in, 1)?;
            net.output(pass_exit, pass_out, 1)?;
            net.output(pass_exit, free, 1)?;

            net.input(freight_enter, free, 1)?;
            net.input(freight_enter, freight_wait, 1)?;
            net.inhibit(freight_enter, pass_wait, 1)?;
            net.output(freight_enter, freight_in, 1)?;
            net.input(freight_exit, freight_in, 1)?;
            net.output(freight_exit, freight_out, 1)?;
            net.output(freight_exit, free, 1)
        })();
        debug_assert!(wired.is_ok(), "crossover wiring: {wired:?}");

        Self {
            net,
            free,
            passenger: Lane { wait: pass_wait, inside: pass_in, enter: pass_enter, exit: pass_exit },
            freight:   Lane { wait: freight_wait, inside: freight_in, enter: freight_enter, exit: freight_exit },
        }
    }

    fn lane(&self, class: TrainClass) -> Lane {
        match class {
            TrainClass::Passenger => self.passenger,
            TrainClass::Freight   => self.freight,
        }
    }

    /// A train of `class` arrives and queues for the block.
    pub fn request_approach(&mut self, class: TrainClass) {
        let wait = self.lane(class).wait;
        let queued = self.net.put(wait, 1);
        debug_assert!(queued.is_ok());
        tracing::debug!(class = %class, "approach requested");
    }

    pub fn can_enter(&self, class: TrainClass) -> bool {
        self.net.is_enabled(self.lane(class).enter)
    }

    /// Admit one waiting train of `class`; `false` if it must keep waiting.
    pub fn enter(&mut self, class: TrainClass) -> bool {
        let entered = self.net.fire(self.lane(class).enter).is_ok();
        tracing::debug!(class = %class, entered, "enter");
        entered
    }

    /// Release the block; `false` if no train of `class` is inside.
    pub fn exit(&mut self, class: TrainClass) -> bool {
        self.net.fire(self.lane(class).exit).is_ok()
    }

    pub fn is_free(&self) -> bool {
        self.net.tokens(self.free) == 1
    }

    pub fn waiting(&self, class: TrainClass) -> u32 {
        self.net.tokens(self.lane(class).wait)
    }

    pub fn inside(&self, class: TrainClass) -> u32 {
        self.net.tokens(self.lane(class).inside)
    }

    pub fn net(&self) -> &PetriNet {
        &self.net
    }

    pub fn snapshot(&self) -> String {
        self.net.snapshot()
    }
}

impl Default for CrossoverBlock {
    fn default() -> Self {
        Self::new()
    }
}
