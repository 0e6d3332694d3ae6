//! The `Dispatcher` trait: decides where each train wants to go.

use std::collections::BTreeMap;

use il_core::{Section, SectionId, TrainId, TrainRng};

use crate::CycleContext;

/// Pluggable intent source.
///
/// Called once per cycle for every train still on the network.  Returning
/// `None` means the train submits no intent this cycle; returning its own
/// section is a hold.
///
/// The intent phase may run in parallel, so implementations must be
/// `Send + Sync`.  Per-train randomness comes from the supplied `TrainRng`,
/// which keeps runs reproducible regardless of thread scheduling.
pub trait Dispatcher: Send + Sync + 'static {
    fn propose(
        &self,
        train: TrainId,
        ctx:   &CycleContext<'_>,
        rng:   &mut TrainRng,
    ) -> Option<Section>;
}

// ── NoopDispatcher ────────────────────────────────────────────────────────────

/// Never proposes anything; every train stays where it is.
pub struct NoopDispatcher;

impl Dispatcher for NoopDispatcher {
    fn propose(
        &self,
        _train: TrainId,
        _ctx:   &CycleContext<'_>,
        _rng:   &mut TrainRng,
    ) -> Option<Section> {
        None
    }
}

// ── RouteDispatcher ───────────────────────────────────────────────────────────

/// Each train follows a fixed list of sections and departs after the last.
///
/// A train proposes the section after its current one on its route.  Once it
/// stands on the final section it proposes `Departed`.  Trains with no route,
/// or standing somewhere off their route, propose nothing.
#[derive(Clone, Debug, Default)]
pub struct RouteDispatcher {
    routes: BTreeMap<TrainId, Vec<SectionId>>,
}

impl RouteDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_route(&mut self, train: TrainId, route: Vec<SectionId>) -> &mut Self {
        self.routes.insert(train, route);
        self
    }

    pub fn with_route(mut self, train: TrainId, route: Vec<SectionId>) -> Self {
        self.set_route(train, route);
        self
    }

    pub fn route(&self, train: TrainId) -> Option<&[SectionId]> {
        self.routes.get(&train).map(Vec::as_slice)
    }
}

impl Dispatcher for RouteDispatcher {
    fn propose(
        &self,
        train: TrainId,
        ctx:   &CycleContext<'_>,
        _rng:  &mut TrainRng,
    ) -> Option<Section> {
        let current = ctx.position_of(train)?.track()?;
        let route = self.routes.get(&train)?;
        let at = route.iter().position(|&s| s == current)?;
        Some(match route.get(at + 1) {
            Some(&next) => Section::Track(next),
            None        => Section::Departed,
        })
    }
}

// ── RandomWalkDispatcher ──────────────────────────────────────────────────────

/// Wanders to a uniformly chosen neighbour, leaving the network with
/// probability `exit_probability` each cycle.
///
/// A train on a section with no outgoing edges holds.
#[derive(Clone, Debug)]
pub struct RandomWalkDispatcher {
    pub exit_probability: f64,
}

impl RandomWalkDispatcher {
    pub fn new(exit_probability: f64) -> Self {
        Self { exit_probability }
    }
}

impl Dispatcher for RandomWalkDispatcher {
    fn propose(
        &self,
        train: TrainId,
        ctx:   &CycleContext<'_>,
        rng:   &mut TrainRng,
    ) -> Option<Section> {
        let current = ctx.position_of(train)?.track()?;
        if rng.gen_bool(self.exit_probability) {
            return Some(Section::Departed);
        }
        let next = rng
            .choose(ctx.topology.neighbors(current))
            .copied()
            .unwrap_or(current);
        Some(Section::Track(next))
    }
}
