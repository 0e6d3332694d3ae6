//! Property-based tests over random placements and intent batches.
//!
//! Every case uses the default crossover layout (with its priority table),
//! places up to eight trains on distinct sections and proposes a random
//! target for each: the train's own section, a neighbour, an arbitrary
//! section, the departed marker, or nothing.
//!
//! **Exclusion**: no real section ever holds two trains.
//! **Legality**: every committed transition follows a declared hop, holds,
//! or departs.
//! **Swaps**: mirror swaps of real sections are always `Collision`.
//! **Contention**: single-class groups deadlock; mixed groups block freight.
//! **Idle**: an empty batch changes nothing.
//! **Determinism**: resolving the same batch on two copies agrees.

use std::collections::HashMap;

use proptest::prelude::*;

use il_core::{Section, SectionId, TrainClass, TrainId};

use crate::{CycleArbiter, IntentBatch, Interlocking, MovementOutcome, ProposedMove};

const SECTIONS: usize = 11;

#[derive(Clone, Debug)]
enum Pick {
    Hold,
    Neighbour(usize),
    Anywhere(usize),
    Depart,
    Unset,
}

fn pick() -> impl Strategy<Value = Option<Pick>> {
    prop::option::weighted(
        0.85,
        prop_oneof![
            1 => Just(Pick::Hold),
            5 => (0usize..4).prop_map(Pick::Neighbour),
            2 => (0usize..=SECTIONS).prop_map(Pick::Anywhere),
            1 => Just(Pick::Depart),
            1 => Just(Pick::Unset),
        ],
    )
}

/// `(start section index, is_freight, intent)` per train, distinct starts.
fn scenario() -> impl Strategy<Value = Vec<(usize, bool, Option<Pick>)>> {
    (
        prop::sample::subsequence((0..SECTIONS).collect::<Vec<_>>(), 0..=8),
        prop::collection::vec((any::<bool>(), pick()), 8),
    )
        .prop_map(|(starts, extras)| {
            starts
                .into_iter()
                .zip(extras)
                .map(|(s, (freight, p))| (s, freight, p))
                .collect()
        })
}

fn build(plan: &[(usize, bool, Option<Pick>)]) -> (Interlocking, IntentBatch) {
    let (mut net, _) = Interlocking::crossover().unwrap();
    let mut batch = IntentBatch::new();
    for (i, (start, freight, pick)) in plan.iter().enumerate() {
        let train = TrainId(i as u32 + 1);
        let from = SectionId(*start as u16);
        let class = if *freight { TrainClass::Freight } else { TrainClass::Passenger };
        net.register_train(train, class, from).unwrap();

        let neighbours = net.topology().neighbors(from);
        match pick {
            None => {}
            Some(Pick::Hold) => { batch.propose(train, from); }
            Some(Pick::Neighbour(k)) => {
                if !neighbours.is_empty() {
                    batch.propose(train, neighbours[k % neighbours.len()]);
                }
            }
            Some(Pick::Anywhere(k)) if *k == SECTIONS => { batch.propose(train, Section::Departed); }
            Some(Pick::Anywhere(k)) => { batch.propose(train, SectionId(*k as u16)); }
            Some(Pick::Depart) => { batch.propose(train, Section::Departed); }
            Some(Pick::Unset) => { batch.propose_unset(train); }
        }
    }
    (net, batch)
}

fn valid_moves(net: &Interlocking, batch: &IntentBatch) -> Vec<ProposedMove> {
    CycleArbiter::new(net.topology(), net.registry(), net.occupancy(), net.priorities())
        .validate(batch)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn exclusion_and_consistency_hold(plan in scenario()) {
        let (mut net, batch) = build(&plan);
        net.resolve_cycle(&batch);

        prop_assert!(net.registry().is_consistent_with(net.occupancy()));
        let mut seen = HashMap::new();
        for (train, rec) in net.registry().iter() {
            if let Section::Track(s) = rec.position {
                prop_assert!(seen.insert(s, train).is_none(), "{s} shared");
            }
        }
    }

    #[test]
    fn committed_moves_are_legal(plan in scenario()) {
        let (mut net, batch) = build(&plan);
        let before = net.registry().clone();
        let topology = net.topology().clone();
        let report = net.resolve_cycle(&batch);

        for (train, outcome) in report.iter() {
            let old = before.position_of(train).unwrap();
            let new = net.position_of(train).unwrap();
            if !outcome.is_committed() {
                prop_assert_eq!(old, new);
                continue;
            }
            let Section::Track(from) = old else {
                return Err(TestCaseError::fail("departed train moved"));
            };
            let legal = match new {
                Section::Departed  => true,
                Section::Track(to) => to == from || topology.is_neighbor(from, to),
            };
            prop_assert!(legal, "{train}: {from} -> {new}");
        }
    }

    #[test]
    fn only_valid_intents_reported(plan in scenario()) {
        let (mut net, batch) = build(&plan);
        let moves = valid_moves(&net, &batch);
        let report = net.resolve_cycle(&batch);

        prop_assert_eq!(report.len(), moves.len());
        for m in &moves {
            prop_assert!(report.contains(m.train));
        }
    }

    #[test]
    fn mirror_swaps_collide(plan in scenario()) {
        let (mut net, batch) = build(&plan);
        let moves = valid_moves(&net, &batch);
        let report = net.resolve_cycle(&batch);

        for a in &moves {
            for b in &moves {
                if a.train != b.train
                    && a.to == Section::Track(b.from)
                    && b.to == Section::Track(a.from)
                {
                    prop_assert_eq!(report.get(a.train), Some(MovementOutcome::Collision));
                }
            }
        }
    }

    #[test]
    fn contention_groups_resolve_by_class(plan in scenario()) {
        let (mut net, batch) = build(&plan);
        let moves = valid_moves(&net, &batch);
        let report = net.resolve_cycle(&batch);

        let mut groups: HashMap<SectionId, Vec<&ProposedMove>> = HashMap::new();
        for m in &moves {
            if report.get(m.train) == Some(MovementOutcome::Collision) {
                continue;
            }
            if let Section::Track(to) = m.to {
                groups.entry(to).or_default().push(m);
            }
        }
        for group in groups.values().filter(|g| g.len() > 1) {
            let freight = group.iter().filter(|m| m.class == TrainClass::Freight).count();
            let mixed = freight > 0 && freight < group.len();
            for m in group {
                let got = report.get(m.train);
                if !mixed {
                    prop_assert_eq!(got, Some(MovementOutcome::DeadlockLocal));
                } else if m.class == TrainClass::Freight {
                    prop_assert_eq!(got, Some(MovementOutcome::Blocked));
                }
            }
        }
    }

    #[test]
    fn empty_batch_is_idle(plan in scenario()) {
        let (mut net, _) = build(&plan);
        let before = (net.occupancy().clone(), net.registry().clone());
        let report = net.resolve_cycle(&IntentBatch::new());
        prop_assert!(report.is_empty());
        prop_assert_eq!((net.occupancy().clone(), net.registry().clone()), before);
    }

    #[test]
    fn resolution_is_deterministic(plan in scenario()) {
        let (mut a, batch) = build(&plan);
        let mut b = a.clone();
        prop_assert_eq!(a.resolve_cycle(&batch), b.resolve_cycle(&batch));
        prop_assert_eq!(a.occupancy(), b.occupancy());
    }
}
