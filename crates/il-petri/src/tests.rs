use il_core::{PlaceId, TrainClass, TransitionId};

use crate::{CrossoverBlock, PetriError, PetriNet};

// ── Net ────────────────────────────────────────────────────────────────────────

mod net {
    use super::*;

    fn two_place() -> (PetriNet, PlaceId, PlaceId, TransitionId) {
        let mut net = PetriNet::new();
        let a = net.add_place("a", 2);
        let b = net.add_place("b", 0);
        let t = net.add_transition("t");
        net.input(t, a, 2).unwrap();
        net.output(t, b, 1).unwrap();
        (net, a, b, t)
    }

    #[test]
    fn weighted_fire_moves_tokens() {
        let (mut net, a, b, t) = two_place();
        assert!(net.is_enabled(t));
        net.fire(t).unwrap();
        assert_eq!(net.tokens(a), 0);
        assert_eq!(net.tokens(b), 1);
    }

    #[test]
    fn disabled_fire_leaves_marking() {
        let (mut net, a, b, t) = two_place();
        net.fire(t).unwrap();
        let before = net.snapshot();
        assert_eq!(net.fire(t), Err(PetriError::NotEnabled(t)));
        assert_eq!(net.snapshot(), before);
        assert_eq!((net.tokens(a), net.tokens(b)), (0, 1));
    }

    #[test]
    fn zero_weight_clamps_to_one() {
        let mut net = PetriNet::new();
        let a = net.add_place("a", 0);
        let t = net.add_transition("t");
        net.input(t, a, 0).unwrap();
        assert!(!net.is_enabled(t));
        net.put(a, 1).unwrap();
        assert!(net.is_enabled(t));
    }

    #[test]
    fn inhibitor_blocks_at_weight() {
        let mut net = PetriNet::new();
        let guard = net.add_place("guard", 1);
        let out = net.add_place("out", 0);
        let t = net.add_transition("t");
        net.inhibit(t, guard, 2).unwrap();
        net.output(t, out, 1).unwrap();

        assert!(net.is_enabled(t), "1 < 2");
        net.put(guard, 1).unwrap();
        assert!(!net.is_enabled(t), "2 is not < 2");
    }

    #[test]
    fn duplicate_input_arcs_add_up() {
        let mut net = PetriNet::new();
        let a = net.add_place("a", 1);
        let t = net.add_transition("t");
        net.input(t, a, 1).unwrap();
        net.input(t, a, 1).unwrap();
        assert!(!net.is_enabled(t));
        net.put(a, 1).unwrap();
        net.fire(t).unwrap();
        assert_eq!(net.tokens(a), 0);
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut net = PetriNet::new();
        let a = net.add_place("a", 0);
        let ghost_t = TransitionId(7);
        let ghost_p = PlaceId(9);
        assert_eq!(net.fire(ghost_t), Err(PetriError::UnknownTransition(ghost_t)));
        assert_eq!(net.input(ghost_t, a, 1), Err(PetriError::UnknownTransition(ghost_t)));
        let t = net.add_transition("t");
        assert_eq!(net.output(t, ghost_p, 1), Err(PetriError::UnknownPlace(ghost_p)));
        assert_eq!(net.put(ghost_p, 1), Err(PetriError::UnknownPlace(ghost_p)));
        assert!(!net.is_enabled(ghost_t));
        assert_eq!(net.tokens(ghost_p), 0);
    }

    #[test]
    fn snapshot_lists_places_in_order() {
        let (net, ..) = two_place();
        assert_eq!(net.snapshot(), "a[2] b[0]");
        assert_eq!(net.place_count(), 2);
        assert_eq!(net.transition_count(), 1);
    }
}

// ── Crossover ──────────────────────────────────────────────────────────────────

mod crossover {
    use super::*;

    #[test]
    fn passenger_gets_priority_over_freight() {
        let mut block = CrossoverBlock::new();
        block.request_approach(TrainClass::Freight);
        block.request_approach(TrainClass::Passenger);

        assert!(!block.can_enter(TrainClass::Freight));
        assert!(!block.enter(TrainClass::Freight));
        assert!(block.enter(TrainClass::Passenger));
        assert!(block.exit(TrainClass::Passenger));

        assert!(block.enter(TrainClass::Freight));
        assert_eq!(block.inside(TrainClass::Freight), 1);
    }

    #[test]
    fn block_holds_one_train() {
        let mut block = CrossoverBlock::new();
        block.request_approach(TrainClass::Passenger);
        block.request_approach(TrainClass::Passenger);

        assert!(block.enter(TrainClass::Passenger));
        assert!(!block.is_free());
        assert!(!block.enter(TrainClass::Passenger), "second passenger must wait");
        assert_eq!(block.waiting(TrainClass::Passenger), 1);

        assert!(block.exit(TrainClass::Passenger));
        assert!(block.is_free());
        assert!(block.enter(TrainClass::Passenger));
    }

    #[test]
    fn freight_alone_enters() {
        let mut block = CrossoverBlock::new();
        block.request_approach(TrainClass::Freight);
        assert!(block.can_enter(TrainClass::Freight));
        assert!(block.enter(TrainClass::Freight));
        assert!(!block.exit(TrainClass::Passenger));
        assert!(block.exit(TrainClass::Freight));
        assert!(block.is_free());
    }

    #[test]
    fn enter_without_approach_fails() {
        let mut block = CrossoverBlock::new();
        assert!(!block.enter(TrainClass::Passenger));
        assert!(block.is_free());
    }

    #[test]
    fn snapshot_shows_marking() {
        let mut block = CrossoverBlock::new();
        block.request_approach(TrainClass::Passenger);
        assert_eq!(
            block.snapshot(),
            "free[1] pass_wait[1] pass_in[0] pass_out[0] freight_wait[0] freight_in[0] freight_out[0]",
        );
    }
}
