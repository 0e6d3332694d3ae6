//! Weighted place/transition net with inhibitor arcs.

use il_core::{PlaceId, TransitionId};

use crate::{PetriError, PetriResult};

/// A weighted connection between a transition and a place.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Arc {
    pub place:  PlaceId,
    /// Always at least 1.
    pub weight: u32,
}

impl Arc {
    fn new(place: PlaceId, weight: u32) -> Self {
        Self { place, weight: weight.max(1) }
    }
}

#[derive(Clone, Debug, Default)]
struct Transition {
    name:     String,
    inputs:   Vec<Arc>,
    outputs:  Vec<Arc>,
    inhibits: Vec<Arc>,
}

/// Places, their markings, and transitions between them.
///
/// # Example
///
/// ```
/// use il_petri::PetriNet;
///
/// let mut net = PetriNet::new();
/// let free = net.add_place("free", 1);
/// let busy = net.add_place("busy", 0);
/// let take = net.add_transition("take");
/// net.input(take, free, 1).unwrap();
/// net.output(take, busy, 1).unwrap();
///
/// net.fire(take).unwrap();
/// assert_eq!(net.tokens(busy), 1);
/// assert!(net.fire(take).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PetriNet {
    place_names: Vec<String>,
    marking:     Vec<u32>,
    transitions: Vec<Transition>,
}

impl PetriNet {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Add a place with an initial token count.
    pub fn add_place(&mut self, name: &str, tokens: u32) -> PlaceId {
        let id = PlaceId(self.place_names.len() as u32);
        self.place_names.push(name.to_owned());
        self.marking.push(tokens);
        id
    }

    pub fn add_transition(&mut self, name: &str) -> TransitionId {
        let id = TransitionId(self.transitions.len() as u32);
        self.transitions.push(Transition { name: name.to_owned(), ..Transition::default() });
        id
    }

    /// Firing `t` consumes `weight` tokens from `place`.
    pub fn input(&mut self, t: TransitionId, place: PlaceId, weight: u32) -> PetriResult<()> {
        let arc = self.arc(place, weight)?;
        self.transition_mut(t)?.inputs.push(arc);
        Ok(())
    }

    /// Firing `t` produces `weight` tokens on `place`.
    pub fn output(&mut self, t: TransitionId, place: PlaceId, weight: u32) -> PetriResult<()> {
        let arc = self.arc(place, weight)?;
        self.transition_mut(t)?.outputs.push(arc);
        Ok(())
    }

    /// `t` may only fire while `place` holds fewer than `weight` tokens.
    pub fn inhibit(&mut self, t: TransitionId, place: PlaceId, weight: u32) -> PetriResult<()> {
        let arc = self.arc(place, weight)?;
        self.transition_mut(t)?.inhibits.push(arc);
        Ok(())
    }

    // ── Marking ───────────────────────────────────────────────────────────

    /// Tokens currently in `place` (0 for unknown places).
    #[inline]
    pub fn tokens(&self, place: PlaceId) -> u32 {
        self.marking.get(place.index()).copied().unwrap_or(0)
    }

    /// Add `n` tokens to `place` from outside the net.
    pub fn put(&mut self, place: PlaceId, n: u32) -> PetriResult<()> {
        let slot = self
            .marking
            .get_mut(place.index())
            .ok_or(PetriError::UnknownPlace(place))?;
        *slot = slot.saturating_add(n);
        Ok(())
    }

    // ── Firing ────────────────────────────────────────────────────────────

    /// Every input arc is satisfied and no inhibitor arc is triggered.
    pub fn is_enabled(&self, t: TransitionId) -> bool {
        let Some(tr) = self.transitions.get(t.index()) else {
            return false;
        };
        tr.inhibits.iter().all(|a| self.tokens(a.place) < a.weight)
            && self.inputs_satisfied(&tr.inputs)
    }

    /// Fire `t`, moving tokens along its arcs.
    ///
    /// The marking is untouched if `t` is not enabled.
    pub fn fire(&mut self, t: TransitionId) -> PetriResult<()> {
        if !self.is_enabled(t) {
            return Err(match self.transitions.get(t.index()) {
                Some(_) => PetriError::NotEnabled(t),
                None    => PetriError::UnknownTransition(t),
            });
        }
        let tr = &self.transitions[t.index()];
        for a in &tr.inputs {
            self.marking[a.place.index()] -= a.weight;
        }
        for a in &tr.outputs {
            let slot = &mut self.marking[a.place.index()];
            *slot = slot.saturating_add(a.weight);
        }
        tracing::trace!(transition = %tr.name, "fired");
        Ok(())
    }

    /// `name[tokens]` for every place, in insertion order.
    pub fn snapshot(&self) -> String {
        self.place_names
            .iter()
            .zip(&self.marking)
            .map(|(name, n)| format!("{name}[{n}]"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn place_count(&self) -> usize {
        self.place_names.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Input arcs naming the same place add up.
    fn inputs_satisfied(&self, inputs: &[Arc]) -> bool {
        inputs.iter().all(|a| {
            let needed: u32 = inputs
                .iter()
                .filter(|b| b.place == a.place)
                .map(|b| b.weight)
                .sum();
            self.tokens(a.place) >= needed
        })
    }

    fn arc(&self, place: PlaceId, weight: u32) -> PetriResult<Arc> {
        if place.index() >= self.marking.len() {
            return Err(PetriError::UnknownPlace(place));
        }
        Ok(Arc::new(place, weight))
    }

    fn transition_mut(&mut self, t: TransitionId) -> PetriResult<&mut Transition> {
        self.transitions
            .get_mut(t.index())
            .ok_or(PetriError::UnknownTransition(t))
    }
}
