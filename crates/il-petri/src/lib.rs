//! `il-petri`: a small place/transition net engine.
//!
//! Independent of the section-graph arbiter: places hold token counts,
//! transitions consume from input arcs and produce on output arcs, and
//! inhibitor arcs forbid firing while a place holds `weight` or more tokens.
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`net`]       | `PetriNet`, `Arc`                                      |
//! | [`crossover`] | `CrossoverBlock`: two-class mutual exclusion on one block |
//! | [`error`]     | `PetriError`, `PetriResult<T>`                         |

pub mod crossover;
pub mod error;
pub mod net;

#[cfg(test)]
mod tests;

pub use crossover::CrossoverBlock;
pub use error::{PetriError, PetriResult};
pub use net::{Arc, PetriNet};
