//! `il-topology`: the static section graph.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `TopologyGraph` (CSR adjacency), `TopologyBuilder`          |
//! | [`layout`]  | `crossover_layout`: the default passenger/freight network   |
//! | [`loader`]  | `load_topology_csv`, `load_topology_reader`                 |
//! | [`error`]   | `TopologyError`, `TopologyResult<T>`                        |
//!
//! The graph is built once at start-up and is immutable afterwards.  It only
//! knows about real sections; the departed marker is handled by callers.

pub mod error;
pub mod graph;
pub mod layout;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{TopologyError, TopologyResult};
pub use graph::{TopologyBuilder, TopologyGraph};
pub use layout::{CrossoverLayout, crossover_layout};
pub use loader::{load_topology_csv, load_topology_reader};
