//! `il-sim`: drives an [`Interlocking`][il_arbiter::Interlocking] through
//! many cycles.
//!
//! # Cycle loop
//!
//! ```text
//! for cycle in 0..config.total_cycles:
//!   ① Intents : Dispatcher::propose for every train still on the network
//!                (parallel with the `parallel` feature; read-only).
//!   ② Resolve : Interlocking::resolve_cycle on the collected batch.
//!   ③ Observe : on_cycle_end(report); on_snapshot every N cycles.
//! ```
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`dispatcher`] | `Dispatcher` trait, `NoopDispatcher`, `RouteDispatcher`, `RandomWalkDispatcher` |
//! | [`context`]    | `CycleContext`: read-only view handed to dispatchers       |
//! | [`rngs`]       | `TrainRngs`: per-train RNG streams                         |
//! | [`sim`]        | `Sim`: the cycle loop                                      |
//! | [`builder`]    | `SimBuilder`                                               |
//! | [`observer`]   | `SimObserver`, `NoopObserver`                              |
//! | [`shared`]     | `SharedInterlocking`: lock-guarded handle for many producers |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the intent phase on Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```
//! use il_arbiter::Interlocking;
//! use il_core::{RunConfig, TrainClass, TrainId};
//! use il_sim::{NoopObserver, RouteDispatcher, SimBuilder};
//!
//! let (net, l) = Interlocking::crossover().unwrap();
//! let mut routes = RouteDispatcher::new();
//! routes.set_route(TrainId(1), vec![l.s1, l.s5, l.s8]);
//!
//! let config = RunConfig { total_cycles: 5, ..RunConfig::default() };
//! let mut sim = SimBuilder::new(config, net, routes)
//!     .train(TrainId(1), TrainClass::Passenger, l.s1)
//!     .build()
//!     .unwrap();
//! sim.run(&mut NoopObserver).unwrap();
//! assert!(sim.interlocking.position_of(TrainId(1)).unwrap().is_departed());
//! ```

pub mod builder;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod observer;
pub mod rngs;
pub mod shared;
pub mod sim;


pub use builder::SimBuilder;
pub use context::CycleContext;
pub use dispatcher::{Dispatcher, NoopDispatcher, RandomWalkDispatcher, RouteDispatcher};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use rngs::TrainRngs;
pub use shared::SharedInterlocking;
pub use sim::Sim;
