//! `crossover`: passenger and freight traffic over the default crossover.
//!
//! Two passenger trains run S1→S5→S8 and S2→S6→S9→S10→S11 while a freight
//! train waits at S3 for the S3→S4 crossing.  Per-cycle outcomes, summaries
//! and positions are written as CSV to `output_dir` (default `./output`).
//! A short single-block Petri model of the same crossing is printed at the end.
//!
//! Run with:
//!   RUST_LOG=debug cargo run -p crossover -- ./output

use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use il_arbiter::Interlocking;
use il_core::{RunConfig, TrainClass, TrainId};
use il_output::{CsvWriter, SimOutputObserver};
use il_petri::CrossoverBlock;
use il_sim::{RouteDispatcher, SimBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const TOTAL_CYCLES: u64 = 12;
const SEED:         u64 = 42;

const PASSENGER_NORTH: TrainId = TrainId(601);
const PASSENGER_SOUTH: TrainId = TrainId(602);
const FREIGHT:         TrainId = TrainId(501);

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("output"));

    println!("=== crossover: cycle arbitration demo ===");

    // 1. Network and routes.
    let (net, l) = Interlocking::crossover()?;
    println!(
        "Topology: {} sections, {} edges",
        net.topology().section_count(),
        net.topology().edge_count()
    );

    let routes = RouteDispatcher::new()
        .with_route(PASSENGER_NORTH, vec![l.s1, l.s5, l.s8])
        .with_route(PASSENGER_SOUTH, vec![l.s2, l.s6, l.s9, l.s10, l.s11])
        .with_route(FREIGHT, vec![l.s3, l.s4, l.s7]);

    // 2. Sim.
    let config = RunConfig {
        total_cycles:           TOTAL_CYCLES,
        seed:                   SEED,
        output_interval_cycles: 1,
    };
    let mut sim = SimBuilder::new(config, net, routes)
        .train(PASSENGER_NORTH, TrainClass::Passenger, l.s1)
        .train(PASSENGER_SOUTH, TrainClass::Passenger, l.s2)
        .train(FREIGHT, TrainClass::Freight, l.s3)
        .build()?;

    // 3. Run with CSV output.
    let mut observer = SimOutputObserver::new(CsvWriter::new(&output_dir)?);
    sim.run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        return Err(e.into());
    }

    let topology = sim.interlocking.topology();
    for (train, record) in sim.interlocking.registry().iter() {
        let at = record.position.track().and_then(|s| topology.name_of(s)).unwrap_or("DEPARTED");
        println!("  {train} ({}) ends at {at}", record.class);
    }
    println!("Output written to {}", output_dir.display());

    // 4. Single-block Petri model of the crossing.
    let mut block = CrossoverBlock::new();
    block.request_approach(TrainClass::Freight);
    block.request_approach(TrainClass::Passenger);
    println!();
    println!("Petri block, both waiting:  {}", block.snapshot());
    println!("  freight may enter:        {}", block.can_enter(TrainClass::Freight));
    block.enter(TrainClass::Passenger);
    block.exit(TrainClass::Passenger);
    block.enter(TrainClass::Freight);
    println!("Petri block, freight in:    {}", block.snapshot());

    Ok(())
}
