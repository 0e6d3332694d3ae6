//! The default passenger/freight crossover network.
//!
//! ```text
//!   passenger          S1 ── S5 ── S8
//!                       ╲
//!   freight        S3 ── S4 ── S7        (S3→S4 crosses S1→S5 / S2→S6)
//!                       ╱
//!   passenger          S2 ── S6 ── S9 ── S10 ── S11
//! ```
//!
//! Every hop is declared in both directions.

use il_core::SectionId;

use crate::{TopologyBuilder, TopologyGraph, TopologyResult};

/// Named section ids of the default layout.
#[derive(Copy, Clone, Debug)]
pub struct CrossoverLayout {
    pub s1:  SectionId,
    pub s2:  SectionId,
    pub s3:  SectionId,
    pub s4:  SectionId,
    pub s5:  SectionId,
    pub s6:  SectionId,
    pub s7:  SectionId,
    pub s8:  SectionId,
    pub s9:  SectionId,
    pub s10: SectionId,
    pub s11: SectionId,
}

/// Build the default crossover topology.
pub fn crossover_layout() -> TopologyResult<(TopologyGraph, CrossoverLayout)> {
    let mut b = TopologyBuilder::new();

    // Passenger side.
    let s1  = b.add_section("S1")?;
    let s2  = b.add_section("S2")?;
    let s5  = b.add_section("S5")?;
    let s6  = b.add_section("S6")?;
    let s8  = b.add_section("S8")?;
    let s9  = b.add_section("S9")?;
    let s10 = b.add_section("S10")?;
    let s11 = b.add_section("S11")?;
    // Freight side.
    let s3  = b.add_section("S3")?;
    let s4  = b.add_section("S4")?;
    let s7  = b.add_section("S7")?;

    b.link_both(s1, s5);
    b.link_both(s2, s6);
    b.link_both(s5, s8);
    b.link_both(s6, s9);
    b.link_both(s9, s10);
    b.link_both(s10, s11);

    b.link_both(s3, s4);
    b.link_both(s4, s7);

    let layout = CrossoverLayout { s1, s2, s3, s4, s5, s6, s7, s8, s9, s10, s11 };
    Ok((b.build()?, layout))
}
