//! Section graph representation and builder.
//!
//! # Data layout
//!
//! Outgoing hops are stored in **Compressed Sparse Row (CSR)** form.  The
//! neighbours of `SectionId s` occupy the slice:
//!
//! ```text
//! out_to[ out_start[s] .. out_start[s+1] ]
//! ```
//!
//! Each slice is sorted and free of duplicates, so `is_neighbor` is a binary
//! search and repeated `link` calls during set-up have no effect.

use std::collections::HashMap;

use il_core::SectionId;

use crate::{TopologyError, TopologyResult};

// ── TopologyGraph ─────────────────────────────────────────────────────────────

/// Immutable directed adjacency between track sections.
///
/// Do not construct directly; use [`TopologyBuilder`].
#[derive(Clone, Debug)]
pub struct TopologyGraph {
    /// Human-readable name of each section, indexed by `SectionId`.
    names: Vec<String>,

    /// CSR row pointer.  Length = `section_count + 1`.
    out_start: Vec<u32>,

    /// Destination of each hop, grouped by source section.
    out_to: Vec<SectionId>,
}

impl TopologyGraph {
    pub fn section_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.out_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `true` if `section` was declared in this topology.
    #[inline]
    pub fn contains(&self, section: SectionId) -> bool {
        section.index() < self.names.len()
    }

    /// Sections directly reachable from `section` in one hop.
    ///
    /// Returns an empty slice for sections with no declared hops and for ids
    /// outside the topology.
    #[inline]
    pub fn neighbors(&self, section: SectionId) -> &[SectionId] {
        if !self.contains(section) {
            return &[];
        }
        let start = self.out_start[section.index()] as usize;
        let end   = self.out_start[section.index() + 1] as usize;
        &self.out_to[start..end]
    }

    /// `true` if a one-way hop `from → to` was declared.
    #[inline]
    pub fn is_neighbor(&self, from: SectionId, to: SectionId) -> bool {
        self.neighbors(from).binary_search(&to).is_ok()
    }

    pub fn name_of(&self, section: SectionId) -> Option<&str> {
        self.names.get(section.index()).map(String::as_str)
    }

    /// Reverse lookup by name.  Linear; intended for set-up and tests.
    pub fn section_by_name(&self, name: &str) -> Option<SectionId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| SectionId(i as u16))
    }

    /// Iterator over every declared section id.
    pub fn sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        (0..self.names.len()).map(|i| SectionId(i as u16))
    }
}

// ── TopologyBuilder ───────────────────────────────────────────────────────────

/// Construct a [`TopologyGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use il_topology::TopologyBuilder;
///
/// let mut b = TopologyBuilder::new();
/// let a = b.add_section("A").unwrap();
/// let c = b.add_section("C").unwrap();
/// b.link_both(a, c);
/// b.link(a, c); // idempotent
/// let g = b.build().unwrap();
/// assert_eq!(g.edge_count(), 2);
/// assert!(g.is_neighbor(c, a));
/// ```
#[derive(Default)]
pub struct TopologyBuilder {
    names:     Vec<String>,
    by_name:   HashMap<String, SectionId>,
    raw_edges: Vec<(SectionId, SectionId)>,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a real section and return its `SectionId` (sequential from 0).
    pub fn add_section(&mut self, name: &str) -> TopologyResult<SectionId> {
        if self.by_name.contains_key(name) {
            return Err(TopologyError::DuplicateSection(name.to_owned()));
        }
        let id = SectionId::try_from(self.names.len())
            .ok()
            .filter(|id| *id != SectionId::INVALID)
            .ok_or(TopologyError::TooManySections(self.names.len()))?;
        self.names.push(name.to_owned());
        self.by_name.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Return the id for `name`, declaring the section on first use.
    pub fn section(&mut self, name: &str) -> TopologyResult<SectionId> {
        match self.by_name.get(name) {
            Some(&id) => Ok(id),
            None      => self.add_section(name),
        }
    }

    /// Declare a **one-way** legal hop `from → to`.  Idempotent.
    pub fn link(&mut self, from: SectionId, to: SectionId) {
        self.raw_edges.push((from, to));
    }

    /// Convenience: declare hops in both directions for bidirectional track.
    pub fn link_both(&mut self, a: SectionId, b: SectionId) {
        self.link(a, b);
        self.link(b, a);
    }

    pub fn section_count(&self) -> usize { self.names.len() }

    /// Consume the builder and produce a [`TopologyGraph`].
    ///
    /// Fails if any hop references a section that was never declared.
    pub fn build(self) -> TopologyResult<TopologyGraph> {
        let section_count = self.names.len();

        let mut raw = self.raw_edges;
        if let Some(&(from, to)) = raw
            .iter()
            .find(|(f, t)| f.index() >= section_count || t.index() >= section_count)
        {
            let bad = if from.index() >= section_count { from } else { to };
            return Err(TopologyError::SectionNotFound(bad));
        }
        raw.sort_unstable();
        raw.dedup();

        let out_to: Vec<SectionId> = raw.iter().map(|&(_, to)| to).collect();

        let mut out_start = vec![0u32; section_count + 1];
        for &(from, _) in &raw {
            out_start[from.index() + 1] += 1;
        }
        for i in 1..=section_count {
            out_start[i] += out_start[i - 1];
        }
        debug_assert_eq!(out_start[section_count] as usize, out_to.len());

        Ok(TopologyGraph { names: self.names, out_start, out_to })
    }
}
