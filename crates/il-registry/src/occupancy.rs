//! The `OccupancyTable`: one slot per real section.

use il_core::{SectionId, TrainId};

/// Maps each real section to the train occupying it, if any.
///
/// Indexed by `SectionId`; the length is fixed at construction to the
/// topology's section count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyTable {
    slots: Vec<Option<TrainId>>,
}

impl OccupancyTable {
    /// Create a table with every one of `section_count` sections free.
    pub fn new(section_count: usize) -> Self {
        Self { slots: vec![None; section_count] }
    }

    pub fn section_count(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn contains(&self, section: SectionId) -> bool {
        section.index() < self.slots.len()
    }

    /// The train currently holding `section`; `None` if free or unknown.
    #[inline]
    pub fn occupant(&self, section: SectionId) -> Option<TrainId> {
        self.slots.get(section.index()).copied().flatten()
    }

    #[inline]
    pub fn is_free(&self, section: SectionId) -> bool {
        self.occupant(section).is_none()
    }

    /// Number of occupied sections.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Iterator over `(section, train)` for every occupied section.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (SectionId, TrainId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|t| (SectionId(i as u16), t)))
    }

    /// Mark `section` as held by `train`.
    ///
    /// Callers must have checked that the section is free; this is the write
    /// half of admission and commit, not a validation point.
    #[inline]
    pub fn occupy(&mut self, section: SectionId, train: TrainId) {
        debug_assert!(self.is_free(section), "{section} already held");
        self.slots[section.index()] = Some(train);
    }

    /// Free `section`.
    #[inline]
    pub fn vacate(&mut self, section: SectionId) {
        self.slots[section.index()] = None;
    }
}
