//! The `TrainRegistry`: class and position of every registered train.

use std::collections::BTreeMap;

use il_core::{Section, TrainClass, TrainId};

use crate::{OccupancyTable, RegistryError, RegistryResult};

/// Per-train state held by the registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainRecord {
    pub class:    TrainClass,
    /// Current section, or [`Section::Departed`] once the train has left.
    pub position: Section,
}

/// All registered trains, keyed by caller-assigned id.
///
/// Trains are never removed.  Iteration is in ascending `TrainId` order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrainRegistry {
    trains: BTreeMap<TrainId, TrainRecord>,
}

impl TrainRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    #[inline]
    pub fn get(&self, train: TrainId) -> Option<&TrainRecord> {
        self.trains.get(&train)
    }

    #[inline]
    pub fn class_of(&self, train: TrainId) -> Option<TrainClass> {
        self.trains.get(&train).map(|r| r.class)
    }

    /// Current position of `train`.
    pub fn position_of(&self, train: TrainId) -> RegistryResult<Section> {
        self.trains
            .get(&train)
            .map(|r| r.position)
            .ok_or(RegistryError::UnknownTrain(train))
    }

    pub fn iter(&self) -> impl Iterator<Item = (TrainId, &TrainRecord)> + '_ {
        self.trains.iter().map(|(&id, rec)| (id, rec))
    }

    /// Ids of trains still on the network, ascending.
    pub fn active(&self) -> impl Iterator<Item = TrainId> + '_ {
        self.trains
            .iter()
            .filter(|(_, r)| !r.position.is_departed())
            .map(|(&id, _)| id)
    }

    /// Register `train` at `start`, marking the section occupied.
    ///
    /// # Errors
    ///
    /// * [`RegistryError::DuplicateTrain`]: `train` is already known.
    /// * [`RegistryError::UnknownSection`]: `start` is outside `occupancy`.
    /// * [`RegistryError::SectionBusy`]: `start` is a real, occupied section.
    ///
    /// Nothing is mutated on error.
    pub fn admit(
        &mut self,
        occupancy: &mut OccupancyTable,
        train:     TrainId,
        class:     TrainClass,
        start:     Section,
    ) -> RegistryResult<()> {
        if self.trains.contains_key(&train) {
            return Err(RegistryError::DuplicateTrain(train));
        }
        if let Section::Track(section) = start {
            if !occupancy.contains(section) {
                return Err(RegistryError::UnknownSection(section));
            }
            if let Some(occupant) = occupancy.occupant(section) {
                return Err(RegistryError::SectionBusy { section, occupant });
            }
            occupancy.occupy(section, train);
        }
        self.trains.insert(train, TrainRecord { class, position: start });
        tracing::debug!(%train, %class, %start, "train registered");
        Ok(())
    }

    /// Overwrite the recorded position of an already-registered train.
    ///
    /// Used by the commit pass alongside the matching occupancy update.
    pub fn set_position(&mut self, train: TrainId, position: Section) -> RegistryResult<()> {
        let record = self
            .trains
            .get_mut(&train)
            .ok_or(RegistryError::UnknownTrain(train))?;
        record.position = position;
        Ok(())
    }

    /// `true` if positions and occupancy agree in both directions.
    pub fn is_consistent_with(&self, occupancy: &OccupancyTable) -> bool {
        let forward = self.trains.iter().all(|(&id, rec)| match rec.position {
            Section::Track(s) => occupancy.occupant(s) == Some(id),
            Section::Departed => true,
        });
        let backward = occupancy.iter_occupied().all(|(s, id)| {
            self.trains.get(&id).map(|r| r.position) == Some(Section::Track(s))
        });
        forward && backward
    }
}
