// SPDX-License-Identifier: Apache-2.0
// Copyright Authors of roster

use std::ops::RangeInclusive;

use crate::{errors::RosterError, record::Record};

/// Ages accepted on insertion.
pub const AGE_RANGE: RangeInclusive<u32> = 15..=80;
/// Averages accepted on insertion and update. NaN is never in range.
pub const AVERAGE_RANGE: RangeInclusive<f64> = 0.0..=10.0;

/// The authoritative collection of student records.
///
/// Records are kept in insertion order and are never removed. Lookups are
/// linear scans; the roster is sized for a single interactive session and
/// keeps no index.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    records: Vec<Record>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Accepts `candidate` into the roster.
    ///
    /// Checks run in a fixed order and the first failure wins: identifier
    /// uniqueness, then age, then average.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DuplicateId`], [`RosterError::InvalidAge`] or
    /// [`RosterError::InvalidAverage`]. The roster is unchanged on error.
    pub fn add(&mut self, candidate: Record) -> Result<&Record, RosterError> {
        if self.records.iter().any(|r| r.id == candidate.id) {
            return Err(RosterError::DuplicateId { id: candidate.id });
        }
        if !AGE_RANGE.contains(&candidate.age) {
            return Err(RosterError::InvalidAge { age: candidate.age });
        }
        if !AVERAGE_RANGE.contains(&candidate.average) {
            return Err(RosterError::InvalidAverage {
                average: candidate.average,
            });
        }

        let index = self.records.len();
        self.records.push(candidate);
        Ok(&self.records[index])
    }

    pub fn list_all(&self) -> &[Record] {
        &self.records
    }

    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] if no record has `id`.
    pub fn find_by_id(&self, id: u32) -> Result<&Record, RosterError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or(RosterError::NotFound { id })
    }

    /// Replaces the average of the record with `id`.
    ///
    /// The new average is validated before the lookup, so an out-of-range
    /// value is reported as such even for an unknown `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidAverage`] or [`RosterError::NotFound`].
    pub fn update_average(&mut self, id: u32, average: f64) -> Result<&Record, RosterError> {
        if !AVERAGE_RANGE.contains(&average) {
            return Err(RosterError::InvalidAverage { average });
        }

        let record = self.find_mut(id)?;
        record.average = average;
        Ok(&*record)
    }

    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] if no record has `id`.
    pub fn set_active(&mut self, id: u32, active: bool) -> Result<&Record, RosterError> {
        let record = self.find_mut(id)?;
        record.active = active;
        Ok(&*record)
    }

    pub fn list_active(&self) -> Vec<&Record> {
        self.records.iter().filter(|r| r.active).collect()
    }

    fn find_mut(&mut self, id: u32) -> Result<&mut Record, RosterError> {
        self.records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RosterError::NotFound { id })
    }
}
