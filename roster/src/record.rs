// SPDX-License-Identifier: Apache-2.0
// Copyright Authors of roster

use serde::Serialize;

/// One student's data.
///
/// A `Record` performs no validation of its own; it may describe a candidate
/// that has not been accepted yet. Only [`crate::Roster`] decides whether a
/// candidate enters the roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub program: String,
    pub active: bool,
    pub average: f64,
}

impl Record {
    /// Builds a candidate record. New records are always active.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        age: u32,
        program: impl Into<String>,
        average: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            program: program.into(),
            active: true,
            average,
        }
    }

    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}
