// SPDX-License-Identifier: Apache-2.0
// Copyright Authors of roster

//! In-memory student roster.
//!
//! The [`Roster`] owns every accepted [`Record`] and is the only place where
//! records are validated or mutated. Callers build candidate records, hand
//! them to [`Roster::add`], and afterwards only ever see shared borrows of
//! what the roster stored.

pub mod config;
pub mod errors;
pub mod record;
mod roster;
pub mod types;

pub use crate::{
    record::Record,
    roster::{AGE_RANGE, AVERAGE_RANGE, Roster},
};

pub mod directories {
    // ConfigurationDirectory: /etc/roster/
    pub const CFGPATH_ROSTER_CONFIG: &str = "/etc/roster/roster.toml";
}
