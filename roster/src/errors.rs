// SPDX-License-Identifier: Apache-2.0
// Copyright Authors of roster

use thiserror::Error;

/// Reasons the roster rejects an operation.
///
/// The `Display` text of each variant is the message reported to the
/// operator. A rejected operation never modifies the roster.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RosterError {
    #[error("duplicate identifier")]
    DuplicateId { id: u32 },
    #[error("invalid age")]
    InvalidAge { age: u32 },
    #[error("invalid average")]
    InvalidAverage { average: f64 },
    #[error("not found")]
    NotFound { id: u32 },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Error parsing config file: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("{format} is not a valid output format")]
    InvalidOutputFormat { format: String },
}
