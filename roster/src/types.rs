// SPDX-License-Identifier: Apache-2.0
// Copyright Authors of roster

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{ParseError, RosterError},
    record::Record,
};

/// The roster operations that produce a single record on success.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    Add,
    Find,
    UpdateAverage,
    SetActive,
}

impl Operation {
    pub fn success_message(&self) -> &'static str {
        match self {
            Operation::Add => "student added",
            Operation::Find => "student found",
            Operation::UpdateAverage => "average updated",
            Operation::SetActive => "status updated",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Find => write!(f, "find"),
            Operation::UpdateAverage => write!(f, "update-average"),
            Operation::SetActive => write!(f, "set-active"),
        }
    }
}

/// Outcome of an operation as shown to the operator.
///
/// `payload` is only present when `ok` is true.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report<'a> {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<&'a Record>,
}

impl<'a> Report<'a> {
    pub fn new(operation: Operation, result: Result<&'a Record, RosterError>) -> Self {
        match result {
            Ok(record) => Report {
                ok: true,
                message: operation.success_message().to_string(),
                payload: Some(record),
            },
            Err(e) => Report {
                ok: false,
                message: e.to_string(),
                payload: None,
            },
        }
    }
}

/// Parsed case-insensitively, both from the command line and the config file.
#[derive(Debug, Serialize, Deserialize, Default, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(ParseError::InvalidOutputFormat {
                format: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_report_success_carries_payload() {
        let record = Record::new(1, "Ana", 20, "CS", 8.5);
        let report = Report::new(Operation::Add, Ok(&record));
        assert!(report.ok);
        assert_eq!(report.message, "student added");
        assert_eq!(report.payload, Some(&record));
    }

    #[test]
    fn test_report_failure_has_no_payload() {
        let report = Report::new(Operation::Find, Err(RosterError::NotFound { id: 4 }));
        assert!(!report.ok);
        assert_eq!(report.message, "not found");
        assert!(report.payload.is_none());
    }

    #[test]
    fn test_report_failure_omits_payload_in_json() {
        let report = Report::new(
            Operation::UpdateAverage,
            Err(RosterError::InvalidAverage { average: 11.0 }),
        );
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "ok": false, "message": "invalid average" })
        );
    }

    #[test]
    fn test_success_messages() {
        assert_eq!(Operation::Add.success_message(), "student added");
        assert_eq!(Operation::Find.success_message(), "student found");
        assert_eq!(Operation::UpdateAverage.success_message(), "average updated");
        assert_eq!(Operation::SetActive.success_message(), "status updated");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_matches!(
            OutputFormat::from_str("yaml"),
            Err(ParseError::InvalidOutputFormat { format }) if format == "yaml"
        );
    }
}
