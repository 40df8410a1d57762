// SPDX-License-Identifier: Apache-2.0
// Copyright Authors of roster

use comfy_table::{Cell, Color, Table};
use roster::{Record, types::Report};

pub(crate) struct RecordTable(Table);

impl RecordTable {
    pub(crate) fn new_report(report: &Report<'_>) -> Self {
        let mut table = Table::new();

        table.load_preset(comfy_table::presets::NOTHING);
        let (status, color) = if report.ok {
            ("OK", Color::Green)
        } else {
            ("FAILED", Color::Red)
        };
        table.set_header(vec![
            Cell::new("Status:").add_attribute(comfy_table::Attribute::Bold),
            Cell::new(status)
                .add_attribute(comfy_table::Attribute::Bold)
                .fg(color),
        ]);
        table.add_row(vec!["Message:", &report.message]);

        if let Some(record) = report.payload {
            table.add_rows(record_rows(record));
        }
        RecordTable(table)
    }

    pub(crate) fn new_list() -> Self {
        let mut table = Table::new();

        table.load_preset(comfy_table::presets::NOTHING);
        table.set_header(vec!["ID", "Name", "Age", "Program", "Active", "Average"]);
        RecordTable(table)
    }

    pub(crate) fn add_record(&mut self, record: &Record) {
        self.0.add_row(vec![
            record.id.to_string(),
            record.name.clone(),
            record.age.to_string(),
            record.program.clone(),
            yes_no(record.active).to_string(),
            format!("{:.2}", record.average),
        ]);
    }
}

fn record_rows(record: &Record) -> Vec<Vec<String>> {
    vec![
        vec!["ID:".to_string(), record.id.to_string()],
        vec!["Name:".to_string(), none_if_empty(&record.name)],
        vec!["Age:".to_string(), record.age.to_string()],
        vec!["Program:".to_string(), none_if_empty(&record.program)],
        vec!["Active:".to_string(), yes_no(record.active).to_string()],
        vec!["Average:".to_string(), format!("{:.2}", record.average)],
    ]
}

fn none_if_empty(value: &str) -> String {
    if value.is_empty() {
        "None".to_string()
    } else {
        value.to_string()
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

impl std::fmt::Display for RecordTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
