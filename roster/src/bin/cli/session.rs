// SPDX-License-Identifier: Apache-2.0
// Copyright Authors of roster

use std::io::Write;

use log::{debug, info, warn};
use roster::{
    Record, Roster,
    errors::RosterError,
    types::{Operation, OutputFormat, Report},
};

use crate::{prompt::Prompt, table::RecordTable};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    Add,
    List,
    Find,
    UpdateAverage,
    SetActive,
    ListActive,
    Exit,
}

impl MenuChoice {
    pub(crate) const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::List,
        MenuChoice::Find,
        MenuChoice::UpdateAverage,
        MenuChoice::SetActive,
        MenuChoice::ListActive,
        MenuChoice::Exit,
    ];

    pub(crate) fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "1.- Add student",
            MenuChoice::List => "2.- List students",
            MenuChoice::Find => "3.- Find by ID",
            MenuChoice::UpdateAverage => "4.- Update average",
            MenuChoice::SetActive => "5.- Set active status",
            MenuChoice::ListActive => "6.- List active students",
            MenuChoice::Exit => "7.- Exit",
        }
    }
}

/// One interactive run of the menu against a fresh roster.
///
/// Each menu selection performs exactly one roster operation and writes the
/// result to `out`. The loop only ends when the operator picks
/// [`MenuChoice::Exit`].
pub(crate) struct Session<P, W> {
    roster: Roster,
    prompt: P,
    out: W,
    format: OutputFormat,
}

impl<P: Prompt, W: Write> Session<P, W> {
    pub(crate) fn new(roster: Roster, prompt: P, out: W, format: OutputFormat) -> Self {
        Self {
            roster,
            prompt,
            out,
            format,
        }
    }

    pub(crate) fn run(&mut self) -> anyhow::Result<()> {
        info!("Starting roster session");
        let labels: Vec<&str> = MenuChoice::ALL.iter().map(MenuChoice::label).collect();

        loop {
            writeln!(self.out, "STUDENT ROSTER")?;
            let index = self.prompt.select("Select an option", &labels)?;
            let Some(&choice) = MenuChoice::ALL.get(index) else {
                writeln!(self.out, "Invalid option")?;
                continue;
            };
            debug!("Menu selection: {choice:?}");

            if choice == MenuChoice::Exit {
                break;
            }
            self.dispatch(choice)?;
        }

        info!(
            "Ending roster session with {} student(s)",
            self.roster.len()
        );
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> anyhow::Result<()> {
        match choice {
            MenuChoice::Add => {
                let candidate = self.read_candidate()?;
                let result = self.roster.add(candidate);
                write_report(&mut self.out, self.format, Operation::Add, result)
            }
            MenuChoice::List => {
                writeln!(self.out, "STUDENTS")?;
                write_list(&mut self.out, self.format, self.roster.list_all())
            }
            MenuChoice::Find => {
                let id = self.prompt.number::<u32>("ID to find")?;
                let result = self.roster.find_by_id(id);
                write_report(&mut self.out, self.format, Operation::Find, result)
            }
            MenuChoice::UpdateAverage => {
                let id = self.prompt.number::<u32>("ID")?;
                let average = self.prompt.number::<f64>("New average")?;
                let result = self.roster.update_average(id, average);
                write_report(&mut self.out, self.format, Operation::UpdateAverage, result)
            }
            MenuChoice::SetActive => {
                let id = self.prompt.number::<u32>("ID")?;
                let active = self.prompt.confirm("Active?")?;
                let result = self.roster.set_active(id, active);
                write_report(&mut self.out, self.format, Operation::SetActive, result)
            }
            MenuChoice::ListActive => {
                writeln!(self.out, "ACTIVE STUDENTS")?;
                write_list(&mut self.out, self.format, self.roster.list_active())
            }
            MenuChoice::Exit => Ok(()),
        }
    }

    fn read_candidate(&mut self) -> anyhow::Result<Record> {
        let id = self.prompt.number::<u32>("ID")?;
        let name = self.prompt.text("Name")?;
        let age = self.prompt.number::<u32>("Age")?;
        let program = self.prompt.text("Program")?;
        let average = self.prompt.number::<f64>("Average")?;
        Ok(Record::new(id, name, age, program, average))
    }
}

fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    operation: Operation,
    result: Result<&Record, RosterError>,
) -> anyhow::Result<()> {
    match &result {
        Ok(record) => debug!("{operation} succeeded for student {}", record.id),
        Err(e) => warn!("{operation} rejected: {e}"),
    }

    let report = Report::new(operation, result);
    match format {
        OutputFormat::Table => writeln!(out, "{}\n", RecordTable::new_report(&report))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
    }
    Ok(())
}

fn write_list<'a, W, I>(out: &mut W, format: OutputFormat, records: I) -> anyhow::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let records: Vec<&Record> = records.into_iter().collect();
    match format {
        OutputFormat::Table if records.is_empty() => writeln!(out, "No students\n")?,
        OutputFormat::Table => {
            let mut table = RecordTable::new_list();
            for record in records {
                table.add_record(record);
            }
            writeln!(out, "{table}\n")?;
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?,
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use std::{collections::VecDeque, str::FromStr};

    use anyhow::anyhow;

    use super::*;

    /// Replays canned answers; selections are given as menu numbers and are
    /// passed through unchecked so out-of-range picks reach the session.
    struct ScriptedPrompt(VecDeque<String>);

    impl ScriptedPrompt {
        fn new(answers: &[&str]) -> Self {
            ScriptedPrompt(answers.iter().map(|a| a.to_string()).collect())
        }

        fn next(&mut self, prompt: &str) -> anyhow::Result<String> {
            self.0
                .pop_front()
                .ok_or_else(|| anyhow!("no scripted answer for {prompt:?}"))
        }
    }

    impl Prompt for ScriptedPrompt {
        fn select(&mut self, prompt: &str, _items: &[&str]) -> anyhow::Result<usize> {
            let choice: usize = self.next(prompt)?.parse()?;
            Ok(choice.checked_sub(1).unwrap_or(usize::MAX))
        }

        fn text(&mut self, prompt: &str) -> anyhow::Result<String> {
            self.next(prompt)
        }

        fn number<T>(&mut self, prompt: &str) -> anyhow::Result<T>
        where
            T: Clone + ToString + FromStr,
            <T as FromStr>::Err: ToString,
        {
            T::from_str(&self.next(prompt)?).map_err(|e| anyhow!(e.to_string()))
        }

        fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
            Ok(self.next(prompt)? == "y")
        }
    }

    fn run_script(answers: &[&str], format: OutputFormat) -> (Roster, String) {
        let mut out = Vec::new();
        let mut session = Session::new(
            Roster::new(),
            ScriptedPrompt::new(answers),
            &mut out,
            format,
        );
        session.run().unwrap();
        let roster = session.roster;
        (roster, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_menu_labels_cover_every_choice() {
        let labels: Vec<&str> = MenuChoice::ALL.iter().map(MenuChoice::label).collect();
        assert_eq!(labels.len(), 7);
        assert_eq!(labels[6], "7.- Exit");
    }

    #[test]
    fn test_exit_immediately() {
        let (roster, out) = run_script(&["7"], OutputFormat::Table);
        assert!(roster.is_empty());
        assert_eq!(out.matches("STUDENT ROSTER").count(), 1);
    }

    #[test]
    fn test_out_of_range_selection_is_invalid_option() {
        let (roster, out) = run_script(&["9", "0", "7"], OutputFormat::Table);
        assert!(roster.is_empty());
        assert_eq!(out.matches("Invalid option").count(), 2);
        assert_eq!(out.matches("STUDENT ROSTER").count(), 3);
    }

    #[test]
    fn test_list_active_does_not_end_session() {
        let (_, out) = run_script(&["6", "6", "7"], OutputFormat::Table);
        assert_eq!(out.matches("ACTIVE STUDENTS").count(), 2);
        assert!(out.contains("No students"));
    }

    #[test]
    fn test_session_scenario_table() {
        let (roster, out) = run_script(
            &[
                "1", "1", "Ana", "20", "CS", "8.5", // add
                "1", "1", "Ana", "20", "CS", "8.5", // duplicate add
                "3", "1", // find
                "4", "1", "11", // invalid average
                "4", "1", "9.0", // update average
                "5", "1", "n", // deactivate
                "6", // list active
                "2", // list all
                "7",
            ],
            OutputFormat::Table,
        );

        assert!(out.contains("student added"));
        assert!(out.contains("duplicate identifier"));
        assert!(out.contains("student found"));
        assert!(out.contains("invalid average"));
        assert!(out.contains("average updated"));
        assert!(out.contains("status updated"));
        assert!(out.contains("No students"));
        assert!(out.contains("9.00"));

        let all = roster.list_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].average, 9.0);
        assert!(!all[0].active);
    }

    #[test]
    fn test_not_found_reported() {
        let (roster, out) = run_script(&["3", "42", "5", "42", "y", "7"], OutputFormat::Table);
        assert!(roster.is_empty());
        assert_eq!(out.matches("not found").count(), 2);
    }

    #[test]
    fn test_json_report_and_list() {
        let (_, out) = run_script(
            &["1", "2", "Luis", "14", "Math", "7", "1", "3", "Eva", "30", "Art", "10", "2", "7"],
            OutputFormat::Json,
        );
        assert!(out.contains("\"message\": \"invalid age\""));
        assert!(out.contains("\"message\": \"student added\""));
        assert!(out.contains("\"name\": \"Eva\""));
        assert!(!out.contains("\"name\": \"Luis\""));
    }

    #[test]
    fn test_json_empty_list() {
        let (_, out) = run_script(&["2", "7"], OutputFormat::Json);
        assert!(out.contains("[]"));
    }

    #[test]
    fn test_exhausted_input_is_an_error() {
        let mut out = Vec::new();
        let mut session = Session::new(
            Roster::new(),
            ScriptedPrompt::new(&["1", "5"]),
            &mut out,
            OutputFormat::Table,
        );
        assert!(session.run().is_err());
        assert!(session.roster.is_empty());
    }
}
