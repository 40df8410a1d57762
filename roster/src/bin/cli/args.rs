// SPDX-License-Identifier: Apache-2.0
// Copyright Authors of roster

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use roster::{directories::CFGPATH_ROSTER_CONFIG, types::OutputFormat};

#[derive(Parser, Debug)]
#[command(
    long_about = "An in-memory student roster, managed through an interactive menu. Records live only for the duration of the session."
)]
#[command(name = "roster")]
#[command(disable_version_flag = true)]
pub(crate) struct Cli {
    /// Optional: Location of the configuration file.
    #[clap(short, long, global = true, default_value = CFGPATH_ROSTER_CONFIG)]
    pub(crate) config: PathBuf,

    /// Optional: How results are printed. Overrides the `display.format`
    /// value of the configuration file.
    ///
    /// [possible values: table, json]
    #[clap(short, long, global = true, verbatim_doc_comment)]
    pub(crate) output: Option<OutputFormat>,

    #[command(subcommand)]
    pub(crate) command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Run the interactive menu (default).
    Session,
    /// Generate shell completion scripts.
    Completions(crate::completions::Args),
    /// Generate man pages.
    Manpage(crate::manpage::Args),
}
