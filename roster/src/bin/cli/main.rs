// SPDX-License-Identifier: Apache-2.0
// Copyright Authors of roster

use std::io;

use args::{Cli, Commands};
use clap::Parser;
use log::debug;
use prompt::TermPrompt;
use roster::{Roster, config::open_config_file};
use session::Session;

mod args;
mod completions;
mod manpage;
mod prompt;
mod session;
mod table;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; RUST_LOG controls the level.
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    cli.execute()
}

impl Cli {
    pub(crate) fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            None | Some(Commands::Session) => self.execute_session(),
            Some(Commands::Completions(args)) => completions::generate(args),
            Some(Commands::Manpage(args)) => manpage::generate(args),
        }
    }

    fn execute_session(&self) -> anyhow::Result<()> {
        let config = open_config_file(&self.config);
        let format = self.output.unwrap_or(config.display().format);
        debug!("Using {format} output");

        let stdout = io::stdout();
        Session::new(Roster::new(), TermPrompt, stdout.lock(), format).run()
    }
}
