// SPDX-License-Identifier: Apache-2.0
// Copyright Authors of roster

use std::{ffi::OsStr, fs::create_dir_all, path::PathBuf};

use clap::{CommandFactory, Parser};
use clap_complete::{Generator, Shell};

use crate::args::Cli;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
pub(crate) struct Args {
    /// Output directory
    out_dir: PathBuf,
    /// Optional: shell to generate completions for
    #[clap(long, short)]
    shell: Option<Shell>,
}

fn write_completions_file<G: Generator + Copy, P: AsRef<OsStr>>(
    generator: G,
    out_dir: P,
) -> Result<(), anyhow::Error> {
    let mut cmd = Cli::command().name("roster").version(VERSION);
    let path = clap_complete::generate_to(generator, &mut cmd, "roster", &out_dir)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

pub(crate) fn generate(args: &Args) -> Result<(), anyhow::Error> {
    let Args { out_dir, shell } = args;
    create_dir_all(out_dir)?;

    if let Some(shell) = shell {
        write_completions_file(*shell, out_dir)?;
        eprintln!("completion script generated in {out_dir:?}");
        return Ok(());
    }
    for shell in [
        Shell::Bash,
        Shell::Elvish,
        Shell::Fish,
        Shell::PowerShell,
        Shell::Zsh,
    ] {
        write_completions_file(shell, out_dir)?;
    }
    eprintln!("completion scripts generated in {out_dir:?}");
    Ok(())
}
