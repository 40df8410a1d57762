// SPDX-License-Identifier: Apache-2.0
// Copyright Authors of roster

use std::{
    fs::{File, create_dir_all},
    io::Write as _,
    path::{Path, PathBuf},
};

use clap::{CommandFactory, Parser};
use flate2::{Compression, write::GzEncoder};

use crate::args::Cli;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
pub(crate) struct Args {
    /// Output directory
    out_dir: PathBuf,
}

fn build_manpage(cmd: clap::Command, name: &str, out_dir: &Path) -> Result<(), anyhow::Error> {
    let man = clap_mangen::Man::new(cmd.version(VERSION));
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;
    let file_path = out_dir.join(format!("{name}.1.gz"));
    let f = File::create(&file_path)?;
    let mut e = GzEncoder::new(f, Compression::default());
    e.write_all(&buffer)?;
    e.finish()?;
    eprintln!("man page generated in {file_path:?}");
    Ok(())
}

pub(crate) fn generate(args: &Args) -> Result<(), anyhow::Error> {
    let Args { out_dir } = args;
    create_dir_all(out_dir)?;

    let cmd = Cli::command();
    let root_name = cmd.get_name().to_owned();

    let mut commands = vec![(cmd, root_name)];
    while let Some((cmd, name)) = commands.pop() {
        build_manpage(cmd.clone(), &name, out_dir)?;

        for subcommand in cmd.get_subcommands() {
            if subcommand.is_hide_set() || subcommand.get_name() == "help" {
                continue;
            }
            let subcommand_name = format!("{}-{}", name, subcommand.get_name());
            commands.push((subcommand.clone(), subcommand_name));
        }
    }

    Ok(())
}
