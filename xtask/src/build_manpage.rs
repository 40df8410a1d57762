use clap::Parser;

use crate::cargo;

#[derive(Debug, Parser)]
pub struct Options {
    /// Output directory
    out_dir: String,
}

pub fn build_manpage(opts: Options) -> Result<(), anyhow::Error> {
    cargo::run(&["run", "--package", "roster", "--", "manpage", &opts.out_dir])
}
