use clap::Parser;

use crate::cargo;

#[derive(Debug, Parser)]
pub struct Options {
    /// Output directory
    out_dir: String,
}

pub fn build_completion(opts: Options) -> Result<(), anyhow::Error> {
    cargo::run(&[
        "run",
        "--package",
        "roster",
        "--",
        "completions",
        &opts.out_dir,
    ])
}
