use clap::Parser;

use crate::cargo;

#[derive(Debug, Parser)]
pub struct Options {
    /// Optional: Build the release target
    #[clap(long)]
    pub release: bool,
}

/// Run unit-test
pub fn unit_test(opts: Options) -> Result<(), anyhow::Error> {
    let mut args = vec!["test", "--workspace"];
    if opts.release {
        args.push("--release")
    }
    cargo::run(&args)
}
