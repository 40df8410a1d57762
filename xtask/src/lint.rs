use clap::Parser;

use crate::cargo;

#[derive(Debug, Parser)]
pub struct Options {}

/// Run linter
pub fn lint() -> Result<(), anyhow::Error> {
    cargo::run(&["fmt", "--all", "--", "--check"])?;
    cargo::run(&["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])
}
