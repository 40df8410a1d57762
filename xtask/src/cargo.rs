use std::process::Command;

use anyhow::{Context, bail};
use log::debug;

/// Runs `cargo` with `args`, failing if it exits unsuccessfully.
pub(crate) fn run(args: &[&str]) -> Result<(), anyhow::Error> {
    debug!("running cargo {}", args.join(" "));
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("failed to run cargo {}", args.join(" ")))?;
    if !status.success() {
        bail!("cargo {} failed with {status}", args.join(" "));
    }
    Ok(())
}
