mod build_completion;
mod build_manpage;
mod cargo;
mod lint;
mod unit_test;

use std::process::exit;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Options {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
enum Command {
    /// Build the man pages for roster.
    BuildManPage(build_manpage::Options),
    /// Build the completion scripts for roster.
    BuildCompletion(build_completion::Options),
    /// Run lint.
    Lint(lint::Options),
    /// Run unit tests.
    UnitTest(unit_test::Options),
}

fn main() {
    env_logger::init();
    let opts = Options::parse();

    use Command::*;
    let ret = match opts.command {
        BuildManPage(opts) => build_manpage::build_manpage(opts),
        BuildCompletion(opts) => build_completion::build_completion(opts),
        Lint(_) => lint::lint(),
        UnitTest(opts) => unit_test::unit_test(opts),
    };

    if let Err(e) = ret {
        eprintln!("{e:#}");
        exit(1);
    }
}
