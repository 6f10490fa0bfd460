//! Wire projection CLI.

use std::process::ExitCode;

use clap::Parser;
use wirec::cli::{Cli, Command};
use wirec::commands::project;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match &cli.command {
        Command::Project(args) => project(args),
    }
}
