//! Command line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use wire_types::DateFormat;

use crate::target::Target;

/// Project host types to wire schema types
#[derive(Parser, Debug)]
#[command(name = "wirec", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Project every site of a declaration model
    Project(ProjectArgs),
}

/// Consumer selection; `all` runs every consumer in parallel.
#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum TargetArg {
    Xml,
    Json,
    Csharp,
    Java,
    Php,
    Ruby,
    #[value(name = "as3")]
    As3,
    C,
    #[value(name = "objc")]
    ObjC,
    All,
}

impl TargetArg {
    pub fn targets(self) -> Vec<Target> {
        let single = match self {
            TargetArg::All => return Target::ALL.to_vec(),
            TargetArg::Xml => Target::Xml,
            TargetArg::Json => Target::Json,
            TargetArg::Csharp => Target::Csharp,
            TargetArg::Java => Target::Java,
            TargetArg::Php => Target::Php,
            TargetArg::Ruby => Target::Ruby,
            TargetArg::As3 => Target::As3,
            TargetArg::C => Target::C,
            TargetArg::ObjC => Target::ObjC,
        };
        vec![single]
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// `label: name` lines
    #[default]
    Text,
    /// JSON report
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Declaration model file (JSON)
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// Consumer to project for
    #[arg(long, value_enum, default_value_t = TargetArg::All)]
    pub target: TargetArg,

    /// Disable the projection cache
    #[arg(long)]
    pub no_cache: bool,

    /// Stop reporting after N errors (0 = unlimited)
    #[arg(long, value_name = "N", default_value_t = 50)]
    pub error_limit: usize,

    /// JSON rendering of date types: millis or string
    #[arg(long, value_parser = parse_dates, default_value = "millis")]
    pub dates: DateFormat,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Debug logging when WIRE_LOG and RUST_LOG are unset
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_dates(value: &str) -> Result<DateFormat, String> {
    DateFormat::from_str_opt(value)
        .ok_or_else(|| format!("unknown date format `{value}` (expected millis or string)"))
}
