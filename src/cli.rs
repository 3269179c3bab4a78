use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::source_routing::domain::TargetFormat;

/// Target manifest layout for hybrid resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    Conda,
    Pip,
}

impl From<TargetArg> for TargetFormat {
    fn from(value: TargetArg) -> Self {
        match value {
            TargetArg::Conda => TargetFormat::Conda,
            TargetArg::Pip => TargetFormat::Pip,
        }
    }
}

/// Detect primary packages and route install sources for Python environments
#[derive(Parser, Debug)]
#[command(name = "pyprov")]
#[command(version)]
#[command(
    about = "Primary-package detection and conda/pip source routing for Python environments",
    long_about = None
)]
pub struct Cli {
    /// Path to a pyprov.config.yml (defaults to auto-discovery in the
    /// working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Detect primary (user-installed) packages in the active environment
    Detect {
        /// Output results in JSON format
        #[arg(long)]
        json: bool,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show what packages depend on each primary package
        #[arg(long)]
        show_dependents: bool,
    },

    /// Classify package names into conda vs pip install sources
    Analyze {
        /// Package names, optionally with version constraints
        #[arg(required = true)]
        packages: Vec<String>,

        /// Output results in JSON format
        #[arg(long)]
        json: bool,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also resolve a hybrid environment description
        #[arg(long)]
        resolve: bool,

        /// Target manifest layout for --resolve
        #[arg(long, value_enum, default_value_t = TargetArg::Conda)]
        target: TargetArg,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
