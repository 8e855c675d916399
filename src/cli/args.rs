//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cert-finder")]
#[command(version)]
#[command(about = "Identify certificate and key files by content and check certificates against a FIPS 140-3 style policy", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Settings file (defaults to config/default.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Identify file formats from their leading bytes
    Identify(IdentifyArgs),

    /// Check certificates against the compliance policy
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct IdentifyArgs {
    /// Files to identify
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// PEM or DER certificate files
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Default tracing filter directive for this invocation
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
