//! cert-finder - identify certificate files and check FIPS 140-3 compliance
//!
//! This tool provides functionality for:
//! - Identifying keystores, PEM/DER objects and other files by content
//! - Checking X.509 certificates against a compliance policy
//! - Reporting certificate validity windows

use cert_finder::cli::{Cli, Commands};
use cert_finder::{commands, config};
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    match &cli.command {
        Commands::Identify(args) => commands::run_identify(&args.files, cli.json),
        Commands::Check(args) => {
            let settings = config::load_settings(cli.config.as_deref())?;
            commands::run_check(&args.files, &settings.policy, cli.json)
        }
    }
}
