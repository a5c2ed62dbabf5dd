//! typed-routes - route scanning, artifact generation and URL building.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use typed_routes::cli::{self, Cli, Commands};
use typed_routes::config::RoutesConfig;
use typed_routes::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = RoutesConfig::load(&cli)?;

    match &cli.command {
        Commands::Scan { json, pattern } => cli::scan::run_scan(&config, *json, *pattern),
        Commands::Generate { check, .. } => cli::generate::run_generate(&config, *check),
        Commands::Resolve { args } => cli::resolve::run_resolve(&config, args),
        Commands::Check => cli::check::run_check(&config),
    }
}
