//! Tally CLI - call-count instrumentation.

mod cli;
mod commands;
mod terminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize metric descriptions
    tally::metrics::init();

    // Initialize tracing; --verbose raises the default level
    let default_level = if cli.verbose { "tally=debug" } else { "tally=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(default_level.parse().unwrap()),
        )
        .with_target(false)
        .init();

    let exit_code = commands::run_command(&cli);
    std::process::exit(exit_code);
}
