//! Command implementations.

mod check;

use crate::cli::{Cli, Commands};

/// Dispatch CLI command to the appropriate handler.
pub fn run_command(cli: &Cli) -> i32 {
    match &cli.command {
        Commands::Check { target, format } => check::cmd_check(target.as_deref(), *format),
    }
}
