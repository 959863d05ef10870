// src/cli/dispatch.rs
//! Command dispatch, kept out of the binary so it stays small.

use super::args::{Cli, Commands};
use super::handlers::{handle_inspect, handle_rank, handle_sweep, load_config};
use crate::exit::RankExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(cli: Cli) -> Result<RankExit> {
    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(RankExit::Success);
    };

    match command {
        Commands::Rank {
            input,
            iterations,
            damping,
            engine,
            output,
            json,
        } => {
            let config = load_config(cli.config.as_deref())?;
            handle_rank(config, &input, iterations, damping, &engine, &output, json)
        }
        Commands::Sweep {
            input,
            damping,
            iterations,
            engine,
            output,
        } => {
            let config = load_config(cli.config.as_deref())?;
            handle_sweep(config, &input, &damping, iterations, &engine, &output)
        }
        Commands::Inspect { input } => handle_inspect(&input),
    }
}
