// src/cli/handlers.rs
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::cli::args::{EngineArgs, InputArgs, OutputArgs};
use crate::config::{Config, PageRankConfig};
use crate::exit::RankExit;
use crate::graph::{Graph, GraphKind};
use crate::loader;
use crate::rank::{self, run_many};
use crate::reporting;

/// Loads the config file, or defaults when none exists.
///
/// An explicitly named file must exist.
///
/// # Errors
/// Returns error if the file is missing (explicit path only), unreadable, or
/// malformed.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => {
            if !p.exists() {
                bail!("config file not found: {}", p.display());
            }
            Ok(Config::load_from(p)?)
        }
        None => Ok(Config::load()?),
    }
}

fn apply_engine_overrides(config: &mut PageRankConfig, engine: &EngineArgs) {
    if let Some(tol) = engine.tolerance {
        config.tolerance = Some(tol);
    }
    if let Some(norm) = engine.norm {
        config.norm = norm;
    }
}

fn apply_output_overrides(config: &mut Config, output: &OutputArgs) {
    if let Some(order) = output.order {
        config.output.order = order;
    }
    if let Some(max) = output.max_nodes {
        config.output.max_nodes = Some(max);
    }
    if let Some(precision) = output.precision {
        config.output.precision = precision;
    }
}

fn load_graph(input: &InputArgs) -> Result<Graph<String>> {
    let kind = if input.undirected {
        GraphKind::Undirected
    } else {
        GraphKind::Directed
    };
    let graph = loader::read_graph_from_csv(&input.node_file, &input.edge_file, kind)
        .with_context(|| {
            format!(
                "failed to load graph from {} and {}",
                input.node_file.display(),
                input.edge_file.display()
            )
        })?;
    Ok(graph)
}

/// Handles the rank command.
///
/// # Errors
/// Returns error if configuration, loading, or ranking fails.
pub fn handle_rank(
    mut config: Config,
    input: &InputArgs,
    iterations: Option<usize>,
    damping: Option<f64>,
    engine: &EngineArgs,
    output: &OutputArgs,
    json: bool,
) -> Result<RankExit> {
    if let Some(n) = iterations {
        config.pagerank.iterations = n;
    }
    if let Some(d) = damping {
        config.pagerank.damping_factor = d;
    }
    apply_engine_overrides(&mut config.pagerank, engine);
    apply_output_overrides(&mut config, output);
    config.validate()?;

    let graph = load_graph(input)?;
    let outcome = rank::run(&graph, &config.pagerank)?;

    if json {
        println!("{}", reporting::format_json(&outcome, &config.output)?);
    } else {
        reporting::print_outcome(&outcome, &config.output);
    }
    Ok(RankExit::Success)
}

/// Handles the sweep command.
///
/// # Errors
/// Returns error if configuration or loading fails, or if any run fails.
pub fn handle_sweep(
    mut config: Config,
    input: &InputArgs,
    dampings: &[f64],
    iterations: Option<usize>,
    engine: &EngineArgs,
    output: &OutputArgs,
) -> Result<RankExit> {
    if let Some(n) = iterations {
        config.pagerank.iterations = n;
    }
    apply_engine_overrides(&mut config.pagerank, engine);
    apply_output_overrides(&mut config, output);

    let configs: Vec<PageRankConfig> = dampings
        .iter()
        .map(|&d| config.pagerank.with_damping(d))
        .collect();
    for c in &configs {
        c.validate()?;
    }
    config.validate()?;

    let graph = load_graph(input)?;
    let results = run_many(&graph, &configs);

    for (c, result) in configs.iter().zip(results) {
        println!(
            "{} damping {}",
            "==".blue(),
            format!("{}", c.damping_factor).yellow()
        );
        let outcome = result?;
        reporting::print_outcome(&outcome, &config.output);
    }
    Ok(RankExit::Success)
}

/// Handles the inspect command.
///
/// # Errors
/// Returns error if loading fails.
pub fn handle_inspect(input: &InputArgs) -> Result<RankExit> {
    let graph = load_graph(input)?;
    reporting::print_graph(&graph);
    Ok(RankExit::Success)
}
