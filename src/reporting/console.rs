// src/reporting/console.rs
use colored::Colorize;

use super::{visible_entries, SortOrder};
use crate::config::OutputConfig;
use crate::graph::{Graph, NodeKey};
use crate::rank::{RankOutcome, RankVector, RunState};

/// Sum lines further than this from 1.0 are highlighted.
const SUM_WARN_EPSILON: f64 = 1e-6;

/// Prints ranks to stdout in the same layout as
/// [`format_ranks`](super::format_ranks), with the sum line colored by
/// whether it is close to 1.
pub fn print_ranks<K: NodeKey>(ranks: &RankVector<K>, options: &OutputConfig) {
    let precision = options.precision;
    let (entries, truncated) = visible_entries(ranks, options);

    for (id, score) in entries {
        println!("{}: {score:.precision$}", id.to_string().bold());
    }
    if truncated {
        println!("{}", "...".dimmed());
    }

    let sum = ranks.sum();
    let line = format!("Sum: {sum:.precision$}");
    if (sum - 1.0).abs() <= SUM_WARN_EPSILON {
        println!("{}", line.green());
    } else {
        println!("{}", line.red().bold());
    }
}

/// Prints a one-line run summary to stderr, then the ranks.
pub fn print_outcome<K: NodeKey>(outcome: &RankOutcome<K>, options: &OutputConfig) {
    let state = match outcome.state {
        RunState::Converged => outcome.state.label().green(),
        _ => outcome.state.label().yellow(),
    };
    let delta = outcome
        .last_delta
        .map_or_else(String::new, |d| format!(", last delta {d:.3e}"));
    let order = match options.order {
        SortOrder::Identifier => "by id",
        SortOrder::Rank => "by rank",
    };
    eprintln!(
        "{} {state} after {} iteration(s){delta} ({} nodes, {order})",
        "[pagerank]".blue(),
        outcome.iterations,
        outcome.ranks.len(),
    );
    print_ranks(&outcome.ranks, options);
}

/// Prints the graph listing followed by a degree summary.
pub fn print_graph<K: NodeKey>(graph: &Graph<K>) {
    print!("{graph}");
    let dangling = graph.dangling_indices().count();
    println!(
        "{} {} nodes, {} stored edges, {} dangling",
        "=".blue(),
        graph.node_count(),
        graph.edge_count(),
        dangling
    );
}
