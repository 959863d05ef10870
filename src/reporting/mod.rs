// src/reporting/mod.rs
//! Rendering rank vectors.
//!
//! Text output is one `id: score` line per node followed by a `Sum:` line,
//! so the sum-to-one property can be checked by eye. The sum always covers
//! every node, even when the listing is cut short by `max_nodes`.

pub mod console;

pub use console::{print_graph, print_outcome, print_ranks};

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::graph::NodeKey;
use crate::rank::{RankOutcome, RankVector, RunState};

/// Listing order for formatted results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending by node identifier.
    #[default]
    Identifier,
    /// Descending by score at display precision, ties by ascending identifier.
    Rank,
}

/// Entries to show, in display order, and whether some were cut.
pub(crate) fn visible_entries<'a, K: NodeKey>(
    ranks: &'a RankVector<K>,
    options: &OutputConfig,
) -> (Vec<(&'a K, f64)>, bool) {
    let mut entries = match options.order {
        SortOrder::Identifier => ranks.sorted_by_id(),
        SortOrder::Rank => ranks.sorted_by_rank(options.precision),
    };
    let truncated = match options.max_nodes {
        Some(max) if max < entries.len() => {
            entries.truncate(max);
            true
        }
        _ => false,
    };
    (entries, truncated)
}

/// Plain-text rendering.
///
/// ```
/// use walkrank_core::config::OutputConfig;
/// use walkrank_core::rank::RankVector;
/// use walkrank_core::reporting::format_ranks;
///
/// let ranks = RankVector::from_pairs([(1, 0.25), (0, 0.75)]);
/// let text = format_ranks(&ranks, &OutputConfig::default());
/// assert_eq!(text, "0: 0.75000\n1: 0.25000\nSum: 1.00000\n");
/// ```
#[must_use]
pub fn format_ranks<K: NodeKey>(ranks: &RankVector<K>, options: &OutputConfig) -> String {
    let precision = options.precision;
    let (entries, truncated) = visible_entries(ranks, options);

    let mut out = String::new();
    for (id, score) in entries {
        let _ = writeln!(out, "{id}: {score:.precision$}");
    }
    if truncated {
        out.push_str("...\n");
    }
    let _ = writeln!(out, "Sum: {:.precision$}", ranks.sum());
    out
}

#[derive(Serialize)]
struct RankEntry<'a, K> {
    id: &'a K,
    rank: f64,
}

#[derive(Serialize)]
struct RankReport<'a, K> {
    state: RunState,
    iterations: usize,
    last_delta: Option<f64>,
    ranks: Vec<RankEntry<'a, K>>,
    truncated: bool,
    sum: f64,
}

/// JSON rendering of a finished run. Scores are not rounded.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_json<K: NodeKey + Serialize>(
    outcome: &RankOutcome<K>,
    options: &OutputConfig,
) -> Result<String> {
    let (entries, truncated) = visible_entries(&outcome.ranks, options);
    let report = RankReport {
        state: outcome.state,
        iterations: outcome.iterations,
        last_delta: outcome.last_delta,
        ranks: entries
            .into_iter()
            .map(|(id, rank)| RankEntry { id, rank })
            .collect(),
        truncated,
        sum: outcome.ranks.sum(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
