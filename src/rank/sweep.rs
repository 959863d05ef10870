// src/rank/sweep.rs
//! Several independent runs over one shared graph.

use rayon::prelude::*;

use super::pagerank::{run, RankOutcome};
use crate::config::PageRankConfig;
use crate::error::Result;
use crate::graph::{Graph, NodeKey};

/// Runs every config against `graph` in parallel.
///
/// The graph is only read, and each run owns its rank vector, so no locking
/// is involved. Results come back in the order of `configs`.
pub fn run_many<K>(graph: &Graph<K>, configs: &[PageRankConfig]) -> Vec<Result<RankOutcome<K>>>
where
    K: NodeKey + Send + Sync,
{
    configs.par_iter().map(|config| run(graph, config)).collect()
}
