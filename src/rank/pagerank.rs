// src/rank/pagerank.rs
//! `PageRank` power iteration with dangling-mass redistribution.
//!
//! Each round computes, for every node `u`:
//!
//! ```text
//! next[u] = (1 - d)/N + d * ( Σ current[v] / out_degree(v)  +  dangling/N )
//! ```
//!
//! where the sum runs over the in-neighbors `v` of `u` and `dangling` is the
//! total rank held by nodes without out-edges. The dangling total is taken
//! from the current vector before any node is updated, and every node
//! (dangling ones included) receives the same share. Rounds never update in
//! place: each produces a fresh vector.

use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use super::vector::RankVector;
use crate::config::{validate_damping, PageRankConfig};
use crate::error::{RankError, Result};
use crate::graph::{Graph, GraphKind, NodeKey};
use crate::loader;

pub const DAMPING: f64 = crate::config::types::default_damping();
pub const ITERATIONS: usize = crate::config::types::default_iterations();

/// Where a run is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    /// Uniform vector built, no rounds taken yet.
    Initialized,
    /// At least one round taken, neither stop condition met.
    Iterating,
    /// Successive vectors came within the tolerance.
    Converged,
    /// The iteration budget ran out.
    Exhausted,
}

impl RunState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Converged | Self::Exhausted)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Initialized => "initialized",
            Self::Iterating => "iterating",
            Self::Converged => "converged",
            Self::Exhausted => "exhausted",
        }
    }
}

/// Final result of a run.
#[derive(Debug, Clone)]
pub struct RankOutcome<K> {
    pub ranks: RankVector<K>,
    pub state: RunState,
    pub iterations: usize,
    /// Distance between the last two vectors under the configured norm.
    pub last_delta: Option<f64>,
}

/// Uniform starting vector.
///
/// # Errors
/// `EmptyGraph` if the graph has no nodes.
pub fn initialize<K: NodeKey>(graph: &Graph<K>) -> Result<RankVector<K>> {
    RankVector::uniform(graph)
}

/// Computes the next rank vector from `current`.
///
/// # Errors
/// - `InvalidConfiguration` if `damping` is outside `[0, 1]`.
/// - `EmptyGraph` if the graph has no nodes.
/// - `RankMismatch` if `current` was not built for a graph of this size.
/// - `UnknownNode` if `current` holds a key the graph does not contain.
///
/// `current` may list the nodes in any order; the result follows the
/// graph's insertion order.
pub fn step<K: NodeKey>(
    graph: &Graph<K>,
    current: &RankVector<K>,
    damping: f64,
) -> Result<RankVector<K>> {
    validate_damping(damping)?;
    if graph.is_empty() {
        return Err(RankError::EmptyGraph);
    }
    let current = current.aligned_with(graph)?;
    Ok(current.with_scores(iterate_once(graph, current.scores(), damping)))
}

#[allow(clippy::cast_precision_loss)]
fn iterate_once<K: NodeKey>(graph: &Graph<K>, ranks: &[f64], damping: f64) -> Vec<f64> {
    let n = ranks.len() as f64;
    let dangling = dangling_mass(graph, ranks);
    let base = (1.0 - damping) / n;

    (0..ranks.len())
        .map(|u| base + damping * (compute_incoming_rank(graph, ranks, u) + dangling / n))
        .collect()
}

fn dangling_mass<K: NodeKey>(graph: &Graph<K>, ranks: &[f64]) -> f64 {
    graph.dangling_indices().map(|i| ranks[i]).sum()
}

#[allow(clippy::cast_precision_loss)]
fn compute_incoming_rank<K: NodeKey>(graph: &Graph<K>, ranks: &[f64], target: usize) -> f64 {
    graph
        .in_indices(target)
        .iter()
        // A node listed as an in-neighbor has at least that one out-edge.
        .map(|&source| ranks[source] / graph.out_degree_at(source) as f64)
        .sum()
}

/// Step-by-step driver over one immutable graph.
///
/// ```rust
/// use walkrank_core::config::PageRankConfig;
/// use walkrank_core::graph::{Attributes, Graph};
/// use walkrank_core::rank::{PageRank, RunState};
///
/// let mut g = Graph::directed();
/// g.add_node("a", Attributes::new())?;
/// g.add_node("b", Attributes::new())?;
/// g.add_edge("a", "b", Attributes::new())?;
///
/// let mut run = PageRank::new(&g, PageRankConfig::fixed(2, 0.85))?;
/// assert_eq!(run.state(), RunState::Initialized);
/// assert_eq!(run.advance()?, RunState::Iterating);
/// assert_eq!(run.advance()?, RunState::Exhausted);
/// # Ok::<(), walkrank_core::error::RankError>(())
/// ```
#[derive(Debug)]
pub struct PageRank<'g, K> {
    graph: &'g Graph<K>,
    config: PageRankConfig,
    ranks: RankVector<K>,
    state: RunState,
    iterations: usize,
    last_delta: Option<f64>,
}

impl<'g, K: NodeKey> PageRank<'g, K> {
    /// # Errors
    /// `InvalidConfiguration` or `EmptyGraph`; both are reported before any
    /// round runs.
    pub fn new(graph: &'g Graph<K>, config: PageRankConfig) -> Result<Self> {
        config.validate()?;
        let ranks = initialize(graph)?;
        Ok(Self {
            graph,
            config,
            ranks,
            state: RunState::Initialized,
            iterations: 0,
            last_delta: None,
        })
    }

    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    #[must_use]
    pub fn last_delta(&self) -> Option<f64> {
        self.last_delta
    }

    #[must_use]
    pub fn ranks(&self) -> &RankVector<K> {
        &self.ranks
    }

    /// Runs one round unless the run already reached a terminal state.
    ///
    /// # Errors
    /// Propagates errors from [`step`].
    pub fn advance(&mut self) -> Result<RunState> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let next = step(self.graph, &self.ranks, self.config.damping_factor)?;
        let delta = self.ranks.distance(&next, self.config.norm);
        self.ranks = next;
        self.iterations += 1;
        self.last_delta = Some(delta);

        debug!(iteration = self.iterations, delta, "pagerank round");

        self.state = if self.config.tolerance.is_some_and(|tol| delta < tol) {
            RunState::Converged
        } else if self.iterations >= self.config.iterations {
            RunState::Exhausted
        } else {
            RunState::Iterating
        };

        if self.state.is_terminal() {
            info!(
                state = self.state.label(),
                iterations = self.iterations,
                delta,
                nodes = self.ranks.len(),
                "pagerank finished"
            );
        }
        Ok(self.state)
    }

    /// Advances until converged or exhausted.
    ///
    /// # Errors
    /// Propagates errors from [`step`].
    pub fn finish(mut self) -> Result<RankOutcome<K>> {
        while !self.state.is_terminal() {
            self.advance()?;
        }
        Ok(RankOutcome {
            ranks: self.ranks,
            state: self.state,
            iterations: self.iterations,
            last_delta: self.last_delta,
        })
    }
}

/// Runs `config` to completion.
///
/// # Errors
/// `InvalidConfiguration` or `EmptyGraph`.
pub fn run<K: NodeKey>(graph: &Graph<K>, config: &PageRankConfig) -> Result<RankOutcome<K>> {
    PageRank::new(graph, *config)?.finish()
}

/// Fixed-budget `PageRank`: exactly `num_iterations` rounds.
///
/// # Errors
/// `InvalidConfiguration` or `EmptyGraph`.
pub fn pagerank<K: NodeKey>(
    graph: &Graph<K>,
    num_iterations: usize,
    damping_factor: f64,
) -> Result<RankVector<K>> {
    run(graph, &PageRankConfig::fixed(num_iterations, damping_factor)).map(|o| o.ranks)
}

/// Loads a directed graph from node and edge CSV files, then ranks it.
///
/// # Errors
/// Loader errors (`Io`, `Csv`, `UnknownNode`, duplicates) and engine errors.
pub fn pagerank_from_csv(
    node_path: impl AsRef<Path>,
    edge_path: impl AsRef<Path>,
    num_iterations: usize,
    damping_factor: f64,
) -> Result<RankVector<String>> {
    let graph = loader::read_graph_from_csv(node_path, edge_path, GraphKind::Directed)?;
    pagerank(&graph, num_iterations, damping_factor)
}
