// src/rank/mod.rs
//! Rank vectors and the `PageRank` engine.

pub mod pagerank;
pub mod sweep;
pub mod vector;

pub use pagerank::{
    initialize, pagerank, pagerank_from_csv, run, step, PageRank, RankOutcome, RunState,
    DAMPING, ITERATIONS,
};
pub use sweep::run_many;
pub use vector::{DistanceNorm, RankVector};
