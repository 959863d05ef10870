use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::rank::DistanceNorm;
use crate::reporting::SortOrder;

#[derive(Parser)]
#[command(name = "walkrank", version, about = "PageRank over node/edge CSV tables")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging (per-round deltas, load counts)
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Config file to use instead of ./walkrank.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank every node and print the scores
    Rank {
        #[command(flatten)]
        input: InputArgs,
        /// Number of iterations (ceiling when --tolerance is set)
        #[arg(value_name = "ITERATIONS")]
        iterations: Option<usize>,
        /// Damping factor in [0, 1]
        #[arg(long, short)]
        damping: Option<f64>,
        #[command(flatten)]
        engine: EngineArgs,
        #[command(flatten)]
        output: OutputArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Rank the same graph under several damping factors in parallel
    Sweep {
        #[command(flatten)]
        input: InputArgs,
        /// Damping factor to try; repeat for more runs
        #[arg(long, short, required = true)]
        damping: Vec<f64>,
        /// Number of iterations (ceiling when --tolerance is set)
        #[arg(long, short)]
        iterations: Option<usize>,
        #[command(flatten)]
        engine: EngineArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the loaded graph
    Inspect {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Node table: id column, then attribute columns
    #[arg(value_name = "NODE_FILE")]
    pub node_file: PathBuf,
    /// Edge table: source, target, then attribute columns
    #[arg(value_name = "EDGE_FILE")]
    pub edge_file: PathBuf,
    /// Mirror every edge
    #[arg(long)]
    pub undirected: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Stop early once successive rank vectors are this close
    #[arg(long)]
    pub tolerance: Option<f64>,
    /// Distance used with --tolerance
    #[arg(long, value_enum)]
    pub norm: Option<DistanceNorm>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Listing order
    #[arg(long, value_enum)]
    pub order: Option<SortOrder>,
    /// Show at most this many nodes
    #[arg(long)]
    pub max_nodes: Option<usize>,
    /// Decimal digits per score
    #[arg(long)]
    pub precision: Option<usize>,
}
