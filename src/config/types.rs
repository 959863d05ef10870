use serde::{Deserialize, Serialize};

use crate::rank::DistanceNorm;
use crate::reporting::SortOrder;

/// Parameters for one PageRank run.
///
/// With no `tolerance` the run takes exactly `iterations` rounds. With a
/// tolerance it stops as soon as two successive vectors are closer than that
/// under `norm`, and `iterations` becomes the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageRankConfig {
    #[serde(default = "default_damping")]
    pub damping_factor: f64,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default)]
    pub tolerance: Option<f64>,
    #[serde(default)]
    pub norm: DistanceNorm,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: default_damping(),
            iterations: default_iterations(),
            tolerance: None,
            norm: DistanceNorm::default(),
        }
    }
}

/// How results are rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default)]
    pub max_nodes: Option<usize>,
    #[serde(default)]
    pub order: SortOrder,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            max_nodes: None,
            order: SortOrder::default(),
        }
    }
}

pub(crate) const fn default_damping() -> f64 { 0.85 }
pub(crate) const fn default_iterations() -> usize { 40 }
const fn default_precision() -> usize { 5 }

/// On-disk shape of `walkrank.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WalkrankToml {
    #[serde(default)]
    pub pagerank: PageRankConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub pagerank: PageRankConfig,
    pub output: OutputConfig,
}
