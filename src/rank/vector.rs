// src/rank/vector.rs
//! Rank vectors: one score per node, aligned with the graph's dense indices.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{RankError, Result};
use crate::graph::{Graph, NodeKey};

/// Norm used to measure how far two rank vectors are apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DistanceNorm {
    /// Sum of absolute differences.
    #[default]
    L1,
    /// Largest absolute difference.
    Linf,
}

/// Scores keyed by node identifier.
///
/// The key table is shared between snapshots, so cloning a vector or
/// deriving the next round from it only copies the scores.
#[derive(Debug, Clone)]
pub struct RankVector<K> {
    keys: Arc<[K]>,
    lookup: Arc<HashMap<K, usize>>,
    scores: Vec<f64>,
}

impl<K: NodeKey> RankVector<K> {
    /// Every node gets `1/N`.
    ///
    /// # Errors
    /// `EmptyGraph` if the graph has no nodes.
    #[allow(clippy::cast_precision_loss)]
    pub fn uniform(graph: &Graph<K>) -> Result<Self> {
        if graph.is_empty() {
            return Err(RankError::EmptyGraph);
        }
        let keys: Arc<[K]> = graph.node_ids().cloned().collect();
        let n = keys.len();
        Ok(Self::from_parts(keys, vec![1.0 / n as f64; n]))
    }

    /// Builds a vector from explicit `(id, score)` pairs, keeping their order.
    /// A repeated id keeps its first position and its last score.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut keys = Vec::new();
        let mut scores = Vec::new();
        let mut lookup = HashMap::new();
        for (key, score) in pairs {
            if let Some(&idx) = lookup.get(&key) {
                scores[idx] = score;
                continue;
            }
            lookup.insert(key.clone(), keys.len());
            keys.push(key);
            scores.push(score);
        }
        Self {
            keys: keys.into(),
            lookup: Arc::new(lookup),
            scores,
        }
    }

    fn from_parts(keys: Arc<[K]>, scores: Vec<f64>) -> Self {
        let lookup = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (k.clone(), i))
            .collect();
        Self {
            keys,
            lookup: Arc::new(lookup),
            scores,
        }
    }

    /// Same keys, new scores. `scores` must have one entry per key.
    pub(crate) fn with_scores(&self, scores: Vec<f64>) -> Self {
        debug_assert_eq!(scores.len(), self.keys.len());
        Self {
            keys: Arc::clone(&self.keys),
            lookup: Arc::clone(&self.lookup),
            scores,
        }
    }

    /// This vector in the graph's node order. Returned as-is when the keys
    /// already line up, reordered when they are a permutation of the graph's
    /// nodes.
    ///
    /// # Errors
    /// - `RankMismatch` if the lengths differ.
    /// - `UnknownNode` for a key the graph does not contain.
    pub fn aligned_with(&self, graph: &Graph<K>) -> Result<Cow<'_, Self>> {
        if self.len() != graph.node_count() {
            return Err(RankError::RankMismatch {
                expected: graph.node_count(),
                found: self.len(),
            });
        }
        if self.keys.iter().eq(graph.node_ids()) {
            return Ok(Cow::Borrowed(self));
        }

        // Keys are unique and the lengths match, so once every key is known
        // to the graph this is a permutation.
        let mut scores = vec![0.0; self.len()];
        for (key, score) in self.iter() {
            let idx = graph
                .index_of(key)
                .ok_or_else(|| RankError::UnknownNode(key.to_string()))?;
            scores[idx] = score;
        }
        let keys: Arc<[K]> = graph.node_ids().cloned().collect();
        Ok(Cow::Owned(Self::from_parts(keys, scores)))
    }

    #[must_use]
    pub fn get(&self, id: &K) -> Option<f64> {
        self.lookup.get(id).map(|&i| self.scores[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Scores in key order.
    #[must_use]
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> + '_ {
        self.keys.iter().zip(self.scores.iter().copied())
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Distance to another snapshot of the same graph. Entries are compared
    /// position by position.
    #[must_use]
    pub fn distance(&self, other: &Self, norm: DistanceNorm) -> f64 {
        let diffs = self
            .scores
            .iter()
            .zip(other.scores.iter())
            .map(|(a, b)| (a - b).abs());
        match norm {
            DistanceNorm::L1 => diffs.sum(),
            DistanceNorm::Linf => diffs.fold(0.0, f64::max),
        }
    }

    #[must_use]
    pub fn to_map(&self) -> HashMap<K, f64> {
        self.iter().map(|(k, v)| (k.clone(), v)).collect()
    }

    /// Entries ascending by identifier.
    #[must_use]
    pub fn sorted_by_id(&self) -> Vec<(&K, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Entries descending by score rounded to `precision` digits, ties broken
    /// by ascending identifier.
    #[must_use]
    pub fn sorted_by_rank(&self, precision: usize) -> Vec<(&K, f64)> {
        let scale = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
        let rounded = |x: f64| (x * scale).round();
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| {
            rounded(b.1)
                .total_cmp(&rounded(a.1))
                .then_with(|| a.0.cmp(b.0))
        });
        entries
    }
}

impl<K: NodeKey> PartialEq for RankVector<K> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.scores == other.scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Attributes;

    fn line(n: u32) -> Graph<u32> {
        let mut g = Graph::directed();
        for i in 0..n {
            g.add_node(i, Attributes::new()).unwrap();
        }
        g
    }

    #[test]
    fn test_uniform_sums_to_one() {
        let v = RankVector::uniform(&line(7)).unwrap();
        assert_eq!(v.len(), 7);
        assert!((v.sum() - 1.0).abs() < 1e-12);
        assert!((v.get(&3).unwrap() - 1.0 / 7.0).abs() < 1e-15);
    }

    #[test]
    fn test_uniform_rejects_empty() {
        let g: Graph<u32> = Graph::directed();
        assert!(matches!(RankVector::uniform(&g), Err(RankError::EmptyGraph)));
    }

    #[test]
    fn test_distance_norms() {
        let a = RankVector::from_pairs([(0, 0.5), (1, 0.25), (2, 0.25)]);
        let b = a.with_scores(vec![0.4, 0.35, 0.25]);
        assert!((a.distance(&b, DistanceNorm::L1) - 0.2).abs() < 1e-12);
        assert!((a.distance(&b, DistanceNorm::Linf) - 0.1).abs() < 1e-12);
        assert_eq!(a.distance(&a, DistanceNorm::L1), 0.0);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let a = RankVector::from_pairs([("x".to_string(), 1.0)]);
        let b = a.with_scores(vec![0.0]);
        assert_eq!(a.get(&"x".to_string()), Some(1.0));
        assert_eq!(b.get(&"x".to_string()), Some(0.0));
    }

    #[test]
    fn test_sorted_by_rank_breaks_ties_by_id() {
        let v = RankVector::from_pairs([(2, 0.3), (0, 0.3), (1, 0.4)]);
        let ids: Vec<u32> = v.sorted_by_rank(5).into_iter().map(|(k, _)| *k).collect();
        assert_eq!(ids, vec![1, 0, 2]);
    }

    #[test]
    fn test_from_pairs_repeated_key() {
        let v = RankVector::from_pairs([(1, 0.1), (2, 0.2), (1, 0.7)]);
        assert_eq!(v.len(), 2);
        assert_eq!(v.get(&1), Some(0.7));
    }
}
