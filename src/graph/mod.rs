// src/graph/mod.rs
//! Graph store: nodes and edges with attribute payloads, adjacency in both
//! directions, and degree queries.

pub mod attrs;
pub mod entity;
pub mod store;

pub use attrs::{attrs, AttrValue, Attributes};
pub use entity::{Edge, Node};
pub use store::Graph;

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Bounds every node identifier must satisfy.
///
/// `Ord` gives deterministic output ordering, `Display` is used for error
/// messages and formatted results.
pub trait NodeKey: Clone + Eq + Hash + Ord + Debug + Display {}

impl<T: Clone + Eq + Hash + Ord + Debug + Display> NodeKey for T {}

/// Whether edges are one-way or mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    #[default]
    Directed,
    Undirected,
}

impl GraphKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Directed => "DirectedGraph",
            Self::Undirected => "UndirectedGraph",
        }
    }
}
