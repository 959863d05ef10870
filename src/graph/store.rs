// src/graph/store.rs
//! The graph store: nodes, edges, and both adjacency directions.

use std::collections::HashMap;
use std::fmt;

use super::attrs::{AttrValue, Attributes};
use super::entity::{Edge, Node};
use super::{GraphKind, NodeKey};
use crate::error::{RankError, Result};

/// Nodes and edges with insertion-ordered storage.
///
/// Nodes get a dense index in insertion order. Out- and in-adjacency are
/// tracked as separate index lists and always updated together, so for every
/// stored edge `(u, v)` the target sits in `u`'s out-list and the source in
/// `v`'s in-list.
///
/// Undirected graphs store every logical edge as two mirrored directed edges.
///
/// # Example
///
/// ```rust
/// use walkrank_core::graph::{Attributes, Graph};
///
/// let mut g = Graph::directed();
/// g.add_node(0, Attributes::new())?;
/// g.add_node(1, Attributes::new())?;
/// g.add_edge(0, 1, Attributes::new())?;
///
/// assert_eq!(g.out_degree(&0)?, 1);
/// assert_eq!(g.in_degree(&1)?, 1);
/// # Ok::<(), walkrank_core::error::RankError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<K> {
    kind: GraphKind,
    nodes: Vec<Node<K>>,
    index: HashMap<K, usize>,
    edges: Vec<Edge<K>>,
    edge_index: HashMap<(usize, usize), usize>,
    out_adj: Vec<Vec<usize>>,
    in_adj: Vec<Vec<usize>>,
}

impl<K: NodeKey> Default for Graph<K> {
    fn default() -> Self {
        Self::directed()
    }
}

impl<K: NodeKey> Graph<K> {
    #[must_use]
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
            out_adj: Vec::new(),
            in_adj: Vec::new(),
        }
    }

    #[must_use]
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    #[must_use]
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    #[must_use]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Inserts a node.
    ///
    /// # Errors
    /// `DuplicateNode` if the identifier is already present.
    pub fn add_node(&mut self, id: K, attributes: Attributes) -> Result<()> {
        if self.index.contains_key(&id) {
            return Err(RankError::DuplicateNode(id.to_string()));
        }
        let idx = self.nodes.len();
        self.index.insert(id.clone(), idx);
        self.nodes.push(Node::new(id, attributes));
        self.out_adj.push(Vec::new());
        self.in_adj.push(Vec::new());
        Ok(())
    }

    /// Sets one attribute on an existing node, returning the previous value.
    ///
    /// # Errors
    /// `UnknownNode` if the node is absent.
    pub fn set_node_attr(
        &mut self,
        id: &K,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Result<Option<AttrValue>> {
        let idx = self.require(id)?;
        Ok(self.nodes[idx].set_attr(name.into(), value.into()))
    }

    /// Inserts an edge. In an undirected graph the mirrored edge is inserted
    /// as well, carrying the same attributes.
    ///
    /// Nothing is mutated unless every check passes.
    ///
    /// # Errors
    /// - `SelfLoop` for `source == target` in an undirected graph.
    /// - `UnknownNode` if either endpoint is absent.
    /// - `DuplicateEdge` if the edge (in either direction, when undirected)
    ///   already exists.
    pub fn add_edge(&mut self, source: K, target: K, attributes: Attributes) -> Result<()> {
        if self.kind == GraphKind::Undirected && source == target {
            return Err(RankError::SelfLoop(source.to_string()));
        }
        let s = self.require(&source)?;
        let t = self.require(&target)?;

        let duplicate = self.edge_index.contains_key(&(s, t))
            || (self.kind == GraphKind::Undirected && self.edge_index.contains_key(&(t, s)));
        if duplicate {
            return Err(RankError::DuplicateEdge {
                from: source.to_string(),
                to: target.to_string(),
            });
        }

        let mirror = (self.kind == GraphKind::Undirected)
            .then(|| Edge::new(target.clone(), source.clone(), attributes.clone()));
        self.link(s, t, Edge::new(source, target, attributes));
        if let Some(mirror) = mirror {
            self.link(t, s, mirror);
        }
        Ok(())
    }

    fn link(&mut self, s: usize, t: usize, edge: Edge<K>) {
        self.edge_index.insert((s, t), self.edges.len());
        self.edges.push(edge);
        self.out_adj[s].push(t);
        self.in_adj[t].push(s);
    }

    fn require(&self, id: &K) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| RankError::UnknownNode(id.to_string()))
    }

    /// # Errors
    /// `UnknownNode` if absent.
    pub fn node(&self, id: &K) -> Result<&Node<K>> {
        self.require(id).map(|idx| &self.nodes[idx])
    }

    /// Looks up the directed edge `(source, target)`.
    ///
    /// # Errors
    /// `UnknownNode` if either endpoint is absent, `UnknownEdge` otherwise.
    pub fn edge(&self, source: &K, target: &K) -> Result<&Edge<K>> {
        let s = self.require(source)?;
        let t = self.require(target)?;
        self.edge_index
            .get(&(s, t))
            .map(|&e| &self.edges[e])
            .ok_or_else(|| RankError::UnknownEdge {
                from: source.to_string(),
                to: target.to_string(),
            })
    }

    #[must_use]
    pub fn contains_node(&self, id: &K) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn contains_edge(&self, source: &K, target: &K) -> bool {
        self.edge(source, target).is_ok()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<K>> + '_ {
        self.nodes.iter()
    }

    /// Node identifiers in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &K> + '_ {
        self.nodes.iter().map(Node::id)
    }

    /// Stored directed edges in insertion order. An undirected graph yields
    /// both directions of each logical edge.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<K>> + '_ {
        self.edges.iter()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// # Errors
    /// `UnknownNode` if absent.
    pub fn out_degree(&self, id: &K) -> Result<usize> {
        self.require(id).map(|idx| self.out_adj[idx].len())
    }

    /// # Errors
    /// `UnknownNode` if absent.
    pub fn in_degree(&self, id: &K) -> Result<usize> {
        self.require(id).map(|idx| self.in_adj[idx].len())
    }

    /// Directed: `in_degree + out_degree` (a self-loop counts twice).
    /// Undirected: number of logical edges touching the node; the mirrored
    /// pair counts once.
    ///
    /// # Errors
    /// `UnknownNode` if absent.
    pub fn degree(&self, id: &K) -> Result<usize> {
        let idx = self.require(id)?;
        Ok(match self.kind {
            GraphKind::Directed => self.out_adj[idx].len() + self.in_adj[idx].len(),
            GraphKind::Undirected => self.out_adj[idx].len(),
        })
    }

    /// # Errors
    /// `UnknownNode` if absent.
    pub fn neighbors_out(&self, id: &K) -> Result<Vec<&K>> {
        let idx = self.require(id)?;
        Ok(self.out_adj[idx].iter().map(|&n| self.nodes[n].id()).collect())
    }

    /// # Errors
    /// `UnknownNode` if absent.
    pub fn neighbors_in(&self, id: &K) -> Result<Vec<&K>> {
        let idx = self.require(id)?;
        Ok(self.in_adj[idx].iter().map(|&n| self.nodes[n].id()).collect())
    }

    // Dense index view. Indices are insertion positions and stay valid for
    // the lifetime of the graph since nodes are never removed.

    #[must_use]
    pub fn index_of(&self, id: &K) -> Option<usize> {
        self.index.get(id).copied()
    }

    #[must_use]
    pub fn key_at(&self, index: usize) -> Option<&K> {
        self.nodes.get(index).map(Node::id)
    }

    /// Out-degree by dense index. Panics if `index >= node_count()`.
    #[must_use]
    pub fn out_degree_at(&self, index: usize) -> usize {
        self.out_adj[index].len()
    }

    /// In-neighbor indices by dense index. Panics if `index >= node_count()`.
    #[must_use]
    pub fn in_indices(&self, index: usize) -> &[usize] {
        &self.in_adj[index]
    }

    /// Dense indices of nodes with out-degree 0.
    pub fn dangling_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.out_adj
            .iter()
            .enumerate()
            .filter(|(_, out)| out.is_empty())
            .map(|(i, _)| i)
    }
}

impl<K: NodeKey> fmt::Display for Graph<K> {
    /// Nodes sorted by identifier, then edges sorted by `(source, target)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.kind.label())?;

        let mut nodes: Vec<_> = self.nodes.iter().collect();
        nodes.sort_by(|a, b| a.id().cmp(b.id()));
        for node in nodes {
            write!(f, "{node}")?;
        }

        let mut edges: Vec<_> = self.edges.iter().collect();
        edges.sort_by(|a, b| a.endpoints().cmp(&b.endpoints()));
        for edge in edges {
            write!(f, "{edge}")?;
        }
        Ok(())
    }
}
