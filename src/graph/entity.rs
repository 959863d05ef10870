// src/graph/entity.rs
//! Node and edge records stored by [`Graph`](super::Graph).

use super::attrs::{AttrValue, Attributes};
use std::fmt;

/// A node: identifier plus attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<K> {
    id: K,
    attributes: Attributes,
}

impl<K> Node<K> {
    pub(crate) fn new(id: K, attributes: Attributes) -> Self {
        Self { id, attributes }
    }

    #[must_use]
    pub fn id(&self) -> &K {
        &self.id
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    pub(crate) fn set_attr(&mut self, name: String, value: AttrValue) -> Option<AttrValue> {
        self.attributes.insert(name, value)
    }
}

impl<K: fmt::Display> fmt::Display for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Node [{}]", self.id)?;
        write_attributes(f, &self.attributes)
    }
}

/// A directed edge. Undirected graphs store one of these per direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<K> {
    source: K,
    target: K,
    attributes: Attributes,
}

impl<K> Edge<K> {
    pub(crate) fn new(source: K, target: K, attributes: Attributes) -> Self {
        Self {
            source,
            target,
            attributes,
        }
    }

    #[must_use]
    pub fn source(&self) -> &K {
        &self.source
    }

    #[must_use]
    pub fn target(&self) -> &K {
        &self.target
    }

    /// `(source, target)` pair.
    #[must_use]
    pub fn endpoints(&self) -> (&K, &K) {
        (&self.source, &self.target)
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// The `weight` attribute as a number, if present. Not used by the base
    /// PageRank update.
    #[must_use]
    pub fn weight(&self) -> Option<f64> {
        self.attr("weight").and_then(AttrValue::as_f64)
    }
}

impl<K: fmt::Display> fmt::Display for Edge<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Edge from node [{}] to node [{}]",
            self.source, self.target
        )?;
        write_attributes(f, &self.attributes)
    }
}

fn write_attributes(f: &mut fmt::Formatter<'_>, attributes: &Attributes) -> fmt::Result {
    for (name, value) in attributes {
        writeln!(f, "    {name} : {value}")?;
    }
    Ok(())
}
