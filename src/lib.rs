//! PageRank over tabular node/edge data.
//!
//! - [`graph`] - node/edge store with attribute payloads and degree queries
//! - [`rank`] - rank vectors and the damped power iteration
//! - [`loader`] - CSV node and edge tables
//! - [`reporting`] - text and JSON rendering
//!
//! # Example
//!
//! ```rust
//! use walkrank_core::graph::{attrs, AttrValue, Attributes, Graph};
//! use walkrank_core::rank::pagerank;
//!
//! let mut g = Graph::directed();
//! g.add_node(0, attrs([("airport_name", "DTW".into())]))?;
//! g.add_node(1, attrs([("airport_name", "AMS".into())]))?;
//! g.add_node(2, attrs([("airport_name", "ORD".into())]))?;
//! g.add_edge(0, 1, attrs([("flight_time_in_hours", AttrValue::Int(8))]))?;
//! g.add_edge(0, 2, attrs([("flight_time_in_hours", AttrValue::Int(1))]))?;
//! g.add_edge(1, 0, Attributes::new())?;
//!
//! let ranks = pagerank(&g, 40, 0.85)?;
//! assert!((ranks.sum() - 1.0).abs() < 1e-9);
//! # Ok::<(), walkrank_core::error::RankError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod loader;
pub mod rank;
pub mod reporting;
