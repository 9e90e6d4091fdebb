//! Graph module: node directory, matrix store and mutation layer.
//!
//! This module provides the [`Graph`] struct, a bounded-capacity weighted
//! digraph backed by dense adjacency and weight matrices. Analyses over it
//! live in [`crate::algorithms`].
//!
//! # Example
//!
//! ```rust
//! use densegraph::graph::Graph;
//!
//! let mut graph = Graph::new(4);
//! graph.add_node("a").unwrap();
//! graph.add_node("b").unwrap();
//! graph.add_edge(&"a", &"b", 1.0).unwrap();
//!
//! assert_eq!(graph.size(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

mod dense_graph;
mod directory;
mod error;
mod interop;
mod matrix;

pub use dense_graph::{Graph, MAX_CAPACITY};
pub use directory::{GraphNode, NodeDirectory};
pub use error::{GraphError, GraphResult};
pub use matrix::SquareMatrix;
