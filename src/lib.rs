//! A small directed graph with value-identified vertices.
//!
//! [`DiGraph`] stores vertices and directed edges in insertion order and
//! answers reachability questions through depth-first
//! ([`DiGraph::traverse`]) and breadth-first
//! ([`DiGraph::traverse_breadth_first`]) traversal.  With the `dot` feature,
//! graphs can be read from and written to Graphviz DOT.
//!
//! ```
//! use vertex_walk::DiGraph;
//!
//! let mut graph = DiGraph::new();
//! for v in ["A", "B", "C"] {
//!     graph.add_vertex(v);
//! }
//! graph.add_edge(&"A", &"B")?;
//! graph.add_edge(&"B", &"C")?;
//! graph.add_edge(&"C", &"A")?;
//! assert_eq!(graph.traverse(&"A")?, ["A", "B", "C"]);
//! # Ok::<(), vertex_walk::GraphError<&str>>(())
//! ```
pub mod error;
pub mod graph;
pub mod search;
pub mod tracing_support;

#[cfg(feature = "dot")]
pub mod dot;

pub use error::GraphError;
pub use graph::{DiGraph, Vertex};
