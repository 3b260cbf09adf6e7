//! Structural predicates over abstract graphs.
//!
//! The crate answers the questions an algorithm asks before it commits to a strategy:
//! does the graph have edges at all, loops or parallel edges, is it complete, connected,
//! a tree, bipartite? It does not store graphs. Any storage can be inspected by
//! implementing the read-only [Graph](graph::Graph) view for it, after which all
//! predicates of [GraphProperties](predicates::GraphProperties) are available:
//!
//! ```rust
//! use graphshape::graph::{Graph, Orientation};
//! use graphshape::predicates::GraphProperties;
//!
//! /// An undirected graph kept as a plain list of edges.
//! struct EdgeList {
//!     vertices: Vec<u32>,
//!     ids: Vec<usize>,
//!     edges: Vec<(u32, u32)>,
//! }
//!
//! impl Graph for EdgeList {
//!     type Vertex = u32;
//!     type Edge = usize;
//!
//!     fn orientation(&self) -> Orientation { Orientation::Undirected }
//!     fn num_vertices(&self) -> usize { self.vertices.len() }
//!     fn num_edges(&self) -> usize { self.edges.len() }
//!     fn contains(&self, u:&u32) -> bool { self.vertices.contains(u) }
//!
//!     fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&'a u32> + 'a> {
//!         Box::new(self.vertices.iter())
//!     }
//!
//!     fn edges<'a>(&'a self) -> Box<dyn Iterator<Item=&'a usize> + 'a> {
//!         Box::new(self.ids.iter())
//!     }
//!
//!     fn endpoints<'a>(&'a self, e:&usize) -> (&'a u32, &'a u32) {
//!         let (u, v) = &self.edges[*e];
//!         (u, v)
//!     }
//!
//!     fn incident_edges<'a>(&'a self, u:&u32) -> Box<dyn Iterator<Item=&'a usize> + 'a> {
//!         let u = *u;
//!         Box::new(self.ids.iter().filter(move |e| {
//!             let (s, t) = self.edges[**e];
//!             s == u || t == u
//!         }))
//!     }
//! }
//!
//! fn main() {
//!     let edges = vec![(0,1),(1,2),(2,3),(3,0)];
//!     let square = EdgeList { vertices: (0..4).collect(), ids: (0..edges.len()).collect(), edges };
//!
//!     assert!(!square.is_empty());
//!     assert!(square.is_simple());
//!     assert!(square.is_bipartite());
//!     assert!(square.is_connected().unwrap());
//!     assert!(!square.is_complete().unwrap());
//!     assert!(!square.is_tree().unwrap());
//! }
//! ```
//!
//! Connectivity is not computed by the predicates themselves. They delegate to a
//! [ConnectivityOracle](connectivity::ConnectivityOracle), by default the bundled
//! [ComponentOracle](connectivity::ComponentOracle); every connectivity-flavoured
//! predicate has a `_with` variant which takes another oracle.
#![allow(non_snake_case)]

pub mod connectivity;
pub mod error;
pub mod graph;
pub mod predicates;

mod colouring;

#[cfg(test)]
mod testgraph;

pub use connectivity::{ComponentOracle, ConnectivityOracle};
pub use error::{Error, Result};
pub use graph::{Graph, Orientation};
pub use predicates::GraphProperties;
