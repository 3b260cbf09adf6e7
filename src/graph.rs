//! The read-only graph view the predicates operate on.
//!
//! Storage is left to the caller: any structure that can enumerate its vertices and edges,
//! report the endpoints of an edge and list the edges incident to a vertex can implement
//! [Graph]. Edges are identified by their own handle rather than by their endpoint pair,
//! so parallel edges and loops are representable.
use fxhash::{FxHashMap, FxHashSet};

use std::hash::Hash;

pub type VertexSet<'a, V> = FxHashSet<&'a V>;
pub type VertexMap<'a, V, T> = FxHashMap<&'a V, T>;

/// How the edges of a graph are to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Every edge connects its endpoints in both directions.
    Undirected,
    /// Every edge points from its first endpoint (source) to its second (target).
    Directed,
    /// Directed and undirected edges side by side.
    Mixed,
}

/// Capability set of a graph as seen by the predicates in [crate::predicates].
///
/// Implementations must guarantee that the endpoints of every edge are contained in
/// the vertex set. Methods taking a vertex or an edge may panic if it is not part of
/// the graph.
pub trait Graph {
    type Vertex: Hash + Eq + Clone;
    type Edge: Hash + Eq + Clone;

    fn orientation(&self) -> Orientation;

    fn num_vertices(&self) -> usize;
    fn num_edges(&self) -> usize;

    /// Whether `u` is a vertex of the graph.
    fn contains(&self, u:&Self::Vertex) -> bool;

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&'a Self::Vertex> + 'a>;
    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item=&'a Self::Edge> + 'a>;

    /// Returns the endpoints of `e`. For directed edges this is `(source, target)`.
    fn endpoints<'a>(&'a self, e:&Self::Edge) -> (&'a Self::Vertex, &'a Self::Vertex);

    /// Returns every edge incident to `u`. For directed graphs this includes both
    /// incoming and outgoing edges.
    fn incident_edges<'a>(&'a self, u:&Self::Vertex) -> Box<dyn Iterator<Item=&'a Self::Edge> + 'a>;

    /// Returns the edges leaving `u`. Unless the graph is directed these are
    /// all incident edges.
    fn outgoing_edges<'a>(&'a self, u:&Self::Vertex) -> Box<dyn Iterator<Item=&'a Self::Edge> + 'a> {
        if !self.is_directed() {
            return self.incident_edges(u)
        }

        let source = u.clone();
        Box::new(self.incident_edges(u).filter(move |e| *self.endpoints(e).0 == source))
    }

    /// Returns the edges entering `u`. Unless the graph is directed these are
    /// all incident edges.
    fn incoming_edges<'a>(&'a self, u:&Self::Vertex) -> Box<dyn Iterator<Item=&'a Self::Edge> + 'a> {
        if !self.is_directed() {
            return self.incident_edges(u)
        }

        let target = u.clone();
        Box::new(self.incident_edges(u).filter(move |e| *self.endpoints(e).1 == target))
    }

    /// Returns the endpoint of `e` which is not `u`. For a loop this is `u` itself.
    fn opposite<'a>(&'a self, e:&Self::Edge, u:&Self::Vertex) -> &'a Self::Vertex {
        debug_assert!(self.contains(u), "Vertex not contained in the graph");
        let (s, t) = self.endpoints(e);
        debug_assert!(s == u || t == u, "Vertex is not an endpoint of the edge");
        if s == u { t } else { s }
    }

    fn is_directed(&self) -> bool {
        self.orientation() == Orientation::Directed
    }

    fn is_undirected(&self) -> bool {
        self.orientation() == Orientation::Undirected
    }

    /// Whether the underlying storage rejects loops outright.
    fn forbids_loops(&self) -> bool {
        false
    }

    /// Whether the underlying storage rejects parallel edges outright.
    fn forbids_multi_edges(&self) -> bool {
        false
    }

    /// Whether the graph is simple by construction, which lets the predicates
    /// skip inspecting its edges.
    fn is_structurally_simple(&self) -> bool {
        self.forbids_loops() && self.forbids_multi_edges()
    }
}
