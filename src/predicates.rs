//! Structural predicates over any [Graph].
//!
//! All predicates are read-only and keep no state between calls. Those which need to know
//! whether the graph is connected ask a [ConnectivityOracle]; the variants without the
//! `_with` suffix use [ComponentOracle].
use tracing::{debug, trace};

use crate::colouring::two_colouring;
use crate::connectivity::{ComponentOracle, ConnectivityOracle};
use crate::error::{Error, Result};
use crate::graph::*;

pub trait GraphProperties: Graph + Sized {
    /// Returns whether the graph has no edges. It may still have vertices.
    fn is_empty(&self) -> bool;

    /// Returns whether the graph has neither loops nor parallel edges. For directed
    /// graphs two arcs are parallel if they share source and target, so `u -> v` and
    /// `v -> u` may coexist in a simple digraph.
    ///
    /// Runs in $O(1)$ if the graph declares itself [structurally simple](Graph::is_structurally_simple)
    /// and in $O(|V| + |E|)$ otherwise.
    fn is_simple(&self) -> bool;

    /// Returns whether the graph is simple and every pair of distinct vertices is joined,
    /// by one edge if undirected and by one arc in each direction if directed.
    ///
    /// Fails with [Error::InvalidArgument] if the graph is neither directed nor undirected.
    fn is_complete(&self) -> Result<bool>;

    /// Returns whether the undirected graph is connected.
    fn is_connected(&self) -> Result<bool>;
    fn is_connected_with<O>(&self, oracle:&O) -> Result<bool> where O: ConnectivityOracle<Self>;

    /// Returns whether the directed graph is connected once edge directions are ignored.
    fn is_weakly_connected(&self) -> Result<bool>;
    fn is_weakly_connected_with<O>(&self, oracle:&O) -> Result<bool> where O: ConnectivityOracle<Self>;

    /// Returns whether every vertex of the directed graph reaches every other vertex.
    fn is_strongly_connected(&self) -> Result<bool>;
    fn is_strongly_connected_with<O>(&self, oracle:&O) -> Result<bool> where O: ConnectivityOracle<Self>;

    /// Returns whether the graph is an undirected tree: connected with exactly
    /// $|V| - 1$ edges. A single vertex is a tree, the graph without vertices is not.
    fn is_tree(&self) -> Result<bool>;
    fn is_tree_with<O>(&self, oracle:&O) -> Result<bool> where O: ConnectivityOracle<Self>;

    /// Returns whether the vertices can be split into two sets such that every edge
    /// has one endpoint in each, that is whether the graph contains no odd cycle.
    /// Edge directions are ignored and a loop is an odd cycle.
    ///
    /// Runs in $O(|V| + |E|)$. Graphs that declare themselves [structurally
    /// simple](Graph::is_structurally_simple) with too many edges are rejected without a search.
    fn is_bipartite(&self) -> bool;
}

impl<G> GraphProperties for G where G: Graph {
    fn is_empty(&self) -> bool {
        self.num_edges() == 0
    }

    fn is_simple(&self) -> bool {
        if self.is_structurally_simple() {
            return true
        }

        for v in self.vertices() {
            let mut neighbours:VertexSet<G::Vertex> = VertexSet::default();
            for e in self.outgoing_edges(v) {
                let u = self.opposite(e, v);
                if u == v || !neighbours.insert(u) {
                    return false
                }
            }
        }

        true
    }

    fn is_complete(&self) -> Result<bool> {
        let n = self.num_vertices();
        let expected = match self.orientation() {
            Orientation::Directed => n.checked_mul(n.saturating_sub(1)),
            Orientation::Undirected => {
                // Halve whichever factor is even so that n(n-1) is never formed.
                if n % 2 == 0 {
                    (n / 2).checked_mul(n.saturating_sub(1))
                } else {
                    n.checked_mul((n - 1) / 2)
                }
            }
            Orientation::Mixed => {
                debug!("completeness requested for a mixed graph");
                return Err(Error::InvalidArgument("Graph must be directed or undirected".to_string()))
            }
        };

        match expected {
            Some(m) => Ok(self.num_edges() == m && self.is_simple()),
            None => {
                // The edge count is a usize and cannot reach an overflowing value.
                debug!(n, "edge count of the complete graph overflows");
                Ok(false)
            }
        }
    }

    fn is_connected(&self) -> Result<bool> {
        self.is_connected_with(&ComponentOracle)
    }

    fn is_connected_with<O>(&self, oracle:&O) -> Result<bool> where O: ConnectivityOracle<Self> {
        oracle.is_connected(self)
    }

    fn is_weakly_connected(&self) -> Result<bool> {
        self.is_weakly_connected_with(&ComponentOracle)
    }

    fn is_weakly_connected_with<O>(&self, oracle:&O) -> Result<bool> where O: ConnectivityOracle<Self> {
        oracle.is_connected(self)
    }

    fn is_strongly_connected(&self) -> Result<bool> {
        self.is_strongly_connected_with(&ComponentOracle)
    }

    fn is_strongly_connected_with<O>(&self, oracle:&O) -> Result<bool> where O: ConnectivityOracle<Self> {
        oracle.is_strongly_connected(self)
    }

    fn is_tree(&self) -> Result<bool> {
        self.is_tree_with(&ComponentOracle)
    }

    fn is_tree_with<O>(&self, oracle:&O) -> Result<bool> where O: ConnectivityOracle<Self> {
        if !self.is_undirected() {
            return Ok(false)
        }

        // Count edges before asking the oracle
        match self.num_vertices().checked_sub(1) {
            Some(m) if m == self.num_edges() => self.is_connected_with(oracle),
            _ => Ok(false)
        }
    }

    fn is_bipartite(&self) -> bool {
        if self.is_empty() {
            return true
        }

        if exceeds_bipartite_bound(self) {
            debug!(n = self.num_vertices(), m = self.num_edges(), "too many edges for a bipartite graph");
            return false
        }

        match two_colouring(self) {
            Ok(_) => true,
            Err(_) => {
                trace!("edge between two vertices of the same colour");
                false
            }
        }
    }
}

/// Whether `graph` has more edges than any bipartite graph with the same number of
/// vertices and the same orientation.
///
/// The bound only holds for simple graphs, so it is only applied to graphs that
/// declare themselves structurally simple. An overflow leaves the question open.
fn exceeds_bipartite_bound<G>(graph:&G) -> bool where G: Graph {
    if !graph.is_structurally_simple() {
        return false
    }

    let factor:usize = match graph.orientation() {
        // At most n^2/4 edges
        Orientation::Undirected => 4,
        // At most n^2/2 arcs, going both ways between the two sides
        Orientation::Directed => 2,
        Orientation::Mixed => return false,
    };

    let n = graph.num_vertices();
    match (graph.num_edges().checked_mul(factor), n.checked_mul(n)) {
        (Some(lhs), Some(rhs)) => lhs > rhs,
        _ => false
    }
}
