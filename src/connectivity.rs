//! Connectivity queries the predicates delegate to.
//!
//! The predicates in [crate::predicates] never compute components themselves; they ask a
//! [ConnectivityOracle]. [ComponentOracle] is the oracle used when the caller does not
//! supply one.
use tracing::debug;
use union_find_rs::prelude::*;

use crate::error::{Error, Result};
use crate::graph::*;

/// Answers connectivity questions about a graph.
pub trait ConnectivityOracle<G> where G: Graph {
    /// Whether `graph` is connected when every edge is read as undirected.
    fn is_connected(&self, graph:&G) -> Result<bool>;

    /// Whether every vertex of the directed `graph` can reach every other vertex
    /// along edge directions.
    fn is_strongly_connected(&self, graph:&G) -> Result<bool>;
}

/// Oracle which computes weak connectivity with disjoint sets and strong connectivity
/// with one forward and one backward search from a common root.
///
/// The graph without vertices is neither connected nor strongly connected.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentOracle;

impl<G> ConnectivityOracle<G> for ComponentOracle where G: Graph {

    fn is_connected(&self, graph:&G) -> Result<bool> {
        let n = graph.num_vertices();
        if n == 0 {
            return Ok(false)
        }

        let index:VertexMap<_, usize> = graph.vertices().enumerate().map(|(i, v)| (v, i)).collect();
        let mut dsets:DisjointSets<usize> = DisjointSets::with_capacity(n);

        for i in index.values() {
            dsets.make_set(*i).map_err(union_find_error)?;
        }

        // Every union merges two components into one, so the graph is
        // connected once n-1 unions have happened.
        let mut merges = 0;
        for e in graph.edges() {
            let (u, v) = graph.endpoints(e);
            let ru = dsets.find_set(&index[u]).map_err(union_find_error)?;
            let rv = dsets.find_set(&index[v]).map_err(union_find_error)?;

            // `union` must only be called on representatives of distinct sets.
            if ru != rv {
                dsets.union(&ru, &rv).map_err(union_find_error)?;
                merges += 1;
                if merges == n - 1 {
                    break;
                }
            }
        }

        Ok(merges == n - 1)
    }

    fn is_strongly_connected(&self, graph:&G) -> Result<bool> {
        if !graph.is_directed() {
            debug!(orientation = ?graph.orientation(), "strong connectivity requested for a graph that is not directed");
            return Err(Error::InvalidArgument("Strong connectivity is only defined for directed graphs".to_string()))
        }

        let root = match graph.vertices().next() {
            Some(root) => root,
            None => return Ok(false)
        };

        let n = graph.num_vertices();
        Ok(reachable(graph, root, true) == n && reachable(graph, root, false) == n)
    }
}

fn union_find_error(err:union_find_rs::traits::Error) -> Error {
    Error::Oracle(format!("Disjoint sets: {:?}", err))
}

/// Counts the vertices reachable from `root` along outgoing edges (`forward`) or
/// against incoming edges (`!forward`), `root` included.
fn reachable<'a, G>(graph:&'a G, root:&'a G::Vertex, forward:bool) -> usize where G: Graph {
    let mut seen:VertexSet<G::Vertex> = VertexSet::default();
    let mut stack = vec![root];
    seen.insert(root);

    while let Some(v) = stack.pop() {
        let edges = if forward { graph.outgoing_edges(v) } else { graph.incoming_edges(v) };
        for e in edges {
            let u = graph.opposite(e, v);
            if seen.insert(u) {
                stack.push(u);
            }
        }
    }

    seen.len()
}
