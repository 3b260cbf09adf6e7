//! Edge-list multigraph used by the unit tests.
//!
//! Unlike a set-based adjacency structure it keeps every edge as its own entry, so loops
//! and parallel edges survive. The constructors mirror the usual named graphs:
//! paths, cycles, matchings, stars, cliques and bicliques.
use fxhash::FxHashMap;
use itertools::Itertools;

use crate::graph::*;

pub type Vertex = u32;
pub type EdgeId = usize;

#[derive(Debug, Clone)]
pub struct TestGraph {
    orientation: Orientation,
    simple: bool,
    vertices: Vec<Vertex>,
    ids: Vec<EdgeId>,
    endpoints: Vec<(Vertex, Vertex)>,
    incidence: FxHashMap<Vertex, Vec<EdgeId>>,
}

impl Graph for TestGraph {
    type Vertex = Vertex;
    type Edge = EdgeId;

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn num_edges(&self) -> usize {
        self.ids.len()
    }

    fn contains(&self, u:&Vertex) -> bool {
        self.incidence.contains_key(u)
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&'a Vertex> + 'a> {
        Box::new(self.vertices.iter())
    }

    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item=&'a EdgeId> + 'a> {
        Box::new(self.ids.iter())
    }

    fn endpoints<'a>(&'a self, e:&EdgeId) -> (&'a Vertex, &'a Vertex) {
        let (u, v) = &self.endpoints[*e];
        (u, v)
    }

    fn incident_edges<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=&'a EdgeId> + 'a> {
        match self.incidence.get(u) {
            Some(E) => Box::new(E.iter()),
            None => panic!("Vertex not contained in TestGraph")
        }
    }

    fn forbids_loops(&self) -> bool {
        self.simple
    }

    fn forbids_multi_edges(&self) -> bool {
        self.simple
    }
}

impl TestGraph {
    pub fn new(orientation:Orientation) -> TestGraph {
        TestGraph {
            orientation,
            simple: false,
            vertices: Vec::new(),
            ids: Vec::new(),
            endpoints: Vec::new(),
            incidence: FxHashMap::default(),
        }
    }

    pub fn undirected() -> TestGraph {
        TestGraph::new(Orientation::Undirected)
    }

    pub fn directed() -> TestGraph {
        TestGraph::new(Orientation::Directed)
    }

    /// Builds a graph from a list of edges. Vertices are added as they appear.
    pub fn from_edges<I>(orientation:Orientation, edges:I) -> TestGraph where I: IntoIterator<Item=(Vertex, Vertex)> {
        let mut res = TestGraph::new(orientation);
        res.add_edges(edges);
        res
    }

    /// Marks the graph as one whose storage rejects loops and parallel edges.
    /// The caller is responsible for this actually being true.
    pub fn declare_simple(mut self) -> TestGraph {
        self.simple = true;
        self
    }

    /// Returns a copy that reads the same edge list with another orientation.
    /// Each edge `(u,v)` becomes the arc `u -> v` when directed.
    pub fn with_orientation(&self, orientation:Orientation) -> TestGraph {
        let mut res = self.clone();
        res.orientation = orientation;
        res
    }

    pub fn add_vertex(&mut self, u:Vertex) -> bool {
        if self.incidence.contains_key(&u) {
            return false
        }
        self.incidence.insert(u, Vec::new());
        self.vertices.push(u);
        true
    }

    pub fn add_vertices<I>(&mut self, it:I) where I: IntoIterator<Item=Vertex> {
        for u in it {
            self.add_vertex(u);
        }
    }

    /// Adds a new edge between `u` and `v`, even if one already exists, and
    /// returns its identifier.
    pub fn add_edge(&mut self, u:Vertex, v:Vertex) -> EdgeId {
        self.add_vertex(u);
        self.add_vertex(v);

        let e = self.ids.len();
        self.ids.push(e);
        self.endpoints.push((u, v));
        self.incidence.entry(u).or_default().push(e);
        if u != v {
            self.incidence.entry(v).or_default().push(e);
        }
        e
    }

    pub fn add_edges<I>(&mut self, it:I) where I: IntoIterator<Item=(Vertex, Vertex)> {
        for (u, v) in it {
            self.add_edge(u, v);
        }
    }

    /// Returns a copy in which every vertex `u` is renamed to `f(u)`. The
    /// function must be injective on the vertex set.
    pub fn relabel<F>(&self, f:F) -> TestGraph where F: Fn(Vertex) -> Vertex {
        let mut res = TestGraph::new(self.orientation);
        res.simple = self.simple;
        res.add_vertices(self.vertices.iter().map(|&u| f(u)));
        res.add_edges(self.endpoints.iter().map(|&(u, v)| (f(u), f(v))));
        res
    }

    /// Returns a copy with every edge flipped.
    pub fn reversed(&self) -> TestGraph {
        let mut res = TestGraph::new(self.orientation);
        res.simple = self.simple;
        res.add_vertices(self.vertices.iter().cloned());
        res.add_edges(self.endpoints.iter().map(|&(u, v)| (v, u)));
        res
    }

    /// Generates a path on `n` vertices.
    pub fn path(n:u32) -> TestGraph {
        let mut res = TestGraph::undirected();
        res.add_vertices(0..n);
        for u in 1..n {
            res.add_edge(u-1, u);
        }

        res
    }

    /// Generates a cycle on `n` vertices.
    pub fn cycle(n:u32) -> TestGraph {
        let mut res = TestGraph::undirected();
        res.add_vertices(0..n);
        for u in 0..n {
            res.add_edge(u, (u+1) % n);
        }

        res
    }

    /// Generates a matching on `2n` vertices.
    pub fn matching(n:u32) -> TestGraph {
        let mut res = TestGraph::undirected();
        for u in 0..n {
            res.add_edge(u, u+n);
        }

        res
    }

    /// Generates a star with `n` leaves, so `n+1` vertices total.
    pub fn star(n:u32) -> TestGraph {
        TestGraph::biclique(1, n)
    }

    /// Generates a complete graph (clique) on `n` vertices.
    pub fn clique(n:u32) -> TestGraph {
        let mut res = TestGraph::undirected();
        res.add_vertices(0..n);
        res.add_edges((0..n).tuple_combinations());

        res
    }

    /// Generates a complete bipartite graph (biclique) on `s`+`t` vertices.
    pub fn biclique(s:u32, t:u32) -> TestGraph {
        let mut res = TestGraph::undirected();
        res.add_vertices(0..(s+t));
        res.add_edges((0..s).cartesian_product(s..(s+t)));

        res
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generators() {
        let G = TestGraph::path(5);
        assert_eq!((G.num_vertices(), G.num_edges()), (5, 4));

        let G = TestGraph::path(1);
        assert_eq!((G.num_vertices(), G.num_edges()), (1, 0));

        let G = TestGraph::cycle(5);
        assert_eq!((G.num_vertices(), G.num_edges()), (5, 5));

        let G = TestGraph::matching(4);
        assert_eq!((G.num_vertices(), G.num_edges()), (8, 4));

        let G = TestGraph::clique(4);
        assert_eq!((G.num_vertices(), G.num_edges()), (4, 6));

        let G = TestGraph::biclique(2, 3);
        assert_eq!((G.num_vertices(), G.num_edges()), (5, 6));

        let G = TestGraph::star(3);
        assert_eq!(G.incident_edges(&0).count(), 3);
    }

    #[test]
    fn multi_edges() {
        let mut G = TestGraph::undirected();
        let a = G.add_edge(0, 1);
        let b = G.add_edge(1, 0);
        let l = G.add_edge(1, 1);

        assert_ne!(a, b);
        assert_eq!(G.num_edges(), 3);
        assert_eq!(G.incident_edges(&0).count(), 2);
        assert_eq!(G.incident_edges(&1).count(), 3);
        assert_eq!(G.endpoints(&l), (&1, &1));
    }

    #[test]
    fn relabel_and_reverse() {
        let G = TestGraph::path(3).with_orientation(Orientation::Directed);
        let H = G.relabel(|u| 10 + u);
        assert!(H.contains(&10) && H.contains(&12));
        assert!(!H.contains(&0));
        assert_eq!(H.endpoints(&0), (&10, &11));

        let R = G.reversed();
        assert_eq!(R.endpoints(&1), (&2, &1));
        assert!(R.is_directed());
    }

    #[test]
    #[should_panic]
    fn missing_vertex() {
        let G = TestGraph::path(2);
        G.incident_edges(&7).count();
    }
}
