use std::collections::VecDeque;

use crate::graph::*;

/// Per-vertex state of the two-colouring search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Colour {
    Unvisited,
    Even,
    Odd,
}

impl Colour {
    /// The colour a neighbour must receive. Only coloured vertices have one.
    pub(crate) fn flipped(self) -> Colour {
        match self {
            Colour::Even => Colour::Odd,
            Colour::Odd => Colour::Even,
            Colour::Unvisited => unreachable!("Unvisited vertices have no parity"),
        }
    }
}

/// Computes a proper two-colouring of `graph` by breadth-first search, ignoring
/// edge directions.
///
/// Every component is searched from its own seed, which is coloured [Colour::Even].
/// A vertex receives its colour when it is put on the frontier, so it is queued at most
/// once. If an edge joins two vertices of the same colour (an odd cycle, or a loop) the
/// search stops and returns the endpoints of that edge.
pub(crate) fn two_colouring<G>(graph:&G) -> Result<VertexMap<'_, G::Vertex, Colour>, (&G::Vertex, &G::Vertex)>
        where G: Graph {
    let mut colours:VertexMap<_, _> = graph.vertices().map(|v| (v, Colour::Unvisited)).collect();
    let mut frontier:VecDeque<&G::Vertex> = VecDeque::new();

    for seed in graph.vertices() {
        if colours[seed] != Colour::Unvisited {
            continue;
        }

        // New component
        colours.insert(seed, Colour::Even);
        frontier.push_back(seed);

        while let Some(v) = frontier.pop_front() {
            let cv = colours[v];
            for e in graph.incident_edges(v) {
                let u = graph.opposite(e, v);
                debug_assert!(graph.contains(u), "Edge endpoint not contained in the graph");
                let cu = colours[u];
                if cu == Colour::Unvisited {
                    colours.insert(u, cv.flipped());
                    frontier.push_back(u);
                } else if cu == cv {
                    return Err((v, u))
                }
            }
        }
    }

    debug_assert!(colours.values().all(|c| *c != Colour::Unvisited));
    Ok(colours)
}
