use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    common::VisitSet,
    core::{marker::Direction, EdgeSet, NeighborReference, Neighbors},
};

// Shortest path from the destination of the edge back to its source that
// avoids the edge itself. Together with the edge it closes the cycle.
pub fn bfs_collect<G>(graph: &G, edge: G::EdgeId) -> Vec<G::EdgeId>
where
    G: Neighbors + EdgeSet,
{
    let (u, v) = match graph.endpoints(&edge) {
        Some(endpoints) => endpoints,
        None => return vec![edge],
    };

    let mut visited: FxHashSet<G::VertexId> = FxHashSet::default();
    let mut pred = FxHashMap::default();
    let mut queue = VecDeque::new();

    visited.visit(v.clone());
    queue.push_back(v);

    while let Some(vertex) = queue.pop_front() {
        if vertex == u {
            let mut current = vertex;
            let path = std::iter::from_fn(|| {
                let (w, e) = pred.get(&current).cloned()?;
                current = w;
                Some(e)
            });

            return std::iter::once(edge.clone()).chain(path).collect();
        }

        for n in graph.neighbors_directed(&vertex, Direction::Outgoing) {
            // Ignore the given edge so that another path is found.
            if n.edge() == &edge {
                continue;
            }

            if visited.visit(n.id().clone()) {
                pred.insert(n.id().clone(), (vertex.clone(), n.edge().clone()));
                queue.push_back(n.id().clone());
            }
        }
    }

    // The edge is not on a cycle.
    vec![edge]
}
