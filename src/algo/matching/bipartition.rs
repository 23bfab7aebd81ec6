use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::core::{NeighborReference, Neighbors, VertexSet};

use super::Error;

// Two-colors every component by breadth-first search and returns the vertices
// of the color given to the component roots.
pub fn bipartition<G>(graph: &G) -> Result<Vec<G::VertexId>, Error>
where
    G: Neighbors + VertexSet,
{
    let mut color: FxHashMap<G::VertexId, bool> = FxHashMap::default();
    let mut left = Vec::new();
    let mut queue = VecDeque::new();

    for root in graph.vertices_by_id() {
        if color.contains_key(&root) {
            continue;
        }

        color.insert(root.clone(), true);
        queue.push_back(root);

        while let Some(vertex) = queue.pop_front() {
            let side = color[&vertex];

            for n in graph.neighbors_undirected(&vertex) {
                match color.get(n.id()) {
                    Some(&other) if other == side => {
                        tracing::debug!(vertex = ?vertex, neighbor = ?n.id(), "odd cycle");
                        return Err(Error::NotBipartite);
                    }
                    Some(_) => {}
                    None => {
                        color.insert(n.id().clone(), !side);
                        queue.push_back(n.id().clone());
                    }
                }
            }

            if side {
                left.push(vertex);
            }
        }
    }

    Ok(left)
}
