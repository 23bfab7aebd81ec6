use crate::{
    common::UnionFind,
    core::{EdgeSet, VertexSet},
};

use super::Cycle;

pub fn union_find_find<G>(graph: &G) -> Option<Cycle<G>>
where
    G: VertexSet + EdgeSet,
{
    let mut sets = UnionFind::with_capacity(graph.vertex_count_hint().unwrap_or_default());

    for edge in graph.edges_by_id() {
        // Stale edges are skipped.
        let Some((u, v)) = graph.endpoints(&edge) else {
            continue;
        };

        if !sets.union(&u, &v) {
            tracing::debug!(?edge, "union-find cycle search found a cycle");
            return Some(Cycle::new(edge));
        }
    }

    tracing::debug!(sets = sets.set_count(), "union-find cycle search found no cycle");
    None
}
