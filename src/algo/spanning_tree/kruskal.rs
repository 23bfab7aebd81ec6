use crate::{
    common::UnionFind,
    core::{weight::GetWeight, GraphRef, Weight},
};

use super::{weighted_edges, SpanningTree};

pub fn kruskal<V, E, G, W, F>(graph: &G, edge_weight: F) -> SpanningTree<W, G>
where
    G: GraphRef<V, E>,
    F: GetWeight<E, W>,
    W: Weight,
{
    let candidates = weighted_edges(graph, &edge_weight);
    let keys = candidates
        .iter()
        .map(|edge| W::Ord::from(edge.weight.clone()))
        .collect::<Vec<_>>();

    // Stable sort keeps ties in the order of encounter.
    let mut order = (0..candidates.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| keys[a].cmp(&keys[b]));

    let vertex_count = graph.vertex_count();
    let mut sets = graph.vertices_by_id().collect::<UnionFind<_>>();
    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut total = W::zero();

    for i in order {
        if edges.len() + 1 >= vertex_count {
            break;
        }

        let edge = &candidates[i];
        if sets.union(&edge.from, &edge.to) {
            total = total + edge.weight.clone();
            edges.push(edge.id.clone());
        }
    }

    tracing::debug!(edges = edges.len(), candidates = candidates.len(), "kruskal");

    SpanningTree::new(edges, total, vertex_count)
}
