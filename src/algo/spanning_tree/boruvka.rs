use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::{
    common::UnionFind,
    core::{weight::GetWeight, GraphRef, Weight},
};

use super::{weighted_edges, SpanningTree};

pub fn boruvka<V, E, G, W, F>(graph: &G, edge_weight: F) -> SpanningTree<W, G>
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

    let mut sets = graph.vertices_by_id().collect::<UnionFind<_>>();
    let mut edges = Vec::new();
    let mut total = W::zero();
    let mut round = 0;

    loop {
        // The cheapest edge leaving each component, keyed by its root.
        let mut cheapest: FxHashMap<G::VertexId, usize> = FxHashMap::default();

        for (i, edge) in candidates.iter().enumerate() {
            let u = sets.find(&edge.from);
            let v = sets.find(&edge.to);

            if u == v {
                continue;
            }

            for root in [u, v] {
                match cheapest.entry(root) {
                    Entry::Vacant(entry) => {
                        entry.insert(i);
                    }
                    // Earlier edge wins a tie.
                    Entry::Occupied(mut entry) => {
                        if keys[i] < keys[*entry.get()] {
                            entry.insert(i);
                        }
                    }
                }
            }
        }

        if cheapest.is_empty() {
            break;
        }

        // Both components joined by an edge may have picked it.
        let mut chosen = cheapest.into_values().collect::<Vec<_>>();
        chosen.sort_unstable();
        chosen.dedup();

        let added = edges.len();
        for i in chosen {
            let edge = &candidates[i];
            if sets.union(&edge.from, &edge.to) {
                total = total + edge.weight.clone();
                edges.push(edge.id.clone());
            }
        }

        tracing::trace!(
            round,
            added = edges.len() - added,
            components = sets.set_count(),
            "boruvka round"
        );
        round += 1;
    }

    tracing::debug!(rounds = round, edges = edges.len(), "boruvka");

    SpanningTree::new(edges, total, graph.vertex_count())
}
