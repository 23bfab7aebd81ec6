use std::{cmp::Reverse, collections::BinaryHeap};

use rustc_hash::FxHashSet;

use crate::{
    common::VisitSet,
    core::{weight::GetWeight, GraphRef, NeighborReference, Neighbors, Weight},
};

use super::SpanningTree;

// (weight, sequence number, destination, edge)
type Frontier<W, VI, EI> = BinaryHeap<Reverse<(W, usize, VI, EI)>>;

pub fn prim<V, E, G, W, F>(
    graph: &G,
    start: Option<&G::VertexId>,
    edge_weight: F,
) -> SpanningTree<W, G>
where
    G: GraphRef<V, E> + Neighbors,
    F: GetWeight<E, W>,
    W: Weight,
{
    let roots = match start {
        Some(start) => vec![start.clone()],
        None => graph.vertices_by_id().collect(),
    };

    let mut visited: FxHashSet<G::VertexId> = FxHashSet::default();
    let mut frontier: Frontier<W::Ord, G::VertexId, G::EdgeId> = BinaryHeap::new();
    let mut seq = 0;

    let mut edges = Vec::new();
    let mut total = W::zero();

    let mut expand = |vertex: &G::VertexId,
                      visited: &FxHashSet<G::VertexId>,
                      frontier: &mut Frontier<W::Ord, G::VertexId, G::EdgeId>| {
        for n in graph.neighbors_undirected(vertex) {
            if visited.is_visited(n.id()) {
                continue;
            }

            let Some(attr) = graph.edge(n.edge()) else {
                continue;
            };

            let weight = W::Ord::from(edge_weight.get(attr));
            frontier.push(Reverse((weight, seq, n.id().clone(), n.edge().clone())));
            seq += 1;
        }
    };

    for root in roots {
        if !visited.visit(root.clone()) {
            continue;
        }

        expand(&root, &visited, &mut frontier);

        while let Some(Reverse((weight, _, to, edge))) = frontier.pop() {
            if !visited.visit(to.clone()) {
                continue;
            }

            let weight: W = weight.into();
            total = total + weight;
            edges.push(edge);

            expand(&to, &visited, &mut frontier);
        }
    }

    tracing::debug!(edges = edges.len(), pushed = seq, "prim");

    SpanningTree::new(edges, total, graph.vertex_count())
}
