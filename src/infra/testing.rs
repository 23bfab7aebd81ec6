use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    common::UnionFind,
    core::{
        marker::Direction, EdgeReference, EdgeSet, GraphAdd, GraphRef, NeighborReference,
        Neighbors, VertexSet,
    },
};

pub fn create_complete<V, E, G>(vertex_count: usize) -> G
where
    V: Default,
    E: Default,
    G: GraphAdd<V, E> + Default,
{
    let mut graph = G::default();

    let vertices = (0..vertex_count)
        .map(|_| graph.add_vertex(V::default()))
        .collect::<Vec<_>>();

    for (i, u) in vertices.iter().enumerate() {
        for (j, v) in vertices.iter().enumerate() {
            if i == j || (!graph.is_directed() && j < i) {
                continue;
            }

            graph.add_edge(u, v, E::default());
        }
    }

    graph
}

pub fn create_path<V, E, G>(vertex_count: usize) -> G
where
    V: Default,
    E: Default,
    G: GraphAdd<V, E> + Default,
{
    let mut graph = G::default();

    let vertices = (0..vertex_count)
        .map(|_| graph.add_vertex(V::default()))
        .collect::<Vec<_>>();

    for pair in vertices.windows(2) {
        graph.add_edge(&pair[0], &pair[1], E::default());
    }

    graph
}

/// Vertices reachable from the start by following edges in their direction.
pub fn reachable<G>(graph: &G, start: &G::VertexId) -> FxHashSet<G::VertexId>
where
    G: Neighbors,
{
    let mut visited = FxHashSet::default();
    let mut stack = vec![start.clone()];
    visited.insert(start.clone());

    while let Some(vertex) = stack.pop() {
        for n in graph.neighbors_directed(&vertex, Direction::Outgoing) {
            if visited.insert(n.id().clone()) {
                stack.push(n.id().clone());
            }
        }
    }

    visited
}

// Number of connected components ignoring edge direction, the given vertex and
// the given edge.
fn components_without<G>(
    graph: &G,
    vertex: Option<&G::VertexId>,
    edge: Option<&G::EdgeId>,
) -> usize
where
    G: Neighbors + VertexSet,
{
    let mut visited = FxHashSet::default();
    let mut count = 0;

    for root in graph.vertices_by_id() {
        if Some(&root) == vertex || !visited.insert(root.clone()) {
            continue;
        }

        count += 1;
        let mut stack = vec![root];

        while let Some(u) = stack.pop() {
            for n in graph.neighbors_undirected(&u) {
                if Some(n.edge()) == edge || Some(n.id()) == vertex {
                    continue;
                }

                if visited.insert(n.id().clone()) {
                    stack.push(n.id().clone());
                }
            }
        }
    }

    count
}

/// Vertices whose removal increases the number of connected components.
pub fn brute_force_cut_vertices<G>(graph: &G) -> Vec<G::VertexId>
where
    G: Neighbors + VertexSet,
{
    let components = components_without(graph, None, None);

    graph
        .vertices_by_id()
        .filter(|v| components_without(graph, Some(v), None) > components)
        .collect()
}

/// Edges whose removal increases the number of connected components.
pub fn brute_force_bridges<G>(graph: &G) -> Vec<G::EdgeId>
where
    G: Neighbors + VertexSet + EdgeSet,
{
    let components = components_without(graph, None, None);

    graph
        .edges_by_id()
        .filter(|e| components_without(graph, None, Some(e)) > components)
        .collect()
}

/// Size of a maximum matching between the left vertices and the rest,
/// computed by trying all assignments.
pub fn brute_force_matching_size<G>(graph: &G, left: &[G::VertexId]) -> usize
where
    G: Neighbors + VertexSet,
{
    let left_set = left.iter().cloned().collect::<BTreeSet<_>>();
    let right = graph
        .vertices_by_id()
        .filter(|v| !left_set.contains(v))
        .enumerate()
        .map(|(i, v)| (v, i))
        .collect::<FxHashMap<_, _>>();

    assert!(right.len() <= 64, "too many vertices for brute force");

    // Bit masks of right neighbors of each left vertex.
    let masks = left_set
        .iter()
        .map(|u| {
            graph
                .neighbors_undirected(u)
                .filter_map(|n| right.get(n.id()))
                .fold(0u64, |mask, &i| mask | (1 << i))
        })
        .collect::<Vec<_>>();

    fn best(masks: &[u64], used: u64, memo: &mut FxHashMap<(usize, u64), usize>) -> usize {
        let Some((first, rest)) = masks.split_first() else {
            return 0;
        };

        if let Some(&size) = memo.get(&(masks.len(), used)) {
            return size;
        }

        let mut size = best(rest, used, memo);
        let mut candidates = first & !used;

        while candidates != 0 {
            let bit = candidates & candidates.wrapping_neg();
            size = size.max(1 + best(rest, used | bit, memo));
            candidates &= !bit;
        }

        memo.insert((masks.len(), used), size);
        size
    }

    best(&masks, 0, &mut FxHashMap::default())
}

/// Capacity of a minimum cut between the source and the sink, computed by
/// trying all partitions of the other vertices.
pub fn brute_force_min_cut<V, G>(graph: &G, source: &G::VertexId, sink: &G::VertexId) -> u64
where
    G: GraphRef<V, u32>,
{
    let others = graph
        .vertices_by_id()
        .filter(|v| v != source && v != sink)
        .collect::<Vec<_>>();

    assert!(others.len() <= 16, "too many vertices for brute force");

    (0u32..(1 << others.len()))
        .map(|subset| {
            let mut side = FxHashSet::default();
            side.insert(source.clone());
            side.extend(
                others
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| subset & (1 << i) != 0)
                    .map(|(_, v)| v.clone()),
            );

            graph
                .edges()
                .filter(|edge| {
                    let forward = side.contains(edge.from()) && !side.contains(edge.to());
                    let backward = side.contains(edge.to()) && !side.contains(edge.from());
                    forward || (!graph.is_directed() && backward)
                })
                .map(|edge| u64::from(*edge.attr()))
                .sum::<u64>()
        })
        .min()
        .unwrap_or_default()
}

/// Total weight of a minimum spanning forest, adding edges in the order of
/// weight unless they close a cycle.
pub fn reference_spanning_weight<V, G>(graph: &G) -> u32
where
    G: GraphRef<V, u32>,
{
    let mut edges = graph
        .edges()
        .map(|edge| (*edge.attr(), edge.from().clone(), edge.to().clone()))
        .collect::<Vec<_>>();
    edges.sort_by_key(|(weight, _, _)| *weight);

    let mut sets = UnionFind::new();
    edges
        .into_iter()
        .filter(|(_, u, v)| sets.union(u, v))
        .map(|(weight, _, _)| weight)
        .sum()
}

/// Random graph with the given number of vertices and edges, edge attributes
/// are weights in `0..100`. Loops and parallel edges are possible.
#[cfg(test)]
pub fn random_graph<Ty: crate::core::marker::EdgeType>(
    seed: u64,
    vertex_count: usize,
    edge_count: usize,
) -> crate::storage::AdjList<(), u32, Ty> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut graph = crate::storage::AdjList::with_capacity(vertex_count, edge_count);

    let vertices = (0..vertex_count)
        .map(|_| graph.add_vertex(()))
        .collect::<Vec<_>>();

    if vertex_count > 0 {
        for _ in 0..edge_count {
            let u = &vertices[rng.usize(..vertex_count)];
            let v = &vertices[rng.usize(..vertex_count)];
            graph.add_edge(u, v, rng.u32(..100));
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use crate::{
        core::marker::{Directed, Undirected},
        storage::AdjList,
    };

    use super::*;

    #[test]
    fn complete_graph_edge_count() {
        let graph: AdjList<(), (), Undirected> = create_complete(5);
        assert_eq!(graph.edge_count(), 10);

        let graph: AdjList<(), (), Directed> = create_complete(5);
        assert_eq!(graph.edge_count(), 20);
    }

    #[test]
    fn path_bridges() {
        let graph: AdjList<(), (), Undirected> = create_path(4);

        assert_eq!(brute_force_bridges(&graph).len(), 3);
        assert_eq!(brute_force_cut_vertices(&graph).len(), 2);
    }

    #[test]
    fn random_graph_is_deterministic() {
        let lhs = random_graph::<Directed>(7, 10, 30);
        let rhs = random_graph::<Directed>(7, 10, 30);

        let lhs = lhs.edges().map(|e| (e.from, e.to, *e.attr)).collect::<Vec<_>>();
        let rhs = rhs.edges().map(|e| (e.from, e.to, *e.attr)).collect::<Vec<_>>();
        assert_eq!(lhs, rhs);
    }
}
