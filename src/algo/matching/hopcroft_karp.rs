use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::core::{
    cost::{Cost, Finite, Infinite},
    GraphBase, NeighborReference, Neighbors, VertexSet,
};

use super::Matching;

struct HopcroftKarp<G: GraphBase> {
    // Right neighbors of left vertices, in dense indices.
    adj: Vec<Vec<(usize, G::EdgeId)>>,
    mate: Vec<Option<usize>>,
    // Matched edge of left vertices.
    mate_edge: Vec<Option<G::EdgeId>>,
    // Layer of left vertices in the current phase.
    dist: Vec<Cost<usize>>,
    // Next edge to try from left vertices in the current phase.
    cursor: Vec<usize>,
}

impl<G: GraphBase> HopcroftKarp<G> {
    // Layers the left vertices by the length of the shortest alternating path
    // from a free left vertex. Returns the layer in which a free right vertex
    // was reached, infinite if there is no augmenting path.
    fn layer(&mut self, left: &[usize]) -> Cost<usize> {
        let mut queue = VecDeque::new();

        for &u in left {
            if self.mate[u].is_none() {
                self.dist[u] = Finite(0);
                queue.push_back(u);
            } else {
                self.dist[u] = Infinite;
            }
        }

        let mut limit = Infinite;

        while let Some(u) = queue.pop_front() {
            let dist = self.dist[u];
            if dist > limit {
                break;
            }

            for (v, _) in self.adj[u].iter() {
                match self.mate[*v] {
                    None => limit = limit.min(dist),
                    Some(w) => {
                        if self.dist[w].is_infinite() {
                            self.dist[w] = dist + 1;
                            queue.push_back(w);
                        }
                    }
                }
            }
        }

        limit
    }

    // Searches for a shortest augmenting path from a free left vertex along
    // the layers and flips it.
    fn augment(&mut self, root: usize, limit: Cost<usize>) -> bool {
        let mut stack = vec![root];
        // The edge taken from the left vertex at the same stack position.
        let mut via: Vec<(usize, G::EdgeId)> = Vec::new();

        while let Some(&u) = stack.last() {
            let Some((v, edge)) = self.adj[u].get(self.cursor[u]).cloned() else {
                // Dead end for the rest of the phase.
                self.dist[u] = Infinite;
                stack.pop();
                via.pop();
                continue;
            };

            self.cursor[u] += 1;

            match self.mate[v] {
                None if self.dist[u] == limit => {
                    via.push((v, edge));

                    for (&left, (right, edge)) in stack.iter().zip(via) {
                        self.mate[left] = Some(right);
                        self.mate[right] = Some(left);
                        self.mate_edge[left] = Some(edge);
                    }

                    return true;
                }
                Some(w) if self.dist[w].is_finite() && self.dist[w] == self.dist[u] + 1 => {
                    via.push((v, edge));
                    stack.push(w);
                }
                _ => {}
            }
        }

        false
    }
}

pub fn hopcroft_karp<G>(graph: &G, left: &[G::VertexId]) -> Matching<G>
where
    G: Neighbors + VertexSet,
{
    let vertices = graph.vertices_by_id().collect::<Vec<_>>();
    let index = vertices
        .iter()
        .enumerate()
        .map(|(i, v)| (v.clone(), i))
        .collect::<FxHashMap<_, _>>();

    let mut is_left = vec![false; vertices.len()];
    let mut left_indices = Vec::new();

    for vertex in left {
        // Unknown vertices and duplicates are ignored.
        if let Some(&i) = index.get(vertex) {
            if !is_left[i] {
                is_left[i] = true;
                left_indices.push(i);
            }
        }
    }

    let mut adj = vec![Vec::new(); vertices.len()];
    for &u in left_indices.iter() {
        adj[u] = graph
            .neighbors_undirected(&vertices[u])
            .filter_map(|n| {
                let v = *index.get(n.id())?;
                (!is_left[v]).then(|| (v, n.edge().clone()))
            })
            .collect();
    }

    let mut state = HopcroftKarp::<G> {
        adj,
        mate: vec![None; vertices.len()],
        mate_edge: vec![None; vertices.len()],
        dist: vec![Infinite; vertices.len()],
        cursor: vec![0; vertices.len()],
    };

    let mut phase = 0;
    loop {
        let limit = state.layer(&left_indices);
        if limit.is_infinite() {
            break;
        }

        state.cursor.fill(0);

        let mut augmented = 0;
        for &u in left_indices.iter() {
            if state.mate[u].is_none()
                && state.dist[u].is_finite()
                && state.augment(u, limit)
            {
                augmented += 1;
            }
        }

        tracing::trace!(phase, ?limit, augmented, "hopcroft-karp phase");
        phase += 1;

        if augmented == 0 {
            break;
        }
    }

    let pairs = left_indices
        .iter()
        .filter_map(|&u| {
            let v = state.mate[u]?;
            let edge = state.mate_edge[u].clone()?;
            Some((vertices[u].clone(), vertices[v].clone(), edge))
        })
        .collect::<Vec<_>>();

    tracing::debug!(phases = phase, matched = pairs.len(), "hopcroft-karp");

    Matching::new(pairs)
}
