use std::{collections::VecDeque, ops::Sub};

use fixedbitset::FixedBitSet;
use rustc_hash::FxHashMap;

use crate::core::{
    cost::{Cost, Finite, Infinite},
    weight::GetWeight,
    EdgeReference, GraphRef, Weight,
};

use super::{Error, MaxFlow, MinCut};

// Arcs are stored in pairs, an arc at an even index is paired with the arc
// that follows it.
struct ResidualArc<W, EI> {
    to: usize,
    capacity: W,
    residual: W,
    edge: EI,
}

struct Dinic<W, EI> {
    arcs: Vec<ResidualArc<W, EI>>,
    // Arc indices leaving each vertex.
    adj: Vec<Vec<usize>>,
    level: Vec<Cost<usize>>,
    // Next arc to try from each vertex in the current round.
    cursor: Vec<usize>,
}

impl<W, EI> Dinic<W, EI>
where
    W: Weight + Sub<W, Output = W>,
{
    fn add_arc_pair(&mut self, from: usize, to: usize, forward: W, backward: W, edge: EI)
    where
        EI: Clone,
    {
        let index = self.arcs.len();

        self.arcs.push(ResidualArc {
            to,
            capacity: forward.clone(),
            residual: forward,
            edge: edge.clone(),
        });
        self.arcs.push(ResidualArc {
            to: from,
            capacity: backward.clone(),
            residual: backward,
            edge,
        });

        self.adj[from].push(index);
        self.adj[to].push(index + 1);
    }

    fn is_open(&self, arc: usize) -> bool {
        self.arcs[arc].residual > W::zero()
    }

    // Source of an arc is the destination of its pair.
    fn source(&self, arc: usize) -> usize {
        self.arcs[arc ^ 1].to
    }

    // Layers the residual graph from the source. Returns whether the sink is
    // reachable.
    fn layer(&mut self, source: usize, sink: usize) -> bool {
        self.level.fill(Infinite);
        self.level[source] = Finite(0);

        let mut queue = VecDeque::from([source]);

        while let Some(u) = queue.pop_front() {
            let next = self.level[u] + 1;

            for &arc in self.adj[u].iter() {
                let v = self.arcs[arc].to;
                if self.level[v].is_infinite() && self.is_open(arc) {
                    self.level[v] = next;
                    queue.push_back(v);
                }
            }
        }

        self.level[sink].is_finite()
    }

    // Finds a path from the source to the sink in the layered graph and sends
    // its bottleneck capacity along it.
    fn augment(&mut self, source: usize, sink: usize) -> Option<W> {
        let mut path: Vec<usize> = Vec::new();
        let mut u = source;

        loop {
            if u == sink {
                let bottleneck = path
                    .iter()
                    .map(|&arc| Cost::Finite(self.arcs[arc].residual.clone()))
                    .fold(Infinite, Cost::min);

                // The path is never empty, because the source is not the sink.
                let Finite(amount) = bottleneck else {
                    return None;
                };

                for &arc in path.iter() {
                    let forward = &mut self.arcs[arc];
                    forward.residual = forward.residual.clone() - amount.clone();

                    let backward = &mut self.arcs[arc ^ 1];
                    backward.residual = backward.residual.clone() + amount.clone();
                }

                return Some(amount);
            }

            let next = self.level[u] + 1;
            let admissible = loop {
                let Some(&arc) = self.adj[u].get(self.cursor[u]) else {
                    break None;
                };

                if self.is_open(arc) && self.level[self.arcs[arc].to] == next {
                    break Some(arc);
                }

                self.cursor[u] += 1;
            };

            match admissible {
                Some(arc) => {
                    path.push(arc);
                    u = self.arcs[arc].to;
                }
                None => {
                    // Dead end for the rest of the round.
                    self.level[u] = Infinite;

                    let arc = path.pop()?;
                    u = self.source(arc);
                    self.cursor[u] += 1;
                }
            }
        }
    }

    fn reachable(&self, source: usize) -> FixedBitSet {
        let mut visited = FixedBitSet::with_capacity(self.adj.len());
        let mut stack = vec![source];
        visited.insert(source);

        while let Some(u) = stack.pop() {
            for &arc in self.adj[u].iter() {
                let v = self.arcs[arc].to;
                if !visited.contains(v) && self.is_open(arc) {
                    visited.insert(v);
                    stack.push(v);
                }
            }
        }

        visited
    }
}

fn flow_through<W: Weight + Sub<W, Output = W>>(capacity: &W, residual: &W) -> W {
    if residual <= capacity {
        capacity.clone() - residual.clone()
    } else {
        residual.clone() - capacity.clone()
    }
}

pub fn dinic<V, E, G, W, F>(
    graph: &G,
    source: &G::VertexId,
    sink: &G::VertexId,
    edge_capacity: F,
) -> Result<MaxFlow<W, G>, Error>
where
    G: GraphRef<V, E>,
    F: GetWeight<E, W>,
    W: Weight + Sub<W, Output = W>,
{
    if source == sink {
        return Err(Error::SourceIsSink);
    }

    let vertices = graph.vertices_by_id().collect::<Vec<_>>();
    let index = vertices
        .iter()
        .enumerate()
        .map(|(i, v)| (v.clone(), i))
        .collect::<FxHashMap<_, _>>();

    let (Some(&s), Some(&t)) = (index.get(source), index.get(sink)) else {
        return Err(Error::VertexAbsent);
    };

    let mut state = Dinic {
        arcs: Vec::new(),
        adj: vec![Vec::new(); vertices.len()],
        level: vec![Infinite; vertices.len()],
        cursor: vec![0; vertices.len()],
    };

    for edge in graph.edges() {
        let capacity = edge_capacity.get(edge.attr());
        if !W::is_unsigned() && capacity < W::zero() {
            return Err(Error::NegativeCapacity);
        }

        let (Some(&u), Some(&v)) = (index.get(edge.from()), index.get(edge.to())) else {
            continue;
        };

        // Loops never carry flow.
        if u == v {
            continue;
        }

        let backward = if graph.is_directed() {
            W::zero()
        } else {
            capacity.clone()
        };

        state.add_arc_pair(u, v, capacity, backward, edge.id().clone());
    }

    let mut value = W::zero();
    let mut round = 0;

    while state.layer(s, t) {
        state.cursor.fill(0);

        let mut sent = W::zero();
        while let Some(amount) = state.augment(s, t) {
            sent = sent + amount;
        }

        tracing::trace!(round, sink_level = ?state.level[t], "dinic blocking flow");

        value = value + sent;
        round += 1;
    }

    let source_side = state.reachable(s);

    let mut flow = FxHashMap::default();
    let mut cut_edges = Vec::new();
    let mut cut_value = W::zero();

    for pair in state.arcs.chunks_exact(2) {
        let forward = &pair[0];
        let amount = flow_through(&forward.capacity, &forward.residual);
        if amount > W::zero() {
            flow.insert(forward.edge.clone(), amount);
        }

        // Arcs against the edge direction are not edges of the graph.
        let candidates = if graph.is_directed() { 1 } else { 2 };

        for k in 0..candidates {
            let (arc, from) = (&pair[k], pair[1 - k].to);
            if source_side.contains(from) && !source_side.contains(arc.to) {
                cut_edges.push(arc.edge.clone());
                cut_value = cut_value + arc.capacity.clone();
            }
        }
    }

    tracing::debug!(rounds = round, edges = state.arcs.len() / 2, "dinic");

    let min_cut = MinCut {
        value: cut_value,
        edges: cut_edges,
        source_side: source_side.ones().map(|i| vertices[i].clone()).collect(),
    };

    Ok(MaxFlow {
        value,
        flow,
        min_cut,
    })
}
