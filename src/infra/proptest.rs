use std::marker::PhantomData;

use proptest::{
    prelude::{any, Rng},
    strategy::{BoxedStrategy, NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::{
    core::{
        id::VertexId,
        marker::{Directed, EdgeType, Undirected},
        GraphAdd,
    },
    storage::AdjList,
};

pub fn graph_undirected<V: Strategy, E: Strategy>(
    vertex: V,
    edge: E,
) -> GraphStrategy<V, E, Undirected> {
    GraphStrategy::new(vertex, edge)
}

pub fn graph_directed<V: Strategy, E: Strategy>(
    vertex: V,
    edge: E,
) -> GraphStrategy<V, E, Directed> {
    GraphStrategy::new(vertex, edge)
}

/// Undirected bipartite graph with at most `max_side` vertices on each side,
/// together with the vertices of the left side.
pub fn graph_bipartite(
    max_side: usize,
) -> BoxedStrategy<(AdjList<(), (), Undirected>, Vec<VertexId>)> {
    (0..=max_side, 0..=max_side)
        .prop_flat_map(|(left, right)| {
            (
                proptest::strategy::Just(left),
                proptest::strategy::Just(right),
                proptest::collection::vec(any::<bool>(), left * right),
            )
        })
        .prop_map(|(left, right, adjacent)| {
            let mut graph = AdjList::<(), (), Undirected>::with_capacity(left + right, adjacent.len());

            let lhs = (0..left).map(|_| graph.add_vertex(())).collect::<Vec<_>>();
            let rhs = (0..right).map(|_| graph.add_vertex(())).collect::<Vec<_>>();

            for (i, u) in lhs.iter().enumerate() {
                for (j, v) in rhs.iter().enumerate() {
                    if adjacent[i * right + j] {
                        graph.add_edge(u, v, ());
                    }
                }
            }

            (graph, lhs)
        })
        .boxed()
}

/// Random graph in the Erdős–Rényi model, where each pair of vertices is
/// connected with the same probability chosen randomly for every graph.
#[derive(Debug)]
pub struct GraphStrategy<V: Strategy, E: Strategy, Ty: EdgeType> {
    vertex: V,
    edge: E,
    params: StrategyParams,
    ty: PhantomData<Ty>,
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    allow_loops: bool,
    multi_edge_prob: f64,
    // In (0, 1], scales the randomly chosen edge probability down.
    density: f64,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 64,
            allow_loops: false,
            multi_edge_prob: 0.0,
            density: 1.0,
        }
    }
}

impl<V: Strategy, E: Strategy, Ty: EdgeType> GraphStrategy<V, E, Ty> {
    pub fn new(vertex: V, edge: E) -> Self {
        Self {
            vertex,
            edge,
            params: StrategyParams::default(),
            ty: PhantomData,
        }
    }

    /// Maximum number of vertices.
    pub fn max_size(self, max_size: usize) -> Self {
        Self {
            params: StrategyParams {
                max_size,
                ..self.params
            },
            ..self
        }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            params: StrategyParams {
                allow_loops: true,
                ..self.params
            },
            ..self
        }
    }

    /// Probability of adding another edge parallel to an existing one.
    pub fn multi_edge_prob(self, multi_edge_prob: f64) -> Self {
        assert!(
            (0.0..=0.5).contains(&multi_edge_prob),
            "multi edge probability must be in [0, 0.5] range"
        );

        Self {
            params: StrategyParams {
                multi_edge_prob,
                ..self.params
            },
            ..self
        }
    }

    pub fn density(self, density: f64) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );

        Self {
            params: StrategyParams {
                density,
                ..self.params
            },
            ..self
        }
    }

    pub fn sparse(self) -> Self {
        self.density(0.05)
    }
}

impl<V: Strategy, E: Strategy, Ty: EdgeType> Strategy for GraphStrategy<V, E, Ty> {
    type Tree = GraphValueTree<V::Tree, E::Tree, Ty>;
    type Value = AdjList<V::Value, E::Value, Ty>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let n = runner.rng().gen_range(0..=self.params.max_size);
        let p = runner.rng().gen::<f64>() * self.params.density;

        let mut vertices = Vec::with_capacity(n);
        while vertices.len() < n {
            vertices.push(self.vertex.new_tree(runner)?);
        }

        let mut edges = Vec::new();

        for v in 0..n {
            let bound = if self.params.allow_loops { v + 1 } else { v };

            for w in 0..bound {
                if !runner.rng().gen_bool(p) {
                    continue;
                }

                // Random orientation so that directed cycles are possible.
                let (src, dst) = if runner.rng().gen_bool(0.5) {
                    (v, w)
                } else {
                    (w, v)
                };

                edges.push((src, dst, self.edge.new_tree(runner)?));

                while runner.rng().gen_bool(self.params.multi_edge_prob) {
                    edges.push((src, dst, self.edge.new_tree(runner)?));
                }
            }
        }

        Ok(GraphValueTree {
            vertices,
            edges,
            removed_vertices: FxHashSet::default(),
            removed_edges: FxHashSet::default(),
            shrink: Shrink::Vertex(0),
            last: None,
            ty: PhantomData,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shrink {
    Vertex(usize),
    Edge(usize),
    VertexAttr(usize),
    EdgeAttr(usize),
    Done,
}

/// Shrinks a graph by removing vertices one by one, then edges one by one, and
/// finally by simplifying the attributes.
pub struct GraphValueTree<V: ValueTree, E: ValueTree, Ty> {
    vertices: Vec<V>,
    edges: Vec<(usize, usize, E)>,
    removed_vertices: FxHashSet<usize>,
    removed_edges: FxHashSet<usize>,
    shrink: Shrink,
    // Last successful simplification, to be reverted by `complicate`.
    last: Option<Shrink>,
    ty: PhantomData<Ty>,
}

impl<V: ValueTree, E: ValueTree, Ty> GraphValueTree<V, E, Ty> {
    fn edge_exists(&self, e: usize) -> bool {
        let (src, dst, _) = &self.edges[e];
        !self.removed_edges.contains(&e)
            && !self.removed_vertices.contains(src)
            && !self.removed_vertices.contains(dst)
    }
}

impl<V: ValueTree, E: ValueTree, Ty: EdgeType> ValueTree for GraphValueTree<V, E, Ty> {
    type Value = AdjList<V::Value, E::Value, Ty>;

    fn current(&self) -> Self::Value {
        let mut graph =
            AdjList::<V::Value, E::Value, Ty>::with_capacity(self.vertices.len(), self.edges.len());

        let ids = self
            .vertices
            .iter()
            .enumerate()
            .map(|(v, vertex)| {
                (!self.removed_vertices.contains(&v)).then(|| graph.add_vertex(vertex.current()))
            })
            .collect::<Vec<_>>();

        for (e, (src, dst, edge)) in self.edges.iter().enumerate() {
            if self.removed_edges.contains(&e) {
                continue;
            }

            if let (Some(src), Some(dst)) = (&ids[*src], &ids[*dst]) {
                graph.add_edge(src, dst, edge.current());
            }
        }

        graph
    }

    fn simplify(&mut self) -> bool {
        loop {
            match self.shrink {
                Shrink::Vertex(v) if v >= self.vertices.len() => self.shrink = Shrink::Edge(0),
                Shrink::Vertex(v) => {
                    self.shrink = Shrink::Vertex(v + 1);
                    if self.removed_vertices.insert(v) {
                        self.last = Some(Shrink::Vertex(v));
                        return true;
                    }
                }
                Shrink::Edge(e) if e >= self.edges.len() => self.shrink = Shrink::VertexAttr(0),
                Shrink::Edge(e) => {
                    self.shrink = Shrink::Edge(e + 1);
                    if self.edge_exists(e) {
                        self.removed_edges.insert(e);
                        self.last = Some(Shrink::Edge(e));
                        return true;
                    }
                }
                Shrink::VertexAttr(v) if v >= self.vertices.len() => {
                    self.shrink = Shrink::EdgeAttr(0)
                }
                Shrink::VertexAttr(v) => {
                    if !self.removed_vertices.contains(&v) && self.vertices[v].simplify() {
                        self.last = Some(Shrink::VertexAttr(v));
                        return true;
                    }
                    self.shrink = Shrink::VertexAttr(v + 1);
                }
                Shrink::EdgeAttr(e) if e >= self.edges.len() => self.shrink = Shrink::Done,
                Shrink::EdgeAttr(e) => {
                    if self.edge_exists(e) && self.edges[e].2.simplify() {
                        self.last = Some(Shrink::EdgeAttr(e));
                        return true;
                    }
                    self.shrink = Shrink::EdgeAttr(e + 1);
                }
                Shrink::Done => return false,
            }
        }
    }

    fn complicate(&mut self) -> bool {
        match self.last.take() {
            None | Some(Shrink::Done) => false,
            // The element is needed for the failure, keep it.
            Some(Shrink::Vertex(v)) => self.removed_vertices.remove(&v),
            Some(Shrink::Edge(e)) => self.removed_edges.remove(&e),
            Some(Shrink::VertexAttr(v)) => {
                if self.vertices[v].complicate() {
                    self.last = Some(Shrink::VertexAttr(v));
                    true
                } else {
                    self.shrink = Shrink::VertexAttr(v + 1);
                    false
                }
            }
            Some(Shrink::EdgeAttr(e)) => {
                if self.edges[e].2.complicate() {
                    self.last = Some(Shrink::EdgeAttr(e));
                    true
                } else {
                    self.shrink = Shrink::EdgeAttr(e + 1);
                    false
                }
            }
        }
    }
}
