use std::marker::PhantomData;

use crate::core::{
    weight::{GetWeight, Identity},
    GraphBase, GraphRef, Neighbors, Weight,
};

use super::{boruvka::boruvka, kruskal::kruskal, prim::prim, Algo, SpanningTree};

/// Builder for [`SpanningTree`].
pub struct SpanningTreeBuilder<'a, W, G, F>
where
    G: GraphBase,
{
    graph: &'a G,
    start: Option<&'a G::VertexId>,
    edge_weight: F,
    algo: Algo,
    ty: PhantomData<fn() -> W>,
}

impl<W, G> SpanningTree<W, G>
where
    G: GraphBase,
{
    /// Starts the configuration of the algorithm on the graph. Edge attributes
    /// are the weights unless specified otherwise.
    pub fn on(graph: &G) -> SpanningTreeBuilder<'_, W, G, Identity> {
        SpanningTreeBuilder {
            graph,
            start: None,
            edge_weight: Identity,
            algo: Algo::default(),
            ty: PhantomData,
        }
    }
}

impl<'a, W, G, F> SpanningTreeBuilder<'a, W, G, F>
where
    G: GraphBase,
{
    /// Extracts the weight from the edge attribute.
    pub fn edge_weight<F2, V, E>(self, edge_weight: F2) -> SpanningTreeBuilder<'a, W, G, F2>
    where
        G: GraphRef<V, E>,
        F2: GetWeight<E, W>,
        W: Weight,
    {
        SpanningTreeBuilder {
            graph: self.graph,
            start: self.start,
            edge_weight,
            algo: self.algo,
            ty: PhantomData,
        }
    }

    /// Computes the weight from the edge attribute by a closure.
    pub fn edge_weight_fn<F2, V, E>(self, edge_weight: F2) -> SpanningTreeBuilder<'a, W, G, F2>
    where
        G: GraphRef<V, E>,
        F2: Fn(&E) -> W,
        W: Weight,
    {
        self.edge_weight(edge_weight)
    }

    /// Vertex from which Prim's algorithm grows the tree. Only the component
    /// of this vertex is then covered.
    ///
    /// If not specified, a tree is grown from every vertex not covered yet.
    /// Other strategies ignore it.
    pub fn start(self, start: &'a G::VertexId) -> Self {
        Self {
            start: Some(start),
            ..self
        }
    }

    pub fn boruvka(self) -> Self {
        self.using(Algo::Boruvka)
    }

    pub fn prim(self) -> Self {
        self.using(Algo::Prim)
    }

    pub fn kruskal(self) -> Self {
        self.using(Algo::Kruskal)
    }

    pub fn using(self, algo: Algo) -> Self {
        Self { algo, ..self }
    }

    /// Runs the algorithm.
    pub fn run<V, E>(self) -> SpanningTree<W, G>
    where
        G: GraphRef<V, E> + Neighbors,
        F: GetWeight<E, W>,
        W: Weight,
    {
        let SpanningTreeBuilder {
            graph,
            start,
            edge_weight,
            algo,
            ..
        } = self;

        match algo {
            Algo::Boruvka => boruvka(graph, edge_weight),
            Algo::Prim => prim(graph, start, edge_weight),
            Algo::Kruskal => kruskal(graph, edge_weight),
        }
    }
}
