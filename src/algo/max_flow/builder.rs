use std::{marker::PhantomData, ops::Sub};

use crate::core::{
    weight::{GetWeight, Identity},
    GraphBase, GraphRef, Weight,
};

use super::{dinic::dinic, Error, MaxFlow};

/// Builder for [`MaxFlow`].
pub struct MaxFlowBuilder<'a, W, G, F>
where
    G: GraphBase,
{
    graph: &'a G,
    edge_capacity: F,
    ty: PhantomData<fn() -> W>,
}

impl<W, G> MaxFlow<W, G>
where
    G: GraphBase,
{
    /// Starts the configuration of the algorithm on the graph. Edge attributes
    /// are the capacities unless specified otherwise.
    pub fn on(graph: &G) -> MaxFlowBuilder<'_, W, G, Identity> {
        MaxFlowBuilder {
            graph,
            edge_capacity: Identity,
            ty: PhantomData,
        }
    }
}

impl<'a, W, G, F> MaxFlowBuilder<'a, W, G, F>
where
    G: GraphBase,
{
    /// Extracts the capacity from the edge attribute.
    pub fn edge_capacity<F2, V, E>(self, edge_capacity: F2) -> MaxFlowBuilder<'a, W, G, F2>
    where
        G: GraphRef<V, E>,
        F2: GetWeight<E, W>,
        W: Weight,
    {
        MaxFlowBuilder {
            graph: self.graph,
            edge_capacity,
            ty: PhantomData,
        }
    }

    /// Computes the capacity from the edge attribute by a closure.
    pub fn edge_capacity_fn<F2, V, E>(self, edge_capacity: F2) -> MaxFlowBuilder<'a, W, G, F2>
    where
        G: GraphRef<V, E>,
        F2: Fn(&E) -> W,
        W: Weight,
    {
        self.edge_capacity(edge_capacity)
    }

    /// Runs the algorithm.
    pub fn run<V, E>(
        self,
        source: &G::VertexId,
        sink: &G::VertexId,
    ) -> Result<MaxFlow<W, G>, Error>
    where
        G: GraphRef<V, E>,
        F: GetWeight<E, W>,
        W: Weight + Sub<W, Output = W>,
    {
        dinic(self.graph, source, sink, self.edge_capacity)
    }
}
