use crate::{
    core::{marker::Undirected, GraphBase, Neighbors, Properties, VertexSet},
    visit::Visitor,
};

use super::{tarjan::tarjan, ArticulationPoints};

/// Builder for [`ArticulationPoints`].
pub struct ArticulationPointsBuilder<'a, G, V = ()>
where
    G: GraphBase,
{
    graph: &'a G,
    visitor: V,
    props: Option<&'a mut Properties<G::VertexId>>,
}

impl<G> ArticulationPoints<G>
where
    G: GraphBase<EdgeType = Undirected>,
{
    /// Starts the configuration of the algorithm on the graph.
    pub fn on(graph: &G) -> ArticulationPointsBuilder<'_, G> {
        ArticulationPointsBuilder {
            graph,
            visitor: (),
            props: None,
        }
    }
}

impl<'a, G, V> ArticulationPointsBuilder<'a, G, V>
where
    G: GraphBase<EdgeType = Undirected>,
{
    /// Visitor that observes the underlying depth-first traversal. Pass a
    /// mutable reference to inspect it after the run.
    pub fn visitor<W>(self, visitor: W) -> ArticulationPointsBuilder<'a, G, W>
    where
        W: Visitor<G>,
    {
        ArticulationPointsBuilder {
            graph: self.graph,
            visitor,
            props: self.props,
        }
    }

    /// Property map that receives the [`Discovery`](super::Discovery) and
    /// [`LowLink`](super::LowLink) values of all vertices.
    pub fn properties(self, props: &'a mut Properties<G::VertexId>) -> Self {
        Self {
            props: Some(props),
            ..self
        }
    }

    /// Runs the algorithm.
    pub fn run(self) -> ArticulationPoints<G>
    where
        G: Neighbors + VertexSet,
        V: Visitor<G>,
    {
        let mut local = Properties::new();
        let props = match self.props {
            Some(props) => props,
            None => &mut local,
        };

        tarjan(self.graph, props, self.visitor)
    }
}
