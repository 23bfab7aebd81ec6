use crate::core::{GraphBase, Neighbors, VertexSet};

use super::{traversal::traverse, Algo, Connected};

/// Builder for [`Connected`].
pub struct ConnectedBuilder<'a, G>
where
    G: GraphBase,
{
    graph: &'a G,
    start: Option<&'a G::VertexId>,
    between: Option<(&'a G::VertexId, &'a G::VertexId)>,
    algo: Algo,
}

impl<G> Connected<G>
where
    G: GraphBase,
{
    /// Starts the configuration of the connectivity check on the graph.
    pub fn on(graph: &G) -> ConnectedBuilder<'_, G> {
        ConnectedBuilder {
            graph,
            start: None,
            between: None,
            algo: Algo::default(),
        }
    }
}

impl<'a, G> ConnectedBuilder<'a, G>
where
    G: GraphBase,
{
    /// Vertex the traversal starts from. The first vertex of the graph is used
    /// if not specified.
    pub fn start(self, start: &'a G::VertexId) -> Self {
        Self {
            start: Some(start),
            ..self
        }
    }

    /// Narrows the check to a path from `from` to `to`. The traversal stops as
    /// soon as `to` is reached.
    pub fn between(self, from: &'a G::VertexId, to: &'a G::VertexId) -> Self {
        Self {
            between: Some((from, to)),
            ..self
        }
    }

    pub fn dfs(self) -> Self {
        self.using(Algo::Dfs)
    }

    pub fn bfs(self) -> Self {
        self.using(Algo::Bfs)
    }

    pub fn using(self, algo: Algo) -> Self {
        Self { algo, ..self }
    }

    /// Runs the check.
    pub fn run(self) -> Connected<G>
    where
        G: Neighbors + VertexSet,
    {
        traverse(self.graph, self.start, self.between, self.algo)
    }
}
