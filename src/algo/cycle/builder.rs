use crate::core::{marker::Undirected, EdgeSet, GraphBase, Neighbors, VertexSet};

use super::{dfs::dfs_find, union_find::union_find_find, Algo, Cycle};

/// Builder for [`Cycle`].
pub struct CycleBuilder<'a, G>
where
    G: GraphBase,
{
    graph: &'a G,
    algo: Algo,
}

impl<G> Cycle<G>
where
    G: GraphBase,
{
    /// Starts the configuration of the cycle search on the graph.
    pub fn on(graph: &G) -> CycleBuilder<'_, G> {
        CycleBuilder {
            graph,
            algo: Algo::default(),
        }
    }
}

impl<'a, G> CycleBuilder<'a, G>
where
    G: GraphBase,
{
    /// Searches for a back edge in depth-first traversal of the whole graph.
    pub fn dfs(self) -> Self {
        Self {
            algo: Algo::Dfs,
            ..self
        }
    }
}

impl<'a, G> CycleBuilder<'a, G>
where
    G: GraphBase<EdgeType = Undirected>,
{
    /// Merges the endpoints of the edges in a disjoint-set forest. Only sound
    /// for undirected graphs.
    pub fn union_find(self) -> Self {
        self.using(Algo::UnionFind)
    }

    pub fn using(self, algo: Algo) -> Self {
        Self { algo, ..self }
    }
}

impl<'a, G> CycleBuilder<'a, G>
where
    G: GraphBase,
{
    /// Returns a cycle if there is any.
    pub fn run(self) -> Option<Cycle<G>>
    where
        G: Neighbors + VertexSet + EdgeSet,
    {
        match self.algo {
            Algo::Dfs => dfs_find(self.graph),
            Algo::UnionFind => union_find_find(self.graph),
        }
    }
}
