use crate::{
    core::{GraphBase, Neighbors, VertexSet},
    visit::{Dfs, TraversalContext, Visitor},
};

use super::Cycle;

struct FirstBackEdge<G: GraphBase>(Option<G::EdgeId>);

impl<G> Visitor<G> for FirstBackEdge<G>
where
    G: GraphBase,
{
    fn back_edge(&mut self, _from: &G::VertexId, _to: &G::VertexId, edge: &G::EdgeId) {
        if self.0.is_none() {
            self.0 = Some(edge.clone());
        }
    }

    fn should_traverse(&mut self, _context: &TraversalContext<'_, G>) -> bool {
        self.0.is_none()
    }
}

pub fn dfs_find<G>(graph: &G) -> Option<Cycle<G>>
where
    G: Neighbors + VertexSet,
{
    let mut dfs = Dfs::new(graph)
        .with_visitor(FirstBackEdge(None))
        .start_all();

    while dfs.visitor().0.is_none() && dfs.next().is_some() {}

    let edge = dfs.into_visitor().0;
    tracing::debug!(found = edge.is_some(), "dfs cycle search");

    edge.map(Cycle::new)
}
