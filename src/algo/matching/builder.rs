use crate::core::{GraphBase, Neighbors, VertexSet};

use super::{bipartition::bipartition, hopcroft_karp::hopcroft_karp, Error, Matching};

/// Builder for [`Matching`].
pub struct MatchingBuilder<'a, G>
where
    G: GraphBase,
{
    graph: &'a G,
    left: Option<Vec<G::VertexId>>,
}

impl<G> Matching<G>
where
    G: GraphBase,
{
    /// Starts the configuration of the matching search on the graph.
    pub fn on(graph: &G) -> MatchingBuilder<'_, G> {
        MatchingBuilder { graph, left: None }
    }
}

impl<'a, G> MatchingBuilder<'a, G>
where
    G: GraphBase,
{
    /// Vertices of the left side. All other vertices form the right side and
    /// edges with both endpoints on the same side are ignored.
    ///
    /// If not specified, the sides are derived from the graph by two-coloring.
    pub fn left<I>(self, left: I) -> Self
    where
        I: IntoIterator<Item = G::VertexId>,
    {
        Self {
            left: Some(left.into_iter().collect()),
            ..self
        }
    }

    /// Runs the algorithm.
    pub fn run(self) -> Result<Matching<G>, Error>
    where
        G: Neighbors + VertexSet,
    {
        let left = match self.left {
            Some(left) => left,
            None => bipartition(self.graph)?,
        };

        Ok(hopcroft_karp(self.graph, &left))
    }
}
