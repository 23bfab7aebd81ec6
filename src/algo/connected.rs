//! Check whether a graph is [connected], or whether there is a path between
//! two vertices.
//!
//! A single traversal is run from the start vertex and the graph is connected
//! if it visits all vertices. The traversal follows the edges in their
//! direction, so for directed graphs this checks that all vertices are
//! reachable from the start. Graphs with at most one vertex are trivially
//! connected.
//!
//! See available parameters [here](ConnectedBuilder#implementations).
//!
//! [connected]: https://en.wikipedia.org/wiki/Connectivity_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use trellis::{
//!     algo::Connected,
//!     core::{marker::Undirected, GraphAdd},
//!     storage::AdjList,
//! };
//!
//! let mut graph = AdjList::<_, _, Undirected>::new();
//!
//! let a = graph.add_vertex("a");
//! let b = graph.add_vertex("b");
//! let c = graph.add_vertex("c");
//!
//! graph.add_edge(&a, &b, ());
//!
//! let connected = Connected::on(&graph).bfs().run();
//! assert!(!connected.is());
//! assert_eq!(connected.disconnected_any(), Some((&a, &c)));
//!
//! graph.add_edge(&b, &c, ());
//! assert!(Connected::on(&graph).run().is());
//! ```

use crate::core::{GraphBase, Neighbors, VertexSet};

mod builder;
mod traversal;

pub use builder::ConnectedBuilder;

/// Result of the connectivity check.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct Connected<G>
where
    G: GraphBase,
{
    disconnected_any: Option<(G::VertexId, G::VertexId)>,
    visited: usize,
}

impl<G> Connected<G>
where
    G: GraphBase,
{
    pub fn is(&self) -> bool {
        self.disconnected_any.is_none()
    }

    /// A pair of vertices with no path from the first to the second, if any.
    pub fn disconnected_any(&self) -> Option<(&G::VertexId, &G::VertexId)> {
        self.disconnected_any.as_ref().map(|(u, v)| (u, v))
    }

    /// Number of vertices the traversal visited before it finished or found
    /// the goal.
    pub fn visited_count(&self) -> usize {
        self.visited
    }
}

/// Traversal driving the connectivity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Algo {
    #[default]
    Dfs,
    Bfs,
}

pub fn is_connected<G>(graph: &G) -> bool
where
    G: Neighbors + VertexSet,
{
    Connected::on(graph).run().is()
}

pub fn is_path_between<G>(graph: &G, from: &G::VertexId, to: &G::VertexId) -> bool
where
    G: Neighbors + VertexSet,
{
    Connected::on(graph).between(from, to).run().is()
}
