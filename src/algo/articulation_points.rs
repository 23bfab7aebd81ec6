//! Find [articulation points] (cut vertices) and [bridges] of an undirected
//! graph.
//!
//! A cut vertex is a vertex whose removal increases the number of connected
//! components, a bridge is such an edge. Both are found by a single
//! depth-first traversal of the whole graph using Tarjan's low-link values.
//!
//! Parallel edges are handled correctly, an edge with a parallel twin is never
//! a bridge.
//!
//! See available parameters [here](ArticulationPointsBuilder#implementations).
//!
//! [articulation points]: https://en.wikipedia.org/wiki/Biconnected_component
//! [bridges]: https://en.wikipedia.org/wiki/Bridge_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use trellis::{
//!     algo::articulation_points::{ArticulationPoints, Discovery, LowLink},
//!     core::{marker::Undirected, GraphAdd, Properties},
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
//! graph.add_edge(&b, &c, ());
//!
//! let mut props = Properties::new();
//! let result = ArticulationPoints::on(&graph).properties(&mut props).run();
//!
//! assert!(result.is_cut_vertex(&b));
//! assert_eq!(result.bridges().len(), 2);
//!
//! // The scratch data stay available to the caller.
//! assert!(props.get::<Discovery>(&a) < props.get::<Discovery>(&c));
//! assert_eq!(props.get::<LowLink>(&c), props.get::<Discovery>(&c));
//! ```

use std::collections::BTreeSet;

use crate::{
    core::{GraphBase, Property},
    visit::Time,
};

mod builder;
mod tarjan;

pub use builder::ArticulationPointsBuilder;

/// Cut vertices and bridges of a graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ArticulationPoints<G: GraphBase> {
    cut_vertices: BTreeSet<G::VertexId>,
    bridges: Vec<Bridge<G::VertexId, G::EdgeId>>,
}

/// An edge whose removal disconnects its endpoints.
///
/// `from` is the endpoint discovered first by the traversal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bridge<VI, EI> {
    pub edge: EI,
    pub from: VI,
    pub to: VI,
}

impl<G: GraphBase> ArticulationPoints<G> {
    /// Cut vertices in the order of their ids.
    pub fn cut_vertices(&self) -> impl Iterator<Item = &G::VertexId> + '_ {
        self.cut_vertices.iter()
    }

    /// Bridges in the order their edges were examined.
    pub fn bridges(&self) -> &[Bridge<G::VertexId, G::EdgeId>] {
        &self.bridges
    }

    pub fn is_cut_vertex(&self, vertex: &G::VertexId) -> bool {
        self.cut_vertices.contains(vertex)
    }

    pub fn is_bridge(&self, edge: &G::EdgeId) -> bool {
        self.bridges.iter().any(|bridge| &bridge.edge == edge)
    }
}

/// Discovery time of a vertex, [`Time::MAX`] if not discovered.
pub struct Discovery;

impl Property for Discovery {
    type Value = Time;

    fn default_value() -> Self::Value {
        Time::MAX
    }
}

/// The earliest discovery time reachable from the subtree of a vertex using at
/// most one back edge.
pub struct LowLink;

impl Property for LowLink {
    type Value = Time;

    fn default_value() -> Self::Value {
        Time::MAX
    }
}
