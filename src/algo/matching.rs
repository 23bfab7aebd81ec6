//! Find a [maximum matching] in a bipartite graph.
//!
//! The Hopcroft–Karp algorithm alternates a breadth-first layering phase,
//! which finds the length of the shortest augmenting paths, with a
//! depth-first phase that augments along a maximal set of vertex-disjoint
//! shortest paths. It runs in *O(E √V)*.
//!
//! The left side of the bipartition can be given explicitly. Otherwise it is
//! derived by two-coloring the graph, which fails with
//! [`Error::NotBipartite`] if there is an odd cycle. Edge direction is ignored.
//!
//! See available parameters [here](MatchingBuilder#implementations).
//!
//! [maximum matching]: https://en.wikipedia.org/wiki/Maximum_cardinality_matching
//!
//! # Examples
//!
//! ```
//! use trellis::{
//!     algo::Matching,
//!     core::{marker::Undirected, GraphAdd},
//!     storage::AdjList,
//! };
//!
//! let mut graph = AdjList::<_, _, Undirected>::new();
//!
//! let alice = graph.add_vertex("Alice");
//! let bob = graph.add_vertex("Bob");
//! let rust = graph.add_vertex("Rust");
//! let haskell = graph.add_vertex("Haskell");
//!
//! graph.add_edge(&alice, &rust, ());
//! graph.add_edge(&alice, &haskell, ());
//! graph.add_edge(&bob, &rust, ());
//!
//! let matching = Matching::on(&graph).left([alice, bob]).run().unwrap();
//!
//! assert_eq!(matching.len(), 2);
//! assert_eq!(matching.partner(&alice), Some(&haskell));
//! assert_eq!(matching.partner(&rust), Some(&bob));
//! ```

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::GraphBase;

mod bipartition;
mod builder;
mod hopcroft_karp;

pub use builder::MatchingBuilder;

/// A set of edges without common vertices.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct Matching<G: GraphBase> {
    // (left, right, edge) in the order of left vertices.
    pairs: Vec<(G::VertexId, G::VertexId, G::EdgeId)>,
    partner: FxHashMap<G::VertexId, G::VertexId>,
}

impl<G: GraphBase> Matching<G> {
    pub(crate) fn new(pairs: Vec<(G::VertexId, G::VertexId, G::EdgeId)>) -> Self {
        let partner = pairs
            .iter()
            .flat_map(|(left, right, _)| {
                [(left.clone(), right.clone()), (right.clone(), left.clone())]
            })
            .collect();

        Self { pairs, partner }
    }

    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The vertex matched with the given one, from either side.
    pub fn partner(&self, vertex: &G::VertexId) -> Option<&G::VertexId> {
        self.partner.get(vertex)
    }

    pub fn is_matched(&self, vertex: &G::VertexId) -> bool {
        self.partner.contains_key(vertex)
    }

    /// Matched pairs as (left, right).
    pub fn iter(&self) -> impl Iterator<Item = (&G::VertexId, &G::VertexId)> + '_ {
        self.pairs.iter().map(|(left, right, _)| (left, right))
    }

    /// Edges of the matching.
    pub fn edges(&self) -> impl Iterator<Item = &G::EdgeId> + '_ {
        self.pairs.iter().map(|(_, _, edge)| edge)
    }
}

/// The error encountered during a [`Matching`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The graph contains an odd cycle, so it can't be split into two sides.
    #[error("graph is not bipartite")]
    NotBipartite,
}
