//! Graph algorithms decoupled from graph storage.
//!
//! Algorithms in this crate are written against a small set of capability
//! traits in [`core`] (listing vertices and edges, incidence, endpoints), so
//! any storage implementing them can run them. Traversals in [`visit`] are lazy
//! iterators that report what they do to composable visitors, and the
//! algorithms in [`algo`] are built on top of them.
//!
//! ```
//! use trellis::{
//!     algo::ArticulationPoints,
//!     core::{marker::Undirected, GraphAdd},
//!     storage::AdjList,
//! };
//!
//! let mut graph = AdjList::<_, _, Undirected>::new();
//!
//! let a = graph.add_vertex("a");
//! let b = graph.add_vertex("b");
//! let c = graph.add_vertex("c");
//! let d = graph.add_vertex("d");
//!
//! graph.add_edge(&a, &b, ());
//! graph.add_edge(&b, &c, ());
//! graph.add_edge(&c, &a, ());
//! let cd = graph.add_edge(&c, &d, ());
//!
//! let result = ArticulationPoints::on(&graph).run();
//!
//! assert_eq!(result.cut_vertices().collect::<Vec<_>>(), vec![&c]);
//! assert_eq!(result.bridges().iter().map(|b| b.edge).collect::<Vec<_>>(), vec![cd]);
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod infra;
pub mod storage;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::{
            EdgeRef, EdgeReference, EdgeSet, GraphAdd, GraphBase, GraphFull, GraphMut, GraphRef,
            NeighborRef, NeighborReference, Neighbors, VertexRef, VertexReference, VertexSet,
        },
        visit::{Visitor, VisitorExt},
    };
}

#[cfg(test)]
mod tests {
    use crate::{
        core::{
            marker::Directed, EdgeSet, GraphAdd, GraphBase, GraphFull, GraphMut, GraphRef,
            Neighbors, VertexSet,
        },
        storage::AdjList,
    };

    fn require_graph_base(_: impl GraphBase) {}
    fn require_neighbors(_: impl Neighbors) {}
    fn require_vertex_set(_: impl VertexSet) {}
    fn require_edge_set(_: impl EdgeSet) {}
    fn require_graph_ref(_: impl GraphRef<(), ()>) {}
    fn require_graph_mut(_: impl GraphMut<(), ()>) {}
    fn require_graph_add(_: impl GraphAdd<(), ()>) {}
    fn require_graph_full(_: impl GraphFull<(), ()>) {}

    #[test]
    fn trait_impl() {
        let mut g = AdjList::<(), (), Directed>::new();

        require_graph_base(g.clone());
        require_graph_base(&g);
        require_graph_base(&mut g);

        require_neighbors(g.clone());
        require_neighbors(&g);
        require_neighbors(&mut g);

        require_vertex_set(g.clone());
        require_vertex_set(&g);
        require_vertex_set(&mut g);

        require_edge_set(g.clone());
        require_edge_set(&g);
        require_edge_set(&mut g);

        require_graph_ref(g.clone());
        require_graph_ref(&g);
        require_graph_ref(&mut g);

        require_graph_mut(g.clone());
        require_graph_mut(&mut g);

        require_graph_add(g.clone());
        require_graph_add(&mut g);

        require_graph_full(g.clone());
        require_graph_full(&mut g);
    }
}
