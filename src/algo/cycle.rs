//! Find a [cycle] in a graph.
//!
//! Two strategies are available. The depth-first search reports the first
//! back edge it encounters and works for both directed and undirected graphs.
//! The union-find strategy merges the endpoints of every edge and reports the
//! first edge whose endpoints are already in the same set. It only detects
//! cycles in the undirected sense, so it is offered for undirected graphs
//! only.
//!
//! Parallel edges and self-loops form cycles.
//!
//! See available parameters [here](CycleBuilder#implementations).
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use trellis::{
//!     algo::{is_cyclic, Cycle},
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
//! graph.add_edge(&c, &d, ());
//!
//! assert!(!is_cyclic(&graph));
//!
//! graph.add_edge(&d, &a, ());
//!
//! let cycle = Cycle::on(&graph).union_find().run().unwrap();
//! assert_eq!(cycle.collect(&graph).len(), 4);
//! ```

use std::fmt;

use crate::core::{marker::Undirected, EdgeSet, GraphBase, Neighbors, VertexSet};

mod builder;
mod collect;
mod dfs;
mod union_find;

pub use builder::CycleBuilder;

/// Cycle in a graph.
///
/// See [module](self) documentation for more details and example.
pub struct Cycle<G: GraphBase> {
    /// An edge that is part of the cycle.
    pub edge: G::EdgeId,
}

impl<G> fmt::Debug for Cycle<G>
where
    G: GraphBase,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cycle").field("edge", &self.edge).finish()
    }
}

impl<G> Clone for Cycle<G>
where
    G: GraphBase,
{
    fn clone(&self) -> Self {
        Self {
            edge: self.edge.clone(),
        }
    }
}

impl<G> PartialEq for Cycle<G>
where
    G: GraphBase,
{
    fn eq(&self, other: &Self) -> bool {
        self.edge == other.edge
    }
}

impl<G> Eq for Cycle<G> where G: GraphBase {}

impl<G: GraphBase> Cycle<G> {
    pub(crate) fn new(edge: G::EdgeId) -> Self {
        Self { edge }
    }

    /// Collects the edges of the whole cycle, starting with
    /// [`edge`](Cycle::edge).
    pub fn collect(self, graph: &G) -> Vec<G::EdgeId>
    where
        G: Neighbors + EdgeSet,
    {
        collect::bfs_collect(graph, self.edge)
    }
}

/// Strategy for finding a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Algo {
    /// Depth-first search looking for a back edge.
    #[default]
    Dfs,
    /// Disjoint-set forest over the endpoints of the edges.
    UnionFind,
}

/// Returns `true` if the graph is cyclic.
pub fn is_cyclic<G>(graph: &G) -> bool
where
    G: Neighbors + VertexSet + EdgeSet,
{
    Cycle::on(graph).run().is_some()
}

/// Returns `true` if the undirected graph is cyclic, using the union-find
/// strategy.
pub fn is_cyclic_undirected<G>(graph: &G) -> bool
where
    G: Neighbors + VertexSet + EdgeSet + GraphBase<EdgeType = Undirected>,
{
    Cycle::on(graph).union_find().run().is_some()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use crate::{
        core::{marker::Directed, GraphAdd, GraphFull},
        infra::proptest::{graph_directed, graph_undirected},
        storage::AdjList,
    };

    use super::*;

    fn assert_valid_cycle<G>(graph: &G, cycle: Cycle<G>)
    where
        G: Neighbors + EdgeSet,
    {
        let edges = cycle.clone().collect(graph);
        assert_eq!(edges.first(), Some(&cycle.edge));

        let distinct = edges.iter().collect::<HashSet<_>>();
        assert_eq!(distinct.len(), edges.len(), "cycle repeats an edge");

        // Every vertex on a closed walk has even degree within it.
        let mut degrees = std::collections::HashMap::new();
        for edge in edges.iter() {
            let (u, v) = graph.endpoints(edge).unwrap();
            *degrees.entry(u).or_insert(0) += 1;
            *degrees.entry(v).or_insert(0) += 1;
        }
        assert!(degrees.values().all(|degree| degree % 2 == 0));
    }

    fn create_basic_graph<G>() -> G
    where
        G: GraphAdd<(), ()> + Default,
    {
        let mut graph = G::default();

        let v0 = graph.add_vertex(());
        let v1 = graph.add_vertex(());
        let v2 = graph.add_vertex(());
        let v3 = graph.add_vertex(());

        graph.add_edge(&v0, &v1, ());
        graph.add_edge(&v1, &v2, ());
        graph.add_edge(&v2, &v0, ());
        graph.add_edge(&v0, &v3, ());

        graph
    }

    #[test]
    fn cycle_basic_undirected() {
        let graph: AdjList<(), (), Undirected> = create_basic_graph();

        for cycle in [
            Cycle::on(&graph).run(),
            Cycle::on(&graph).dfs().run(),
            Cycle::on(&graph).union_find().run(),
        ] {
            let cycle = cycle.unwrap();
            assert_eq!(cycle.clone().collect(&graph).len(), 3);
            assert_valid_cycle(&graph, cycle);
        }
    }

    #[test]
    fn cycle_basic_directed() {
        let graph: AdjList<(), (), Directed> = create_basic_graph();

        let cycle = Cycle::on(&graph).run().unwrap();
        assert_eq!(cycle.clone().collect(&graph).len(), 3);
        assert_valid_cycle(&graph, cycle);
    }

    #[test]
    fn acyclic_directed_diamond() {
        let mut graph = AdjList::<_, _, Directed>::new();

        let v0 = graph.add_vertex(());
        let v1 = graph.add_vertex(());
        let v2 = graph.add_vertex(());
        let v3 = graph.add_vertex(());

        graph.add_edge(&v0, &v1, ());
        graph.add_edge(&v0, &v2, ());
        graph.add_edge(&v1, &v3, ());
        graph.add_edge(&v2, &v3, ());

        assert!(!is_cyclic(&graph));
    }

    #[test]
    fn acyclic_after_removal() {
        let mut graph: AdjList<(), (), Undirected> = create_basic_graph();

        let edge = graph.edges_by_id().nth(1).unwrap();
        graph.remove_edge(&edge);

        assert!(!is_cyclic(&graph));
        assert!(!is_cyclic_undirected(&graph));
    }

    #[test]
    fn self_loop_is_cycle() {
        let mut graph = AdjList::<_, _, Undirected>::new();

        let v0 = graph.add_vertex(());
        let e = graph.add_edge(&v0, &v0, ());

        assert_eq!(Cycle::on(&graph).run().map(|cycle| cycle.edge), Some(e));
        assert_eq!(
            Cycle::on(&graph).union_find().run().map(|cycle| cycle.edge),
            Some(e)
        );
        assert_eq!(Cycle::new(e).collect(&graph), vec![e]);
    }

    #[test]
    fn parallel_edges_are_cycle() {
        let mut graph = AdjList::<_, _, Undirected>::new();

        let v0 = graph.add_vertex(());
        let v1 = graph.add_vertex(());
        let e0 = graph.add_edge(&v0, &v1, ());
        let e1 = graph.add_edge(&v1, &v0, ());

        let cycle = Cycle::on(&graph).run().unwrap();
        assert_eq!(cycle.edge, e1);
        assert_eq!(cycle.collect(&graph), vec![e1, e0]);

        assert!(is_cyclic_undirected(&graph));
    }

    #[test]
    fn cycle_in_second_component() {
        let mut graph = AdjList::<_, _, Directed>::new();

        let v0 = graph.add_vertex(());
        let v1 = graph.add_vertex(());
        let v2 = graph.add_vertex(());
        let v3 = graph.add_vertex(());

        graph.add_edge(&v0, &v1, ());
        graph.add_edge(&v2, &v3, ());
        let e = graph.add_edge(&v3, &v2, ());

        assert_eq!(Cycle::on(&graph).run().map(|cycle| cycle.edge), Some(e));
    }

    proptest! {
        #[test]
        fn proptest_strategies_agree(graph in graph_undirected(any::<()>(), any::<()>())) {
            let dfs = Cycle::on(&graph).dfs().run();
            let union_find = Cycle::on(&graph).union_find().run();

            prop_assert_eq!(dfs.is_some(), union_find.is_some());

            if let Some(cycle) = dfs {
                assert_valid_cycle(&graph, cycle);
            }

            if let Some(cycle) = union_find {
                assert_valid_cycle(&graph, cycle);
            }
        }

        #[test]
        fn proptest_cycle_directed(graph in graph_directed(any::<()>(), any::<()>())) {
            if let Some(cycle) = Cycle::on(&graph).run() {
                assert_valid_cycle(&graph, cycle);
            }
        }
    }
}
