//! Find a [maximum flow] between two vertices and the corresponding minimum
//! cut.
//!
//! Dinic's algorithm repeatedly layers the residual graph by breadth-first
//! search from the source and saturates it with a blocking flow along edges
//! that advance exactly one layer. It stops when the sink is no longer
//! reachable. The vertices still reachable from the source then form the
//! source side of a minimum cut, whose capacity equals the flow value.
//!
//! Edge capacities must be non-negative. In undirected graphs, every edge can
//! carry flow in either direction up to its capacity.
//!
//! See available parameters [here](MaxFlowBuilder#implementations).
//!
//! [maximum flow]: https://en.wikipedia.org/wiki/Maximum_flow_problem
//!
//! # Examples
//!
//! ```
//! use trellis::{
//!     algo::MaxFlow,
//!     core::{marker::Directed, GraphAdd},
//!     storage::AdjList,
//! };
//!
//! let mut graph = AdjList::<_, _, Directed>::new();
//!
//! let s = graph.add_vertex("s");
//! let a = graph.add_vertex("a");
//! let b = graph.add_vertex("b");
//! let t = graph.add_vertex("t");
//!
//! let sa = graph.add_edge(&s, &a, 3u32);
//! let sb = graph.add_edge(&s, &b, 2);
//! graph.add_edge(&a, &b, 5);
//! graph.add_edge(&a, &t, 2);
//! graph.add_edge(&b, &t, 3);
//!
//! let flow = MaxFlow::on(&graph).run(&s, &t).unwrap();
//! assert_eq!(flow.value(), 5);
//!
//! let cut = flow.min_cut();
//! assert_eq!(cut.value, 5);
//! assert_eq!(cut.edges, vec![sa, sb]);
//! assert!(cut.source_side.contains(&s));
//! ```

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{GraphBase, Weight};

mod builder;
mod dinic;

pub use builder::MaxFlowBuilder;

/// Maximum flow from a source to a sink.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct MaxFlow<W, G: GraphBase> {
    value: W,
    flow: FxHashMap<G::EdgeId, W>,
    min_cut: MinCut<G::VertexId, G::EdgeId, W>,
}

/// A set of edges with minimum total capacity separating the source from the
/// sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut<VI, EI, W> {
    pub value: W,
    /// Edges leading from the source side to the rest of the graph, in the
    /// order of their ids.
    pub edges: Vec<EI>,
    pub source_side: BTreeSet<VI>,
}

impl<W, G> MaxFlow<W, G>
where
    G: GraphBase,
    W: Weight,
{
    pub fn value(&self) -> W {
        self.value.clone()
    }

    /// Flow along the edge. Zero for edges that carry no flow or do not exist.
    pub fn flow(&self, edge: &G::EdgeId) -> W {
        self.flow.get(edge).cloned().unwrap_or_else(W::zero)
    }

    pub fn min_cut(&self) -> &MinCut<G::VertexId, G::EdgeId, W> {
        &self.min_cut
    }

    pub fn into_min_cut(self) -> MinCut<G::VertexId, G::EdgeId, W> {
        self.min_cut
    }
}

/// The error encountered during a [`MaxFlow`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("source and sink are the same vertex")]
    SourceIsSink,
    #[error("source or sink does not exist")]
    VertexAbsent,
    #[error("edge with negative capacity")]
    NegativeCapacity,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use rustc_hash::FxHashMap;

    use crate::{
        core::{
            id::VertexId,
            marker::{Directed, Undirected},
            EdgeReference, EdgeSet, GraphAdd, GraphRef, VertexSet,
        },
        infra::{
            proptest::{graph_directed, graph_undirected},
            testing::brute_force_min_cut,
        },
        storage::AdjList,
    };

    use super::*;

    fn assert_conservation<Ty>(
        graph: &AdjList<(), u32, Ty>,
        flow: &MaxFlow<u32, AdjList<(), u32, Ty>>,
        source: &VertexId,
        sink: &VertexId,
    ) where
        Ty: crate::core::marker::EdgeType,
    {
        let mut balance = FxHashMap::<VertexId, i64>::default();

        for edge in graph.edges() {
            let amount = flow.flow(edge.id());
            assert!(amount <= *edge.attr(), "flow exceeds capacity");

            *balance.entry(*edge.from()).or_default() -= i64::from(amount);
            *balance.entry(*edge.to()).or_default() += i64::from(amount);
        }

        for vertex in graph.vertices_by_id() {
            let balance = balance.get(&vertex).copied().unwrap_or_default();

            if &vertex == source {
                assert_eq!(balance, -i64::from(flow.value()));
            } else if &vertex == sink {
                assert_eq!(balance, i64::from(flow.value()));
            } else {
                assert_eq!(balance, 0, "flow is not conserved in {vertex:?}");
            }
        }
    }

    #[test]
    fn classic_network() {
        let mut graph = AdjList::<_, _, Directed>::new();

        let s = graph.add_vertex(());
        let v1 = graph.add_vertex(());
        let v2 = graph.add_vertex(());
        let v3 = graph.add_vertex(());
        let v4 = graph.add_vertex(());
        let t = graph.add_vertex(());

        graph.add_edge(&s, &v1, 16u32);
        graph.add_edge(&s, &v2, 13);
        graph.add_edge(&v2, &v1, 4);
        let v1v3 = graph.add_edge(&v1, &v3, 12);
        graph.add_edge(&v3, &v2, 9);
        graph.add_edge(&v2, &v4, 14);
        let v4v3 = graph.add_edge(&v4, &v3, 7);
        graph.add_edge(&v3, &t, 20);
        let v4t = graph.add_edge(&v4, &t, 4);

        let flow = MaxFlow::on(&graph).run(&s, &t).unwrap();

        assert_eq!(flow.value(), 23);
        assert_conservation(&graph, &flow, &s, &t);

        let cut = flow.min_cut();
        assert_eq!(cut.value, 23);
        assert_eq!(cut.edges, vec![v1v3, v4v3, v4t]);
        assert_eq!(
            cut.source_side.iter().copied().collect::<Vec<_>>(),
            vec![s, v1, v2, v4]
        );
    }

    #[test]
    fn sink_unreachable() {
        let mut graph = AdjList::<_, _, Directed>::new();

        let s = graph.add_vertex(());
        let a = graph.add_vertex(());
        let t = graph.add_vertex(());

        let e = graph.add_edge(&s, &a, 4u32);
        graph.add_edge(&t, &a, 4);

        let flow = MaxFlow::on(&graph).run(&s, &t).unwrap();

        assert_eq!(flow.value(), 0);
        assert_eq!(flow.flow(&e), 0);

        let cut = flow.into_min_cut();
        assert_eq!(cut.value, 0);
        assert!(cut.edges.is_empty());
        assert_eq!(cut.source_side.into_iter().collect::<Vec<_>>(), vec![s, a]);
    }

    #[test]
    fn undirected_edges_carry_flow_both_ways() {
        let mut graph = AdjList::<_, _, Undirected>::new();

        let s = graph.add_vertex(());
        let a = graph.add_vertex(());
        let t = graph.add_vertex(());

        // Stored against the direction of the flow.
        let as_ = graph.add_edge(&a, &s, 5u32);
        let ta = graph.add_edge(&t, &a, 7);
        let st = graph.add_edge(&s, &t, 1);

        let flow = MaxFlow::on(&graph).run(&s, &t).unwrap();

        assert_eq!(flow.value(), 6);
        assert_eq!(flow.flow(&as_), 5);
        assert_eq!(flow.flow(&ta), 5);
        assert_eq!(flow.flow(&st), 1);
        assert_eq!(flow.min_cut().value, 6);
    }

    #[test]
    fn parallel_edges_add_up() {
        let mut graph = AdjList::<_, _, Directed>::new();

        let s = graph.add_vertex(());
        let t = graph.add_vertex(());

        graph.add_edge(&s, &t, 2u32);
        graph.add_edge(&s, &t, 3);
        graph.add_edge(&s, &s, 10);

        let flow = MaxFlow::on(&graph).run(&s, &t).unwrap();

        assert_eq!(flow.value(), 5);
        assert_eq!(flow.min_cut().edges.len(), 2);
    }

    #[test]
    fn custom_capacity() {
        let mut graph = AdjList::<_, _, Directed>::new();

        let s = graph.add_vertex(());
        let a = graph.add_vertex(());
        let t = graph.add_vertex(());

        graph.add_edge(&s, &a, "wide");
        graph.add_edge(&a, &t, "narrow");

        let flow = MaxFlow::on(&graph)
            .edge_capacity_fn(|kind: &&str| if *kind == "wide" { 10u64 } else { 1 })
            .run(&s, &t)
            .unwrap();

        assert_eq!(flow.value(), 1);
    }

    #[test]
    fn float_capacity() {
        let mut graph = AdjList::<_, _, Directed>::new();

        let s = graph.add_vertex(());
        let a = graph.add_vertex(());
        let t = graph.add_vertex(());

        graph.add_edge(&s, &a, 1.5f64);
        graph.add_edge(&a, &t, 0.5);
        graph.add_edge(&s, &t, 0.25);

        let flow = MaxFlow::on(&graph).run(&s, &t).unwrap();

        assert_eq!(flow.value(), 0.75);
        assert_eq!(flow.min_cut().value, 0.75);
    }

    #[test]
    fn errors() {
        let mut graph = AdjList::<_, _, Directed>::new();

        let s = graph.add_vertex(());
        let t = graph.add_vertex(());
        graph.add_edge(&s, &t, -1i32);

        assert_matches!(MaxFlow::on(&graph).run(&s, &s), Err(Error::SourceIsSink));
        assert_matches!(
            MaxFlow::on(&graph).run(&s, &VertexId(42)),
            Err(Error::VertexAbsent)
        );
        assert_matches!(
            MaxFlow::on(&graph).run(&s, &t),
            Err(Error::NegativeCapacity)
        );
    }

    proptest! {
        #[test]
        fn proptest_max_flow_min_cut(graph in graph_directed(any::<()>(), 0u32..20).max_size(9)) {
            let vertices = graph.vertices_by_id().collect::<Vec<_>>();
            prop_assume!(vertices.len() >= 2);

            let source = vertices[0];
            let sink = vertices[vertices.len() - 1];

            let flow = MaxFlow::on(&graph).run(&source, &sink).unwrap();
            assert_conservation(&graph, &flow, &source, &sink);

            let cut = flow.min_cut();
            prop_assert_eq!(cut.value, flow.value());
            prop_assert!(cut.source_side.contains(&source));
            prop_assert!(!cut.source_side.contains(&sink));

            let cut_capacity = cut
                .edges
                .iter()
                .map(|e| graph.edge(e).copied().unwrap_or_default())
                .sum::<u32>();
            prop_assert_eq!(cut_capacity, cut.value);

            for edge in cut.edges.iter() {
                let (u, v) = graph.endpoints(edge).unwrap();
                prop_assert!(cut.source_side.contains(&u) && !cut.source_side.contains(&v));
            }

            prop_assert_eq!(u64::from(flow.value()), brute_force_min_cut(&graph, &source, &sink));
        }

        #[test]
        fn proptest_max_flow_min_cut_undirected(
            graph in graph_undirected(any::<()>(), 0u32..20).max_size(9).multi_edge_prob(0.2)
        ) {
            let vertices = graph.vertices_by_id().collect::<Vec<_>>();
            prop_assume!(vertices.len() >= 2);

            let source = vertices[0];
            let sink = vertices[vertices.len() - 1];

            let flow = MaxFlow::on(&graph).run(&source, &sink).unwrap();

            for edge in graph.edges() {
                prop_assert!(flow.flow(edge.id()) <= *edge.attr());
            }

            let cut = flow.min_cut();
            prop_assert_eq!(cut.value, flow.value());
            prop_assert!(cut.source_side.contains(&source));
            prop_assert!(!cut.source_side.contains(&sink));

            let mut cut_capacity = 0;
            for edge in cut.edges.iter() {
                let (u, v) = graph.endpoints(edge).unwrap();
                prop_assert_ne!(cut.source_side.contains(&u), cut.source_side.contains(&v));
                cut_capacity += graph.edge(edge).copied().unwrap_or_default();
            }
            prop_assert_eq!(cut_capacity, cut.value);

            prop_assert_eq!(u64::from(flow.value()), brute_force_min_cut(&graph, &source, &sink));
        }
    }
}
