//! Find a [minimum spanning tree] of a graph, or a spanning forest if the
//! graph is not connected.
//!
//! Edge direction is ignored and loops never belong to the tree. Three
//! strategies are available:
//!
//! * [Borůvka's algorithm](https://en.wikipedia.org/wiki/Bor%C5%AFvka%27s_algorithm)
//!   adds the cheapest outgoing edge of every component in rounds.
//! * [Prim's algorithm](https://en.wikipedia.org/wiki/Prim%27s_algorithm)
//!   grows a single tree from a start vertex using a priority queue.
//! * [Kruskal's algorithm](https://en.wikipedia.org/wiki/Kruskal%27s_algorithm)
//!   adds edges in the order of their weight unless they close a cycle.
//!
//! Ties in weight are broken by the order in which the edges are encountered.
//! All strategies produce a tree of the same total weight, but they may choose
//! different edges of equal weight.
//!
//! See available parameters [here](SpanningTreeBuilder#implementations).
//!
//! [minimum spanning tree]: https://en.wikipedia.org/wiki/Minimum_spanning_tree
//!
//! # Examples
//!
//! ```
//! use trellis::{
//!     algo::SpanningTree,
//!     core::{marker::Undirected, GraphAdd},
//!     storage::AdjList,
//! };
//!
//! let mut graph = AdjList::<_, _, Undirected>::new();
//!
//! let prague = graph.add_vertex("Prague");
//! let brno = graph.add_vertex("Brno");
//! let ostrava = graph.add_vertex("Ostrava");
//!
//! let pb = graph.add_edge(&prague, &brno, 205u32);
//! graph.add_edge(&prague, &ostrava, 370);
//! let bo = graph.add_edge(&brno, &ostrava, 170);
//!
//! let tree = SpanningTree::on(&graph).prim().run();
//!
//! assert_eq!(tree.total_weight(), 375);
//! assert!(tree.is_spanning());
//! assert!(tree.contains(&pb) && tree.contains(&bo));
//! ```

use crate::core::{weight::GetWeight, EdgeReference, GraphBase, GraphRef, Weight};

mod boruvka;
mod builder;
mod kruskal;
mod prim;

pub use builder::SpanningTreeBuilder;

/// Edges of a minimum spanning forest.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct SpanningTree<W, G: GraphBase> {
    edges: Vec<G::EdgeId>,
    total_weight: W,
    vertex_count: usize,
}

impl<W, G> SpanningTree<W, G>
where
    G: GraphBase,
{
    pub(crate) fn new(edges: Vec<G::EdgeId>, total_weight: W, vertex_count: usize) -> Self {
        Self {
            edges,
            total_weight,
            vertex_count,
        }
    }

    /// Edges of the forest in the order they were added.
    pub fn edges(&self) -> &[G::EdgeId] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<G::EdgeId> {
        self.edges
    }

    pub fn contains(&self, edge: &G::EdgeId) -> bool {
        self.edges.contains(edge)
    }

    pub fn total_weight(&self) -> W
    where
        W: Clone,
    {
        self.total_weight.clone()
    }

    /// Number of trees in the forest, counting vertices without any edge of
    /// the forest as trivial trees.
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.edges.len()
    }

    /// Whether the forest is a single tree covering all vertices.
    pub fn is_spanning(&self) -> bool {
        self.component_count() <= 1
    }
}

struct WeightedEdge<VI, EI, W> {
    id: EI,
    from: VI,
    to: VI,
    weight: W,
}

// Edges without loops in the order of their ids.
fn weighted_edges<V, E, G, W, F>(
    graph: &G,
    edge_weight: &F,
) -> Vec<WeightedEdge<G::VertexId, G::EdgeId, W>>
where
    G: GraphRef<V, E>,
    F: GetWeight<E, W>,
    W: Weight,
{
    graph
        .edges()
        .filter(|edge| edge.from() != edge.to())
        .map(|edge| WeightedEdge {
            id: edge.id().clone(),
            from: edge.from().clone(),
            to: edge.to().clone(),
            weight: edge_weight.get(edge.attr()),
        })
        .collect()
}

/// Strategy of the spanning tree search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Algo {
    #[default]
    Boruvka,
    Prim,
    Kruskal,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        common::UnionFind,
        core::{
            marker::{Directed, Undirected},
            EdgeSet, GraphAdd, VertexSet,
        },
        infra::{
            proptest::graph_undirected,
            testing::{random_graph, reference_spanning_weight},
        },
        storage::AdjList,
    };

    use super::*;

    const ALGOS: [Algo; 3] = [Algo::Boruvka, Algo::Prim, Algo::Kruskal];

    fn assert_forest<G>(graph: &G, edges: &[G::EdgeId])
    where
        G: EdgeSet,
    {
        let mut sets = UnionFind::new();
        for edge in edges {
            let (u, v) = graph.endpoints(edge).unwrap();
            assert!(sets.union(&u, &v), "{edge:?} closes a cycle");
        }
    }

    fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
        let mut items = items.to_vec();
        items.sort();
        items
    }

    #[test]
    fn unique_tree() {
        let mut graph = AdjList::<_, _, Undirected>::new();

        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        let d = graph.add_vertex(());
        let e = graph.add_vertex(());

        graph.add_edge(&a, &b, 4u32);
        let ac = graph.add_edge(&a, &c, 1);
        let bc = graph.add_edge(&b, &c, 2);
        let bd = graph.add_edge(&b, &d, 5);
        graph.add_edge(&c, &d, 8);
        graph.add_edge(&c, &e, 10);
        let de = graph.add_edge(&d, &e, 2);

        for algo in ALGOS {
            let tree = SpanningTree::on(&graph).using(algo).run();

            assert_eq!(tree.total_weight(), 10, "{algo:?}");
            assert_eq!(sorted(tree.edges()), vec![ac, bc, bd, de], "{algo:?}");
            assert_eq!(tree.component_count(), 1);
        }
    }

    #[test]
    fn kruskal_adds_in_weight_order() {
        let mut graph = AdjList::<_, _, Undirected>::new();

        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());

        let ab = graph.add_edge(&a, &b, 3u32);
        let bc = graph.add_edge(&b, &c, 1);
        graph.add_edge(&a, &c, 3);

        let tree = SpanningTree::on(&graph).kruskal().run();
        assert_eq!(tree.edges(), &[bc, ab]);
    }

    #[test]
    fn forest_of_disconnected_graph() {
        let mut graph = AdjList::<_, _, Undirected>::new();

        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        let d = graph.add_vertex(());
        graph.add_vertex(());

        graph.add_edge(&a, &b, 1u32);
        graph.add_edge(&c, &d, 2);

        for algo in ALGOS {
            let tree = SpanningTree::on(&graph).using(algo).run();

            assert_eq!(tree.total_weight(), 3, "{algo:?}");
            assert_eq!(tree.component_count(), 3);
            assert!(!tree.is_spanning());
        }

        let tree = SpanningTree::on(&graph).prim().start(&c).run();
        assert_eq!(tree.total_weight(), 2);
        assert_eq!(tree.edges().len(), 1);
    }

    #[test]
    fn parallel_edges_and_loops() {
        let mut graph = AdjList::<_, _, Undirected>::new();

        let a = graph.add_vertex(());
        let b = graph.add_vertex(());

        graph.add_edge(&a, &a, 0u32);
        graph.add_edge(&a, &b, 7);
        let cheap = graph.add_edge(&b, &a, 2);
        graph.add_edge(&b, &b, 0);

        for algo in ALGOS {
            let tree = SpanningTree::on(&graph).using(algo).run();
            assert_eq!(tree.edges(), &[cheap], "{algo:?}");
        }
    }

    #[test]
    fn equal_weights() {
        let mut graph = AdjList::<_, _, Undirected>::new();

        let v = (0..4).map(|_| graph.add_vertex(())).collect::<Vec<_>>();
        for i in 0..4 {
            graph.add_edge(&v[i], &v[(i + 1) % 4], 1u32);
        }
        graph.add_edge(&v[0], &v[2], 1);

        for algo in ALGOS {
            let tree = SpanningTree::on(&graph).using(algo).run();

            assert_eq!(tree.total_weight(), 3, "{algo:?}");
            assert_forest(&graph, tree.edges());
        }
    }

    #[test]
    fn direction_is_ignored() {
        let mut graph = AdjList::<_, _, Directed>::new();

        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());

        graph.add_edge(&b, &a, 1u32);
        graph.add_edge(&c, &b, 1);
        graph.add_edge(&a, &c, 5);

        for algo in ALGOS {
            let tree = SpanningTree::on(&graph).using(algo).start(&a).run();
            assert_eq!(tree.total_weight(), 2, "{algo:?}");
            assert!(tree.is_spanning());
        }
    }

    #[test]
    fn weight_from_closure() {
        let mut graph = AdjList::<_, _, Undirected>::new();

        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());

        graph.add_edge(&a, &b, "short");
        graph.add_edge(&b, &c, "long");
        graph.add_edge(&a, &c, "longest");

        let tree = SpanningTree::on(&graph)
            .edge_weight_fn(|label: &&str| label.len() as f64 / 2.0)
            .boruvka()
            .run();

        assert_eq!(tree.total_weight(), 4.5);
    }

    #[test]
    fn empty_graph() {
        let graph = AdjList::<(), u32, Undirected>::new();

        for algo in ALGOS {
            let tree = SpanningTree::on(&graph).using(algo).run();
            assert_eq!(tree.total_weight(), 0);
            assert_eq!(tree.component_count(), 0);
            assert!(tree.is_spanning());
        }
    }

    #[test]
    fn random_graphs() {
        for seed in 0..8 {
            let graph = random_graph::<Undirected>(seed, 120, 400);
            let expected = reference_spanning_weight(&graph);

            for algo in ALGOS {
                let tree = SpanningTree::on(&graph).using(algo).run();
                assert_eq!(tree.total_weight(), expected, "{algo:?} on seed {seed}");
            }
        }
    }

    proptest! {
        #[test]
        fn proptest_strategies_agree(graph in graph_undirected(any::<()>(), 0u32..50).max_size(32)) {
            let expected = reference_spanning_weight(&graph);

            let boruvka = SpanningTree::on(&graph).boruvka().run();
            let prim = SpanningTree::on(&graph).prim().run();
            let kruskal = SpanningTree::on(&graph).kruskal().run();

            for tree in [&boruvka, &prim, &kruskal] {
                prop_assert_eq!(tree.total_weight(), expected);
                prop_assert!(tree.edges().len() < graph.vertex_count().max(1));
                assert_forest(&graph, tree.edges());
            }

            prop_assert_eq!(boruvka.component_count(), prim.component_count());
            prop_assert_eq!(boruvka.component_count(), kruskal.component_count());
        }
    }
}
