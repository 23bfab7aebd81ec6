//! Graph traversals and the observers of them.
//!
//! A traversal ([`Dfs`], [`Bfs`]) is a lazy [`Iterator`] over vertices in the
//! order they are discovered. Each call to `next` does only the work needed to
//! produce the next vertex, so stopping early costs nothing. The traversal
//! state is not reset, a new traversal must be created to traverse again.
//!
//! All traversals are **iterative**, the depth of the graph is not limited by
//! the size of the program stack.
//!
//! What happens during the traversal is reported to a [`Visitor`]. Every
//! observation point has a default no-op implementation, so a visitor only
//! implements what it cares about. Independent visitors can be layered onto a
//! single traversal with [`VisitorExt::combine`]. The combination is
//! associative and `()` is its identity.
//!
//! ```
//! use trellis::{
//!     core::{GraphAdd, marker::Undirected},
//!     storage::AdjList,
//!     visit::{Dfs, Event, Recorder},
//! };
//!
//! let mut graph = AdjList::<(), (), Undirected>::new();
//! let a = graph.add_vertex(());
//! let b = graph.add_vertex(());
//! let c = graph.add_vertex(());
//! graph.add_edge(&a, &b, ());
//! graph.add_edge(&b, &c, ());
//! graph.add_edge(&c, &a, ());
//!
//! let mut dfs = Dfs::new(&graph).with_visitor(Recorder::new()).start(a);
//! let order = dfs.by_ref().collect::<Vec<_>>();
//! assert_eq!(order, vec![a, b, c]);
//!
//! let events = dfs.into_visitor().into_events();
//! assert!(events.iter().any(|event| matches!(event, Event::BackEdge { .. })));
//! ```

pub mod bfs;
pub mod callbacks;
pub mod dfs;

pub(crate) mod raw;

#[doc(inline)]
pub use self::{bfs::Bfs, callbacks::Callbacks, dfs::Dfs};

use crate::core::GraphBase;

/// Strictly monotonically increasing numbering of traversal events.
///
/// Discovering and finishing a vertex both advance the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(pub usize);

impl Time {
    /// The largest possible value of time.
    pub const MAX: Time = Time(usize::MAX);
}

/// Traversal state of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Not discovered yet.
    #[default]
    White,
    /// Discovered, its edges are still being examined.
    Gray,
    /// All edges examined.
    Black,
}

/// Classification of an edge with respect to the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Leads to an undiscovered vertex.
    Tree,
    /// Leads to a vertex that is still being expanded. Signals a cycle.
    Back,
    /// Leads to a finished descendant (directed graphs only).
    Forward,
    /// Leads to a finished vertex in a different branch. In breadth-first
    /// search, every non-tree edge is a cross edge.
    Cross,
}

/// What the pruning predicate gets to decide on.
pub struct TraversalContext<'a, G: GraphBase + ?Sized> {
    pub from: &'a G::VertexId,
    pub to: &'a G::VertexId,
    pub edge: &'a G::EdgeId,
    pub kind: EdgeKind,
}

/// Observer of a graph traversal.
///
/// Every edge of a vertex being expanded is first reported to
/// [`examine_edge`](Visitor::examine_edge) and then classified exactly once
/// into one of the tree, back, forward or cross edge. In undirected graphs, an
/// edge seen again from its other endpoint is only examined.
pub trait Visitor<G: GraphBase + ?Sized> {
    fn discover_vertex(&mut self, _vertex: &G::VertexId, _time: Time) {}

    fn examine_edge(&mut self, _from: &G::VertexId, _to: &G::VertexId, _edge: &G::EdgeId) {}

    fn tree_edge(&mut self, _from: &G::VertexId, _to: &G::VertexId, _edge: &G::EdgeId) {}

    fn back_edge(&mut self, _from: &G::VertexId, _to: &G::VertexId, _edge: &G::EdgeId) {}

    fn forward_edge(&mut self, _from: &G::VertexId, _to: &G::VertexId, _edge: &G::EdgeId) {}

    fn cross_edge(&mut self, _from: &G::VertexId, _to: &G::VertexId, _edge: &G::EdgeId) {}

    fn finish_vertex(&mut self, _vertex: &G::VertexId, _time: Time) {}

    /// Decides whether the traversal descends into a tree edge. It is
    /// consulted after the edge was reported as a tree edge and does not change
    /// the classification. A vetoed destination stays undiscovered.
    fn should_traverse(&mut self, _context: &TraversalContext<'_, G>) -> bool {
        true
    }
}

/// Extension for combining visitors.
pub trait VisitorExt: Sized {
    /// Layers `other` onto `self`. Callbacks of `self` are invoked first. Both
    /// pruning predicates are evaluated and the edge is traversed only if none
    /// of them objects.
    fn combine<B>(self, other: B) -> Combined<Self, B> {
        Combined(self, other)
    }
}

impl<T> VisitorExt for T {}

/// Two visitors acting as one, see [`VisitorExt::combine`].
#[derive(Debug, Clone, Default)]
pub struct Combined<A, B>(pub A, pub B);

impl<A, B> Combined<A, B> {
    pub fn into_inner(self) -> (A, B) {
        (self.0, self.1)
    }
}

/// Traversal event as collected by [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<VI, EI> {
    Discover { vertex: VI, time: Time },
    Examine { from: VI, to: VI, edge: EI },
    TreeEdge { from: VI, to: VI, edge: EI },
    BackEdge { from: VI, to: VI, edge: EI },
    ForwardEdge { from: VI, to: VI, edge: EI },
    CrossEdge { from: VI, to: VI, edge: EI },
    Finish { vertex: VI, time: Time },
}

/// Visitor that collects all events in the order they happen.
pub struct Recorder<G: GraphBase + ?Sized> {
    events: Vec<Event<G::VertexId, G::EdgeId>>,
    examine: bool,
}

impl<G: GraphBase + ?Sized> Recorder<G> {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            examine: true,
        }
    }

    /// Do not record [`Event::Examine`] events.
    pub fn without_examine(self) -> Self {
        Self {
            examine: false,
            ..self
        }
    }

    pub fn events(&self) -> &[Event<G::VertexId, G::EdgeId>] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event<G::VertexId, G::EdgeId>> {
        self.events
    }
}

impl<G: GraphBase + ?Sized> Default for Recorder<G> {
    fn default() -> Self {
        Self::new()
    }
}

mod imp {
    use super::*;

    impl<G: GraphBase + ?Sized> Visitor<G> for () {}

    impl<G, V> Visitor<G> for Option<V>
    where
        G: GraphBase + ?Sized,
        V: Visitor<G>,
    {
        fn discover_vertex(&mut self, vertex: &G::VertexId, time: Time) {
            if let Some(visitor) = self {
                visitor.discover_vertex(vertex, time);
            }
        }

        fn examine_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            if let Some(visitor) = self {
                visitor.examine_edge(from, to, edge);
            }
        }

        fn tree_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            if let Some(visitor) = self {
                visitor.tree_edge(from, to, edge);
            }
        }

        fn back_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            if let Some(visitor) = self {
                visitor.back_edge(from, to, edge);
            }
        }

        fn forward_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            if let Some(visitor) = self {
                visitor.forward_edge(from, to, edge);
            }
        }

        fn cross_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            if let Some(visitor) = self {
                visitor.cross_edge(from, to, edge);
            }
        }

        fn finish_vertex(&mut self, vertex: &G::VertexId, time: Time) {
            if let Some(visitor) = self {
                visitor.finish_vertex(vertex, time);
            }
        }

        fn should_traverse(&mut self, context: &TraversalContext<'_, G>) -> bool {
            match self {
                Some(visitor) => visitor.should_traverse(context),
                None => true,
            }
        }
    }

    impl<G, V> Visitor<G> for &mut V
    where
        G: GraphBase + ?Sized,
        V: Visitor<G> + ?Sized,
    {
        fn discover_vertex(&mut self, vertex: &G::VertexId, time: Time) {
            (**self).discover_vertex(vertex, time)
        }

        fn examine_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            (**self).examine_edge(from, to, edge)
        }

        fn tree_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            (**self).tree_edge(from, to, edge)
        }

        fn back_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            (**self).back_edge(from, to, edge)
        }

        fn forward_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            (**self).forward_edge(from, to, edge)
        }

        fn cross_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            (**self).cross_edge(from, to, edge)
        }

        fn finish_vertex(&mut self, vertex: &G::VertexId, time: Time) {
            (**self).finish_vertex(vertex, time)
        }

        fn should_traverse(&mut self, context: &TraversalContext<'_, G>) -> bool {
            (**self).should_traverse(context)
        }
    }

    impl<G, A, B> Visitor<G> for Combined<A, B>
    where
        G: GraphBase + ?Sized,
        A: Visitor<G>,
        B: Visitor<G>,
    {
        fn discover_vertex(&mut self, vertex: &G::VertexId, time: Time) {
            self.0.discover_vertex(vertex, time);
            self.1.discover_vertex(vertex, time);
        }

        fn examine_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            self.0.examine_edge(from, to, edge);
            self.1.examine_edge(from, to, edge);
        }

        fn tree_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            self.0.tree_edge(from, to, edge);
            self.1.tree_edge(from, to, edge);
        }

        fn back_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            self.0.back_edge(from, to, edge);
            self.1.back_edge(from, to, edge);
        }

        fn forward_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            self.0.forward_edge(from, to, edge);
            self.1.forward_edge(from, to, edge);
        }

        fn cross_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            self.0.cross_edge(from, to, edge);
            self.1.cross_edge(from, to, edge);
        }

        fn finish_vertex(&mut self, vertex: &G::VertexId, time: Time) {
            self.0.finish_vertex(vertex, time);
            self.1.finish_vertex(vertex, time);
        }

        fn should_traverse(&mut self, context: &TraversalContext<'_, G>) -> bool {
            // No short-circuit, both predicates observe the edge.
            let lhs = self.0.should_traverse(context);
            let rhs = self.1.should_traverse(context);
            lhs && rhs
        }
    }

    impl<G: GraphBase + ?Sized> Visitor<G> for Recorder<G> {
        fn discover_vertex(&mut self, vertex: &G::VertexId, time: Time) {
            self.events.push(Event::Discover {
                vertex: vertex.clone(),
                time,
            });
        }

        fn examine_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            if self.examine {
                self.events.push(Event::Examine {
                    from: from.clone(),
                    to: to.clone(),
                    edge: edge.clone(),
                });
            }
        }

        fn tree_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            self.events.push(Event::TreeEdge {
                from: from.clone(),
                to: to.clone(),
                edge: edge.clone(),
            });
        }

        fn back_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            self.events.push(Event::BackEdge {
                from: from.clone(),
                to: to.clone(),
                edge: edge.clone(),
            });
        }

        fn forward_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            self.events.push(Event::ForwardEdge {
                from: from.clone(),
                to: to.clone(),
                edge: edge.clone(),
            });
        }

        fn cross_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
            self.events.push(Event::CrossEdge {
                from: from.clone(),
                to: to.clone(),
                edge: edge.clone(),
            });
        }

        fn finish_vertex(&mut self, vertex: &G::VertexId, time: Time) {
            self.events.push(Event::Finish {
                vertex: vertex.clone(),
                time,
            });
        }
    }
}
