use crate::core::{marker::Direction, GraphBase, NeighborReference, Neighbors, VertexSet};

use super::{raw::RawTraversal, Color, EdgeKind, Time, TraversalContext, Visitor};

// Stack of "iterators" as described in
// https://11011110.github.io/blog/2013/12/17/stack-based-graph-traversal.html.
// A vertex stays on the stack with its remaining neighbors until all of them
// are examined. This gives the same discover/finish order and edge
// classification as the recursive formulation.
struct Frame<G: GraphBase + ?Sized> {
    vertex: G::VertexId,
    // Reversed, so that popping yields neighbors in the storage order.
    neighbors: Vec<(G::VertexId, G::EdgeId)>,
}

impl<G: Neighbors + ?Sized> Frame<G> {
    fn open(vertex: G::VertexId, graph: &G) -> Self {
        let mut neighbors = graph
            .neighbors_directed(&vertex, Direction::Outgoing)
            .map(|n| (n.id().clone(), n.edge().clone()))
            .collect::<Vec<_>>();
        neighbors.reverse();

        Self { vertex, neighbors }
    }
}

/// Depth-first traversal.
///
/// Iterates over vertices in the order of their discovery. All events are
/// reported to the visitor `V`.
pub struct Dfs<'a, G, V = ()>
where
    G: GraphBase + ?Sized,
{
    graph: &'a G,
    raw: RawTraversal<G>,
    stack: Vec<Frame<G>>,
    visitor: V,
}

impl<'a, G> Dfs<'a, G>
where
    G: Neighbors + VertexSet + ?Sized,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            raw: RawTraversal::new(graph),
            stack: Vec::new(),
            visitor: (),
        }
    }
}

impl<'a, G, V> Dfs<'a, G, V>
where
    G: Neighbors + VertexSet + ?Sized,
    V: Visitor<G>,
{
    pub fn with_visitor<W: Visitor<G>>(self, visitor: W) -> Dfs<'a, G, W> {
        Dfs {
            graph: self.graph,
            raw: self.raw,
            stack: self.stack,
            visitor,
        }
    }

    /// Adds a root to start from. Roots are processed in the order they were
    /// added, those already discovered when their turn comes are skipped.
    pub fn start(mut self, root: G::VertexId) -> Self {
        self.raw.push_root(root);
        self
    }

    pub fn start_multi<I>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = G::VertexId>,
    {
        self.raw.extend_roots(roots);
        self
    }

    /// Traverses the whole graph, a new tree is started from every vertex that
    /// is still undiscovered.
    pub fn start_all(mut self) -> Self {
        self.raw.extend_roots(self.graph.vertices_by_id());
        self
    }

    pub fn color(&self, vertex: &G::VertexId) -> Color {
        self.raw.color(vertex)
    }

    pub fn discovery_time(&self, vertex: &G::VertexId) -> Option<Time> {
        self.raw.discovery_time(vertex)
    }

    pub fn discovered_count(&self) -> usize {
        self.raw.discovered_count()
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    pub fn visitor_mut(&mut self) -> &mut V {
        &mut self.visitor
    }

    /// Runs the traversal to the end and returns the visitor.
    pub fn run(mut self) -> V {
        while self.next().is_some() {}
        self.visitor
    }

    pub fn into_visitor(self) -> V {
        self.visitor
    }
}

impl<'a, G, V> Iterator for Dfs<'a, G, V>
where
    G: Neighbors + VertexSet + ?Sized,
    V: Visitor<G>,
{
    type Item = G::VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(frame) = self.stack.last_mut() else {
                let root = self.raw.next_root(self.graph)?;
                self.raw.discover(&root, &mut self.visitor);
                self.stack.push(Frame::open(root.clone(), self.graph));
                return Some(root);
            };

            let Some((to, edge)) = frame.neighbors.pop() else {
                // All neighbors exhausted.
                if let Some(frame) = self.stack.pop() {
                    self.raw.finish(&frame.vertex, &mut self.visitor);
                }
                continue;
            };

            let from = frame.vertex.clone();
            self.visitor.examine_edge(&from, &to, &edge);

            let Some(kind) = self.raw.classify(&from, &to, &edge, true) else {
                continue;
            };

            self.raw.report(kind, &from, &to, &edge, &mut self.visitor);

            if kind != EdgeKind::Tree {
                continue;
            }

            let context = TraversalContext {
                from: &from,
                to: &to,
                edge: &edge,
                kind,
            };

            if self.visitor.should_traverse(&context) {
                self.raw.discover(&to, &mut self.visitor);
                self.stack.push(Frame::open(to.clone(), self.graph));
                return Some(to);
            }
        }
    }
}
