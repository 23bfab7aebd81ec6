use std::collections::VecDeque;

use crate::core::{marker::Direction, GraphBase, NeighborReference, Neighbors, VertexSet};

use super::{raw::RawTraversal, Color, EdgeKind, Time, TraversalContext, Visitor};

/// Breadth-first traversal.
///
/// A vertex is discovered when it is put into the queue and finished once all
/// its edges were examined after it is taken out. Every non-tree edge is
/// reported as a cross edge.
///
/// Edges of a returned vertex are examined on the following call of
/// [`next`](Iterator::next), so a traversal stopped early does no work beyond
/// the last returned vertex.
pub struct Bfs<'a, G, V = ()>
where
    G: GraphBase + ?Sized,
{
    graph: &'a G,
    raw: RawTraversal<G>,
    queue: VecDeque<G::VertexId>,
    // Returned vertex whose edges were not examined yet.
    pending: Option<G::VertexId>,
    visitor: V,
}

impl<'a, G> Bfs<'a, G>
where
    G: Neighbors + VertexSet + ?Sized,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            raw: RawTraversal::new(graph),
            queue: VecDeque::new(),
            pending: None,
            visitor: (),
        }
    }
}

impl<'a, G, V> Bfs<'a, G, V>
where
    G: Neighbors + VertexSet + ?Sized,
    V: Visitor<G>,
{
    pub fn with_visitor<W: Visitor<G>>(self, visitor: W) -> Bfs<'a, G, W> {
        Bfs {
            graph: self.graph,
            raw: self.raw,
            queue: self.queue,
            pending: self.pending,
            visitor,
        }
    }

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

    pub fn run(mut self) -> V {
        while self.next().is_some() {}
        self.visitor
    }

    pub fn into_visitor(self) -> V {
        self.visitor
    }
}

impl<'a, G, V> Iterator for Bfs<'a, G, V>
where
    G: Neighbors + VertexSet + ?Sized,
    V: Visitor<G>,
{
    type Item = G::VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(v) = self.pending.take() {
            self.expand(v);
        }

        let v = match self.queue.pop_front() {
            Some(v) => v,
            None => {
                let root = self.raw.next_root(self.graph)?;
                self.raw.discover(&root, &mut self.visitor);
                root
            }
        };

        self.pending = Some(v.clone());
        Some(v)
    }
}

impl<'a, G, V> Bfs<'a, G, V>
where
    G: Neighbors + VertexSet + ?Sized,
    V: Visitor<G>,
{
    fn expand(&mut self, v: G::VertexId) {
        for n in self.graph.neighbors_directed(&v, Direction::Outgoing) {
            let to = n.id();
            let edge = n.edge();

            self.visitor.examine_edge(&v, to, edge);

            let Some(kind) = self.raw.classify(&v, to, edge, false) else {
                continue;
            };

            self.raw.report(kind, &v, to, edge, &mut self.visitor);

            if kind == EdgeKind::Tree {
                let context = TraversalContext {
                    from: &v,
                    to,
                    edge,
                    kind,
                };

                if self.visitor.should_traverse(&context) {
                    self.raw.discover(to, &mut self.visitor);
                    self.queue.push_back(to.clone());
                }
            }
        }

        self.raw.finish(&v, &mut self.visitor);
    }
}
