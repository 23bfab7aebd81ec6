use std::{collections::VecDeque, hash::BuildHasherDefault};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{GraphBase, VertexSet};

use super::{Color, EdgeKind, Time, Visitor};

// State shared by depth-first and breadth-first traversals. Colors are stored
// in a hash map instead of a bit set because vertex ids are opaque.
pub(crate) struct RawTraversal<G: GraphBase + ?Sized> {
    color: FxHashMap<G::VertexId, Color>,
    discovery: FxHashMap<G::VertexId, Time>,
    // Undirected edges are classified only from the endpoint that sees them
    // first.
    classified: FxHashSet<G::EdgeId>,
    roots: VecDeque<G::VertexId>,
    time: usize,
    is_directed: bool,
}

impl<G: GraphBase + ?Sized> RawTraversal<G> {
    pub fn new(graph: &G) -> Self {
        let capacity = graph.vertex_count_hint().unwrap_or_default();

        Self {
            color: FxHashMap::with_capacity_and_hasher(capacity, BuildHasherDefault::default()),
            discovery: FxHashMap::with_capacity_and_hasher(capacity, BuildHasherDefault::default()),
            classified: FxHashSet::default(),
            roots: VecDeque::new(),
            time: 0,
            is_directed: graph.is_directed(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.is_directed
    }

    pub fn push_root(&mut self, root: G::VertexId) {
        self.roots.push_back(root);
    }

    pub fn extend_roots(&mut self, roots: impl IntoIterator<Item = G::VertexId>) {
        self.roots.extend(roots);
    }

    pub fn color(&self, vertex: &G::VertexId) -> Color {
        self.color.get(vertex).copied().unwrap_or_default()
    }

    pub fn discovery_time(&self, vertex: &G::VertexId) -> Option<Time> {
        self.discovery.get(vertex).copied()
    }

    pub fn discovered_count(&self) -> usize {
        self.discovery.len()
    }

    fn tick(&mut self) -> Time {
        let time = Time(self.time);
        self.time += 1;
        time
    }

    pub fn discover<V: Visitor<G>>(&mut self, vertex: &G::VertexId, visitor: &mut V) {
        let time = self.tick();
        self.color.insert(vertex.clone(), Color::Gray);
        self.discovery.insert(vertex.clone(), time);
        visitor.discover_vertex(vertex, time);
    }

    pub fn finish<V: Visitor<G>>(&mut self, vertex: &G::VertexId, visitor: &mut V) {
        let time = self.tick();
        self.color.insert(vertex.clone(), Color::Black);
        visitor.finish_vertex(vertex, time);
    }

    /// Next root that is still undiscovered and still present in the graph.
    pub fn next_root(&mut self, graph: &G) -> Option<G::VertexId>
    where
        G: VertexSet,
    {
        while let Some(root) = self.roots.pop_front() {
            if self.color(&root) == Color::White && graph.contains_vertex(&root) {
                return Some(root);
            }
        }

        None
    }

    /// Classifies the edge or returns `None` if it was already classified from
    /// its other endpoint.
    pub fn classify(
        &mut self,
        from: &G::VertexId,
        to: &G::VertexId,
        edge: &G::EdgeId,
        depth_first: bool,
    ) -> Option<EdgeKind> {
        if !self.is_directed && !self.classified.insert(edge.clone()) {
            return None;
        }

        let kind = match self.color(to) {
            Color::White => EdgeKind::Tree,
            _ if !depth_first => EdgeKind::Cross,
            Color::Gray => EdgeKind::Back,
            Color::Black => {
                if self.discovery_time(to) > self.discovery_time(from) {
                    EdgeKind::Forward
                } else {
                    EdgeKind::Cross
                }
            }
        };

        Some(kind)
    }

    /// Reports the classified edge to the visitor.
    pub fn report<V: Visitor<G>>(
        &self,
        kind: EdgeKind,
        from: &G::VertexId,
        to: &G::VertexId,
        edge: &G::EdgeId,
        visitor: &mut V,
    ) {
        match kind {
            EdgeKind::Tree => visitor.tree_edge(from, to, edge),
            EdgeKind::Back => visitor.back_edge(from, to, edge),
            EdgeKind::Forward => visitor.forward_edge(from, to, edge),
            EdgeKind::Cross => visitor.cross_edge(from, to, edge),
        }
    }
}
