//! Visitor assembled from independently optional closures.

use crate::core::GraphBase;

use super::{Time, TraversalContext, Visitor};

type VertexFn<'a, G> = Box<dyn FnMut(&<G as GraphBase>::VertexId, Time) + 'a>;
type EdgeFn<'a, G> = Box<
    dyn FnMut(&<G as GraphBase>::VertexId, &<G as GraphBase>::VertexId, &<G as GraphBase>::EdgeId)
        + 'a,
>;
type PredicateFn<'a, G> = Box<dyn FnMut(&TraversalContext<'_, G>) -> bool + 'a>;

/// A bundle of optional callbacks, one per observation point.
///
/// An absent slot does nothing, an absent predicate does not object.
/// [`Callbacks::combine`] merges two bundles slot by slot.
///
/// ```
/// use std::cell::Cell;
///
/// use trellis::{
///     core::{GraphAdd, marker::Directed},
///     storage::AdjList,
///     visit::{Callbacks, Dfs},
/// };
///
/// let mut graph = AdjList::<(), (), Directed>::new();
/// let a = graph.add_vertex(());
/// let b = graph.add_vertex(());
/// graph.add_edge(&a, &b, ());
///
/// let discovered = Cell::new(0);
/// let callbacks = Callbacks::<AdjList<(), (), Directed>>::new()
///     .on_discover_vertex(|_, _| discovered.set(discovered.get() + 1));
///
/// Dfs::new(&graph).with_visitor(callbacks).start(a).run();
/// assert_eq!(discovered.get(), 2);
/// ```
pub struct Callbacks<'a, G: GraphBase> {
    discover_vertex: Option<VertexFn<'a, G>>,
    examine_edge: Option<EdgeFn<'a, G>>,
    tree_edge: Option<EdgeFn<'a, G>>,
    back_edge: Option<EdgeFn<'a, G>>,
    forward_edge: Option<EdgeFn<'a, G>>,
    cross_edge: Option<EdgeFn<'a, G>>,
    finish_vertex: Option<VertexFn<'a, G>>,
    should_traverse: Option<PredicateFn<'a, G>>,
}

impl<'a, G: GraphBase + 'a> Callbacks<'a, G> {
    pub fn new() -> Self {
        Self {
            discover_vertex: None,
            examine_edge: None,
            tree_edge: None,
            back_edge: None,
            forward_edge: None,
            cross_edge: None,
            finish_vertex: None,
            should_traverse: None,
        }
    }

    pub fn on_discover_vertex<F>(self, f: F) -> Self
    where
        F: FnMut(&G::VertexId, Time) + 'a,
    {
        Self {
            discover_vertex: Some(Box::new(f)),
            ..self
        }
    }

    pub fn on_examine_edge<F>(self, f: F) -> Self
    where
        F: FnMut(&G::VertexId, &G::VertexId, &G::EdgeId) + 'a,
    {
        Self {
            examine_edge: Some(Box::new(f)),
            ..self
        }
    }

    pub fn on_tree_edge<F>(self, f: F) -> Self
    where
        F: FnMut(&G::VertexId, &G::VertexId, &G::EdgeId) + 'a,
    {
        Self {
            tree_edge: Some(Box::new(f)),
            ..self
        }
    }

    pub fn on_back_edge<F>(self, f: F) -> Self
    where
        F: FnMut(&G::VertexId, &G::VertexId, &G::EdgeId) + 'a,
    {
        Self {
            back_edge: Some(Box::new(f)),
            ..self
        }
    }

    pub fn on_forward_edge<F>(self, f: F) -> Self
    where
        F: FnMut(&G::VertexId, &G::VertexId, &G::EdgeId) + 'a,
    {
        Self {
            forward_edge: Some(Box::new(f)),
            ..self
        }
    }

    pub fn on_cross_edge<F>(self, f: F) -> Self
    where
        F: FnMut(&G::VertexId, &G::VertexId, &G::EdgeId) + 'a,
    {
        Self {
            cross_edge: Some(Box::new(f)),
            ..self
        }
    }

    pub fn on_finish_vertex<F>(self, f: F) -> Self
    where
        F: FnMut(&G::VertexId, Time) + 'a,
    {
        Self {
            finish_vertex: Some(Box::new(f)),
            ..self
        }
    }

    pub fn on_should_traverse<F>(self, f: F) -> Self
    where
        F: FnMut(&TraversalContext<'_, G>) -> bool + 'a,
    {
        Self {
            should_traverse: Some(Box::new(f)),
            ..self
        }
    }

    /// Slot-wise combination. When both slots are present, `self` is invoked
    /// first. Predicates are both evaluated and their results are and-ed.
    pub fn combine(self, other: Self) -> Self {
        Self {
            discover_vertex: merge_vertex::<G>(self.discover_vertex, other.discover_vertex),
            examine_edge: merge_edge::<G>(self.examine_edge, other.examine_edge),
            tree_edge: merge_edge::<G>(self.tree_edge, other.tree_edge),
            back_edge: merge_edge::<G>(self.back_edge, other.back_edge),
            forward_edge: merge_edge::<G>(self.forward_edge, other.forward_edge),
            cross_edge: merge_edge::<G>(self.cross_edge, other.cross_edge),
            finish_vertex: merge_vertex::<G>(self.finish_vertex, other.finish_vertex),
            should_traverse: merge_predicate::<G>(self.should_traverse, other.should_traverse),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.discover_vertex.is_none()
            && self.examine_edge.is_none()
            && self.tree_edge.is_none()
            && self.back_edge.is_none()
            && self.forward_edge.is_none()
            && self.cross_edge.is_none()
            && self.finish_vertex.is_none()
            && self.should_traverse.is_none()
    }
}

impl<'a, G: GraphBase + 'a> Default for Callbacks<'a, G> {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_vertex<'a, G: GraphBase + 'a>(
    lhs: Option<VertexFn<'a, G>>,
    rhs: Option<VertexFn<'a, G>>,
) -> Option<VertexFn<'a, G>> {
    match (lhs, rhs) {
        (Some(mut lhs), Some(mut rhs)) => Some(Box::new(move |vertex: &G::VertexId, time: Time| {
            lhs(vertex, time);
            rhs(vertex, time);
        })),
        (lhs, None) => lhs,
        (None, rhs) => rhs,
    }
}

fn merge_edge<'a, G: GraphBase + 'a>(
    lhs: Option<EdgeFn<'a, G>>,
    rhs: Option<EdgeFn<'a, G>>,
) -> Option<EdgeFn<'a, G>> {
    match (lhs, rhs) {
        (Some(mut lhs), Some(mut rhs)) => Some(Box::new(
            move |from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId| {
                lhs(from, to, edge);
                rhs(from, to, edge);
            },
        )),
        (lhs, None) => lhs,
        (None, rhs) => rhs,
    }
}

fn merge_predicate<'a, G: GraphBase + 'a>(
    lhs: Option<PredicateFn<'a, G>>,
    rhs: Option<PredicateFn<'a, G>>,
) -> Option<PredicateFn<'a, G>> {
    match (lhs, rhs) {
        (Some(mut lhs), Some(mut rhs)) => Some(Box::new(move |context: &TraversalContext<'_, G>| {
            let lhs = lhs(context);
            let rhs = rhs(context);
            lhs && rhs
        })),
        (lhs, None) => lhs,
        (None, rhs) => rhs,
    }
}

impl<'a, G: GraphBase> Visitor<G> for Callbacks<'a, G> {
    fn discover_vertex(&mut self, vertex: &G::VertexId, time: Time) {
        if let Some(f) = self.discover_vertex.as_mut() {
            f(vertex, time);
        }
    }

    fn examine_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
        if let Some(f) = self.examine_edge.as_mut() {
            f(from, to, edge);
        }
    }

    fn tree_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
        if let Some(f) = self.tree_edge.as_mut() {
            f(from, to, edge);
        }
    }

    fn back_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
        if let Some(f) = self.back_edge.as_mut() {
            f(from, to, edge);
        }
    }

    fn forward_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
        if let Some(f) = self.forward_edge.as_mut() {
            f(from, to, edge);
        }
    }

    fn cross_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
        if let Some(f) = self.cross_edge.as_mut() {
            f(from, to, edge);
        }
    }

    fn finish_vertex(&mut self, vertex: &G::VertexId, time: Time) {
        if let Some(f) = self.finish_vertex.as_mut() {
            f(vertex, time);
        }
    }

    fn should_traverse(&mut self, context: &TraversalContext<'_, G>) -> bool {
        match self.should_traverse.as_mut() {
            Some(f) => f(context),
            None => true,
        }
    }
}
