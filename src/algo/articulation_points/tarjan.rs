use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use crate::{
    core::{GraphBase, Neighbors, Properties, VertexSet},
    visit::{Dfs, Time, Visitor, VisitorExt},
};

use super::{ArticulationPoints, Bridge, Discovery, LowLink};

struct Tarjan<'p, G: GraphBase> {
    props: &'p mut Properties<G::VertexId>,
    // Tree edge leading to the vertex.
    parent: FxHashMap<G::VertexId, (G::VertexId, G::EdgeId)>,
    // Last reported tree edge as (to, from, edge). It takes effect only when
    // its destination is discovered right after, a vetoed one is dropped on
    // the next event.
    pending: Option<(G::VertexId, G::VertexId, G::EdgeId)>,
    children: FxHashMap<G::VertexId, usize>,
    cut_vertices: BTreeSet<G::VertexId>,
    // Keyed by the discovery time of the child, which is the order in which
    // the tree edges were examined.
    bridges: Vec<(Time, Bridge<G::VertexId, G::EdgeId>)>,
}

impl<'p, G: GraphBase> Tarjan<'p, G> {
    fn relax(&mut self, vertex: &G::VertexId, time: Time) {
        self.props.update::<LowLink, _>(vertex.clone(), |low| *low = (*low).min(time));
    }
}

impl<'p, G: GraphBase> Visitor<G> for Tarjan<'p, G> {
    fn discover_vertex(&mut self, vertex: &G::VertexId, time: Time) {
        self.props.set::<Discovery>(vertex.clone(), time);
        self.props.set::<LowLink>(vertex.clone(), time);

        if let Some((to, from, edge)) = self.pending.take() {
            if &to == vertex {
                *self.children.entry(from.clone()).or_default() += 1;
                self.parent.insert(to, (from, edge));
            }
        }
    }

    fn examine_edge(&mut self, _from: &G::VertexId, _to: &G::VertexId, _edge: &G::EdgeId) {
        self.pending = None;
    }

    fn tree_edge(&mut self, from: &G::VertexId, to: &G::VertexId, edge: &G::EdgeId) {
        self.pending = Some((to.clone(), from.clone(), edge.clone()));
    }

    fn back_edge(&mut self, from: &G::VertexId, to: &G::VertexId, _edge: &G::EdgeId) {
        // The traversal classifies every undirected edge once, so the tree
        // edge to the parent never shows up here while a parallel one does.
        let time = self.props.get::<Discovery>(to);
        self.relax(from, time);
    }

    fn forward_edge(&mut self, from: &G::VertexId, to: &G::VertexId, _edge: &G::EdgeId) {
        let time = self.props.get::<Discovery>(to);
        self.relax(from, time);
    }

    fn cross_edge(&mut self, from: &G::VertexId, to: &G::VertexId, _edge: &G::EdgeId) {
        let time = self.props.get::<Discovery>(to);
        self.relax(from, time);
    }

    fn finish_vertex(&mut self, vertex: &G::VertexId, _time: Time) {
        self.pending = None;
        let low = self.props.get::<LowLink>(vertex);

        match self.parent.get(vertex) {
            Some((parent, edge)) => {
                self.props
                    .update::<LowLink, _>(parent.clone(), |parent_low| {
                        *parent_low = (*parent_low).min(low)
                    });

                let parent_discovery = self.props.get::<Discovery>(parent);

                // The root is handled separately when it finishes.
                if low >= parent_discovery && self.parent.contains_key(parent) {
                    self.cut_vertices.insert(parent.clone());
                }

                if low > parent_discovery {
                    let bridge = Bridge {
                        edge: edge.clone(),
                        from: parent.clone(),
                        to: vertex.clone(),
                    };
                    self.bridges.push((self.props.get::<Discovery>(vertex), bridge));
                }
            }
            None => {
                if self.children.get(vertex).copied().unwrap_or_default() >= 2 {
                    self.cut_vertices.insert(vertex.clone());
                }
            }
        }
    }
}

pub fn tarjan<G, V>(
    graph: &G,
    props: &mut Properties<G::VertexId>,
    visitor: V,
) -> ArticulationPoints<G>
where
    G: Neighbors + VertexSet,
    V: Visitor<G>,
{
    let state = Tarjan {
        props,
        parent: FxHashMap::default(),
        pending: None,
        children: FxHashMap::default(),
        cut_vertices: BTreeSet::new(),
        bridges: Vec::new(),
    };

    let (state, _) = Dfs::new(graph)
        .with_visitor(state.combine(visitor))
        .start_all()
        .run()
        .into_inner();

    let mut bridges = state.bridges;
    bridges.sort_by_key(|(time, _)| *time);

    tracing::debug!(
        cut_vertices = state.cut_vertices.len(),
        bridges = bridges.len(),
        "articulation points"
    );

    ArticulationPoints {
        cut_vertices: state.cut_vertices,
        bridges: bridges.into_iter().map(|(_, bridge)| bridge).collect(),
    }
}
