use super::{
    base::{EdgeReference, NeighborReference, VertexReference},
    error::{AddEdgeError, AddVertexError},
    id::IdType,
    marker::{Direction, EdgeType},
};

/// The root of all graph capabilities, it only fixes the types.
pub trait GraphBase {
    type VertexId: IdType;
    type EdgeId: IdType;
    type EdgeType: EdgeType;

    fn is_directed(&self) -> bool {
        Self::EdgeType::is_directed()
    }

    // Upper bound, if known.
    fn vertex_count_hint(&self) -> Option<usize> {
        None
    }

    // Upper bound, if known.
    fn edge_count_hint(&self) -> Option<usize> {
        None
    }
}

/// Incidence of a vertex.
///
/// In undirected graphs, a self-loop must be yielded just once.
pub trait Neighbors: GraphBase {
    type NeighborRef<'a>: NeighborReference<Self::VertexId, Self::EdgeId>
    where
        Self: 'a;

    type NeighborsIter<'a>: Iterator<Item = Self::NeighborRef<'a>>
    where
        Self: 'a;

    /// All incident edges regardless of their orientation.
    fn neighbors_undirected(&self, from: &Self::VertexId) -> Self::NeighborsIter<'_>;

    /// Incident edges in given direction. In undirected graphs, the direction
    /// is ignored.
    fn neighbors_directed(&self, from: &Self::VertexId, dir: Direction) -> Self::NeighborsIter<'_>;

    fn outgoing_edges(&self, from: &Self::VertexId) -> NeighborEdges<'_, Self> {
        NeighborEdges {
            inner: self.neighbors_directed(from, Direction::Outgoing),
        }
    }

    fn incoming_edges(&self, to: &Self::VertexId) -> NeighborEdges<'_, Self> {
        NeighborEdges {
            inner: self.neighbors_directed(to, Direction::Incoming),
        }
    }

    fn degree_undirected(&self, id: &Self::VertexId) -> usize {
        if Self::EdgeType::is_directed() {
            self.degree_directed(id, Direction::Outgoing)
                + self.degree_directed(id, Direction::Incoming)
        } else {
            self.degree_directed(id, Direction::Outgoing)
        }
    }

    fn degree_directed(&self, id: &Self::VertexId, dir: Direction) -> usize {
        if Self::EdgeType::is_directed() {
            self.neighbors_directed(id, dir).count()
        } else {
            // A self-loop is yielded once but contributes two to the degree.
            self.neighbors_directed(id, dir)
                .map(|neighbor| if neighbor.id() == id { 2 } else { 1 })
                .sum()
        }
    }
}

pub struct NeighborEdges<'a, G: Neighbors + ?Sized + 'a> {
    inner: G::NeighborsIter<'a>,
}

impl<'a, G: Neighbors + ?Sized + 'a> Iterator for NeighborEdges<'a, G> {
    type Item = G::EdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|neighbor| neighbor.edge().clone())
    }
}

pub trait VertexSet: GraphBase {
    type VerticesByIdIter<'a>: Iterator<Item = Self::VertexId>
    where
        Self: 'a;

    /// The order is defined by the storage, but it does not change as long as
    /// the graph is not mutated.
    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_>;

    // Possibly linear.
    fn vertex_count(&self) -> usize {
        self.vertices_by_id().count()
    }

    fn contains_vertex(&self, id: &Self::VertexId) -> bool {
        self.vertices_by_id().any(|v| &v == id)
    }
}

pub trait EdgeSet: GraphBase {
    type EdgesByIdIter<'a>: Iterator<Item = Self::EdgeId>
    where
        Self: 'a;

    type EdgeIdIter<'a>: Iterator<Item = Self::EdgeId>
    where
        Self: 'a;

    fn edges_by_id(&self) -> Self::EdgesByIdIter<'_>;

    /// All (parallel) edges going from `from` to `to`.
    fn edge_id(&self, from: &Self::VertexId, to: &Self::VertexId) -> Self::EdgeIdIter<'_>;

    /// `None` if the edge does not exist (anymore).
    fn endpoints(&self, id: &Self::EdgeId) -> Option<(Self::VertexId, Self::VertexId)>;

    fn source(&self, id: &Self::EdgeId) -> Option<Self::VertexId> {
        self.endpoints(id).map(|(from, _)| from)
    }

    fn destination(&self, id: &Self::EdgeId) -> Option<Self::VertexId> {
        self.endpoints(id).map(|(_, to)| to)
    }

    // Possibly linear.
    fn edge_count(&self) -> usize {
        self.edges_by_id().count()
    }

    fn contains_edge(&self, id: &Self::EdgeId) -> bool {
        self.endpoints(id).is_some()
    }

    fn contains_edge_between(&self, from: &Self::VertexId, to: &Self::VertexId) -> bool {
        self.edge_id_any(from, to).is_some()
    }

    fn edge_id_any(&self, from: &Self::VertexId, to: &Self::VertexId) -> Option<Self::EdgeId> {
        self.edge_id(from, to).next()
    }
}

pub trait GraphRef<V, E>: VertexSet + EdgeSet {
    type VertexRef<'a>: VertexReference<Self::VertexId, V>
    where
        Self: 'a,
        V: 'a;

    type VerticesIter<'a>: Iterator<Item = Self::VertexRef<'a>>
    where
        Self: 'a,
        V: 'a;

    type EdgeRef<'a>: EdgeReference<Self::VertexId, Self::EdgeId, E>
    where
        Self: 'a,
        E: 'a;

    type EdgesIter<'a>: Iterator<Item = Self::EdgeRef<'a>>
    where
        Self: 'a,
        E: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_>;
    fn edges(&self) -> Self::EdgesIter<'_>;

    fn vertex(&self, id: &Self::VertexId) -> Option<&V>;
    fn edge(&self, id: &Self::EdgeId) -> Option<&E>;

    fn find_vertex(&self, vertex: &V) -> Option<Self::VertexId>
    where
        V: Eq,
    {
        self.vertices().find_map(|v| {
            if v.attr() == vertex {
                Some(v.id().clone())
            } else {
                None
            }
        })
    }
}

pub trait GraphMut<V, E>: GraphRef<V, E> {
    fn vertex_mut(&mut self, id: &Self::VertexId) -> Option<&mut V>;
    fn edge_mut(&mut self, id: &Self::EdgeId) -> Option<&mut E>;
}

pub trait GraphAdd<V, E>: GraphMut<V, E> {
    fn try_add_vertex(&mut self, vertex: V) -> Result<Self::VertexId, AddVertexError<V>>;
    fn try_add_edge(
        &mut self,
        from: &Self::VertexId,
        to: &Self::VertexId,
        edge: E,
    ) -> Result<Self::EdgeId, AddEdgeError<E>>;

    fn add_vertex(&mut self, vertex: V) -> Self::VertexId {
        match self.try_add_vertex(vertex) {
            Ok(id) => id,
            Err(error) => panic!("{error}"),
        }
    }

    fn add_edge(&mut self, from: &Self::VertexId, to: &Self::VertexId, edge: E) -> Self::EdgeId {
        match self.try_add_edge(from, to, edge) {
            Ok(id) => id,
            Err(error) => panic!("{error}"),
        }
    }
}

/// Removal capability.
///
/// Removing a vertex removes all its incident edges. Removed ids must not be
/// handed out again by the same graph.
pub trait GraphFull<V, E>: GraphAdd<V, E> {
    fn remove_vertex(&mut self, id: &Self::VertexId) -> Option<V>;
    fn remove_edge(&mut self, id: &Self::EdgeId) -> Option<E>;

    fn clear(&mut self) {
        let mut vertices = self.vertices_by_id().collect::<Vec<_>>();
        vertices.reverse();

        for v in vertices {
            self.remove_vertex(&v);
        }
    }

    fn clear_edges(&mut self) {
        let mut edges = self.edges_by_id().collect::<Vec<_>>();
        edges.reverse();

        for e in edges {
            self.remove_edge(&e);
        }
    }
}

mod imp {
    use super::*;

    macro_rules! deref_graph_base {
        ($($ref_kind:tt)*) => {
            impl<G> GraphBase for $($ref_kind)* G
            where
                G: GraphBase + ?Sized,
            {
                type VertexId = G::VertexId;
                type EdgeId = G::EdgeId;
                type EdgeType = G::EdgeType;

                fn vertex_count_hint(&self) -> Option<usize> {
                    (**self).vertex_count_hint()
                }

                fn edge_count_hint(&self) -> Option<usize> {
                    (**self).edge_count_hint()
                }
            }
        };
    }

    deref_graph_base!(&);
    deref_graph_base!(&mut);

    macro_rules! deref_neighbors {
        ($($ref_kind:tt)*) => {
            impl<G> Neighbors for $($ref_kind)* G
            where
                G: Neighbors + ?Sized,
            {
                type NeighborRef<'a> = G::NeighborRef<'a>
                where
                    Self: 'a;

                type NeighborsIter<'a> = G::NeighborsIter<'a>
                where
                    Self: 'a;

                fn neighbors_undirected(&self, from: &Self::VertexId) -> Self::NeighborsIter<'_> {
                    (**self).neighbors_undirected(from)
                }

                fn neighbors_directed(&self, from: &Self::VertexId, dir: Direction) -> Self::NeighborsIter<'_> {
                    (**self).neighbors_directed(from, dir)
                }

                fn degree_undirected(&self, id: &Self::VertexId) -> usize {
                    (**self).degree_undirected(id)
                }

                fn degree_directed(&self, id: &Self::VertexId, dir: Direction) -> usize {
                    (**self).degree_directed(id, dir)
                }
            }
        };
    }

    deref_neighbors!(&);
    deref_neighbors!(&mut);

    macro_rules! deref_vertex_set {
        ($($ref_kind:tt)*) => {
            impl<G> VertexSet for $($ref_kind)* G
            where
                G: VertexSet + ?Sized,
            {
                type VerticesByIdIter<'a> = G::VerticesByIdIter<'a>
                where
                    Self: 'a;

                fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
                    (**self).vertices_by_id()
                }

                fn vertex_count(&self) -> usize {
                    (**self).vertex_count()
                }

                fn contains_vertex(&self, id: &Self::VertexId) -> bool {
                    (**self).contains_vertex(id)
                }
            }
        };
    }

    deref_vertex_set!(&);
    deref_vertex_set!(&mut);

    macro_rules! deref_edge_set {
        ($($ref_kind:tt)*) => {
            impl<G> EdgeSet for $($ref_kind)* G
            where
                G: EdgeSet + ?Sized,
            {
                type EdgesByIdIter<'a> = G::EdgesByIdIter<'a>
                where
                    Self: 'a;

                type EdgeIdIter<'a> = G::EdgeIdIter<'a>
                where
                    Self: 'a;

                fn edges_by_id(&self) -> Self::EdgesByIdIter<'_> {
                    (**self).edges_by_id()
                }

                fn edge_id(&self, from: &Self::VertexId, to: &Self::VertexId) -> Self::EdgeIdIter<'_> {
                    (**self).edge_id(from, to)
                }

                fn endpoints(&self, id: &Self::EdgeId) -> Option<(Self::VertexId, Self::VertexId)> {
                    (**self).endpoints(id)
                }

                fn edge_count(&self) -> usize {
                    (**self).edge_count()
                }

                fn contains_edge(&self, id: &Self::EdgeId) -> bool {
                    (**self).contains_edge(id)
                }

                fn edge_id_any(&self, from: &Self::VertexId, to: &Self::VertexId) -> Option<Self::EdgeId> {
                    (**self).edge_id_any(from, to)
                }
            }
        };
    }

    deref_edge_set!(&);
    deref_edge_set!(&mut);

    macro_rules! deref_graph_ref {
        ($($ref_kind:tt)*) => {
            impl<V, E, G> GraphRef<V, E> for $($ref_kind)* G
            where
                G: GraphRef<V, E> + ?Sized,
            {
                type VertexRef<'a> = G::VertexRef<'a>
                where
                    Self: 'a,
                    V: 'a;

                type VerticesIter<'a> = G::VerticesIter<'a>
                where
                    Self: 'a,
                    V: 'a;

                type EdgeRef<'a> = G::EdgeRef<'a>
                where
                    Self: 'a,
                    E: 'a;

                type EdgesIter<'a> = G::EdgesIter<'a>
                where
                    Self: 'a,
                    E: 'a;

                fn vertices(&self) -> Self::VerticesIter<'_> {
                    (**self).vertices()
                }

                fn edges(&self) -> Self::EdgesIter<'_> {
                    (**self).edges()
                }

                fn vertex(&self, id: &Self::VertexId) -> Option<&V> {
                    (**self).vertex(id)
                }

                fn edge(&self, id: &Self::EdgeId) -> Option<&E> {
                    (**self).edge(id)
                }

                fn find_vertex(&self, vertex: &V) -> Option<Self::VertexId>
                where
                    V: Eq,
                {
                    (**self).find_vertex(vertex)
                }
            }
        };
    }

    deref_graph_ref!(&);
    deref_graph_ref!(&mut);

    impl<V, E, G> GraphMut<V, E> for &mut G
    where
        G: GraphMut<V, E> + ?Sized,
    {
        fn vertex_mut(&mut self, id: &Self::VertexId) -> Option<&mut V> {
            (**self).vertex_mut(id)
        }

        fn edge_mut(&mut self, id: &Self::EdgeId) -> Option<&mut E> {
            (**self).edge_mut(id)
        }
    }

    impl<V, E, G> GraphAdd<V, E> for &mut G
    where
        G: GraphAdd<V, E> + ?Sized,
    {
        fn try_add_vertex(&mut self, vertex: V) -> Result<Self::VertexId, AddVertexError<V>> {
            (**self).try_add_vertex(vertex)
        }

        fn try_add_edge(
            &mut self,
            from: &Self::VertexId,
            to: &Self::VertexId,
            edge: E,
        ) -> Result<Self::EdgeId, AddEdgeError<E>> {
            (**self).try_add_edge(from, to, edge)
        }
    }

    impl<V, E, G> GraphFull<V, E> for &mut G
    where
        G: GraphFull<V, E> + ?Sized,
    {
        fn remove_vertex(&mut self, id: &Self::VertexId) -> Option<V> {
            (**self).remove_vertex(id)
        }

        fn remove_edge(&mut self, id: &Self::EdgeId) -> Option<E> {
            (**self).remove_edge(id)
        }

        fn clear(&mut self) {
            (**self).clear()
        }
    }
}
