use std::{iter::Enumerate, marker::PhantomData, slice};

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind, AddVertexError},
    id::{EdgeId, IntegerIdType, VertexId},
    marker::{Direction, EdgeType},
    EdgeRef, EdgeSet, GraphAdd, GraphBase, GraphFull, GraphMut, GraphRef, NeighborRef, Neighbors,
    VertexRef, VertexSet,
};

#[derive(Debug, Clone)]
pub struct Vertex<V> {
    attr: V,
    // Outgoing and incoming edges in the order they were added. Undirected
    // graphs keep all incident edges in the outgoing list.
    edges: [Vec<EdgeId>; 2],
}

#[derive(Debug, Clone)]
pub struct Edge<E> {
    attr: E,
    endpoints: [VertexId; 2],
}

/// Adjacency list with stable ids.
///
/// Removal leaves a tombstone in place of the element, so ids are allocated
/// monotonically and never handed out again. Lookups on removed ids return
/// `None`. Neighbors of a vertex are reported in the order the edges were
/// added.
#[derive(Debug, Clone)]
pub struct AdjList<V, E, Ty: EdgeType> {
    vertices: Vec<Option<Vertex<V>>>,
    edges: Vec<Option<Edge<E>>>,
    vertex_count: usize,
    edge_count: usize,
    ty: PhantomData<fn() -> Ty>,
}

impl<V, E, Ty: EdgeType> AdjList<V, E, Ty> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            vertex_count: 0,
            edge_count: 0,
            ty: PhantomData,
        }
    }

    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            edges: Vec::with_capacity(edge_capacity),
            vertex_count: 0,
            edge_count: 0,
            ty: PhantomData,
        }
    }

    fn vertex_slot(&self, id: &VertexId) -> Option<&Vertex<V>> {
        self.vertices.get(id.as_usize()).and_then(Option::as_ref)
    }

    fn edge_slot(&self, id: &EdgeId) -> Option<&Edge<E>> {
        self.edges.get(id.as_usize()).and_then(Option::as_ref)
    }

    // Indices of the endpoints paired with the incidence list of each
    // endpoint the edge is recorded in.
    fn incidence_lists(endpoints: &[VertexId; 2]) -> [(usize, Direction); 2] {
        let lists = if Ty::is_directed() {
            [(0, Direction::Outgoing), (1, Direction::Incoming)]
        } else {
            [(0, Direction::Outgoing), (1, Direction::Outgoing)]
        };

        lists.map(|(i, dir)| (endpoints[i].as_usize(), dir))
    }

    fn disconnect(&mut self, id: EdgeId, endpoints: [VertexId; 2]) {
        for (i, (vertex, dir)) in Self::incidence_lists(&endpoints).into_iter().enumerate() {
            // A self-loop in an undirected graph is recorded just once.
            if i == 1 && !Ty::is_directed() && endpoints[0] == endpoints[1] {
                break;
            }

            if let Some(Some(vertex)) = self.vertices.get_mut(vertex) {
                let list = &mut vertex.edges[dir.index()];
                if let Some(pos) = list.iter().position(|e| *e == id) {
                    list.remove(pos);
                }
            }
        }
    }
}

impl<V, E, Ty: EdgeType> Default for AdjList<V, E, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, Ty: EdgeType> GraphBase for AdjList<V, E, Ty> {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
    type EdgeType = Ty;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.vertex_count)
    }

    fn edge_count_hint(&self) -> Option<usize> {
        Some(self.edge_count)
    }
}

impl<V, E, Ty: EdgeType> Neighbors for AdjList<V, E, Ty> {
    type NeighborRef<'a> = NeighborRef<VertexId, EdgeId>
    where
        Self: 'a;

    type NeighborsIter<'a> = NeighborsIter<'a, E>
    where
        Self: 'a;

    fn neighbors_undirected(&self, from: &VertexId) -> Self::NeighborsIter<'_> {
        match self.vertex_slot(from) {
            Some(vertex) if Ty::is_directed() => NeighborsIter::new(
                &self.edges,
                *from,
                [&vertex.edges[0], &vertex.edges[1]],
                true,
            ),
            Some(vertex) => NeighborsIter::new(&self.edges, *from, [&vertex.edges[0], &[]], false),
            None => NeighborsIter::new(&self.edges, *from, [&[], &[]], Ty::is_directed()),
        }
    }

    fn neighbors_directed(&self, from: &VertexId, dir: Direction) -> Self::NeighborsIter<'_> {
        match self.vertex_slot(from) {
            Some(vertex) if Ty::is_directed() => {
                let lists: [&[EdgeId]; 2] = match dir {
                    Direction::Outgoing => [&vertex.edges[0], &[]],
                    Direction::Incoming => [&[], &vertex.edges[1]],
                };
                NeighborsIter::new(&self.edges, *from, lists, true)
            }
            Some(vertex) => NeighborsIter::new(&self.edges, *from, [&vertex.edges[0], &[]], false),
            None => NeighborsIter::new(&self.edges, *from, [&[], &[]], Ty::is_directed()),
        }
    }
}

impl<V, E, Ty: EdgeType> VertexSet for AdjList<V, E, Ty> {
    type VerticesByIdIter<'a> = SlotIds<'a, Vertex<V>, VertexId>
    where
        Self: 'a;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
        SlotIds::new(&self.vertices)
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn contains_vertex(&self, id: &VertexId) -> bool {
        self.vertex_slot(id).is_some()
    }
}

impl<V, E, Ty: EdgeType> EdgeSet for AdjList<V, E, Ty> {
    type EdgesByIdIter<'a> = SlotIds<'a, Edge<E>, EdgeId>
    where
        Self: 'a;

    type EdgeIdIter<'a> = EdgeIdIter<'a, E>
    where
        Self: 'a;

    fn edges_by_id(&self) -> Self::EdgesByIdIter<'_> {
        SlotIds::new(&self.edges)
    }

    fn edge_id(&self, from: &VertexId, to: &VertexId) -> Self::EdgeIdIter<'_> {
        let list = self
            .vertex_slot(from)
            .map(|vertex| vertex.edges[0].as_slice())
            .unwrap_or(&[]);

        EdgeIdIter {
            edges: &self.edges,
            list: list.iter(),
            from: *from,
            to: *to,
            is_directed: Ty::is_directed(),
        }
    }

    fn endpoints(&self, id: &EdgeId) -> Option<(VertexId, VertexId)> {
        self.edge_slot(id)
            .map(|edge| (edge.endpoints[0], edge.endpoints[1]))
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn contains_edge(&self, id: &EdgeId) -> bool {
        self.edge_slot(id).is_some()
    }
}

impl<V, E, Ty: EdgeType> GraphRef<V, E> for AdjList<V, E, Ty> {
    type VertexRef<'a> = VertexRef<'a, VertexId, V>
    where
        Self: 'a,
        V: 'a;

    type VerticesIter<'a> = VerticesIter<'a, V>
    where
        Self: 'a,
        V: 'a;

    type EdgeRef<'a> = EdgeRef<'a, VertexId, EdgeId, E>
    where
        Self: 'a,
        E: 'a;

    type EdgesIter<'a> = EdgesIter<'a, E>
    where
        Self: 'a,
        E: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_> {
        VerticesIter {
            inner: self.vertices.iter().enumerate(),
        }
    }

    fn edges(&self) -> Self::EdgesIter<'_> {
        EdgesIter {
            inner: self.edges.iter().enumerate(),
        }
    }

    fn vertex(&self, id: &VertexId) -> Option<&V> {
        self.vertex_slot(id).map(|vertex| &vertex.attr)
    }

    fn edge(&self, id: &EdgeId) -> Option<&E> {
        self.edge_slot(id).map(|edge| &edge.attr)
    }
}

impl<V, E, Ty: EdgeType> GraphMut<V, E> for AdjList<V, E, Ty> {
    fn vertex_mut(&mut self, id: &VertexId) -> Option<&mut V> {
        self.vertices
            .get_mut(id.as_usize())
            .and_then(Option::as_mut)
            .map(|vertex| &mut vertex.attr)
    }

    fn edge_mut(&mut self, id: &EdgeId) -> Option<&mut E> {
        self.edges
            .get_mut(id.as_usize())
            .and_then(Option::as_mut)
            .map(|edge| &mut edge.attr)
    }
}

impl<V, E, Ty: EdgeType> GraphAdd<V, E> for AdjList<V, E, Ty> {
    fn try_add_vertex(&mut self, vertex: V) -> Result<VertexId, AddVertexError<V>> {
        if u64::try_from(self.vertices.len()).is_err() {
            return Err(AddVertexError::new(vertex));
        }

        let id = VertexId::from_usize(self.vertices.len());
        self.vertices.push(Some(Vertex {
            attr: vertex,
            edges: [Vec::new(), Vec::new()],
        }));
        self.vertex_count += 1;

        Ok(id)
    }

    fn try_add_edge(
        &mut self,
        from: &VertexId,
        to: &VertexId,
        edge: E,
    ) -> Result<EdgeId, AddEdgeError<E>> {
        if !self.contains_vertex(from) {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::SourceAbsent));
        }

        if !self.contains_vertex(to) {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::DestinationAbsent));
        }

        if u64::try_from(self.edges.len()).is_err() {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::CapacityOverflow));
        }

        let id = EdgeId::from_usize(self.edges.len());
        let endpoints = [*from, *to];

        for (i, (vertex, dir)) in Self::incidence_lists(&endpoints).into_iter().enumerate() {
            if i == 1 && !Ty::is_directed() && from == to {
                break;
            }

            if let Some(Some(vertex)) = self.vertices.get_mut(vertex) {
                vertex.edges[dir.index()].push(id);
            }
        }

        self.edges.push(Some(Edge {
            attr: edge,
            endpoints,
        }));
        self.edge_count += 1;

        Ok(id)
    }
}

impl<V, E, Ty: EdgeType> GraphFull<V, E> for AdjList<V, E, Ty> {
    fn remove_vertex(&mut self, id: &VertexId) -> Option<V> {
        let vertex = self.vertices.get_mut(id.as_usize())?.take()?;
        self.vertex_count -= 1;

        let [outgoing, incoming] = vertex.edges;
        for edge in outgoing.into_iter().chain(incoming) {
            self.remove_edge(&edge);
        }

        Some(vertex.attr)
    }

    fn remove_edge(&mut self, id: &EdgeId) -> Option<E> {
        let edge = self.edges.get_mut(id.as_usize())?.take()?;
        self.edge_count -= 1;

        self.disconnect(*id, edge.endpoints);

        Some(edge.attr)
    }

    fn clear(&mut self) {
        // Tombstones are kept so that the ids are not reused.
        self.vertices.iter_mut().for_each(|slot| *slot = None);
        self.edges.iter_mut().for_each(|slot| *slot = None);
        self.vertex_count = 0;
        self.edge_count = 0;
    }

    fn clear_edges(&mut self) {
        self.edges.iter_mut().for_each(|slot| *slot = None);
        for vertex in self.vertices.iter_mut().flatten() {
            vertex.edges.iter_mut().for_each(Vec::clear);
        }
        self.edge_count = 0;
    }
}

pub struct NeighborsIter<'a, E> {
    edges: &'a [Option<Edge<E>>],
    from: VertexId,
    lists: [slice::Iter<'a, EdgeId>; 2],
    is_directed: bool,
}

impl<'a, E> NeighborsIter<'a, E> {
    fn new(
        edges: &'a [Option<Edge<E>>],
        from: VertexId,
        lists: [&'a [EdgeId]; 2],
        is_directed: bool,
    ) -> Self {
        Self {
            edges,
            from,
            lists: lists.map(|list| list.iter()),
            is_directed,
        }
    }
}

impl<'a, E> Iterator for NeighborsIter<'a, E> {
    type Item = NeighborRef<VertexId, EdgeId>;

    fn next(&mut self) -> Option<Self::Item> {
        for (i, list) in self.lists.iter_mut().enumerate() {
            let Some(&edge) = list.next() else {
                continue;
            };

            let endpoints = match self.edges.get(edge.as_usize()) {
                Some(Some(slot)) => slot.endpoints,
                _ => panic!("adjacency list refers to removed edge {edge:?}"),
            };

            let (id, dir) = if self.is_directed {
                if i == 0 {
                    (endpoints[1], Direction::Outgoing)
                } else {
                    (endpoints[0], Direction::Incoming)
                }
            } else if endpoints[0] == self.from {
                (endpoints[1], Direction::Outgoing)
            } else {
                (endpoints[0], Direction::Incoming)
            };

            return Some(NeighborRef {
                id,
                edge,
                pred: self.from,
                dir,
            });
        }

        None
    }
}

/// Ids of the occupied slots, in increasing order.
pub struct SlotIds<'a, T, I> {
    inner: Enumerate<slice::Iter<'a, Option<T>>>,
    ty: PhantomData<fn() -> I>,
}

impl<'a, T, I> SlotIds<'a, T, I> {
    fn new(slots: &'a [Option<T>]) -> Self {
        Self {
            inner: slots.iter().enumerate(),
            ty: PhantomData,
        }
    }
}

impl<'a, T, I: IntegerIdType> Iterator for SlotIds<'a, T, I> {
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .find(|(_, slot)| slot.is_some())
            .map(|(index, _)| I::from_usize(index))
    }
}

pub struct EdgeIdIter<'a, E> {
    edges: &'a [Option<Edge<E>>],
    list: slice::Iter<'a, EdgeId>,
    from: VertexId,
    to: VertexId,
    is_directed: bool,
}

impl<'a, E> Iterator for EdgeIdIter<'a, E> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        let edges = self.edges;
        let (from, to, is_directed) = (self.from, self.to, self.is_directed);

        self.list.by_ref().copied().find(|edge| {
            let Some(Some(slot)) = edges.get(edge.as_usize()) else {
                return false;
            };

            let [src, dst] = slot.endpoints;
            (src == from && dst == to) || (!is_directed && src == to && dst == from)
        })
    }
}

pub struct VerticesIter<'a, V> {
    inner: Enumerate<slice::Iter<'a, Option<Vertex<V>>>>,
}

impl<'a, V> Iterator for VerticesIter<'a, V> {
    type Item = VertexRef<'a, VertexId, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(|(index, slot)| {
            slot.as_ref().map(|vertex| VertexRef {
                id: VertexId::from_usize(index),
                attr: &vertex.attr,
            })
        })
    }
}

pub struct EdgesIter<'a, E> {
    inner: Enumerate<slice::Iter<'a, Option<Edge<E>>>>,
}

impl<'a, E> Iterator for EdgesIter<'a, E> {
    type Item = EdgeRef<'a, VertexId, EdgeId, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(|(index, slot)| {
            slot.as_ref().map(|edge| EdgeRef {
                id: EdgeId::from_usize(index),
                attr: &edge.attr,
                from: edge.endpoints[0],
                to: edge.endpoints[1],
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::core::{
        marker::{Directed, Undirected},
        NeighborReference,
    };

    use super::*;

    #[test]
    fn basic_undirected() {
        let mut graph = AdjList::<_, _, Undirected>::new();

        let v0 = graph.add_vertex("a");
        let v1 = graph.add_vertex("b");
        let v2 = graph.add_vertex("c");
        let v3 = graph.add_vertex("d");

        graph.add_edge(&v0, &v1, 1);
        graph.add_edge(&v0, &v2, 2);
        let e = graph.add_edge(&v0, &v3, 3);
        graph.add_edge(&v2, &v1, 4);
        graph.add_edge(&v2, &v3, 5);

        assert_eq!(graph.remove_edge(&e), Some(3));
        assert_eq!(graph.remove_vertex(&v1), Some("b"));

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.vertices_by_id().count(), 3);
        assert_eq!(graph.vertices().count(), 3);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges_by_id().count(), 2);
        assert_eq!(graph.edges().count(), 2);

        let mut degrees = graph
            .vertices_by_id()
            .map(|v| graph.degree_undirected(&v))
            .collect::<Vec<_>>();
        degrees.sort();
        assert_eq!(degrees, vec![1, 1, 2]);

        for edge in graph.edges_by_id() {
            let (from, to) = graph.endpoints(&edge).unwrap();
            assert_eq!(graph.edge_id_any(&from, &to), Some(edge));
            assert_eq!(graph.edge_id_any(&to, &from), Some(edge));
        }
    }

    #[test]
    fn basic_directed() {
        let mut graph = AdjList::<_, _, Directed>::new();

        let v0 = graph.add_vertex(());
        let v1 = graph.add_vertex(());
        let v2 = graph.add_vertex(());

        let e0 = graph.add_edge(&v0, &v1, ());
        graph.add_edge(&v1, &v2, ());
        graph.add_edge(&v2, &v0, ());

        assert_eq!(graph.degree_directed(&v0, Direction::Outgoing), 1);
        assert_eq!(graph.degree_directed(&v0, Direction::Incoming), 1);
        assert_eq!(graph.degree_undirected(&v0), 2);

        assert_eq!(graph.edge_id_any(&v0, &v1), Some(e0));
        assert_eq!(graph.edge_id_any(&v1, &v0), None);

        let incoming = graph
            .neighbors_directed(&v0, Direction::Incoming)
            .map(|n| (*n.id(), n.dir()))
            .collect::<Vec<_>>();
        assert_eq!(incoming, vec![(v2, Direction::Incoming)]);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut graph = AdjList::<_, _, Undirected>::new();

        let v0 = graph.add_vertex(());
        let v1 = graph.add_vertex(());
        let e = graph.add_edge(&v0, &v1, ());

        graph.remove_vertex(&v1);
        assert!(!graph.contains_edge(&e));
        assert_eq!(graph.endpoints(&e), None);
        assert_eq!(graph.vertex(&v1), None);

        let v2 = graph.add_vertex(());
        assert_ne!(v2, v1);

        graph.clear();
        let v3 = graph.add_vertex(());
        assert!(v3 > v2);
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn self_loop_reported_once() {
        let mut graph = AdjList::<_, _, Undirected>::new();

        let v = graph.add_vertex(());
        let e = graph.add_edge(&v, &v, ());

        let neighbors = graph
            .neighbors_undirected(&v)
            .map(|n| (*n.id(), *n.edge()))
            .collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(v, e)]);
        assert_eq!(graph.degree_undirected(&v), 2);

        graph.remove_edge(&e);
        assert_eq!(graph.neighbors_undirected(&v).count(), 0);
    }

    #[test]
    fn parallel_edges() {
        let mut graph = AdjList::<_, _, Undirected>::new();

        let v0 = graph.add_vertex(());
        let v1 = graph.add_vertex(());
        let e0 = graph.add_edge(&v0, &v1, ());
        let e1 = graph.add_edge(&v1, &v0, ());

        assert_eq!(graph.edge_id(&v0, &v1).collect::<Vec<_>>(), vec![e0, e1]);
        assert_eq!(graph.edge_id(&v1, &v0).collect::<Vec<_>>(), vec![e0, e1]);
    }

    #[test]
    fn neighbor_order_is_insertion_order() {
        let mut graph = AdjList::<_, _, Undirected>::new();

        let v0 = graph.add_vertex(());
        let v1 = graph.add_vertex(());
        let v2 = graph.add_vertex(());
        let v3 = graph.add_vertex(());

        graph.add_edge(&v0, &v2, ());
        let e = graph.add_edge(&v3, &v0, ());
        graph.add_edge(&v0, &v1, ());
        graph.remove_edge(&e);
        graph.add_edge(&v0, &v3, ());

        let neighbors = graph
            .neighbors_undirected(&v0)
            .map(|n| *n.id())
            .collect::<Vec<_>>();
        assert_eq!(neighbors, vec![v2, v1, v3]);
    }

    #[test]
    fn add_edge_absent_endpoint() {
        let mut graph = AdjList::<(), _, Directed>::new();

        let v0 = graph.add_vertex(());
        let v1 = graph.add_vertex(());
        graph.remove_vertex(&v1);

        assert_matches!(
            graph.try_add_edge(&v1, &v0, 7),
            Err(AddEdgeError {
                attr: 7,
                kind: AddEdgeErrorKind::SourceAbsent
            })
        );
        assert_matches!(
            graph.try_add_edge(&v0, &v1, 7),
            Err(AddEdgeError {
                attr: 7,
                kind: AddEdgeErrorKind::DestinationAbsent
            })
        );
    }

    #[test]
    fn mutate_attributes() {
        let mut graph = AdjList::<_, _, Directed>::new();

        let v = graph.add_vertex(1);
        let e = graph.add_edge(&v, &v, "x");

        *graph.vertex_mut(&v).unwrap() += 1;
        *graph.edge_mut(&e).unwrap() = "y";
        assert_eq!(graph.vertex(&v), Some(&2));
        assert_eq!(graph.edge(&e), Some(&"y"));
        assert_eq!(graph.find_vertex(&2), Some(v));
    }
}
