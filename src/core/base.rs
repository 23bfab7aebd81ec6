use super::{id::IdType, marker::Direction};

pub struct VertexRef<'a, VI: IdType, V> {
    pub id: VI,
    pub attr: &'a V,
}

pub trait VertexReference<VI: IdType, V> {
    fn id(&self) -> &VI;
    fn attr(&self) -> &V;
}

/// An edge together with its endpoints and attribute.
///
/// Parallel edges between the same pair of vertices are distinct, they differ
/// in the edge id.
pub struct EdgeRef<'a, VI: IdType, EI: IdType, E> {
    pub id: EI,
    pub attr: &'a E,
    pub from: VI,
    pub to: VI,
}

pub trait EdgeReference<VI: IdType, EI: IdType, E> {
    fn id(&self) -> &EI;
    fn attr(&self) -> &E;
    fn from(&self) -> &VI;
    fn to(&self) -> &VI;
}

/// A single step from a vertex to its neighbor.
///
/// `pred` is the vertex the neighbor was reached from and `dir` tells whether
/// the edge was followed in its orientation ([`Outgoing`](Direction::Outgoing))
/// or against it.
pub struct NeighborRef<VI: IdType, EI: IdType> {
    pub id: VI,
    pub edge: EI,
    pub pred: VI,
    pub dir: Direction,
}

pub trait NeighborReference<VI: IdType, EI: IdType> {
    fn id(&self) -> &VI;
    fn edge(&self) -> &EI;
    fn pred(&self) -> &VI;
    fn dir(&self) -> Direction;
}

mod imp {
    use super::*;

    impl<'a, VI: IdType, V> VertexReference<VI, V> for VertexRef<'a, VI, V> {
        fn id(&self) -> &VI {
            &self.id
        }

        fn attr(&self) -> &V {
            self.attr
        }
    }

    impl<'a, VI: IdType, V> VertexReference<VI, V> for (VI, &'a V) {
        fn id(&self) -> &VI {
            &self.0
        }

        fn attr(&self) -> &V {
            self.1
        }
    }

    impl<'a, VI: IdType, EI: IdType, E> EdgeReference<VI, EI, E> for EdgeRef<'a, VI, EI, E> {
        fn id(&self) -> &EI {
            &self.id
        }

        fn attr(&self) -> &E {
            self.attr
        }

        fn from(&self) -> &VI {
            &self.from
        }

        fn to(&self) -> &VI {
            &self.to
        }
    }

    impl<VI: IdType, EI: IdType> NeighborReference<VI, EI> for NeighborRef<VI, EI> {
        fn id(&self) -> &VI {
            &self.id
        }

        fn edge(&self) -> &EI {
            &self.edge
        }

        fn pred(&self) -> &VI {
            &self.pred
        }

        fn dir(&self) -> Direction {
            self.dir
        }
    }

    impl<VI: IdType, EI: IdType> NeighborReference<VI, EI> for (VI, EI, VI, Direction) {
        fn id(&self) -> &VI {
            &self.0
        }

        fn edge(&self) -> &EI {
            &self.1
        }

        fn pred(&self) -> &VI {
            &self.2
        }

        fn dir(&self) -> Direction {
            self.3
        }
    }
}
