//! Traits and types used for identifying vertices and edges in graphs.
//!
//! All types that are supposed to be used as vertex/edge identifiers must
//! implement [`IdType`] trait. Algorithms in this crate never interpret an ID
//! as a storage index. They only compare, hash and clone them, so any opaque
//! identifier works.
//!
//! The default ID types are [`VertexId`] and [`EdgeId`], backed by `u64`.

use std::{fmt::Debug, hash::Hash};

/// A unique identification of a vertex or edge in a graph.
///
/// An ID is opaque to the algorithms. Storages are free to map IDs to indices
/// internally, but nothing outside of the storage relies on that.
pub trait IdType: Clone + Ord + Hash + Debug + 'static {}

impl<T> IdType for T where T: Clone + Ord + Hash + Debug + 'static {}

/// Type-level specification that an ID type is representable by integer.
///
/// Integer IDs are what the reference storages hand out. Implementors must
/// provide lossless conversions from and to `usize`.
pub trait IntegerIdType: IdType + Copy + From<usize> + Into<usize> {
    /// Converts an ID into the corresponding `usize`.
    fn as_usize(&self) -> usize {
        (*self).into()
    }

    /// Converts an `usize` into the corresponding ID.
    fn from_usize(index: usize) -> Self {
        Self::from(index)
    }
}

/// The default representation of a vertex ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub u64);

/// The default representation of an edge ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub u64);

macro_rules! impl_int_id {
    ($id_ty:ident) => {
        impl From<usize> for $id_ty {
            fn from(index: usize) -> Self {
                Self(index as u64)
            }
        }

        impl From<$id_ty> for usize {
            fn from(id: $id_ty) -> Self {
                id.0.try_into().expect("id type overflow")
            }
        }

        impl IntegerIdType for $id_ty {}
    };
}

impl_int_id!(VertexId);
impl_int_id!(EdgeId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_conversions() {
        let v = VertexId::from_usize(3);
        assert_eq!(v, VertexId(3));
        assert_eq!(v.as_usize(), 3);

        let e: EdgeId = 7usize.into();
        assert_eq!(usize::from(e), 7);
    }

    #[test]
    fn tuples_are_ids() {
        fn require_id<I: IdType>(_: I) {}

        require_id((VertexId(0), VertexId(1)));
        require_id("named");
        require_id(42u32);
    }
}
