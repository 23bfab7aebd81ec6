use std::{
    collections::{BTreeSet, HashSet},
    hash::BuildHasher,
};

use fixedbitset::FixedBitSet;

use crate::core::id::{IdType, IntegerIdType};

/// A set of already visited vertices (or edges).
pub trait VisitSet<I: IdType> {
    /// Marks the id as visited and returns `true` if it was not visited before.
    fn visit(&mut self, id: I) -> bool;
    fn is_visited(&self, id: &I) -> bool;
    fn visited_count(&self) -> usize;
    fn reset_visited(&mut self);
}

impl<I: IdType> VisitSet<I> for BTreeSet<I> {
    fn visit(&mut self, id: I) -> bool {
        self.insert(id)
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear();
    }
}

impl<I: IdType, S: BuildHasher> VisitSet<I> for HashSet<I, S> {
    fn visit(&mut self, id: I) -> bool {
        self.insert(id)
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

impl<I: IntegerIdType> VisitSet<I> for FixedBitSet {
    fn visit(&mut self, id: I) -> bool {
        let index = id.as_usize();
        if index >= self.len() {
            self.grow(index + 1);
        }
        !self.put(index)
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id.as_usize())
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use crate::core::id::VertexId;

    use super::*;

    fn exercise<S: VisitSet<VertexId>>(mut set: S) {
        assert!(set.visit(VertexId(3)));
        assert!(!set.visit(VertexId(3)));
        assert!(set.visit(VertexId(0)));
        assert!(set.is_visited(&VertexId(0)));
        assert!(!set.is_visited(&VertexId(1)));
        assert_eq!(set.visited_count(), 2);

        set.reset_visited();
        assert_eq!(set.visited_count(), 0);
        assert!(!set.is_visited(&VertexId(3)));
    }

    #[test]
    fn all_implementations_agree() {
        exercise(BTreeSet::new());
        exercise(FxHashSet::default());
        exercise(FixedBitSet::new());
    }
}
