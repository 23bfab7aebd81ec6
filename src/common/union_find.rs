use std::{collections::hash_map::Entry, mem};

use rustc_hash::FxHashMap;

use crate::core::id::IdType;

/// Disjoint-set forest with path compression and union by rank.
///
/// Keys are arbitrary ids, an unknown key is implicitly a singleton set.
#[derive(Debug, Clone)]
pub struct UnionFind<K: IdType> {
    parent: FxHashMap<K, K>,
    rank: FxHashMap<K, u32>,
    sets: usize,
}

impl<K: IdType> UnionFind<K> {
    pub fn new() -> Self {
        Self {
            parent: FxHashMap::default(),
            rank: FxHashMap::default(),
            sets: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut this = Self::new();
        this.parent.reserve(capacity);
        this.rank.reserve(capacity);
        this
    }

    /// Adds a singleton set. Returns `false` if the key was already present.
    pub fn insert(&mut self, key: K) -> bool {
        match self.parent.entry(key.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(key);
                self.sets += 1;
                true
            }
        }
    }

    pub fn find(&mut self, key: &K) -> K {
        self.insert(key.clone());

        let mut root = key.clone();
        loop {
            let parent = &self.parent[&root];
            if parent == &root {
                break;
            }
            root = parent.clone();
        }

        // Second pass: point every vertex on the path directly to the root.
        let mut current = key.clone();
        while current != root {
            match self.parent.get_mut(&current) {
                Some(parent) => current = mem::replace(parent, root.clone()),
                None => break,
            }
        }

        root
    }

    /// Merges the sets of the two keys. Returns `false` if they already were
    /// in the same set.
    pub fn union(&mut self, lhs: &K, rhs: &K) -> bool {
        let lhs = self.find(lhs);
        let rhs = self.find(rhs);

        if lhs == rhs {
            return false;
        }

        let lhs_rank = self.rank.get(&lhs).copied().unwrap_or_default();
        let rhs_rank = self.rank.get(&rhs).copied().unwrap_or_default();

        if lhs_rank < rhs_rank {
            self.parent.insert(lhs, rhs);
        } else if lhs_rank > rhs_rank {
            self.parent.insert(rhs, lhs);
        } else {
            self.parent.insert(rhs, lhs.clone());
            self.rank.insert(lhs, lhs_rank + 1);
        }

        self.sets -= 1;
        true
    }

    pub fn same_set(&mut self, lhs: &K, rhs: &K) -> bool {
        self.find(lhs) == self.find(rhs)
    }

    /// Number of disjoint sets among the keys seen so far.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

impl<K: IdType> Default for UnionFind<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: IdType> FromIterator<K> for UnionFind<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut this = Self::new();
        for key in iter {
            this.insert(key);
        }
        this
    }
}
