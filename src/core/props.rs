//! Typed per-vertex and per-edge storage.
//!
//! [`PropertyMap`] is the read-only lookup `key -> value` that never fails,
//! unset keys read as a default. [`MutablePropertyMap`] adds writes.
//!
//! [`Properties`] composes any number of independent slots into one record
//! per key without the graph knowing about them. Each slot is named by a
//! zero-sized type implementing [`Property`], which also declares the slot's
//! default value. Algorithms attach their scratch data (discovery time,
//! low-link, parent) this way.
//!
//! The map is type-erased and keyed by [`TypeId`], so adding a slot costs a
//! hash lookup on each access. Algorithms with tight loops keep dense scratch
//! vectors instead and only publish into [`Properties`] when asked to.

use std::{
    any::{Any, TypeId},
    collections::hash_map::Entry,
    fmt,
    hash::Hash,
    marker::PhantomData,
};

use rustc_hash::FxHashMap;

pub trait PropertyMap<K, V> {
    fn get(&self, key: &K) -> V;
}

pub trait MutablePropertyMap<K, V>: PropertyMap<K, V> {
    fn set(&mut self, key: K, value: V);
}

/// A named slot with a declared default value.
pub trait Property: 'static {
    type Value: Clone + 'static;

    fn default_value() -> Self::Value;
}

/// Heterogeneous property storage keyed by vertex or edge id.
pub struct Properties<K> {
    slots: FxHashMap<TypeId, Box<dyn Any>>,
    ty: PhantomData<fn(K)>,
}

impl<K> Properties<K>
where
    K: Hash + Eq + Clone + 'static,
{
    pub fn new() -> Self {
        Self {
            slots: FxHashMap::default(),
            ty: PhantomData,
        }
    }

    pub fn get<P: Property>(&self, key: &K) -> P::Value {
        self.slot::<P>()
            .and_then(|slot| slot.get(key).cloned())
            .unwrap_or_else(P::default_value)
    }

    pub fn contains<P: Property>(&self, key: &K) -> bool {
        self.slot::<P>().map_or(false, |slot| slot.contains_key(key))
    }

    pub fn set<P: Property>(&mut self, key: K, value: P::Value) {
        self.slot_mut::<P>().insert(key, value);
    }

    /// Modifies the value in place, starting from the default if unset.
    pub fn update<P, F>(&mut self, key: K, f: F)
    where
        P: Property,
        F: FnOnce(&mut P::Value),
    {
        let value = self
            .slot_mut::<P>()
            .entry(key)
            .or_insert_with(P::default_value);
        f(value);
    }

    pub fn remove<P: Property>(&mut self, key: &K) -> Option<P::Value> {
        self.slots
            .get_mut(&TypeId::of::<P>())
            .and_then(|slot| slot.downcast_mut::<FxHashMap<K, P::Value>>())
            .and_then(|slot| slot.remove(key))
    }

    /// Drops all values of one slot.
    pub fn clear_property<P: Property>(&mut self) {
        self.slots.remove(&TypeId::of::<P>());
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn view<P: Property>(&self) -> PropertyView<'_, K, P> {
        PropertyView {
            slot: self.slot::<P>(),
            ty: PhantomData,
        }
    }

    pub fn view_mut<P: Property>(&mut self) -> PropertyViewMut<'_, K, P> {
        PropertyViewMut {
            slot: self.slot_mut::<P>(),
            ty: PhantomData,
        }
    }

    fn slot<P: Property>(&self) -> Option<&FxHashMap<K, P::Value>> {
        self.slots
            .get(&TypeId::of::<P>())
            .and_then(|slot| slot.downcast_ref())
    }

    fn slot_mut<P: Property>(&mut self) -> &mut FxHashMap<K, P::Value> {
        let slot = match self.slots.entry(TypeId::of::<P>()) {
            Entry::Occupied(occupied) => occupied.into_mut(),
            Entry::Vacant(vacant) => {
                vacant.insert(Box::new(FxHashMap::<K, P::Value>::default()))
            }
        };

        match slot.downcast_mut() {
            Some(slot) => slot,
            // Slots are only ever created by this function with this type.
            None => unreachable!("property slot has unexpected type"),
        }
    }
}

impl<K> Default for Properties<K>
where
    K: Hash + Eq + Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Properties<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Properties")
            .field("slots", &self.slots.len())
            .finish()
    }
}

/// Read-only view of a single slot of [`Properties`].
pub struct PropertyView<'a, K, P: Property> {
    slot: Option<&'a FxHashMap<K, P::Value>>,
    ty: PhantomData<P>,
}

impl<'a, K, P> PropertyMap<K, P::Value> for PropertyView<'a, K, P>
where
    K: Hash + Eq,
    P: Property,
{
    fn get(&self, key: &K) -> P::Value {
        self.slot
            .and_then(|slot| slot.get(key).cloned())
            .unwrap_or_else(P::default_value)
    }
}

/// Mutable view of a single slot of [`Properties`].
pub struct PropertyViewMut<'a, K, P: Property> {
    slot: &'a mut FxHashMap<K, P::Value>,
    ty: PhantomData<P>,
}

impl<'a, K, P> PropertyMap<K, P::Value> for PropertyViewMut<'a, K, P>
where
    K: Hash + Eq,
    P: Property,
{
    fn get(&self, key: &K) -> P::Value {
        self.slot
            .get(key)
            .cloned()
            .unwrap_or_else(P::default_value)
    }
}

impl<'a, K, P> MutablePropertyMap<K, P::Value> for PropertyViewMut<'a, K, P>
where
    K: Hash + Eq,
    P: Property,
{
    fn set(&mut self, key: K, value: P::Value) {
        self.slot.insert(key, value);
    }
}

/// A single-slot map with an explicit default.
#[derive(Debug, Clone)]
pub struct DefaultMap<K, V> {
    values: FxHashMap<K, V>,
    default: V,
}

impl<K: Hash + Eq, V: Clone> DefaultMap<K, V> {
    pub fn new(default: V) -> Self {
        Self {
            values: FxHashMap::default(),
            default,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.values.iter()
    }
}

impl<K: Hash + Eq, V: Clone + Default> Default for DefaultMap<K, V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<K: Hash + Eq, V: Clone> PropertyMap<K, V> for DefaultMap<K, V> {
    fn get(&self, key: &K) -> V {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }
}

impl<K: Hash + Eq, V: Clone> MutablePropertyMap<K, V> for DefaultMap<K, V> {
    fn set(&mut self, key: K, value: V) {
        self.values.insert(key, value);
    }
}

impl<K, V, F> PropertyMap<K, V> for F
where
    F: Fn(&K) -> V,
{
    fn get(&self, key: &K) -> V {
        (self)(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Color {}

    impl Property for Color {
        type Value = &'static str;

        fn default_value() -> Self::Value {
            "white"
        }
    }

    enum Depth {}

    impl Property for Depth {
        type Value = usize;

        fn default_value() -> Self::Value {
            0
        }
    }

    #[test]
    fn unset_reads_default() {
        let props = Properties::<u32>::new();
        assert_eq!(props.get::<Color>(&1), "white");
        assert_eq!(props.get::<Depth>(&1), 0);
        assert!(!props.contains::<Depth>(&1));
    }

    #[test]
    fn slots_are_independent() {
        let mut props = Properties::<u32>::new();
        props.set::<Color>(1, "gray");
        props.set::<Depth>(1, 3);
        props.set::<Color>(1, "black");

        assert_eq!(props.get::<Color>(&1), "black");
        assert_eq!(props.get::<Depth>(&1), 3);

        assert_eq!(props.remove::<Depth>(&1), Some(3));
        assert_eq!(props.get::<Depth>(&1), 0);
        assert_eq!(props.get::<Color>(&1), "black");
    }

    #[test]
    fn update_starts_from_default() {
        let mut props = Properties::<u32>::new();
        props.update::<Depth, _>(5, |depth| *depth += 2);
        props.update::<Depth, _>(5, |depth| *depth *= 10);
        assert_eq!(props.get::<Depth>(&5), 20);
    }

    #[test]
    fn views() {
        let mut props = Properties::<u32>::new();
        props.view_mut::<Depth>().set(2, 4);

        let view = props.view::<Depth>();
        assert_eq!(view.get(&2), 4);
        assert_eq!(view.get(&3), 0);
        assert_eq!(props.view::<Color>().get(&2), "white");
    }

    #[test]
    fn default_map_and_closure() {
        let mut map = DefaultMap::new(-1i32);
        map.set("a", 1);
        assert_eq!(map.get(&"a"), 1);
        assert_eq!(map.get(&"b"), -1);

        let double = |x: &i32| x * 2;
        assert_eq!(PropertyMap::get(&double, &21), 42);
    }
}
