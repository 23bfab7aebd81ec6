//! Concrete graph storages.
//!
//! The algorithms are written against the capabilities in
//! [`core`](crate::core) only. [`AdjList`] is the storage used to exercise
//! them, any other type implementing the capabilities works the same.

pub mod adj_list;

pub use adj_list::AdjList;
