//! Test infrastructure: graph generators and brute-force oracles.
#![doc(hidden)]

#[cfg(feature = "proptest")]
pub mod proptest;
pub mod testing;
