pub mod cost;
pub mod error;
pub mod id;
pub mod marker;
pub mod props;
pub mod weight;

mod base;
mod graph;

pub use base::*;
pub use cost::Cost;
pub use graph::*;
pub use props::{MutablePropertyMap, Properties, Property, PropertyMap};
pub use weight::{GetWeight, Weight};
