//! Algorithms working on any graph that provides the needed capabilities.
//!
//! Every algorithm is configured through a builder started by `on` and
//! finished by `run`, e.g. `Connected::on(&graph).bfs().run()`.

pub mod articulation_points;
pub mod connected;
pub mod cycle;
pub mod matching;
pub mod max_flow;
pub mod spanning_tree;

pub use articulation_points::ArticulationPoints;
pub use connected::{is_connected, is_path_between, Connected};
pub use cycle::{is_cyclic, is_cyclic_undirected, Cycle};
pub use matching::Matching;
pub use max_flow::MaxFlow;
pub use spanning_tree::SpanningTree;
