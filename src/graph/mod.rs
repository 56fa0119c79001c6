//! Sub-graph hosting
//!
//! `GraphHost` is the narrow capability surface a composite node needs
//! from the engine that runs it. `SubGraph` is an in-process host that
//! records the resulting topology so it can be inspected.

mod host;
mod subgraph;

pub use host::{link_many, GraphHost, NodeId, Pad};
pub use subgraph::{Edge, SubGraph};
