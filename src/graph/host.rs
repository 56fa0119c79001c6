//! Host capability interface

use serde::Serialize;
use std::fmt;

use crate::error::Result;
use crate::params::{ParamSpec, ParamValue};

/// Opaque handle to a node owned by a host graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Input pad of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pad {
    /// Primary input
    Input,
    /// Auxiliary input, read by compositing operations
    Aux,
}

impl fmt::Display for Pad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pad::Input => write!(f, "input"),
            Pad::Aux => write!(f, "aux"),
        }
    }
}

/// What a composite node needs from the graph engine hosting it
///
/// Children created through `new_child` belong to the host and live as
/// long as it does.
pub trait GraphHost {
    /// Node standing in for the composite node's own input
    fn input_proxy(&self) -> NodeId;

    /// Node standing in for the composite node's own output
    fn output_proxy(&self) -> NodeId;

    /// Instantiate a primitive operation as a child node
    fn new_child(&mut self, operation: &str) -> Result<NodeId>;

    /// Set a parameter on a child node
    fn set_param(&mut self, node: NodeId, key: &str, value: &ParamValue) -> Result<()>;

    /// Declaration of a child node's parameter
    fn param_spec(&self, node: NodeId, key: &str) -> Result<&ParamSpec>;

    /// Feed `source`'s output into `sink`'s pad, replacing any previous source
    fn connect(&mut self, source: NodeId, sink: NodeId, pad: Pad) -> Result<()>;

    /// Remove whatever feeds `sink`'s pad; a no-op if nothing does
    fn disconnect(&mut self, sink: NodeId, pad: Pad) -> Result<()>;
}

/// Chain nodes output-to-primary-input, in order
pub fn link_many<H: GraphHost + ?Sized>(host: &mut H, nodes: &[NodeId]) -> Result<()> {
    for pair in nodes.windows(2) {
        host.connect(pair[0], pair[1], Pad::Input)?;
    }
    Ok(())
}
