//! In-process sub-graph
//!
//! Owns the child nodes of one composite node. Each input pad has at most
//! one source, so re-connecting a pad replaces the old edge.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use super::{GraphHost, NodeId, Pad};
use crate::error::{GraphError, Result};
use crate::ops::{OperationLibrary, PrimitiveNode};
use crate::params::{ParamSpec, ParamValue};

const INPUT_PROXY: NodeId = NodeId(0);
const OUTPUT_PROXY: NodeId = NodeId(1);

#[derive(Debug, Clone)]
enum NodeKind {
    InputProxy,
    OutputProxy,
    Primitive(PrimitiveNode),
}

#[derive(Debug, Clone)]
struct Slot {
    instance: Uuid,
    kind: NodeKind,
}

impl Slot {
    fn new(kind: NodeKind) -> Self {
        Self {
            instance: Uuid::new_v4(),
            kind,
        }
    }
}

/// A directed data dependency: `source` output feeds `sink`'s `pad`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Edge {
    pub source: NodeId,
    pub sink: NodeId,
    pub pad: Pad,
}

/// Child nodes and edges of one composite node
#[derive(Debug, Clone)]
pub struct SubGraph {
    library: OperationLibrary,
    nodes: Vec<Slot>,
    /// Keyed by sink pad; the value is the feeding node
    edges: BTreeMap<(NodeId, Pad), NodeId>,
}

impl SubGraph {
    /// Create a sub-graph holding only its input and output proxies
    pub fn new(library: OperationLibrary) -> Self {
        Self {
            library,
            nodes: vec![
                Slot::new(NodeKind::InputProxy),
                Slot::new(NodeKind::OutputProxy),
            ],
            edges: BTreeMap::new(),
        }
    }

    /// Drop every child node and edge, keeping the proxies
    pub fn clear(&mut self) {
        self.nodes.truncate(2);
        self.edges.clear();
    }

    /// Number of nodes, proxies included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node feeding the given pad, if any
    pub fn source_of(&self, sink: NodeId, pad: Pad) -> Option<NodeId> {
        self.edges.get(&(sink, pad)).copied()
    }

    /// All edges, sorted by sink then pad
    pub fn edges(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .map(|(&(sink, pad), &source)| Edge { source, sink, pad })
            .collect()
    }

    /// Current value of a child's parameter
    pub fn param(&self, node: NodeId, key: &str) -> Option<&ParamValue> {
        match &self.nodes.get(node.0)?.kind {
            NodeKind::Primitive(prim) => prim.get_param(key),
            _ => None,
        }
    }

    /// Operation name of a node; proxies report `input`/`output`
    pub fn node_label(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|slot| match &slot.kind {
            NodeKind::InputProxy => "input",
            NodeKind::OutputProxy => "output",
            NodeKind::Primitive(prim) => prim.operation(),
        })
    }

    /// Follow primary inputs back from the output proxy
    ///
    /// Returned in data-flow order, so a fully wired graph starts with the
    /// input proxy and ends with the output proxy.
    pub fn chain_to_output(&self) -> Vec<NodeId> {
        let mut chain = vec![OUTPUT_PROXY];
        let mut current = OUTPUT_PROXY;
        while let Some(source) = self.source_of(current, Pad::Input) {
            if chain.contains(&source) {
                break;
            }
            chain.push(source);
            current = source;
        }
        chain.reverse();
        chain
    }

    /// Serialize nodes (with parameter values) and edges
    pub fn to_json(&self) -> Value {
        let nodes: Vec<Value> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                let id = NodeId(index);
                let params: serde_json::Map<String, Value> = match &slot.kind {
                    NodeKind::Primitive(prim) => prim
                        .params()
                        .values()
                        .map(|(k, v)| (k.to_string(), json!(v)))
                        .collect(),
                    _ => serde_json::Map::new(),
                };
                json!({
                    "id": id.to_string(),
                    "instance": slot.instance.to_string(),
                    "operation": self.node_label(id),
                    "params": params,
                })
            })
            .collect();

        let edges: Vec<Value> = self
            .edges()
            .into_iter()
            .map(|e| {
                json!({
                    "source": e.source.to_string(),
                    "sink": e.sink.to_string(),
                    "pad": e.pad,
                })
            })
            .collect();

        json!({ "nodes": nodes, "edges": edges })
    }

    fn slot(&self, node: NodeId) -> Result<&Slot> {
        self.nodes.get(node.0).ok_or_else(|| GraphError::UnknownNode {
            node: node.to_string(),
        })
    }

    fn primitive_mut(&mut self, node: NodeId) -> Result<&mut PrimitiveNode> {
        match self.nodes.get_mut(node.0) {
            Some(Slot {
                kind: NodeKind::Primitive(prim),
                ..
            }) => Ok(prim),
            _ => Err(GraphError::UnknownNode {
                node: node.to_string(),
            }),
        }
    }

    fn check_sink_pad(&self, sink: NodeId, pad: Pad) -> Result<()> {
        let accepts = match (&self.slot(sink)?.kind, pad) {
            (NodeKind::InputProxy, _) => false,
            (NodeKind::OutputProxy, Pad::Input) => true,
            (NodeKind::OutputProxy, Pad::Aux) => false,
            (NodeKind::Primitive(_), Pad::Input) => true,
            (NodeKind::Primitive(prim), Pad::Aux) => prim.has_aux(),
        };
        if accepts {
            Ok(())
        } else {
            Err(GraphError::NoSuchPad {
                node: sink.to_string(),
                pad: pad.to_string(),
            })
        }
    }
}

impl GraphHost for SubGraph {
    fn input_proxy(&self) -> NodeId {
        INPUT_PROXY
    }

    fn output_proxy(&self) -> NodeId {
        OUTPUT_PROXY
    }

    fn new_child(&mut self, operation: &str) -> Result<NodeId> {
        let node = self.library.get(operation)?.instantiate();
        let id = NodeId(self.nodes.len());
        self.nodes.push(Slot::new(NodeKind::Primitive(node)));
        debug!("Created {} as {}", operation, id);
        Ok(id)
    }

    fn set_param(&mut self, node: NodeId, key: &str, value: &ParamValue) -> Result<()> {
        self.primitive_mut(node)?.set_param(key, value.clone())
    }

    fn param_spec(&self, node: NodeId, key: &str) -> Result<&ParamSpec> {
        match &self.slot(node)?.kind {
            NodeKind::Primitive(prim) => {
                prim.params()
                    .spec(key)
                    .ok_or_else(|| GraphError::UnknownParameter {
                        name: format!("{}.{}", node, key),
                    })
            }
            _ => Err(GraphError::UnknownParameter {
                name: format!("{}.{}", node, key),
            }),
        }
    }

    fn connect(&mut self, source: NodeId, sink: NodeId, pad: Pad) -> Result<()> {
        if matches!(self.slot(source)?.kind, NodeKind::OutputProxy) {
            return Err(GraphError::NoSuchPad {
                node: source.to_string(),
                pad: "output".to_string(),
            });
        }
        self.check_sink_pad(sink, pad)?;
        if let Some(previous) = self.edges.insert((sink, pad), source) {
            if previous != source {
                debug!("Relinked {}:{} from {} to {}", sink, pad, previous, source);
            }
        }
        Ok(())
    }

    fn disconnect(&mut self, sink: NodeId, pad: Pad) -> Result<()> {
        self.slot(sink)?;
        if let Some(previous) = self.edges.remove(&(sink, pad)) {
            debug!("Disconnected {}:{} from {}", sink, pad, previous);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::link_many;
    use crate::ops::{OP_HUE_CHROMA, OP_LONG_SHADOW, OP_SRC_ATOP};

    fn graph() -> SubGraph {
        SubGraph::new(OperationLibrary::with_defaults())
    }

    #[test]
    fn test_new_has_only_proxies() {
        let g = graph();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.node_label(g.input_proxy()), Some("input"));
        assert_eq!(g.node_label(g.output_proxy()), Some("output"));
        assert!(g.edges().is_empty());
    }

    #[test]
    fn test_link_many_and_chain() {
        let mut g = graph();
        let ls = g.new_child(OP_LONG_SHADOW).unwrap();
        let hc = g.new_child(OP_HUE_CHROMA).unwrap();
        let (input, output) = (g.input_proxy(), g.output_proxy());

        link_many(&mut g, &[input, ls, hc, output]).unwrap();

        assert_eq!(g.chain_to_output(), vec![input, ls, hc, output]);
        assert_eq!(g.edges().len(), 3);
    }

    #[test]
    fn test_connect_replaces_source() {
        let mut g = graph();
        let a = g.new_child(OP_LONG_SHADOW).unwrap();
        let b = g.new_child(OP_LONG_SHADOW).unwrap();
        let out = g.output_proxy();

        g.connect(a, out, Pad::Input).unwrap();
        g.connect(b, out, Pad::Input).unwrap();

        assert_eq!(g.source_of(out, Pad::Input), Some(b));
        assert_eq!(g.edges().len(), 1);
    }

    #[test]
    fn test_aux_only_on_compositor() {
        let mut g = graph();
        let ls = g.new_child(OP_LONG_SHADOW).unwrap();
        let atop = g.new_child(OP_SRC_ATOP).unwrap();
        let input = g.input_proxy();

        let err = g.connect(input, ls, Pad::Aux).unwrap_err();
        assert_eq!(err.error_code(), "NO_SUCH_PAD");

        g.connect(ls, atop, Pad::Aux).unwrap();
        assert_eq!(g.source_of(atop, Pad::Aux), Some(ls));
    }

    #[test]
    fn test_proxy_direction_enforced() {
        let mut g = graph();
        let ls = g.new_child(OP_LONG_SHADOW).unwrap();
        let (input, output) = (g.input_proxy(), g.output_proxy());

        assert!(g.connect(ls, input, Pad::Input).is_err());
        assert!(g.connect(output, ls, Pad::Input).is_err());
    }

    #[test]
    fn test_set_param_uses_target_range() {
        let mut g = graph();
        let hc = g.new_child(OP_HUE_CHROMA).unwrap();

        g.set_param(hc, "chroma", &ParamValue::Double(25.0)).unwrap();
        assert_eq!(g.param(hc, "chroma"), Some(&ParamValue::Double(25.0)));

        let err = g
            .set_param(hc, "chroma", &ParamValue::Double(250.0))
            .unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_unknown_nodes() {
        let mut g = graph();
        let bogus = NodeId(42);
        assert_eq!(g.new_child("gegl:nope").unwrap_err().error_code(), "UNKNOWN_OPERATION");
        assert_eq!(
            g.set_param(bogus, "x", &ParamValue::Bool(true))
                .unwrap_err()
                .error_code(),
            "UNKNOWN_NODE"
        );
        assert!(g.disconnect(bogus, Pad::Input).is_err());
        assert!(g.param_spec(g.input_proxy(), "angle").is_err());
    }

    #[test]
    fn test_disconnect() {
        let mut g = graph();
        let ls = g.new_child(OP_LONG_SHADOW).unwrap();
        let input = g.input_proxy();
        g.connect(input, ls, Pad::Input).unwrap();

        g.disconnect(ls, Pad::Input).unwrap();
        assert_eq!(g.source_of(ls, Pad::Input), None);
        // Disconnecting an empty pad is fine
        g.disconnect(ls, Pad::Input).unwrap();
    }

    #[test]
    fn test_to_json_lists_nodes_and_edges() {
        let mut g = graph();
        let ls = g.new_child(OP_LONG_SHADOW).unwrap();
        let input = g.input_proxy();
        g.connect(input, ls, Pad::Input).unwrap();

        let dump = g.to_json();
        assert_eq!(dump["nodes"].as_array().unwrap().len(), 3);
        assert_eq!(dump["nodes"][2]["operation"], OP_LONG_SHADOW);
        assert_eq!(dump["nodes"][2]["params"]["style"], "finite");
        assert_eq!(dump["edges"][0]["pad"], "input");
    }
}
