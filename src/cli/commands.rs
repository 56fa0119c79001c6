//! CLI Command Implementations
//!
//! Each command builds a fresh long-shadow-pd node and prints JSON.

use std::path::Path;

use log::info;
use serde_json::json;

use crate::config::{parse_assignment, Preset};
use crate::error::Result;
use crate::filters::LongShadowPd;
use crate::meta::{schema_fingerprint, schema_json, CompositeNode};

fn new_node() -> CompositeNode<LongShadowPd> {
    CompositeNode::with_default_library(LongShadowPd::new())
}

fn apply_overrides(node: &mut CompositeNode<LongShadowPd>, overrides: &[String]) -> Result<()> {
    for raw in overrides {
        let (name, value) = parse_assignment(raw)?;
        info!("Override {} = {}", name, value);
        node.set(&name, value)?;
    }
    Ok(())
}

/// Print the parameter schema.
pub fn schema() -> Result<()> {
    let node = new_node();
    println!("{}", serde_json::to_string_pretty(&schema_json(node.params())?)?);
    Ok(())
}

/// Print registration keys and the schema fingerprint.
pub fn info() -> Result<()> {
    let node = new_node();
    let out = json!({
        "keys": node.keys(),
        "schema_fingerprint": schema_fingerprint(node.params())?,
        "output_extent_params": node.output_extent_params(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

/// Attach a node, apply the preset and overrides, and print its sub-graph.
pub fn graph(preset: Option<&Path>, overrides: &[String]) -> Result<()> {
    let mut node = new_node();
    node.attach()?;

    if let Some(path) = preset {
        node.apply_preset(&Preset::load(path)?)?;
    }
    apply_overrides(&mut node, overrides)?;

    let g = node.graph();
    let chain: Vec<&str> = g
        .chain_to_output()
        .into_iter()
        .filter_map(|id| g.node_label(id))
        .collect();

    let out = json!({
        "params": Preset::from_params(node.params()),
        "active_chain": chain,
        "aliases": node.aliases(),
        "graph": g.to_json(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

/// Save default values, with overrides, as a preset file.
pub fn save_preset(path: &Path, overrides: &[String]) -> Result<()> {
    let mut node = new_node();
    apply_overrides(&mut node, overrides)?;
    Preset::from_params(node.params()).save(path)?;
    println!("Preset saved: {}", path.display());
    Ok(())
}
