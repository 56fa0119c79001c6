//! Composite node lifecycle
//!
//! The host drives two callbacks: attach, exactly once, and update,
//! whenever a parameter changes. The node is either `Uninitialized` or
//! `Ready`; update is a no-op in the first state and pure rewiring in the
//! second.

use log::{debug, info};

use super::{AliasTable, OperationKeys};
use crate::config::Preset;
use crate::error::{GraphError, Result};
use crate::graph::{GraphHost, SubGraph};
use crate::ops::OperationLibrary;
use crate::params::{ParamSet, ParamValue};

/// What a meta-operation hands back once its sub-graph exists
#[derive(Debug)]
pub struct Attached<S> {
    /// Handles kept for rewiring
    pub state: S,
    pub aliases: AliasTable,
}

/// A filter defined entirely by a sub-graph of primitive operations
pub trait MetaOperation {
    /// Sub-node handles the operation needs for rewiring
    type State;

    /// Registration metadata
    fn keys(&self) -> &OperationKeys;

    /// Declare the parameter set, every value at its default
    fn declare(&self) -> ParamSet;

    /// Create the child nodes, wire the default topology, and build the
    /// alias table
    fn attach(&self, host: &mut dyn GraphHost) -> Result<Attached<Self::State>>;

    /// Re-link edges for the current parameter values
    ///
    /// Must not create nodes or write sub-node parameters.
    fn update(&self, state: &Self::State, host: &mut dyn GraphHost, params: &ParamSet)
        -> Result<()>;
}

enum Lifecycle<S> {
    Uninitialized,
    Ready { state: S, aliases: AliasTable },
}

/// A meta-operation together with its parameters and owned sub-graph
///
/// Dropping the node drops every child node with it.
pub struct CompositeNode<M: MetaOperation> {
    operation: M,
    params: ParamSet,
    graph: SubGraph,
    lifecycle: Lifecycle<M::State>,
}

impl<M: MetaOperation> CompositeNode<M> {
    /// Create an unattached node whose children come from `library`
    pub fn new(operation: M, library: OperationLibrary) -> Self {
        let params = operation.declare();
        Self {
            operation,
            params,
            graph: SubGraph::new(library),
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    /// Create an unattached node backed by the default primitive library
    pub fn with_default_library(operation: M) -> Self {
        Self::new(operation, OperationLibrary::with_defaults())
    }

    pub fn keys(&self) -> &OperationKeys {
        self.operation.keys()
    }

    pub fn params(&self) -> &ParamSet {
        &self.params
    }

    pub fn graph(&self) -> &SubGraph {
        &self.graph
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Ready { .. })
    }

    /// Sub-node handles, once attached
    pub fn state(&self) -> Option<&M::State> {
        match &self.lifecycle {
            Lifecycle::Ready { state, .. } => Some(state),
            Lifecycle::Uninitialized => None,
        }
    }

    pub fn aliases(&self) -> Option<&AliasTable> {
        match &self.lifecycle {
            Lifecycle::Ready { aliases, .. } => Some(aliases),
            Lifecycle::Uninitialized => None,
        }
    }

    /// Names of parameters flagged as changing the output extent
    pub fn output_extent_params(&self) -> Vec<&str> {
        self.params
            .specs()
            .filter(|s| s.affects_output_extent())
            .map(|s| s.name.as_str())
            .collect()
    }

    /// Build the sub-graph
    ///
    /// Forwards every current parameter value through the alias table and
    /// wires the topology for the current values. A second call fails with
    /// `AlreadyAttached` and leaves the node untouched; a failed call
    /// leaves it unattached with an empty sub-graph.
    pub fn attach(&mut self) -> Result<()> {
        if self.is_ready() {
            return Err(GraphError::AlreadyAttached {
                name: self.keys().name.to_string(),
            });
        }

        match self.build() {
            Ok((state, aliases)) => {
                info!(
                    "Attached {} with {} nodes and {} redirects",
                    self.keys().name,
                    self.graph.node_count(),
                    aliases.len()
                );
                self.lifecycle = Lifecycle::Ready { state, aliases };
                Ok(())
            }
            Err(e) => {
                self.graph.clear();
                Err(e)
            }
        }
    }

    fn build(&mut self) -> Result<(M::State, AliasTable)> {
        let Attached { state, aliases } = self.operation.attach(&mut self.graph)?;
        aliases.validate(&self.params, &self.graph)?;
        aliases.apply_all(&self.params, &mut self.graph)?;
        self.operation
            .update(&state, &mut self.graph, &self.params)?;
        Ok((state, aliases))
    }

    /// Re-link the sub-graph for the current parameter values
    ///
    /// Before attach this does nothing and succeeds.
    pub fn update(&mut self) -> Result<()> {
        match &self.lifecycle {
            Lifecycle::Uninitialized => {
                debug!("Update of {} before attach ignored", self.operation.keys().name);
                Ok(())
            }
            Lifecycle::Ready { state, .. } => {
                self.operation
                    .update(state, &mut self.graph, &self.params)
            }
        }
    }

    /// Set a parameter and propagate it
    ///
    /// The value is checked against this node's declaration, forwarded
    /// unchanged to every aliased sub-node parameter, stored, and then the
    /// sub-graph is re-linked. Before attach the value is only stored.
    pub fn set(&mut self, name: &str, value: impl Into<ParamValue>) -> Result<()> {
        let value = value.into();
        let spec = self
            .params
            .spec(name)
            .ok_or_else(|| GraphError::UnknownParameter {
                name: name.to_string(),
            })?;
        spec.validate(&value)?;

        if let Lifecycle::Ready { aliases, .. } = &self.lifecycle {
            aliases.apply(name, &value, &mut self.graph)?;
        }
        self.params.set(name, value)?;
        self.update()
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    /// Set every value from a preset, in preset order
    ///
    /// Stops at the first rejected value; earlier values stay applied.
    pub fn apply_preset(&mut self, preset: &Preset) -> Result<()> {
        for (name, value) in preset.iter() {
            self.set(name, value.clone())?;
        }
        Ok(())
    }
}
