//! Parameter redirection table
//!
//! Built once when the sub-graph is created, then applied on every
//! parameter change. Values are forwarded unchanged; only the target's own
//! declared range can reject them.

use log::debug;
use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::{GraphHost, NodeId};
use crate::params::{ParamKind, ParamSet, ParamValue};

/// One redirect: composite parameter `source` drives `target.target_key`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alias {
    pub source: String,
    pub target: NodeId,
    pub target_key: String,
}

/// Mapping from composite parameters to sub-node parameters
///
/// A source may fan out to several targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AliasTable {
    aliases: Vec<Alias>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a redirect from `source` to `target.target_key`
    pub fn redirect(mut self, source: &str, target: NodeId, target_key: &str) -> Self {
        self.aliases.push(Alias {
            source: source.to_string(),
            target,
            target_key: target_key.to_string(),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alias> {
        self.aliases.iter()
    }

    /// Every redirect driven by `source`
    pub fn targets<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a Alias> + 'a {
        self.aliases.iter().filter(move |a| a.source == source)
    }

    /// Distinct source parameters, in first-redirect order
    pub fn sources(&self) -> Vec<&str> {
        let mut sources: Vec<&str> = Vec::new();
        for alias in &self.aliases {
            if !sources.contains(&alias.source.as_str()) {
                sources.push(&alias.source);
            }
        }
        sources
    }

    /// Check every redirect against the composite schema and the host
    ///
    /// Sources must be declared, targets must exist and declare the key
    /// with a compatible kind, and no target key may be driven twice.
    pub fn validate<H: GraphHost + ?Sized>(&self, params: &ParamSet, host: &H) -> Result<()> {
        for (index, alias) in self.aliases.iter().enumerate() {
            let invalid = |reason: String| GraphError::InvalidAlias {
                source_name: alias.source.clone(),
                target: alias.target.to_string(),
                target_key: alias.target_key.clone(),
                reason,
            };

            let source_spec = params
                .spec(&alias.source)
                .ok_or_else(|| invalid("source parameter is not declared".to_string()))?;
            let target_spec = host
                .param_spec(alias.target, &alias.target_key)
                .map_err(|e| invalid(e.to_string()))?;
            compatible(&source_spec.kind, &target_spec.kind).map_err(invalid)?;

            let duplicate = self.aliases[..index]
                .iter()
                .any(|a| a.target == alias.target && a.target_key == alias.target_key);
            if duplicate {
                return Err(invalid("target is already driven".to_string()));
            }
        }
        Ok(())
    }

    /// Forward one value to every target of `source`
    ///
    /// Every target checks the value against its own declaration before
    /// any is written, so a rejection leaves all targets unchanged.
    /// Returns the number of targets written; parameters without redirects
    /// forward nowhere.
    pub fn apply<H: GraphHost + ?Sized>(
        &self,
        source: &str,
        value: &ParamValue,
        host: &mut H,
    ) -> Result<usize> {
        for alias in self.targets(source) {
            host.param_spec(alias.target, &alias.target_key)?
                .validate(value)?;
        }

        let mut written = 0;
        for alias in self.targets(source) {
            host.set_param(alias.target, &alias.target_key, value)?;
            debug!(
                "{} = {} -> {}.{}",
                source, value, alias.target, alias.target_key
            );
            written += 1;
        }
        Ok(written)
    }

    /// Forward every aliased parameter's current value
    pub fn apply_all<H: GraphHost + ?Sized>(&self, params: &ParamSet, host: &mut H) -> Result<()> {
        for (name, value) in params.values() {
            self.apply(name, value, host)?;
        }
        Ok(())
    }
}

fn compatible(source: &ParamKind, target: &ParamKind) -> std::result::Result<(), String> {
    match (source, target) {
        (ParamKind::Double { .. }, ParamKind::Double { .. }) => Ok(()),
        (ParamKind::Bool, ParamKind::Bool) => Ok(()),
        (ParamKind::Enum { options }, ParamKind::Enum { .. }) => {
            match options.iter().find(|o| !target.has_option(&o.nick)) {
                Some(missing) => Err(format!("target does not accept '{}'", missing.nick)),
                None => Ok(()),
            }
        }
        (s, t) => Err(format!(
            "kind mismatch: {} -> {}",
            s.kind_name(),
            t.kind_name()
        )),
    }
}
