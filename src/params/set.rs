//! Ordered parameter collections

use super::{ParamSpec, ParamValue};
use crate::error::{GraphError, Result};

#[derive(Debug, Clone)]
struct ParamEntry {
    spec: ParamSpec,
    value: ParamValue,
}

/// An ordered set of declared parameters and their current values
///
/// Every value held here has passed [`ParamSpec::validate`], so readers
/// can rely on the declared kind.
#[derive(Debug, Clone)]
pub struct ParamSet {
    entries: Vec<ParamEntry>,
}

impl ParamSet {
    /// Create a set from declarations, each starting at its default
    pub fn new(specs: Vec<ParamSpec>) -> Self {
        let entries = specs
            .into_iter()
            .map(|spec| ParamEntry {
                value: spec.default.clone(),
                spec,
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declarations in declaration order
    pub fn specs(&self) -> impl Iterator<Item = &ParamSpec> {
        self.entries.iter().map(|e| &e.spec)
    }

    pub fn spec(&self, name: &str) -> Option<&ParamSpec> {
        self.entries
            .iter()
            .find(|e| e.spec.name == name)
            .map(|e| &e.spec)
    }

    /// Current values in declaration order
    pub fn values(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries
            .iter()
            .map(|e| (e.spec.name.as_str(), &e.value))
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|e| e.spec.name == name)
            .map(|e| &e.value)
    }

    /// Set a value after validating it against the declaration
    ///
    /// On error the previous value is kept.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.spec.name == name)
            .ok_or_else(|| GraphError::UnknownParameter {
                name: name.to_string(),
            })?;
        entry.spec.validate(&value)?;
        entry.value = value;
        Ok(())
    }

    pub fn get_double(&self, name: &str) -> Result<f64> {
        let value = self.require(name)?;
        value.as_f64().ok_or_else(|| mismatch(name, "double", value))
    }

    pub fn get_bool(&self, name: &str) -> Result<bool> {
        let value = self.require(name)?;
        value.as_bool().ok_or_else(|| mismatch(name, "bool", value))
    }

    pub fn get_enum(&self, name: &str) -> Result<&str> {
        let value = self.require(name)?;
        value.as_enum().ok_or_else(|| mismatch(name, "enum", value))
    }

    /// Restore every parameter to its declared default
    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.value = entry.spec.default.clone();
        }
    }

    fn require(&self, name: &str) -> Result<&ParamValue> {
        self.get(name).ok_or_else(|| GraphError::UnknownParameter {
            name: name.to_string(),
        })
    }
}

fn mismatch(name: &str, expected: &'static str, value: &ParamValue) -> GraphError {
    GraphError::TypeMismatch {
        name: name.to_string(),
        expected,
        got: value.kind_name().to_string(),
    }
}
