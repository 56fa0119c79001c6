//! Operation descriptors and instantiated primitive nodes

use crate::error::Result;
use crate::params::{ParamSet, ParamSpec, ParamValue};

/// What the host operation library knows about a primitive
#[derive(Debug, Clone)]
pub struct OperationDescriptor {
    /// Operation identifier, e.g. `gegl:long-shadow`
    pub name: String,
    pub params: Vec<ParamSpec>,
    /// Whether the operation reads a secondary (aux) input
    pub has_aux: bool,
}

impl OperationDescriptor {
    pub fn new(name: &str, params: Vec<ParamSpec>) -> Self {
        Self {
            name: name.to_string(),
            params,
            has_aux: false,
        }
    }

    pub fn with_aux(mut self) -> Self {
        self.has_aux = true;
        self
    }

    /// Create a fresh instance with every parameter at its default
    pub fn instantiate(&self) -> PrimitiveNode {
        PrimitiveNode {
            operation: self.name.clone(),
            has_aux: self.has_aux,
            params: ParamSet::new(self.params.clone()),
        }
    }
}

/// An instance of a primitive operation inside a sub-graph
///
/// Parameter writes are checked against the primitive's own declared
/// ranges, which is the only clamping a forwarded value is subject to.
#[derive(Debug, Clone)]
pub struct PrimitiveNode {
    operation: String,
    has_aux: bool,
    params: ParamSet,
}

impl PrimitiveNode {
    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn has_aux(&self) -> bool {
        self.has_aux
    }

    pub fn params(&self) -> &ParamSet {
        &self.params
    }

    pub fn set_param(&mut self, key: &str, value: ParamValue) -> Result<()> {
        self.params.set(key, value)
    }

    pub fn get_param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantiate_uses_defaults() {
        let desc = OperationDescriptor::new(
            "test:scale",
            vec![ParamSpec::double("factor", "Factor", 2.0, 0.0, 10.0)],
        );
        let mut node = desc.instantiate();
        assert_eq!(node.operation(), "test:scale");
        assert!(!node.has_aux());
        assert_eq!(node.get_param("factor"), Some(&ParamValue::Double(2.0)));

        node.set_param("factor", ParamValue::Double(3.0)).unwrap();
        assert!(node.set_param("factor", ParamValue::Double(11.0)).is_err());
        assert_eq!(node.get_param("factor"), Some(&ParamValue::Double(3.0)));
    }
}
