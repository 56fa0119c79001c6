//! Schema dumps and fingerprints

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::params::{ParamSet, ParamSpec};

/// Declared parameters as a JSON array, in declaration order
pub fn schema_json(params: &ParamSet) -> Result<Value> {
    let specs: Vec<&ParamSpec> = params.specs().collect();
    Ok(serde_json::to_value(specs)?)
}

/// SHA-256 over the serialized schema
///
/// Changes whenever a name, kind, range, option or default changes, which
/// flags presets and reference renders that need revisiting.
pub fn schema_fingerprint(params: &ParamSet) -> Result<String> {
    let specs: Vec<&ParamSpec> = params.specs().collect();
    let bytes = serde_json::to_vec(&specs)?;
    let hash = Sha256::digest(&bytes);
    Ok(format!("{:x}", hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(max: f64) -> ParamSet {
        ParamSet::new(vec![ParamSpec::double("length", "Length", 40.0, 0.0, max)])
    }

    #[test]
    fn test_fingerprint_stable_and_sensitive() {
        let a = schema_fingerprint(&params(55.0)).unwrap();
        let b = schema_fingerprint(&params(55.0)).unwrap();
        let c = schema_fingerprint(&params(56.0)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_fingerprint_ignores_current_values() {
        let mut p = params(55.0);
        let before = schema_fingerprint(&p).unwrap();
        p.set("length", 10.0.into()).unwrap();
        assert_eq!(schema_fingerprint(&p).unwrap(), before);
    }

    #[test]
    fn test_schema_json_shape() {
        let json = schema_json(&params(55.0)).unwrap();
        assert_eq!(json[0]["name"], "length");
        assert_eq!(json[0]["kind"]["type"], "double");
        assert_eq!(json[0]["kind"]["max"], 55.0);
    }
}
