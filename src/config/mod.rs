//! Parameter presets
//!
//! A preset is a JSON object of parameter names to values:
//!
//! ```json
//! { "angle": -30.0, "ls2": true, "composition": "shadow-plus-image" }
//! ```
//!
//! Entries keep the order they were read or inserted in.

use std::fs;
use std::path::Path;

use log::info;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GraphError, Result};
use crate::params::{ParamSet, ParamValue};

/// Ordered parameter assignments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preset {
    entries: Vec<(String, ParamValue)>,
}

impl Preset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture every current value of a parameter set
    pub fn from_params(params: &ParamSet) -> Self {
        Self {
            entries: params
                .values()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        }
    }

    /// Add or replace an assignment; a replaced entry keeps its position
    pub fn insert(&mut self, name: &str, value: ParamValue) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a preset from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading preset: {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Write the preset as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json_string()?)?;
        info!("Saved preset: {}", path.display());
        Ok(())
    }
}

impl Serialize for Preset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Preset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct PresetVisitor;

        impl<'de> Visitor<'de> for PresetVisitor {
            type Value = Preset;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("an object of parameter names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Preset, A::Error> {
                let mut preset = Preset::new();
                while let Some((name, value)) = access.next_entry::<String, ParamValue>()? {
                    preset.insert(&name, value);
                }
                Ok(preset)
            }
        }

        deserializer.deserialize_map(PresetVisitor)
    }
}

/// Parse a `name=value` override
///
/// `true`/`false` become booleans, anything numeric a double, and the rest
/// an enum nick.
pub fn parse_assignment(input: &str) -> Result<(String, ParamValue)> {
    let (name, raw) = input
        .split_once('=')
        .map(|(n, v)| (n.trim(), v.trim()))
        .filter(|(n, v)| !n.is_empty() && !v.is_empty())
        .ok_or_else(|| GraphError::InvalidAssignment {
            input: input.to_string(),
        })?;

    let value = match raw {
        "true" => ParamValue::Bool(true),
        "false" => ParamValue::Bool(false),
        _ => match raw.parse::<f64>() {
            Ok(v) => ParamValue::Double(v),
            Err(_) => ParamValue::Enum(raw.to_string()),
        },
    };
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamSpec;
    use test_case::test_case;

    #[test_case("angle=-30", "angle", ParamValue::Double(-30.0) ; "negative double")]
    #[test_case("lengthblur = 150.5", "lengthblur", ParamValue::Double(150.5) ; "spaces")]
    #[test_case("ls2=true", "ls2", ParamValue::Bool(true) ; "bool")]
    #[test_case("style=fading-fixed-length", "style", ParamValue::Enum("fading-fixed-length".into()) ; "enum nick")]
    fn test_parse_assignment(input: &str, name: &str, value: ParamValue) {
        assert_eq!(parse_assignment(input).unwrap(), (name.to_string(), value));
    }

    #[test_case("angle" ; "no equals")]
    #[test_case("=5" ; "no name")]
    #[test_case("angle=" ; "no value")]
    fn test_parse_assignment_invalid(input: &str) {
        let err = parse_assignment(input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ASSIGNMENT");
    }

    #[test]
    fn test_json_keeps_order() {
        let preset =
            Preset::from_json_str(r#"{"ls2": true, "angle": 10, "composition": "shadow-only"}"#)
                .unwrap();
        let names: Vec<&str> = preset.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["ls2", "angle", "composition"]);
        assert_eq!(preset.get("angle"), Some(&ParamValue::Double(10.0)));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut preset = Preset::new();
        preset.insert("a", ParamValue::Bool(true));
        preset.insert("b", ParamValue::Bool(true));
        preset.insert("a", ParamValue::Bool(false));
        assert_eq!(preset.len(), 2);
        assert_eq!(preset.iter().next(), Some(("a", &ParamValue::Bool(false))));
    }

    #[test]
    fn test_from_params() {
        let params = ParamSet::new(vec![ParamSpec::double("x", "X", 1.0, 0.0, 2.0)]);
        let preset = Preset::from_params(&params);
        assert_eq!(preset.get("x"), Some(&ParamValue::Double(1.0)));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(Preset::from_json_str("[1, 2]").is_err());
    }
}
