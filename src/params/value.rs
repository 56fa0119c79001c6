//! Parameter values

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single parameter value
///
/// Enum values travel as their nick (e.g. `"shadow-only"`), so the same
/// value can be forwarded to any parameter that declares that nick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Double(f64),
    Enum(String),
}

impl ParamValue {
    /// Name of the value's kind, for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParamValue::Bool(_) => "bool",
            ParamValue::Double(_) => "double",
            ParamValue::Enum(_) => "enum",
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&str> {
        match self {
            ParamValue::Enum(nick) => Some(nick.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(v) => write!(f, "{}", v),
            ParamValue::Double(v) => write!(f, "{}", v),
            ParamValue::Enum(nick) => write!(f, "{}", nick),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Double(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(nick: &str) -> Self {
        ParamValue::Enum(nick.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_json() {
        let v: ParamValue = serde_json::from_str("40").unwrap();
        assert_eq!(v, ParamValue::Double(40.0));

        let v: ParamValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, ParamValue::Bool(true));

        let v: ParamValue = serde_json::from_str("\"shadow-only\"").unwrap();
        assert_eq!(v.as_enum(), Some("shadow-only"));
    }

    #[test]
    fn test_accessors_reject_other_kinds() {
        let v = ParamValue::from(1.5);
        assert_eq!(v.as_f64(), Some(1.5));
        assert_eq!(v.as_bool(), None);
        assert_eq!(v.as_enum(), None);
        assert_eq!(v.kind_name(), "double");
    }
}
