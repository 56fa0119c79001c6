//! Parameter declarations
//!
//! Declarations mirror what a host UI needs to draw a control: a label,
//! a description, the value kind with its range or options, and a few
//! free-form UI hints.

use serde::{Deserialize, Serialize};

use super::ParamValue;
use crate::error::{GraphError, Result};

/// UI role hint marking a parameter that changes the output bounding extent
pub const ROLE_OUTPUT_EXTENT: &str = "output-extent";

/// One selectable value of an enum parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumOption {
    /// Machine name, used in values and presets
    pub nick: String,
    /// Display label; an empty label is hidden by the host UI
    pub label: String,
}

impl EnumOption {
    pub fn new(nick: &str, label: &str) -> Self {
        Self {
            nick: nick.to_string(),
            label: label.to_string(),
        }
    }
}

/// Kind of a parameter, with its valid range or options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParamKind {
    Double {
        min: f64,
        max: f64,
        ui_min: f64,
        ui_max: f64,
        /// Non-linear slider scaling; 1.0 is linear
        ui_gamma: f64,
    },
    Bool,
    Enum { options: Vec<EnumOption> },
}

impl ParamKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParamKind::Double { .. } => "double",
            ParamKind::Bool => "bool",
            ParamKind::Enum { .. } => "enum",
        }
    }

    /// Whether this kind accepts the given enum nick
    pub fn has_option(&self, nick: &str) -> bool {
        match self {
            ParamKind::Enum { options } => options.iter().any(|o| o.nick == nick),
            _ => false,
        }
    }
}

/// Declaration of a single parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    pub label: String,
    pub description: String,
    pub kind: ParamKind,
    pub default: ParamValue,
    /// Ordered UI hints such as `unit`, `direction` and `role`
    pub ui_meta: Vec<(String, String)>,
}

impl ParamSpec {
    /// Declare a double parameter with a hard value range
    ///
    /// The UI range starts out equal to the value range.
    pub fn double(name: &str, label: &str, default: f64, min: f64, max: f64) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            description: String::new(),
            kind: ParamKind::Double {
                min,
                max,
                ui_min: min,
                ui_max: max,
                ui_gamma: 1.0,
            },
            default: ParamValue::Double(default),
            ui_meta: Vec::new(),
        }
    }

    pub fn boolean(name: &str, label: &str, default: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            description: String::new(),
            kind: ParamKind::Bool,
            default: ParamValue::Bool(default),
            ui_meta: Vec::new(),
        }
    }

    pub fn enumeration(name: &str, label: &str, options: Vec<EnumOption>, default: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            description: String::new(),
            kind: ParamKind::Enum { options },
            default: ParamValue::Enum(default.to_string()),
            ui_meta: Vec::new(),
        }
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Narrow the slider range; ignored for non-double parameters
    pub fn ui_range(mut self, min: f64, max: f64) -> Self {
        if let ParamKind::Double { ui_min, ui_max, .. } = &mut self.kind {
            *ui_min = min;
            *ui_max = max;
        }
        self
    }

    pub fn ui_gamma(mut self, gamma: f64) -> Self {
        if let ParamKind::Double { ui_gamma, .. } = &mut self.kind {
            *ui_gamma = gamma;
        }
        self
    }

    pub fn ui_meta(mut self, key: &str, value: &str) -> Self {
        self.ui_meta.push((key.to_string(), value.to_string()));
        self
    }

    /// Look up a UI hint by key
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.ui_meta
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether changing this parameter changes the output bounding extent
    pub fn affects_output_extent(&self) -> bool {
        self.meta("role") == Some(ROLE_OUTPUT_EXTENT)
    }

    /// Check a value against this declaration
    ///
    /// Doubles outside the declared range are rejected rather than clamped.
    pub fn validate(&self, value: &ParamValue) -> Result<()> {
        match (&self.kind, value) {
            (ParamKind::Double { min, max, .. }, ParamValue::Double(v)) => {
                if !v.is_finite() || *v < *min || *v > *max {
                    return Err(GraphError::OutOfRange {
                        name: self.name.clone(),
                        value: *v,
                        min: *min,
                        max: *max,
                    });
                }
                Ok(())
            }
            (ParamKind::Bool, ParamValue::Bool(_)) => Ok(()),
            (ParamKind::Enum { .. }, ParamValue::Enum(nick)) => {
                if self.kind.has_option(nick) {
                    Ok(())
                } else {
                    Err(GraphError::UnknownEnumValue {
                        name: self.name.clone(),
                        nick: nick.clone(),
                    })
                }
            }
            (kind, value) => Err(GraphError::TypeMismatch {
                name: self.name.clone(),
                expected: kind.kind_name(),
                got: format!("{} {}", value.kind_name(), value),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_range_checks() {
        let spec = ParamSpec::double("length", "Length", 40.0, 0.0, 55.0);
        assert!(spec.validate(&ParamValue::Double(0.0)).is_ok());
        assert!(spec.validate(&ParamValue::Double(55.0)).is_ok());

        let err = spec.validate(&ParamValue::Double(55.5)).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");

        let err = spec.validate(&ParamValue::Double(f64::NAN)).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_type_mismatch() {
        let spec = ParamSpec::boolean("ls2", "Fading", false);
        let err = spec.validate(&ParamValue::Double(1.0)).unwrap_err();
        assert_eq!(err.error_code(), "TYPE_MISMATCH");
    }

    #[test]
    fn test_enum_options() {
        let spec = ParamSpec::enumeration(
            "mode",
            "Mode",
            vec![EnumOption::new("a", "A"), EnumOption::new("b", "")],
            "a",
        );
        assert!(spec.validate(&ParamValue::from("b")).is_ok());
        let err = spec.validate(&ParamValue::from("c")).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_ENUM_VALUE");
    }

    #[test]
    fn test_builders_and_meta() {
        let spec = ParamSpec::double("lengthblur", "Blur", 100.0, 95.0, 200.0)
            .ui_range(95.0, 150.0)
            .ui_gamma(1.5)
            .ui_meta("unit", "pixel-distance")
            .ui_meta("role", ROLE_OUTPUT_EXTENT);

        assert_eq!(spec.meta("unit"), Some("pixel-distance"));
        assert!(spec.affects_output_extent());
        match spec.kind {
            ParamKind::Double {
                ui_max, ui_gamma, ..
            } => {
                assert_eq!(ui_max, 150.0);
                assert_eq!(ui_gamma, 1.5);
            }
            _ => panic!("expected double"),
        }
    }
}
