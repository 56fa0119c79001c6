//! Registry of primitive operations
//!
//! Ships the descriptors of the primitives the composite filter is built
//! from. Hosts with a richer library can register more.

use std::collections::HashMap;

use super::OperationDescriptor;
use crate::error::{GraphError, Result};
use crate::params::{Composition, ParamSpec, ShadowStyle, ROLE_OUTPUT_EXTENT};

pub const OP_LONG_SHADOW: &str = "gegl:long-shadow";
pub const OP_MOTION_BLUR_LINEAR: &str = "gegl:motion-blur-linear";
pub const OP_SRC_ATOP: &str = "gegl:src-atop";
pub const OP_HUE_CHROMA: &str = "gegl:hue-chroma";

/// Registry of available primitive operations
#[derive(Debug, Clone)]
pub struct OperationLibrary {
    operations: HashMap<String, OperationDescriptor>,
}

impl OperationLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self {
            operations: HashMap::new(),
        }
    }

    /// Create a library with the long shadow, blur, atop and hue/chroma primitives
    pub fn with_defaults() -> Self {
        let mut library = Self::new();
        library.register(long_shadow());
        library.register(motion_blur_linear());
        library.register(src_atop());
        library.register(hue_chroma());
        library
    }

    /// Register a descriptor, replacing any previous one with the same name
    pub fn register(&mut self, descriptor: OperationDescriptor) {
        self.operations.insert(descriptor.name.clone(), descriptor);
    }

    pub fn get(&self, name: &str) -> Result<&OperationDescriptor> {
        self.operations
            .get(name)
            .ok_or_else(|| GraphError::UnknownOperation {
                operation: name.to_string(),
            })
    }

    pub fn has_operation(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// List registered operation names, sorted
    pub fn list_operations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operations.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for OperationLibrary {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn long_shadow() -> OperationDescriptor {
    OperationDescriptor::new(
        OP_LONG_SHADOW,
        vec![
            ParamSpec::enumeration(
                "style",
                "Style",
                ShadowStyle::options(),
                ShadowStyle::Finite.nick(),
            )
            .describe("Shadow style")
            .ui_meta("role", ROLE_OUTPUT_EXTENT),
            ParamSpec::double("angle", "Angle", 45.0, -180.0, 180.0)
                .describe("Shadow angle")
                .ui_meta("unit", "degree")
                .ui_meta("direction", "cw"),
            ParamSpec::double("length", "Length", 100.0, 0.0, f64::MAX)
                .describe("Shadow length")
                .ui_range(0.0, 1000.0)
                .ui_meta("role", ROLE_OUTPUT_EXTENT),
            ParamSpec::double("midpoint", "Midpoint", 100.0, 0.0, f64::MAX)
                .describe("Shadow fade midpoint")
                .ui_range(0.0, 1000.0),
            ParamSpec::enumeration(
                "composition",
                "Composition",
                Composition::options(),
                Composition::ShadowPlusImage.nick(),
            )
            .describe("Output composition")
            .ui_meta("role", ROLE_OUTPUT_EXTENT),
        ],
    )
}

fn motion_blur_linear() -> OperationDescriptor {
    OperationDescriptor::new(
        OP_MOTION_BLUR_LINEAR,
        vec![
            ParamSpec::double("length", "Length", 10.0, 0.0, 1000.0)
                .describe("Length of blur in pixels")
                .ui_range(0.0, 300.0)
                .ui_gamma(1.5)
                .ui_meta("unit", "pixel-distance"),
            ParamSpec::double("angle", "Angle", 0.0, -180.0, 180.0)
                .describe("Angle of blur in degrees")
                .ui_meta("unit", "degree")
                .ui_meta("direction", "cw"),
        ],
    )
}

fn src_atop() -> OperationDescriptor {
    OperationDescriptor::new(OP_SRC_ATOP, Vec::new()).with_aux()
}

fn hue_chroma() -> OperationDescriptor {
    OperationDescriptor::new(
        OP_HUE_CHROMA,
        vec![
            ParamSpec::double("hue", "Hue", 0.0, -180.0, 180.0).describe("Hue adjustment"),
            ParamSpec::double("chroma", "Chroma", 0.0, -100.0, 100.0)
                .describe("Chroma adjustment"),
            ParamSpec::double("lightness", "Lightness", 0.0, -100.0, 100.0)
                .describe("Lightness adjustment"),
        ],
    )
}
