//! Parameter schema and values
//!
//! A parameter set is fixed in shape once declared: names, kinds and
//! ranges never change, only the current values do.

mod set;
mod spec;
mod styles;
mod value;

pub use set::ParamSet;
pub use spec::{EnumOption, ParamKind, ParamSpec, ROLE_OUTPUT_EXTENT};
pub use styles::{Composition, ShadowStyle};
pub use value::ParamValue;
