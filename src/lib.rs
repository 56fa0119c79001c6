//! Long Shadow PD - Extrusion via Long Shadow
//!
//! A composite node-graph filter: one parameterized node backed by a
//! small fixed sub-graph of primitive operations (long shadow, linear
//! motion blur, atop compositing, hue/chroma).
//!
//! # Architecture
//!
//! - `params`: parameter declarations, values and ordered sets
//! - `ops`: descriptors of the primitive operations the host provides
//! - `graph`: the host capability interface and an in-process sub-graph
//! - `meta`: alias tables and the attach/update lifecycle of composite nodes
//! - `filters`: the long-shadow-pd filter itself
//! - `config`: JSON parameter presets

pub mod cli;
pub mod config;
pub mod error;
pub mod filters;
pub mod graph;
pub mod meta;
pub mod ops;
pub mod params;

pub use error::{GraphError, Result};
