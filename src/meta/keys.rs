//! Registration metadata

use serde::Serialize;

/// Keys a meta-operation registers with the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationKeys {
    /// Unique operation identifier
    pub name: &'static str,
    pub title: &'static str,
    /// Colon-separated category tags
    pub categories: &'static str,
    /// Hash of the reference render, tracked by the host's regression tests
    pub reference_hash: &'static str,
    pub description: &'static str,
}
