//! Composite (meta) operations
//!
//! A meta-operation owns a small sub-graph of primitive nodes, redirects
//! its own parameters onto theirs through an alias table, and rewires the
//! sub-graph when its parameters change.

mod alias;
mod composite;
mod keys;
mod schema;

pub use alias::{Alias, AliasTable};
pub use composite::{Attached, CompositeNode, MetaOperation};
pub use keys::OperationKeys;
pub use schema::{schema_fingerprint, schema_json};
