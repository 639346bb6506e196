//! Veridex Schema Layer
//!
//! The schema-side collaborator of the credential definition registry:
//! - Schema records (attribute sets credential definitions are based on)
//! - An in-memory, append-only schema registry
//! - The `SchemaResolver` contract the registry consumes

pub mod error;
pub mod registry;
pub mod resolver;
pub mod schema;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
pub use resolver::{LocalSchemaResolver, SchemaResolver};
pub use schema::Schema;
