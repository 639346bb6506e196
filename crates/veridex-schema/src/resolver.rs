use std::sync::Arc;

use veridex_core::SchemaId;

use crate::error::SchemaError;
use crate::registry::SchemaRegistry;
use crate::schema::Schema;

/// Contract consumed by the registry: resolve a schema id to its record.
///
/// Resolution is synchronous and in-process; the only structured failure is
/// [`SchemaError::NotFound`].
pub trait SchemaResolver: Send + Sync {
    /// Resolve a schema id to its schema.
    fn resolve(&self, id: &SchemaId) -> Result<Schema, SchemaError>;
}

/// Resolves schemas from the local in-memory [`SchemaRegistry`].
pub struct LocalSchemaResolver {
    registry: Arc<SchemaRegistry>,
}

impl LocalSchemaResolver {
    /// Create a new local resolver backed by a schema registry.
    pub fn new(registry: Arc<SchemaRegistry>) -> Self {
        Self { registry }
    }
}

impl SchemaResolver for LocalSchemaResolver {
    fn resolve(&self, id: &SchemaId) -> Result<Schema, SchemaError> {
        self.registry
            .get(id)
            .ok_or_else(|| SchemaError::NotFound(id.to_string()))
    }
}
