use dashmap::DashMap;

use veridex_core::SchemaId;

use crate::error::SchemaError;
use crate::schema::Schema;

/// In-memory, append-only registry of credential schemas.
///
/// Schemas are immutable once registered; there is no update or delete.
pub struct SchemaRegistry {
    schemas: DashMap<SchemaId, Schema>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            schemas: DashMap::new(),
        }
    }

    /// Register a schema. Fails if the id is taken or the schema has no
    /// attributes.
    pub fn register(&self, schema: Schema) -> Result<(), SchemaError> {
        if schema.attr_names.is_empty() {
            return Err(SchemaError::InvalidSchema(
                "schema must have at least one attribute".into(),
            ));
        }
        if self.schemas.contains_key(&schema.id) {
            return Err(SchemaError::AlreadyRegistered(schema.id.to_string()));
        }
        let id = schema.id.clone();
        self.schemas.insert(id.clone(), schema);
        tracing::info!(schema = %id, "schema registered");
        Ok(())
    }

    /// Get a schema by id.
    pub fn get(&self, id: &SchemaId) -> Option<Schema> {
        self.schemas.get(id).map(|e| e.clone())
    }

    /// List all registered schema ids.
    pub fn list(&self) -> Vec<SchemaId> {
        self.schemas.iter().map(|e| e.key().clone()).collect()
    }

    /// Number of registered schemas.
    pub fn count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
