use serde::{Deserialize, Serialize};

use veridex_core::SchemaId;

/// A credential schema: the named attribute set a credential definition is
/// based on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Unique schema identifier.
    pub id: SchemaId,
    /// Human-readable name.
    pub name: String,
    /// Schema version.
    pub version: String,
    /// Attribute names credentials of this schema carry.
    pub attr_names: Vec<String>,
}

impl Schema {
    /// Create a new schema.
    pub fn new(
        id: SchemaId,
        name: impl Into<String>,
        version: impl Into<String>,
        attr_names: Vec<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            version: version.into(),
            attr_names,
        }
    }
}
