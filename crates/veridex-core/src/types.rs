use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::RegistryConfig;
use crate::error::CoreError;

/// Identifier of an issuer identity record.
///
/// Owned by the issuer directory collaborator; the registry treats it as an
/// opaque foreign reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssuerId(pub String);

impl IssuerId {
    /// Create a new issuer identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the issuer ID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssuerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a credential schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaId(pub String);

impl SchemaId {
    /// Create a new schema identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the schema ID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Composite identifier of a credential definition.
///
/// Grammar: `<issuer_id>/<namespace>/<marker>/<schema_id>/<tag>`, e.g.
/// `issuerA/anoncreds/v0/CLAIM_DEF/schemaX/BasicIdentity`. The identifier is
/// fully re-derivable from a definition's own fields, so two definitions
/// with identical semantic content always carry the identical id string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CredentialDefinitionId(pub String);

impl CredentialDefinitionId {
    /// Wrap an existing identifier string without validating it.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the canonical identifier for a definition's fields under the
    /// given registry configuration.
    pub fn derive(issuer: &IssuerId, schema: &SchemaId, tag: &str, config: &RegistryConfig) -> Self {
        Self(format!(
            "{}/{}/{}/{}/{}",
            issuer, config.namespace, config.definition_marker, schema, tag
        ))
    }

    /// Parse an identifier string, checking structural well-formedness only:
    /// at least five non-empty `/`-separated segments. Segment semantics are
    /// checked by the registry against the definition's own fields.
    pub fn parse(id: &str) -> Result<Self, CoreError> {
        let segments: Vec<&str> = id.split('/').collect();
        if segments.len() < 5 || segments.iter().any(|s| s.is_empty()) {
            return Err(CoreError::InvalidIdentifier(id.to_string()));
        }
        Ok(Self(id.to_string()))
    }

    /// Get the full identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First segment of the identifier (the issuer id, when well-formed).
    pub fn issuer_segment(&self) -> Option<&str> {
        self.0.split('/').next()
    }

    /// Last segment of the identifier (the tag, when well-formed).
    pub fn tag_segment(&self) -> Option<&str> {
        self.0.rsplit('/').next()
    }
}

impl fmt::Display for CredentialDefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
