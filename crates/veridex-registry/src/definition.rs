use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use veridex_core::{CredentialDefinitionId, IssuerId, RegistryConfig, SchemaId};

/// An immutable credential definition record.
///
/// Binds a schema, an issuer, and the opaque scheme payload (`value`) used
/// to issue credentials of that schema. All fields are fixed once the record
/// is accepted by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialDefinition {
    /// Globally unique composite identifier.
    pub id: CredentialDefinitionId,
    /// Foreign reference to the issuer identity record.
    pub issuer_id: IssuerId,
    /// Foreign reference to the schema record.
    pub schema_id: SchemaId,
    /// Signature scheme of the definition; only configured types are
    /// accepted.
    pub cred_def_type: String,
    /// Distinguishes multiple definitions by one issuer over one schema.
    pub tag: String,
    /// Opaque serialized scheme payload.
    pub value: String,
}

impl CredentialDefinition {
    /// Create a definition with an explicit identifier.
    pub fn new(
        id: CredentialDefinitionId,
        issuer_id: IssuerId,
        schema_id: SchemaId,
        cred_def_type: impl Into<String>,
        tag: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id,
            issuer_id,
            schema_id,
            cred_def_type: cred_def_type.into(),
            tag: tag.into(),
            value: value.into(),
        }
    }

    /// Create a definition whose identifier is derived canonically from its
    /// own fields under the given configuration.
    pub fn with_derived_id(
        issuer_id: IssuerId,
        schema_id: SchemaId,
        cred_def_type: impl Into<String>,
        tag: impl Into<String>,
        value: impl Into<String>,
        config: &RegistryConfig,
    ) -> Self {
        let tag = tag.into();
        let id = CredentialDefinitionId::derive(&issuer_id, &schema_id, &tag, config);
        Self {
            id,
            issuer_id,
            schema_id,
            cred_def_type: cred_def_type.into(),
            tag,
            value: value.into(),
        }
    }
}

/// Metadata stamped by the store at creation time.
///
/// Presence of an entry in the store is the sole existence witness; there is
/// no sentinel timestamp value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialDefinitionMetadata {
    /// When the definition was committed.
    pub created: DateTime<Utc>,
    /// Identity of the caller that performed the creation.
    pub created_by: String,
}

/// A stored credential definition together with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialDefinitionEntry {
    /// The record as submitted.
    pub definition: CredentialDefinition,
    /// Creation metadata.
    pub metadata: CredentialDefinitionMetadata,
}

/// Event emitted for each successful creation, intended for off-band
/// indexing and audit rather than control flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialDefinitionCreated {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Identifier of the new credential definition.
    pub id: CredentialDefinitionId,
    /// Identity of the caller that performed the creation.
    pub created_by: String,
}

impl fmt::Display for CredentialDefinitionCreated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} created by {}", self.id, self.created_by)
    }
}
