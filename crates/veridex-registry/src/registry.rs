use std::sync::{Arc, RwLock};
use uuid::Uuid;

use veridex_core::{CredentialDefinitionId, IssuerId, RegistryConfig, SchemaId};
use veridex_identity::{IdentityError, IssuerResolver};
use veridex_schema::{SchemaError, SchemaResolver};

use crate::definition::{
    CredentialDefinition, CredentialDefinitionCreated, CredentialDefinitionEntry,
};
use crate::error::RegistryError;
use crate::store::CredentialDefinitionStore;
use crate::validation;

/// Facade over the credential definition store and its two collaborators.
///
/// Constructed once with immutable handles to the issuer and schema
/// resolvers; all referential checks go through those handles. The create
/// pipeline is a fixed chain of checks, each short-circuiting with its
/// specific error:
///
/// 1. uniqueness against the store
/// 2. schema existence via the schema resolver
/// 3. issuer status via the issuer resolver
/// 4. structural field validation (id, type, tag, value)
/// 5. commit and event emission
///
/// The commit is the pipeline's only mutation, so a rejection at any stage
/// leaves the store untouched.
pub struct CredentialDefinitionRegistry {
    config: RegistryConfig,
    store: CredentialDefinitionStore,
    issuers: Arc<dyn IssuerResolver>,
    schemas: Arc<dyn SchemaResolver>,
    events: RwLock<Vec<CredentialDefinitionCreated>>,
}

impl CredentialDefinitionRegistry {
    /// Create a registry wired to its collaborators.
    pub fn new(
        config: RegistryConfig,
        issuers: Arc<dyn IssuerResolver>,
        schemas: Arc<dyn SchemaResolver>,
    ) -> Self {
        Self {
            config,
            store: CredentialDefinitionStore::new(),
            issuers,
            schemas,
            events: RwLock::new(Vec::new()),
        }
    }

    /// Get the registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Create a credential definition.
    ///
    /// Runs the ordered check pipeline and commits only if every check
    /// passes. Returns the creation event on success; any failure is
    /// terminal and leaves no partial state.
    pub fn create_credential_definition(
        &self,
        created_by: &str,
        definition: CredentialDefinition,
    ) -> Result<CredentialDefinitionCreated, RegistryError> {
        self.check_unique(&definition.id)?;
        self.check_schema(&definition.schema_id)?;
        self.check_issuer(&definition.issuer_id)?;
        validation::validate_fields(&definition, &self.config)?;

        // Sole mutation of the pipeline. The insert re-checks uniqueness
        // atomically, closing the race between check_unique and commit.
        let entry = self.store.insert(definition, created_by)?;

        let event = CredentialDefinitionCreated {
            event_id: Uuid::new_v4(),
            id: entry.definition.id.clone(),
            created_by: created_by.to_string(),
        };
        if let Ok(mut events) = self.events.write() {
            events.push(event.clone());
        }
        tracing::info!(
            id = %event.id,
            created_by = created_by,
            "credential definition created"
        );
        Ok(event)
    }

    /// Resolve a credential definition by id, returning the record and its
    /// creation metadata.
    pub fn resolve_credential_definition(
        &self,
        id: &CredentialDefinitionId,
    ) -> Result<CredentialDefinitionEntry, RegistryError> {
        let entry = self.store.get(id);
        if entry.is_err() {
            tracing::debug!(id = %id, "credential definition not found");
        }
        entry
    }

    /// Resolve from a raw identifier string, rejecting strings that cannot
    /// be a credential definition id before touching the store.
    pub fn resolve_credential_definition_str(
        &self,
        id: &str,
    ) -> Result<CredentialDefinitionEntry, RegistryError> {
        let id = CredentialDefinitionId::parse(id)
            .map_err(|_| RegistryError::InvalidIdentifier(id.to_string()))?;
        self.resolve_credential_definition(&id)
    }

    /// Snapshot of all creation events emitted so far, oldest first.
    pub fn events(&self) -> Vec<CredentialDefinitionCreated> {
        self.events.read().map(|e| e.clone()).unwrap_or_default()
    }

    /// Number of committed credential definitions.
    pub fn count(&self) -> usize {
        self.store.count()
    }

    fn check_unique(&self, id: &CredentialDefinitionId) -> Result<(), RegistryError> {
        if self.store.exists(id) {
            tracing::warn!(id = %id, "rejected: credential definition already exists");
            return Err(RegistryError::AlreadyExists(id.to_string()));
        }
        Ok(())
    }

    fn check_schema(&self, schema_id: &SchemaId) -> Result<(), RegistryError> {
        match self.schemas.resolve(schema_id) {
            Ok(_) => Ok(()),
            Err(SchemaError::NotFound(id)) => Err(RegistryError::SchemaNotFound(id)),
            // Unrecognized collaborator failures pass through verbatim.
            Err(other) => Err(RegistryError::Resolver(other.to_string())),
        }
    }

    fn check_issuer(&self, issuer_id: &IssuerId) -> Result<(), RegistryError> {
        match self.issuers.resolve(issuer_id) {
            Ok(record) if record.is_active() => Ok(()),
            Ok(_) => Err(RegistryError::IssuerDeactivated(issuer_id.to_string())),
            Err(IdentityError::NotFound(id)) => Err(RegistryError::IssuerNotFound(id)),
            // Unrecognized collaborator failures pass through verbatim.
            Err(other) => Err(RegistryError::Resolver(other.to_string())),
        }
    }
}
