use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use veridex_core::CredentialDefinitionId;

use crate::definition::{
    CredentialDefinition, CredentialDefinitionEntry, CredentialDefinitionMetadata,
};
use crate::error::RegistryError;

/// Exclusive owner of the identifier → credential definition mapping.
///
/// The store is append-only: entries are inserted at most once and never
/// updated or removed. Presence of an entry is the sole existence witness.
pub struct CredentialDefinitionStore {
    entries: DashMap<CredentialDefinitionId, CredentialDefinitionEntry>,
}

impl CredentialDefinitionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Whether a definition with this id has been committed.
    pub fn exists(&self, id: &CredentialDefinitionId) -> bool {
        self.entries.contains_key(id)
    }

    /// Commit a definition, stamping its creation metadata.
    ///
    /// Insert-if-absent runs atomically on the id's shard, so two
    /// concurrent creates for one id cannot both commit even when both
    /// passed the facade's earlier uniqueness check.
    pub fn insert(
        &self,
        definition: CredentialDefinition,
        created_by: &str,
    ) -> Result<CredentialDefinitionEntry, RegistryError> {
        match self.entries.entry(definition.id.clone()) {
            Entry::Occupied(_) => Err(RegistryError::AlreadyExists(definition.id.to_string())),
            Entry::Vacant(slot) => {
                let entry = CredentialDefinitionEntry {
                    definition,
                    metadata: CredentialDefinitionMetadata {
                        created: Utc::now(),
                        created_by: created_by.to_string(),
                    },
                };
                slot.insert(entry.clone());
                Ok(entry)
            }
        }
    }

    /// Get a committed definition with its metadata.
    pub fn get(
        &self,
        id: &CredentialDefinitionId,
    ) -> Result<CredentialDefinitionEntry, RegistryError> {
        self.entries
            .get(id)
            .map(|e| e.clone())
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Number of committed definitions.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for CredentialDefinitionStore {
    fn default() -> Self {
        Self::new()
    }
}
