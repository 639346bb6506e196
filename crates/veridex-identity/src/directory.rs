use chrono::Utc;
use dashmap::DashMap;

use veridex_core::IssuerId;

use crate::error::IdentityError;
use crate::record::{IssuerRecord, IssuerStatus};

/// In-memory directory of issuer identity records.
///
/// Owns the issuer id → record mapping and the activate/deactivate
/// lifecycle. The registry never talks to the directory directly; it goes
/// through an [`crate::resolver::IssuerResolver`].
pub struct IssuerDirectory {
    issuers: DashMap<IssuerId, IssuerRecord>,
}

impl IssuerDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            issuers: DashMap::new(),
        }
    }

    /// Register a new active issuer.
    pub fn register(&self, id: IssuerId) -> Result<IssuerRecord, IdentityError> {
        if self.issuers.contains_key(&id) {
            return Err(IdentityError::AlreadyRegistered(id.to_string()));
        }
        let record = IssuerRecord {
            id: id.clone(),
            status: IssuerStatus::Active,
            registered: Utc::now(),
        };
        self.issuers.insert(id.clone(), record.clone());
        tracing::info!(issuer = %id, "issuer registered");
        Ok(record)
    }

    /// Deactivate an issuer. Deactivation does not affect credential
    /// definitions the issuer already created.
    pub fn deactivate(&self, id: &IssuerId) -> Result<(), IdentityError> {
        let mut record = self
            .issuers
            .get_mut(id)
            .ok_or_else(|| IdentityError::NotFound(id.to_string()))?;
        if record.status == IssuerStatus::Deactivated {
            return Err(IdentityError::AlreadyDeactivated(id.to_string()));
        }
        record.status = IssuerStatus::Deactivated;
        tracing::info!(issuer = %id, "issuer deactivated");
        Ok(())
    }

    /// Reactivate a deactivated issuer.
    pub fn reactivate(&self, id: &IssuerId) -> Result<(), IdentityError> {
        let mut record = self
            .issuers
            .get_mut(id)
            .ok_or_else(|| IdentityError::NotFound(id.to_string()))?;
        record.status = IssuerStatus::Active;
        tracing::info!(issuer = %id, "issuer reactivated");
        Ok(())
    }

    /// Get an issuer record by id.
    pub fn get(&self, id: &IssuerId) -> Option<IssuerRecord> {
        self.issuers.get(id).map(|e| e.clone())
    }

    /// Number of registered issuers.
    pub fn count(&self) -> usize {
        self.issuers.len()
    }
}

impl Default for IssuerDirectory {
    fn default() -> Self {
        Self::new()
    }
}
