use std::sync::Arc;

use veridex_core::IssuerId;

use crate::directory::IssuerDirectory;
use crate::error::IdentityError;
use crate::record::IssuerRecord;

/// Contract consumed by the registry: resolve an issuer id to its record.
///
/// Resolution is synchronous and in-process; the only structured failure is
/// [`IdentityError::NotFound`]. A resolved record still carries its status,
/// which the caller inspects separately.
pub trait IssuerResolver: Send + Sync {
    /// Resolve an issuer id to its identity record.
    fn resolve(&self, id: &IssuerId) -> Result<IssuerRecord, IdentityError>;
}

/// Resolves issuers from the local in-memory [`IssuerDirectory`].
pub struct LocalIssuerResolver {
    directory: Arc<IssuerDirectory>,
}

impl LocalIssuerResolver {
    /// Create a new local resolver backed by an issuer directory.
    pub fn new(directory: Arc<IssuerDirectory>) -> Self {
        Self { directory }
    }
}

impl IssuerResolver for LocalIssuerResolver {
    fn resolve(&self, id: &IssuerId) -> Result<IssuerRecord, IdentityError> {
        self.directory
            .get(id)
            .ok_or_else(|| IdentityError::NotFound(id.to_string()))
    }
}
