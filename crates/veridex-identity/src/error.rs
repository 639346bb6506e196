/// Identity collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("issuer not found: {0}")]
    NotFound(String),

    #[error("issuer already registered: {0}")]
    AlreadyRegistered(String),

    #[error("issuer already deactivated: {0}")]
    AlreadyDeactivated(String),
}
