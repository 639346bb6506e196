/// Registry errors.
///
/// Every failure is terminal and synchronous; nothing is retried or
/// recovered internally, and a rejected create leaves the store untouched.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("credential definition already exists: {0}")]
    AlreadyExists(String),

    #[error("credential definition not found: {0}")]
    NotFound(String),

    #[error("schema not found: {0}")]
    SchemaNotFound(String),

    #[error("issuer not found: {0}")]
    IssuerNotFound(String),

    #[error("issuer deactivated: {0}")]
    IssuerDeactivated(String),

    #[error("invalid credential definition identifier: {0}")]
    InvalidIdentifier(String),

    #[error("unsupported credential definition type: {0}")]
    UnsupportedType(String),

    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    /// Unrecognized collaborator failure, passed through verbatim.
    #[error("resolver failure: {0}")]
    Resolver(String),
}
