/// Schema collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("schema not found: {0}")]
    NotFound(String),

    #[error("schema already registered: {0}")]
    AlreadyRegistered(String),

    #[error("invalid schema: {0}")]
    InvalidSchema(String),
}
