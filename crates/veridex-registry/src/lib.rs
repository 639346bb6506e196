//! Veridex Registry — The credential definition registry core.
//!
//! Stores immutable credential definition records keyed by a composite
//! identifier and guarantees, at creation time, that every record references
//! an existing schema and an existing, currently-active issuer. Records are
//! append-only: there is no update or delete operation.
//!
//! The create pipeline runs strictly ordered checks (uniqueness, schema
//! existence, issuer status, field validation) and commits only when every
//! check passes; any failure aborts with a specific error and zero state
//! change.

pub mod definition;
pub mod error;
pub mod registry;
pub mod store;
pub mod validation;

pub use definition::{
    CredentialDefinition, CredentialDefinitionCreated, CredentialDefinitionEntry,
    CredentialDefinitionMetadata,
};
pub use error::RegistryError;
pub use registry::CredentialDefinitionRegistry;
pub use store::CredentialDefinitionStore;
