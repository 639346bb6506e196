//! Veridex Core — Fundamental types, configuration, and errors for the
//! Veridex credential definition registry.
//!
//! Provides:
//! - Issuer and schema identifiers
//! - The composite credential definition identifier and its grammar
//! - Registry configuration (namespace segments, supported definition types)

pub mod config;
pub mod error;
pub mod types;

pub use config::RegistryConfig;
pub use error::CoreError;
pub use types::{CredentialDefinitionId, IssuerId, SchemaId};
