//! Veridex Identity Layer
//!
//! The issuer-side collaborator of the credential definition registry:
//! - Issuer records with active/deactivated status
//! - An in-memory issuer directory with a register/deactivate lifecycle
//! - The `IssuerResolver` contract the registry consumes

pub mod directory;
pub mod error;
pub mod record;
pub mod resolver;

pub use directory::IssuerDirectory;
pub use error::IdentityError;
pub use record::{IssuerRecord, IssuerStatus};
pub use resolver::{IssuerResolver, LocalIssuerResolver};
