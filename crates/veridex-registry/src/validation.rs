//! Structural validation of candidate credential definitions.
//!
//! Pure, side-effect-free checks run strictly in order
//! id → type → tag → value; the first failing check determines the reported
//! error.

use veridex_core::{CredentialDefinitionId, RegistryConfig};

use crate::definition::CredentialDefinition;
use crate::error::RegistryError;

/// The candidate's id must equal the id re-derived from the candidate's own
/// fields. Equality with the canonical derivation subsumes any grammar
/// check: an id that matches is by construction well-formed.
pub fn require_valid_id(
    candidate: &CredentialDefinition,
    config: &RegistryConfig,
) -> Result<(), RegistryError> {
    let derived = CredentialDefinitionId::derive(
        &candidate.issuer_id,
        &candidate.schema_id,
        &candidate.tag,
        config,
    );
    if candidate.id != derived {
        return Err(RegistryError::InvalidIdentifier(candidate.id.to_string()));
    }
    Ok(())
}

/// The candidate's type must be one the registry is configured to accept.
pub fn require_valid_type(
    candidate: &CredentialDefinition,
    config: &RegistryConfig,
) -> Result<(), RegistryError> {
    if !config.supports_type(&candidate.cred_def_type) {
        return Err(RegistryError::UnsupportedType(
            candidate.cred_def_type.clone(),
        ));
    }
    Ok(())
}

/// The tag must be non-empty.
pub fn require_tag(candidate: &CredentialDefinition) -> Result<(), RegistryError> {
    if candidate.tag.is_empty() {
        return Err(RegistryError::MissingRequiredField("tag".into()));
    }
    Ok(())
}

/// The value payload must be non-empty.
pub fn require_value(candidate: &CredentialDefinition) -> Result<(), RegistryError> {
    if candidate.value.is_empty() {
        return Err(RegistryError::MissingRequiredField("value".into()));
    }
    Ok(())
}

/// Run all structural checks in their fixed order.
pub fn validate_fields(
    candidate: &CredentialDefinition,
    config: &RegistryConfig,
) -> Result<(), RegistryError> {
    require_valid_id(candidate, config)?;
    require_valid_type(candidate, config)?;
    require_tag(candidate)?;
    require_value(candidate)?;
    Ok(())
}
