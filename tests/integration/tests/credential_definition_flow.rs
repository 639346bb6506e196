//! Integration test: Full credential definition lifecycle across crates.
//!
//! Tests the issuer-directory → schema-registry → definition-registry flow
//! using veridex-identity, veridex-schema, and veridex-registry together.

use std::sync::Arc;

use veridex_core::{CredentialDefinitionId, IssuerId, RegistryConfig, SchemaId};
use veridex_identity::{IssuerDirectory, LocalIssuerResolver};
use veridex_registry::{CredentialDefinition, CredentialDefinitionRegistry, RegistryError};
use veridex_schema::{LocalSchemaResolver, Schema, SchemaRegistry};

/// Helper: wire up a registry with one active issuer and one schema.
/// Returns the registry, the issuer directory, and the config.
fn create_registry() -> (
    CredentialDefinitionRegistry,
    Arc<IssuerDirectory>,
    RegistryConfig,
) {
    let directory = Arc::new(IssuerDirectory::new());
    directory.register(IssuerId::new("issuerA")).unwrap();

    let schemas = Arc::new(SchemaRegistry::new());
    schemas
        .register(Schema::new(
            SchemaId::new("schemaX"),
            "BasicIdentity",
            "1.0",
            vec!["first_name".into(), "last_name".into(), "birth_date".into()],
        ))
        .unwrap();

    let config = RegistryConfig::default();
    let registry = CredentialDefinitionRegistry::new(
        config.clone(),
        Arc::new(LocalIssuerResolver::new(Arc::clone(&directory))),
        Arc::new(LocalSchemaResolver::new(schemas)),
    );
    (registry, directory, config)
}

fn basic_identity_definition(config: &RegistryConfig) -> CredentialDefinition {
    CredentialDefinition::with_derived_id(
        IssuerId::new("issuerA"),
        SchemaId::new("schemaX"),
        "CL",
        "BasicIdentity",
        "{\"primary\":{\"n\":\"0x1\",\"s\":\"0x2\"}}",
        config,
    )
}

// =========================================================================
// Happy path: create then resolve
// =========================================================================

#[test]
fn test_create_and_resolve_round_trip() {
    let (registry, _directory, config) = create_registry();
    let definition = basic_identity_definition(&config);

    assert_eq!(
        definition.id.as_str(),
        "issuerA/anoncreds/v0/CLAIM_DEF/schemaX/BasicIdentity"
    );

    let before = chrono::Utc::now();
    let event = registry
        .create_credential_definition("issuerA", definition.clone())
        .expect("create should succeed");
    assert_eq!(event.id, definition.id);
    assert_eq!(event.created_by, "issuerA");

    // Resolve returns every field exactly as submitted, plus metadata.
    let entry = registry
        .resolve_credential_definition(&definition.id)
        .expect("resolve should succeed");
    assert_eq!(entry.definition, definition);
    assert_eq!(entry.metadata.created_by, "issuerA");
    assert!(entry.metadata.created >= before);
    assert!(entry.metadata.created <= chrono::Utc::now());
}

#[test]
fn test_entry_serializes_for_off_band_consumers() {
    let (registry, _directory, config) = create_registry();
    let definition = basic_identity_definition(&config);
    registry
        .create_credential_definition("issuerA", definition.clone())
        .unwrap();

    let entry = registry.resolve_credential_definition(&definition.id).unwrap();
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        json["definition"]["id"],
        "issuerA/anoncreds/v0/CLAIM_DEF/schemaX/BasicIdentity"
    );
    assert_eq!(json["definition"]["cred_def_type"], "CL");
}

// =========================================================================
// Uniqueness
// =========================================================================

#[test]
fn test_same_definition_created_twice() {
    let (registry, _directory, config) = create_registry();
    let definition = basic_identity_definition(&config);
    registry
        .create_credential_definition("issuerA", definition.clone())
        .unwrap();

    let err = registry
        .create_credential_definition("issuerA", definition.clone())
        .unwrap_err();
    match err {
        RegistryError::AlreadyExists(id) => {
            assert_eq!(id, "issuerA/anoncreds/v0/CLAIM_DEF/schemaX/BasicIdentity")
        }
        other => panic!("expected AlreadyExists, got {other:?}"),
    }

    // Stored record is byte-identical to the first create.
    let entry = registry.resolve_credential_definition(&definition.id).unwrap();
    assert_eq!(entry.definition, definition);
    assert_eq!(registry.count(), 1);
    assert_eq!(registry.events().len(), 1);
}

#[test]
fn test_same_issuer_and_schema_different_tags() {
    let (registry, _directory, config) = create_registry();
    for tag in ["BasicIdentity", "EmployeeBadge", "AlumniCard"] {
        let definition = CredentialDefinition::with_derived_id(
            IssuerId::new("issuerA"),
            SchemaId::new("schemaX"),
            "CL",
            tag,
            "payload",
            &config,
        );
        registry
            .create_credential_definition("issuerA", definition)
            .unwrap();
    }
    assert_eq!(registry.count(), 3);
}

// =========================================================================
// Referential gating
// =========================================================================

#[test]
fn test_schema_gating() {
    let (registry, _directory, config) = create_registry();
    // All other fields valid; only the schema reference dangles.
    let definition = CredentialDefinition::with_derived_id(
        IssuerId::new("issuerA"),
        SchemaId::new("unregistered"),
        "CL",
        "BasicIdentity",
        "payload",
        &config,
    );
    let err = registry
        .create_credential_definition("issuerA", definition)
        .unwrap_err();
    assert!(matches!(err, RegistryError::SchemaNotFound(id) if id == "unregistered"));
    assert_eq!(registry.count(), 0);
}

#[test]
fn test_issuer_not_found_and_deactivated_are_distinguishable() {
    let (registry, directory, config) = create_registry();

    let unknown = CredentialDefinition::with_derived_id(
        IssuerId::new("issuerB"),
        SchemaId::new("schemaX"),
        "CL",
        "tag",
        "payload",
        &config,
    );
    let err = registry
        .create_credential_definition("issuerB", unknown)
        .unwrap_err();
    assert!(matches!(err, RegistryError::IssuerNotFound(id) if id == "issuerB"));

    directory.deactivate(&IssuerId::new("issuerA")).unwrap();
    let err = registry
        .create_credential_definition("issuerA", basic_identity_definition(&config))
        .unwrap_err();
    assert!(matches!(err, RegistryError::IssuerDeactivated(id) if id == "issuerA"));
}

#[test]
fn test_checks_are_point_in_time() {
    let (registry, directory, config) = create_registry();
    let definition = basic_identity_definition(&config);
    registry
        .create_credential_definition("issuerA", definition.clone())
        .unwrap();

    // Deactivating the issuer afterwards does not retroactively invalidate
    // the committed definition.
    directory.deactivate(&IssuerId::new("issuerA")).unwrap();
    let entry = registry.resolve_credential_definition(&definition.id).unwrap();
    assert_eq!(entry.definition, definition);

    // Reactivation lets the issuer create again under a new tag.
    directory.reactivate(&IssuerId::new("issuerA")).unwrap();
    let second = CredentialDefinition::with_derived_id(
        IssuerId::new("issuerA"),
        SchemaId::new("schemaX"),
        "CL",
        "SecondTag",
        "payload",
        &config,
    );
    assert!(registry
        .create_credential_definition("issuerA", second)
        .is_ok());
}

// =========================================================================
// Structural validation
// =========================================================================

#[test]
fn test_unsupported_type_rejected() {
    let (registry, _directory, config) = create_registry();
    let mut definition = basic_identity_definition(&config);
    definition.cred_def_type = "CL2".into();
    let err = registry
        .create_credential_definition("issuerA", definition)
        .unwrap_err();
    assert!(matches!(err, RegistryError::UnsupportedType(t) if t == "CL2"));
}

#[test]
fn test_empty_tag_rejected() {
    let (registry, _directory, config) = create_registry();
    let definition = CredentialDefinition::with_derived_id(
        IssuerId::new("issuerA"),
        SchemaId::new("schemaX"),
        "CL",
        "",
        "payload",
        &config,
    );
    let err = registry
        .create_credential_definition("issuerA", definition)
        .unwrap_err();
    assert!(matches!(err, RegistryError::MissingRequiredField(f) if f == "tag"));
}

#[test]
fn test_identifier_error_wins_over_tag_error() {
    let (registry, _directory, config) = create_registry();
    let mut definition = basic_identity_definition(&config);
    definition.id = CredentialDefinitionId::new("mismatched/anoncreds/v0/CLAIM_DEF/schemaX/x");
    definition.tag = String::new();
    let err = registry
        .create_credential_definition("issuerA", definition)
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidIdentifier(_)));
}

// =========================================================================
// Resolve is total over absent ids
// =========================================================================

#[test]
fn test_resolve_never_returns_default_record() {
    let (registry, _directory, config) = create_registry();
    for tag in ["never", "created", "anywhere"] {
        let id = CredentialDefinitionId::derive(
            &IssuerId::new("issuerA"),
            &SchemaId::new("schemaX"),
            tag,
            &config,
        );
        let err = registry.resolve_credential_definition(&id).unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(s) if s == id.as_str()));
    }
}
