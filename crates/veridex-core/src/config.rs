use serde::{Deserialize, Serialize};

/// Configuration for a credential definition registry instance.
///
/// The namespace and definition marker are segments of the composite
/// credential definition identifier; the supported types list gates which
/// `cred_def_type` values the registry accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Namespace segment of credential definition identifiers.
    pub namespace: String,
    /// Marker segment identifying the record kind within the namespace.
    pub definition_marker: String,
    /// Accepted values for a definition's `cred_def_type` field.
    pub supported_types: Vec<String>,
}

impl RegistryConfig {
    /// Whether a `cred_def_type` value is accepted by this registry.
    pub fn supports_type(&self, cred_def_type: &str) -> bool {
        self.supported_types.iter().any(|t| t == cred_def_type)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            namespace: "anoncreds/v0".into(),
            definition_marker: "CLAIM_DEF".into(),
            supported_types: vec!["CL".into()],
        }
    }
}
